use serde::de::DeserializeOwned;
use thiserror::Error;

use super::constants;
use super::models::Product;

/// Failures of the storefront's remote calls. Transport problems and non-2xx
/// answers are distinct so callers can log them apart; both end up in the
/// same local recovery path (banner or fallback markup).
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("{url} answered with HTTP status {status}")]
    Status { url: String, status: i32 },
}

impl FetchError {
    fn network(url: &str, error: &minreq::Error) -> Self {
        Self::Network {
            url: url.to_string(),
            reason: error.to_string(),
        }
    }
}

pub struct HttpClient;

impl HttpClient {
    fn send_request(url: &str) -> Result<minreq::Response, FetchError> {
        let response = minreq::get(url)
            .with_header("User-Agent", constants::USER_AGENT)
            .send()
            .map_err(|error| FetchError::network(url, &error))?;

        if (200..300).contains(&response.status_code) {
            Ok(response)
        } else {
            Err(FetchError::Status {
                url: url.to_string(),
                status: response.status_code,
            })
        }
    }

    pub fn fetch_text(url: &str) -> Result<String, FetchError> {
        let response = Self::send_request(url)?;
        response
            .as_str()
            .map(|text| text.to_string())
            .map_err(|error| FetchError::network(url, &error))
    }

    pub fn fetch_bytes(url: &str) -> Result<Vec<u8>, FetchError> {
        Ok(Self::send_request(url)?.as_bytes().to_vec())
    }

    pub fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
        let response = Self::send_request(url)?;
        response
            .json()
            .map_err(|error| FetchError::network(url, &error))
    }
}

pub fn fetch_catalog() -> Result<Vec<Product>, FetchError> {
    HttpClient::fetch_json(constants::CATALOG_URL)
}

pub fn fetch_fragment(url: &str) -> Result<String, FetchError> {
    HttpClient::fetch_text(url)
}

pub fn fetch_store_tile() -> Result<Vec<u8>, FetchError> {
    let (x, y) = tile_coordinates(
        constants::STORE_LATITUDE,
        constants::STORE_LONGITUDE,
        constants::MAP_ZOOM,
    );
    let url = format!(
        "{base}/{zoom}/{x}/{y}.png",
        base = constants::MAP_TILE_BASE_URL,
        zoom = constants::MAP_ZOOM,
    );
    HttpClient::fetch_bytes(&url)
}

/// Slippy-map tile numbering for a WGS84 coordinate.
pub fn tile_coordinates(latitude: f64, longitude: f64, zoom: u32) -> (u32, u32) {
    let tiles = f64::from(1u32 << zoom);
    let x = (longitude + 180.0) / 360.0 * tiles;
    let latitude_rad = latitude.to_radians();
    let y = (1.0 - latitude_rad.tan().asinh() / std::f64::consts::PI) / 2.0 * tiles;

    (x.floor() as u32, y.floor() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// One-shot loopback HTTP server answering every request with `response`.
    fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut request = [0u8; 1024];
                let _ = stream.read(&mut request);
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{address}/products")
    }

    #[test]
    fn non_success_status_becomes_a_status_error() {
        let url = serve_once(
            "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
                .to_string(),
        );

        match HttpClient::fetch_text(&url) {
            Err(FetchError::Status { status, .. }) => assert_eq!(status, 500),
            other => panic!("expected a status error, got {other:?}"),
        }
    }

    #[test]
    fn successful_catalog_body_parses_into_products() {
        let body = r#"[{"id":9,"title":"Tas","price":2.0,"description":"d","category":"bags","image":"http://img","rating":{"rate":4.5,"count":3}}]"#;
        let url = serve_once(format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        ));

        let products: Vec<Product> = HttpClient::fetch_json(&url).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, 9);
        assert_eq!(products[0].category, "bags");
    }

    #[test]
    fn refused_connection_becomes_a_network_error() {
        // Port reserved then dropped, so nothing listens on it.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        match HttpClient::fetch_text(&format!("http://{address}/")) {
            Err(FetchError::Network { .. }) => {}
            other => panic!("expected a network error, got {other:?}"),
        }
    }

    #[test]
    fn store_coordinate_maps_to_the_jakarta_tile() {
        let (x, y) = tile_coordinates(-6.2088, 106.8456, 15);
        assert_eq!((x, y), (26109, 16950));
    }

    #[test]
    fn tile_origin_is_top_left() {
        assert_eq!(tile_coordinates(85.0511, -180.0, 0), (0, 0));
        assert_eq!(tile_coordinates(0.0, 0.0, 1), (1, 1));
    }
}
