use std::time::Duration;

pub const APP_ID: &str = env!("APP_ID");
pub const APP_NAME: &str = env!("APP_NAME");
pub const APP_VERSION: &str = env!("APP_VERSION");
pub const APP_TITLE: &str = env!("APP_TITLE");
pub const APP_STYLE: &str = include_str!("style.css");

pub const USER_AGENT: &str = concat!("tokoku/", env!("APP_VERSION"));

/// Public demo catalog. Prices arrive in USD and are converted on display.
pub const CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// Shared page fragments served next to the other storefront assets.
pub const HEADER_FRAGMENT_URL: &str = "https://assets.tokoku.web.id/fragments/header.ui";
pub const FOOTER_FRAGMENT_URL: &str = "https://assets.tokoku.web.id/fragments/footer.ui";

pub const MAP_TILE_BASE_URL: &str = "https://tile.openstreetmap.org";

pub const RUPIAH_PER_UNIT: f64 = 15000.0;

pub const STORE_LATITUDE: f64 = -6.2088;
pub const STORE_LONGITUDE: f64 = 106.8456;
pub const MAP_ZOOM: u32 = 15;

pub const LOADER_HIDE_DELAY: Duration = Duration::from_millis(1000);
pub const LOADER_REMOVE_DELAY: Duration = Duration::from_millis(500);
pub const MAP_INIT_DELAY: Duration = Duration::from_millis(1000);
pub const MAP_RETRY_DELAY: Duration = Duration::from_millis(500);
pub const FILTER_REVEAL_DELAY: Duration = Duration::from_millis(50);
pub const FILTER_HIDE_DELAY: Duration = Duration::from_millis(300);

/// The tile fetch retries instead of polling forever like the old page did.
pub const MAP_MAX_ATTEMPTS: u32 = 8;

pub const TOAST_TIMEOUT_SECONDS: u32 = 3;
pub const TOAST_TITLE_LIMIT: usize = 20;

pub const QUANTITY_MIN: u32 = 1;
pub const QUANTITY_MAX: u32 = 10;
