use crate::prelude::*;
use crate::constants;
use crate::net;

use gtk::gio;

/// Mini-map for the footer fragment: the OpenStreetMap tile around the store
/// with a marker and popup. Tile fetches retry on a fixed delay up to a
/// bounded attempt budget; after that (or on a decode failure) the container
/// shows the textual location fallback.
pub struct MapWidget;

impl MapWidget {

    pub fn initialize(container: &adw::Bin) {
        Self::attempt(container.clone(), 1);
    }

    fn attempt(container: adw::Bin, attempt: u32) {
        glib::spawn_future_local(async move {
            let outcome = gio::spawn_blocking(net::fetch_store_tile).await;

            let bytes = match outcome {
                Ok(Ok(bytes)) => bytes,
                Ok(Err(error)) => {
                    if attempt < constants::MAP_MAX_ATTEMPTS {
                        tracing::warn!("map tile attempt {attempt} failed, retrying: {error}");
                        Self::schedule_retry(&container, attempt);
                    } else {
                        tracing::warn!("map tile unavailable after {attempt} attempts: {error}");
                        Self::show_fallback(&container);
                    }
                    return;
                }
                Err(_) => {
                    tracing::error!("map tile worker aborted");
                    Self::show_fallback(&container);
                    return;
                }
            };

            match Self::build_map(&bytes) {
                Ok(map) => {
                    container.set_child(Some(&map));
                    tracing::info!("footer map initialized");
                }
                Err(error) => {
                    tracing::warn!("map construction failed: {error}");
                    Self::show_fallback(&container);
                }
            }
        });
    }

    fn schedule_retry(container: &adw::Bin, attempt: u32) {
        let container_weak = container.downgrade();
        glib::timeout_add_local_once(constants::MAP_RETRY_DELAY, move || {
            if let Some(container) = container_weak.upgrade() {
                Self::attempt(container, attempt + 1);
            }
        });
    }

    fn build_map(tile_bytes: &[u8]) -> Result<gtk::Overlay> {
        let texture = gtk::gdk::Texture::from_bytes(&glib::Bytes::from_owned(tile_bytes.to_vec()))
            .context("tile bytes are not a decodable image")?;

        let picture = gtk::Picture::builder()
            .content_fit(gtk::ContentFit::Cover)
            .height_request(180)
            .build();
        picture.set_paintable(Some(&texture));

        let marker = gtk::Image::builder()
            .icon_name("mark-location-symbolic")
            .pixel_size(28)
            .build();

        let popup = gtk::Label::builder()
            .label("TokoKu Store · Jakarta Pusat")
            .css_classes(["map-popup"])
            .build();

        let pin = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(4)
            .halign(gtk::Align::Center)
            .valign(gtk::Align::Center)
            .build();
        pin.append(&popup);
        pin.append(&marker);

        let overlay = gtk::Overlay::new();
        overlay.set_child(Some(&picture));
        overlay.add_overlay(&pin);
        Ok(overlay)
    }

    fn show_fallback(container: &adw::Bin) {
        let marker = gtk::Image::builder()
            .icon_name("mark-location-symbolic")
            .pixel_size(28)
            .build();

        let name = gtk::Label::builder()
            .label("Lokasi TokoKu")
            .css_classes(["heading"])
            .build();

        let address = gtk::Label::builder()
            .label("Jl. Contoh No. 123, Jakarta")
            .css_classes(["dim-label"])
            .build();

        let fallback = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(6)
            .halign(gtk::Align::Center)
            .valign(gtk::Align::Center)
            .margin_top(24)
            .margin_bottom(24)
            .build();
        fallback.append(&marker);
        fallback.append(&name);
        fallback.append(&address);

        container.set_child(Some(&fallback));
    }

}
