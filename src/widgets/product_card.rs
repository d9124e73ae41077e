use crate::prelude::*;
use crate::format;
use crate::models::Product;

use gtk::gio;

/// One grid card: image with favorite toggle, category pill, full title,
/// star strip, converted price and the add-to-cart control.
pub struct ProductCard {
    child: gtk::FlowBoxChild,
    add_button: gtk::Button,
    picture: gtk::Picture,
}

impl ProductCard {

    pub fn from_product(product: &Product) -> Self {
        let picture = gtk::Picture::builder()
            .content_fit(gtk::ContentFit::Contain)
            .height_request(190)
            .build();

        let favorite = gtk::ToggleButton::builder()
            .icon_name("emblem-favorite-symbolic")
            .css_classes(["circular", "favorite", "osd"])
            .halign(gtk::Align::End)
            .valign(gtk::Align::Start)
            .margin_top(8)
            .margin_end(8)
            .build();

        let image_overlay = gtk::Overlay::new();
        image_overlay.set_child(Some(&picture));
        image_overlay.add_overlay(&favorite);

        let category = gtk::Label::builder()
            .label(&product.category)
            .css_classes(["category-pill"])
            .halign(gtk::Align::Start)
            .build();

        let title = gtk::Label::builder()
            .label(&product.title)
            .css_classes(["heading"])
            .wrap(true)
            .xalign(0.0)
            .build();

        let price = gtk::Label::builder()
            .label(format!("Rp {}", format::format_price(product.price)))
            .css_classes(["price"])
            .hexpand(true)
            .xalign(0.0)
            .build();

        let add_button = gtk::Button::builder()
            .icon_name("list-add-symbolic")
            .css_classes(["suggested-action"])
            .tooltip_text("Tambah ke keranjang")
            .build();

        let price_row = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        price_row.append(&price);
        price_row.append(&add_button);

        let body = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(6)
            .margin_top(12)
            .margin_bottom(12)
            .margin_start(12)
            .margin_end(12)
            .build();
        body.append(&category);
        body.append(&title);
        body.append(&Self::build_rating_row(product));
        body.append(&price_row);

        let card = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .css_classes(["card", "product-card"])
            .build();
        card.append(&image_overlay);
        card.append(&body);

        let child = gtk::FlowBoxChild::new();
        child.set_child(Some(&card));

        Self {
            child,
            add_button,
            picture,
        }
    }

    fn build_rating_row(product: &Product) -> gtk::Box {
        let stars = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .spacing(2)
            .css_classes(["rating-stars"])
            .build();
        for star in format::star_rating(product.rating.rate) {
            stars.append(&gtk::Image::from_icon_name(star.icon_name()));
        }

        let count = gtk::Label::builder()
            .label(format!("({})", product.rating.count))
            .css_classes(["dim-label"])
            .build();

        let row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        row.append(&stars);
        row.append(&count);
        row
    }

    /// Fetches the product image off the main loop; the placeholder stays on
    /// any failure.
    pub fn load_image(&self, url: &str) {
        let url = url.to_string();
        let picture_weak = self.picture.downgrade();

        glib::spawn_future_local(async move {
            let fetch_url = url.clone();
            let Ok(outcome) =
                gio::spawn_blocking(move || crate::net::HttpClient::fetch_bytes(&fetch_url)).await
            else {
                return;
            };

            let bytes = match outcome {
                Ok(bytes) => bytes,
                Err(error) => {
                    tracing::debug!("product image {url} not loaded: {error}");
                    return;
                }
            };

            let Some(picture) = picture_weak.upgrade() else { return };
            match gtk::gdk::Texture::from_bytes(&glib::Bytes::from_owned(bytes)) {
                Ok(texture) => picture.set_paintable(Some(&texture)),
                Err(error) => tracing::debug!("product image {url} not decodable: {error}"),
            }
        });
    }

    pub fn connect_add_to_cart<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.add_button.connect_clicked(move |_button| callback());
    }

    pub fn child(&self) -> &gtk::FlowBoxChild {
        &self.child
    }

}
