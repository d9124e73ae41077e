use crate::prelude::*;
use crate::constants;
use crate::format;
use crate::models::Product;

/// Product detail modal. Escape and outside clicks close it natively; the
/// add-to-cart control reports the stepper quantity and closes.
pub struct DetailDialog {
    dialog: adw::Dialog,
    quantity: gtk::SpinButton,
    add_button: gtk::Button,
}

impl DetailDialog {

    pub fn from_product(product: &Product) -> Self {
        let picture = gtk::Picture::builder()
            .content_fit(gtk::ContentFit::Contain)
            .height_request(240)
            .build();

        let category = gtk::Label::builder()
            .label(&product.category)
            .css_classes(["category-pill"])
            .halign(gtk::Align::Start)
            .build();

        let title = gtk::Label::builder()
            .label(&product.title)
            .css_classes(["title-2"])
            .wrap(true)
            .xalign(0.0)
            .build();

        let price = gtk::Label::builder()
            .label(format!("Rp {}", format::format_price(product.price)))
            .css_classes(["price"])
            .xalign(0.0)
            .build();

        let description = gtk::Label::builder()
            .label(&product.description)
            .css_classes(["body"])
            .wrap(true)
            .xalign(0.0)
            .build();

        let quantity = gtk::SpinButton::with_range(
            f64::from(constants::QUANTITY_MIN),
            f64::from(constants::QUANTITY_MAX),
            1.0,
        );
        quantity.set_numeric(true);
        quantity.set_value(f64::from(constants::QUANTITY_MIN));

        let quantity_row = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        quantity_row.append(&gtk::Label::new(Some("Jumlah")));
        quantity_row.append(&quantity);

        let add_button = gtk::Button::builder()
            .label("Tambah ke Keranjang")
            .css_classes(["suggested-action", "pill"])
            .halign(gtk::Align::Start)
            .build();

        let content = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(12)
            .margin_top(12)
            .margin_bottom(18)
            .margin_start(18)
            .margin_end(18)
            .build();
        content.append(&picture);
        content.append(&category);
        content.append(&title);
        content.append(&Self::build_rating_row(product));
        content.append(&price);
        content.append(&description);
        content.append(&quantity_row);
        content.append(&add_button);

        let page = gtk::Box::new(gtk::Orientation::Vertical, 0);
        page.append(&adw::HeaderBar::new());
        page.append(
            &gtk::ScrolledWindow::builder()
                .hscrollbar_policy(gtk::PolicyType::Never)
                .propagate_natural_height(true)
                .child(&content)
                .build(),
        );

        let dialog = adw::Dialog::builder()
            .title(&product.title)
            .content_width(480)
            .content_height(640)
            .child(&page)
            .build();

        let this = Self {
            dialog,
            quantity,
            add_button,
        };
        this.load_image(product, &picture);
        this
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

        let score = gtk::Label::builder()
            .label(format!("{} ({})", product.rating.rate, product.rating.count))
            .css_classes(["dim-label"])
            .build();

        let row = gtk::Box::new(gtk::Orientation::Horizontal, 6);
        row.append(&stars);
        row.append(&score);
        row
    }

    fn load_image(&self, product: &Product, picture: &gtk::Picture) {
        let url = product.image.clone();
        let picture_weak = picture.downgrade();

        glib::spawn_future_local(async move {
            let fetch_url = url.clone();
            let Ok(outcome) =
                gtk::gio::spawn_blocking(move || crate::net::HttpClient::fetch_bytes(&fetch_url))
                    .await
            else {
                return;
            };
            let Ok(bytes) = outcome else { return };
            let Some(picture) = picture_weak.upgrade() else { return };

            if let Ok(texture) = gtk::gdk::Texture::from_bytes(&glib::Bytes::from_owned(bytes)) {
                picture.set_paintable(Some(&texture));
            } else {
                tracing::debug!("detail image {url} not decodable");
            }
        });
    }

    pub fn connect_add_to_cart<F>(&self, callback: F)
    where
        F: Fn(u32) + 'static,
    {
        let quantity = self.quantity.clone();
        let dialog = self.dialog.clone();
        self.add_button.connect_clicked(move |_button| {
            callback(quantity.value() as u32);
            dialog.close();
        });
    }

    pub fn present(&self, parent: &impl IsA<gtk::Widget>) {
        self.dialog.present(Some(parent));
    }

}
