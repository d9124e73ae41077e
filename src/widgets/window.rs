use crate::prelude::*;
use crate::constants;
use super::filter_bar::FilterBar;
use super::product_grid::ProductGrid;

/// The whole page in one window: injected header fragment, error banner,
/// shop bar with the cart counter, filter bar, product grid and the injected
/// footer fragment. A `gtk::Overlay` at the root hosts the loader overlay.
pub struct WindowWidget {
    window: adw::ApplicationWindow,
    overlay: gtk::Overlay,
    toast_overlay: adw::ToastOverlay,
    header_slot: adw::Bin,
    footer_slot: adw::Bin,
    banner: adw::Banner,
    spinner: gtk::Spinner,
    cart_count: gtk::Label,
    filter_bar: FilterBar,
    product_grid: ProductGrid,
}

impl WindowWidget {

    pub fn new(application: &adw::Application) -> Self {
        let header_slot = adw::Bin::new();
        let footer_slot = adw::Bin::new();

        let banner = adw::Banner::new("Gagal memuat produk. Coba lagi nanti.");

        let spinner = gtk::Spinner::builder()
            .width_request(48)
            .height_request(48)
            .halign(gtk::Align::Center)
            .margin_top(24)
            .margin_bottom(24)
            .visible(false)
            .build();

        let cart_count = gtk::Label::builder()
            .label("0")
            .css_classes(["cart-count"])
            .build();

        let filter_bar = FilterBar::new();
        let product_grid = ProductGrid::new();

        let page = Self::build_page(
            &header_slot,
            &banner,
            &cart_count,
            &filter_bar,
            &spinner,
            &product_grid,
            &footer_slot,
        );

        let clamp = adw::Clamp::builder()
            .maximum_size(1200)
            .child(&page)
            .build();

        let scrolled = gtk::ScrolledWindow::builder()
            .hscrollbar_policy(gtk::PolicyType::Never)
            .vexpand(true)
            .child(&clamp)
            .build();

        let content = gtk::Box::new(gtk::Orientation::Vertical, 0);
        content.append(&adw::HeaderBar::new());
        content.append(&scrolled);

        let toast_overlay = adw::ToastOverlay::new();
        toast_overlay.set_child(Some(&content));

        let overlay = gtk::Overlay::new();
        overlay.set_child(Some(&toast_overlay));

        let window = adw::ApplicationWindow::builder()
            .application(application)
            .title(constants::APP_TITLE)
            .default_width(1100)
            .default_height(760)
            .content(&overlay)
            .build();

        Self {
            window,
            overlay,
            toast_overlay,
            header_slot,
            footer_slot,
            banner,
            spinner,
            cart_count,
            filter_bar,
            product_grid,
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn build_page(
        header_slot: &adw::Bin,
        banner: &adw::Banner,
        cart_count: &gtk::Label,
        filter_bar: &FilterBar,
        spinner: &gtk::Spinner,
        product_grid: &ProductGrid,
        footer_slot: &adw::Bin,
    ) -> gtk::Box {
        let page = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(18)
            .margin_start(12)
            .margin_end(12)
            .margin_bottom(12)
            .build();

        page.append(header_slot);
        page.append(banner);
        page.append(&Self::build_shop_bar(cart_count));
        page.append(filter_bar.widget());
        page.append(spinner);
        page.append(product_grid.widget());
        page.append(footer_slot);
        page
    }

    fn build_shop_bar(cart_count: &gtk::Label) -> gtk::Box {
        let title = gtk::Label::builder()
            .label("Produk Terbaru")
            .css_classes(["title-2"])
            .hexpand(true)
            .xalign(0.0)
            .build();

        let cart_label = gtk::Label::new(Some("Keranjang"));

        let shop_bar = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        shop_bar.append(&title);
        shop_bar.append(&cart_label);
        shop_bar.append(cart_count);
        shop_bar
    }

    pub fn root(&self) -> &adw::ApplicationWindow {
        &self.window
    }

    pub fn overlay(&self) -> &gtk::Overlay {
        &self.overlay
    }

    pub fn toast_overlay(&self) -> &adw::ToastOverlay {
        &self.toast_overlay
    }

    pub fn header_slot(&self) -> &adw::Bin {
        &self.header_slot
    }

    pub fn footer_slot(&self) -> &adw::Bin {
        &self.footer_slot
    }

    pub fn banner(&self) -> &adw::Banner {
        &self.banner
    }

    pub fn spinner(&self) -> &gtk::Spinner {
        &self.spinner
    }

    pub fn cart_count(&self) -> &gtk::Label {
        &self.cart_count
    }

    pub fn filter_bar(&self) -> &FilterBar {
        &self.filter_bar
    }

    pub fn product_grid(&self) -> &ProductGrid {
        &self.product_grid
    }

    pub fn present(&self) {
        self.window.present();
    }

}
