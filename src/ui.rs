use super::widgets::{WindowWidget, FilterBar, ProductGrid};

use std::rc::{Rc, Weak};

#[derive(Clone)]
pub struct UiWeak {
    window: Weak<WindowWidget>,
}

impl UiWeak {
    pub fn upgrade(&self) -> Option<Ui> {
        self.window.upgrade().map(|window| Ui { window })
    }
}

/// Shared handle on the widget tree. Controllers keep `UiWeak` inside signal
/// closures and upgrade on demand so the widget tree is never kept alive by
/// its own handlers.
#[derive(Clone)]
pub struct Ui {
    window: Rc<WindowWidget>,
}

impl Ui {

    pub fn new(window: WindowWidget) -> Self {
        Self { window: Rc::new(window) }
    }

    pub fn window(&self) -> &WindowWidget {
        &self.window
    }

    pub fn overlay(&self) -> &gtk::Overlay {
        self.window.overlay()
    }

    pub fn toast_overlay(&self) -> &adw::ToastOverlay {
        self.window.toast_overlay()
    }

    pub fn header_slot(&self) -> &adw::Bin {
        self.window.header_slot()
    }

    pub fn footer_slot(&self) -> &adw::Bin {
        self.window.footer_slot()
    }

    pub fn banner(&self) -> &adw::Banner {
        self.window.banner()
    }

    pub fn spinner(&self) -> &gtk::Spinner {
        self.window.spinner()
    }

    pub fn cart_count(&self) -> &gtk::Label {
        self.window.cart_count()
    }

    pub fn filter_bar(&self) -> &FilterBar {
        self.window.filter_bar()
    }

    pub fn product_grid(&self) -> &ProductGrid {
        self.window.product_grid()
    }

    pub fn present(&self) {
        self.window.present();
    }

    pub fn downgrade(&self) -> UiWeak {
        UiWeak { window: Rc::downgrade(&self.window) }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    // Timer chains hand copies of the weak handle to nested closures.
    #[test]
    fn weak_handle_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<UiWeak>();
    }
}
