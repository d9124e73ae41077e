use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::prelude::*;
use crate::constants;
use crate::ui::Ui;
use crate::widgets::DetailDialog;
use super::dispatcher::{Dispatcher, Effect, Interaction};

struct State {
    ui: Ui,
    dispatcher: RefCell<Dispatcher>,
}

#[derive(Clone)]
pub struct PageControllerWeak {
    state: Weak<State>,
}

impl PageControllerWeak {
    pub fn upgrade(&self) -> Option<PageController> {
        self.state.upgrade().map(|state| PageController { state })
    }
}

/// Page-level controller: owns the dispatcher (catalog, cart, filter) and
/// turns its effects into widget updates. Every interaction handler funnels
/// through `dispatch`.
#[derive(Clone)]
pub struct PageController {
    state: Rc<State>,
}

impl PageController {

    pub fn new(ui: Ui) -> Self {
        let state = State {
            ui,
            dispatcher: RefCell::new(Dispatcher::new()),
        };
        Self { state: Rc::new(state) }
    }

    pub fn ui(&self) -> &Ui {
        &self.state.ui
    }

    pub fn dispatcher(&self) -> &RefCell<Dispatcher> {
        &self.state.dispatcher
    }

    pub fn dispatch(&self, interaction: Interaction) {
        let effects = self.state.dispatcher.borrow_mut().dispatch(interaction);
        for effect in effects {
            self.apply_effect(effect);
        }
    }

    fn apply_effect(&self, effect: Effect) {
        let ui = &self.state.ui;
        match effect {
            Effect::SetCartCount(count) => {
                ui.cart_count().set_label(&count.to_string());
            }
            Effect::ShowToast(message) => {
                let toast = adw::Toast::builder()
                    .title(message.as_str())
                    .timeout(constants::TOAST_TIMEOUT_SECONDS)
                    .build();
                ui.toast_overlay().add_toast(toast);
            }
            Effect::ApplyVisibility(flags) => {
                ui.product_grid().apply_visibility(&flags);
            }
            Effect::PresentDetail(index) => {
                self.present_detail(index);
            }
        }
    }

    fn present_detail(&self, index: usize) {
        let product = self
            .state
            .dispatcher
            .borrow()
            .state()
            .repository
            .product_by_index(index)
            .cloned();
        let Some(product) = product else { return };

        let dialog = DetailDialog::from_product(&product);
        let this_weak = self.downgrade();
        let id = product.id;
        dialog.connect_add_to_cart(move |quantity| {
            if let Some(this) = this_weak.upgrade() {
                this.dispatch(Interaction::AddToCart { id, quantity });
            }
        });
        dialog.present(self.state.ui.window().root());
    }

    pub fn downgrade(&self) -> PageControllerWeak {
        PageControllerWeak { state: Rc::downgrade(&self.state) }
    }

}
