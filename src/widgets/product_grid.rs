use std::cell::RefCell;
use std::rc::Rc;

use crate::prelude::*;
use crate::constants;
use super::product_card::ProductCard;

type ActivationHandler = Box<dyn Fn(u64)>;

/// A child detached from its flow box reports index -1; activation must
/// ignore it instead of resolving to the first card.
fn activation_index(index: i32) -> Option<usize> {
    usize::try_from(index).ok()
}

/// The card grid. Keeps the rendered cards with their product ids so
/// activation and filtering can be driven by catalog order.
pub struct ProductGrid {
    flow_box: gtk::FlowBox,
    cards: RefCell<Vec<ProductCard>>,
    ids: Rc<RefCell<Vec<u64>>>,
    activation: Rc<RefCell<Option<ActivationHandler>>>,
}

impl ProductGrid {

    pub fn new() -> Self {
        let flow_box = gtk::FlowBox::builder()
            .selection_mode(gtk::SelectionMode::None)
            .homogeneous(true)
            .row_spacing(16)
            .column_spacing(16)
            .min_children_per_line(1)
            .max_children_per_line(4)
            .build();

        let ids = Rc::new(RefCell::new(Vec::new()));
        let activation: Rc<RefCell<Option<ActivationHandler>>> = Rc::new(RefCell::new(None));

        let activation_for_click = activation.clone();
        let ids_for_click = ids.clone();
        flow_box.connect_child_activated(move |_flow_box, child| {
            let Some(index) = activation_index(child.index()) else { return };
            let id = ids_for_click.borrow().get(index).copied();
            if let (Some(id), Some(handler)) = (id, activation_for_click.borrow().as_ref()) {
                handler(id);
            }
        });

        Self {
            flow_box,
            cards: RefCell::new(Vec::new()),
            ids,
            activation,
        }
    }

    pub fn widget(&self) -> &gtk::FlowBox {
        &self.flow_box
    }

    pub fn set_activation_handler<F>(&self, handler: F)
    where
        F: Fn(u64) + 'static,
    {
        self.activation.replace(Some(Box::new(handler)));
    }

    pub fn clear(&self) {
        for card in self.cards.borrow_mut().drain(..) {
            self.flow_box.remove(card.child());
        }
        self.ids.borrow_mut().clear();
    }

    pub fn append(&self, card: ProductCard, id: u64) {
        self.flow_box.insert(card.child(), -1);
        self.ids.borrow_mut().push(id);
        self.cards.borrow_mut().push(card);
    }

    /// One flag per card in catalog order. Hidden cards fade first and
    /// collapse after the transition; shown cards appear and then un-fade.
    pub fn apply_visibility(&self, flags: &[bool]) {
        for (card, &visible) in self.cards.borrow().iter().zip(flags) {
            let child = card.child();
            if visible {
                child.set_visible(true);
                let child_weak = child.downgrade();
                glib::timeout_add_local_once(constants::FILTER_REVEAL_DELAY, move || {
                    if let Some(child) = child_weak.upgrade() {
                        child.remove_css_class("card-faded");
                    }
                });
            } else {
                child.add_css_class("card-faded");
                let child_weak = child.downgrade();
                glib::timeout_add_local_once(constants::FILTER_HIDE_DELAY, move || {
                    // A later filter switch may have revived the card.
                    if let Some(child) = child_weak.upgrade() {
                        if child.has_css_class("card-faded") {
                            child.set_visible(false);
                        }
                    }
                });
            }
        }
    }

}

impl Default for ProductGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_child_never_resolves_to_a_card() {
        assert_eq!(activation_index(-1), None);
        assert_eq!(activation_index(0), Some(0));
        assert_eq!(activation_index(7), Some(7));
    }
}
