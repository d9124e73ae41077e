use super::super::cart::{Cart, Quantity};
use super::super::format;
use super::super::models::CategoryFilter;
use super::super::repository::Repository;

/// Everything the page can mutate, owned in one place instead of loose
/// globals: the catalog, the cart and the active filter.
#[derive(Debug, Default)]
pub struct PageState {
    pub repository: Repository,
    pub cart: Cart,
    pub filter: CategoryFilter,
}

/// User gestures, keyed by interaction type rather than by widget.
#[derive(Debug, Clone)]
pub enum Interaction {
    AddToCart { id: u64, quantity: u32 },
    ShowDetail { id: u64 },
    SelectCategory(CategoryFilter),
}

/// What the widget layer has to do in response. Kept as data so the whole
/// interaction table stays testable without a running display.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetCartCount(usize),
    ShowToast(String),
    PresentDetail(usize),
    ApplyVisibility(Vec<bool>),
}

#[derive(Debug, Default)]
pub struct Dispatcher {
    state: PageState,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut PageState {
        &mut self.state
    }

    pub fn dispatch(&mut self, interaction: Interaction) -> Vec<Effect> {
        match interaction {
            Interaction::AddToCart { id, quantity } => self.add_to_cart(id, quantity),
            Interaction::ShowDetail { id } => self.show_detail(id),
            Interaction::SelectCategory(filter) => self.select_category(filter),
        }
    }

    fn add_to_cart(&mut self, id: u64, quantity: u32) -> Vec<Effect> {
        let Some(product) = self.state.repository.product_by_id(id) else {
            return Vec::new();
        };

        let message = format!(
            "{}... ditambahkan ke keranjang!",
            format::truncate_title(&product.title)
        );

        let mut effects = Vec::new();
        for _ in 0..Quantity::new(quantity).get() {
            self.state.cart.add(id);
            effects.push(Effect::ShowToast(message.clone()));
        }
        effects.push(Effect::SetCartCount(self.state.cart.len()));
        effects
    }

    fn show_detail(&self, id: u64) -> Vec<Effect> {
        match self.state.repository.product_index(id) {
            Some(index) => vec![Effect::PresentDetail(index)],
            None => Vec::new(),
        }
    }

    fn select_category(&mut self, filter: CategoryFilter) -> Vec<Effect> {
        self.state.filter = filter;
        let visibility = self
            .state
            .repository
            .products()
            .iter()
            .map(|product| self.state.filter.matches(&product.category))
            .collect();

        vec![Effect::ApplyVisibility(visibility)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, Rating};

    fn product(id: u64, title: &str, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 12.0,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: Rating { rate: 4.0, count: 7 },
        }
    }

    fn dispatcher() -> Dispatcher {
        let mut dispatcher = Dispatcher::new();
        dispatcher
            .state_mut()
            .repository
            .populate(vec![
                product(1, "Fjallraven - Foldsack No. 1 Backpack", "men's clothing"),
                product(2, "Cincin Emas", "jewelery"),
                product(3, "Kaos Polos", "men's clothing"),
            ])
            .unwrap();
        dispatcher
    }

    #[test]
    fn adding_the_same_product_twice_counts_twice() {
        let mut dispatcher = dispatcher();
        dispatcher.dispatch(Interaction::AddToCart { id: 1, quantity: 1 });
        let effects = dispatcher.dispatch(Interaction::AddToCart { id: 1, quantity: 1 });

        assert_eq!(dispatcher.state().cart.len(), 2);
        assert_eq!(dispatcher.state().cart.entries(), &[1, 1]);
        assert_eq!(effects.last(), Some(&Effect::SetCartCount(2)));
    }

    #[test]
    fn add_to_cart_toasts_a_truncated_title_per_entry() {
        let mut dispatcher = dispatcher();
        let effects = dispatcher.dispatch(Interaction::AddToCart { id: 1, quantity: 3 });

        let toasts: Vec<_> = effects
            .iter()
            .filter(|effect| matches!(effect, Effect::ShowToast(_)))
            .collect();
        assert_eq!(toasts.len(), 3);
        assert_eq!(
            toasts[0],
            &Effect::ShowToast("Fjallraven - Foldsac... ditambahkan ke keranjang!".to_string())
        );
        assert_eq!(dispatcher.state().cart.len(), 3);
    }

    #[test]
    fn oversized_quantity_is_clamped_to_the_stepper_maximum() {
        let mut dispatcher = dispatcher();
        dispatcher.dispatch(Interaction::AddToCart { id: 2, quantity: 40 });
        assert_eq!(dispatcher.state().cart.len(), 10);
    }

    #[test]
    fn unknown_product_is_a_no_op() {
        let mut dispatcher = dispatcher();
        assert!(dispatcher
            .dispatch(Interaction::AddToCart { id: 99, quantity: 1 })
            .is_empty());
        assert!(dispatcher.dispatch(Interaction::ShowDetail { id: 99 }).is_empty());
        assert!(dispatcher.state().cart.is_empty());
    }

    #[test]
    fn detail_effect_carries_the_catalog_index() {
        let mut dispatcher = dispatcher();
        assert_eq!(
            dispatcher.dispatch(Interaction::ShowDetail { id: 2 }),
            vec![Effect::PresentDetail(1)]
        );
    }

    #[test]
    fn sentinel_filter_shows_every_card() {
        let mut dispatcher = dispatcher();
        assert_eq!(
            dispatcher.dispatch(Interaction::SelectCategory(CategoryFilter::All)),
            vec![Effect::ApplyVisibility(vec![true, true, true])]
        );
    }

    #[test]
    fn category_filter_selects_exactly_its_cards() {
        let mut dispatcher = dispatcher();
        let effects = dispatcher.dispatch(Interaction::SelectCategory(
            CategoryFilter::Category("men's clothing".to_string()),
        ));
        assert_eq!(effects, vec![Effect::ApplyVisibility(vec![true, false, true])]);
        assert_eq!(
            dispatcher.state().filter,
            CategoryFilter::Category("men's clothing".to_string())
        );
    }
}
