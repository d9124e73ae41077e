use super::controllers::{Interaction, PageController};
use super::models::CategoryFilter;
use super::widgets::ProductCard;

/// Builds the catalog-dependent widgets once the repository is filled: one
/// card per product and one filter pill per category, all routed through the
/// page controller.
pub struct Populator {}

impl Populator {

    pub fn populate(page: &PageController) {
        Self::populate_grid(page);
        Self::setup_card_activation(page);
        Self::populate_filter_bar(page);
    }

    fn populate_grid(page: &PageController) {
        let grid = page.ui().product_grid();

        let dispatcher = page.dispatcher().borrow();
        for product in dispatcher.state().repository.products() {
            let card = ProductCard::from_product(product);
            card.load_image(&product.image);

            let page_weak = page.downgrade();
            let id = product.id;
            card.connect_add_to_cart(move || {
                if let Some(page) = page_weak.upgrade() {
                    page.dispatch(Interaction::AddToCart { id, quantity: 1 });
                }
            });

            grid.append(card, product.id);
        }
    }

    fn setup_card_activation(page: &PageController) {
        let page_weak = page.downgrade();
        page.ui().product_grid().set_activation_handler(move |id| {
            if let Some(page) = page_weak.upgrade() {
                page.dispatch(Interaction::ShowDetail { id });
            }
        });
    }

    fn populate_filter_bar(page: &PageController) {
        let categories = page
            .dispatcher()
            .borrow()
            .state()
            .repository
            .categories()
            .to_vec();

        let page_weak = page.downgrade();
        page.ui()
            .filter_bar()
            .set_categories(&categories, move |filter: CategoryFilter| {
                if let Some(page) = page_weak.upgrade() {
                    page.dispatch(Interaction::SelectCategory(filter));
                }
            });
    }

}
