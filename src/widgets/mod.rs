mod window;
mod loader_overlay;
mod product_grid;
mod product_card;
mod filter_bar;
mod detail_dialog;
mod map_widget;

pub use window::WindowWidget;
pub use loader_overlay::LoaderOverlay;
pub use product_grid::ProductGrid;
pub use product_card::ProductCard;
pub use filter_bar::FilterBar;
pub use detail_dialog::DetailDialog;
pub use map_widget::MapWidget;
