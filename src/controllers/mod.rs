mod actions;
mod catalog_loader;
mod dispatcher;
mod fragment_loader;
mod page;

pub use actions::ActionsController;
pub use catalog_loader::CatalogLoader;
pub use dispatcher::{Dispatcher, Effect, Interaction, PageState};
pub use fragment_loader::FragmentLoader;
pub use page::{PageController, PageControllerWeak};
