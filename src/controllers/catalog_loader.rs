use crate::prelude::*;
use crate::net;
use crate::populator::Populator;
use super::page::PageController;

use gtk::gio;

/// Fetches the remote catalog off the main loop and hands the records to the
/// page. The spinner is guaranteed to stop on every exit path; failures
/// reveal the error banner and leave the grid empty.
pub struct CatalogLoader;

impl CatalogLoader {

    pub fn load(page: &PageController) {
        if !page.dispatcher().borrow().state().repository.is_empty() {
            tracing::warn!("catalog already loaded, skipping");
            return;
        }

        let ui = page.ui();
        ui.banner().set_revealed(false);
        ui.spinner().set_visible(true);
        ui.spinner().start();
        ui.product_grid().clear();

        let page_weak = page.downgrade();
        glib::spawn_future_local(async move {
            let outcome = gio::spawn_blocking(net::fetch_catalog).await;
            let Some(page) = page_weak.upgrade() else { return };

            match outcome {
                Ok(Ok(products)) => {
                    tracing::info!(count = products.len(), "catalog fetched");
                    Self::apply_catalog(&page, products);
                }
                Ok(Err(error)) => {
                    tracing::error!("catalog fetch failed: {error}");
                    page.ui().banner().set_revealed(true);
                }
                Err(_) => {
                    tracing::error!("catalog worker aborted");
                    page.ui().banner().set_revealed(true);
                }
            }

            page.ui().spinner().stop();
            page.ui().spinner().set_visible(false);
        });
    }

    fn apply_catalog(page: &PageController, products: Vec<crate::models::Product>) {
        let populated = page
            .dispatcher()
            .borrow_mut()
            .state_mut()
            .repository
            .populate(products);

        match populated {
            Ok(()) => Populator::populate(page),
            Err(error) => tracing::warn!("catalog ignored: {error}"),
        }
    }

}
