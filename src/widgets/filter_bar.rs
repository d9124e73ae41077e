use std::cell::RefCell;

use crate::prelude::*;
use crate::models::CategoryFilter;

/// Category toggle row. Buttons are built from the fetched catalog once it
/// arrives; the "Semua" sentinel starts active and the group keeps
/// activation exclusive.
pub struct FilterBar {
    root: gtk::Box,
    buttons: RefCell<Vec<gtk::ToggleButton>>,
}

impl FilterBar {

    pub fn new() -> Self {
        let root = gtk::Box::builder()
            .orientation(gtk::Orientation::Horizontal)
            .spacing(8)
            .build();

        Self {
            root,
            buttons: RefCell::new(Vec::new()),
        }
    }

    pub fn widget(&self) -> &gtk::Box {
        &self.root
    }

    pub fn set_categories<F>(&self, categories: &[String], on_select: F)
    where
        F: Fn(CategoryFilter) + Clone + 'static,
    {
        self.clear();

        let mut filters = vec![CategoryFilter::All];
        filters.extend(
            categories
                .iter()
                .map(|category| CategoryFilter::Category(category.clone())),
        );

        let mut buttons = self.buttons.borrow_mut();
        for filter in filters {
            let button = gtk::ToggleButton::builder()
                .label(filter.label())
                .css_classes(["pill"])
                .build();

            if let Some(first) = buttons.first() {
                button.set_group(Some(first));
            } else {
                button.set_active(true);
            }

            let on_select = on_select.clone();
            button.connect_toggled(move |button| {
                if button.is_active() {
                    on_select(filter.clone());
                }
            });

            self.root.append(&button);
            buttons.push(button);
        }
    }

    fn clear(&self) {
        for button in self.buttons.borrow_mut().drain(..) {
            self.root.remove(&button);
        }
    }

}

impl Default for FilterBar {
    fn default() -> Self {
        Self::new()
    }
}
