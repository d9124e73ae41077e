use std::cell::Cell;
use std::rc::Rc;

use crate::prelude::*;
use crate::constants;
use crate::ui::Ui;

/// Full-window loading screen. Shown from the first frame, faded out one
/// second after the window maps and detached once the fade transition is
/// over. Single-shot per run.
pub struct LoaderOverlay;

impl LoaderOverlay {

    pub fn install(ui: &Ui) {
        let root = Self::build();
        ui.overlay().add_overlay(&root);

        let fired = Rc::new(Cell::new(false));
        let ui_weak = ui.downgrade();
        ui.window().root().connect_map(move |_window| {
            // connect_map re-fires on remaps; the overlay only leaves once.
            if fired.replace(true) {
                return;
            }

            let ui_weak = ui_weak.clone();
            let root = root.clone();
            glib::timeout_add_local_once(constants::LOADER_HIDE_DELAY, move || {
                root.add_css_class("hidden");
                glib::timeout_add_local_once(constants::LOADER_REMOVE_DELAY, move || {
                    if let Some(ui) = ui_weak.upgrade() {
                        ui.overlay().remove_overlay(&root);
                    }
                });
            });
        });
    }

    fn build() -> gtk::Box {
        let spinner = gtk::Spinner::builder()
            .spinning(true)
            .width_request(50)
            .height_request(50)
            .halign(gtk::Align::Center)
            .build();

        let label = gtk::Label::new(Some("Memuat..."));

        let content = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .spacing(20)
            .halign(gtk::Align::Center)
            .valign(gtk::Align::Center)
            .build();
        content.append(&spinner);
        content.append(&label);

        let root = gtk::Box::builder()
            .orientation(gtk::Orientation::Vertical)
            .css_classes(["loader-overlay"])
            .build();
        root.append(&content);
        content.set_vexpand(true);
        root
    }

}
