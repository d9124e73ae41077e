use std::cell::RefCell;
use std::rc::Rc;

use super::prelude::*;
use super::constants;
use super::controllers::{ActionsController, CatalogLoader, FragmentLoader, PageController};
use super::ui::Ui;
use super::widgets::{LoaderOverlay, WindowWidget};

struct ApplicationState {
    application: adw::Application,
    page: RefCell<Option<PageController>>,
    actions: RefCell<Option<ActionsController>>,
}

pub struct Application {
    state: Rc<ApplicationState>,
}

impl Application {

    pub fn new() -> Self {
        let application = adw::Application::new(
            Some(constants::APP_ID),
            adw::gio::ApplicationFlags::default(),
        );

        let state = Rc::new(ApplicationState {
            application,
            page: RefCell::new(None),
            actions: RefCell::new(None),
        });

        Self::setup_signals(&state);

        Self { state }
    }

    fn setup_signals(state: &Rc<ApplicationState>) {
        Self::setup_activate_event(state);
        Self::setup_startup_event(state);
    }

    fn setup_activate_event(state: &Rc<ApplicationState>) {
        let state_weak = Rc::downgrade(state);
        state.application.connect_activate(move |_application| {
            let Some(state) = state_weak.upgrade() else { return };
            let this = Self { state };
            this.setup_ui().unwrap();
        });
    }

    fn setup_startup_event(state: &Rc<ApplicationState>) {
        state.application.connect_startup(move |_application| {
            Self::setup_resources().unwrap();
        });
    }

    fn setup_ui(&self) -> Result<()> {
        let window = WindowWidget::new(&self.state.application);
        let ui = Ui::new(window);

        LoaderOverlay::install(&ui);

        let page = PageController::new(ui.clone());
        let actions = ActionsController::new(self.state.application.clone());

        FragmentLoader::load(&ui);
        CatalogLoader::load(&page);

        self.state.page.replace(Some(page));
        self.state.actions.replace(Some(actions));

        ui.present();
        Ok(())
    }

    fn setup_resources() -> Result<()> {
        gtk::glib::set_application_name(constants::APP_TITLE);
        gtk::glib::set_prgname(Some(constants::APP_NAME));

        let css_provider = gtk::CssProvider::new();
        css_provider.load_from_string(constants::APP_STYLE);

        let style_manager = adw::StyleManager::default();
        style_manager.set_color_scheme(adw::ColorScheme::PreferLight);

        let display = gtk::gdk::Display::default().context("Failed to add style provider")?;

        gtk::style_context_add_provider_for_display(
            &display,
            &css_provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );

        Ok(())
    }

    pub fn activate(&self) -> Result<()> {
        let result = self.state.application.run();
        if matches!(result, adw::glib::ExitCode::FAILURE) {
            bail!("Application exited with code {}", result.get());
        }

        Ok(())
    }

}
