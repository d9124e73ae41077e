use crate::prelude::*;
use crate::constants;
use crate::net::{self, FetchError};
use crate::ui::Ui;
use crate::widgets::MapWidget;

use gtk::gio;

/// Header and footer are remote builder markup, injected into their slots
/// once fetched. Either one falls back to inline markup when the asset host
/// is unreachable or serves something unusable. Only a remotely served
/// footer carries the mini-map slot, so the fallback never schedules the map.
pub struct FragmentLoader;

const FALLBACK_HEADER_UI: &str = r#"
<interface>
  <object class="GtkBox" id="header-root">
    <property name="orientation">horizontal</property>
    <property name="spacing">16</property>
    <property name="margin-top">18</property>
    <style><class name="page-header"/></style>
    <child>
      <object class="GtkLabel">
        <property name="label">TokoKu</property>
        <property name="hexpand">true</property>
        <property name="xalign">0</property>
        <style><class name="title-1"/></style>
      </object>
    </child>
    <child>
      <object class="GtkLabel">
        <property name="label">Beranda</property>
        <style><class name="nav-link"/></style>
      </object>
    </child>
    <child>
      <object class="GtkLabel">
        <property name="label">Tentang</property>
        <style><class name="nav-link"/></style>
      </object>
    </child>
    <child>
      <object class="GtkLabel">
        <property name="label">Kontak</property>
        <style><class name="nav-link"/></style>
      </object>
    </child>
    <child>
      <object class="GtkLabel">
        <property name="label">Alamat</property>
        <style><class name="nav-link"/></style>
      </object>
    </child>
  </object>
</interface>
"#;

const FALLBACK_FOOTER_UI: &str = r#"
<interface>
  <object class="GtkBox" id="footer-root">
    <property name="orientation">vertical</property>
    <property name="spacing">6</property>
    <property name="margin-top">18</property>
    <property name="margin-bottom">18</property>
    <style><class name="page-footer"/></style>
    <child>
      <object class="GtkLabel">
        <property name="label">Lokasi TokoKu</property>
        <style><class name="heading"/></style>
      </object>
    </child>
    <child>
      <object class="GtkLabel">
        <property name="label">Jl. Contoh No. 123, Jakarta</property>
        <style><class name="dim-label"/></style>
      </object>
    </child>
    <child>
      <object class="GtkLabel">
        <property name="label">© 2024 TokoKu. All rights reserved.</property>
        <style><class name="dim-label"/></style>
      </object>
    </child>
  </object>
</interface>
"#;

impl FragmentLoader {

    pub fn load(ui: &Ui) {
        Self::load_header(ui);
        Self::load_footer(ui);
    }

    fn load_header(ui: &Ui) {
        let ui_weak = ui.downgrade();
        glib::spawn_future_local(async move {
            let (markup, _remote) = Self::fetch(constants::HEADER_FRAGMENT_URL, FALLBACK_HEADER_UI).await;
            let Some(ui) = ui_weak.upgrade() else { return };

            if Self::inject(ui.header_slot(), &markup, "header-root").is_none() {
                Self::inject(ui.header_slot(), FALLBACK_HEADER_UI, "header-root");
            }
        });
    }

    fn load_footer(ui: &Ui) {
        let ui_weak = ui.downgrade();
        glib::spawn_future_local(async move {
            let (markup, remote) = Self::fetch(constants::FOOTER_FRAGMENT_URL, FALLBACK_FOOTER_UI).await;
            let Some(ui) = ui_weak.upgrade() else { return };

            let builder = Self::inject(ui.footer_slot(), &markup, "footer-root");
            let Some(builder) = builder else {
                Self::inject(ui.footer_slot(), FALLBACK_FOOTER_UI, "footer-root");
                return;
            };

            if !remote {
                return;
            }

            match Self::map_slot(&builder) {
                Some(container) => {
                    glib::timeout_add_local_once(constants::MAP_INIT_DELAY, move || {
                        MapWidget::initialize(&container);
                    });
                }
                None => tracing::debug!("footer fragment has no mini-map slot"),
            }
        });
    }

    async fn fetch(url: &'static str, fallback: &'static str) -> (String, bool) {
        match gio::spawn_blocking(move || net::fetch_fragment(url)).await {
            Ok(fetched) => {
                if let Err(error) = &fetched {
                    tracing::warn!("fragment {url} unavailable: {error}");
                }
                Self::resolve_fragment(fetched, fallback)
            }
            Err(_) => {
                tracing::error!("fragment worker for {url} aborted");
                (fallback.to_string(), false)
            }
        }
    }

    /// Remote markup wins when the fetch succeeded with a non-blank body.
    /// The flag reports which side was chosen.
    fn resolve_fragment(fetched: Result<String, FetchError>, fallback: &str) -> (String, bool) {
        match fetched {
            Ok(markup) if !markup.trim().is_empty() => (markup, true),
            _ => (fallback.to_string(), false),
        }
    }

    /// Builds the markup and mounts the named root widget into the slot.
    /// Returns the builder so callers can look up further objects.
    fn inject(slot: &adw::Bin, markup: &str, id: &str) -> Option<gtk::Builder> {
        let builder = gtk::Builder::new();
        if let Err(error) = builder.add_from_string(markup) {
            tracing::warn!("fragment markup rejected: {error}");
            return None;
        }

        let Some(object) = builder.object::<glib::Object>(id) else {
            tracing::warn!("fragment markup has no \"{id}\" object");
            return None;
        };
        let Ok(widget) = object.downcast::<gtk::Widget>() else {
            tracing::warn!("fragment object \"{id}\" is not a widget");
            return None;
        };

        slot.set_child(Some(&widget));
        Some(builder)
    }

    fn map_slot(builder: &gtk::Builder) -> Option<adw::Bin> {
        builder
            .object::<glib::Object>("mini-map")
            .and_then(|object| object.downcast::<adw::Bin>().ok())
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetched_markup_is_used_as_is() {
        let markup = "<interface/>".to_string();
        let (resolved, remote) =
            FragmentLoader::resolve_fragment(Ok(markup.clone()), FALLBACK_HEADER_UI);
        assert_eq!(resolved, markup);
        assert!(remote);
    }

    #[test]
    fn fetch_failure_falls_back_to_inline_markup() {
        let fetched = Err(FetchError::Status {
            url: "https://assets.tokoku.web.id/fragments/footer.ui".to_string(),
            status: 503,
        });
        let (resolved, remote) = FragmentLoader::resolve_fragment(fetched, FALLBACK_FOOTER_UI);
        assert_eq!(resolved, FALLBACK_FOOTER_UI);
        assert!(!remote);
    }

    #[test]
    fn blank_body_falls_back_to_inline_markup() {
        let (resolved, remote) =
            FragmentLoader::resolve_fragment(Ok("  \n".to_string()), FALLBACK_HEADER_UI);
        assert_eq!(resolved, FALLBACK_HEADER_UI);
        assert!(!remote);
    }

    #[test]
    fn fallback_footer_keeps_the_copyright_line() {
        assert!(FALLBACK_FOOTER_UI.contains("© 2024 TokoKu. All rights reserved."));
    }

    #[test]
    fn fallback_header_keeps_the_nav_row() {
        for label in ["Beranda", "Tentang", "Kontak", "Alamat"] {
            assert!(FALLBACK_HEADER_UI.contains(label), "missing nav label {label}");
        }
    }
}
