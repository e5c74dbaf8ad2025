// Plomberie GTK commune aux deux fenetres : feuille de style, fermeture
// par la touche Echap et sortie propre sur SIGINT / SIGTERM.

pub mod help;
pub mod updater;

use gtk4::prelude::*;
use gtk4::{gdk, glib};

/// Applique la feuille de style commune : angles droits, bordure de fenetre
/// et taille de police des labels.
pub fn apply_css(font_size: u32) {
    let css = format!(
        "* {{ border-radius: 0px }} \
         window {{ border: solid 1px; border-color: #000 }} \
         label {{ font-size: {}px }}",
        font_size
    );
    let provider = gtk4::CssProvider::new();
    provider.load_from_data(&css);
    if let Some(display) = gdk::Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

/// Ferme la fenetre quand la touche Echap est relachee.
pub fn close_on_escape(window: &gtk4::ApplicationWindow) {
    let controller = gtk4::EventControllerKey::new();
    let win = window.clone();
    controller.connect_key_released(move |_, key, _, _| {
        if key == gdk::Key::Escape {
            win.close();
        }
    });
    window.add_controller(controller);
}

/// Quitte l'application sur SIGINT ou SIGTERM, avec une trace du signal recu.
/// Le fichier PID reste en place, le prochain demarrage l'ecrasera.
pub fn quit_on_signals(app: &gtk4::Application) {
    for (signum, name) in [(libc::SIGINT, "SIGINT"), (libc::SIGTERM, "SIGTERM")] {
        let app = app.clone();
        glib::unix_signal_add_local(signum, move || {
            tracing::info!("{}", crate::t!("app.terminated", name));
            app.quit();
            glib::ControlFlow::Continue
        });
    }
}
