// Fenetre d'aide : rendu d'un fragment Pango sur la couche overlay du
// compositeur, ou dans une fenetre classique avec --no-layer-shell.

use gtk4::prelude::*;
use gtk4::{gio, Orientation, PolicyType};
use gtk4_layer_shell::{KeyboardMode, Layer, LayerShell};

use crate::config::HelpConfig;

const APP_ID: &str = "org.brume.help";

/// Construit et affiche la fenetre d'aide. Bloque jusqu'a sa fermeture.
pub fn run(content: String, config: HelpConfig, no_layer_shell: bool) {
    let app = gtk4::Application::builder()
        .application_id(APP_ID)
        .flags(gio::ApplicationFlags::NON_UNIQUE)
        .build();

    app.connect_activate(move |app| {
        build_window(app, &content, &config, no_layer_shell);
        super::quit_on_signals(app);
    });

    app.run_with_args::<String>(&[]);
}

fn build_window(app: &gtk4::Application, content: &str, config: &HelpConfig, no_layer_shell: bool) {
    super::apply_css(config.font_size);

    let window = gtk4::ApplicationWindow::builder()
        .application(app)
        .title(crate::t!("help.window_title"))
        .build();

    if !no_layer_shell {
        window.init_layer_shell();
        window.set_layer(Layer::Overlay);
        window.set_exclusive_zone(0);
        // Sans clavier a la demande, Echap n'atteint jamais la surface overlay
        window.set_keyboard_mode(KeyboardMode::OnDemand);
    }

    let scrolled = gtk4::ScrolledWindow::new();
    scrolled.set_policy(PolicyType::Never, PolicyType::Automatic);
    scrolled.set_propagate_natural_height(true);
    if config.max_height > 0 {
        scrolled.set_max_content_height(config.max_height);
    }

    let vbox = gtk4::Box::new(Orientation::Vertical, 0);
    vbox.set_margin_top(12);
    vbox.set_margin_bottom(12);
    vbox.set_margin_start(12);
    vbox.set_margin_end(12);

    let label = gtk4::Label::new(None);
    label.set_markup(content);
    vbox.append(&label);

    scrolled.set_child(Some(&vbox));
    window.set_child(Some(&scrolled));

    super::close_on_escape(&window);
    window.present();
}
