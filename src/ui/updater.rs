// Fenetre de mise a jour : notes en attente dans un cadre deroulant, lien
// vers la page des mises a jour, boutons Mettre a jour et Fermer.

use std::process::Command;

use gtk4::prelude::*;
use gtk4::{gio, glib, Align, Orientation, PolicyType};

use crate::config::UpdaterConfig;
use crate::updates::UpdateReport;

const APP_ID: &str = "org.brume.updater";

/// Construit et affiche la fenetre de mise a jour. Bloque jusqu'a sa fermeture.
pub fn run(report: UpdateReport, config: UpdaterConfig) {
    let app = gtk4::Application::builder()
        .application_id(APP_ID)
        .flags(gio::ApplicationFlags::NON_UNIQUE)
        .build();

    app.connect_activate(move |app| {
        build_window(app, &report, &config);
        super::quit_on_signals(app);
    });

    app.run_with_args::<String>(&[]);
}

fn build_window(app: &gtk4::Application, report: &UpdateReport, config: &UpdaterConfig) {
    let content = match report {
        UpdateReport::UpToDate => {
            let text = crate::t!("updater.up_to_date");
            format!(
                "<span font-size=\"large\">{}</span>",
                glib::markup_escape_text(text.as_str())
            )
        }
        UpdateReport::Pending { notes, .. } => notes.clone(),
    };

    let window = gtk4::ApplicationWindow::builder()
        .application(app)
        .title(crate::t!("updater.window_title"))
        .build();

    let vbox = gtk4::Box::new(Orientation::Vertical, 10);
    vbox.set_margin_top(6);
    vbox.set_margin_bottom(6);
    vbox.set_margin_start(6);
    vbox.set_margin_end(6);

    let frame_title = crate::t!("updater.frame_title");
    let frame = gtk4::Frame::new(Some(frame_title.as_str()));
    frame.set_label_align(0.5);
    frame.set_vexpand(true);

    let scrolled = gtk4::ScrolledWindow::new();
    scrolled.set_policy(PolicyType::Never, PolicyType::Automatic);
    scrolled.set_propagate_natural_height(true);

    let label = gtk4::Label::new(None);
    label.set_markup(&content);
    label.set_wrap(true);
    label.set_valign(Align::Start);
    label.set_vexpand(true);
    label.set_margin_top(10);
    label.set_margin_bottom(10);
    label.set_margin_start(10);
    label.set_margin_end(10);

    scrolled.set_child(Some(&label));
    frame.set_child(Some(&scrolled));
    vbox.append(&frame);

    // Barre du bas : icone, lien vers la page des mises a jour, boutons
    let hbox = gtk4::Box::new(Orientation::Horizontal, 6);

    let icon = gtk4::Image::from_icon_name("system-run");
    hbox.append(&icon);

    let link = gtk4::Label::new(None);
    link.set_markup(&crate::t!("updater.link_label", &config.updates_url));
    link.set_halign(Align::Start);
    link.set_hexpand(true);
    hbox.append(&link);

    let btn_close = gtk4::Button::with_label(&crate::t!("updater.btn_close"));
    let win = window.clone();
    btn_close.connect_clicked(move |_| {
        win.close();
    });
    hbox.append(&btn_close);

    let btn_update = gtk4::Button::with_label(&crate::t!("updater.btn_update"));
    btn_update.set_sensitive(!report.is_up_to_date());
    let win = window.clone();
    let update_command = config.update_command.clone();
    btn_update.connect_clicked(move |_| {
        // Lance la commande detachee ; la fenetre se ferme si le lancement reussit
        match Command::new("sh").arg("-c").arg(&update_command).spawn() {
            Ok(_) => {
                tracing::info!("{}", crate::t!("updater.update_launched", &update_command));
                win.close();
            }
            Err(e) => {
                tracing::error!("{}", crate::t!("updater.update_failed", e));
            }
        }
    });
    hbox.append(&btn_update);

    vbox.append(&hbox);
    window.set_child(Some(&vbox));

    super::close_on_escape(&window);
    window.present();
}
