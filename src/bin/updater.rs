// Point d'entree de brume-updater.
// Compare la version installee du shell a la version courante et affiche
// les notes des mises a jour restant a appliquer. Une instance deja vivante
// recoit SIGINT et ce processus la remplace.

use std::path::PathBuf;

use clap::Parser;
use semver::Version;

use brume_tools::config::ToolsConfig;
use brume_tools::instance::Takeover;
use brume_tools::shell_data::ShellData;
use brume_tools::updates::{self, UpdateReport};
use brume_tools::{i18n, instance, logging, paths, t, ui};

#[derive(Parser, Debug)]
#[command(name = "brume-updater", about = "Update window for the brume shell")]
struct Cli {
    /// Chemin du fichier de configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Remplace la version courante du shell (celle du paquet par defaut)
    #[arg(long)]
    current_version: Option<String>,
}

fn main() {
    // Parser les arguments CLI
    let cli = Cli::parse();

    // Initialiser i18n avec l'anglais par defaut (avant le chargement de la config)
    i18n::init("en");

    // Charger la configuration
    let config_path = cli.config.unwrap_or_else(paths::default_config_file);
    let (config, config_missing) = match ToolsConfig::load(&config_path) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Reinitialiser i18n avec la langue configuree
    let language = config.logging.language.as_deref().unwrap_or("en");
    i18n::init(language);

    // Initialiser le logging
    let _guard = match logging::init(&config.logging, "brume-updater") {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    };
    if config_missing {
        tracing::warn!("{}", t!("config.file_not_found", config_path.display()));
    }

    // Remplacement : l'instance deja vivante est tuee, celle-ci continue
    let pid_file = paths::pid_file("brume-updater");
    if let Takeover::SignalledLive(pid) = instance::takeover(&pid_file) {
        tracing::info!("{}", t!("app.instance_killed", pid));
    }
    if let Err(e) = instance::write_own_pid(&pid_file) {
        tracing::warn!("{}", t!("app.pid_write_failed", e));
    }

    // Version courante du shell : celle du paquet, sauf remplacement explicite
    let current = match cli.current_version {
        Some(raw) => match Version::parse(&raw) {
            Ok(version) => version,
            Err(e) => {
                eprintln!("Invalid --current-version: {}", e);
                std::process::exit(1);
            }
        },
        None => updates::current_version(),
    };

    let data = ShellData::load(&paths::shell_data_file(), &current.to_string());
    tracing::info!("{}", t!("updater.installed_version", &data.installed_version));
    tracing::info!("{}", t!("updater.current_version", &current));

    let report = updates::select_updates(
        updates::UPDATE_NOTES,
        &data.installed_version,
        &data.updates,
        &current,
    );
    match &report {
        UpdateReport::UpToDate => {
            tracing::info!("{}", t!("updater.just_installed"));
        }
        UpdateReport::Pending { versions, .. } if versions.is_empty() => {
            tracing::info!("{}", t!("updater.none_pending"));
        }
        UpdateReport::Pending { versions, .. } => {
            let list = versions
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            tracing::info!("{}", t!("updater.pending", list));
        }
    }

    ui::updater::run(report, config.updater);
}
