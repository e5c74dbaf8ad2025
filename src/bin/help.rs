// Point d'entree de brume-help.
// Affiche le fichier d'aide Pango du shell sur la couche overlay du
// compositeur. Une instance deja vivante est basculee : elle recoit SIGINT
// et ce processus s'arrete sans ouvrir de fenetre.

use std::path::PathBuf;

use clap::Parser;

use brume_tools::config::ToolsConfig;
use brume_tools::instance::Takeover;
use brume_tools::{i18n, instance, logging, paths, t, ui};

#[derive(Parser, Debug)]
#[command(name = "brume-help", about = "Help overlay for the brume shell")]
struct Cli {
    /// Chemin du fichier d'aide au format Pango
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Ouvre une fenetre classique au lieu de la couche overlay
    #[arg(short = 'l', long)]
    no_layer_shell: bool,

    /// Chemin du fichier de configuration
    #[arg(long)]
    config: Option<PathBuf>,
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
    let _guard = match logging::init(&config.logging, "brume-help") {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    };
    if config_missing {
        tracing::warn!("{}", t!("config.file_not_found", config_path.display()));
    }

    // Bascule : une instance deja vivante est tuee et on s'arrete la
    let pid_file = paths::pid_file("brume-help");
    if let Takeover::SignalledLive(pid) = instance::takeover(&pid_file) {
        tracing::info!("{}", t!("app.instance_killed", pid));
        return;
    }
    if let Err(e) = instance::write_own_pid(&pid_file) {
        tracing::warn!("{}", t!("app.pid_write_failed", e));
    }

    // Charger le contenu d'aide
    let content_path = cli.content.unwrap_or_else(paths::default_help_content);
    if !content_path.is_file() {
        eprintln!("{}", t!("help.content_missing", content_path.display()));
        std::process::exit(1);
    }
    let content = match std::fs::read_to_string(&content_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("{}", t!("help.content_unreadable", content_path.display(), e));
            std::process::exit(1);
        }
    };

    tracing::info!("{}", t!("help.showing", content_path.display()));
    ui::help::run(content, config.help, cli.no_layer_shell);
}
