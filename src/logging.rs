// Initialisation du logging partagee par les deux outils.
// Sortie stdout systematique, fichier journalier optionnel avec rotation
// dans un repertoire mensuel {log_dir}/AAAA/MM/.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialise le systeme de traces selon la configuration.
/// Retourne le garde du writer non bloquant, a conserver jusqu'a la fin
/// du programme quand la sortie fichier est active.
pub fn init(config: &LoggingConfig, file_prefix: &str) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = fmt::layer().with_ansi(false).with_target(false);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            // Repertoire mensuel de logs : {log_dir}/AAAA/MM/
            let now = Local::now();
            let log_dir = PathBuf::from(dir)
                .join(now.format("%Y").to_string())
                .join(now.format("%m").to_string());
            std::fs::create_dir_all(&log_dir).with_context(|| {
                format!("Failed to create log directory: {}", log_dir.display())
            })?;

            // Appender de fichier avec rotation quotidienne
            let file_appender = tracing_appender::rolling::daily(&log_dir, file_prefix);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}
