// Configuration des outils brume
// Deserialise le fichier TOML avec des valeurs par defaut pour chaque section.
// Le meme fichier est partage par brume-help et brume-updater.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration racine des outils
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsConfig {
    #[serde(default)]
    pub help: HelpConfig,
    #[serde(default)]
    pub updater: UpdaterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Configuration de la fenetre d'aide
#[derive(Debug, Clone, Deserialize)]
pub struct HelpConfig {
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Hauteur maximale du contenu en pixels, 0 pour aucune limite
    #[serde(default)]
    pub max_height: i32,
}

/// Configuration de la fenetre de mise a jour
#[derive(Debug, Clone, Deserialize)]
pub struct UpdaterConfig {
    #[serde(default = "default_update_command")]
    pub update_command: String,
    #[serde(default = "default_updates_url")]
    pub updates_url: String,
}

/// Configuration du logging (niveau, repertoire, langue)
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Repertoire des fichiers journaux, aucun fichier si absent
    #[serde(default)]
    pub log_dir: Option<String>,
    /// Langue des messages : "en", "fr", "es" (defaut : "en")
    #[serde(default)]
    pub language: Option<String>,
}

fn default_font_size() -> u32 {
    22
}

fn default_update_command() -> String {
    "brume-update".to_string()
}

fn default_updates_url() -> String {
    "https://brume-shell.github.io/updates".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for HelpConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            max_height: 0,
        }
    }
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            update_command: default_update_command(),
            updates_url: default_updates_url(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
            language: None,
        }
    }
}

impl ToolsConfig {
    /// Deserialise une configuration TOML, complete ou partielle.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| crate::t!("config.parse_failed"))
    }

    /// Charge la configuration depuis un fichier TOML.
    /// Si le fichier n'existe pas, utilise les valeurs par defaut ; le
    /// drapeau retourne signale ce cas, a journaliser par l'appelant une
    /// fois le logging installe.
    pub fn load(path: &Path) -> Result<(Self, bool)> {
        if path.exists() {
            let content = std::fs::read_to_string(path).with_context(|| {
                crate::i18n::get_with_args("config.read_failed", &[&path.display().to_string()])
            })?;
            Ok((Self::from_toml_str(&content)?, false))
        } else {
            Ok((Self::default(), true))
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            help: HelpConfig::default(),
            updater: UpdaterConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
