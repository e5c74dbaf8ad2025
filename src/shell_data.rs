// Enregistrement de version du shell (fichier JSON du repertoire de donnees).
// Ce fichier appartient au shell et a son installateur : les outils le
// lisent sans jamais l'ecrire.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Version installee a l'origine et mises a jour deja appliquees
#[derive(Debug, Clone, Deserialize)]
pub struct ShellData {
    #[serde(rename = "installed-version")]
    pub installed_version: String,
    #[serde(default)]
    pub updates: Vec<String>,
}

impl ShellData {
    /// Enregistrement d'une installation fraiche : la version installee est
    /// la version courante, aucune mise a jour appliquee.
    pub fn fresh(current_version: &str) -> Self {
        Self {
            installed_version: current_version.to_string(),
            updates: Vec::new(),
        }
    }

    /// Deserialise un enregistrement depuis son contenu JSON.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse shell data record")
    }

    /// Charge l'enregistrement depuis le disque. Fichier absent ou illisible :
    /// retour aux valeurs d'une installation fraiche, avec un avertissement.
    pub fn load(path: &Path, current_version: &str) -> Self {
        if !path.is_file() {
            tracing::warn!("{}", crate::t!("data.missing", path.display()));
            return Self::fresh(current_version);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("{}", crate::t!("data.read_failed", e));
                return Self::fresh(current_version);
            }
        };

        match Self::from_json_str(&content) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!("{}", crate::t!("data.parse_failed", e));
                Self::fresh(current_version)
            }
        }
    }
}
