// Resolution des chemins utilises par les deux outils : repertoire
// temporaire, repertoires XDG et emplacements des fichiers du shell.
// Les valeurs d'environnement sont passees en parametre aux variantes
// *_from pour rester testables.

use std::env;
use std::path::PathBuf;

// Sous-repertoire du shell dans les repertoires XDG
const SHELL_DIR: &str = "brume-shell";

/// Repertoire temporaire : TMPDIR, TEMP puis TMP, sinon /tmp.
pub fn temp_dir() -> PathBuf {
    temp_dir_from(
        env::var("TMPDIR").ok(),
        env::var("TEMP").ok(),
        env::var("TMP").ok(),
    )
}

pub(crate) fn temp_dir_from(
    tmpdir: Option<String>,
    temp: Option<String>,
    tmp: Option<String>,
) -> PathBuf {
    [tmpdir, temp, tmp]
        .into_iter()
        .flatten()
        .find(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("/tmp"))
}

/// Repertoire de donnees utilisateur : XDG_DATA_HOME, sinon ~/.local/share.
pub fn data_home() -> PathBuf {
    data_home_from(env::var("XDG_DATA_HOME").ok(), env::var("HOME").ok())
}

pub(crate) fn data_home_from(xdg_data_home: Option<String>, home: Option<String>) -> PathBuf {
    match xdg_data_home {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(home.unwrap_or_default()).join(".local/share"),
    }
}

/// Repertoire de configuration utilisateur : XDG_CONFIG_HOME, sinon ~/.config.
pub fn config_home() -> PathBuf {
    config_home_from(env::var("XDG_CONFIG_HOME").ok(), env::var("HOME").ok())
}

pub(crate) fn config_home_from(xdg_config_home: Option<String>, home: Option<String>) -> PathBuf {
    match xdg_config_home {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => PathBuf::from(home.unwrap_or_default()).join(".config"),
    }
}

/// Fichier PID d'un outil, dans le repertoire temporaire.
pub fn pid_file(tool: &str) -> PathBuf {
    temp_dir().join(format!("{}.pid", tool))
}

/// Enregistrement de version du shell, ecrit par l'installateur.
pub fn shell_data_file() -> PathBuf {
    data_home().join(SHELL_DIR).join("data")
}

/// Fichier d'aide Pango par defaut, livre avec le shell.
pub fn default_help_content() -> PathBuf {
    data_home().join(SHELL_DIR).join("help.pango")
}

/// Fichier de configuration TOML par defaut des deux outils.
pub fn default_config_file() -> PathBuf {
    config_home().join(SHELL_DIR).join("tools.toml")
}

/// Surcharge de traduction de l'utilisateur pour une langue donnee.
pub fn user_lang_file(language: &str) -> PathBuf {
    data_home()
        .join(SHELL_DIR)
        .join("langs")
        .join(format!("{}.json", language))
}
