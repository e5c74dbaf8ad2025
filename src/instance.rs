// Instance unique par fichier PID.
// Au demarrage, l'outil lit le PID enregistre et envoie SIGINT au detenteur
// s'il est encore vivant. Le fichier n'est jamais supprime a la sortie :
// un PID perime est simplement ecrase par le suivant.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Resultat de la prise de controle du fichier PID
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Takeover {
    /// Aucun fichier PID present
    Fresh,
    /// Fichier PID perime : processus mort ou contenu inutilisable
    Stale,
    /// Instance vivante signalee avec SIGINT
    SignalledLive(i32),
}

/// Lit le PID enregistre si le fichier contient un entier superieur a 1.
/// Pour kill(2), 0 et les valeurs negatives adressent des groupes de
/// processus et le PID 1 n'est jamais une instance precedente.
fn read_pid(path: &Path) -> Option<i32> {
    fs::read_to_string(path)
        .ok()
        .and_then(|content| content.trim().parse::<i32>().ok())
        .filter(|pid| *pid > 1)
}

/// Verifie qu'un processus est vivant (signal 0, sans effet sur la cible).
fn process_alive(pid: i32) -> bool {
    unsafe { libc::kill(pid, 0) == 0 }
}

/// Envoie SIGINT a l'instance precedente designee par le fichier PID,
/// si elle est encore vivante. Ne touche jamais au fichier lui-meme.
pub fn takeover(path: &Path) -> Takeover {
    let Some(pid) = read_pid(path) else {
        if path.exists() {
            return Takeover::Stale;
        }
        return Takeover::Fresh;
    };

    if process_alive(pid) {
        // L'envoi echoue seulement si le processus disparait entre-temps
        unsafe {
            libc::kill(pid, libc::SIGINT);
        }
        Takeover::SignalledLive(pid)
    } else {
        Takeover::Stale
    }
}

/// Enregistre le PID du processus courant, en ecrasant l'ancien contenu.
pub fn write_own_pid(path: &Path) -> Result<()> {
    fs::write(path, std::process::id().to_string())
        .with_context(|| format!("Failed to write PID file: {}", path.display()))?;
    Ok(())
}
