// Registre des notes de mise a jour et selection des notes en attente.
// Chaque version du shell qui demande une intervention livre un fragment
// Pango dans updates/<version>.pango, embarque dans le binaire.

use semver::Version;

/// Notes de mise a jour embarquees, une entree par version du shell.
/// L'ordre du tableau est indifferent : la selection trie par precedence.
pub const UPDATE_NOTES: &[(&str, &str)] = &[
    ("0.2.4", include_str!("../updates/0.2.4.pango")),
    ("0.2.5", include_str!("../updates/0.2.5.pango")),
    ("0.3.0", include_str!("../updates/0.3.0.pango")),
];

/// Resultat de la selection des mises a jour
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateReport {
    /// Version courante anterieure ou egale a la version installee
    UpToDate,
    /// Versions restant a appliquer, en ordre croissant de precedence,
    /// et leurs notes concatenees
    Pending {
        versions: Vec<Version>,
        notes: String,
    },
}

impl UpdateReport {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, UpdateReport::UpToDate)
    }
}

/// Version courante du shell, celle du paquet.
pub fn current_version() -> Version {
    Version::parse(env!("CARGO_PKG_VERSION")).expect("version de paquet invalide")
}

/// Selectionne les notes applicables : versions du registre strictement plus
/// recentes que la version installee et absentes de la liste deja appliquee.
/// La precedence suit semver, pas l'ordre lexicographique des chaines.
pub fn select_updates(
    registry: &[(&str, &str)],
    installed: &str,
    applied: &[String],
    current: &Version,
) -> UpdateReport {
    let installed = match Version::parse(installed) {
        Ok(version) => version,
        Err(_) => {
            tracing::warn!("{}", crate::t!("updates.bad_installed", installed));
            return UpdateReport::UpToDate;
        }
    };

    if *current <= installed {
        return UpdateReport::UpToDate;
    }

    let mut pending: Vec<(Version, &str)> = Vec::new();
    for &(raw, note) in registry {
        let version = match Version::parse(raw) {
            Ok(version) => version,
            Err(_) => {
                tracing::warn!("{}", crate::t!("updates.skipped_entry", raw));
                continue;
            }
        };
        if version > installed && !applied.iter().any(|a| a == raw) {
            pending.push((version, note));
        }
    }
    pending.sort_by(|a, b| a.0.cmp(&b.0));

    let notes = pending
        .iter()
        .map(|(_, note)| *note)
        .collect::<Vec<_>>()
        .join("\n");
    let versions = pending.into_iter().map(|(version, _)| version).collect();

    UpdateReport::Pending { versions, notes }
}
