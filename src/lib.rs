// Bibliotheque partagee des outils brume.
// Deux fenetres d'appoint pour le shell : l'aide (brume-help) et les mises
// a jour (brume-updater). Les points d'entree se trouvent dans src/bin/.

pub mod config;
pub mod i18n;
pub mod instance;
pub mod logging;
pub mod paths;
pub mod shell_data;
pub mod ui;
pub mod updates;

#[cfg(test)]
mod tests;
