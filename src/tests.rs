use std::fs;
use std::os::unix::process::ExitStatusExt;
use std::process::Command;

use semver::Version;

use super::*;

use crate::instance::Takeover;
use crate::shell_data::ShellData;
use crate::t;
use crate::updates::{select_updates, UpdateReport, UPDATE_NOTES};

fn version(raw: &str) -> Version {
    Version::parse(raw).expect("valid version")
}

#[test]
fn version_precedence_follows_semver() {
    // L'ordre lexicographique mettrait 0.10.0 avant 0.9.0
    assert!(version("0.9.0") < version("0.10.0"));
    assert!(version("0.2.4") < version("0.2.5"));
    assert!(version("0.2.5") < version("0.3.0"));
}

#[test]
fn selects_notes_newer_than_installed_in_ascending_order() {
    let registry: &[(&str, &str)] = &[("0.3.0", "note C"), ("0.2.4", "note A"), ("0.2.5", "note B")];
    let report = select_updates(registry, "0.2.4", &[], &version("0.3.0"));

    match report {
        UpdateReport::Pending { versions, notes } => {
            assert_eq!(versions, vec![version("0.2.5"), version("0.3.0")]);
            assert_eq!(notes, "note B\nnote C");
        }
        UpdateReport::UpToDate => panic!("expected pending updates"),
    }
}

#[test]
fn skips_already_applied_updates() {
    let registry: &[(&str, &str)] = &[("0.2.5", "note B"), ("0.3.0", "note C")];
    let applied = vec!["0.2.5".to_string()];
    let report = select_updates(registry, "0.2.4", &applied, &version("0.3.0"));

    match report {
        UpdateReport::Pending { versions, notes } => {
            assert_eq!(versions, vec![version("0.3.0")]);
            assert_eq!(notes, "note C");
        }
        UpdateReport::UpToDate => panic!("expected pending updates"),
    }
}

#[test]
fn equal_or_older_current_reports_up_to_date() {
    let registry: &[(&str, &str)] = &[("0.3.0", "note C")];

    let same = select_updates(registry, "0.3.0", &[], &version("0.3.0"));
    assert!(same.is_up_to_date());

    let downgrade = select_updates(registry, "0.4.0", &[], &version("0.3.0"));
    assert!(downgrade.is_up_to_date());
}

#[test]
fn all_notes_applied_leaves_empty_pending() {
    // Version courante plus recente mais toutes les notes deja appliquees :
    // le rapport reste "en attente" pour laisser le bouton actif
    let registry: &[(&str, &str)] = &[("0.2.5", "note B"), ("0.3.0", "note C")];
    let applied = vec!["0.2.5".to_string(), "0.3.0".to_string()];
    let report = select_updates(registry, "0.2.4", &applied, &version("0.3.0"));

    match report {
        UpdateReport::Pending { versions, notes } => {
            assert!(versions.is_empty());
            assert_eq!(notes, "");
        }
        UpdateReport::UpToDate => panic!("expected pending report"),
    }
    assert!(!select_updates(registry, "0.2.4", &applied, &version("0.3.0")).is_up_to_date());
}

#[test]
fn unparsable_installed_version_reports_up_to_date() {
    let registry: &[(&str, &str)] = &[("0.3.0", "note C")];
    let report = select_updates(registry, "unknown", &[], &version("0.3.0"));
    assert!(report.is_up_to_date());
}

#[test]
fn unparsable_registry_entries_are_skipped() {
    let registry: &[(&str, &str)] = &[("not-a-version", "junk"), ("0.2.5", "note B")];
    let report = select_updates(registry, "0.2.4", &[], &version("0.3.0"));

    match report {
        UpdateReport::Pending { versions, notes } => {
            assert_eq!(versions, vec![version("0.2.5")]);
            assert_eq!(notes, "note B");
        }
        UpdateReport::UpToDate => panic!("expected pending updates"),
    }
}

#[test]
fn embedded_update_notes_parse() {
    assert!(!UPDATE_NOTES.is_empty());
    for (raw, note) in UPDATE_NOTES {
        Version::parse(raw).expect("embedded note version should parse");
        assert!(!note.trim().is_empty());
    }
}

#[test]
fn shell_data_parses_record_fields() {
    let content = r#"
{
  "installed-version": "0.2.4",
  "updates": ["0.2.4", "0.2.5"]
}
"#;
    let data = ShellData::from_json_str(content).expect("record should parse");
    assert_eq!(data.installed_version, "0.2.4");
    assert_eq!(data.updates, vec!["0.2.4", "0.2.5"]);
}

#[test]
fn shell_data_updates_key_is_optional() {
    let data = ShellData::from_json_str(r#"{"installed-version": "0.2.4"}"#)
        .expect("record should parse");
    assert_eq!(data.installed_version, "0.2.4");
    assert!(data.updates.is_empty());
}

#[test]
fn shell_data_load_falls_back_to_fresh() {
    let path = paths::temp_dir().join(format!("brume-missing-data-{}", std::process::id()));
    let _ = fs::remove_file(&path);

    let data = ShellData::load(&path, "0.3.0");
    assert_eq!(data.installed_version, "0.3.0");
    assert!(data.updates.is_empty());
}

#[test]
fn config_defaults_apply_to_missing_sections() {
    let config = config::ToolsConfig::from_toml_str("").expect("empty config should parse");
    assert_eq!(config.help.font_size, 22);
    assert_eq!(config.help.max_height, 0);
    assert_eq!(config.updater.update_command, "brume-update");
    assert_eq!(config.logging.level, "info");
    assert!(config.logging.log_dir.is_none());
    assert!(config.logging.language.is_none());
}

#[test]
fn config_partial_section_keeps_other_defaults() {
    let content = r#"
[help]
font_size = 30
max_height = 600

[updater]
update_command = "brume-update --now"
"#;
    let config = config::ToolsConfig::from_toml_str(content).expect("config should parse");
    assert_eq!(config.help.font_size, 30);
    assert_eq!(config.help.max_height, 600);
    assert_eq!(config.updater.update_command, "brume-update --now");
    assert_eq!(
        config.updater.updates_url,
        "https://brume-shell.github.io/updates"
    );
    assert_eq!(config.logging.level, "info");
}

#[test]
fn missing_config_file_loads_defaults_and_reports_it() {
    let path = paths::temp_dir().join(format!("brume-test-config-{}.toml", std::process::id()));
    let _ = fs::remove_file(&path);

    let (config, missing) = config::ToolsConfig::load(&path).expect("defaults should load");
    assert!(missing);
    assert_eq!(config.help.font_size, 22);

    fs::write(&path, "[help]\nfont_size = 24\n").expect("config file should be writable");
    let (config, missing) = config::ToolsConfig::load(&path).expect("config should load");
    assert!(!missing);
    assert_eq!(config.help.font_size, 24);

    let _ = fs::remove_file(&path);
}

#[test]
fn temp_dir_prefers_tmpdir_then_temp_then_tmp() {
    let dir = paths::temp_dir_from(Some("/a".into()), Some("/b".into()), Some("/c".into()));
    assert_eq!(dir.to_str(), Some("/a"));

    let dir = paths::temp_dir_from(None, Some("/b".into()), Some("/c".into()));
    assert_eq!(dir.to_str(), Some("/b"));

    // Les variables vides sont ignorees
    let dir = paths::temp_dir_from(Some(String::new()), None, Some("/c".into()));
    assert_eq!(dir.to_str(), Some("/c"));

    let dir = paths::temp_dir_from(None, None, None);
    assert_eq!(dir.to_str(), Some("/tmp"));
}

#[test]
fn data_and_config_homes_honor_xdg_overrides() {
    let dir = paths::data_home_from(Some("/xdg/data".into()), Some("/home/u".into()));
    assert_eq!(dir.to_str(), Some("/xdg/data"));

    let dir = paths::data_home_from(None, Some("/home/u".into()));
    assert_eq!(dir.to_str(), Some("/home/u/.local/share"));

    let dir = paths::config_home_from(Some("/xdg/config".into()), Some("/home/u".into()));
    assert_eq!(dir.to_str(), Some("/xdg/config"));

    let dir = paths::config_home_from(None, Some("/home/u".into()));
    assert_eq!(dir.to_str(), Some("/home/u/.config"));
}

#[test]
fn pid_file_records_current_process() {
    let path = paths::temp_dir().join(format!("brume-test-fresh-{}.pid", std::process::id()));
    let _ = fs::remove_file(&path);

    assert_eq!(instance::takeover(&path), Takeover::Fresh);
    instance::write_own_pid(&path).expect("PID file should be writable");

    let written = fs::read_to_string(&path).expect("PID file should exist");
    assert_eq!(written, std::process::id().to_string());

    let _ = fs::remove_file(&path);
}

#[test]
fn stale_pid_file_is_superseded() {
    let path = paths::temp_dir().join(format!("brume-test-stale-{}.pid", std::process::id()));

    // Un processus deja termine laisse un PID mort derriere lui
    let mut child = Command::new("sh")
        .arg("-c")
        .arg("exit 0")
        .spawn()
        .expect("sh should spawn");
    let dead_pid = child.id();
    child.wait().expect("child should exit");

    fs::write(&path, dead_pid.to_string()).expect("PID file should be writable");
    assert_eq!(instance::takeover(&path), Takeover::Stale);

    instance::write_own_pid(&path).expect("PID file should be writable");
    let written = fs::read_to_string(&path).expect("PID file should exist");
    assert_eq!(written, std::process::id().to_string());

    let _ = fs::remove_file(&path);
}

#[test]
fn garbage_pid_file_is_stale() {
    let path = paths::temp_dir().join(format!("brume-test-garbage-{}.pid", std::process::id()));
    fs::write(&path, "not a pid").expect("PID file should be writable");

    assert_eq!(instance::takeover(&path), Takeover::Stale);

    let _ = fs::remove_file(&path);
}

#[test]
fn reserved_pid_values_are_stale() {
    let path = paths::temp_dir().join(format!("brume-test-reserved-{}.pid", std::process::id()));

    // kill(0) viserait notre propre groupe de processus et kill(-1) tous
    // les processus de l'utilisateur ; le PID 1 n'est jamais une instance.
    // Aucune de ces valeurs ne doit etre signalee.
    for content in ["0", "-1", "1"] {
        fs::write(&path, content).expect("PID file should be writable");
        assert_eq!(instance::takeover(&path), Takeover::Stale);
    }

    let _ = fs::remove_file(&path);
}

#[test]
fn live_instance_gets_sigint() {
    let path = paths::temp_dir().join(format!("brume-test-live-{}.pid", std::process::id()));

    let mut child = Command::new("sleep")
        .arg("30")
        .spawn()
        .expect("sleep should spawn");
    fs::write(&path, child.id().to_string()).expect("PID file should be writable");

    let result = instance::takeover(&path);
    if !matches!(result, Takeover::SignalledLive(_)) {
        let _ = child.kill();
        let _ = child.wait();
        panic!("expected the live instance to be signalled, got {:?}", result);
    }
    assert_eq!(result, Takeover::SignalledLive(child.id() as i32));

    let status = child.wait().expect("child should terminate");
    assert_eq!(status.signal(), Some(libc::SIGINT));

    let _ = fs::remove_file(&path);
}

#[test]
fn i18n_lookup_fallback_and_overlay() {
    i18n::init_from("en", None);
    assert_eq!(t!("updater.btn_update"), "Update");
    assert_eq!(t!("no.such.key"), "no.such.key");
    assert!(t!("app.terminated", "SIGINT").contains("SIGINT"));

    // La surcharge remplace l'entree embarquee, le reste vient du fichier
    i18n::init_from("fr", Some(r#"{"updater": {"btn_update": "MAJ"}}"#));
    assert_eq!(t!("updater.btn_update"), "MAJ");
    assert_eq!(t!("updater.btn_close"), "Fermer");

    i18n::init_from("en", None);
}
