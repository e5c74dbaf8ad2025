// Module d'internationalisation (i18n)
// Charge les traductions depuis des fichiers JSON embarques dans le binaire,
// applique les surcharges de l'utilisateur cle par cle, et fournit une macro
// t!() pour acceder aux messages traduits.
// Utilise un RwLock pour permettre le changement de langue a chaud.

use std::collections::HashMap;
use std::sync::RwLock;

// Fichiers JSON embarques dans le binaire
const EN_JSON: &str = include_str!("../langs/en.json");
const FR_JSON: &str = include_str!("../langs/fr.json");
const ES_JSON: &str = include_str!("../langs/es.json");

// Singleton global contenant les traductions chargees (remplacable via RwLock)
static I18N: RwLock<Option<I18nStore>> = RwLock::new(None);

/// Stockage des traductions pour la langue selectionnee et le fallback anglais
struct I18nStore {
    current: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

/// Initialise ou reinitialise le systeme i18n avec la langue demandee.
/// Les surcharges de l'utilisateur (langs/<langue>.json dans le repertoire
/// de donnees du shell) remplacent les entrees embarquees cle par cle.
pub fn init(language: &str) {
    let overlay = std::fs::read_to_string(crate::paths::user_lang_file(language)).ok();
    init_from(language, overlay.as_deref());
}

pub(crate) fn init_from(language: &str, overlay_json: Option<&str>) {
    let embedded_json = match language {
        "fr" => FR_JSON,
        "es" => ES_JSON,
        _ => EN_JSON,
    };

    let mut current = flatten_json(embedded_json);
    if let Some(json) = overlay_json {
        for (key, value) in flatten_json(json) {
            current.insert(key, value);
        }
    }

    let fallback = if language == "en" {
        current.clone()
    } else {
        flatten_json(EN_JSON)
    };

    let mut store = I18N.write().unwrap();
    *store = Some(I18nStore { current, fallback });
}

/// Recupere un message traduit par sa cle pointee (ex: "updater.pending").
/// Retourne le fallback anglais si la cle n'existe pas dans la langue
/// courante, et la cle brute si le systeme n'est pas initialise.
pub fn get(key: &str) -> String {
    let store = I18N.read().unwrap();
    let Some(store) = store.as_ref() else {
        return key.to_string();
    };
    if let Some(val) = store.current.get(key) {
        val.clone()
    } else if let Some(val) = store.fallback.get(key) {
        val.clone()
    } else {
        key.to_string()
    }
}

/// Recupere un message traduit et remplace les arguments positionnels {0}, {1}, etc.
pub fn get_with_args(key: &str, args: &[&str]) -> String {
    let template = get(key);
    let mut result = template;
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// Aplatit un JSON imbrique en cles pointees.
/// Ex: {"updater": {"pending": "..."}} → {"updater.pending": "..."}
fn flatten_json(json_str: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(json_str) {
        flatten_value(&value, "", &mut map);
    }
    map
}

fn flatten_value(value: &serde_json::Value, prefix: &str, map: &mut HashMap<String, String>) {
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_value(val, &new_prefix, map);
            }
        }
        serde_json::Value::String(s) => {
            map.insert(prefix.to_string(), s.clone());
        }
        _ => {}
    }
}

/// Macro pour acceder facilement aux traductions.
/// Usage : t!("updater.none_pending") ou t!("app.instance_killed", pid)
#[macro_export]
macro_rules! t {
    ($key:expr) => {
        $crate::i18n::get($key)
    };
    ($key:expr, $($arg:expr),+) => {{
        let args: Vec<String> = vec![$($arg.to_string()),+];
        let refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
        $crate::i18n::get_with_args($key, &refs)
    }};
}
