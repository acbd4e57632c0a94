//! Table naming - English pluralization of record type names
//!
//! `tableize("UserRole")` gives `"user_roles"`: the type name is snake
//! cased and only its last word is pluralized.

use convert_case::{Case, Casing};

const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("ox", "oxen"),
    ("leaf", "leaves"),
    ("life", "lives"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("quiz", "quizzes"),
    ("status", "statuses"),
    ("datum", "data"),
    ("criterion", "criteria"),
    ("hero", "heroes"),
    ("potato", "potatoes"),
    ("tomato", "tomatoes"),
    ("echo", "echoes"),
    ("veto", "vetoes"),
    ("torpedo", "torpedoes"),
    ("alias", "aliases"),
    ("bias", "biases"),
    ("canvas", "canvases"),
    ("atlas", "atlases"),
    ("gas", "gases"),
    ("menu", "menus"),
];

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "deer",
    "news",
    "metadata",
];

/// Singulars ending in `-ie`, whose plural is not `-y` to `-ies`
const IE_SINGULARS: &[&str] = &[
    "movie", "cookie", "pie", "tie", "lie", "die", "calorie", "zombie", "rookie", "selfie",
    "brownie", "genie", "hippie", "smoothie", "prairie", "goalie",
];

/// Singulars ending in `-e` whose plural looks like an `-es` plural
const E_SINGULARS: &[&str] = &[
    "cache", "niche", "headache", "avalanche", "moustache", "mustache", "quiche", "use",
    "excuse", "abuse", "fuse", "muse",
];

/// Greek `-is` nouns, plural `-es`
const IS_ENDINGS: &[&str] = &["lysis", "thesis", "gnosis", "crisis", "opsis"];

/// Storage table name for a singular type name
pub fn tableize(type_name: &str) -> String {
    let snake = type_name.to_case(Case::Snake);
    match snake.rsplit_once('_') {
        Some((head, last)) => format!("{}_{}", head, pluralize(last)),
        None => pluralize(&snake),
    }
}

/// Simple pluralization (English-centric)
pub fn pluralize(word: &str) -> String {
    let lower = word.to_lowercase();
    if lower.is_empty() || UNCOUNTABLE.contains(&lower.as_str()) {
        return lower;
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(singular, _)| *singular == lower) {
        return plural.to_string();
    }
    if IRREGULAR.iter().any(|(_, plural)| *plural == lower) {
        return lower;
    }

    if lower.ends_with('y') && !ends_with_any(&lower, &["ay", "ey", "iy", "oy", "uy"]) {
        format!("{}ies", &lower[..lower.len() - 1])
    } else if lower.len() > 2 && lower.ends_with("is") {
        format!("{}es", &lower[..lower.len() - 2])
    } else if ends_with_any(&lower, &["s", "sh", "ch", "x", "z"]) {
        format!("{}es", lower)
    } else {
        format!("{}s", lower)
    }
}

/// Simple singularization (English-centric). Only the last underscore
/// separated word is singularized, so `user_roles` gives `user_role`.
pub fn singularize(word: &str) -> String {
    let lower = word.to_lowercase();
    match lower.rsplit_once('_') {
        Some((head, last)) => format!("{}_{}", head, singularize_word(last)),
        None => singularize_word(&lower),
    }
}

fn singularize_word(word: &str) -> String {
    if word.is_empty() || UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(_, plural)| *plural == word) {
        return singular.to_string();
    }
    if IRREGULAR.iter().any(|(singular, _)| *singular == word)
        || ends_with_any(word, &["ss", "is", "us"])
    {
        return word.to_string();
    }

    let Some(stem) = word.strip_suffix('s') else {
        return word.to_string();
    };

    if let Some(base) = stem.strip_suffix("ie") {
        if IE_SINGULARS.contains(&stem) {
            return stem.to_string();
        }
        return format!("{}y", base);
    }

    if let Some(base) = stem.strip_suffix('e') {
        let greek = format!("{}is", base);
        if ends_with_any(&greek, IS_ENDINGS) {
            return greek;
        }
        if E_SINGULARS.contains(&stem) {
            return stem.to_string();
        }
        if ends_with_any(word, &["sses", "zzes", "xes", "ches", "shes"]) {
            return base.to_string();
        }
        // bus, virus and campus, but not house or cause
        if word.ends_with("uses") && !ends_with_any(word, &["ouses", "auses"]) {
            return base.to_string();
        }
    }

    stem.to_string()
}

fn ends_with_any(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| word.ends_with(suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralization() {
        // Regular plurals
        assert_eq!(pluralize("post"), "posts");
        assert_eq!(pluralize("user"), "users");

        // -y plurals
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("company"), "companies");

        // -es plurals
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("class"), "classes");
        assert_eq!(pluralize("brush"), "brushes");

        // Vowel + y
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("key"), "keys");

        // -is plurals
        assert_eq!(pluralize("analysis"), "analyses");
        assert_eq!(pluralize("crisis"), "crises");
        assert_eq!(pluralize("basis"), "bases");

        // Consonant + o
        assert_eq!(pluralize("hero"), "heroes");
        assert_eq!(pluralize("potato"), "potatoes");
        assert_eq!(pluralize("photo"), "photos");

        // Singulars ending in e
        assert_eq!(pluralize("case"), "cases");
        assert_eq!(pluralize("movie"), "movies");
    }

    #[test]
    fn test_irregular_and_uncountable() {
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("child"), "children");
        assert_eq!(pluralize("people"), "people");
        assert_eq!(pluralize("sheep"), "sheep");
        assert_eq!(pluralize("status"), "statuses");
    }

    #[test]
    fn test_singularization() {
        assert_eq!(singularize("users"), "user");
        assert_eq!(singularize("posts"), "post");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("address"), "address");
        assert_eq!(singularize("series"), "series");
        assert_eq!(singularize("status"), "status");
        assert_eq!(singularize("user_roles"), "user_role");
    }

    #[test]
    fn test_singularize_e_stems() {
        assert_eq!(singularize("cases"), "case");
        assert_eq!(singularize("houses"), "house");
        assert_eq!(singularize("movies"), "movie");
        assert_eq!(singularize("caches"), "cache");
        assert_eq!(singularize("sizes"), "size");
        assert_eq!(singularize("responses"), "response");
        assert_eq!(singularize("prices"), "price");
        assert_eq!(singularize("pages"), "page");
        assert_eq!(singularize("archives"), "archive");
    }

    #[test]
    fn test_singularize_es_plurals() {
        assert_eq!(singularize("classes"), "class");
        assert_eq!(singularize("buses"), "bus");
        assert_eq!(singularize("matches"), "match");
        assert_eq!(singularize("brushes"), "brush");
        assert_eq!(singularize("analyses"), "analysis");
        assert_eq!(singularize("crises"), "crisis");
        assert_eq!(singularize("heroes"), "hero");
        assert_eq!(singularize("aliases"), "alias");
    }

    #[test]
    fn test_singularize_inverts_tableize() {
        let names = [
            "Case",
            "House",
            "Movie",
            "Cache",
            "Size",
            "Response",
            "Analysis",
            "Crisis",
            "Hero",
            "Potato",
            "Bus",
            "Class",
            "Category",
            "Box",
            "Match",
            "Person",
            "UserRole",
            "AuditLogEntry",
            "Cookie",
            "Status",
        ];
        for name in names {
            assert_eq!(
                singularize(&tableize(name)),
                name.to_case(Case::Snake),
                "round trip of {}",
                name
            );
        }
    }

    #[test]
    fn test_tableize() {
        assert_eq!(tableize("User"), "users");
        assert_eq!(tableize("UserRole"), "user_roles");
        assert_eq!(tableize("Category"), "categories");
        assert_eq!(tableize("Person"), "people");
        assert_eq!(tableize("AuditLogEntry"), "audit_log_entries");
        assert_eq!(tableize("Analysis"), "analyses");
        assert_eq!(tableize("SalesHero"), "sales_heroes");
        assert_eq!(tableize("SupportCase"), "support_cases");
    }

    #[test]
    fn test_tableize_empty_name() {
        assert_eq!(tableize(""), "");
    }
}
