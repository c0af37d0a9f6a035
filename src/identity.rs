//! User Identity Helpers
//!
//! Greeting, initials and per-area naming/colors shown in the top bar.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

/// Area code -> display name
const AREA_NAMES: &[(&str, &str)] = &[
    ("corte", "Corte"),
    ("bordado", "Bordado"),
    ("ensamble", "Ensamble"),
    ("plancha", "Plancha/Empaque"),
    ("calidad", "Calidad"),
    ("envios", "Envíos"),
    ("admin", "Admin"),
    ("operaciones", "Operaciones"),
    ("almacen", "Almacén"),
    ("diseño", "Diseño"),
];

/// Area code -> avatar background
const AREA_COLORS: &[(&str, &str)] = &[
    ("corte", "#10b981"),
    ("bordado", "#3b82f6"),
    ("ensamble", "#8b5cf6"),
    ("plancha", "#ec4899"),
    ("calidad", "#6366f1"),
    ("envios", "#8b5cf6"),
    ("admin", "#64748b"),
    ("operaciones", "#22c55e"),
    ("almacen", "#f59e0b"),
    ("diseño", "#a855f7"),
];

const FALLBACK_AREA_COLOR: &str = "#9ca3af";

pub fn area_display_name(area: &str) -> &str {
    AREA_NAMES
        .iter()
        .find(|(code, _)| *code == area)
        .map(|(_, name)| *name)
        .unwrap_or(area)
}

pub fn area_color(area: &str) -> &'static str {
    AREA_COLORS
        .iter()
        .find(|(code, _)| *code == area)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_AREA_COLOR)
}

/// First letter of a single word, or of the first and last words
pub fn user_initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let first_char = |word: &str| word.chars().next();
    let initials: String = match words.as_slice() {
        [] => return "U".to_string(),
        [only] => first_char(*only).into_iter().collect(),
        [first, .., last] => first_char(*first).into_iter().chain(first_char(*last)).collect(),
    };
    initials.to_uppercase()
}

pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        6..=11 => "Buenos días",
        12..=18 => "Buenas tardes",
        _ => "Buenas noches",
    }
}

pub fn greeting_line(hour: u32, name: &str) -> String {
    format!("{}, {}", greeting_for_hour(hour), name)
}

/// Microsoft Teams deep link to chat with `username`
pub fn teams_chat_link(username: &str) -> String {
    format!(
        "msteams:/l/chat/0/0?users={}",
        utf8_percent_encode(username, NON_ALPHANUMERIC)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_names() {
        assert_eq!(area_display_name("plancha"), "Plancha/Empaque");
        assert_eq!(area_display_name("almacen"), "Almacén");
        assert_eq!(area_display_name("mantenimiento"), "mantenimiento");
    }

    #[test]
    fn test_area_colors() {
        assert_eq!(area_color("corte"), "#10b981");
        assert_eq!(area_color(""), FALLBACK_AREA_COLOR);
    }

    #[test]
    fn test_initials() {
        assert_eq!(user_initials("maría"), "M");
        assert_eq!(user_initials("Ana Lucía Pérez"), "AP");
        assert_eq!(user_initials("  juan   soto "), "JS");
        assert_eq!(user_initials(""), "U");
        assert_eq!(user_initials("   "), "U");
    }

    #[test]
    fn test_greeting_boundaries() {
        assert_eq!(greeting_for_hour(5), "Buenas noches");
        assert_eq!(greeting_for_hour(6), "Buenos días");
        assert_eq!(greeting_for_hour(11), "Buenos días");
        assert_eq!(greeting_for_hour(12), "Buenas tardes");
        assert_eq!(greeting_for_hour(18), "Buenas tardes");
        assert_eq!(greeting_for_hour(19), "Buenas noches");
        assert_eq!(greeting_line(9, "Rosa"), "Buenos días, Rosa");
    }

    #[test]
    fn test_teams_link_encodes_username() {
        assert_eq!(teams_chat_link("rosa"), "msteams:/l/chat/0/0?users=rosa");
        assert_eq!(
            teams_chat_link("rosa@jasana.mx"),
            "msteams:/l/chat/0/0?users=rosa%40jasana%2Emx"
        );
    }
}
