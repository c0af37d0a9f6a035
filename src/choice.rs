//! Choice Widget Logic
//!
//! Filtering, toggle selection and the "add new" sub-dialog of the
//! searchable select, kept apart from the markup.

use crate::models::ChoiceOption;

/// Simple fuzzy match: check if query chars appear in order in the target
pub fn fuzzy_match(query: &str, target: &str) -> bool {
    let query = query.to_lowercase();
    let target = target.to_lowercase();

    let mut target_chars = target.chars();
    for query_char in query.chars() {
        loop {
            match target_chars.next() {
                Some(c) if c == query_char => break,
                Some(_) => continue,
                None => return false,
            }
        }
    }
    true
}

/// Options whose label or value matches the search text
pub fn filter_options(options: &[ChoiceOption], query: &str) -> Vec<ChoiceOption> {
    let query = query.trim();
    if query.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|option| fuzzy_match(query, &option.label) || fuzzy_match(query, &option.value))
        .cloned()
        .collect()
}

/// Picking the selected option clears it, picking another replaces it.
/// An empty string means "nothing selected".
pub fn toggle_selection(current: &str, chosen: &str) -> String {
    if current == chosen {
        String::new()
    } else {
        chosen.to_string()
    }
}

pub fn selected_label<'a>(options: &'a [ChoiceOption], value: &str) -> Option<&'a str> {
    if value.is_empty() {
        return None;
    }
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label.as_str())
}

/// State of the "add new" sub-dialog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddNewDialog {
    pub open: bool,
    pub input: String,
    pub submitting: bool,
}

impl AddNewDialog {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closing keeps the typed text, like dismissing a modal does
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Trimmed name to hand to the creation callback, or `None` when the
    /// input is blank or a submit is already in flight
    pub fn begin(&mut self) -> Option<String> {
        if self.submitting {
            return None;
        }
        let name = self.input.trim();
        if name.is_empty() {
            return None;
        }
        let name = name.to_string();
        self.submitting = true;
        Some(name)
    }

    pub fn succeed(&mut self) {
        self.submitting = false;
        self.input.clear();
        self.open = false;
    }

    /// Stay open with the text intact so the user can retry
    pub fn fail(&mut self) {
        self.submitting = false;
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Agregando..."
        } else {
            "Agregar"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<ChoiceOption> {
        vec![
            ChoiceOption::new("1", "Corte"),
            ChoiceOption::new("2", "Bordado"),
            ChoiceOption::new("3", "Plancha/Empaque"),
        ]
    }

    #[test]
    fn test_fuzzy_match() {
        assert!(fuzzy_match("crt", "Corte"));
        assert!(fuzzy_match("BOR", "bordado"));
        assert!(fuzzy_match("", "anything"));
        assert!(!fuzzy_match("xyz", "Corte"));
        assert!(!fuzzy_match("etroc", "Corte"));
    }

    #[test]
    fn test_filter_options() {
        let all = options();
        assert_eq!(filter_options(&all, "").len(), 3);
        assert_eq!(filter_options(&all, "  "), all);

        let hits = filter_options(&all, "empa");
        assert_eq!(hits, vec![ChoiceOption::new("3", "Plancha/Empaque")]);

        // value matches as well
        assert_eq!(filter_options(&all, "2"), vec![ChoiceOption::new("2", "Bordado")]);
        assert!(filter_options(&all, "zz").is_empty());
    }

    #[test]
    fn test_toggle_twice_clears() {
        let first = toggle_selection("", "2");
        assert_eq!(first, "2");
        let second = toggle_selection(&first, "2");
        assert_eq!(second, "");
    }

    #[test]
    fn test_toggle_replaces_other() {
        assert_eq!(toggle_selection("1", "3"), "3");
    }

    #[test]
    fn test_selected_label() {
        let all = options();
        assert_eq!(selected_label(&all, "2"), Some("Bordado"));
        assert_eq!(selected_label(&all, ""), None);
        assert_eq!(selected_label(&all, "99"), None);
    }

    #[test]
    fn test_blank_input_never_reaches_callback() {
        let mut calls = Vec::new();
        for input in ["", "   ", "\t\n"] {
            let mut dialog = AddNewDialog {
                open: true,
                input: input.to_string(),
                submitting: false,
            };
            if let Some(name) = dialog.begin() {
                calls.push(name);
            }
            assert!(!dialog.submitting);
        }
        assert!(calls.is_empty());
    }

    #[test]
    fn test_begin_trims_and_blocks_resubmit() {
        let mut dialog = AddNewDialog::default();
        dialog.open();
        dialog.input = "  Caída de altura ".to_string();

        assert_eq!(dialog.begin().as_deref(), Some("Caída de altura"));
        assert_eq!(dialog.submit_label(), "Agregando...");
        assert_eq!(dialog.begin(), None);
    }

    #[test]
    fn test_success_resets_and_closes() {
        let mut dialog = AddNewDialog::default();
        dialog.open();
        dialog.input = "Golpe".to_string();
        dialog.begin();
        dialog.succeed();
        assert_eq!(dialog, AddNewDialog::default());
    }

    #[test]
    fn test_failure_keeps_text_for_retry() {
        let mut dialog = AddNewDialog::default();
        dialog.open();
        dialog.input = "Golpe".to_string();
        dialog.begin();
        dialog.fail();

        assert!(dialog.open);
        assert_eq!(dialog.input, "Golpe");
        assert_eq!(dialog.begin().as_deref(), Some("Golpe"));
    }
}
