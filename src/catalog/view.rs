//! Catalog Row Presentation
//!
//! What a list row shows for an item, independent of the markup.

use crate::models::{CatalogItem, ChoiceOption};

pub const INACTIVE_BADGE: &str = "Inactivo";

/// Text parts of one list row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub id: u32,
    pub name: String,
    /// "(code)" when the item has a non-empty code
    pub code_suffix: Option<String>,
    pub inactive_badge: Option<&'static str>,
    pub description: Option<String>,
}

impl CatalogRow {
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            code_suffix: item
                .code
                .as_deref()
                .filter(|code| !code.is_empty())
                .map(|code| format!("({})", code)),
            inactive_badge: (!item.is_active).then_some(INACTIVE_BADGE),
            description: item.description.clone().filter(|d| !d.is_empty()),
        }
    }

    /// Name and code as a single line, e.g. "Corte (corte)"
    pub fn heading(&self) -> String {
        match &self.code_suffix {
            Some(suffix) => format!("{} {}", self.name, suffix),
            None => self.name.clone(),
        }
    }
}

/// Load state of the active list
#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Loading,
    Loaded(Vec<CatalogItem>),
    Failed(String),
}

/// Active items as select options, server order preserved
pub fn active_options(items: &[CatalogItem]) -> Vec<ChoiceOption> {
    items
        .iter()
        .filter(|item| item.is_active)
        .map(|item| ChoiceOption::new(item.id.to_string(), item.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, code: Option<&str>, is_active: bool) -> CatalogItem {
        CatalogItem {
            id,
            name: name.to_string(),
            code: code.map(str::to_string),
            description: None,
            is_active,
            display_order: id as i32,
        }
    }

    #[test]
    fn test_active_row_has_no_badge() {
        let json = r#"[{"id":1,"name":"Corte","code":"corte","isActive":true,"displayOrder":1}]"#;
        let items: Vec<CatalogItem> = serde_json::from_str(json).unwrap();
        let row = CatalogRow::from_item(&items[0]);
        assert_eq!(row.heading(), "Corte (corte)");
        assert_eq!(row.inactive_badge, None);
    }

    #[test]
    fn test_inactive_row_has_badge() {
        let row = CatalogRow::from_item(&item(1, "Corte", Some("corte"), false));
        assert_eq!(row.heading(), "Corte (corte)");
        assert_eq!(row.inactive_badge, Some("Inactivo"));
    }

    #[test]
    fn test_empty_code_and_description_hidden() {
        let mut it = item(2, "Caída", Some(""), true);
        it.description = Some(String::new());
        let row = CatalogRow::from_item(&it);
        assert_eq!(row.heading(), "Caída");
        assert!(row.description.is_none());
    }

    #[test]
    fn test_active_options_skip_inactive_and_keep_order() {
        let items = vec![
            item(3, "Zeta", None, true),
            item(1, "Alfa", None, false),
            item(2, "Beta", None, true),
        ];
        let options = active_options(&items);
        assert_eq!(
            options,
            vec![ChoiceOption::new("3", "Zeta"), ChoiceOption::new("2", "Beta")]
        );
    }
}
