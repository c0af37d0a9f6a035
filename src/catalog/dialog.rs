//! Create/Edit Dialog State
//!
//! One dialog session: closed -> open (create | edit) -> submitting ->
//! closed on success, or back to open with an error on failure.
//! "Closed" is the absence of a `CatalogDialog`.

use super::{CatalogApi, CatalogStore};
use crate::error::{CatalogError, DraftError};
use crate::models::{CatalogItem, CatalogKind, CatalogPayload};

/// In-progress form values; optional text fields default to ""
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogDraft {
    pub name: String,
    pub code: String,
    pub description: String,
    pub is_active: bool,
    pub display_order: i32,
}

impl Default for CatalogDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            description: String::new(),
            is_active: true,
            display_order: 0,
        }
    }
}

impl CatalogDraft {
    pub fn from_item(item: &CatalogItem) -> Self {
        Self {
            name: item.name.clone(),
            code: item.code.clone().unwrap_or_default(),
            description: item.description.clone().unwrap_or_default(),
            is_active: item.is_active,
            display_order: item.display_order,
        }
    }

    fn payload(&self) -> CatalogPayload {
        CatalogPayload {
            name: self.name.trim().to_string(),
            code: non_empty(&self.code),
            description: non_empty(&self.description),
            is_active: self.is_active,
            display_order: self.display_order,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogMode {
    Create,
    Edit(CatalogItem),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    Editing,
    Submitting,
}

/// Request produced by a valid submit
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create {
        kind: CatalogKind,
        payload: CatalogPayload,
    },
    Update {
        kind: CatalogKind,
        id: u32,
        payload: CatalogPayload,
    },
}

impl Submission {
    pub fn success_message(&self) -> &'static str {
        match self {
            Submission::Create { .. } => "Elemento creado correctamente",
            Submission::Update { .. } => "Elemento actualizado correctamente",
        }
    }

    pub async fn send<A: CatalogApi>(&self, store: &CatalogStore<A>) -> Result<CatalogItem, CatalogError> {
        match self {
            Submission::Create { kind, payload } => store.create(*kind, payload).await,
            Submission::Update { kind, id, payload } => store.update(*kind, *id, payload).await,
        }
    }
}

/// An open create/edit dialog
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogDialog {
    kind: CatalogKind,
    mode: DialogMode,
    draft: CatalogDraft,
    phase: DialogPhase,
    error: Option<String>,
}

impl CatalogDialog {
    pub fn for_create(kind: CatalogKind) -> Self {
        Self {
            kind,
            mode: DialogMode::Create,
            draft: CatalogDraft::default(),
            phase: DialogPhase::Editing,
            error: None,
        }
    }

    pub fn for_edit(kind: CatalogKind, item: CatalogItem) -> Self {
        Self {
            kind,
            draft: CatalogDraft::from_item(&item),
            mode: DialogMode::Edit(item),
            phase: DialogPhase::Editing,
            error: None,
        }
    }

    pub fn draft(&self) -> &CatalogDraft {
        &self.draft
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_editing_existing(&self) -> bool {
        matches!(self.mode, DialogMode::Edit(_))
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == DialogPhase::Submitting
    }

    pub fn shows_code(&self) -> bool {
        self.kind.requires_code()
    }

    /// `code` is frozen once the item exists; dependent data keys on it
    pub fn code_editable(&self) -> bool {
        !self.is_editing_existing()
    }

    pub fn title(&self) -> String {
        let verb = if self.is_editing_existing() { "Editar" } else { "Agregar" };
        format!("{} {}", verb, self.kind.title())
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.phase, self.is_editing_existing()) {
            (DialogPhase::Submitting, _) => "Guardando...",
            (DialogPhase::Editing, true) => "Actualizar",
            (DialogPhase::Editing, false) => "Crear",
        }
    }

    pub fn set_name(&mut self, name: String) {
        self.draft.name = name;
    }

    pub fn set_code(&mut self, code: String) {
        if self.code_editable() {
            self.draft.code = code;
        }
    }

    pub fn set_description(&mut self, description: String) {
        self.draft.description = description;
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.draft.is_active = is_active;
    }

    /// Unparsable input leaves the current value untouched
    pub fn set_display_order_input(&mut self, raw: &str) {
        if let Ok(order) = raw.trim().parse::<i32>() {
            self.draft.display_order = order;
        }
    }

    fn validate(&self) -> Result<(), DraftError> {
        if self.draft.name.trim().is_empty() {
            return Err(DraftError::NameRequired);
        }
        if self.shows_code() && self.code_editable() && self.draft.code.trim().is_empty() {
            return Err(DraftError::CodeRequired);
        }
        Ok(())
    }

    /// Validate and move to `Submitting`, yielding the request to send
    pub fn begin_submit(&mut self) -> Result<Submission, DraftError> {
        if self.is_submitting() {
            return Err(DraftError::AlreadySubmitting);
        }
        if let Err(e) = self.validate() {
            self.error = Some(e.to_string());
            return Err(e);
        }

        let mut payload = self.draft.payload();
        let submission = match &self.mode {
            DialogMode::Create => Submission::Create {
                kind: self.kind,
                payload,
            },
            DialogMode::Edit(item) => {
                payload.code = item.code.clone();
                Submission::Update {
                    kind: self.kind,
                    id: item.id,
                    payload,
                }
            }
        };
        self.phase = DialogPhase::Submitting;
        self.error = None;
        Ok(submission)
    }

    /// Back to editing with the draft intact so the user can retry
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.is_submitting() {
            self.phase = DialogPhase::Editing;
            self.error = Some(message.into());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corte() -> CatalogItem {
        CatalogItem {
            id: 1,
            name: "Corte".to_string(),
            code: Some("corte".to_string()),
            description: None,
            is_active: true,
            display_order: 1,
        }
    }

    #[test]
    fn test_create_seeds_defaults() {
        let dialog = CatalogDialog::for_create(CatalogKind::Areas);
        assert_eq!(dialog.draft(), &CatalogDraft::default());
        assert!(dialog.draft().is_active);
        assert_eq!(dialog.title(), "Agregar Áreas");
        assert_eq!(dialog.submit_label(), "Crear");
        assert!(dialog.code_editable());
    }

    #[test]
    fn test_edit_seeds_from_item() {
        let dialog = CatalogDialog::for_edit(CatalogKind::Areas, corte());
        assert_eq!(dialog.draft().name, "Corte");
        assert_eq!(dialog.draft().code, "corte");
        assert_eq!(dialog.draft().description, "");
        assert_eq!(dialog.draft().display_order, 1);
        assert_eq!(dialog.title(), "Editar Áreas");
        assert_eq!(dialog.submit_label(), "Actualizar");
        assert!(!dialog.code_editable());
    }

    #[test]
    fn test_edit_sends_original_code() {
        let mut dialog = CatalogDialog::for_edit(CatalogKind::Areas, corte());
        dialog.set_code("otro".to_string());
        dialog.set_name("Corte láser".to_string());

        let submission = dialog.begin_submit().unwrap();
        match submission {
            Submission::Update { kind, id, payload } => {
                assert_eq!(kind, CatalogKind::Areas);
                assert_eq!(id, 1);
                assert_eq!(payload.code.as_deref(), Some("corte"));
                assert_eq!(payload.name, "Corte láser");
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_create_payload_shaping() {
        let mut dialog = CatalogDialog::for_create(CatalogKind::DamageCausers);
        dialog.set_name("  Montacargas ".to_string());
        dialog.set_description("   ".to_string());
        dialog.set_display_order_input("4");
        dialog.set_active(false);

        let submission = dialog.begin_submit().unwrap();
        assert_eq!(
            submission,
            Submission::Create {
                kind: CatalogKind::DamageCausers,
                payload: CatalogPayload {
                    name: "Montacargas".to_string(),
                    code: None,
                    description: None,
                    is_active: false,
                    display_order: 4,
                },
            }
        );
        assert_eq!(submission.success_message(), "Elemento creado correctamente");
    }

    #[test]
    fn test_validation_keeps_dialog_editing() {
        let mut dialog = CatalogDialog::for_create(CatalogKind::Areas);
        assert_eq!(dialog.begin_submit(), Err(DraftError::NameRequired));
        assert!(!dialog.is_submitting());
        assert_eq!(dialog.error(), Some("El nombre es obligatorio"));

        dialog.set_name("Bordado".to_string());
        assert_eq!(dialog.begin_submit(), Err(DraftError::CodeRequired));

        dialog.set_code("bordado".to_string());
        assert!(dialog.begin_submit().is_ok());
        assert!(dialog.error().is_none());
    }

    #[test]
    fn test_double_submit_rejected() {
        let mut dialog = CatalogDialog::for_create(CatalogKind::AccidentTypes);
        dialog.set_name("Corte".to_string());
        assert!(dialog.begin_submit().is_ok());
        assert_eq!(dialog.submit_label(), "Guardando...");
        assert_eq!(dialog.begin_submit(), Err(DraftError::AlreadySubmitting));
    }

    #[test]
    fn test_failure_preserves_draft() {
        let mut dialog = CatalogDialog::for_create(CatalogKind::AccidentTypes);
        dialog.set_name("Golpe".to_string());
        dialog.set_description("Impacto con objeto".to_string());
        dialog.begin_submit().unwrap();

        dialog.fail("Error al crear elemento");
        assert!(!dialog.is_submitting());
        assert_eq!(dialog.error(), Some("Error al crear elemento"));
        assert_eq!(dialog.draft().name, "Golpe");
        assert_eq!(dialog.draft().description, "Impacto con objeto");

        // retry works
        assert!(dialog.begin_submit().is_ok());
    }

    #[test]
    fn test_fail_ignored_when_not_submitting() {
        let mut dialog = CatalogDialog::for_create(CatalogKind::Areas);
        dialog.fail("late error");
        assert!(dialog.error().is_none());
    }

    #[test]
    fn test_bad_display_order_keeps_value() {
        let mut dialog = CatalogDialog::for_edit(CatalogKind::Areas, corte());
        dialog.set_display_order_input("abc");
        assert_eq!(dialog.draft().display_order, 1);
        dialog.set_display_order_input("-2");
        assert_eq!(dialog.draft().display_order, -2);
    }
}
