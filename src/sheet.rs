use std::collections::HashMap;

use crate::dataset::Dataset;
use crate::state::{CellPosition, KeyOutcome, NavKey, NavState, Navigation};

/// Cell values: user edits layered over the static dataset.
pub struct Sheet {
    dataset: Dataset,
    edits: HashMap<CellPosition, String>,
}

impl Sheet {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            edits: HashMap::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn value(&self, pos: CellPosition) -> &str {
        match self.edits.get(&pos) {
            Some(edited) => edited.as_str(),
            None => self.dataset.seed_value(pos).unwrap_or(""),
        }
    }

    pub fn is_edited(&self, pos: CellPosition) -> bool {
        self.edits.contains_key(&pos)
    }

    /// Store an edit. Returns whether the displayed value changed.
    pub fn commit(&mut self, pos: CellPosition, value: String) -> bool {
        if self.value(pos) == value {
            return false;
        }
        log::info!("cell {} updated to {:?}", pos.to_reference(), value);
        self.edits.insert(pos, value);
        true
    }
}

/// Editor follow-up after a key went through [`EditSession::apply_key`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditTransition {
    Unchanged,
    /// Editing began; load this value into the editor.
    Started(String),
    /// Editing was abandoned; the editor text is discarded.
    Cancelled,
}

/// Selection, edit mode and cell values as one unit, so commit and cancel
/// decisions don't depend on the order the host runs its focus callbacks.
pub struct EditSession {
    navigation: Navigation,
    sheet: Sheet,
}

impl EditSession {
    pub fn new(navigation: Navigation, sheet: Sheet) -> Self {
        Self { navigation, sheet }
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn sheet(&self) -> &Sheet {
        &self.sheet
    }

    pub fn apply_key(&mut self, key: NavKey) -> (KeyOutcome, EditTransition) {
        let before = self.navigation.state();
        let outcome = self.navigation.handle_key(key);
        let transition = match (before, self.navigation.state()) {
            (NavState::Idle(_), NavState::Editing(pos)) => {
                EditTransition::Started(self.sheet.value(pos).to_string())
            }
            (NavState::Editing(pos), NavState::Idle(_)) => {
                log::info!(
                    "edit of {} cancelled, kept {:?}",
                    pos.to_reference(),
                    self.sheet.value(pos)
                );
                EditTransition::Cancelled
            }
            _ => EditTransition::Unchanged,
        };
        (outcome, transition)
    }

    /// Store the editor text in the cell being edited and leave edit mode.
    /// Returns false, storing nothing, when no edit is open.
    pub fn commit(&mut self, text: String) -> bool {
        let NavState::Editing(pos) = self.navigation.state() else {
            return false;
        };
        self.sheet.commit(pos, text);
        self.navigation.set_editing(false);
        true
    }

    /// Select `pos`, first committing `editor_text` into any open edit.
    pub fn click(&mut self, pos: CellPosition, editor_text: String) {
        self.commit(editor_text);
        self.navigation.select(pos);
    }

    /// Select `pos` and start editing it. Returns the value to load into the editor.
    pub fn double_click(&mut self, pos: CellPosition, editor_text: String) -> String {
        self.click(pos, editor_text);
        self.navigation.set_editing(true);
        self.sheet.value(self.navigation.selected()).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> EditSession {
        EditSession::new(Navigation::new(25, 10), Sheet::new(Dataset::job_requests()))
    }

    #[test]
    fn falls_back_to_seed_then_empty() {
        let sheet = Sheet::new(Dataset::job_requests());
        assert_eq!(sheet.value(CellPosition::new(4, 4)), "Emily Green");
        assert_eq!(sheet.value(CellPosition::new(20, 4)), "");
    }

    #[test]
    fn edits_override_seed() {
        let mut sheet = Sheet::new(Dataset::job_requests());
        let pos = CellPosition::new(1, 3);
        assert!(sheet.commit(pos, "Complete".to_string()));
        assert_eq!(sheet.value(pos), "Complete");
        assert!(sheet.is_edited(pos));
        assert!(!sheet.is_edited(CellPosition::new(3, 1)));
    }

    #[test]
    fn unchanged_commit_is_not_recorded() {
        let mut sheet = Sheet::new(Dataset::job_requests());
        let pos = CellPosition::new(2, 4);
        assert!(!sheet.commit(pos, "Irfan Khan".to_string()));
        assert!(!sheet.is_edited(pos));
        assert!(!sheet.commit(CellPosition::new(12, 2), String::new()));
    }

    #[test]
    fn empty_edit_clears_seeded_cell() {
        let mut sheet = Sheet::new(Dataset::job_requests());
        let pos = CellPosition::new(5, 5);
        assert!(sheet.commit(pos, String::new()));
        assert_eq!(sheet.value(pos), "");
    }

    #[test]
    fn keys_do_not_collide_across_rows_and_columns() {
        let mut sheet = Sheet::new(Dataset::job_requests());
        sheet.commit(CellPosition::new(1, 12), "a".to_string());
        sheet.commit(CellPosition::new(11, 2), "b".to_string());
        assert_eq!(sheet.value(CellPosition::new(1, 12)), "a");
        assert_eq!(sheet.value(CellPosition::new(11, 2)), "b");
    }

    #[test]
    fn enter_then_commit_stores_the_editor_text() {
        let mut session = session();
        session.click(CellPosition::new(2, 4), String::new());
        let (outcome, transition) = session.apply_key(NavKey::Enter);
        assert_eq!(outcome, KeyOutcome::Handled);
        assert_eq!(transition, EditTransition::Started("Irfan Khan".to_string()));

        assert!(session.commit("Jane Roe".to_string()));
        assert!(!session.navigation().is_editing());
        assert_eq!(session.navigation().selected(), CellPosition::new(2, 4));
        assert_eq!(session.sheet().value(CellPosition::new(2, 4)), "Jane Roe");
    }

    #[test]
    fn escape_discards_the_editor_text() {
        let mut session = session();
        session.apply_key(NavKey::Enter);
        let (outcome, transition) = session.apply_key(NavKey::Escape);
        assert_eq!(outcome, KeyOutcome::Handled);
        assert_eq!(transition, EditTransition::Cancelled);
        assert!(!session.navigation().is_editing());
        assert!(!session.sheet().is_edited(CellPosition::origin()));
    }

    #[test]
    fn blur_after_escape_commits_nothing() {
        let mut session = session();
        let pos = CellPosition::origin();
        let seeded = session.sheet().value(pos).to_string();
        session.apply_key(NavKey::Enter);
        session.apply_key(NavKey::Escape);

        // The editor loses focus with the abandoned text still in it.
        assert!(!session.commit("typed then abandoned".to_string()));
        assert_eq!(session.sheet().value(pos), seeded);
        assert!(!session.sheet().is_edited(pos));
    }

    #[test]
    fn blur_while_editing_commits_once() {
        let mut session = session();
        session.apply_key(NavKey::Enter);
        assert!(session.commit("first".to_string()));
        assert!(!session.commit("second".to_string()));
        assert_eq!(session.sheet().value(CellPosition::origin()), "first");
    }

    #[test]
    fn clicking_elsewhere_commits_before_moving() {
        let mut session = session();
        session.apply_key(NavKey::Enter);
        session.click(CellPosition::new(3, 2), "edited".to_string());
        assert_eq!(session.sheet().value(CellPosition::origin()), "edited");
        assert!(!session.sheet().is_edited(CellPosition::new(3, 2)));
        assert_eq!(session.navigation().selected(), CellPosition::new(3, 2));
        assert!(!session.navigation().is_editing());
    }

    #[test]
    fn click_while_idle_ignores_editor_text() {
        let mut session = session();
        session.click(CellPosition::new(4, 4), "stale".to_string());
        assert!(!session.sheet().is_edited(CellPosition::origin()));
        assert_eq!(session.navigation().selected(), CellPosition::new(4, 4));
    }

    #[test]
    fn double_click_opens_the_target_cell() {
        let mut session = session();
        session.apply_key(NavKey::Enter);
        let loaded = session.double_click(CellPosition::new(4, 4), "kept".to_string());
        assert_eq!(loaded, "Emily Green");
        assert_eq!(session.sheet().value(CellPosition::origin()), "kept");
        assert!(session.navigation().is_editing_cell(CellPosition::new(4, 4)));
    }

    #[test]
    fn keys_other_than_escape_pass_through_while_editing() {
        let mut session = session();
        session.apply_key(NavKey::Enter);
        for key in [NavKey::ArrowDown, NavKey::Tab, NavKey::Enter, NavKey::Other] {
            assert_eq!(
                session.apply_key(key),
                (KeyOutcome::Ignored, EditTransition::Unchanged)
            );
        }
        assert!(session.navigation().is_editing_cell(CellPosition::origin()));
    }
}
