use crate::checklist::CheckedItems;
use crate::clipboard::{Clipboard, ClipboardError};
use crate::notes::ReviewNotes;
use crate::{ReviewProgress, Tab, TemplateKind};

/// Everything the assistant knows about the review in progress.
///
/// Lives only as long as the running interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewState {
    pub checked: CheckedItems,
    pub notes: ReviewNotes,
    pub tab: Tab,
}

/// A user interaction that changes the review state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectTab(Tab),
    Toggle { category: String, index: usize },
    ResetAll,
    InsertTemplate { kind: TemplateKind, snippet: String },
    EditNotes(String),
    ClearNotes,
}

impl Action {
    pub fn toggle(category: &str, index: usize) -> Self {
        Action::Toggle {
            category: category.to_owned(),
            index,
        }
    }

    pub fn insert_template(kind: TemplateKind, snippet: &str) -> Self {
        Action::InsertTemplate {
            kind,
            snippet: snippet.to_owned(),
        }
    }
}

/// Apply one action and return the resulting state.
pub fn update(mut state: ReviewState, action: Action) -> ReviewState {
    tracing::debug!(?action, "applying action");
    match action {
        Action::SelectTab(tab) => state.tab = tab,
        Action::Toggle { category, index } => state.checked.toggle(&category, index),
        Action::ResetAll => state.checked.reset_all(),
        Action::InsertTemplate { kind, snippet } => state.notes.append_template(kind, &snippet),
        Action::EditNotes(text) => state.notes.set_text(text),
        Action::ClearNotes => state.notes.clear(),
    }
    state
}

impl ReviewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start on a given tab instead of the checklist.
    pub fn with_tab(tab: Tab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    pub fn is_checked(&self, category: &str, index: usize) -> bool {
        self.checked.is_checked(category, index)
    }

    pub fn completion_percentage(&self) -> usize {
        self.checked.completion_percentage()
    }

    pub fn progress(&self) -> ReviewProgress {
        self.checked.progress()
    }

    pub fn notes(&self) -> &str {
        self.notes.text()
    }

    /// Send the notes buffer to the clipboard. State is never affected.
    pub fn copy_notes(&self, clipboard: &mut dyn Clipboard) -> Result<(), ClipboardError> {
        self.notes.copy_to_clipboard(clipboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_checklist_with_nothing_checked() {
        let state = ReviewState::new();
        assert_eq!(state.tab, Tab::Checklist);
        assert_eq!(state.completion_percentage(), 0);
        assert_eq!(state.notes(), "");
    }

    #[test]
    fn tab_selection_keeps_shared_data() {
        let mut state = ReviewState::new();
        state = update(state, Action::toggle("readability", 1));
        state = update(state, Action::insert_template(TemplateKind::Positive, "Good test coverage"));
        for tab in [Tab::Notes, Tab::Templates, Tab::Checklist, Tab::Notes] {
            state = update(state, Action::SelectTab(tab));
            assert_eq!(state.tab, tab);
        }
        assert!(state.is_checked("readability", 1));
        assert_eq!(state.notes(), "• Good test coverage\n");
    }

    #[test]
    fn edit_replaces_whole_buffer() {
        let state = update(
            ReviewState::new(),
            Action::insert_template(TemplateKind::General, "Good solution! A couple of improvements:"),
        );
        let state = update(state, Action::EditNotes("rewritten".to_string()));
        assert_eq!(state.notes(), "rewritten");
    }

    #[test]
    fn reset_all_leaves_notes_alone() {
        let state = update(ReviewState::new(), Action::EditNotes("keep me".to_string()));
        let state = update(state, Action::toggle("performance", 0));
        let state = update(state, Action::ResetAll);
        assert_eq!(state.completion_percentage(), 0);
        assert_eq!(state.notes(), "keep me");
    }

    #[test]
    fn with_tab_sets_initial_view() {
        assert_eq!(ReviewState::with_tab(Tab::Notes).tab, Tab::Notes);
    }
}
