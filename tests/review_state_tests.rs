use review_assistant::catalog::{self, CATEGORIES, TOTAL_ITEMS};
use review_assistant::clipboard::{Clipboard, ClipboardError};
use review_assistant::state::{Action, ReviewState, update};
use review_assistant::{Tab, TemplateKind};

/// Clipboard that remembers everything written to it.
#[derive(Default)]
struct RecordingClipboard {
    writes: Vec<String>,
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// Clipboard that always refuses, like a denied permission prompt.
struct DeniedClipboard;

impl Clipboard for DeniedClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable)
    }
}

fn apply(state: ReviewState, actions: impl IntoIterator<Item = Action>) -> ReviewState {
    actions.into_iter().fold(state, update)
}

#[test]
fn never_toggled_items_are_unchecked() {
    let state = apply(ReviewState::new(), [Action::toggle("security", 0)]);
    for (category, index, _) in catalog::checklist_entries() {
        if (category, index) != ("security", 0) {
            assert!(!state.is_checked(category, index), "{category}/{index}");
        }
    }
}

#[test]
fn toggling_twice_is_identity() {
    for (category, index, _) in catalog::checklist_entries() {
        let before = ReviewState::new();
        let after = apply(
            before.clone(),
            [Action::toggle(category, index), Action::toggle(category, index)],
        );
        assert_eq!(
            before.is_checked(category, index),
            after.is_checked(category, index)
        );
        assert_eq!(after.completion_percentage(), 0);
    }
}

#[test]
fn percentage_is_monotonic() {
    let mut state = ReviewState::new();
    let mut last = state.completion_percentage();
    for (category, index, _) in catalog::checklist_entries() {
        state = update(state, Action::toggle(category, index));
        let now = state.completion_percentage();
        assert!(now >= last, "checking went from {last} to {now}");
        last = now;
    }
    assert_eq!(last, 100);

    for (category, index, _) in catalog::checklist_entries() {
        state = update(state, Action::toggle(category, index));
        let now = state.completion_percentage();
        assert!(now <= last, "unchecking went from {last} to {now}");
        last = now;
    }
    assert_eq!(last, 0);
}

#[test]
fn reset_all_always_yields_zero() {
    let actions = CATEGORIES
        .iter()
        .flat_map(|c| (0..3).map(move |i| Action::toggle(c.key, i)));
    let state = apply(ReviewState::new(), actions);
    assert_eq!(state.progress().checked, 15);
    assert_eq!(state.completion_percentage(), 60);

    let state = update(state, Action::ResetAll);
    assert_eq!(state.completion_percentage(), 0);
    assert_eq!(update(state, Action::ResetAll).completion_percentage(), 0);
}

#[test]
fn two_checked_items_then_one_unchecked() {
    let state = apply(
        ReviewState::new(),
        [Action::toggle("functionality", 0), Action::toggle("security", 2)],
    );
    assert_eq!(TOTAL_ITEMS, 25);
    assert_eq!(state.completion_percentage(), 8);

    let state = update(state, Action::toggle("functionality", 0));
    assert_eq!(state.completion_percentage(), 4);
}

#[test]
fn positive_snippet_is_bulleted_after_existing_text() {
    let state = update(ReviewState::new(), Action::EditNotes("Thanks!\n".to_string()));
    let state = update(
        state,
        Action::insert_template(TemplateKind::Positive, "Nice clean implementation"),
    );
    assert_eq!(state.notes(), "Thanks!\n• Nice clean implementation\n");
}

#[test]
fn opener_on_empty_buffer_gets_blank_line() {
    let state = update(
        ReviewState::new(),
        Action::insert_template(TemplateKind::General, "This is a solid approach. Some thoughts:"),
    );
    assert_eq!(state.notes(), "This is a solid approach. Some thoughts:\n\n");
}

#[test]
fn positive_then_suggestion_scenario() {
    let state = apply(
        ReviewState::new(),
        [
            Action::insert_template(
                TemplateKind::Positive,
                "Great use of descriptive variable names",
            ),
            Action::insert_template(
                TemplateKind::Suggestions,
                "Consider extracting this into a separate function",
            ),
        ],
    );
    assert_eq!(
        state.notes(),
        "• Great use of descriptive variable names\n• Consider extracting this into a separate function\n"
    );
}

#[test]
fn clear_then_read_is_empty() {
    let state = apply(
        ReviewState::new(),
        [
            Action::insert_template(TemplateKind::General, "Overall looks good! A few minor suggestions:"),
            Action::EditNotes("edited".to_string()),
            Action::ClearNotes,
        ],
    );
    assert_eq!(state.notes(), "");
}

#[test]
fn copy_writes_buffer_verbatim() {
    let state = update(
        ReviewState::new(),
        Action::EditNotes("line one\n\n  indented • bullet\n".to_string()),
    );
    let mut clipboard = RecordingClipboard::default();
    state.copy_notes(&mut clipboard).unwrap();
    state.copy_notes(&mut clipboard).unwrap();
    assert_eq!(
        clipboard.writes,
        vec![
            "line one\n\n  indented • bullet\n".to_string(),
            "line one\n\n  indented • bullet\n".to_string(),
        ]
    );
}

#[test]
fn copy_failure_leaves_state_untouched() {
    let state = apply(
        ReviewState::new(),
        [Action::toggle("performance", 2), Action::EditNotes("notes".to_string())],
    );
    let before = state.clone();
    assert!(matches!(
        state.copy_notes(&mut DeniedClipboard),
        Err(ClipboardError::Unavailable)
    ));
    assert_eq!(state, before);
}

#[test]
fn any_tab_can_follow_any_tab() {
    for from in Tab::ALL {
        for to in Tab::ALL {
            let state = update(ReviewState::with_tab(from), Action::SelectTab(to));
            assert_eq!(state.tab, to);
        }
    }
}
