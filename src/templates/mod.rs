use crate::TemplateKind;

const BULLET: &str = "• ";

/// Format a snippet the way its group inserts it into the notes.
pub fn format_snippet(kind: TemplateKind, snippet: &str) -> String {
    match kind {
        TemplateKind::General => format!("{snippet}\n\n"),
        TemplateKind::Positive | TemplateKind::Suggestions => format!("{BULLET}{snippet}\n"),
    }
}

/// Append a formatted snippet to the end of `notes`.
pub fn append_snippet(notes: &mut String, kind: TemplateKind, snippet: &str) {
    notes.push_str(&format_snippet(kind, snippet));
}
