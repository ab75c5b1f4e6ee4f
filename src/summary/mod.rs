use crate::catalog::{CATEGORIES, TEMPLATE_GROUPS};
use crate::checklist::CheckedItems;

/// Render the checklist as a markdown task list with a progress line.
pub fn checklist_text(checked: &CheckedItems) -> String {
    let progress = checked.progress();
    let mut out = String::new();
    out.push_str(&format!(
        "Review Progress: {}% ({} of {} items checked)\n",
        progress.percentage, progress.checked, progress.total
    ));

    for category in &CATEGORIES {
        out.push_str(&format!("\n## {} {}\n\n", category.icon, category.title));
        for (index, item) in category.items.iter().enumerate() {
            let mark = if checked.is_checked(category.key, index) {
                'x'
            } else {
                ' '
            };
            out.push_str(&format!("- [{mark}] {item}\n"));
        }
    }
    out
}

/// Render every template group and its snippets.
pub fn templates_text() -> String {
    let mut out = String::new();
    for (i, group) in TEMPLATE_GROUPS.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("## {}\n\n", group.label));
        for snippet in group.snippets {
            out.push_str(&format!("- {snippet}\n"));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_checklist_is_all_unchecked() {
        let text = checklist_text(&CheckedItems::new());
        assert!(text.starts_with("Review Progress: 0% (0 of 25 items checked)\n"));
        assert_eq!(text.matches("- [ ] ").count(), 25);
        assert!(text.contains("## § Security & Safety"));
    }

    #[test]
    fn checked_items_are_marked() {
        let mut checked = CheckedItems::new();
        checked.toggle("security", 2);
        let text = checklist_text(&checked);
        assert!(text.contains("- [x] Are authentication/authorization checks in place?"));
        assert_eq!(text.matches("- [x] ").count(), 1);
        assert!(text.starts_with("Review Progress: 4% (1 of 25 items checked)"));
    }

    #[test]
    fn templates_are_grouped() {
        let text = templates_text();
        assert!(text.starts_with("## Review Openers\n\n- Overall looks good!"));
        assert!(text.contains("## Positive Feedback\n"));
        assert!(text.contains("- This logic could be simplified\n"));
        assert_eq!(text.matches("\n- ").count(), 14);
    }
}
