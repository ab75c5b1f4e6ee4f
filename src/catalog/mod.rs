use crate::{ReviewCategory, TemplateGroup, TemplateKind};

const CATEGORY_TABLE: [ReviewCategory; 5] = [
    ReviewCategory {
        key: "functionality",
        title: "Functionality & Logic",
        icon: "λ",
        items: &[
            "Does the code solve the intended problem?",
            "Are edge cases handled properly?",
            "Is error handling comprehensive?",
            "Are null/undefined values handled?",
            "Does the logic flow make sense?",
        ],
    },
    ReviewCategory {
        key: "readability",
        title: "Code Quality & Readability",
        icon: "¶",
        items: &[
            "Are variable/function names descriptive?",
            "Is the code properly formatted and indented?",
            "Are functions/methods appropriately sized?",
            "Is the code self-documenting?",
            "Are comments helpful and up-to-date?",
        ],
    },
    ReviewCategory {
        key: "security",
        title: "Security & Safety",
        icon: "§",
        items: &[
            "Are user inputs validated/sanitized?",
            "Are sensitive data properly protected?",
            "Are authentication/authorization checks in place?",
            "Are there any potential injection vulnerabilities?",
            "Are secrets/credentials properly handled?",
        ],
    },
    ReviewCategory {
        key: "performance",
        title: "Performance",
        icon: "↯",
        items: &[
            "Are there any obvious performance bottlenecks?",
            "Are database queries optimized?",
            "Is memory usage reasonable?",
            "Are loops and iterations efficient?",
            "Are large datasets handled appropriately?",
        ],
    },
    ReviewCategory {
        key: "maintainability",
        title: "Maintainability",
        icon: "⚙",
        items: &[
            "Does the code follow established patterns?",
            "Are dependencies reasonable and up-to-date?",
            "Is the code modular and reusable?",
            "Are there adequate tests?",
            "Is documentation sufficient?",
        ],
    },
];

/// The fixed review checklist, in display order.
pub static CATEGORIES: [ReviewCategory; 5] = CATEGORY_TABLE;

/// The fixed template library, in display order.
pub static TEMPLATE_GROUPS: [TemplateGroup; 3] = [
    TemplateGroup {
        kind: TemplateKind::General,
        label: "Review Openers",
        snippets: &[
            "Overall looks good! A few minor suggestions:",
            "Nice work on the implementation. Consider:",
            "This is a solid approach. Some thoughts:",
            "Good solution! A couple of improvements:",
        ],
    },
    TemplateGroup {
        kind: TemplateKind::Positive,
        label: "Positive Feedback",
        snippets: &[
            "Excellent error handling!",
            "Great use of descriptive variable names",
            "Nice clean implementation",
            "Good test coverage",
            "Well-structured code",
        ],
    },
    TemplateGroup {
        kind: TemplateKind::Suggestions,
        label: "Constructive Suggestions",
        snippets: &[
            "Consider extracting this into a separate function",
            "This could benefit from some comments",
            "Might want to add error handling here",
            "Consider using a more descriptive variable name",
            "This logic could be simplified",
        ],
    },
];

const fn count_items(categories: &[ReviewCategory]) -> usize {
    let mut total = 0;
    let mut i = 0;
    while i < categories.len() {
        total += categories[i].items.len();
        i += 1;
    }
    total
}

/// Total number of checklist items across all categories.
pub const TOTAL_ITEMS: usize = count_items(&CATEGORY_TABLE);

const _: () = assert!(TOTAL_ITEMS > 0);

/// Every checklist entry as (category key, item index, prompt), in display order.
pub fn checklist_entries() -> impl Iterator<Item = (&'static str, usize, &'static str)> {
    CATEGORIES.iter().flat_map(|category| {
        category
            .items
            .iter()
            .enumerate()
            .map(move |(index, &prompt)| (category.key, index, prompt))
    })
}

/// Every template as (kind, snippet), in display order.
pub fn template_entries() -> impl Iterator<Item = (TemplateKind, &'static str)> {
    TEMPLATE_GROUPS
        .iter()
        .flat_map(|group| group.snippets.iter().map(move |&s| (group.kind, s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_items_is_twenty_five() {
        assert_eq!(TOTAL_ITEMS, 25);
        assert_eq!(checklist_entries().count(), TOTAL_ITEMS);
    }

    #[test]
    fn every_category_has_five_prompts() {
        for category in &CATEGORIES {
            assert_eq!(category.items.len(), 5, "{}", category.key);
        }
    }

    #[test]
    fn category_keys_are_unique() {
        let mut keys: Vec<_> = CATEGORIES.iter().map(|c| c.key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), CATEGORIES.len());
    }

    #[test]
    fn template_groups_are_in_display_order() {
        let kinds: Vec<_> = TEMPLATE_GROUPS.iter().map(|g| g.kind).collect();
        assert_eq!(
            kinds,
            [
                TemplateKind::General,
                TemplateKind::Positive,
                TemplateKind::Suggestions,
            ]
        );
        assert_eq!(TEMPLATE_GROUPS[0].snippets.len(), 4);
        assert_eq!(template_entries().count(), 14);
    }
}
