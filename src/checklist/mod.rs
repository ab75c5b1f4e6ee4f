use crate::ReviewProgress;
use crate::catalog::TOTAL_ITEMS;
use std::collections::HashMap;

/// Composite key of a checklist item: category key plus item index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub category: String,
    pub index: usize,
}

impl ItemKey {
    pub fn new(category: &str, index: usize) -> Self {
        Self {
            category: category.to_owned(),
            index,
        }
    }
}

/// Checked state of checklist items.
///
/// Items that were never toggled have no entry and count as unchecked.
/// Keys are not validated against the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedItems {
    entries: HashMap<ItemKey, bool>,
}

impl CheckedItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the checked state of one item.
    pub fn toggle(&mut self, category: &str, index: usize) {
        let entry = self.entries.entry(ItemKey::new(category, index)).or_default();
        *entry = !*entry;
    }

    /// Stored state of one item, `false` when it was never toggled.
    pub fn is_checked(&self, category: &str, index: usize) -> bool {
        self.entries
            .get(&ItemKey::new(category, index))
            .copied()
            .unwrap_or(false)
    }

    /// Forget every entry.
    pub fn reset_all(&mut self) {
        self.entries.clear();
    }

    /// Number of entries currently set to `true`.
    pub fn checked_count(&self) -> usize {
        self.entries.values().filter(|&&checked| checked).count()
    }

    /// `round(100 * checked / total)`, rounding halves up.
    pub fn completion_percentage(&self) -> usize {
        percentage(self.checked_count(), TOTAL_ITEMS)
    }

    pub fn progress(&self) -> ReviewProgress {
        let checked = self.checked_count();
        ReviewProgress {
            checked,
            total: TOTAL_ITEMS,
            percentage: percentage(checked, TOTAL_ITEMS),
        }
    }
}

fn percentage(checked: usize, total: usize) -> usize {
    (200 * checked + total) / (2 * total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_items_are_unchecked() {
        let items = CheckedItems::new();
        assert!(!items.is_checked("functionality", 0));
        assert!(!items.is_checked("nonexistent", 42));
        assert_eq!(items.completion_percentage(), 0);
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut items = CheckedItems::new();
        items.toggle("security", 3);
        assert!(items.is_checked("security", 3));
        items.toggle("security", 3);
        assert!(!items.is_checked("security", 3));
        assert_eq!(items.checked_count(), 0);
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(0, 25), 0);
        assert_eq!(percentage(1, 25), 4);
        assert_eq!(percentage(25, 25), 100);
        // 1/8 = 12.5%
        assert_eq!(percentage(1, 8), 13);
        // 1/3 = 33.3%
        assert_eq!(percentage(1, 3), 33);
        // 2/3 = 66.7%
        assert_eq!(percentage(2, 3), 67);
    }

    #[test]
    fn reset_all_clears_entries() {
        let mut items = CheckedItems::new();
        items.toggle("performance", 1);
        items.toggle("readability", 4);
        items.reset_all();
        assert_eq!(items.completion_percentage(), 0);
        assert!(!items.is_checked("performance", 1));
    }

    #[test]
    fn progress_reports_counts() {
        let mut items = CheckedItems::new();
        items.toggle("functionality", 0);
        items.toggle("security", 2);
        assert_eq!(
            items.progress(),
            ReviewProgress {
                checked: 2,
                total: 25,
                percentage: 8,
            }
        );
    }

    #[test]
    fn unknown_keys_are_accepted() {
        let mut items = CheckedItems::new();
        items.toggle("style", 99);
        assert!(items.is_checked("style", 99));
        assert_eq!(items.checked_count(), 1);
    }
}
