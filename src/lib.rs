pub mod catalog;
pub mod checklist;
pub mod cli;
pub mod clipboard;
pub mod logging;
pub mod notes;
pub mod state;
pub mod summary;
pub mod templates;
pub mod tui;

/// Which view the assistant is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Tab {
    #[default]
    Checklist,
    Templates,
    Notes,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Checklist, Tab::Templates, Tab::Notes];

    /// Title shown in the tab bar.
    pub fn title(self) -> &'static str {
        match self {
            Tab::Checklist => "Review Checklist",
            Tab::Templates => "Comment Templates",
            Tab::Notes => "Review Notes",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Checklist => 0,
            Tab::Templates => 1,
            Tab::Notes => 2,
        }
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A themed group of yes/no review prompts.
#[derive(Debug, Clone, Copy)]
pub struct ReviewCategory {
    pub key: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub items: &'static [&'static str],
}

/// The three template groups, each with its own insertion format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    General,
    Positive,
    Suggestions,
}

/// A labelled set of canned review snippets.
#[derive(Debug, Clone, Copy)]
pub struct TemplateGroup {
    pub kind: TemplateKind,
    pub label: &'static str,
    pub snippets: &'static [&'static str],
}

/// Checklist progress summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewProgress {
    pub checked: usize,
    pub total: usize,
    pub percentage: usize,
}
