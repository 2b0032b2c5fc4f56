//! Ordered tab names and the static content of each panel.
//!
//! Headers and panels are both read from the same `TabSet`, so header `i`
//! always pairs with panel `i`.

use serde::{Deserialize, Serialize};

/// The three dashboard panels, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TabName {
    #[default]
    Overview,
    Team,
    Settings,
}

impl TabName {
    pub const ALL: [TabName; 3] = [TabName::Overview, TabName::Team, TabName::Settings];

    pub fn label(self) -> &'static str {
        match self {
            TabName::Overview => "Overview",
            TabName::Team => "Team",
            TabName::Settings => "Settings",
        }
    }
}

impl std::fmt::Display for TabName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// What a panel shows. The frontend turns each variant into markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabContent {
    /// Plain paragraphs of prose
    Paragraphs(Vec<&'static str>),
    /// An unordered list
    BulletList(Vec<&'static str>),
    /// A labelled switch bound to the notification flag, with a footnote
    NotificationToggle {
        label: &'static str,
        note: &'static str,
    },
}

/// Ordered mapping from tab name to panel content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    entries: Vec<(TabName, TabContent)>,
}

impl TabSet {
    /// The dashboard's panels.
    pub fn dashboard() -> Self {
        Self {
            entries: vec![
                (
                    TabName::Overview,
                    TabContent::Paragraphs(vec![
                        "Welcome to iQB. The app is for football game planning. This is a Rails + React starter wired with Tailwind and Headless UI and auto reload.",
                        "Use the menu, toggle, and modal to see interactive components in the app.",
                    ]),
                ),
                (
                    TabName::Team,
                    TabContent::BulletList(vec!["Coach", "Quarterback", "Defense"]),
                ),
                (
                    TabName::Settings,
                    TabContent::NotificationToggle {
                        label: "Enable notifications",
                        note: "Changes take effect immediately.",
                    },
                ),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Header labels in display order
    pub fn names(&self) -> impl Iterator<Item = TabName> + '_ {
        self.entries.iter().map(|(name, _)| *name)
    }

    /// Panel contents in display order
    pub fn panels(&self) -> impl Iterator<Item = &TabContent> + '_ {
        self.entries.iter().map(|(_, content)| content)
    }

    pub fn entries(&self) -> impl Iterator<Item = (TabName, &TabContent)> + '_ {
        self.entries.iter().map(|(name, content)| (*name, content))
    }

    /// Position of a named tab, used to seed the tab group's default selection
    pub fn index_of(&self, name: TabName) -> Option<usize> {
        self.entries.iter().position(|(n, _)| *n == name)
    }

    pub fn get(&self, index: usize) -> Option<(TabName, &TabContent)> {
        self.entries.get(index).map(|(name, content)| (*name, content))
    }
}

impl Default for TabSet {
    fn default() -> Self {
        Self::dashboard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_in_order() {
        let tabs = TabSet::dashboard();
        let names: Vec<_> = tabs.names().collect();
        assert_eq!(names, TabName::ALL.to_vec());
    }

    #[test]
    fn test_headers_and_panels_align() {
        let tabs = TabSet::dashboard();
        assert_eq!(tabs.names().count(), tabs.panels().count());

        for (i, (name, panel)) in tabs.names().zip(tabs.panels()).enumerate() {
            let (expected_name, expected_panel) = tabs.get(i).unwrap();
            assert_eq!(name, expected_name);
            assert_eq!(panel, expected_panel);
        }

        assert!(matches!(tabs.get(1), Some((TabName::Team, TabContent::BulletList(items))) if items.len() == 3));
        assert!(matches!(
            tabs.get(2),
            Some((TabName::Settings, TabContent::NotificationToggle { .. }))
        ));
    }

    #[test]
    fn test_index_of() {
        let tabs = TabSet::dashboard();
        assert_eq!(tabs.index_of(TabName::Overview), Some(0));
        assert_eq!(tabs.index_of(TabName::Settings), Some(2));
        assert!(tabs.get(3).is_none());
    }

    #[test]
    fn test_labels() {
        assert_eq!(TabName::Team.to_string(), "Team");
        assert_eq!(TabName::default(), TabName::Overview);
    }
}
