//! Component state for the task browser.
//!
//! Two bits of state drive the whole page: which of the two views is
//! selected (an enum, so exactly one is ever active), and which tree nodes
//! carry the `active` class (an independent per-node flag with no mutual
//! exclusion).

use std::collections::HashSet;

/// The two top-level presentation modes of the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Tree,
    List,
}

impl ViewMode {
    /// Maps a switch button's `data-view` tag: `"tree"` selects the tree
    /// view, any other value the list view.
    pub fn from_data_view(tag: &str) -> Self {
        if tag == "tree" {
            ViewMode::Tree
        } else {
            ViewMode::List
        }
    }
}

pub struct TaskBrowserComponent {
    pub view_mode: ViewMode,
    /// Keys of tree nodes currently carrying the `active` class.
    pub active_nodes: HashSet<String>,
}

impl TaskBrowserComponent {
    pub fn new() -> Self {
        Self {
            view_mode: ViewMode::Tree,
            active_nodes: HashSet::new(),
        }
    }

    pub fn set_view(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Flips the `active` flag of one tree node; other nodes are untouched.
    pub fn toggle_node(&mut self, key: String) {
        if !self.active_nodes.remove(&key) {
            self.active_nodes.insert(key);
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active_nodes.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_view_tag_selects_mode() {
        assert_eq!(ViewMode::from_data_view("tree"), ViewMode::Tree);
        assert_eq!(ViewMode::from_data_view("list"), ViewMode::List);
        // Any tag other than "tree" means list.
        assert_eq!(ViewMode::from_data_view("grid"), ViewMode::List);
    }

    #[test]
    fn starts_in_tree_view_with_no_active_nodes() {
        let browser = TaskBrowserComponent::new();
        assert_eq!(browser.view_mode, ViewMode::Tree);
        assert!(browser.active_nodes.is_empty());
    }

    #[test]
    fn toggle_twice_restores_initial_state() {
        let mut browser = TaskBrowserComponent::new();
        browser.toggle_node("matematyka".to_string());
        assert!(browser.is_active("matematyka"));
        browser.toggle_node("matematyka".to_string());
        assert!(!browser.is_active("matematyka"));
    }

    #[test]
    fn nodes_toggle_independently() {
        let mut browser = TaskBrowserComponent::new();
        browser.toggle_node("matematyka".to_string());
        browser.toggle_node("polski".to_string());
        assert!(browser.is_active("matematyka"));
        assert!(browser.is_active("polski"));
        browser.toggle_node("matematyka".to_string());
        assert!(!browser.is_active("matematyka"));
        assert!(browser.is_active("polski"));
    }

    #[test]
    fn view_selection_is_exclusive() {
        let mut browser = TaskBrowserComponent::new();
        browser.set_view(ViewMode::List);
        assert_eq!(browser.view_mode, ViewMode::List);
        browser.set_view(ViewMode::Tree);
        assert_eq!(browser.view_mode, ViewMode::Tree);
    }
}
