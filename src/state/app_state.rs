use crate::app::MenuItem;
use cricbuzz_api::{Match, MatchCollection};

/// Category shown first, whether or not the payload carries it.
pub const DEFAULT_TAB: &str = "International";
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching cricket data. Please try again later.";

// ---------------------------------------------------------------------------
// Fetch lifecycle
// ---------------------------------------------------------------------------

/// What the main area shows. `Loading` is the only non-terminal state.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState {
    #[default]
    Loading,
    Error(String),
    Ready(MatchCollection),
    Empty,
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn collection(&self) -> Option<&MatchCollection> {
        match self {
            ViewState::Ready(collection) => Some(collection),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Match-type tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TabState {
    /// Label of the selected category. May name a category that is not in the payload.
    pub active: String,
}

impl Default for TabState {
    fn default() -> Self {
        Self { active: DEFAULT_TAB.to_string() }
    }
}

impl TabState {
    /// Returns true when the selection changed.
    pub fn select(&mut self, label: &str) -> bool {
        if self.active == label {
            return false;
        }
        self.active = label.to_string();
        true
    }

    /// Position of the first tab carrying the active label.
    pub fn active_index(&self, labels: &[&str]) -> Option<usize> {
        labels.iter().position(|l| *l == self.active)
    }

    pub fn select_index(&mut self, labels: &[&str], index: usize) -> bool {
        match labels.get(index) {
            Some(label) => self.select(label),
            None => false,
        }
    }

    /// Wraps around. From an absent label, moves to the first tab.
    pub fn next(&mut self, labels: &[&str]) -> bool {
        if labels.is_empty() {
            return false;
        }
        let index = self
            .active_index(labels)
            .map(|i| (i + 1) % labels.len())
            .unwrap_or(0);
        self.select_index(labels, index)
    }

    /// Wraps around. From an absent label, moves to the last tab.
    pub fn prev(&mut self, labels: &[&str]) -> bool {
        if labels.is_empty() {
            return false;
        }
        let index = match self.active_index(labels) {
            Some(0) | None => labels.len() - 1,
            Some(i) => i - 1,
        };
        self.select_index(labels, index)
    }
}

// ---------------------------------------------------------------------------
// Match list
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct MatchListState {
    /// Index of the first visible card.
    pub scroll_offset: usize,
}

impl MatchListState {
    pub fn scroll_down(&mut self, match_count: usize) {
        let max = match_count.saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + 1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn reset(&mut self) {
        self.scroll_offset = 0;
    }
}

// ---------------------------------------------------------------------------
// Top-level state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AppState {
    pub menu: MenuItem,
    pub previous_menu: MenuItem,
    pub view: ViewState,
    pub tabs: TabState,
    pub match_list: MatchListState,
    /// Local wall-clock time the payload arrived, "HH:MM".
    pub fetched_at: Option<String>,
    /// Set once the single recent-matches request has been issued.
    pub fetch_requested: bool,
    pub show_logs: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tab labels in payload order; empty until the payload is ready.
    pub fn match_types(&self) -> Vec<&str> {
        self.view
            .collection()
            .map(MatchCollection::match_types)
            .unwrap_or_default()
    }

    /// Flattened matches of the active category.
    pub fn current_matches(&self) -> Vec<&Match> {
        self.view
            .collection()
            .map(|c| c.matches_for(&self.tabs.active))
            .unwrap_or_default()
    }

    pub fn active_tab_index(&self) -> Option<usize> {
        self.tabs.active_index(&self.match_types())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: [&str; 3] = ["International", "League", "Women"];

    #[test]
    fn default_tab_is_international_even_without_data() {
        let state = AppState::new();
        assert_eq!(state.tabs.active, "International");
        assert!(state.view.is_loading());
        assert!(state.match_types().is_empty());
        assert!(state.current_matches().is_empty());
        assert_eq!(state.active_tab_index(), None);
    }

    #[test]
    fn select_reports_changes() {
        let mut tabs = TabState::default();
        assert!(!tabs.select("International"));
        assert!(tabs.select("League"));
        assert_eq!(tabs.active, "League");
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut tabs = TabState::default();
        assert!(tabs.next(&LABELS));
        assert_eq!(tabs.active, "League");
        tabs.next(&LABELS);
        tabs.next(&LABELS);
        assert_eq!(tabs.active, "International");
        tabs.prev(&LABELS);
        assert_eq!(tabs.active, "Women");
    }

    #[test]
    fn next_and_prev_from_absent_label() {
        let mut tabs = TabState { active: "Domestic".into() };
        tabs.next(&LABELS);
        assert_eq!(tabs.active, "International");

        let mut tabs = TabState { active: "Domestic".into() };
        tabs.prev(&LABELS);
        assert_eq!(tabs.active, "Women");

        let mut tabs = TabState::default();
        assert!(!tabs.next(&[]));
        assert!(!tabs.prev(&[]));
        assert_eq!(tabs.active, "International");
    }

    #[test]
    fn select_index_ignores_out_of_range() {
        let mut tabs = TabState::default();
        assert!(!tabs.select_index(&LABELS, 7));
        assert!(tabs.select_index(&LABELS, 2));
        assert_eq!(tabs.active, "Women");
    }

    #[test]
    fn active_index_uses_first_duplicate() {
        let tabs = TabState { active: "League".into() };
        assert_eq!(tabs.active_index(&["League", "International", "League"]), Some(0));
    }

    #[test]
    fn scroll_is_clamped_to_match_count() {
        let mut list = MatchListState::default();
        list.scroll_down(2);
        list.scroll_down(2);
        assert_eq!(list.scroll_offset, 1);
        list.scroll_up();
        list.scroll_up();
        assert_eq!(list.scroll_offset, 0);
        list.scroll_down(0);
        assert_eq!(list.scroll_offset, 0);
    }
}
