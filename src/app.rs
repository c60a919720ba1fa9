use crate::state::app_settings::AppSettings;
use crate::state::app_state::{AppState, FETCH_ERROR_MESSAGE, ViewState};
use chrono::Local;
use cricbuzz_api::MatchCollection;
use log::{info, warn};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Matches,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new(settings: AppSettings) -> Self {
        log::set_max_level(settings.log_level);
        tui_logger::set_default_level(settings.log_level);

        Self { state: AppState::new(), settings }
    }

    /// Returns true exactly once: the recent-matches request is never re-issued.
    pub fn request_fetch(&mut self) -> bool {
        if self.state.fetch_requested {
            return false;
        }
        self.state.fetch_requested = true;
        true
    }

    // -----------------------------------------------------------------------
    // Network response handlers — called from main_ui_loop
    // -----------------------------------------------------------------------

    pub fn on_matches_loaded(&mut self, collection: Option<MatchCollection>) {
        if !self.state.view.is_loading() {
            warn!("ignoring late match payload");
            return;
        }
        self.state.view = match collection {
            Some(collection) => {
                info!("loaded {} match categories", collection.type_matches.len());
                ViewState::Ready(collection)
            }
            None => ViewState::Empty,
        };
        self.state.fetched_at = Some(Local::now().format("%H:%M").to_string());
        self.state.match_list.reset();
    }

    /// The cause is already logged by the caller; the view only gets the fixed text.
    pub fn on_fetch_failed(&mut self) {
        if !self.state.view.is_loading() {
            return;
        }
        self.state.view = ViewState::Error(FETCH_ERROR_MESSAGE.to_string());
    }

    // -----------------------------------------------------------------------
    // Match-type tabs
    // -----------------------------------------------------------------------

    pub fn select_tab(&mut self, label: &str) {
        if self.state.tabs.select(label) {
            self.state.match_list.reset();
        }
    }

    pub fn select_tab_index(&mut self, index: usize) {
        let labels = tab_labels(&self.state.view);
        if self.state.tabs.select_index(&labels, index) {
            self.state.match_list.reset();
        }
    }

    pub fn next_tab(&mut self) {
        let labels = tab_labels(&self.state.view);
        if self.state.tabs.next(&labels) {
            self.state.match_list.reset();
        }
    }

    pub fn prev_tab(&mut self) {
        let labels = tab_labels(&self.state.view);
        if self.state.tabs.prev(&labels) {
            self.state.match_list.reset();
        }
    }

    pub fn scroll_down(&mut self) {
        let count = self.state.current_matches().len();
        self.state.match_list.scroll_down(count);
    }

    pub fn scroll_up(&mut self) {
        self.state.match_list.scroll_up();
    }

    // -----------------------------------------------------------------------
    // Screens and toggles
    // -----------------------------------------------------------------------

    pub fn update_menu(&mut self, next: MenuItem) {
        if self.state.menu == next {
            return;
        }
        self.state.previous_menu = self.state.menu;
        self.state.menu = next;
    }

    pub fn exit_help(&mut self) {
        if self.state.menu == MenuItem::Help {
            self.state.menu = self.state.previous_menu;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }
}

/// Borrows only the view so the tab state can be updated alongside.
fn tab_labels(view: &ViewState) -> Vec<&str> {
    view.collection()
        .map(MatchCollection::match_types)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn app() -> App {
        App::new(AppSettings::default())
    }

    fn payload(value: serde_json::Value) -> MatchCollection {
        serde_json::from_value(value).expect("test payload should deserialize")
    }

    fn fixture_match(desc: &str) -> serde_json::Value {
        json!({
            "matchInfo": {
                "seriesName": "Border-Gavaskar Trophy",
                "matchDesc": desc,
                "matchFormat": "TEST",
                "team1": {"teamName": "India"},
                "team2": {"teamName": "Australia"},
                "state": "Complete",
                "status": "India won by 6 wkts"
            }
        })
    }

    fn international_two_matches() -> MatchCollection {
        payload(json!({
            "typeMatches": [{
                "matchType": "International",
                "seriesMatches": [{"seriesAdWrapper": {"matches": [fixture_match("1st Test"), fixture_match("2nd Test")]}}]
            }]
        }))
    }

    #[test]
    fn fetch_is_requested_once() {
        let mut app = app();
        assert!(app.request_fetch());
        assert!(!app.request_fetch());
        assert!(!app.request_fetch());
    }

    #[test]
    fn default_tab_with_matching_group_shows_its_matches() {
        let mut app = app();
        app.on_matches_loaded(Some(international_two_matches()));

        assert_eq!(app.state.match_types(), vec!["International"]);
        assert_eq!(app.state.active_tab_index(), Some(0));
        assert_eq!(app.state.current_matches().len(), 2);
        assert!(app.state.fetched_at.is_some());
    }

    #[test]
    fn selecting_absent_tab_empties_the_list() {
        let mut app = app();
        app.on_matches_loaded(Some(international_two_matches()));
        app.select_tab("League");

        assert_eq!(app.state.tabs.active, "League");
        assert!(app.state.current_matches().is_empty());
        assert_eq!(app.state.active_tab_index(), None);
        assert!(matches!(app.state.view, ViewState::Ready(_)));
    }

    #[test]
    fn empty_type_matches_has_no_tabs_and_no_matches() {
        let mut app = app();
        app.on_matches_loaded(Some(payload(json!({"typeMatches": []}))));

        assert!(app.state.match_types().is_empty());
        assert!(app.state.current_matches().is_empty());
        app.next_tab();
        assert_eq!(app.state.tabs.active, "International");
    }

    #[test]
    fn default_tab_absent_from_payload_is_kept() {
        let mut app = app();
        app.on_matches_loaded(Some(payload(json!({
            "typeMatches": [{"matchType": "League", "seriesMatches": [
                {"seriesAdWrapper": {"matches": [fixture_match("Final")]}}
            ]}]
        }))));

        assert_eq!(app.state.tabs.active, "International");
        assert!(app.state.current_matches().is_empty());

        app.next_tab();
        assert_eq!(app.state.tabs.active, "League");
        assert_eq!(app.state.current_matches().len(), 1);
    }

    #[test]
    fn match_count_sums_series_with_match_lists() {
        let mut app = app();
        app.on_matches_loaded(Some(payload(json!({
            "typeMatches": [
                {"matchType": "Domestic", "seriesMatches": [{"seriesAdWrapper": {"matches": [fixture_match("a")]}}]},
                {"matchType": "International", "seriesMatches": [
                    {"seriesAdWrapper": {"matches": [fixture_match("1"), fixture_match("2")]}},
                    {"adDetail": {"name": "ad"}},
                    {"seriesAdWrapper": {"seriesName": "no matches"}},
                    {"seriesAdWrapper": {"matches": [fixture_match("3")]}}
                ]}
            ]
        }))));

        let descs: Vec<&str> = app
            .state
            .current_matches()
            .iter()
            .map(|m| m.match_info.match_desc.as_str())
            .collect();
        assert_eq!(descs, vec!["1", "2", "3"]);
    }

    #[test]
    fn null_payload_is_empty_state() {
        let mut app = app();
        app.on_matches_loaded(None);
        assert_eq!(app.state.view, ViewState::Empty);
    }

    #[test]
    fn failure_leaves_loading_with_fixed_message() {
        let mut app = app();
        app.on_fetch_failed();
        assert_eq!(app.state.view, ViewState::Error(FETCH_ERROR_MESSAGE.to_string()));
        assert!(!app.state.view.is_loading());
    }

    #[test]
    fn terminal_states_ignore_later_responses() {
        let mut app = app();
        app.on_fetch_failed();
        app.on_matches_loaded(Some(international_two_matches()));
        assert!(matches!(app.state.view, ViewState::Error(_)));

        let mut app = self::app();
        app.on_matches_loaded(None);
        app.on_fetch_failed();
        assert_eq!(app.state.view, ViewState::Empty);
    }

    #[test]
    fn tab_change_resets_scroll() {
        let mut app = app();
        app.on_matches_loaded(Some(payload(json!({
            "typeMatches": [
                {"matchType": "International", "seriesMatches": [
                    {"seriesAdWrapper": {"matches": [fixture_match("1"), fixture_match("2"), fixture_match("3")]}}
                ]},
                {"matchType": "League", "seriesMatches": []}
            ]
        }))));

        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.state.match_list.scroll_offset, 2);
        app.scroll_down();
        assert_eq!(app.state.match_list.scroll_offset, 2);

        app.select_tab_index(1);
        assert_eq!(app.state.tabs.active, "League");
        assert_eq!(app.state.match_list.scroll_offset, 0);

        app.prev_tab();
        assert_eq!(app.state.tabs.active, "International");
    }

    #[test]
    fn help_returns_to_previous_screen() {
        let mut app = app();
        app.update_menu(MenuItem::Help);
        assert_eq!(app.state.menu, MenuItem::Help);
        app.exit_help();
        assert_eq!(app.state.menu, MenuItem::Matches);
    }
}
