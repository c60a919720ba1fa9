use crate::state::network::LoadingState;
use cricbuzz_api::MatchCollection;
use crossterm::event::KeyEvent;

#[derive(Debug, Clone)]
pub enum NetworkRequest {
    LoadRecentMatches,
}

#[derive(Debug)]
pub enum NetworkResponse {
    LoadingStateChanged { loading_state: LoadingState },
    /// `None` when the API answered with an empty body.
    MatchesLoaded { collection: Option<MatchCollection> },
    Error { message: String },
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    KeyPressed(KeyEvent),
    Resize,
    AppStarted,
}
