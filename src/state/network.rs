use crate::state::messages::{NetworkRequest, NetworkResponse};
use cricbuzz_api::client::{ApiConfig, ApiError, CricbuzzApi};
use log::{debug, error};
use std::time::Duration;
use tokio::sync::mpsc;

const SPINNER_CHARS: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
pub const ERROR_CHAR: char = '!';
const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

#[derive(Debug, Copy, Clone)]
pub struct LoadingState {
    pub is_loading: bool,
    pub spinner_char: char,
}

impl Default for LoadingState {
    fn default() -> Self {
        Self { is_loading: false, spinner_char: ' ' }
    }
}

pub struct NetworkWorker {
    client: CricbuzzApi,
    requests: mpsc::Receiver<NetworkRequest>,
    responses: mpsc::Sender<NetworkResponse>,
}

impl NetworkWorker {
    pub fn new(
        config: ApiConfig,
        requests: mpsc::Receiver<NetworkRequest>,
        responses: mpsc::Sender<NetworkResponse>,
    ) -> Self {
        Self { client: CricbuzzApi::new(config), requests, responses }
    }

    pub async fn run(mut self) {
        while let Some(request) = self.requests.recv().await {
            let result = match request {
                NetworkRequest::LoadRecentMatches => {
                    self.with_spinner(self.handle_load_recent_matches()).await
                }
            };

            debug!("network request complete");
            let spinner_char = if result.is_ok() { ' ' } else { ERROR_CHAR };
            self.publish(LoadingState { is_loading: false, spinner_char }).await;

            let response = result.unwrap_or_else(|err| NetworkResponse::Error {
                message: err.to_string(),
            });

            if let Err(e) = self.responses.send(response).await {
                error!("Failed to send network response: {e}");
                break;
            }
        }
    }

    async fn handle_load_recent_matches(&self) -> Result<NetworkResponse, ApiError> {
        debug!("loading recent matches from {}", self.client.config().host);
        let collection = self.client.fetch_recent_matches().await?;
        Ok(NetworkResponse::MatchesLoaded { collection })
    }

    /// Drives `request` to completion, publishing a spinner frame on every tick
    /// it is still pending.
    async fn with_spinner<T>(&self, request: impl Future<Output = T>) -> T {
        tokio::pin!(request);
        let mut frames = SPINNER_CHARS.iter().copied().cycle();
        let mut ticker = tokio::time::interval(SPINNER_INTERVAL);

        loop {
            tokio::select! {
                biased;
                result = &mut request => return result,
                _ = ticker.tick() => {
                    if let Some(spinner_char) = frames.next() {
                        self.publish(LoadingState { is_loading: true, spinner_char }).await;
                    }
                }
            }
        }
    }

    async fn publish(&self, loading_state: LoadingState) {
        let _ = self
            .responses
            .send(NetworkResponse::LoadingStateChanged { loading_state })
            .await;
    }
}
