//! Wire types for the Cricbuzz RapidAPI.
//! Endpoint: https://cricbuzz-cricket.p.rapidapi.com/matches/v1/recent
//!
//! Every nested block the API may leave out is an `Option`; strings default to
//! empty so a sparse match still deserializes and renders blank.
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchCollection {
    #[serde(default)]
    pub type_matches: Vec<MatchTypeGroup>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchTypeGroup {
    /// "International", "League", "Domestic", "Women". Doubles as the tab label.
    #[serde(default)]
    pub match_type: String,
    #[serde(default)]
    pub series_matches: Vec<SeriesWrapper>,
}

/// One slot in a group's series list. Ad slots carry no `seriesAdWrapper`.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesWrapper {
    pub series_ad_wrapper: Option<SeriesAdWrapper>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SeriesAdWrapper {
    pub series_id: Option<u64>,
    pub series_name: Option<String>,
    pub matches: Option<Vec<Match>>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub match_info: MatchInfo,
    pub match_score: Option<MatchScore>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    pub match_id: Option<u64>,
    #[serde(default)]
    pub series_name: String,
    #[serde(default)]
    pub match_desc: String,
    #[serde(default)]
    pub match_format: String,
    /// Epoch milliseconds, sent as a string.
    pub start_date: Option<String>,
    #[serde(default)]
    pub team1: TeamInfo,
    #[serde(default)]
    pub team2: TeamInfo,
    pub venue_info: Option<VenueInfo>,
    /// "Complete", "In Progress", "Preview", "Stumps", ...
    #[serde(default)]
    pub state: String,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamInfo {
    #[serde(default)]
    pub team_name: String,
    pub team_s_name: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VenueInfo {
    pub ground: Option<String>,
    pub city: Option<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore {
    pub team1_score: Option<TeamScore>,
    pub team2_score: Option<TeamScore>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct TeamScore {
    pub inngs1: Option<Innings>,
    pub inngs2: Option<Innings>,
}

/// Cricbuzz omits zero-valued counters, so a missing field reads as `0`.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq)]
pub struct Innings {
    #[serde(default)]
    pub runs: u32,
    #[serde(default)]
    pub wickets: u32,
    #[serde(default)]
    pub overs: f64,
}
