pub mod client;
pub mod cricbuzz;

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt;

pub use crate::cricbuzz::{
    Innings, Match, MatchCollection, MatchInfo, MatchScore, MatchTypeGroup, SeriesAdWrapper,
    SeriesWrapper, TeamInfo, TeamScore, VenueInfo,
};

/// `state` value the API reports for finished matches.
pub const STATE_COMPLETE: &str = "Complete";

// ---------------------------------------------------------------------------
// Derivations over the recent-matches payload
// ---------------------------------------------------------------------------

impl MatchCollection {
    /// Tab labels in source order. Duplicates are kept as-is.
    pub fn match_types(&self) -> Vec<&str> {
        self.type_matches.iter().map(|t| t.match_type.as_str()).collect()
    }

    /// First group whose label equals `match_type`.
    pub fn group(&self, match_type: &str) -> Option<&MatchTypeGroup> {
        self.type_matches.iter().find(|t| t.match_type == match_type)
    }

    /// Flattened match list for one category; empty when the category is absent.
    pub fn matches_for(&self, match_type: &str) -> Vec<&Match> {
        self.group(match_type)
            .map(|g| g.matches().collect())
            .unwrap_or_default()
    }
}

impl MatchTypeGroup {
    /// Matches of every series in order. Series slots without a wrapper or
    /// without a match list contribute nothing.
    pub fn matches(&self) -> impl Iterator<Item = &Match> {
        self.series_matches
            .iter()
            .filter_map(|s| s.series_ad_wrapper.as_ref())
            .filter_map(|w| w.matches.as_deref())
            .flatten()
    }
}

impl Match {
    /// `status` when it carries text, otherwise the raw `state`.
    pub fn status_text(&self) -> &str {
        match self.match_info.status.as_deref() {
            Some(status) if !status.is_empty() => status,
            _ => self.match_info.state.as_str(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.match_info.state == STATE_COMPLETE
    }

    pub fn team1_innings(&self) -> Option<Innings> {
        self.match_score.as_ref()?.team1_score.as_ref()?.inngs1
    }

    pub fn team2_innings(&self) -> Option<Innings> {
        self.match_score.as_ref()?.team2_score.as_ref()?.inngs1
    }
}

impl MatchInfo {
    /// "ground, city" with missing parts left blank.
    pub fn venue_line(&self) -> String {
        let venue = self.venue_info.as_ref();
        let ground = venue.and_then(|v| v.ground.as_deref()).unwrap_or_default();
        let city = venue.and_then(|v| v.city.as_deref()).unwrap_or_default();
        format!("{ground}, {city}")
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        let millis = self.start_date.as_deref()?.trim().parse::<i64>().ok()?;
        DateTime::from_timestamp_millis(millis)
    }

    /// Start date in the local time zone, e.g. "Oct 18, 2026".
    pub fn start_date_label(&self) -> Option<String> {
        self.start_time()
            .map(|t| format_match_date(&t.with_timezone(&Local)))
    }
}

pub fn format_match_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    date.format("%b %-d, %Y").to_string()
}

/// Renders as `runs/wickets (overs)`, e.g. `187/6 (20)` or `142/10 (38.4)`.
impl fmt::Display for Innings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} ({})", self.runs, self.wickets, self.overs)
    }
}
