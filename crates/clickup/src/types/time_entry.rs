//! Time tracking

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use super::id_string;
use super::user::UserRef;

/// A time entry. `duration` is negative while the timer is running.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Entry ID
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    /// Tracked task, when any
    #[serde(default)]
    pub task: Option<TimeEntryTask>,

    /// Who tracked the time
    #[serde(default)]
    pub user: Option<UserRef>,

    /// Whether the entry is billable
    #[serde(default)]
    pub billable: bool,

    /// Start in epoch milliseconds
    #[serde(default)]
    pub start: Option<String>,

    /// End in epoch milliseconds; absent while running
    #[serde(default)]
    pub end: Option<String>,

    /// Duration in milliseconds
    #[serde(default)]
    pub duration: Option<String>,

    /// Entry description
    #[serde(default)]
    pub description: Option<String>,
}

impl TimeEntry {
    /// Whether the timer is still running.
    pub fn is_running(&self) -> bool {
        self.duration
            .as_deref()
            .is_some_and(|duration| duration.trim_start().starts_with('-'))
    }
}

/// Task reference inside a time entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryTask {
    /// Task ID
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    /// Task name
    #[serde(default)]
    pub name: Option<String>,
}

/// Envelope of `GET /v2/team/{team_id}/time_entries`.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeEntriesResponse {
    /// Entries in the range
    #[serde(default)]
    pub data: Vec<TimeEntry>,
}

/// Envelope of the single-entry time tracking endpoints. `data` is null when
/// no timer is running.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeEntryResponse {
    /// The entry, if any
    #[serde(default)]
    pub data: Option<TimeEntry>,
}

/// Date range for listing time entries, both ends in epoch milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    /// Inclusive start
    pub start_date: Option<i64>,
    /// Inclusive end
    pub end_date: Option<i64>,
}

impl TimeRange {
    /// Range with both ends open; the API defaults to the last 30 days.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start.
    pub fn start_date(mut self, millis: i64) -> Self {
        self.start_date = Some(millis);
        self
    }

    /// Set the end.
    pub fn end_date(mut self, millis: i64) -> Self {
        self.end_date = Some(millis);
        self
    }

    /// Query pairs, skipping unset ends.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(start) = self.start_date {
            query.push(("start_date", start.to_string()));
        }
        if let Some(end) = self.end_date {
            query.push(("end_date", end.to_string()));
        }
        query
    }
}

/// Body of `POST /v2/team/{team_id}/time_entries/start`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option))]
pub struct StartTimerRequest {
    /// Task to track against
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tid: Option<String>,

    /// Entry description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the entry is billable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}

impl StartTimerRequest {
    /// Create a builder for constructing a StartTimerRequest.
    pub fn builder() -> StartTimerRequestBuilder {
        StartTimerRequestBuilder::default()
    }
}
