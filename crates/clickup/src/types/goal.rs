//! Goals

use serde::{Deserialize, Serialize};

use super::{id_string, optional_id_string};

/// A goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Goal ID
    #[serde(deserialize_with = "id_string")]
    pub id: String,

    /// Goal name
    pub name: String,

    /// Workspace ID
    #[serde(default, deserialize_with = "optional_id_string")]
    pub team_id: Option<String>,

    /// Description
    #[serde(default)]
    pub description: Option<String>,

    /// Due date in epoch milliseconds
    #[serde(default)]
    pub due_date: Option<String>,

    /// Completion percentage
    #[serde(default)]
    pub percent_completed: Option<f64>,

    /// Display color
    #[serde(default)]
    pub color: Option<String>,

    /// Browser URL
    #[serde(default)]
    pub pretty_url: Option<String>,
}

/// Envelope of `GET /v2/team/{team_id}/goal`.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalsResponse {
    /// Goals of the workspace
    #[serde(default)]
    pub goals: Vec<Goal>,
}

/// Envelope of `GET /v2/goal/{goal_id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GoalResponse {
    /// The goal
    pub goal: Goal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_deserialization() {
        let json = r#"{"goal":{"id":"e53a033c-900e-462d-a849-4a216b06d930","name":"Goal Name","team_id":512,"due_date":"1568036964079","percent_completed":25}}"#;
        let response: GoalResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.goal.team_id.as_deref(), Some("512"));
        assert_eq!(response.goal.percent_completed, Some(25.0));
    }

    #[test]
    fn test_goals_envelope_tolerates_extra_fields() {
        let json = r#"{"goals":[{"id":"g1","name":"Ship"}],"folders":[]}"#;
        let response: GoalsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.goals.len(), 1);
    }
}
