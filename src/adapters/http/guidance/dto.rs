//! HTTP DTOs for guidance endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::guidance::Idea;

/// Query parameters for `GET /api/ideas`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListIdeasParams {
    /// Optional phase filter. An empty value means no filter.
    #[serde(default)]
    pub phase: Option<String>,
    /// Maximum ideas to return; zero means no limit.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Query parameters for `GET /api/explain`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExplainParams {
    pub phase: String,
}

/// Response for idea listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeasResponse {
    pub items: Vec<Idea>,
}

/// Response for a phase explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub phase: String,
    pub summary: String,
    pub tips: Vec<String>,
}

impl From<crate::domain::guidance::PhaseGuidance> for ExplainResponse {
    fn from(guidance: crate::domain::guidance::PhaseGuidance) -> Self {
        Self {
            phase: guidance.phase.as_str().to_string(),
            summary: guidance.summary.to_string(),
            tips: guidance.tips.into_iter().map(String::from).collect(),
        }
    }
}
