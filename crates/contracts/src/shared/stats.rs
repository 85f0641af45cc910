use serde::{Deserialize, Serialize};

/// Usage snapshot of the backend; replaced wholesale on every refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub documents: u64,
    pub chunks: u64,
    pub messages: u64,
}

/// `GET /privategxt/stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub success: bool,
    pub stats: Stats,
}
