use contracts::shared::api_error::ApiError;
use contracts::shared::stats::{Stats, StatsResponse};

use crate::shared::api_utils::get_json;

/// Current document, chunk and message counts
pub async fn fetch_stats() -> Result<Stats, ApiError> {
    let resp: StatsResponse = get_json("/privategxt/stats").await?;
    Ok(resp.stats)
}
