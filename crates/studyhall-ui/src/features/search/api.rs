//! Search over HTTP.

use crate::core::request::{ApiError, RequestOverrides};
use crate::services::api::PortalClient;
use studyhall_api_models::{MaterialSummary, SearchResponse, search_path};

/// Fetch materials matching `query`.
pub(crate) async fn search_materials(
    client: &PortalClient,
    query: &str,
) -> Result<Vec<MaterialSummary>, ApiError> {
    let body: SearchResponse = client
        .make_request(&search_path(query), RequestOverrides::get())
        .await?;
    Ok(body.materials)
}
