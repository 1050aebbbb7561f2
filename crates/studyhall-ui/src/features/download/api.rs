//! Download lookup over HTTP.

use crate::core::request::RequestOverrides;
use crate::features::download::logic::{download_request_failed, resolve_download};
use crate::features::outcome::ActionOutcome;
use crate::services::api::PortalClient;
use studyhall_api_models::{DownloadResponse, MaterialId, download_path};

/// Look up a material's file and decide how to deliver it.
pub(crate) async fn download_material(
    client: &PortalClient,
    id: &MaterialId,
    material_name: &str,
) -> ActionOutcome {
    match client
        .make_request::<DownloadResponse>(&download_path(id), RequestOverrides::get())
        .await
    {
        Ok(body) => resolve_download(&body, material_name),
        Err(_) => download_request_failed(),
    }
}
