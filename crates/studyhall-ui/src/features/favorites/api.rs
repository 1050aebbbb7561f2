//! Favorites over HTTP.

use crate::core::notify::NotificationRequest;
use crate::core::request::RequestOverrides;
use crate::features::favorites::logic::{favorites_unavailable, resolve_favorite};
use crate::services::api::PortalClient;
use studyhall_api_models::{FavoriteResponse, MaterialId, favorites_path};

/// Mark a material as favorite and describe the result.
pub(crate) async fn add_to_favorites(client: &PortalClient, id: &MaterialId) -> NotificationRequest {
    match client
        .make_request::<FavoriteResponse>(&favorites_path(id), RequestOverrides::post())
        .await
    {
        Ok(body) => resolve_favorite(&body),
        Err(_) => favorites_unavailable(),
    }
}
