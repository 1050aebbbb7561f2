//! Share submission over HTTP.

use crate::core::request::RequestOverrides;
use crate::features::outcome::ActionOutcome;
use crate::features::share::logic::resolve_share;
use crate::features::share::state::ShareSubmission;
use crate::services::api::PortalClient;
use studyhall_api_models::ShareResponse;

/// Send a captured submission to its channel endpoint.
///
/// `None` means the request failed; the client has already raised its own
/// notification and the caller only restores the button.
pub(crate) async fn send_share(
    client: &PortalClient,
    submission: &ShareSubmission,
) -> Option<ActionOutcome> {
    let channel = submission.token.channel();
    let overrides = match RequestOverrides::post_json(&submission.request) {
        Ok(overrides) => overrides,
        Err(err) => {
            client.report_failure(&err);
            return None;
        }
    };
    client
        .make_request::<ShareResponse>(channel.path(), overrides)
        .await
        .ok()
        .map(|body| resolve_share(channel, &body))
}
