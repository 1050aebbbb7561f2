#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
//! Shared HTTP DTOs for the Studyhall portal API.
//!
//! The portal backend is an external service; these types pin down the JSON
//! contract the front-end relies on so request encoding and response decoding
//! stay in one place. Every response type tolerates missing fields because the
//! backend omits keys freely on its error paths.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a study material.
///
/// The backend has used both numeric ids and prefixed string ids
/// (`BWU/MATERIAL/001`), so the id is kept as its display string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawMaterialId", into = "String")]
pub struct MaterialId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMaterialId {
    Number(u64),
    Text(String),
}

impl From<RawMaterialId> for MaterialId {
    fn from(value: RawMaterialId) -> Self {
        match value {
            RawMaterialId::Number(value) => Self(value.to_string()),
            RawMaterialId::Text(value) => Self(value),
        }
    }
}

impl From<MaterialId> for String {
    fn from(value: MaterialId) -> Self {
        value.0
    }
}

impl From<u64> for MaterialId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for MaterialId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for MaterialId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl MaterialId {
    /// Raw id text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id encoded as a single URL path segment.
    #[must_use]
    pub fn path_segment(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Path of the download lookup endpoint for a material.
#[must_use]
pub fn download_path(id: &MaterialId) -> String {
    format!("/api/download/{}", id.path_segment())
}

/// Path of the favorites endpoint for a material.
#[must_use]
pub fn favorites_path(id: &MaterialId) -> String {
    format!("/api/favorites/{}", id.path_segment())
}

/// Path of the email share endpoint.
pub const SEND_EMAIL_PATH: &str = "/api/send_email";

/// Path of the WhatsApp share endpoint.
pub const SEND_WHATSAPP_PATH: &str = "/api/send_whatsapp";

/// Path of the material search endpoint, query string included.
#[must_use]
pub fn search_path(query: &str) -> String {
    format!("/api/search?q={}", urlencoding::encode(query))
}

/// Response of `GET /api/download/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadResponse {
    /// Application-level success flag.
    #[serde(default)]
    pub success: bool,
    /// URL of the file to fetch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    /// Suggested file name for the saved file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Server-provided failure text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body for both share endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareRequest {
    /// Display name of the shared material.
    pub material_name: String,
    /// Link to the shared material.
    pub material_link: String,
}

/// Client action hint returned by the share endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShareActionHint {
    /// The client should open its email application.
    OpenEmail,
    /// The client should open WhatsApp.
    OpenWhatsapp,
    /// Any hint this client does not know about.
    #[serde(other)]
    Unknown,
}

/// Response of `POST /api/send_email` and `POST /api/send_whatsapp`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareResponse {
    /// Application-level success flag.
    #[serde(default)]
    pub success: bool,
    /// Human-readable status text shown on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// `mailto:` URL prepared by the backend (email channel).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailto_url: Option<String>,
    /// `wa.me` intent URL prepared by the backend (WhatsApp channel).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp_url: Option<String>,
    /// Client action hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ShareActionHint>,
    /// Server-provided failure text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Response of `POST /api/favorites/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteResponse {
    /// Status text to surface.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Server-provided failure text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Material row as listed by the catalog and the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialSummary {
    /// Material identifier.
    pub material_id: MaterialId,
    /// Display name.
    pub material_name: String,
    /// Link to the material file.
    pub material_link: String,
    /// Optional category label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Optional subject label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

/// Response of `GET /api/search`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching materials, at most ten.
    #[serde(default)]
    pub materials: Vec<MaterialSummary>,
    /// Server-provided failure text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_id_accepts_numbers_and_strings() {
        let numeric: MaterialId = serde_json::from_str("42").expect("numeric id");
        let text: MaterialId = serde_json::from_str("\"BWU/MATERIAL/001\"").expect("text id");
        assert_eq!(numeric, MaterialId::from(42));
        assert_eq!(text.as_str(), "BWU/MATERIAL/001");
        assert_eq!(
            serde_json::to_string(&numeric).expect("serialize"),
            "\"42\""
        );
    }

    #[test]
    fn endpoint_paths_keep_ids_in_one_segment() {
        assert_eq!(download_path(&MaterialId::from(42)), "/api/download/42");
        assert_eq!(
            favorites_path(&MaterialId::from("BWU/MATERIAL/001")),
            "/api/favorites/BWU%2FMATERIAL%2F001"
        );
        assert_eq!(search_path("linear algebra"), "/api/search?q=linear%20algebra");
    }

    #[test]
    fn download_response_tolerates_error_bodies() {
        let body: DownloadResponse =
            serde_json::from_str(r#"{"success":false,"error":"File removed"}"#)
                .expect("error body");
        assert!(!body.success);
        assert_eq!(body.error.as_deref(), Some("File removed"));
        assert!(body.download_url.is_none());

        let bare: DownloadResponse = serde_json::from_str(r#"{"error":"Not authenticated"}"#)
            .expect("bare error body");
        assert!(!bare.success);
    }

    #[test]
    fn share_response_decodes_action_hints() {
        let body: ShareResponse = serde_json::from_str(
            r#"{"success":true,"message":"Opening","mailto_url":"mailto:?subject=x","action":"open_email"}"#,
        )
        .expect("share body");
        assert_eq!(body.action, Some(ShareActionHint::OpenEmail));

        let unknown: ShareResponse =
            serde_json::from_str(r#"{"success":true,"action":"open_telegram"}"#)
                .expect("unknown hint");
        assert_eq!(unknown.action, Some(ShareActionHint::Unknown));
    }

    #[test]
    fn share_request_uses_snake_case_keys() {
        let body = ShareRequest {
            material_name: "Algebra Notes".to_string(),
            material_link: "https://example.test/42".to_string(),
        };
        let value = serde_json::to_value(&body).expect("encode");
        assert_eq!(value["material_name"], "Algebra Notes");
        assert_eq!(value["material_link"], "https://example.test/42");
    }

    #[test]
    fn search_response_defaults_to_empty() {
        let body: SearchResponse = serde_json::from_str("{}").expect("empty body");
        assert!(body.materials.is_empty());

        let listed: SearchResponse = serde_json::from_str(
            r#"{"materials":[{"material_id":7,"material_name":"Calculus","material_link":"/m/7","category":"Maths"}]}"#,
        )
        .expect("listed body");
        assert_eq!(listed.materials[0].material_id, MaterialId::from(7));
        assert_eq!(listed.materials[0].subject, None);
    }
}
