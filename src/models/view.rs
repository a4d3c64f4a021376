//! External-facing projections of catalog entities.
//!
//! These shapes are what callers rendering a subscriber's catalog receive;
//! their field enumeration is a stable public contract. Which optional
//! fields are populated per visibility is decided by the projector's
//! [`ProjectionPolicy`](crate::services::projector::ProjectionPolicy), never
//! ad hoc at a call site.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::stream::VodType;

/// Who a projected view is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Server-granted entitlement, shown in the shared catalog.
    Public,
    /// Privately owned stream, shown only to its owner.
    Private,
}

/// Channel entry of a subscriber's entitlement view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelInfo {
    pub id: Uuid,
    pub name: String,
    pub tvg_id: Option<String>,
    pub tvg_name: Option<String>,
    pub icon: String,
    pub group: Option<String>,
    pub visibility: Visibility,
    /// Withheld when the active policy excludes it for this visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Output endpoint URIs; internal-only for public views by default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_urls: Option<Vec<String>>,
}

/// VOD entry of a subscriber's entitlement view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VodInfo {
    pub id: Uuid,
    pub name: String,
    pub tvg_id: Option<String>,
    pub tvg_name: Option<String>,
    pub icon: String,
    pub group: Option<String>,
    pub visibility: Visibility,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_urls: Option<Vec<String>>,
    pub vod_type: Option<VodType>,
    pub description: Option<String>,
    pub preview_icon: String,
    pub trailer_url: String,
    pub user_score: u8,
    pub prime_date_ms: i64,
    pub country: String,
    pub duration_ms: u64,
}

/// Either bucket of a single projected stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StreamView {
    Channel(ChannelInfo),
    Vod(VodInfo),
}

impl StreamView {
    pub fn visibility(&self) -> Visibility {
        match self {
            StreamView::Channel(c) => c.visibility,
            StreamView::Vod(v) => v.visibility,
        }
    }
}

/// External view of a client device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceView {
    pub id: String,
    pub name: String,
    pub status: i32,
    pub created_date_ms: i64,
}
