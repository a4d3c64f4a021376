//! Domain model for the subscriber catalog.
//!
//! `stream` holds the variant-tagged stream entity model, `view` the
//! external-facing projections. This module carries the subscriber aggregate
//! and its owned device entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::Display;
use uuid::Uuid;

pub mod stream;
pub mod view;

use crate::services::device_registry::DeviceRegistry;

pub const MAX_EMAIL_LENGTH: usize = 64;
/// Hex digest length of a stored password hash.
pub const SUBSCRIBER_HASH_LENGTH: usize = 32;
pub const DEFAULT_LOCALE: &str = "en";

pub const MIN_DEVICE_NAME_LENGTH: usize = 3;
pub const MAX_DEVICE_NAME_LENGTH: usize = 32;
pub const DEFAULT_DEVICE_NAME: &str = "Device";

/// 2100-01-01T00:00:00Z, the "never expires" sentinel.
const MAX_EXP_TIMESTAMP: i64 = 4_102_444_800;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum SubscriberStatus {
    #[default]
    NotActive = 0,
    Active = 1,
    TrialFinished = 2,
    Banned = 3,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Default,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum DeviceStatus {
    #[default]
    NotActive = 0,
    Active = 1,
    Banned = 2,
}

/// A client device owned by exactly one subscriber.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: Uuid,
    pub name: String,
    pub status: DeviceStatus,
    pub created_date: DateTime<Utc>,
}

impl Device {
    pub(crate) fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            status: DeviceStatus::NotActive,
            created_date: Utc::now(),
        }
    }

    pub fn to_view(&self) -> view::DeviceView {
        view::DeviceView {
            id: self.id.to_string(),
            name: self.name.clone(),
            status: self.status as i32,
            created_date_ms: self.created_date.timestamp_millis(),
        }
    }
}

/// Per-subscriber preference bag, opaque to the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberSettings {
    pub locale: String,
    pub timezone: Option<String>,
}

impl Default for SubscriberSettings {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            timezone: None,
        }
    }
}

/// The subscriber aggregate.
///
/// `servers`, `streams` and `own_streams` hold references by id; resolving
/// them into settings documents is the persistence layer's job. All list
/// mutation goes through the accessors below, which are pure in-memory
/// operations: persisting the updated aggregate is an explicit call at the
/// storage boundary, not a side effect here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscriber {
    pub id: Uuid,
    pub email: String,
    /// Fixed-length md5 hex digest; the raw password is never stored.
    pub password_hash: String,
    pub created_date: DateTime<Utc>,
    pub exp_date: DateTime<Utc>,
    pub status: SubscriberStatus,
    pub country: String,
    pub language: String,
    pub servers: Vec<Uuid>,
    pub devices: DeviceRegistry,
    pub streams: Vec<Uuid>,
    pub own_streams: Vec<Uuid>,
    pub settings: SubscriberSettings,
}

impl Subscriber {
    pub fn new(email: String, password_hash: String, country: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            created_date: Utc::now(),
            exp_date: Self::max_exp_date(),
            status: SubscriberStatus::NotActive,
            country,
            language: DEFAULT_LOCALE.to_string(),
            servers: Vec::new(),
            devices: DeviceRegistry::default(),
            streams: Vec::new(),
            own_streams: Vec::new(),
            settings: SubscriberSettings::default(),
        }
    }

    /// The "never expires" sentinel assigned to fresh accounts.
    pub fn max_exp_date() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(MAX_EXP_TIMESTAMP, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn generate_password_hash(password: &str) -> String {
        format!("{:x}", md5::compute(password.as_bytes()))
    }

    pub fn check_password_hash(hash: &str, password: &str) -> bool {
        hash == Self::generate_password_hash(password)
    }

    pub fn add_server(&mut self, server_id: Uuid) {
        if !self.servers.contains(&server_id) {
            self.servers.push(server_id);
        }
    }

    /// Drop a server reference. Also the cascade-pull hook the persistence
    /// layer invokes when a server document is deleted, so no dangling
    /// reference survives.
    pub fn remove_server(&mut self, server_id: Uuid) {
        self.servers.retain(|id| *id != server_id);
    }

    pub fn add_official_stream(&mut self, stream_id: Uuid) {
        if !self.streams.contains(&stream_id) {
            self.streams.push(stream_id);
        }
    }

    pub fn remove_official_stream(&mut self, stream_id: Uuid) {
        self.streams.retain(|id| *id != stream_id);
    }

    pub fn add_own_stream(&mut self, stream_id: Uuid) {
        if !self.own_streams.contains(&stream_id) {
            self.own_streams.push(stream_id);
        }
    }

    pub fn remove_own_stream(&mut self, stream_id: Uuid) {
        self.own_streams.retain(|id| *id != stream_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_32_hex_chars() {
        let hash = Subscriber::generate_password_hash("hunter2");
        assert_eq!(hash.len(), SUBSCRIBER_HASH_LENGTH);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
        assert!(Subscriber::check_password_hash(&hash, "hunter2"));
        assert!(!Subscriber::check_password_hash(&hash, "hunter3"));
    }

    #[test]
    fn new_subscriber_gets_sentinel_expiry_and_defaults() {
        let sub = Subscriber::new(
            "user@example.com".to_string(),
            Subscriber::generate_password_hash("pw"),
            "US".to_string(),
        );
        assert_eq!(sub.exp_date, Subscriber::max_exp_date());
        assert_eq!(sub.status, SubscriberStatus::NotActive);
        assert_eq!(sub.language, DEFAULT_LOCALE);
        assert!(sub.servers.is_empty());
        assert!(sub.streams.is_empty());
    }

    #[test]
    fn server_references_are_set_like() {
        let mut sub = Subscriber::new(
            "user@example.com".to_string(),
            String::new(),
            "US".to_string(),
        );
        let server = Uuid::new_v4();
        sub.add_server(server);
        sub.add_server(server);
        assert_eq!(sub.servers.len(), 1);
        sub.remove_server(server);
        assert!(sub.servers.is_empty());
    }

    #[test]
    fn removing_a_referenced_stream_leaves_no_dangling_id() {
        let mut sub = Subscriber::new(
            "user@example.com".to_string(),
            String::new(),
            "US".to_string(),
        );
        let stream = Uuid::new_v4();
        sub.add_official_stream(stream);
        sub.add_own_stream(stream);
        sub.remove_official_stream(stream);
        sub.remove_own_stream(stream);
        assert!(sub.streams.is_empty());
        assert!(sub.own_streams.is_empty());
    }
}
