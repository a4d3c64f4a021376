//! Server-side stream catalog interface.
//!
//! Each subscription server exposes the authoritative, possibly newer,
//! settings for the streams it carries. The resolver only depends on this
//! trait; the backing store may be local, remote, or mocked.

use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::CatalogError;
use crate::models::stream::StreamSettings;

/// One subscription server's stream catalog.
///
/// `find_stream_settings_by_id` returns `Ok(None)` when the server no longer
/// carries the stream; callers must treat that (and lookup errors) as "skip",
/// never as a batch failure.
#[async_trait]
pub trait ServerCatalog: Send + Sync {
    fn server_id(&self) -> Uuid;

    async fn find_stream_settings_by_id(
        &self,
        stream_id: Uuid,
    ) -> Result<Option<StreamSettings>, CatalogError>;
}

/// Map-backed reference implementation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryServerCatalog {
    server_id: Uuid,
    streams: HashMap<Uuid, StreamSettings>,
}

impl InMemoryServerCatalog {
    pub fn new(server_id: Uuid) -> Self {
        Self {
            server_id,
            streams: HashMap::new(),
        }
    }

    /// Register settings under their own stream id, replacing any previous
    /// settings for that id.
    pub fn insert(&mut self, settings: StreamSettings) {
        self.streams.insert(settings.id(), settings);
    }

    pub fn remove(&mut self, stream_id: Uuid) -> Option<StreamSettings> {
        self.streams.remove(&stream_id)
    }

    pub fn len(&self) -> usize {
        self.streams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.streams.is_empty()
    }
}

#[async_trait]
impl ServerCatalog for InMemoryServerCatalog {
    fn server_id(&self) -> Uuid {
        self.server_id
    }

    async fn find_stream_settings_by_id(
        &self,
        stream_id: Uuid,
    ) -> Result<Option<StreamSettings>, CatalogError> {
        Ok(self.streams.get(&stream_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stream::{ProxyStream, RelayStream};

    #[tokio::test]
    async fn lookup_returns_none_for_unknown_id() {
        let catalog = InMemoryServerCatalog::new(Uuid::new_v4());
        let found = catalog
            .find_stream_settings_by_id(Uuid::new_v4())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn insert_replaces_settings_for_the_same_id() {
        let mut catalog = InMemoryServerCatalog::new(Uuid::new_v4());
        let mut relay = RelayStream::default();
        relay.base.name = "First".to_string();
        let id = relay.base.id;
        catalog.insert(StreamSettings::Relay(relay));

        let mut proxy = ProxyStream::default();
        proxy.base.id = id;
        proxy.base.name = "Second".to_string();
        catalog.insert(StreamSettings::Proxy(proxy));

        assert_eq!(catalog.len(), 1);
        let found = catalog.find_stream_settings_by_id(id).await.unwrap().unwrap();
        assert_eq!(found.base().name, "Second");
    }
}
