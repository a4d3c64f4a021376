//! Subscriber entitlement resolution.
//!
//! Merges the two entitlement paths into the subscriber's full catalog view:
//! server-granted streams (looked up per server, projected Public) and
//! privately owned streams (no lookup, projected Private). Classification
//! into channels and VODs follows each stream's type tag.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::config::ResolverConfig;
use crate::models::Subscriber;
use crate::models::stream::StreamSettings;
use crate::models::view::{ChannelInfo, StreamView, Visibility, VodInfo};
use crate::services::catalog::ServerCatalog;
use crate::services::projector::ViewProjector;

/// The two classified, projected output lists of a resolution.
///
/// Within each list, public entries come first, then private ones; inside
/// each half the iteration order of the inputs is preserved. No global sort
/// order is claimed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedStreams {
    pub channels: Vec<ChannelInfo>,
    pub vods: Vec<VodInfo>,
}

/// Aggregation engine over subscription servers and owned streams.
#[derive(Debug, Clone)]
pub struct StreamResolver {
    projector: ViewProjector,
    catalog_concurrency: usize,
    lookup_timeout: Duration,
}

impl StreamResolver {
    pub fn new(config: &ResolverConfig) -> Self {
        Self::with_projector(config, ViewProjector::default())
    }

    pub fn with_projector(config: &ResolverConfig, projector: ViewProjector) -> Self {
        Self {
            projector,
            catalog_concurrency: config.catalog_concurrency.max(1),
            lookup_timeout: config.lookup_timeout(),
        }
    }

    /// Resolve a subscriber's full entitlement view.
    ///
    /// Subscription path: every `(server, stream id)` pair is looked up on
    /// that server's catalog; pairs fan out concurrently (bounded by the
    /// configured limit) while results keep input order. Absent streams,
    /// failed lookups and timed-out lookups are skipped, never fatal.
    ///
    /// Ownership path: each owned stream is classified by its own tag, the
    /// subscriber being authoritative for what it owns.
    ///
    /// An id granted by several servers yields one projection per server; an
    /// id both subscribed and owned appears once per visibility. Empty
    /// inputs yield empty lists.
    pub async fn resolve(
        &self,
        servers: &[Arc<dyn ServerCatalog>],
        subscribed: &[Uuid],
        owned: &[StreamSettings],
    ) -> ResolvedStreams {
        let mut resolved = ResolvedStreams::default();

        let pairs: Vec<(Arc<dyn ServerCatalog>, Uuid)> = servers
            .iter()
            .flat_map(|server| subscribed.iter().map(|id| (Arc::clone(server), *id)))
            .collect();
        debug!(
            servers = servers.len(),
            subscribed = subscribed.len(),
            owned = owned.len(),
            lookups = pairs.len(),
            "resolving subscriber streams"
        );

        let timeout = self.lookup_timeout;
        let mut lookups = futures::stream::iter(pairs)
            .map(|(server, stream_id)| async move {
                Self::lookup(server, stream_id, timeout).await
            })
            .buffered(self.catalog_concurrency);

        while let Some(found) = lookups.next().await {
            if let Some(settings) = found {
                self.push(&mut resolved, &settings, Visibility::Public);
            }
        }

        for settings in owned {
            self.push(&mut resolved, settings, Visibility::Private);
        }

        resolved
    }

    /// Convenience entry point feeding a subscriber's granted stream ids.
    ///
    /// `owned` carries the materialized settings of `subscriber.own_streams`;
    /// dereferencing those ids is the storage boundary's job.
    pub async fn resolve_for(
        &self,
        subscriber: &Subscriber,
        servers: &[Arc<dyn ServerCatalog>],
        owned: &[StreamSettings],
    ) -> ResolvedStreams {
        self.resolve(servers, &subscriber.streams, owned).await
    }

    /// One catalog lookup, softened: every failure mode becomes "absent".
    async fn lookup(
        server: Arc<dyn ServerCatalog>,
        stream_id: Uuid,
        timeout: Duration,
    ) -> Option<StreamSettings> {
        let lookup = server.find_stream_settings_by_id(stream_id);
        match tokio::time::timeout(timeout, lookup).await {
            Ok(Ok(found)) => found,
            Ok(Err(err)) => {
                warn!(
                    server = %server.server_id(),
                    stream = %stream_id,
                    error = %err,
                    "catalog lookup failed, skipping entry"
                );
                None
            }
            Err(_) => {
                warn!(
                    server = %server.server_id(),
                    stream = %stream_id,
                    "catalog lookup timed out, skipping entry"
                );
                None
            }
        }
    }

    fn push(&self, resolved: &mut ResolvedStreams, settings: &StreamSettings, visibility: Visibility) {
        match self.projector.project(settings, visibility) {
            StreamView::Channel(channel) => resolved.channels.push(channel),
            StreamView::Vod(vod) => resolved.vods.push(vod),
        }
    }
}
