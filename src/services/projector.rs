//! Projection of stream settings into external-facing info values.
//!
//! Which optional fields a view carries depends only on its visibility and
//! the configured [`ProjectionPolicy`]; the policy is data, shared by every
//! call site, so the projected shape stays a stable contract.

use crate::models::stream::{StreamKind, StreamSettings, VodFields};
use crate::models::view::{ChannelInfo, StreamView, Visibility, VodInfo};

/// Optional fields included for one visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    pub include_price: bool,
    pub include_output_urls: bool,
}

/// Per-visibility field inclusion.
///
/// The default withholds output endpoint URIs from public views (they are
/// internal infrastructure), while private owners see everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionPolicy {
    pub public: FieldSelection,
    pub private: FieldSelection,
}

impl Default for ProjectionPolicy {
    fn default() -> Self {
        Self {
            public: FieldSelection {
                include_price: true,
                include_output_urls: false,
            },
            private: FieldSelection {
                include_price: true,
                include_output_urls: true,
            },
        }
    }
}

impl ProjectionPolicy {
    fn selection(&self, visibility: Visibility) -> FieldSelection {
        match visibility {
            Visibility::Public => self.public,
            Visibility::Private => self.private,
        }
    }
}

/// Pure, side-effect-free projector from settings to views.
#[derive(Debug, Clone, Default)]
pub struct ViewProjector {
    policy: ProjectionPolicy,
}

impl ViewProjector {
    pub fn new(policy: ProjectionPolicy) -> Self {
        Self { policy }
    }

    /// Project settings into the bucket its type tag selects.
    pub fn project(&self, settings: &StreamSettings, visibility: Visibility) -> StreamView {
        match (settings.kind(), settings.vod_fields()) {
            (StreamKind::Vod, Some(vod)) => {
                StreamView::Vod(self.vod_info(settings, vod, visibility))
            }
            _ => StreamView::Channel(self.channel_info(settings, visibility)),
        }
    }

    fn channel_info(&self, settings: &StreamSettings, visibility: Visibility) -> ChannelInfo {
        let base = settings.base();
        let selection = self.policy.selection(visibility);
        ChannelInfo {
            id: base.id,
            name: base.name.clone(),
            tvg_id: base.tvg_id.clone(),
            tvg_name: base.tvg_name.clone(),
            icon: base.tvg_logo.clone(),
            group: base.group.clone(),
            visibility,
            price: selection.include_price.then_some(base.price),
            output_urls: selection
                .include_output_urls
                .then(|| base.output.iter().map(|o| o.uri.clone()).collect()),
        }
    }

    fn vod_info(
        &self,
        settings: &StreamSettings,
        vod: &VodFields,
        visibility: Visibility,
    ) -> VodInfo {
        let channel = self.channel_info(settings, visibility);
        VodInfo {
            id: channel.id,
            name: channel.name,
            tvg_id: channel.tvg_id,
            tvg_name: channel.tvg_name,
            icon: channel.icon,
            group: channel.group,
            visibility,
            price: channel.price,
            output_urls: channel.output_urls,
            vod_type: vod.vod_type,
            description: vod.description.clone(),
            preview_icon: vod.preview_icon.clone(),
            trailer_url: vod.trailer_url.clone(),
            user_score: vod.user_score,
            prime_date_ms: vod.prime_date.timestamp_millis(),
            country: vod.country.clone(),
            duration_ms: vod.duration_ms,
        }
    }
}
