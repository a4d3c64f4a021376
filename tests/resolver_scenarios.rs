//! End-to-end resolution scenarios over the public crate API.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use uuid::Uuid;

use iptv_catalog::config::ResolverConfig;
use iptv_catalog::errors::CatalogError;
use iptv_catalog::models::Subscriber;
use iptv_catalog::models::stream::{
    HardwareFields, InputEndpoint, OutputEndpoint, RelayStream, StreamBase, StreamSettings,
    UserAgent, VodEncodeStream, VodType,
};
use iptv_catalog::models::view::Visibility;
use iptv_catalog::services::{InMemoryServerCatalog, ServerCatalog, StreamResolver};

mock! {
    Catalog {}

    #[async_trait]
    impl ServerCatalog for Catalog {
        fn server_id(&self) -> Uuid;
        async fn find_stream_settings_by_id(
            &self,
            stream_id: Uuid,
        ) -> Result<Option<StreamSettings>, CatalogError>;
    }
}

fn base_named(name: &str) -> StreamBase {
    StreamBase {
        name: name.to_string(),
        tvg_logo: "http://cdn.example.com/logo.png".to_string(),
        output: vec![OutputEndpoint {
            id: 0,
            uri: format!("http://edge.example.com/{name}/playlist.m3u8"),
            http_root: format!("/var/www/{name}"),
        }],
        ..StreamBase::default()
    }
}

fn relay_named(name: &str) -> StreamSettings {
    StreamSettings::Relay(RelayStream {
        base: base_named(name),
        hardware: HardwareFields {
            input: vec![InputEndpoint {
                id: 0,
                uri: "http://origin.example.com/live".to_string(),
                user_agent: UserAgent::Gstreamer,
                stream_link: false,
                proxy: None,
            }],
            ..HardwareFields::default()
        },
        ..RelayStream::default()
    })
}

fn vod_encode_named(name: &str) -> StreamSettings {
    let mut vod = VodEncodeStream {
        base: base_named(name),
        ..VodEncodeStream::default()
    };
    vod.vod.vod_type = Some(VodType::Vods);
    vod.vod.preview_icon = "http://cdn.example.com/preview.png".to_string();
    vod.vod.trailer_url = "http://cdn.example.com/trailer.mp4".to_string();
    vod.vod.country = "US".to_string();
    StreamSettings::VodEncode(vod)
}

fn resolver() -> StreamResolver {
    StreamResolver::new(&ResolverConfig::default())
}

fn server_with(streams: Vec<StreamSettings>) -> Arc<dyn ServerCatalog> {
    let mut catalog = InMemoryServerCatalog::new(Uuid::new_v4());
    for settings in streams {
        catalog.insert(settings);
    }
    Arc::new(catalog)
}

#[tokio::test]
async fn single_server_relay_resolves_to_one_public_channel() {
    let stream = relay_named("news");
    let id = stream.id();
    let server = server_with(vec![stream]);

    let resolved = resolver().resolve(&[server], &[id], &[]).await;
    assert_eq!(resolved.channels.len(), 1);
    assert!(resolved.vods.is_empty());
    assert_eq!(resolved.channels[0].id, id);
    assert_eq!(resolved.channels[0].visibility, Visibility::Public);
}

#[tokio::test]
async fn owned_vod_joins_the_private_half_of_the_vod_list() {
    let granted = relay_named("news");
    let granted_id = granted.id();
    let server = server_with(vec![granted]);
    let owned = vod_encode_named("home-movie");

    let resolved = resolver()
        .resolve(&[server], &[granted_id], std::slice::from_ref(&owned))
        .await;
    assert_eq!(resolved.channels.len(), 1);
    assert_eq!(resolved.channels[0].visibility, Visibility::Public);
    assert_eq!(resolved.vods.len(), 1);
    assert_eq!(resolved.vods[0].visibility, Visibility::Private);
    assert_eq!(resolved.vods[0].id, owned.id());
}

#[tokio::test]
async fn each_server_grant_is_resolved_independently() {
    // Both servers carry the same nominal id with different settings.
    let stream = relay_named("sports");
    let id = stream.id();
    let mut second = relay_named("sports-hd");
    second.base_mut().id = id;

    let resolved = resolver()
        .resolve(
            &[server_with(vec![stream]), server_with(vec![second])],
            &[id],
            &[],
        )
        .await;
    let names: Vec<_> = resolved.channels.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["sports", "sports-hd"]);
    assert!(resolved.channels.iter().all(|c| c.id == id));
    assert!(
        resolved
            .channels
            .iter()
            .all(|c| c.visibility == Visibility::Public)
    );
}

#[tokio::test]
async fn ids_absent_on_every_server_never_appear() {
    let server_a = server_with(vec![]);
    let server_b = server_with(vec![relay_named("carried")]);
    let missing = Uuid::new_v4();

    let resolved = resolver()
        .resolve(&[server_a, server_b], &[missing], &[])
        .await;
    assert!(resolved.channels.is_empty());
    assert!(resolved.vods.is_empty());
}

#[tokio::test]
async fn id_both_granted_and_owned_is_listed_once_per_visibility() {
    let stream = relay_named("shared");
    let id = stream.id();
    let server = server_with(vec![stream.clone()]);

    let resolved = resolver()
        .resolve(&[server], &[id], std::slice::from_ref(&stream))
        .await;
    assert_eq!(resolved.channels.len(), 2);
    assert_eq!(resolved.channels[0].visibility, Visibility::Public);
    assert_eq!(resolved.channels[1].visibility, Visibility::Private);
    assert!(resolved.channels.iter().all(|c| c.id == id));
}

#[tokio::test]
async fn resolution_is_idempotent_against_an_unchanged_catalog() {
    let first = relay_named("one");
    let second = vod_encode_named("two");
    let ids = [first.id(), second.id()];
    let server = server_with(vec![first, second]);
    let owned = [vod_encode_named("own")];

    let resolver = resolver();
    let a = resolver.resolve(std::slice::from_ref(&server), &ids, &owned).await;
    let b = resolver.resolve(std::slice::from_ref(&server), &ids, &owned).await;
    assert_eq!(a, b);
}

#[tokio::test]
async fn a_failing_server_is_skipped_not_fatal() {
    let stream = relay_named("stable");
    let id = stream.id();

    let mut broken = MockCatalog::new();
    let broken_id = Uuid::new_v4();
    broken.expect_server_id().return_const(broken_id);
    broken
        .expect_find_stream_settings_by_id()
        .returning(move |_| {
            Err(CatalogError::Unavailable {
                server: broken_id,
                reason: "connection refused".to_string(),
            })
        });

    let servers: Vec<Arc<dyn ServerCatalog>> =
        vec![Arc::new(broken), server_with(vec![stream])];
    let resolved = resolver().resolve(&servers, &[id], &[]).await;
    assert_eq!(resolved.channels.len(), 1);
    assert_eq!(resolved.channels[0].name, "stable");
}

#[tokio::test]
async fn resolve_for_feeds_the_subscribers_granted_ids() {
    let granted = relay_named("granted");
    let server = server_with(vec![granted.clone()]);
    let owned = vod_encode_named("owned");

    let mut subscriber = Subscriber::new(
        "user@example.com".to_string(),
        Subscriber::generate_password_hash("pw"),
        "US".to_string(),
    );
    subscriber.add_official_stream(granted.id());
    subscriber.add_own_stream(owned.id());

    let resolved = resolver()
        .resolve_for(&subscriber, &[server], std::slice::from_ref(&owned))
        .await;
    assert_eq!(resolved.channels.len(), 1);
    assert_eq!(resolved.vods.len(), 1);
    assert_eq!(resolved.channels[0].visibility, Visibility::Public);
    assert_eq!(resolved.vods[0].visibility, Visibility::Private);
}

#[tokio::test]
async fn subscriber_with_no_servers_or_streams_resolves_to_empty_lists() {
    let subscriber = Subscriber::new(
        "user@example.com".to_string(),
        String::new(),
        "US".to_string(),
    );
    let resolved = resolver().resolve_for(&subscriber, &[], &[]).await;
    assert!(resolved.channels.is_empty());
    assert!(resolved.vods.is_empty());
}
