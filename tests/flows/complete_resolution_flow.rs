#[path = "../common/mod.rs"]
mod common;
use common::{records_json, resolver_for, resolver_sharing, IpamServer, TestHosts, UNREACHABLE_URL};

use netbox_dns_application::use_cases::ResolutionOutcome;
use netbox_dns_domain::{AddressFamily, DomainError};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

// ============================================================================
// Cache lifecycle
// ============================================================================

#[tokio::test]
async fn test_fetch_cache_then_expire() {
    let ipam = IpamServer::start().await;
    ipam.serve(
        TestHosts::db(),
        200,
        r#"{"results":[{"family":{"value":4,"label":"ipv4"},"address":"192.0.2.10/32"}]}"#,
    )
    .await;

    let (online, clock) = resolver_for(&ipam.url(), 5);
    let offline = resolver_sharing(UNREACHABLE_URL, 5, online.cache().clone());

    // Empty cache: answered by the IPAM service.
    assert_eq!(
        online.resolve(TestHosts::db(), AddressFamily::V4).await,
        "192.0.2.10"
    );
    assert_eq!(ipam.requests_for(TestHosts::db()).await, 1);

    // Upstream gone: still answered from the cache.
    let cached = offline
        .execute(TestHosts::db(), AddressFamily::V4, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(cached.outcome, ResolutionOutcome::Cached("192.0.2.10".into()));

    // TTL elapsed and upstream still gone: nothing to answer with.
    clock.advance(Duration::from_secs(5));
    assert_eq!(
        offline.resolve(TestHosts::db(), AddressFamily::V4).await,
        ""
    );
    assert_eq!(online.cache().get(TestHosts::db(), AddressFamily::V4), None);
}

#[tokio::test]
async fn test_warm_key_never_refetches() {
    let ipam = IpamServer::start().await;
    ipam.serve(TestHosts::web(), 200, &records_json(&[(4, "198.51.100.7/24")]))
        .await;

    let (resolver, clock) = resolver_for(&ipam.url(), 300);

    for _ in 0..20 {
        assert_eq!(
            resolver.resolve(TestHosts::web(), AddressFamily::V4).await,
            "198.51.100.7"
        );
        clock.advance(Duration::from_secs(10));
    }

    assert_eq!(ipam.requests_for(TestHosts::web()).await, 1);
}

#[tokio::test]
async fn test_expired_entry_is_refreshed_from_ipam() {
    let ipam = IpamServer::start().await;
    ipam.serve_times(
        TestHosts::web(),
        200,
        &records_json(&[(4, "198.51.100.7/24")]),
        Some(1),
    )
    .await;
    ipam.serve(TestHosts::web(), 200, &records_json(&[(4, "198.51.100.8/24")]))
        .await;

    let (resolver, clock) = resolver_for(&ipam.url(), 30);

    assert_eq!(
        resolver.resolve(TestHosts::web(), AddressFamily::V4).await,
        "198.51.100.7"
    );
    clock.advance(Duration::from_secs(31));
    assert_eq!(
        resolver.resolve(TestHosts::web(), AddressFamily::V4).await,
        "198.51.100.8"
    );
    assert_eq!(ipam.requests_for(TestHosts::web()).await, 2);
}

// ============================================================================
// Family selection
// ============================================================================

#[tokio::test]
async fn test_first_record_of_family_is_returned() {
    let ipam = IpamServer::start().await;
    ipam.serve(
        TestHosts::dual_stack(),
        200,
        &records_json(&[(6, "fe80::1/64"), (4, "10.0.0.5/24"), (4, "10.0.0.9/24")]),
    )
    .await;

    let (resolver, _clock) = resolver_for(&ipam.url(), 60);

    assert_eq!(
        resolver
            .resolve(TestHosts::dual_stack(), AddressFamily::V4)
            .await,
        "10.0.0.5"
    );
    assert_eq!(
        resolver
            .resolve(TestHosts::dual_stack(), AddressFamily::V6)
            .await,
        "fe80::1"
    );
    // Families are cached separately, so the v6 lookup had to fetch.
    assert_eq!(ipam.requests_for(TestHosts::dual_stack()).await, 2);
}

#[tokio::test]
async fn test_missing_family_is_empty_and_uncached() {
    let ipam = IpamServer::start().await;
    ipam.serve(TestHosts::web(), 200, &records_json(&[(4, "198.51.100.7/24")]))
        .await;

    let (resolver, _clock) = resolver_for(&ipam.url(), 60);

    let resolution = resolver
        .execute(TestHosts::web(), AddressFamily::V6, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(resolution.outcome, ResolutionOutcome::NoFamilyMatch);
    assert_eq!(resolver.cache().get(TestHosts::web(), AddressFamily::V6), None);
    assert!(resolver.cache().is_empty());
}

#[tokio::test]
async fn test_unknown_name_has_no_records() {
    let ipam = IpamServer::start().await;
    ipam.serve(TestHosts::unknown(), 200, &records_json(&[])).await;

    let (resolver, _clock) = resolver_for(&ipam.url(), 60);

    let resolution = resolver
        .execute(TestHosts::unknown(), AddressFamily::V4, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(resolution.outcome, ResolutionOutcome::NoRecords);
    assert_eq!(
        resolver.resolve(TestHosts::unknown(), AddressFamily::V4).await,
        ""
    );
}

// ============================================================================
// Decode failures
// ============================================================================

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let ipam = IpamServer::start().await;
    ipam.serve(TestHosts::broken(), 200, "{\"results\": [{\"family\": 4")
        .await;

    let (resolver, _clock) = resolver_for(&ipam.url(), 60);

    let err = resolver
        .execute(TestHosts::broken(), AddressFamily::V4, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Decode(_)));
    assert_eq!(ipam.requests_for(TestHosts::broken()).await, 1);
}

#[tokio::test]
async fn test_decode_failure_does_not_disturb_other_names() {
    let ipam = IpamServer::start().await;
    ipam.serve(TestHosts::db(), 200, &records_json(&[(4, "192.0.2.10/32")]))
        .await;
    ipam.serve(TestHosts::web(), 200, &records_json(&[(4, "198.51.100.7/24")]))
        .await;
    ipam.serve(TestHosts::broken(), 200, "not json at all").await;

    let (resolver, _clock) = resolver_for(&ipam.url(), 60);
    assert_eq!(
        resolver.resolve(TestHosts::db(), AddressFamily::V4).await,
        "192.0.2.10"
    );

    let (broken, web) = tokio::join!(
        resolver.resolve(TestHosts::broken(), AddressFamily::V4),
        resolver.resolve(TestHosts::web(), AddressFamily::V4),
    );

    assert_eq!(broken, "");
    assert_eq!(web, "198.51.100.7");
    assert_eq!(
        resolver
            .cache()
            .get(TestHosts::db(), AddressFamily::V4)
            .as_deref(),
        Some("192.0.2.10")
    );
    assert_eq!(resolver.cache().len(), 2);
}
