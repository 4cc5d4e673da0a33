//! Query cache behavior on a live gateway.

mod common;

use medledger_hostapi::StoreOp;

use common::*;

// ── Test: repeated queries are served from the cache ──

#[test]
fn test_repeated_query_hits_cache() {
    let (store, gateway) = cached(16);
    let conn = gateway.connect();
    conn.invoke(BASIC, "Save", &basic_save("p1", "Alice")).unwrap();

    let first = conn.query(BASIC, "QueryInfo", &args(&["p1"])).unwrap();
    // A store outage is invisible to a cached read.
    store.fail_next(StoreOp::Get);
    let second = conn.query(BASIC, "QueryInfo", &args(&["p1"])).unwrap();
    assert_eq!(first, second);
}

// ── Test: invoke invalidates the chaincode's cached reads ──

#[test]
fn test_invoke_invalidates_stale_reads() {
    let (_, gateway) = cached(16);
    let conn = gateway.connect();
    conn.invoke(BASIC, "Save", &basic_save("p1", "Alice")).unwrap();
    assert!(conn.query(BASIC, "QueryInfo", &args(&["p1"])).unwrap().contains("Alice"));

    conn.invoke(BASIC, "Save", &basic_save("p1", "Alicia")).unwrap();
    assert!(conn.query(BASIC, "QueryInfo", &args(&["p1"])).unwrap().contains("Alicia"));
}

#[test]
fn test_history_refreshes_after_invoke() {
    let (_, gateway) = cached(16);
    let conn = gateway.connect();
    conn.invoke(RECORD, "Save", &record_save("r1", "Flu", &["A"])).unwrap();
    let before = conn.query(RECORD, "QueryHistoryRecord", &args(&["r1"])).unwrap();

    conn.invoke(RECORD, "Save", &record_save("r1", "Flu", &["B"])).unwrap();
    let after = conn.query(RECORD, "QueryHistoryRecord", &args(&["r1"])).unwrap();
    assert_ne!(before, after);
    assert!(after.contains(r#""drugName":["B"]"#));
}

// ── Test: a miss is not remembered ──

#[test]
fn test_not_found_is_not_cached() {
    let (_, gateway) = cached(16);
    let conn = gateway.connect();
    assert!(conn.query(BASIC, "QueryInfo", &args(&["p1"])).is_err());

    conn.invoke(BASIC, "Save", &basic_save("p1", "Alice")).unwrap();
    assert!(conn.query(BASIC, "QueryInfo", &args(&["p1"])).is_ok());
}

// ── Test: connections of one gateway share invalidation ──

#[test]
fn test_invoke_on_one_connection_invalidates_others() {
    let (_, gateway) = cached(16);
    let reader = gateway.connect();
    let writer = gateway.connect();

    writer.invoke(BASIC, "Save", &basic_save("p1", "Alice")).unwrap();
    assert!(reader.query(BASIC, "QueryInfo", &args(&["p1"])).unwrap().contains("Alice"));

    writer.invoke(BASIC, "Save", &basic_save("p1", "Alicia")).unwrap();
    let fresh = reader.query(BASIC, "QueryInfo", &args(&["p1"])).unwrap();
    assert!(fresh.contains("Alicia"));
}

#[test]
fn test_connections_share_cached_results() {
    let (store, gateway) = cached(16);
    let first = gateway.connect();
    let second = gateway.connect();
    first.invoke(BASIC, "Save", &basic_save("p1", "Alice")).unwrap();
    let warmed = first.query(BASIC, "QueryInfo", &args(&["p1"])).unwrap();

    store.fail_next(StoreOp::Get);
    assert_eq!(second.query(BASIC, "QueryInfo", &args(&["p1"])).unwrap(), warmed);
}

// ── Test: separate gateways do not share a cache ──

#[test]
fn test_gateways_have_independent_caches() {
    let (_, one) = cached(16);
    let (_, two) = cached(16);
    assert!(!std::sync::Arc::ptr_eq(
        one.cache().unwrap(),
        two.cache().unwrap()
    ));
}
