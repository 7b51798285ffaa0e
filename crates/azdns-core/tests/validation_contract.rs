//! Adapter Contract Test: Pre-Dispatch Validation
//!
//! A malformed spec must fail before any remote call is issued.

mod common;

use common::*;

use azdns_core::{Error, PtrRecordState};

#[tokio::test]
async fn missing_required_fields_fail_before_dispatch() {
    let h = harness();

    let mut spec = sample_spec();
    spec.name = String::new();
    let mut state = PtrRecordState::new();
    let err = h.adapter.create_or_update(&spec, &mut state).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "{err}");

    let mut spec = sample_spec();
    spec.ttl = 0;
    let err = h.adapter.create_or_update(&spec, &mut state).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "{err}");

    assert_eq!(h.recorder.upsert_calls(), 0, "no remote call may be issued");
    assert_eq!(h.recorder.get_calls(), 0);
    assert!(state.is_absent(), "state stays absent on validation failure");
}

#[tokio::test]
async fn empty_hostname_in_the_set_is_surfaced_not_dropped() {
    let h = harness();

    let mut spec = sample_spec();
    spec.records.insert(String::new());
    let mut state = PtrRecordState::new();

    let err = h.adapter.create_or_update(&spec, &mut state).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)), "{err}");
    assert_eq!(h.recorder.upsert_calls(), 0);
}
