//! Serde round-trip tests for Maybe and Identity.
//!
//! Emptiness is a variant tag, not a shared sentinel object, so a
//! serialized `Empty` must survive a round trip through JSON and compare
//! equal structurally.

#![cfg(all(feature = "maybe", feature = "serde"))]

use mayhaps::maybe::Maybe;
use mayhaps::typeclass::Identity;
use rstest::rstest;

#[rstest]
fn maybe_present_roundtrips_through_json() {
    let original = Maybe::Present(42);
    let json = serde_json::to_string(&original).unwrap();
    let restored: Maybe<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[rstest]
fn maybe_empty_roundtrips_through_json() {
    let original: Maybe<i32> = Maybe::Empty;
    let json = serde_json::to_string(&original).unwrap();
    let restored: Maybe<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
    assert!(restored.is_empty());
}

#[rstest]
fn maybe_serialized_form_is_tagged() {
    assert_eq!(
        serde_json::to_string(&Maybe::Present(42)).unwrap(),
        r#"{"Present":42}"#
    );
    assert_eq!(
        serde_json::to_string(&Maybe::<i32>::Empty).unwrap(),
        r#""Empty""#
    );
}

#[rstest]
fn identity_serializes_transparently_as_newtype() {
    let original = Identity::new(42);
    let json = serde_json::to_string(&original).unwrap();
    assert_eq!(json, "42");

    let restored: Identity<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);
}

#[rstest]
fn nested_maybe_preserves_structure() {
    let nested: Maybe<Maybe<i32>> = Maybe::Present(Maybe::Empty);
    let json = serde_json::to_string(&nested).unwrap();
    let restored: Maybe<Maybe<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, nested);
    assert_eq!(restored.join(), Maybe::Empty);
}
