use std::sync::Arc;

use fuzzy_search_error::{context_map, ContextMap, ErrorKind, SharedCause, StructuredError};

pub mod context_value;
pub mod error_record;

#[test]
fn new_error_has_empty_context_and_zero_code() {
    let err = StructuredError::new("term is empty");

    assert!(err.context().is_empty());
    assert_eq!(err.message(), "term is empty");
    assert_eq!(err.code(), 0);
    assert!(err.cause().is_none());
    assert_eq!(err.kind(), ErrorKind::Generic);
}

#[test]
fn from_parts_keeps_every_part() {
    let cause: SharedCause = Arc::new(std::io::Error::other("pool exhausted"));
    let err = StructuredError::from_parts(
        "bad algorithm",
        context_map! { "algorithm" => "xyz" },
        400,
        Some(cause.clone()),
    );

    assert_eq!(err.message(), "bad algorithm");
    assert_eq!(err.code(), 400);
    assert_eq!(err.context(), &context_map! { "algorithm" => "xyz" });
    assert!(Arc::ptr_eq(err.cause().unwrap(), &cause));
}

#[test]
fn from_parts_exports_code_context_and_message() {
    let record = StructuredError::from_parts(
        "bad algorithm",
        context_map! { "algorithm" => "xyz" },
        400,
        None,
    )
    .to_record();

    assert_eq!(record.code, 400);
    assert_eq!(record.context, context_map! { "algorithm" => "xyz" });
    assert_eq!(record.message, "bad algorithm");
    assert_eq!(record.error_type, "StructuredError");
    assert!(record.causes.is_empty());
}

#[test]
fn with_context_last_write_wins() {
    let err = StructuredError::new("query failed")
        .with_context("retry", 1)
        .with_context("retry", 2);

    assert_eq!(err.context(), &context_map! { "retry" => 2 });
}

#[test]
fn with_context_extends_initial_context() {
    let err = StructuredError::new("bad algorithm")
        .with_context_map(context_map! { "algorithm" => "xyz" })
        .with_context("model", "User");

    let keys: Vec<_> = err.context().keys().collect();
    assert_eq!(keys, ["algorithm", "model"]);
}

#[test]
fn with_context_map_replaces_existing_entries() {
    let err = StructuredError::new("boom")
        .with_context("stale", true)
        .with_context_map(context_map! { "fresh" => true });

    assert!(!err.context().contains_key("stale"));
    assert!(err.context().contains_key("fresh"));
}

#[test]
fn with_contexts_inserts_all_entries() {
    let err = StructuredError::new("boom").with_contexts([("a", 1), ("b", 2), ("a", 3)]);

    assert_eq!(err.context(), &context_map! { "a" => 3, "b" => 2 });
}

#[test]
fn insert_context_mutates_through_reference() {
    let mut err = StructuredError::new("boom");
    err.insert_context("term", "jon").insert_context("limit", 10u32);

    assert_eq!(err.context().len(), 2);
    assert_eq!(err.context().get("limit").and_then(|v| v.as_u64()), Some(10));
}

#[test]
fn location_points_at_construction_site() {
    let expected_line = line!() + 1;
    let err = StructuredError::of_kind(ErrorKind::InvalidConfig, "threshold out of range");

    let file = err.location().file().replace('\\', "/");
    assert!(file.ends_with("tests/types/mod.rs"));
    assert_eq!(err.location().line(), expected_line);
}

#[test]
fn builders_keep_original_location() {
    let expected_line = line!() + 1;
    let err = StructuredError::new("boom");
    let err = err.with_code(7).with_context("k", "v");

    assert_eq!(err.location().line(), expected_line);
}

#[test]
fn shared_cause_is_not_cloned() {
    let cause: SharedCause = Arc::new(std::io::Error::other("disk full"));
    let first = StructuredError::new("index write failed").with_shared_cause(cause.clone());
    let second = StructuredError::new("cache write failed").with_shared_cause(cause.clone());

    assert!(Arc::ptr_eq(first.cause().unwrap(), second.cause().unwrap()));
    assert_eq!(Arc::strong_count(&cause), 3);
}

#[test]
fn causes_walks_nested_chain() {
    let inner = StructuredError::new("connection refused");
    let middle = StructuredError::new("query failed").with_cause(inner);
    let outer = StructuredError::new("search failed").with_cause(middle);

    let messages: Vec<String> = outer.causes().map(|c| c.to_string()).collect();
    assert_eq!(messages, ["query failed", "connection refused"]);
}

#[test]
fn clone_compares_equal_and_diverges_independently() {
    let original = StructuredError::new("boom").with_context("a", 1);
    let copy = original.clone().with_context("b", 2);

    assert_eq!(original.clone(), original);
    assert_ne!(original, copy);
    assert_eq!(original.context().len(), 1);
}

#[test]
fn context_map_equality_ignores_attachment_order() {
    let a: ContextMap = [("x", 1), ("y", 2)].into();
    let b: ContextMap = [("y", 2), ("x", 1)].into();

    assert_eq!(a, b);
}

#[test]
fn kinds_report_type_names() {
    let cases = [
        (ErrorKind::Generic, "StructuredError"),
        (ErrorKind::EmptySearchTerm, "EmptySearchTermError"),
        (ErrorKind::InvalidAlgorithm, "InvalidAlgorithmError"),
        (ErrorKind::InvalidConfig, "InvalidConfigError"),
        (ErrorKind::SearchableColumnsNotFound, "SearchableColumnsNotFoundError"),
        (ErrorKind::Custom("RankingError"), "RankingError"),
    ];

    for (kind, name) in cases {
        let err = StructuredError::of_kind(kind, "boom");
        assert_eq!(err.to_record().error_type, name);
        assert!(err.is_kind(kind));
    }
}
