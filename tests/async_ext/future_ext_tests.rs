//! Tests for FutureResultExt trait.

use std::sync::atomic::{AtomicU32, Ordering};

use fuzzy_search_error::async_ext::{ContextFuture, FutureResultExt, LazyContextEntry, WrapError};
use fuzzy_search_error::{BoxedSearchResult, ErrorKind, SearchResult, StructuredError};

#[test]
fn context_future_is_send_sync() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    type Lazy = ContextFuture<
        std::future::Ready<SearchResult<()>>,
        LazyContextEntry<&'static str, fn() -> u32>,
    >;
    type Wrapped = ContextFuture<std::future::Ready<Result<(), std::io::Error>>, WrapError>;

    assert_send::<Lazy>();
    assert_sync::<Lazy>();
    assert_send::<Wrapped>();
    assert_sync::<Wrapped>();
}

#[tokio::test]
async fn with_context_does_not_evaluate_on_success() {
    let call_count = AtomicU32::new(0);

    let result = async { Ok::<_, StructuredError>(42) }
        .with_context("expensive", || {
            call_count.fetch_add(1, Ordering::SeqCst);
            "should not be called"
        })
        .await;

    assert_eq!(result.unwrap(), 42);
    assert_eq!(call_count.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn with_context_evaluates_only_on_error() {
    let call_count = AtomicU32::new(0);

    let result = async { Err::<i32, _>(StructuredError::new("failed")) }
        .with_context("attempt", || call_count.fetch_add(1, Ordering::SeqCst) + 1)
        .await;

    let err = result.unwrap_err();
    assert_eq!(call_count.load(Ordering::SeqCst), 1);
    assert_eq!(err.context().get("attempt").and_then(|v| v.as_u64()), Some(1));
}

#[tokio::test]
async fn with_context_overwrites_like_sync_variant() {
    let failing = async {
        Err::<(), _>(Box::new(StructuredError::new("failed").with_context("retry", 1)))
    };
    let result: BoxedSearchResult<()> = failing.with_context("retry", || 2).await;

    assert_eq!(result.unwrap_err().context().get("retry").and_then(|v| v.as_i64()), Some(2));
}

#[tokio::test]
async fn search_err_wraps_and_records_attach_site() {
    let failing = async { Err::<(), _>(std::io::Error::other("connection reset")) };
    let expected_line = line!() + 1;
    let wrapped = failing.search_err_kind(ErrorKind::InvalidConfig, "database unavailable");
    let result = wrapped.with_context("model", || "User").await;

    let err = result.unwrap_err();
    assert!(err.is_kind(ErrorKind::InvalidConfig));
    assert_eq!(err.location().line(), expected_line);
    assert_eq!(err.causes().next().map(|c| c.to_string()).as_deref(), Some("connection reset"));
    assert_eq!(err.context().get("model").and_then(|v| v.as_str()), Some("User"));
}

#[tokio::test]
async fn search_err_passes_ok_through() {
    let value = async { Ok::<_, std::io::Error>("rows") }.search_err("query failed").await;

    assert_eq!(value.unwrap(), "rows");
}

#[tokio::test]
async fn works_across_spawned_tasks() {
    let handle = tokio::spawn(async {
        let failing = async {
            Err::<(), _>(StructuredError::of_kind(ErrorKind::EmptySearchTerm, "term is empty"))
        };
        failing.with_context("task", || "spawned").await
    });

    let err = handle.await.unwrap().unwrap_err();
    assert_eq!(err.context().get("task").and_then(|v| v.as_str()), Some("spawned"));
}
