//! Tests for tracing integration.

use std::fmt;
use std::sync::{Arc, Mutex};

use fuzzy_search_error::tracing_ext::{
    report, report_warn, span_context, ReportResultExt, ResultSpanExt, SPAN_CONTEXT_KEY,
};
use fuzzy_search_error::{BoxedSearchResult, ErrorKind, SearchResult, StructuredError};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Span, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

type CapturedEvent = (Level, Vec<(String, String)>);

/// Layer that records every event it sees; span tracking is left to the registry.
#[derive(Clone, Default)]
struct CaptureLayer(Arc<Mutex<Vec<CapturedEvent>>>);

impl CaptureLayer {
    fn subscriber(&self) -> impl Subscriber + Send + Sync + 'static {
        Registry::default().with(self.clone())
    }

    fn events(&self) -> Vec<CapturedEvent> {
        self.0.lock().unwrap().clone()
    }
}

#[derive(Default)]
struct FieldCollector(Vec<(String, String)>);

impl Visit for FieldCollector {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldCollector::default();
        event.record(&mut fields);
        self.0.lock().unwrap().push((*event.metadata().level(), fields.0));
    }
}

fn field<'a>(fields: &'a [(String, String)], name: &str) -> Option<&'a str> {
    fields.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
}

#[test]
fn report_emits_flattened_record() {
    let capture = CaptureLayer::default();
    let err = StructuredError::of_kind(ErrorKind::InvalidAlgorithm, "bad algorithm")
        .with_code(400)
        .with_context("algorithm", "xyz");

    let fingerprint = tracing::subscriber::with_default(capture.subscriber(), || report(&err));

    assert_eq!(fingerprint, err.fingerprint());
    let events = capture.events();
    assert_eq!(events.len(), 1);

    let (level, fields) = &events[0];
    assert_eq!(*level, Level::ERROR);
    assert_eq!(field(fields, "message"), Some("bad algorithm"));
    assert_eq!(field(fields, "error.kind"), Some(r#""InvalidAlgorithmError""#));
    assert_eq!(field(fields, "error.code"), Some("400"));
    assert_eq!(field(fields, "error.context"), Some(r#"{algorithm="xyz"}"#));
    assert_eq!(field(fields, "error.causes"), Some("0"));
    assert!(field(fields, "error.line").is_some());
}

#[test]
fn report_warn_uses_warn_level() {
    let capture = CaptureLayer::default();
    let err = StructuredError::new("retrying search");

    tracing::subscriber::with_default(capture.subscriber(), || report_warn(&err));

    let events = capture.events();
    let (level, fields) = &events[0];
    assert_eq!(*level, Level::WARN);
    assert_eq!(field(fields, "error.causes"), Some("0"));
    assert!(field(fields, "error.fingerprint").is_some());
}

#[test]
fn report_err_passes_result_through() {
    let capture = CaptureLayer::default();

    tracing::subscriber::with_default(capture.subscriber(), || {
        let ok: SearchResult<u8> = Ok(1);
        assert_eq!(ok.report_err(), Ok(1));

        let err: BoxedSearchResult<u8> = Err(Box::new(StructuredError::new("term is empty")));
        assert!(err.report_err().is_err());
    });

    assert_eq!(capture.events().len(), 1);
}

#[test]
fn with_current_span_records_entered_span() {
    let capture = CaptureLayer::default();

    let err = tracing::subscriber::with_default(capture.subscriber(), || {
        let span = tracing::info_span!("fuzzy_search");
        let _guard = span.enter();

        let result: SearchResult<()> = Err(StructuredError::new("failed"));
        result.with_current_span().unwrap_err()
    });

    assert_eq!(err.context().get(SPAN_CONTEXT_KEY).and_then(|v| v.as_str()), Some("fuzzy_search"));
    assert!(err.context().contains_key("span.target"));
}

#[test]
fn with_current_span_outside_span_marks_none() {
    let result: BoxedSearchResult<()> = Err(Box::new(StructuredError::new("failed")));
    let err = result.with_current_span().unwrap_err();

    assert_eq!(err.context().get(SPAN_CONTEXT_KEY).and_then(|v| v.as_str()), Some("none"));
}

#[test]
fn with_span_ok_passes_through() {
    let result: SearchResult<i32> = Ok(42);

    assert_eq!(result.with_span(&Span::none()).unwrap(), 42);
}

#[test]
fn span_context_of_none_span() {
    let ctx = span_context(&Span::none());

    assert_eq!(ctx.len(), 1);
    assert_eq!(ctx.get(SPAN_CONTEXT_KEY).and_then(|v| v.as_str()), Some("none"));
}
