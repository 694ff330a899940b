//! Tests for tracing integration.

use std::fmt::{self, Write as _};
use std::sync::{Arc, Mutex};

use ddd_rail::prelude_async::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Span, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Clone)]
struct Recorded {
    level: Level,
    span: Option<&'static str>,
    fields: String,
}

/// Layer keeping every event it sees, flattened to `name=value` pairs.
#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Recorded>>>);

impl Recorder {
    fn events(&self) -> Vec<Recorded> {
        self.0.lock().unwrap().clone()
    }

    fn install(&self) -> tracing::subscriber::DefaultGuard {
        tracing::subscriber::set_default(tracing_subscriber::registry().with(self.clone()))
    }
}

struct FieldLine<'a>(&'a mut String);

impl Visit for FieldLine<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let _ = write!(self.0, "{}={:?} ", field.name(), value);
    }
}

impl<S> Layer<S> for Recorder
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut fields = String::new();
        event.record(&mut FieldLine(&mut fields));
        self.0.lock().unwrap().push(Recorded {
            level: *event.metadata().level(),
            span: ctx.event_span(event).map(|span| span.name()),
            fields,
        });
    }
}

#[test]
fn trace_outcome_logs_one_debug_event_and_returns_container() {
    let recorder = Recorder::default();
    let _guard = recorder.install();

    let valid = Container::<u32, &str>::valid(3).trace_outcome("amount");
    let invalid = Container::<u32, &str>::invalid_many(["a", "b"]).trace_outcome("amount");

    assert_eq!(valid.into_value(), Some(3));
    assert_eq!(invalid.into_errors().unwrap().len(), 2);

    let events = recorder.events();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.level == Level::DEBUG));
    assert!(events[0].fields.contains("label=\"amount\""));
    assert!(events[0].fields.contains("valid=true"));
    assert!(events[1].fields.contains("valid=false"));
    assert!(events[1].fields.contains("errors=2"));
}

#[test]
fn trace_errors_logs_one_warning_per_error_in_order() {
    let recorder = Recorder::default();
    let _guard = recorder.install();

    let invalid = Container::<u32, &str>::invalid_many(["a", "b"]).trace_errors("amount");
    assert_eq!(invalid.into_errors().unwrap().as_slice(), &["a", "b"]);

    let events = recorder.events();
    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.level == Level::WARN));
    assert!(events[0].fields.contains("index=0"));
    assert!(events[0].fields.contains("error=\"a\""));
    assert!(events[1].fields.contains("index=1"));
    assert!(events[1].fields.contains("error=\"b\""));
}

#[test]
fn trace_errors_is_silent_for_valid_containers() {
    let recorder = Recorder::default();
    let _guard = recorder.install();

    let valid = Container::<u32, &str>::valid(1).trace_errors("amount");
    assert!(valid.is_valid());
    assert!(recorder.events().is_empty());
}

#[tokio::test]
async fn traced_future_logs_outcome_once_resolved() {
    let recorder = Recorder::default();
    let _guard = recorder.install();

    let result = async { Container::<u32, &str>::valid(42) }.traced("load").await;
    assert_eq!(result.into_value(), Some(42));

    let events = recorder.events();
    assert_eq!(events.len(), 1);
    assert!(events[0].fields.contains("label=\"load\""));
    assert!(events[0].fields.contains("valid=true"));
}

#[tokio::test]
async fn traced_in_records_inside_the_given_span() {
    let recorder = Recorder::default();
    let _guard = recorder.install();

    let span = tracing::info_span!("checkout");
    let result = async { Container::<u32, &str>::invalid("failed") }
        .traced_in(span, "load")
        .await;
    assert_eq!(result.into_errors().unwrap().as_slice(), &["failed"]);

    let events = recorder.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].span, Some("checkout"));
    assert!(events[0].fields.contains("errors=1"));
}

#[tokio::test]
async fn traced_in_with_disabled_span_is_transparent() {
    let result = async { Container::<u32, &str>::invalid("failed") }
        .traced_in(Span::none(), "load")
        .await;
    assert_eq!(result.into_errors().unwrap().as_slice(), &["failed"]);
}

#[tokio::test]
async fn parallel_combinators_trace_fan_out_and_harvest() {
    let recorder = Recorder::default();
    let _guard = recorder.install();

    let steps = [1, 2, 3].map(|k| {
        move |p: i32| async move { if k == 1 { Container::valid(p + k) } else { Container::<i32, &str>::invalid("odd") } }
    });
    let harvested = Container::<i32, &str>::valid(5)
        .and_then_parallel(steps, |values| values.into_iter().sum::<i32>())
        .await;
    assert_eq!(harvested.into_errors().unwrap().len(), 2);

    let traces: Vec<_> = recorder.events().into_iter().filter(|e| e.level == Level::TRACE).collect();
    assert_eq!(traces.len(), 2);
    assert!(traces[0].fields.contains("fan_out=3"));
    assert!(traces[1].fields.contains("harvested=2"));
}
