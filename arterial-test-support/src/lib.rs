//! Shared test utilities used across arterial crates.

pub mod ci;

pub mod tracing {
    //! Recording layer for capturing spans and events in tests.
    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Layer that keeps every closed span and emitted event so tests can
    /// assert instrumentation after the fact.
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    impl RecordingLayer {
        /// Returns the closed spans in completion order.
        ///
        /// # Examples
        /// ```
        /// use arterial_test_support::tracing::RecordingLayer;
        ///
        /// let layer = RecordingLayer::default();
        /// assert!(layer.spans().is_empty());
        /// ```
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            self.spans
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Returns the emitted events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        }

        /// Returns the first closed span called `name`, if any.
        #[must_use]
        pub fn span_named(&self, name: &str) -> Option<SpanRecord> {
            self.spans().into_iter().find(|span| span.name == name)
        }
    }

    /// Snapshot of a closed span.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from the tracing metadata.
        pub name: String,
        /// Fields recorded at creation or later through `Span::record`.
        pub fields: HashMap<String, String>,
    }

    impl SpanRecord {
        /// Returns the recorded value of `field` as a string slice.
        #[must_use]
        pub fn field(&self, field: &str) -> Option<&str> {
            self.fields.get(field).map(String::as_str)
        }
    }

    /// Snapshot of an emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Level of the event.
        pub level: Level,
        /// Target of the event.
        pub target: String,
        /// Fields attached to the event, `message` included.
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// Returns the event message, if one was logged.
        #[must_use]
        pub fn message(&self) -> Option<&str> {
            self.field("message")
        }

        /// Returns the recorded value of `field` as a string slice.
        #[must_use]
        pub fn field(&self, field: &str) -> Option<&str> {
            self.fields.get(field).map(String::as_str)
        }
    }

    struct PendingSpan(SpanRecord);

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut record = SpanRecord {
                name: attrs.metadata().name().to_owned(),
                fields: HashMap::new(),
            };
            attrs.record(&mut FieldRecorder(&mut record.fields));
            span.extensions_mut().insert(PendingSpan(record));
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut extensions = span.extensions_mut();
            if let Some(PendingSpan(record)) = extensions.get_mut::<PendingSpan>() {
                values.record(&mut FieldRecorder(&mut record.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            let Some(PendingSpan(record)) = span.extensions_mut().remove::<PendingSpan>() else {
                return;
            };
            self.spans
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(record);
        }

        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldRecorder(&mut fields));
            self.events
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(EventRecord {
                    level: *event.metadata().level(),
                    target: event.metadata().target().to_owned(),
                    fields,
                });
        }
    }

    /// Stores every field as its display form; debug-only values fall back
    /// to their `Debug` rendering.
    struct FieldRecorder<'a>(&'a mut HashMap<String, String>);

    impl FieldRecorder<'_> {
        fn insert(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for FieldRecorder<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.insert(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.insert(field, value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.insert(field, value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.insert(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.insert(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.insert(field, value.to_string());
        }
    }
}
