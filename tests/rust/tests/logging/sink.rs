//! Tests for the LogSink contract
//!
//! Validates that the contract dispatches through trait objects and stays
//! open to backends other than the console logger.

use ctxlog_core::{ConsoleLogger, LogSink};
use pretty_assertions::assert_eq;
use tests::mocks::{CaptureBuffer, MemorySink};

#[test]
fn memory_sink_records_calls_verbatim() {
    let mut sink = MemorySink::new();

    sink.log("req-1", "hello");
    sink.log("", "");

    assert_eq!(
        sink.records,
        vec![
            ("req-1".to_string(), "hello".to_string()),
            (String::new(), String::new()),
        ]
    );
}

#[test]
fn contract_dispatches_through_trait_objects() {
    let out = CaptureBuffer::new();
    let mut sink: Box<dyn LogSink> =
        Box::new(ConsoleLogger::new("boxed").with_writer(out.clone()));

    sink.log("req-1", "via trait object");
    drop(sink);

    assert_eq!(
        out.lines(),
        vec![
            "Context ID: req-1",
            "Description: via trait object",
            "Logger is being destructed! ",
        ]
    );
}

#[test]
fn backends_are_interchangeable_behind_the_contract() {
    fn record_startup(sink: &mut dyn LogSink) {
        sink.log("boot", "ready");
    }

    let out = CaptureBuffer::new();
    let mut console = ConsoleLogger::new("boot").with_writer(out.clone());
    let mut memory = MemorySink::new();

    record_startup(&mut console);
    record_startup(&mut memory);

    assert_eq!(out.lines(), vec!["Context ID: boot", "Description: ready"]);
    assert_eq!(
        memory.records,
        vec![("boot".to_string(), "ready".to_string())]
    );
}
