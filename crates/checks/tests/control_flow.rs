//! Status and control-transfer semantics of the check macro family.
//!
//! Each test opens the logger over its own capture sink; thread-local logger
//! state keeps the cases independent.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use checks::{check, check_continue, check_to, log_if};
#[cfg(debug_assertions)]
use checks::{debug_check, debug_check_to};
use logging::Level;

#[derive(Clone, Default)]
struct SharedWriter(Rc<RefCell<Vec<u8>>>);

impl SharedWriter {
    fn lines(&self) -> Vec<String> {
        String::from_utf8(self.0.borrow().clone())
            .expect("captured output is valid UTF-8")
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn open_capture() -> SharedWriter {
    let sink = SharedWriter::default();
    logging::open_writer(sink.clone(), Level::Debug, "tests");
    sink
}

fn guarded(trigger: bool, after: &mut bool) -> i32 {
    let mut status = 0;
    check!(status, trigger, 11, Level::Error, "probe reported failure");
    *after = true;
    status
}

#[test]
fn check_false_is_a_complete_noop() {
    let sink = open_capture();

    let mut status = 0;
    let mut message_evaluated = false;
    let mut value_evaluated = false;
    check_continue!(
        status,
        false,
        {
            value_evaluated = true;
            -1
        },
        Level::Error,
        "{}",
        {
            message_evaluated = true;
            "never rendered"
        }
    );

    assert_eq!(status, 0);
    assert!(!message_evaluated);
    assert!(!value_evaluated);
    assert!(sink.lines().is_empty());

    logging::close();
}

#[test]
fn check_assigns_and_returns_early() {
    let sink = open_capture();

    let mut reached_tail = false;
    assert_eq!(guarded(true, &mut reached_tail), 11);
    assert!(!reached_tail);

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("ERROR"));
    assert!(lines[0].contains("probe reported failure"));

    logging::close();
}

#[test]
fn check_leaves_the_success_path_alone() {
    let sink = open_capture();

    let mut reached_tail = false;
    assert_eq!(guarded(false, &mut reached_tail), 0);
    assert!(reached_tail);
    assert!(sink.lines().is_empty());

    logging::close();
}

fn staged(fail_stage: u8, trace: &mut Vec<&'static str>) -> i32 {
    let mut status = 0;
    'stage1: {
        trace.push("acquire stage1");
        check_to!(
            'stage1,
            status,
            fail_stage == 1,
            10,
            Level::Error,
            "stage1 failed"
        );
        'stage2: {
            trace.push("acquire stage2");
            check_to!(
                'stage2,
                status,
                fail_stage == 2,
                20,
                Level::Error,
                "stage2 failed"
            );
            trace.push("work");
        }
        trace.push("release stage2");
    }
    trace.push("release stage1");
    status
}

#[test]
fn check_to_unwinds_only_the_failed_stage() {
    logging::open_writer(SharedWriter::default(), Level::Debug, "tests");

    let mut trace = Vec::new();
    assert_eq!(staged(2, &mut trace), 20);
    assert_eq!(
        trace,
        [
            "acquire stage1",
            "acquire stage2",
            "release stage2",
            "release stage1"
        ]
    );

    let mut trace = Vec::new();
    assert_eq!(staged(1, &mut trace), 10);
    assert_eq!(trace, ["acquire stage1", "release stage1"]);

    let mut trace = Vec::new();
    assert_eq!(staged(0, &mut trace), 0);
    assert_eq!(
        trace,
        [
            "acquire stage1",
            "acquire stage2",
            "work",
            "release stage2",
            "release stage1"
        ]
    );

    logging::close();
}

#[test]
fn check_continue_records_and_falls_through() {
    let sink = open_capture();

    let mut status = 0;
    check_continue!(
        status,
        true,
        23,
        Level::Warning,
        "entry {} skipped",
        "alpha"
    );

    // Execution falls through to here instead of leaving the routine.
    assert_eq!(status, 23);
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("WARNING"));
    assert!(lines[0].contains("entry alpha skipped"));

    logging::close();
}

#[cfg(debug_assertions)]
fn debug_guarded(trigger: bool) -> i32 {
    let mut status = 0;
    'setup: {
        debug_check_to!('setup, status, trigger, 7, Level::Warning, "setup probe failed");
        debug_check!(status, false, 99, Level::Error, "unreachable in this test");
    }
    status
}

#[cfg(debug_assertions)]
#[test]
fn debug_twins_transfer_control_in_debug_builds() {
    logging::open_writer(SharedWriter::default(), Level::Debug, "tests");

    assert_eq!(debug_guarded(true), 7);
    assert_eq!(debug_guarded(false), 0);

    logging::close();
}

#[test]
fn log_if_logs_only_when_the_condition_holds() {
    let sink = open_capture();

    let mut evaluated = false;
    log_if!(false, Level::Info, "{}", {
        evaluated = true;
        "hidden"
    });
    assert!(!evaluated);
    assert!(sink.lines().is_empty());

    log_if!(true, Level::Info, "visible {}", 1);
    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("visible 1"));

    logging::close();
}
