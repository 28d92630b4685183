//! Runtime and compile-time assertion behavior, including the debug twins.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use checks::{ct_assert, debug_ct_assert, rt_assert};
use logging::Level;

ct_assert!(logging::MESSAGE_MAX_LEN >= 128);
debug_ct_assert!(u8::MAX as usize >= logging::Level::Debug.ordinal() as usize);

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

#[test]
fn rt_assert_is_silent_when_the_condition_holds() {
    let sink = open_capture();

    rt_assert!(2 + 2 == 4, "arithmetic still works");
    assert!(sink.lines().is_empty());

    logging::close();
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "assertion failed: 2 + 2 == 5")]
fn rt_assert_panics_when_debug_assertions_are_enabled() {
    logging::open_writer(SharedWriter::default(), Level::Debug, "tests");
    rt_assert!(2 + 2 == 5, "cruel, needless misunderstanding");
}

#[cfg(debug_assertions)]
#[test]
fn rt_assert_logs_condition_and_message_before_panicking() {
    use std::panic::{self, AssertUnwindSafe};

    let sink = open_capture();

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        rt_assert!(1 + 1 == 3, "expected {} to equal {}", 1 + 1, 3);
    }));
    assert!(outcome.is_err());

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("EMERGENCY"));
    assert!(lines[0].contains("rt_assert!(1 + 1 == 3) failed!"));
    assert!(lines[1].contains("EMERGENCY"));
    assert!(lines[1].contains("expected 2 to equal 3"));

    logging::close();
}

#[cfg(not(debug_assertions))]
#[test]
fn rt_assert_continues_with_three_records_when_assertions_are_disabled() {
    let sink = open_capture();

    rt_assert!(1 + 1 == 3, "expected {} to equal {}", 1 + 1, 3);

    let lines = sink.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("rt_assert!(1 + 1 == 3) failed!"));
    assert!(lines[1].contains("expected 2 to equal 3"));
    assert!(lines[2].contains("ALERT"));
    assert!(lines[2].contains("continuing despite failed assertion"));

    logging::close();
}

#[test]
fn ct_assert_works_inside_function_bodies() {
    ct_assert!(core::mem::size_of::<u64>() == 8);
    debug_ct_assert!(core::mem::align_of::<u64>() <= 8);
}

mod debug_twins {
    use super::open_capture;
    use checks::{debug_check_continue, debug_log_if, debug_rt_assert};
    use logging::Level;

    #[cfg(debug_assertions)]
    #[test]
    fn twins_behave_like_the_base_macros_in_debug_builds() {
        let sink = open_capture();

        let mut status = 0;
        debug_check_continue!(status, true, 7, Level::Warning, "debug-only check");
        assert_eq!(status, 7);

        debug_log_if!(true, Level::Info, "debug-only note");
        debug_rt_assert!(status == 7, "status was just assigned");

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("debug-only check"));
        assert!(lines[1].contains("debug-only note"));

        logging::close();
    }

    #[cfg(not(debug_assertions))]
    #[test]
    #[allow(unused_mut)]
    fn twins_vanish_in_release_builds() {
        let sink = open_capture();

        let mut status = 0;
        debug_check_continue!(status, true, 7, Level::Warning, "debug-only check");
        assert_eq!(status, 0);

        debug_log_if!(true, Level::Info, "debug-only note");
        debug_rt_assert!(1 + 1 == 3, "never evaluated in this build");
        assert!(sink.lines().is_empty());

        logging::close();
    }
}
