//! Thread-local write sink for example output.
//!
//! Examples print through [`write_line`] (or the [`say!`](crate::say) macro)
//! instead of `println!`. Outside a capture the lines go straight to stdout.
//! While a [`CaptureGuard`] is live, lines are appended to its buffer instead.
//!
//! Captures nest: the innermost guard receives the lines. A guard always pops
//! its buffer when dropped, so the sink is restored even if the captured code
//! returns early or unwinds.

use std::cell::RefCell;

thread_local! {
    static CAPTURES: RefCell<Vec<Vec<String>>> = const { RefCell::new(Vec::new()) };
}

/// Write formatted text to the sink, like `println!`.
#[macro_export]
macro_rules! say {
    () => {
        $crate::sink::write_line("")
    };
    ($($arg:tt)*) => {
        $crate::sink::write_line(::std::format!($($arg)*))
    };
}

/// Write one logical line. Embedded newlines split into several lines.
pub fn write_line(text: impl AsRef<str>) {
    let lines: Vec<String> = text.as_ref().split('\n').map(str::to_string).collect();
    let uncaptured = CAPTURES.with(|captures| match captures.borrow_mut().last_mut() {
        Some(buffer) => {
            buffer.extend(lines);
            None
        }
        None => Some(lines),
    });
    if let Some(lines) = uncaptured {
        for line in lines {
            println!("{line}");
        }
    }
}

/// Returns true if a capture is active on this thread.
pub fn is_capturing() -> bool {
    CAPTURES.with(|captures| !captures.borrow().is_empty())
}

/// Scoped redirection of the sink into an in-memory buffer.
#[derive(Debug)]
#[must_use = "dropping the guard ends the capture immediately"]
pub struct CaptureGuard {
    depth: usize,
    finished: bool,
}

impl CaptureGuard {
    /// Start capturing lines written on this thread.
    pub fn begin() -> Self {
        let depth = CAPTURES.with(|captures| {
            let mut captures = captures.borrow_mut();
            captures.push(Vec::new());
            captures.len()
        });
        Self {
            depth,
            finished: false,
        }
    }

    /// End the capture and return the captured lines.
    pub fn finish(mut self) -> Vec<String> {
        self.finished = true;
        self.release()
    }

    fn release(&self) -> Vec<String> {
        CAPTURES.with(|captures| {
            let mut captures = captures.borrow_mut();
            // Inner guards that were leaked must not outlive this one.
            captures.truncate(self.depth);
            if captures.len() == self.depth {
                captures.pop().unwrap_or_default()
            } else {
                Vec::new()
            }
        })
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        if !self.finished {
            self.release();
        }
    }
}

/// Run `f` with the sink redirected, returning the captured lines and `f`'s value.
pub fn capture<T>(f: impl FnOnce() -> T) -> (Vec<String>, T) {
    let guard = CaptureGuard::begin();
    let value = f();
    (guard.finish(), value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_lines_in_order() {
        let (lines, ()) = capture(|| {
            write_line("one");
            crate::say!("two {}", 2);
        });
        assert_eq!(lines, vec!["one", "two 2"]);
        assert!(!is_capturing());
    }

    #[test]
    fn embedded_newlines_split_lines() {
        let (lines, ()) = capture(|| write_line("a\nb"));
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn empty_say_writes_blank_line() {
        let (lines, ()) = capture(|| crate::say!());
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn nested_capture_goes_to_innermost() {
        let (outer, inner) = capture(|| {
            write_line("outer");
            let (inner, ()) = capture(|| write_line("inner"));
            inner
        });
        assert_eq!(outer, vec!["outer"]);
        assert_eq!(inner, vec!["inner"]);
    }

    #[test]
    fn capture_is_local_to_its_thread() {
        let (lines, other_was_capturing) = capture(|| {
            write_line("main");
            std::thread::spawn(|| {
                let capturing = is_capturing();
                write_line("other-thread");
                capturing
            })
            .join()
            .expect("join writer thread")
        });
        assert!(!other_was_capturing);
        assert_eq!(lines, vec!["main"]);
    }

    #[test]
    fn restored_after_panic() {
        let result = std::panic::catch_unwind(|| {
            let _guard = CaptureGuard::begin();
            write_line("lost");
            panic!("boom");
        });
        assert!(result.is_err());
        assert!(!is_capturing());
    }

    #[test]
    fn leaked_inner_guard_is_cleaned_up_by_outer() {
        let outer = CaptureGuard::begin();
        std::mem::forget(CaptureGuard::begin());
        write_line("into leaked buffer");
        let lines = outer.finish();
        assert!(lines.is_empty());
        assert!(!is_capturing());
    }
}
