/// User interface and status output utilities
///
/// This module handles:
/// - Thread-safe status output
/// - Colored terminal text
/// - Error message formatting
///
/// Everything here writes to stderr: stdout is reserved for the report
/// text itself.

use lazy_static::lazy_static;
use std::io::Write;
use std::sync::Mutex;

/// Execute a function with exclusive access to console output
/// Prevents interleaved output from multiple threads
fn status_lock<F>(f: F)
where
    F: FnOnce(),
{
    lazy_static! {
        static ref LOCK: Mutex<()> = Mutex::new(());
    }
    let _guard = LOCK.lock();
    f();
}

/// Print colored text to stderr, with fallback to plain text
fn print_color(s: &str, fg: term::color::Color) {
    if !really_print_color(s, fg) {
        eprint!("{}", s);
    }

    fn really_print_color(s: &str, fg: term::color::Color) -> bool {
        if let Some(ref mut t) = term::stderr() {
            if t.fg(fg).is_err() {
                return false;
            }
            let _ = t.attr(term::Attr::Bold);
            if write!(t, "{}", s).is_err() {
                return false;
            }
            let _ = t.reset();
        }

        true
    }
}

/// Print a status message with "relato: " prefix (thread-safe)
pub fn status(s: &str) {
    status_lock(|| {
        eprintln!("relato: {}", s);
    });
}

/// Print an error message with colored "error" prefix
pub fn print_error(msg: &str) {
    eprintln!();
    print_color("error", term::color::BRIGHT_RED);
    eprintln!(": {}", msg);
    eprintln!();
}
