//! Stderr inspection helpers for diagnosing test failures.

use std::fmt::Debug;

// Cap per dump so a failing property test doesn't flood the terminal.
const MAX_DUMPED: usize = 10;

/// Print a labelled dump of `seq` to stderr, capped at the first ten
/// elements.
///
/// Pass-through diagnostics only; the sequence is untouched.
pub fn dump_sequence<T: Debug>(label: &str, seq: &[T]) {
    eprintln!("[{label}] {} elements", seq.len());
    for (i, item) in seq.iter().take(MAX_DUMPED).enumerate() {
        eprintln!("[{label}] [{i}]: {item:?}");
    }
    if seq.len() > MAX_DUMPED {
        eprintln!("[{label}] ... ({} more elements)", seq.len() - MAX_DUMPED);
    }
}
