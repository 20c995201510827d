//! Tokenizer warnings with colored terminal output.
//!
//! Provides deduplication so that a document full of stray markup does not
//! print the same warning over and over. Output can be switched off globally
//! for embedders that collect issues themselves.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether `warn_once` prints anything at all.
static ENABLED: AtomicBool = AtomicBool::new(true);

/// Warn about a malformed construct (prints once per unique message)
///
/// Does nothing while warnings are disabled via [`set_enabled`]. A message
/// suppressed that way is not remembered, so it can still print later.
///
/// # Example
/// ```ignore
/// warn_once("HTML Tokenizer", "unterminated comment at byte 12");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if !is_enabled() {
        return;
    }

    let key = format!("[{component}] {message}");
    let should_print = WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key);

    if should_print {
        eprintln!("{}", format!("[tagstream {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call when starting on a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

/// Number of distinct warnings printed since the last [`clear_warnings`].
#[must_use]
pub fn warning_count() -> usize {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map_or(0, HashSet::len)
}

/// Turn warning output on or off for the whole process.
pub fn set_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Returns true if [`warn_once`] currently prints.
#[must_use]
pub fn is_enabled() -> bool {
    ENABLED.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Global state: keep every assertion in one test so parallel test threads
    // cannot interleave with it.
    #[test]
    fn test_dedupe_clear_and_disable() {
        clear_warnings();
        assert_eq!(warning_count(), 0);

        warn_once("Test", "first");
        warn_once("Test", "first");
        warn_once("Test", "second");
        warn_once("Other", "first");
        assert_eq!(warning_count(), 3);

        clear_warnings();
        assert_eq!(warning_count(), 0);

        set_enabled(false);
        assert!(!is_enabled());
        warn_once("Test", "silenced");
        assert_eq!(warning_count(), 0);

        set_enabled(true);
        warn_once("Test", "silenced");
        assert_eq!(warning_count(), 1);
        clear_warnings();
    }
}
