//! Markup warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Used by the repairer, pruner and script guard to report markup they had to
//! fix up, drop, or neutralize. Malformed markup is never an error, so this is
//! the only channel through which those recoveries become visible.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Whether warnings are printed at all. Recording still happens when off.
static ENABLED: AtomicBool = AtomicBool::new(true);

fn key(component: &str, message: &str) -> String {
    format!("[{component}] {message}")
}

/// Most distinct warnings kept in the dedup set. Messages past the limit are
/// neither recorded nor printed.
pub const MAX_RECORDED_WARNINGS: usize = 1024;

/// Warn about a recovered markup problem (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Repair", "dropped orphaned closer");
/// ```
pub fn warn_once(component: &str, message: &str) {
    let key = key(component, message);
    let first_time = {
        let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
        let warned = guard.get_or_insert_with(HashSet::new);
        warned.len() < MAX_RECORDED_WARNINGS && warned.insert(key)
    };

    if first_time && ENABLED.load(Ordering::Relaxed) {
        eprintln!("{}", format!("[tagsoup {component}] ⚠ {message}").yellow());
    }
}

/// Returns true if this exact warning has been recorded since the last
/// [`clear_warnings`].
#[must_use]
pub fn has_warned(component: &str, message: &str) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .is_some_and(|set| set.contains(&key(component, message)))
}

/// Number of distinct warnings currently recorded.
#[must_use]
pub fn warning_count() -> usize {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map_or(0, HashSet::len)
}

/// Turn terminal output on or off. Used by the CLI's `--quiet` flag.
pub fn set_warnings_enabled(enabled: bool) {
    ENABLED.store(enabled, Ordering::Relaxed);
}

/// Clear all recorded warnings (call before processing a new document)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}
