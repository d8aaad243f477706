//! Hierarchical collection of errors and warnings
//! produced while reading, writing, or validating DICOS content.
//!
//! An [`ErrorLog`] records each diagnostic together with the path
//! of sequences being processed when it was added,
//! so that every entry can be traced back to its place in the attribute tree.
//!
//! A process-wide redirect hook may be installed with
//! [`set_error_log_redirect`] to receive every entry as it is added,
//! unless the receiving log opted out via [`ErrorLog::ignore_redirect`].

use crate::header::{Tag, VR};
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

/// The function type of an error log redirect hook.
pub type ErrorLogRedirect = dyn Fn(&LogItem) + Send + Sync;

static REDIRECT: Lazy<RwLock<Option<Arc<ErrorLogRedirect>>>> = Lazy::new(|| RwLock::new(None));

/// Install a process-wide hook receiving every log item
/// added to any [`ErrorLog`] which has not opted out.
///
/// Replaces any previously installed hook.
pub fn set_error_log_redirect<F>(hook: F)
where
    F: Fn(&LogItem) + Send + Sync + 'static,
{
    let mut slot = REDIRECT.write().unwrap_or_else(PoisonError::into_inner);
    *slot = Some(Arc::new(hook));
}

/// Remove the process-wide redirect hook, if any.
pub fn clear_error_log_redirect() {
    let mut slot = REDIRECT.write().unwrap_or_else(PoisonError::into_inner);
    *slot = None;
}

fn current_redirect() -> Option<Arc<ErrorLogRedirect>> {
    REDIRECT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// The severity of a log item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogKind {
    /// An error: the affected attribute or requirement could not be honored.
    Error,
    /// A warning: content was kept but could not be fully interpreted.
    Warning,
}

impl fmt::Display for LogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogKind::Error => f.write_str("Error"),
            LogKind::Warning => f.write_str("Warning"),
        }
    }
}

/// A single entry of an error log.
#[derive(Debug, Clone, PartialEq)]
pub struct LogItem {
    kind: LogKind,
    message: String,
    path: String,
}

impl LogItem {
    /// The severity of this item.
    pub fn kind(&self) -> LogKind {
        self.kind
    }

    /// The diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The hierarchy path of the item,
    /// e.g. `SQ(1234,5678) -> SQ(4321,8765) -> SH(8523,9632)`.
    /// Empty if the item was added at the top level without a tag.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl fmt::Display for LogItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)?;
        if !self.path.is_empty() {
            write!(f, " [Path: {}]", self.path)?;
        }
        Ok(())
    }
}

/// An ordered collector of errors and warnings
/// with a stack of the sequences currently being processed.
///
/// A log is meant to be created per read, write or validation operation,
/// and cleared with [`free_memory`](ErrorLog::free_memory) before reuse.
#[derive(Debug, Clone, Default)]
pub struct ErrorLog {
    items: Vec<LogItem>,
    sequences: Vec<Tag>,
    ignore_redirect: bool,
}

impl ErrorLog {
    /// Create an empty error log.
    pub fn new() -> Self {
        ErrorLog::default()
    }

    /// Opt this log in or out of the process-wide redirect hook.
    pub fn ignore_redirect(&mut self, ignore: bool) {
        self.ignore_redirect = ignore;
    }

    /// Enter a sequence: subsequent items are reported beneath it.
    pub fn push_sequence(&mut self, tag: Tag) {
        self.sequences.push(tag);
    }

    /// Leave the innermost sequence,
    /// returning the path as it was before leaving it.
    pub fn pop_sequence(&mut self) -> String {
        let path = self.sequence_path();
        self.sequences.pop();
        path
    }

    /// The current depth of the sequence stack.
    pub fn depth(&self) -> usize {
        self.sequences.len()
    }

    /// The path of the sequences currently being processed.
    pub fn sequence_path(&self) -> String {
        self.sequences
            .iter()
            .map(|tag| format!("{}{}", VR::SQ, tag))
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    fn path_to(&self, target: Option<(VR, Tag)>) -> String {
        let mut path = self.sequence_path();
        if let Some((vr, tag)) = target {
            if !path.is_empty() {
                path.push_str(" -> ");
            }
            path.push_str(&format!("{}{}", vr, tag));
        }
        path
    }

    fn add(&mut self, kind: LogKind, target: Option<(VR, Tag)>, message: String) {
        let item = LogItem {
            kind,
            message,
            path: self.path_to(target),
        };
        let hook = if self.ignore_redirect {
            None
        } else {
            current_redirect()
        };
        match hook {
            Some(hook) => hook(&item),
            None => tracing::debug!("{}", item),
        }
        self.items.push(item);
    }

    /// Add an error at the current sequence path.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.add(LogKind::Error, None, message.into());
    }

    /// Add a warning at the current sequence path.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.add(LogKind::Warning, None, message.into());
    }

    /// Add an error about the attribute with the given VR and tag.
    pub fn add_error_at(&mut self, vr: VR, tag: Tag, message: impl Into<String>) {
        self.add(LogKind::Error, Some((vr, tag)), message.into());
    }

    /// Add a warning about the attribute with the given VR and tag.
    pub fn add_warning_at(&mut self, vr: VR, tag: Tag, message: impl Into<String>) {
        self.add(LogKind::Warning, Some((vr, tag)), message.into());
    }

    /// All items in the order they were added.
    pub fn items(&self) -> &[LogItem] {
        &self.items
    }

    /// Iterate over the errors.
    pub fn errors(&self) -> impl Iterator<Item = &LogItem> + '_ {
        self.items.iter().filter(|i| i.kind == LogKind::Error)
    }

    /// Iterate over the warnings.
    pub fn warnings(&self) -> impl Iterator<Item = &LogItem> + '_ {
        self.items.iter().filter(|i| i.kind == LogKind::Warning)
    }

    /// Whether any error was recorded.
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Whether any warning was recorded.
    pub fn has_warnings(&self) -> bool {
        self.warnings().next().is_some()
    }

    /// The number of errors recorded.
    pub fn num_errors(&self) -> usize {
        self.errors().count()
    }

    /// The number of warnings recorded.
    pub fn num_warnings(&self) -> usize {
        self.warnings().count()
    }

    /// Whether the log holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move all items of `other` to the end of this log.
    ///
    /// Items are not sent to the redirect hook again.
    pub fn append(&mut self, other: &mut ErrorLog) {
        self.items.append(&mut other.items);
    }

    /// Render the log: all errors first, then all warnings,
    /// one item per line.
    pub fn error_log(&self) -> String {
        self.to_string()
    }

    /// Discard all items and the sequence stack.
    pub fn free_memory(&mut self) {
        self.items = Vec::new();
        self.sequences = Vec::new();
    }
}

impl fmt::Display for ErrorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.errors().chain(self.warnings()) {
            writeln!(f, "{}", item)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    // tests touching the global hook must not interleave
    static HOOK_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn nested_paths() {
        let mut log = ErrorLog::new();
        log.ignore_redirect(true);
        log.push_sequence(Tag(0x1234, 0x5678));
        log.push_sequence(Tag(0x4321, 0x8765));
        log.add_error_at(VR::SH, Tag(0x8523, 0x9632), "value too long");

        assert_eq!(
            log.items()[0].path(),
            "SQ(1234,5678) -> SQ(4321,8765) -> SH(8523,9632)"
        );
        assert_eq!(log.pop_sequence(), "SQ(1234,5678) -> SQ(4321,8765)");
        assert_eq!(log.pop_sequence(), "SQ(1234,5678)");
        assert_eq!(log.depth(), 0);
    }

    #[test]
    fn errors_render_before_warnings() {
        let mut log = ErrorLog::new();
        log.ignore_redirect(true);
        log.add_warning_at(VR::LO, Tag(0x0009, 0x1001), "unknown tag");
        log.add_error("truncated stream");

        assert_eq!(
            log.error_log(),
            "Error: truncated stream\nWarning: unknown tag [Path: LO(0009,1001)]\n"
        );
        assert_eq!(log.num_errors(), 1);
        assert_eq!(log.num_warnings(), 1);

        log.free_memory();
        assert!(log.is_empty());
        assert!(!log.has_errors());
    }

    #[test]
    fn redirect_hook_and_opt_out() {
        let _guard = HOOK_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        static SEEN: AtomicUsize = AtomicUsize::new(0);
        set_error_log_redirect(|item| {
            if item.message() == "redirected" {
                SEEN.fetch_add(1, Ordering::SeqCst);
            }
        });

        let mut log = ErrorLog::new();
        log.add_error("redirected");
        let mut quiet = ErrorLog::new();
        quiet.ignore_redirect(true);
        quiet.add_error("redirected");
        clear_error_log_redirect();
        log.add_error("redirected");

        assert_eq!(SEEN.load(Ordering::SeqCst), 1);
        // redirected items are still recorded
        assert_eq!(log.num_errors(), 2);
        assert_eq!(quiet.num_errors(), 1);
    }

    #[test]
    fn append_moves_items() {
        let mut a = ErrorLog::new();
        let mut b = ErrorLog::new();
        a.ignore_redirect(true);
        b.ignore_redirect(true);
        a.add_error("first");
        b.add_warning("second");
        a.append(&mut b);
        assert_eq!(a.items().len(), 2);
        assert!(b.is_empty());
    }
}
