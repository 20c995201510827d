//! Helper functions for the HTML tokenizer.
//!
//! This module contains the utility functions the state handlers are built on:
//! - State transitions ("Switch to")
//! - Cursor and lookahead ("the next few characters are")
//! - Span scanning (next opener, end of component, comment closer)
//! - Issue recording for malformed constructs
//!
//! All scanning is done on bytes. Every delimiter the tokenizer looks for is
//! ASCII, and UTF-8 never uses ASCII bytes inside a multi-byte sequence, so a
//! byte index found this way is always a character boundary.

use tagstream_common::warning::warn_once;

use super::core::{Tokenizer, TokenizerState};
use super::error::{IssueKind, TokenizeIssue};

// =============================================================================
// State Transition Helpers
// =============================================================================

impl Tokenizer {
    /// "Switch to the X state"
    ///
    /// Transitions to a new state without consuming input.
    pub(super) const fn switch_to(&mut self, new_state: TokenizerState) {
        self.state = new_state;
    }
}

// =============================================================================
// Input/Character Helpers
// =============================================================================

impl Tokenizer {
    /// The source buffer, or the empty string before one is set.
    pub(super) fn input(&self) -> &str {
        self.source.as_deref().unwrap_or_default()
    }

    pub(super) fn at_end(&self) -> bool {
        self.current_index >= self.input().len()
    }

    /// The character under the cursor.
    pub(super) fn current_char(&self) -> Option<char> {
        self.input()[self.current_index..].chars().next()
    }

    /// Check if the characters starting at the cursor match `target` exactly.
    #[must_use]
    pub fn next_few_characters_are(&self, target: &str) -> bool {
        self.input()[self.current_index..].starts_with(target)
    }

    /// Whether the `<` under the cursor opens a component under the
    /// configured [`OpenerPolicy`](super::OpenerPolicy).
    ///
    /// Returns false if the cursor is not on a `<` at all.
    #[must_use]
    pub fn check_if_component(&self) -> bool {
        self.is_component_opener_at(self.current_index)
    }

    pub(super) fn is_component_opener_at(&self, index: usize) -> bool {
        let input = self.input();
        if input.as_bytes().get(index) != Some(&b'<') {
            return false;
        }
        let next = input[index + 1..].chars().next();
        self.config.opener_policy.accepts(next)
    }

    /// Advance the cursor to `end` and return a copy of what it passed over.
    pub(super) fn consume_to(&mut self, end: usize) -> String {
        let value = self.input()[self.current_index..end].to_owned();
        self.current_index = end;
        value
    }
}

// =============================================================================
// Span Scanning Helpers
// =============================================================================

impl Tokenizer {
    /// Byte index of the first component opener at or after `from`.
    pub(super) fn find_next_opener(&self, from: usize) -> Option<usize> {
        self.input()[from..]
            .match_indices('<')
            .map(|(offset, _)| from + offset)
            .find(|&index| self.is_component_opener_at(index))
    }

    /// Byte index of the first occurrence of `pattern` at or after `from`.
    pub(super) fn find_from(&self, from: usize, pattern: &str) -> Option<usize> {
        self.input()[from..]
            .find(pattern)
            .map(|offset| from + offset)
    }

    /// Byte index of the `>` that closes the component whose body starts at
    /// `from`, or `None` if the component runs to the end of the buffer.
    ///
    /// With `quoted_attributes` on, a `"` or `'` directly after `=` (whitespace
    /// allowed) opens a value that is skipped up to the matching quote.
    pub(super) fn find_component_end(&self, from: usize) -> Option<usize> {
        let bytes = self.input().as_bytes();
        if !self.config.quoted_attributes {
            return bytes[from..]
                .iter()
                .position(|&b| b == b'>')
                .map(|offset| from + offset);
        }

        let mut index = from;
        let mut after_equals = false;
        while index < bytes.len() {
            match bytes[index] {
                b'>' => return Some(index),
                b'=' => after_equals = true,
                quote @ (b'"' | b'\'') if after_equals => {
                    let offset = bytes[index + 1..].iter().position(|&b| b == quote)?;
                    // Land on the closing quote; the increment below steps past it.
                    index += offset + 1;
                    after_equals = false;
                }
                b if b.is_ascii_whitespace() => {}
                _ => after_equals = false,
            }
            index += 1;
        }
        None
    }
}

// =============================================================================
// Error Handling
// =============================================================================

impl Tokenizer {
    /// Record a malformed construct and, if configured, report it through
    /// the tagstream-common warning system. Never fatal: the caller still
    /// emits the partial span.
    pub(super) fn record_issue(&mut self, kind: IssueKind, position: usize) {
        if self.config.report_issues {
            warn_once("HTML Tokenizer", &format!("{kind} at byte {position}"));
        }
        self.issues.push(TokenizeIssue { kind, position });
    }
}
