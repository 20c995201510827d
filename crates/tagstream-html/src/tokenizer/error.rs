use strum_macros::Display;
use thiserror::Error;

/// Errors returned by [`Tokenizer::next`](super::Tokenizer::next).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenizerError {
    /// `next` was called before any source buffer was set.
    #[error("no source buffer set: call set_source before pulling tokens")]
    SourceNotSet,
}

/// The kind of malformed construct the tokenizer recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum IssueKind {
    /// A `<` that opened a component with no closing `>`.
    #[strum(serialize = "unterminated component")]
    UnterminatedComponent,
    /// A `<!--` with no closing `-->`.
    #[strum(serialize = "unterminated comment")]
    UnterminatedComment,
}

/// A malformed construct encountered while scanning.
///
/// Malformed input is never an error: the partial span is still emitted as a
/// token. The issue is recorded so callers can inspect it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeIssue {
    /// What was malformed.
    pub kind: IssueKind,
    /// Byte offset of the construct's opening `<`.
    pub position: usize,
}
