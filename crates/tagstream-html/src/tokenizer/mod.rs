//! HTML tokenizer module.
//!
//! A pull-based state machine that splits a source buffer into text,
//! component, and comment spans. Each call to [`Tokenizer::next`] runs the
//! machine until exactly one token is ready.

/// Tokenizer options and the component-opener policy.
pub mod config;
/// HTML tokenizer state machine implementation.
pub mod core;
/// Usage errors and recorded malformed-construct issues.
pub mod error;
/// Cursor and lookahead helpers used by the state handlers.
pub mod helpers;
/// Token types produced by the tokenizer.
pub mod token;

pub use config::{OpenerPolicy, TokenizerConfig};
pub use self::core::{Tokenizer, TokenizerState, Tokens, tokenize};
pub use error::{IssueKind, TokenizeIssue, TokenizerError};
pub use token::{Token, TokenKind};
