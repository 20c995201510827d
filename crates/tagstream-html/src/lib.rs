//! Streaming HTML tokenizer for tagstream.
//!
//! # Scope
//!
//! This crate implements a strictly lexical pass over HTML source:
//! - **Tokenizer** - a four-state machine (initial, content, component,
//!   comment) pulled one token at a time with [`Tokenizer::next`]
//!   - Text runs, tag-like components (`<...>`), and comments (`<!-- ... -->`)
//!   - Lossless: the token values concatenate back to the input
//!   - Unterminated tags and comments are emitted as partial tokens
//!
//! - **Token records** - the stable `{ kind, value }` shape handed to hosts
//!
//! # Not Implemented
//!
//! - Tree construction or DOM building
//! - Character reference decoding
//! - Encoding detection

/// Host-visible token records.
pub mod record;
/// HTML tokenizer for converting input into token spans.
pub mod tokenizer;

pub use record::{RecordError, TokenRecord};
pub use tokenizer::{
    IssueKind, OpenerPolicy, Token, TokenKind, TokenizeIssue, Tokenizer, TokenizerConfig,
    TokenizerError, TokenizerState, Tokens, tokenize,
};
