//! The `{ kind, value }` record shape exposed to hosts.
//!
//! A host adapter (a CLI, a language binding, a test harness) converts each
//! [`Token`] into a [`TokenRecord`] and hands that out. The field names and
//! the lowercase kind names are the stable contract; end of input is a record
//! with kind `end` and no value. Going back from a record to a token is
//! fallible: a record that breaks that contract is a [`RecordError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tokenizer::{Token, TokenKind};

/// A token as seen from outside the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    /// The token's category.
    pub kind: TokenKind,
    /// The raw characters, `None` for end of input.
    pub value: Option<String>,
}

impl From<Token> for TokenRecord {
    fn from(token: Token) -> Self {
        Self {
            kind: token.kind(),
            value: token.into_value(),
        }
    }
}

impl From<&Token> for TokenRecord {
    fn from(token: &Token) -> Self {
        Self {
            kind: token.kind(),
            value: token.value().map(str::to_owned),
        }
    }
}

/// Why a [`TokenRecord`] cannot be turned back into a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RecordError {
    /// A `text`, `component` or `comment` record with `value: null`.
    #[error("{0} record has no value")]
    MissingValue(TokenKind),
    /// A `text`, `component` or `comment` record with an empty value. The
    /// tokenizer never emits an empty token.
    #[error("{0} record has an empty value")]
    EmptyValue(TokenKind),
    /// An `end` record that carries a value.
    #[error("end record must not carry a value")]
    UnexpectedValue,
}

impl TryFrom<TokenRecord> for Token {
    type Error = RecordError;

    fn try_from(record: TokenRecord) -> Result<Self, Self::Error> {
        let value = match (record.kind, record.value) {
            (TokenKind::End, None) => return Ok(Self::EndOfInput),
            (TokenKind::End, Some(_)) => return Err(RecordError::UnexpectedValue),
            (kind, None) => return Err(RecordError::MissingValue(kind)),
            (kind, Some(value)) if value.is_empty() => {
                return Err(RecordError::EmptyValue(kind));
            }
            (_, Some(value)) => value,
        };
        Ok(match record.kind {
            TokenKind::Text => Self::Text { value },
            TokenKind::Component => Self::Component { value },
            TokenKind::Comment => Self::Comment { value },
            TokenKind::End => Self::EndOfInput,
        })
    }
}
