use std::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// The lexical category of a token.
///
/// `Display` and serde use the lowercase names (`text`, `component`,
/// `comment`, `end`), which are part of the record shape hosts rely on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    /// A run of plain content.
    Text,
    /// A tag-like construct, `<...>`.
    Component,
    /// A comment construct, `<!-- ... -->`.
    Comment,
    /// The buffer is exhausted.
    End,
}

/// A lexical token.
///
/// Every variant except [`Token::EndOfInput`] owns the exact characters it
/// consumed, delimiters included, so concatenating the values of a full
/// token stream reproduces the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Plain content up to the next component opener or end of input.
    Text {
        /// The raw characters.
        value: String,
    },

    /// A tag such as `<b>`, `</b>`, `<br/>` or `<!DOCTYPE html>`.
    Component {
        /// The raw characters, `<` and `>` included.
        value: String,
    },

    /// A comment, `<!--` and `-->` included.
    Comment {
        /// The raw characters.
        value: String,
    },

    /// Sentinel returned once the buffer is exhausted, and on every call after.
    EndOfInput,
}

impl Token {
    /// Create a text token.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    /// Create a component token.
    #[must_use]
    pub fn component(value: impl Into<String>) -> Self {
        Self::Component {
            value: value.into(),
        }
    }

    /// Create a comment token.
    #[must_use]
    pub fn comment(value: impl Into<String>) -> Self {
        Self::Comment {
            value: value.into(),
        }
    }

    /// The token's category.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Text { .. } => TokenKind::Text,
            Self::Component { .. } => TokenKind::Component,
            Self::Comment { .. } => TokenKind::Comment,
            Self::EndOfInput => TokenKind::End,
        }
    }

    /// The raw characters, or `None` for [`Token::EndOfInput`].
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Text { value } | Self::Component { value } | Self::Comment { value } => {
                Some(value.as_str())
            }
            Self::EndOfInput => None,
        }
    }

    /// Consume the token and return its characters, if any.
    #[must_use]
    pub fn into_value(self) -> Option<String> {
        match self {
            Self::Text { value } | Self::Component { value } | Self::Comment { value } => {
                Some(value)
            }
            Self::EndOfInput => None,
        }
    }

    /// Number of source bytes this token covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value().map_or(0, str::len)
    }

    /// Returns true for [`Token::EndOfInput`]; no other token is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.is_end()
    }

    /// Returns true if this is the end-of-input sentinel.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

/// Writes the raw characters. [`Token::EndOfInput`] writes nothing, so a
/// token stream can be printed back out as the input it came from.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value().unwrap_or_default())
    }
}
