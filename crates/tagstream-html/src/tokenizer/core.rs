use std::iter::FusedIterator;

use strum_macros::Display;
use tagstream_common::warning::clear_warnings;

use super::config::TokenizerConfig;
use super::error::{IssueKind, TokenizeIssue, TokenizerError};
use super::token::Token;

/// Opening delimiter of a comment.
pub(super) const COMMENT_OPEN: &str = "<!--";
/// Closing delimiter of a comment.
pub(super) const COMMENT_CLOSE: &str = "-->";

/// The tokenizer state machine.
///
/// Only [`TokenizerState::Content`], [`TokenizerState::Component`] and
/// [`TokenizerState::Comment`] ever produce tokens; `Initial` just routes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum TokenizerState {
    /// The buffer was just set and nothing has been scanned.
    #[default]
    Initial,
    /// Scanning a text run up to the next component opener.
    Content,
    /// The cursor sits on a `<` that opens a component.
    Component,
    /// The cursor sits on a `<!--`.
    Comment,
}

/// Outcome of running the handler for the current state once.
#[derive(Debug)]
pub(super) enum Step {
    /// A token is ready; the handler has already moved the cursor past it.
    Emit(Token),
    /// Move to another state without consuming input.
    Switch(TokenizerState),
}

/// Pull-based HTML tokenizer.
///
/// Set a buffer with [`Tokenizer::set_source`], then call [`Tokenizer::next`]
/// until it returns [`Token::EndOfInput`]. Every token value is an exact copy
/// of the characters consumed, so the stream is lossless.
///
/// ```ignore
/// let mut tokenizer = Tokenizer::new();
/// tokenizer.set_source("<b>hi</b>");
/// assert_eq!(tokenizer.next()?, Token::component("<b>"));
/// ```
#[derive(Debug, Default)]
pub struct Tokenizer {
    pub(super) source: Option<String>,
    /// Byte offset into `source`, always on a character boundary.
    pub(super) current_index: usize,
    pub(super) state: TokenizerState,
    pub(super) config: TokenizerConfig,
    pub(super) issues: Vec<TokenizeIssue>,
}

impl Tokenizer {
    /// Create a tokenizer with the default configuration and no source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with the given configuration and no source.
    #[must_use]
    pub fn with_config(config: TokenizerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replace the source buffer and start a fresh pass.
    ///
    /// The cursor goes back to `(0, Initial)` and recorded issues are
    /// cleared, wherever the previous pass had got to. With `report_issues`
    /// on, the process-wide warning dedupe set is cleared too, so the new
    /// document's malformed constructs are printed even if an earlier
    /// document had the same ones.
    pub fn set_source(&mut self, source: impl Into<String>) {
        self.source = Some(source.into());
        self.current_index = 0;
        self.state = TokenizerState::Initial;
        self.issues.clear();
        if self.config.report_issues {
            clear_warnings();
        }
    }

    /// Scan and return the next token.
    ///
    /// Once the buffer is exhausted this returns [`Token::EndOfInput`] on
    /// every call without moving the cursor.
    ///
    /// # Errors
    ///
    /// Returns [`TokenizerError::SourceNotSet`] if [`Tokenizer::set_source`]
    /// has never been called.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Token, TokenizerError> {
        if self.source.is_none() {
            return Err(TokenizerError::SourceNotSet);
        }

        // Each state switches at most once before some handler emits:
        // Initial -> Content -> Component -> Comment is the longest chain.
        loop {
            match self.step() {
                Step::Emit(token) => return Ok(token),
                Step::Switch(state) => self.switch_to(state),
            }
        }
    }

    /// Iterate over the remaining tokens, stopping before
    /// [`Token::EndOfInput`]. Yields nothing if no source is set.
    pub const fn tokens(&mut self) -> Tokens<'_> {
        Tokens { tokenizer: self }
    }

    /// Byte offset of the cursor.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.current_index
    }

    /// The state the next call to [`Tokenizer::next`] starts in.
    #[must_use]
    pub const fn state(&self) -> TokenizerState {
        self.state
    }

    /// The current source buffer, if one is set.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// The configuration this tokenizer scans with.
    #[must_use]
    pub const fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Malformed constructs seen since the last [`Tokenizer::set_source`].
    #[must_use]
    pub fn issues(&self) -> &[TokenizeIssue] {
        &self.issues
    }

    /// Returns true if a source is set and the cursor has reached its end.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.source
            .as_ref()
            .is_some_and(|source| self.current_index >= source.len())
    }

    fn step(&mut self) -> Step {
        match self.state {
            TokenizerState::Initial => self.handle_initial_state(),
            TokenizerState::Content => self.handle_content_state(),
            TokenizerState::Component => self.handle_component_state(),
            TokenizerState::Comment => self.handle_comment_state(),
        }
    }

    /// Route to content or component depending on the first character.
    fn handle_initial_state(&self) -> Step {
        if self.at_end() {
            return Step::Emit(Token::EndOfInput);
        }
        if self.check_if_component() {
            Step::Switch(TokenizerState::Component)
        } else {
            Step::Switch(TokenizerState::Content)
        }
    }

    /// Consume text up to the next component opener or the end of input.
    ///
    /// The character under the cursor is always consumed, so a stray `<`
    /// that did not qualify as an opener starts the text run.
    fn handle_content_state(&mut self) -> Step {
        if self.at_end() {
            return Step::Emit(Token::EndOfInput);
        }
        if self.check_if_component() {
            return Step::Switch(TokenizerState::Component);
        }

        let start = self.current_index;
        let first_len = self.current_char().map_or(1, char::len_utf8);
        let end = self
            .find_next_opener(start + first_len)
            .unwrap_or_else(|| self.input().len());
        Step::Emit(Token::text(self.consume_to(end)))
    }

    /// Emit a `<...>` component, or hand off to the comment state on `<!--`.
    fn handle_component_state(&mut self) -> Step {
        if self.at_end() {
            return Step::Emit(Token::EndOfInput);
        }
        if self.next_few_characters_are(COMMENT_OPEN) {
            return Step::Switch(TokenizerState::Comment);
        }

        let start = self.current_index;
        let end = match self.find_component_end(start + 1) {
            Some(close) => close + 1,
            None => {
                self.record_issue(IssueKind::UnterminatedComponent, start);
                self.input().len()
            }
        };
        let value = self.consume_to(end);
        self.switch_to(TokenizerState::Content);
        Step::Emit(Token::component(value))
    }

    /// Emit a comment up to and including the first `-->` after the opener.
    fn handle_comment_state(&mut self) -> Step {
        if self.at_end() {
            return Step::Emit(Token::EndOfInput);
        }

        let start = self.current_index;
        let body = start + COMMENT_OPEN.len();
        let end = match self.find_from(body, COMMENT_CLOSE) {
            Some(close) => close + COMMENT_CLOSE.len(),
            None => {
                self.record_issue(IssueKind::UnterminatedComment, start);
                self.input().len()
            }
        };
        let value = self.consume_to(end);
        self.switch_to(TokenizerState::Content);
        Step::Emit(Token::comment(value))
    }
}

/// Iterator returned by [`Tokenizer::tokens`].
#[derive(Debug)]
pub struct Tokens<'a> {
    tokenizer: &'a mut Tokenizer,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.tokenizer.next() {
            Ok(Token::EndOfInput) | Err(_) => None,
            Ok(token) => Some(token),
        }
    }
}

impl FusedIterator for Tokens<'_> {}

/// Tokenize `source` in one go with the default configuration.
///
/// The returned stream always ends with [`Token::EndOfInput`].
#[must_use]
pub fn tokenize(source: impl Into<String>) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new();
    tokenizer.set_source(source);
    let mut tokens: Vec<Token> = tokenizer.tokens().collect();
    tokens.push(Token::EndOfInput);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiet() -> Tokenizer {
        Tokenizer::with_config(TokenizerConfig::default().with_report_issues(false))
    }

    #[test]
    fn test_initial_state_routes_without_consuming() {
        let mut tokenizer = quiet();
        tokenizer.set_source("<p>");
        assert_eq!(tokenizer.state(), TokenizerState::Initial);
        assert!(matches!(
            tokenizer.step(),
            Step::Switch(TokenizerState::Component)
        ));
        assert_eq!(tokenizer.position(), 0);

        tokenizer.set_source("p");
        assert!(matches!(
            tokenizer.step(),
            Step::Switch(TokenizerState::Content)
        ));
    }

    #[test]
    fn test_content_state_defers_to_component() {
        let mut tokenizer = quiet();
        tokenizer.set_source("<a>");
        tokenizer.switch_to(TokenizerState::Content);
        assert!(matches!(
            tokenizer.step(),
            Step::Switch(TokenizerState::Component)
        ));
    }

    #[test]
    fn test_component_state_reroutes_comment() {
        let mut tokenizer = quiet();
        tokenizer.set_source("<!-- x -->");
        tokenizer.switch_to(TokenizerState::Component);
        assert!(matches!(
            tokenizer.step(),
            Step::Switch(TokenizerState::Comment)
        ));
    }

    #[test]
    fn test_state_after_each_token() {
        let mut tokenizer = quiet();
        tokenizer.set_source("<b>hi<!--c-->");
        assert_eq!(tokenizer.next(), Ok(Token::component("<b>")));
        assert_eq!(tokenizer.state(), TokenizerState::Content);
        assert_eq!(tokenizer.position(), 3);
        assert_eq!(tokenizer.next(), Ok(Token::text("hi")));
        assert_eq!(tokenizer.state(), TokenizerState::Content);
        assert_eq!(tokenizer.next(), Ok(Token::comment("<!--c-->")));
        assert_eq!(tokenizer.state(), TokenizerState::Content);
        assert!(tokenizer.is_exhausted());
        assert_eq!(tokenizer.next(), Ok(Token::EndOfInput));
    }

    #[test]
    fn test_comment_closer_must_follow_opener() {
        // "<!-->" overlaps opener and closer; the closer has to come after "<!--".
        let mut tokenizer = quiet();
        tokenizer.set_source("<!-->x");
        assert_eq!(tokenizer.next(), Ok(Token::comment("<!-->x")));
        assert_eq!(tokenizer.issues().len(), 1);
        assert_eq!(tokenizer.issues()[0].kind, IssueKind::UnterminatedComment);

        tokenizer.set_source("<!---->x");
        assert_eq!(tokenizer.next(), Ok(Token::comment("<!---->")));
        assert_eq!(tokenizer.next(), Ok(Token::text("x")));
        assert!(tokenizer.issues().is_empty());
    }

    #[test]
    fn test_new_document_reports_warnings_again() {
        use tagstream_common::warning::warning_count;

        // The only test in this binary that reports through the global
        // warning set; every other one runs quiet.
        let mut tokenizer = Tokenizer::new();
        tokenizer.set_source("<!--one");
        assert_eq!(tokenizer.next(), Ok(Token::comment("<!--one")));
        assert_eq!(warning_count(), 1);

        tokenizer.set_source("<!--two, a new document");
        assert_eq!(warning_count(), 0);
        assert_eq!(
            tokenizer.next(),
            Ok(Token::comment("<!--two, a new document"))
        );
        assert_eq!(tokenizer.issues().len(), 1);
        assert_eq!(warning_count(), 1);
    }

    #[test]
    fn test_tokenizer_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<Tokenizer>();
    }
}
