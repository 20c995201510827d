use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Decides whether a `<` opens a component or is literal content.
///
/// The default follows the branches of
/// [§ 13.2.5.6 Tag open state](https://html.spec.whatwg.org/multipage/parsing.html#tag-open-state)
/// that start markup: "U+0021 EXCLAMATION MARK (!)", "U+002F SOLIDUS (/)" and
/// "ASCII alpha". Everything the tag open state treats as "anything else"
/// (whitespace, digits, a second `<`, end of input) stays in the text run.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum OpenerPolicy {
    /// `<` followed by an ASCII letter, `/`, or `!`.
    #[default]
    Strict,
    /// [`OpenerPolicy::Strict`] plus `?`, so `<?xml ...?>` is a component.
    Extended,
    /// Every `<` opens a component.
    #[strum(serialize = "any")]
    #[serde(rename = "any")]
    AnyLessThan,
}

impl OpenerPolicy {
    /// Whether a `<` followed by `next` opens a component.
    ///
    /// `next` is `None` when the `<` is the last character of the buffer.
    #[must_use]
    pub const fn accepts(self, next: Option<char>) -> bool {
        match self {
            Self::Strict => matches!(next, Some(c) if Self::is_markup_start(c)),
            Self::Extended => matches!(next, Some(c) if Self::is_markup_start(c) || c == '?'),
            Self::AnyLessThan => true,
        }
    }

    const fn is_markup_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '/' || c == '!'
    }
}

/// Options for a [`Tokenizer`](super::Tokenizer).
///
/// Build with [`TokenizerConfig::default`] and the `with_*` methods. Missing
/// fields take their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Which `<` characters open a component.
    pub opener_policy: OpenerPolicy,
    /// If true, a `>` inside a quoted attribute value does not close the
    /// component. A quote only counts when it directly follows `=`
    /// (whitespace allowed in between).
    pub quoted_attributes: bool,
    /// If true, malformed constructs are also printed through the shared
    /// warning channel. They are recorded on the tokenizer either way.
    pub report_issues: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            opener_policy: OpenerPolicy::default(),
            quoted_attributes: true,
            report_issues: true,
        }
    }
}

impl TokenizerConfig {
    /// Use the given component-opener policy.
    #[must_use]
    pub const fn with_opener_policy(mut self, policy: OpenerPolicy) -> Self {
        self.opener_policy = policy;
        self
    }

    /// Enable or disable quote-aware scanning inside components.
    #[must_use]
    pub const fn with_quoted_attributes(mut self, enabled: bool) -> Self {
        self.quoted_attributes = enabled;
        self
    }

    /// Enable or disable printing malformed constructs as warnings.
    #[must_use]
    pub const fn with_report_issues(mut self, enabled: bool) -> Self {
        self.report_issues = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_strict_policy() {
        let policy = OpenerPolicy::Strict;
        assert!(policy.accepts(Some('a')));
        assert!(policy.accepts(Some('Z')));
        assert!(policy.accepts(Some('/')));
        assert!(policy.accepts(Some('!')));
        assert!(!policy.accepts(Some(' ')));
        assert!(!policy.accepts(Some('3')));
        assert!(!policy.accepts(Some('<')));
        assert!(!policy.accepts(Some('?')));
        assert!(!policy.accepts(Some('é')));
        assert!(!policy.accepts(None));
    }

    #[test]
    fn test_extended_and_any_policies() {
        assert!(OpenerPolicy::Extended.accepts(Some('?')));
        assert!(OpenerPolicy::Extended.accepts(Some('p')));
        assert!(!OpenerPolicy::Extended.accepts(Some(' ')));

        assert!(OpenerPolicy::AnyLessThan.accepts(Some(' ')));
        assert!(OpenerPolicy::AnyLessThan.accepts(None));
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(OpenerPolicy::from_str("strict"), Ok(OpenerPolicy::Strict));
        assert_eq!(OpenerPolicy::from_str("Extended"), Ok(OpenerPolicy::Extended));
        assert_eq!(OpenerPolicy::from_str("any"), Ok(OpenerPolicy::AnyLessThan));
        assert_eq!(OpenerPolicy::AnyLessThan.to_string(), "any");
        assert!(OpenerPolicy::from_str("loose").is_err());
    }

    #[test]
    fn test_config_defaults_from_partial_json() {
        let config: TokenizerConfig =
            serde_json::from_str(r#"{ "opener_policy": "any" }"#).expect("valid config");
        assert_eq!(config.opener_policy, OpenerPolicy::AnyLessThan);
        assert!(config.quoted_attributes);
        assert!(config.report_issues);
    }

    #[test]
    fn test_builder() {
        let config = TokenizerConfig::default()
            .with_opener_policy(OpenerPolicy::Extended)
            .with_quoted_attributes(false)
            .with_report_issues(false);
        assert_eq!(config.opener_policy, OpenerPolicy::Extended);
        assert!(!config.quoted_attributes);
        assert!(!config.report_issues);
    }
}
