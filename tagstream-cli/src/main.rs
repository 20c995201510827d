//! tagstream CLI
//!
//! Dumps the token stream of an HTML file or string, for inspecting how the
//! tokenizer splits a document.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use tagstream_common::warning;
use tagstream_html::{
    OpenerPolicy, Token, TokenKind, TokenRecord, TokenizeIssue, Tokenizer, TokenizerConfig,
};

/// tagstream: print the lexical tokens of an HTML document
#[derive(Parser, Debug)]
#[command(name = "tagstream")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"EXAMPLES:
    # Dump the tokens of a file
    tagstream ./index.html

    # Tokenize inline HTML
    tagstream --html '<b>hi</b><!-- note -->'

    # Machine-readable output
    tagstream --format json ./index.html

    # Treat <?xml ...?> as a component
    tagstream --policy extended feed.xml
"#)]
struct Cli {
    /// Path to HTML file
    #[arg(value_name = "FILE", conflicts_with = "html")]
    path: Option<PathBuf>,

    /// Tokenize an HTML string directly instead of a file
    #[arg(long, value_name = "HTML")]
    html: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Which '<' characters open a component: strict, extended, or any
    #[arg(long, default_value = "strict")]
    policy: OpenerPolicy,

    /// Let '>' inside quoted attribute values close a component
    #[arg(long)]
    no_quoted_attributes: bool,

    /// Suppress warnings and the issue summary
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One colored line per token
    Text,
    /// A JSON array of { kind, value } records
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    warning::set_enabled(!cli.quiet);

    let html = match (cli.html, &cli.path) {
        (Some(html), _) => html,
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?,
        (None, None) => bail!("no input: pass a FILE or --html '<html>...</html>'"),
    };

    let config = TokenizerConfig::default()
        .with_opener_policy(cli.policy)
        .with_quoted_attributes(!cli.no_quoted_attributes)
        .with_report_issues(!cli.quiet);
    let mut tokenizer = Tokenizer::with_config(config);
    tokenizer.set_source(html);

    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next()?;
        let done = token.is_end();
        tokens.push(token);
        if done {
            break;
        }
    }

    let mut out = io::stdout().lock();
    match cli.format {
        Format::Text => print_text(&mut out, &tokens)?,
        Format::Json => print_json(&mut out, &tokens)?,
    }

    if !cli.quiet {
        print_issue_summary(tokenizer.issues());
    }
    Ok(())
}

fn print_text(out: &mut impl Write, tokens: &[Token]) -> Result<()> {
    for token in tokens {
        let label = format!("{:>9}", token.kind());
        let label = match token.kind() {
            TokenKind::Text => label,
            TokenKind::Component => label.cyan().to_string(),
            TokenKind::Comment => label.green().to_string(),
            TokenKind::End => label.bright_black().to_string(),
        };
        match token.value() {
            Some(value) => writeln!(out, "{label} {value:?}")?,
            None => writeln!(out, "{label}")?,
        }
    }
    Ok(())
}

fn print_json(out: &mut impl Write, tokens: &[Token]) -> Result<()> {
    let records: Vec<TokenRecord> = tokens.iter().map(TokenRecord::from).collect();
    serde_json::to_writer_pretty(&mut *out, &records).context("failed to write JSON")?;
    writeln!(out)?;
    Ok(())
}

fn print_issue_summary(issues: &[TokenizeIssue]) {
    if issues.is_empty() {
        return;
    }
    let heading = summary_heading(issues.len(), warning::warning_count());
    eprintln!("\n{}", heading.yellow());
    for issue in issues {
        eprintln!("  {} at byte {}", issue.kind, issue.position);
    }
}

/// Heading for the issue summary. `warned` is the number of distinct
/// warnings already written to stderr while tokenizing.
fn summary_heading(issues: usize, warned: usize) -> String {
    match warned {
        0 => format!("{issues} malformed construct(s):"),
        _ => format!("{issues} malformed construct(s), {warned} warning(s) printed above:"),
    }
}
