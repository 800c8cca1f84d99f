//! Output formatting for CLI commands.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::analysis::token::Token;
use crate::cli::args::{OutputFormat, PinyinArgs};
use crate::error::Result;

/// One token of an analysis, with its absolute position resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzedToken {
    pub text: String,
    pub position: usize,
    pub position_increment: usize,
    pub start_offset: usize,
    pub end_offset: usize,
    #[serde(rename = "type")]
    pub token_type: String,
}

impl AnalyzedToken {
    /// Capture a token at the given absolute position.
    pub fn from_token(token: &Token, position: usize) -> Self {
        AnalyzedToken {
            text: token.text.clone(),
            position,
            position_increment: token.position_increment,
            start_offset: token.start_offset,
            end_offset: token.end_offset,
            token_type: token.type_tag().to_string(),
        }
    }
}

/// Result structure for the analyze command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub text: String,
    pub analyzer: String,
    pub tokens: Vec<AnalyzedToken>,
}

/// Result structure for the expand command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExpansionResult {
    pub text: String,
    pub mode: String,
    pub variants: Vec<String>,
}

/// Results that have a human-readable rendering.
pub trait HumanOutput {
    /// Render the result for a terminal.
    fn render_human(&self) -> String;
}

impl HumanOutput for AnalysisResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Tokens for \"{}\" ({}):", self.text, self.analyzer);
        if self.tokens.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        for token in &self.tokens {
            let _ = writeln!(
                out,
                "  {:>3}  {:<24} [{}..{}]  +{}  {}",
                token.position,
                token.text,
                token.start_offset,
                token.end_offset,
                token.position_increment,
                token.token_type
            );
        }
        out
    }
}

impl HumanOutput for ExpansionResult {
    fn render_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Expansion of \"{}\" (mode: {}, {} variants):",
            self.text,
            self.mode,
            self.variants.len()
        );
        for variant in &self.variants {
            let _ = writeln!(out, "  {variant}");
        }
        out
    }
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &PinyinArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(result: &T, _args: &PinyinArgs) -> Result<()> {
    print!("{}", result.render_human());
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &PinyinArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}
