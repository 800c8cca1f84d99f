//! Command implementations for the pinyin-transform CLI.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pinyin::PinyinAnalyzer;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::analysis::tokenizer::whole::WholeTokenizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::pinyin::dictionary::MapReadingDictionary;
use crate::pinyin::expander::PhoneticExpander;

/// Execute a CLI command.
pub fn execute_command(args: PinyinArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_text(analyze_args, &args),
        Command::Expand(expand_args) => expand_text(expand_args, &args),
    }
}

/// Run text through a pinyin analyzer and print every emitted token.
fn analyze_text(args: &AnalyzeArgs, cli_args: &PinyinArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.expansion.dictionary)?;
    let config = args.expansion.filter_config()?;

    let tokenizer: Arc<dyn Tokenizer> = match args.tokenizer {
        TokenizerArg::Whole => Arc::new(WholeTokenizer::new()),
        TokenizerArg::Whitespace => Arc::new(WhitespaceTokenizer::new()),
    };
    let analyzer = PinyinAnalyzer::with_tokenizer(tokenizer, args.lowercase, dictionary, config)?;

    let start_time = Instant::now();
    let tokens = collect_tokens(&analyzer, &args.text)?;
    log::info!(
        "analyzed {} bytes into {} tokens in {:?}",
        args.text.len(),
        tokens.len(),
        start_time.elapsed()
    );

    output_result(
        &AnalysisResult {
            text: args.text.clone(),
            analyzer: format!("pinyin_{}", analyzer.inner().tokenizer().name()),
            tokens,
        },
        cli_args,
    )
}

/// Print the expansion set of one text.
fn expand_text(args: &ExpandArgs, cli_args: &PinyinArgs) -> Result<()> {
    let dictionary = load_dictionary(&args.expansion.dictionary)?;
    let config = args.expansion.filter_config()?;
    let expander = PhoneticExpander::new(dictionary, &config)?;

    let variants = expander.expand(&args.text)?.to_vec();

    output_result(
        &ExpansionResult {
            text: args.text.clone(),
            mode: config.mode.to_string(),
            variants,
        },
        cli_args,
    )
}

/// Load a reading dictionary from disk.
fn load_dictionary(path: &Path) -> Result<Arc<MapReadingDictionary>> {
    let dictionary = MapReadingDictionary::load_from_file(path)?;
    log::info!(
        "loaded {} dictionary entries from {}",
        dictionary.len(),
        path.display()
    );
    Ok(Arc::new(dictionary))
}

/// Analyze `text` and resolve each token's absolute position.
///
/// Positions start at 0 for the first token that advances the stream; tokens
/// with a zero increment share the position of the token before them.
pub fn collect_tokens(analyzer: &dyn Analyzer, text: &str) -> Result<Vec<AnalyzedToken>> {
    let mut position: Option<usize> = None;
    let tokens = analyzer
        .analyze(text)?
        .map(|token| {
            let current = match position {
                None => token.position_increment.saturating_sub(1),
                Some(previous) => previous + token.position_increment,
            };
            position = Some(current);
            AnalyzedToken::from_token(&token, current)
        })
        .collect();
    Ok(tokens)
}
