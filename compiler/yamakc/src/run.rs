//! Running the front end over a source and reporting the results.

use std::io::BufRead;
use std::path::{Path, PathBuf};

use yamak_lexer::{lex, LexOutput};

use crate::Reporter;

/// Knobs for a single run. There is no persisted configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunOptions {
    /// Report every token.
    pub print_tokens: bool,
    /// Include comment tokens when printing tokens.
    pub print_comments: bool,
    /// Line reported before the diagnostics of a failed run.
    pub error_banner: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            print_tokens: true,
            print_comments: true,
            error_banner: "Errors".to_owned(),
        }
    }
}

impl RunOptions {
    /// Options that report only diagnostics.
    pub fn quiet() -> Self {
        Self {
            print_tokens: false,
            ..Self::default()
        }
    }
}

/// Why a run failed.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The source had lexical errors. They have already been reported.
    #[error("{file}: {count} lexical error(s)")]
    Lexical { file: String, count: usize },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Scan `source`, report its tokens and any diagnostics.
///
/// Tokens are reported as regular output in source order. If the scan
/// produced diagnostics, the error banner and then each diagnostic's
/// `[file:line:column] message` form are reported as errors and
/// [`RunError::Lexical`] is returned.
#[tracing::instrument(level = "debug", skip(source, options, reporter))]
pub fn run_string(
    file: &str,
    source: &str,
    options: &RunOptions,
    reporter: &mut dyn Reporter,
) -> Result<LexOutput, RunError> {
    let output = lex(file, source);

    if options.print_tokens {
        for token in &output.tokens {
            if !options.print_comments && token.kind.is_comment() {
                continue;
            }
            reporter.report(&token.to_string(), false);
        }
    }

    if output.has_errors() {
        reporter.report(&options.error_banner, true);
        for error in &output.errors {
            reporter.report(&error.render(), true);
        }
        return Err(RunError::Lexical {
            file: file.to_owned(),
            count: output.errors.len(),
        });
    }

    Ok(output)
}

/// Read `path` and run it. The path's display form labels diagnostics.
pub fn run_file(
    path: &Path,
    options: &RunOptions,
    reporter: &mut dyn Reporter,
) -> Result<LexOutput, RunError> {
    let source = std::fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.to_owned(),
        source,
    })?;
    run_string(&path.display().to_string(), &source, options, reporter)
}

/// Run each line of `input` as its own source until end of input.
///
/// Lexical errors are reported and the loop continues; only a read failure
/// ends it early. Returns the number of lines that had lexical errors.
pub fn run_lines(
    input: impl BufRead,
    label: &str,
    options: &RunOptions,
    reporter: &mut dyn Reporter,
) -> Result<usize, RunError> {
    let mut failed = 0;
    for line in input.lines() {
        let line = line.map_err(|source| RunError::Io {
            path: PathBuf::from(label),
            source,
        })?;
        match run_string(label, &line, options, reporter) {
            Ok(_) => {}
            Err(RunError::Lexical { .. }) => failed += 1,
            Err(err) => return Err(err),
        }
    }
    Ok(failed)
}
