//! Driver for the Yamak toolchain.
//!
//! Scans a source with `yamak_lexer` and reports tokens and diagnostics
//! through a [`Reporter`]. Later stages (parsing, checking, codegen) will
//! hang off [`run_string`] as they are written.

mod report;
mod run;

use std::sync::Once;

pub use report::{BufferReporter, Reporter, StdReporter};
pub use run::{run_file, run_lines, run_string, RunError, RunOptions};
pub use yamak_ir::{Token, TokenKind};
pub use yamak_lexer::{LexError, LexErrorKind, LexOutput};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=yamak_lexer=debug` or `RUST_LOG=trace`; set
/// `YAMAK_LOG_TREE` for indented span trees instead of flat lines.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let tree = std::env::var_os("YAMAK_LOG_TREE").is_some();
        let result = tracing_subscriber::registry()
            .with((!tree).then(|| fmt::layer().with_target(true).with_level(true)))
            .with(tree.then(|| HierarchicalLayer::new(2).with_targets(true)))
            .with(EnvFilter::from_default_env())
            .try_init();
        if let Err(err) = result {
            eprintln!("tracing already initialized: {err}");
        }
    });
}

#[cfg(test)]
mod tests;
