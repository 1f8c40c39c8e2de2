//! Log output for the `lol` binary.
//!
//! Nothing is installed unless `LOL_LOG` (or `RUST_LOG`) is set, e.g.
//!
//! ```bash
//! LOL_LOG=debug lol file.lol
//! LOL_LOG="lol::lexer=trace" lol --eval 'let x = 1'
//! ```

use tracing_subscriber::EnvFilter;

/// `LOL_LOG` takes precedence over `RUST_LOG` when both are set.
fn build_filter() -> EnvFilter {
    match std::env::var("LOL_LOG") {
        Ok(val) => EnvFilter::builder().parse_lossy(val),
        Err(_) => EnvFilter::from_default_env(),
    }
}

/// Install the global subscriber. Output goes to stderr so token listings
/// on stdout stay clean.
pub fn init_tracing() {
    if std::env::var("LOL_LOG").is_err() && std::env::var("RUST_LOG").is_err() {
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(std::io::stderr)
        .init();
}
