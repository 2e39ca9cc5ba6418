//! Tracing subscriber setup.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Filter variable checked first, before `RUST_LOG`.
pub const LOG_ENV: &str = "LISK_LOG";

/// Set to `1` to log as an indented call tree instead of flat lines.
pub const LOG_TREE_ENV: &str = "LISK_LOG_TREE";

/// Install the global subscriber.
///
/// Does nothing unless `LISK_LOG` or `RUST_LOG` is set, so a plain run pays
/// nothing for the `trace!` calls in the lexer, parser and evaluator. Safe
/// to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let Some(directives) = std::env::var(LOG_ENV)
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
        else {
            return;
        };
        let filter = EnvFilter::new(directives);
        let tree = std::env::var(LOG_TREE_ENV).is_ok_and(|v| v == "1");

        let registry = tracing_subscriber::registry().with(filter);
        if tree {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
