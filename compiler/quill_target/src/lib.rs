//! Code generation targets for the Quill parser generator.
//!
//! One analysis pipeline, many output languages. A [`Target`] supplies the
//! language-specific pieces the emission engine needs:
//!
//! 1. **Literals** - grammar literals (`'a\n"'`) and raw strings rewritten
//!    into the target's literal syntax, driven by an [`EscapeTable`]
//! 2. **Rule metadata** - a post-analysis hook that decorates every rule,
//!    delegated rules included (e.g. declared exception types)
//! 3. **Capabilities** - template choices such as syntactic predicate
//!    fragments and cyclic DFA placement
//!
//! # Architecture
//!
//! ```text
//! CodegenOptions ──► TargetKind::create() ──► Box<dyn Target>
//!                                                   │
//!   Grammar (analysed) ──► CodegenSession::prepare ─┤ post_analysis (once)
//!                                                   │
//!   emission engine ──► string_literal_from_grammar ┘ (per literal)
//! ```

mod escape;
pub mod metadata;
mod options;
mod session;
pub mod target;
pub mod transcode;

pub use escape::{EscapeTable, ESCAPE_DOMAIN};
pub use metadata::{AugmentStats, RECOGNITION_EXCEPTION};
pub use options::{parse_codegen_options, CodegenOptions, OptionsError, TARGET_ENV};
pub use session::CodegenSession;
pub use target::{
    ApexTarget, DelphiTarget, DfaPlacement, JavaTarget, Target, TargetKind, UnknownTarget,
};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=quill_target=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host tool.
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(HierarchicalLayer::new(2).with_targets(true))
                .try_init();
        }
    });
}
