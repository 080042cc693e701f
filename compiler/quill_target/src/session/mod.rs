//! One code generation run.
//!
//! A [`CodegenSession`] owns the target chosen for the run and enforces the
//! call order the emission engine relies on: `prepare` exactly once after
//! analysis, then any number of literal renderings.

use quill_grammar::{Grammar, TokenType};

use crate::{CodegenOptions, Target};

pub struct CodegenSession {
    options: CodegenOptions,
    target: Box<dyn Target>,
    prepared: bool,
}

impl CodegenSession {
    pub fn new(options: CodegenOptions) -> Self {
        let target = options.target();
        CodegenSession {
            options,
            target,
            prepared: false,
        }
    }

    pub fn options(&self) -> &CodegenOptions {
        &self.options
    }

    pub fn target(&self) -> &dyn Target {
        self.target.as_ref()
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Run the target's post-analysis hook over `grammar`.
    ///
    /// Must be called exactly once per session.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(target = %self.target.kind(), grammar = %grammar.name())
    )]
    pub fn prepare(&mut self, grammar: &mut Grammar) {
        assert!(
            !self.prepared,
            "post-analysis already ran for this {} session",
            self.target.kind()
        );
        self.prepared = true;

        if self.options.verbose {
            tracing::info!(
                syn_pred_base_templates = self.target.use_base_templates_for_syn_pred_fragments(),
                dfa_placement = ?self.target.cyclic_dfa_placement(),
                "target capabilities"
            );
        }

        self.target.post_analysis(grammar);
    }

    /// Target literal for every literal token of `grammar`, in token type
    /// order. Used for the generated token-name table.
    pub fn token_literals(&self, grammar: &Grammar) -> Vec<(TokenType, String)> {
        grammar
            .vocabulary()
            .literals()
            .map(|(ttype, literal)| (ttype, self.target.string_literal_from_grammar(literal)))
            .collect()
    }
}

impl std::fmt::Debug for CodegenSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodegenSession")
            .field("target", &self.target.kind())
            .field("verbose", &self.options.verbose)
            .field("prepared", &self.prepared)
            .finish()
    }
}
