//! Code generation options.
//!
//! Parsed from `--flag=value` style arguments, with the `QUILL_TARGET`
//! environment variable as a fallback for the target language.

use crate::target::UnknownTarget;
use crate::{Target, TargetKind};

/// Environment variable naming the default target language.
pub const TARGET_ENV: &str = "QUILL_TARGET";

/// Options for one code generation run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Output language (`--target=<name>`).
    pub target: TargetKind,
    /// Log adapter decisions (`-v`, `--verbose`).
    pub verbose: bool,
}

impl CodegenOptions {
    /// Defaults, with the target taken from `QUILL_TARGET` when set.
    pub fn from_env() -> Result<Self, OptionsError> {
        let mut options = CodegenOptions::default();
        if let Ok(name) = std::env::var(TARGET_ENV) {
            options.target = name.parse()?;
        }
        Ok(options)
    }

    /// Create the target adapter for this run.
    pub fn target(&self) -> Box<dyn Target> {
        self.target.create()
    }
}

/// An argument that could not be applied.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error(transparent)]
    UnknownTarget(#[from] UnknownTarget),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

/// Parse code generation arguments on top of `base`.
pub fn parse_codegen_options(
    base: CodegenOptions,
    args: &[String],
) -> Result<CodegenOptions, OptionsError> {
    let mut options = base;

    for arg in args {
        if let Some(target) = arg.strip_prefix("--target=") {
            options.target = target.parse()?;
        } else if arg == "-v" || arg == "--verbose" {
            options.verbose = true;
        } else {
            return Err(OptionsError::UnknownOption(arg.clone()));
        }
    }

    Ok(options)
}
