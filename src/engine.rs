//! The transpile driver.
//!
//! [`Transpiler`] owns the symbol table for its whole lifetime and runs one
//! scanner pass per call. It holds no per-call state, so a single instance
//! can be shared by reference across threads.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::config::Config;
use crate::errors::{ErrorKind, ParseError};
use crate::syntax::{Scanner, SymbolTable};

/// Source name used when the caller does not supply one.
const ANONYMOUS_SOURCE: &str = "<input>";

/// Textual wrapper that turns a transpiled body into a runnable program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skeleton {
    pub preamble: String,
    pub entry_point: String,
    pub output: PathBuf,
}

impl Skeleton {
    /// `<preamble>\n\n<body>\n<entry-point>`
    pub fn wrap(&self, body: &str) -> String {
        format!("{}\n\n{}\n{}", self.preamble, body, self.entry_point)
    }
}

impl Default for Skeleton {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for Skeleton {
    fn from(config: &Config) -> Self {
        Self {
            preamble: config.preamble.clone(),
            entry_point: config.entry_point.clone(),
            output: config.output.clone(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Transpiler {
    table: SymbolTable,
    skeleton: Skeleton,
}

impl Transpiler {
    /// Standard alphabet and default skeleton.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: &Config) -> Self {
        Self {
            table: SymbolTable::standard(),
            skeleton: Skeleton::from(config),
        }
    }

    pub fn with_table(table: SymbolTable) -> Self {
        Self {
            table,
            skeleton: Skeleton::default(),
        }
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    /// Translates one input unit. No side effects.
    pub fn transpile(&self, source: &str) -> Result<String, ParseError> {
        self.transpile_named(ANONYMOUS_SOURCE, source)
    }

    /// Like [`transpile`](Self::transpile), naming the input in diagnostics.
    pub fn transpile_named(&self, name: &str, source: &str) -> Result<String, ParseError> {
        match Scanner::new(&self.table).scan(source) {
            Ok(output) => {
                info!(source = name, bytes = output.len(), "transpiled");
                Ok(output)
            }
            Err(err) => {
                error!(
                    source = name,
                    line = err.line(),
                    column = err.column(),
                    "{}",
                    err.message()
                );
                Err(err.with_source(name, source))
            }
        }
    }

    /// Transpiles `source`, writes the wrapped program to the configured
    /// artifact path, and returns the unwrapped body.
    pub fn compile_to_skeleton(&self, source: &str) -> Result<String, ParseError> {
        self.compile_to_path(ANONYMOUS_SOURCE, source, &self.skeleton.output)
    }

    /// Same as [`compile_to_skeleton`](Self::compile_to_skeleton) with an
    /// explicit artifact path. The file is overwritten.
    pub fn compile_to_path(
        &self,
        name: &str,
        source: &str,
        output: &Path,
    ) -> Result<String, ParseError> {
        let body = self.transpile_named(name, source)?;
        std::fs::write(output, self.skeleton.wrap(&body)).map_err(|err| {
            ParseError::unpositioned(ErrorKind::Io {
                path: output.display().to_string(),
                reason: err.to_string(),
            })
        })?;
        info!(artifact = %output.display(), "wrote program skeleton");
        Ok(body)
    }
}
