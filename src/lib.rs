//! Runic: a transpiler from runic glyph source to C++.
//!
//! ```
//! let cpp = runic::Transpiler::new().transpile("ᚷ (x) ᛒ ᛏ x; ᛘ").unwrap();
//! assert_eq!(cpp, "if (x) { return x; }");
//! ```

pub mod cli;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod repl;
pub mod suggest;
pub mod syntax;
pub mod validation;

pub use config::Config;
pub use engine::{Skeleton, Transpiler};
pub use errors::{ErrorCategory, ErrorKind, ParseError};
pub use syntax::{Position, SymbolTable};
