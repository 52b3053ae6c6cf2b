//! Lexical layer: positions, the rune alphabet, the scanner, and the
//! construct handlers it dispatches to.

mod constructs;
mod position;
mod scanner;
pub mod table;

pub use position::{Cursor, Position};
pub use scanner::Scanner;
pub use table::{Category, Construct, Entry, Symbol, SymbolTable};
