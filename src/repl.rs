//! Runic REPL (Read-Transpile-Print Loop)
//!
//! Reads rune source interactively and prints the C++ it becomes.

use std::io::{self, Write};

use termcolor::ColorChoice;

use crate::cli::diagnostics::{print_diagnostic_to_stderr, RunicDiagnostic};
use crate::cli::output;
use crate::engine::Transpiler;
use crate::errors::ParseError;
use crate::suggest::suggest;
use crate::syntax::table::glyph;

/// REPL state that persists across inputs
pub struct ReplState {
    transpiler: Transpiler,
    line_number: usize,
    color: ColorChoice,
}

impl ReplState {
    pub fn new(transpiler: Transpiler, color: ColorChoice) -> Self {
        Self {
            transpiler,
            line_number: 1,
            color,
        }
    }

    /// Transpiles one complete input under the name `<repl:N>`.
    pub fn transpile(&mut self, input: &str) -> Result<String, ParseError> {
        let source_name = format!("<repl:{}>", self.line_number);
        self.line_number += 1;
        self.transpiler.transpile_named(&source_name, input)
    }

    fn eval_line(&mut self, input: &str) {
        match self.transpile(input) {
            Ok(code) => println!("{}", code),
            Err(err) => {
                let diagnostic = RunicDiagnostic::new(&err, Some(input));
                print_diagnostic_to_stderr(&diagnostic, self.color);
            }
        }
    }
}

/// Main REPL entry point
pub fn run_repl(transpiler: Transpiler, color: ColorChoice) {
    println!("Runic REPL v{}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for help, :quit to exit");
    println!();

    let mut repl_state = ReplState::new(transpiler, color);
    let mut input_buffer = String::new();

    loop {
        if input_buffer.is_empty() {
            print!("runic> ");
        } else {
            print!("    -> ");
        }
        let _ = io::stdout().flush();

        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                println!("\nGoodbye!");
                break;
            }
            Ok(_) => {
                let line = line.trim_end_matches(['\n', '\r']);

                if input_buffer.is_empty() && line.trim_start().starts_with(':') {
                    match handle_repl_command(line.trim(), &repl_state) {
                        ReplCommand::Continue => continue,
                        ReplCommand::Quit => break,
                    }
                }

                if !input_buffer.is_empty() {
                    input_buffer.push('\n');
                }
                input_buffer.push_str(line);

                // A blank line forces an incomplete input through.
                if is_complete_input(&input_buffer) || line.trim().is_empty() {
                    if !input_buffer.trim().is_empty() {
                        repl_state.eval_line(&input_buffer);
                    }
                    input_buffer.clear();
                }
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }
}

/// REPL command results
enum ReplCommand {
    Continue,
    Quit,
}

/// Handle special REPL commands that start with ':'
fn handle_repl_command(command: &str, state: &ReplState) -> ReplCommand {
    let (name, argument) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(name, rest)| (name, rest.trim()));

    match name.to_ascii_lowercase().as_str() {
        ":help" | ":h" => {
            println!("Runic REPL Commands:");
            println!("  :help, :h            Show this help");
            println!("  :quit, :q            Exit the REPL");
            println!("  :runes, :r           List the glyph alphabet");
            println!("  :suggest, :s PREFIX  Complete a keyword prefix");
            println!();
            println!("Enter rune source to see its C++.");
            println!("Input continues until blocks and strings are closed.");
            ReplCommand::Continue
        }
        ":quit" | ":q" => {
            println!("Goodbye!");
            ReplCommand::Quit
        }
        ":runes" | ":r" => {
            output::print_rune_table(state.transpiler.table());
            ReplCommand::Continue
        }
        ":suggest" | ":s" => {
            output::print_suggestions(&suggest(state.transpiler.table(), argument));
            ReplCommand::Continue
        }
        _ => {
            println!(
                "Unknown command: {}. Type :help for available commands.",
                command
            );
            ReplCommand::Continue
        }
    }
}

/// True once every string, switch body and opened block has been closed.
/// Comment text is ignored up to its newline.
fn is_complete_input(input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }

    let mut depth: i64 = 0;
    let mut in_string = false;
    let mut in_comment = false;
    let mut in_switch = false;
    for ch in input.chars() {
        match ch {
            '\n' if in_comment => in_comment = false,
            _ if in_comment => {}
            glyph::STRING_DELIMITER => in_string = !in_string,
            _ if in_string => {}
            glyph::SWITCH => in_switch = true,
            // The switch handler consumes its own opener and close.
            glyph::BLOCK_OPEN | '{' if in_switch => {}
            glyph::BLOCK_CLOSE | '}' if in_switch => in_switch = false,
            // Inside a switch body this glyph reads as `default`.
            glyph::COMMENT if !in_switch => in_comment = true,
            glyph::BLOCK_OPEN | '{' => depth += 1,
            glyph::BLOCK_CLOSE | '}' => depth -= 1,
            _ => {}
        }
    }

    depth <= 0 && !in_string && !in_switch
}
