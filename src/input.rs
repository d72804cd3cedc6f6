//! Input utilities: file or piped stdin.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::Path;

/// Read from stdin if piped (not a terminal).
///
/// Returns the content read from stdin, or an empty string if stdin is a terminal.
pub fn read_stdin() -> Result<String, String> {
    let mut buffer = String::new();
    if !io::stdin().is_terminal() {
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
    }
    Ok(buffer)
}

/// Read input from `file`, or stdin when it is `None` or "-".
pub fn read_input(file: Option<&Path>) -> Result<String, String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e)),
        _ => read_stdin(),
    }
}
