//! UI helper functions for terminal output formatting.
//!
//! This module provides utility functions for consistent user interface output
//! across CLI commands, including error messages, warnings, and prompts.

use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// Write a prompt without a trailing newline and flush it.
pub fn prompt(out: &mut dyn Write, text: &str) -> std::io::Result<()> {
    write!(out, "{}", text)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_and_warning_prefixes() {
        let mut buf = Vec::new();
        write_error(&mut buf, "bad slot").unwrap();
        display_warning(&mut buf, "careful").unwrap();
        let s = String::from_utf8(buf).unwrap();
        assert_eq!(s, "Error: bad slot\nWARNING: careful\n");
    }

    #[test]
    fn prompt_has_no_newline() {
        let mut buf = Vec::new();
        prompt(&mut buf, "Slot: ").unwrap();
        assert_eq!(buf, b"Slot: ");
    }
}
