//! Terminal I/O for the CLI

use std::io::{self, BufRead, Write};

use super::errors::CliResult;

/// Ask a yes/no question on stdout and block until a line is read.
/// Only `y` or `yes` (any case) confirms.
pub fn confirm(prompt: &str) -> CliResult<bool> {
    let mut stdout = io::stdout();
    write!(stdout, "{} [y/N] ", prompt)?;
    stdout.flush()?;

    read_confirmation(&mut io::stdin().lock())
}

fn read_confirmation<R: BufRead>(input: &mut R) -> CliResult<bool> {
    let mut line = String::new();
    input.read_line(&mut line)?;

    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

/// Write a block of text to stdout
pub fn write_output(text: &str) -> CliResult<()> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", text)?;
    if !text.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_answers() {
        for (input, expected) in [
            ("y\n", true),
            ("YES\n", true),
            ("n\n", false),
            ("\n", false),
            ("", false),
            ("maybe\n", false),
        ] {
            let mut reader = io::Cursor::new(input.as_bytes());
            assert_eq!(read_confirmation(&mut reader).unwrap(), expected, "{:?}", input);
        }
    }
}
