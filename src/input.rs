//! Frame budget input.
//!
//! Budgets arrive as a whitespace-separated list of positive integers.
//! Anything else falls back to [`DEFAULT_FRAME_BUDGETS`].

use std::io::{BufRead, Write};

use log::warn;

use crate::common::config::DEFAULT_FRAME_BUDGETS;
use crate::common::{Error, Result};

/// Parse a whitespace-separated list of positive frame budgets.
///
/// # Errors
/// - `Error::EmptyFrameBudgets` for blank input
/// - `Error::InvalidFrameBudget` for the first token that is not a positive integer
pub fn parse_frame_budgets(line: &str) -> Result<Vec<usize>> {
    let budgets = line
        .split_whitespace()
        .map(|token| match token.parse::<usize>() {
            Ok(frames) if frames > 0 => Ok(frames),
            _ => Err(Error::InvalidFrameBudget(token.to_string())),
        })
        .collect::<Result<Vec<_>>>()?;

    if budgets.is_empty() {
        return Err(Error::EmptyFrameBudgets);
    }
    Ok(budgets)
}

/// Parse budgets, substituting the defaults on any error.
///
/// # Example
/// ```
/// use pagesim::input::frame_budgets_or_default;
///
/// assert_eq!(frame_budgets_or_default("4 8"), vec![4, 8]);
/// assert_eq!(frame_budgets_or_default("4 zero"), vec![3, 5, 10, 15, 20]);
/// ```
pub fn frame_budgets_or_default(line: &str) -> Vec<usize> {
    match parse_frame_budgets(line) {
        Ok(budgets) => budgets,
        Err(e) => {
            warn!("{}; using default frame budgets {:?}", e, DEFAULT_FRAME_BUDGETS);
            DEFAULT_FRAME_BUDGETS.to_vec()
        }
    }
}

/// Ask for frame budgets on `output` and read one line from `input`.
///
/// # Errors
/// Returns I/O errors from the prompt or the read. Bad input is not an
/// error; it yields the defaults.
pub fn prompt_frame_budgets<R, W>(input: &mut R, output: &mut W) -> Result<Vec<usize>>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        output,
        "Enter the frame counts to test (positive integers, separated by spaces):"
    )?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    match parse_frame_budgets(&line) {
        Ok(budgets) => Ok(budgets),
        Err(_) => {
            writeln!(
                output,
                "Invalid input. Using default values: {:?}",
                DEFAULT_FRAME_BUDGETS
            )?;
            Ok(DEFAULT_FRAME_BUDGETS.to_vec())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_frame_budgets("3 5  10\t15\n").unwrap(), vec![3, 5, 10, 15]);
    }

    #[test]
    fn test_parse_rejects_zero_and_negative() {
        assert!(matches!(
            parse_frame_budgets("3 0 5"),
            Err(Error::InvalidFrameBudget(t)) if t == "0"
        ));
        assert!(matches!(
            parse_frame_budgets("-2"),
            Err(Error::InvalidFrameBudget(t)) if t == "-2"
        ));
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        assert!(parse_frame_budgets("3 five").is_err());
        assert!(parse_frame_budgets("2.5").is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(parse_frame_budgets("   \n"), Err(Error::EmptyFrameBudgets)));
    }

    #[test]
    fn test_fallback_to_defaults() {
        assert_eq!(frame_budgets_or_default(""), DEFAULT_FRAME_BUDGETS.to_vec());
        assert_eq!(frame_budgets_or_default("7"), vec![7]);
    }

    #[test]
    fn test_prompt_reads_line() {
        let mut input = Cursor::new("4 6\n");
        let mut output = Vec::new();

        let budgets = prompt_frame_budgets(&mut input, &mut output).unwrap();
        assert_eq!(budgets, vec![4, 6]);
        assert!(String::from_utf8(output).unwrap().starts_with("Enter the frame counts"));
    }

    /// Writer that accepts the prompt and fails every later write.
    struct FailAfterPrompt {
        writes: usize,
    }

    impl Write for FailAfterPrompt {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            if buf.starts_with(b"Invalid input") {
                return Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
            }
            self.writes += 1;
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_prompt_fallback_write_error_propagates() {
        let mut input = Cursor::new("nope\n");
        let mut output = FailAfterPrompt { writes: 0 };

        let result = prompt_frame_budgets(&mut input, &mut output);
        assert!(matches!(result, Err(Error::Io(_))));
        assert!(output.writes > 0);
    }

    #[test]
    fn test_prompt_falls_back() {
        let mut input = Cursor::new("abc\n");
        let mut output = Vec::new();

        let budgets = prompt_frame_budgets(&mut input, &mut output).unwrap();
        assert_eq!(budgets, DEFAULT_FRAME_BUDGETS.to_vec());
        assert!(String::from_utf8(output).unwrap().contains("Invalid input"));
    }
}
