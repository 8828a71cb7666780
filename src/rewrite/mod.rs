//! The streaming header rewriter.
//!
//! [`rewrite`] copies an alignment stream from `input` to `output` line by
//! line. While still inside the header (lines starting with `@`), every `@SQ`
//! line is replaced by the dictionary's entry for its contig name and every
//! other header line passes through unchanged. The first line that does not
//! start with `@` ends the header: it is emitted unchanged and the rewriter
//! drops permanently into pass-through mode, where the rest of the stream is
//! copied out with no inspection — a later line starting with `@` is body
//! data, not a header.
//!
//! The rewriter is a pure function of the dictionary and the input stream;
//! the binary decides what a returned error means for the process.

use std::io::{BufRead, Write};

use thiserror::Error;

use crate::core::dict::SqDict;
use crate::parsing::sq::{contig_name, ParseError};

#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("no @SQ line found for contig named {name}")]
    UnknownContig { name: String },
}

/// Stream `input` to `output`, substituting `@SQ` header lines from `dict`.
///
/// Each emitted line keeps the terminator it was read (or stored) with, so
/// output is byte-identical to input everywhere except substituted `@SQ`
/// lines. Header lines are flushed as they are written so a downstream pipe
/// consumer sees the header promptly; the body is flushed once at end of
/// input.
///
/// On error, everything already written stays written — the caller gets a
/// prefix of the output and a descriptive error, never a guessed line.
///
/// # Errors
///
/// Returns `RewriteError::UnknownContig` if an `@SQ` line names a contig
/// absent from `dict`, `RewriteError::Parse` if an `@SQ` line has no `SN:`
/// field, or `RewriteError::Io` on read/write failure.
pub fn rewrite<R: BufRead, W: Write>(
    dict: &SqDict,
    mut input: R,
    mut output: W,
) -> Result<(), RewriteError> {
    let mut line = String::new();

    // Header phase
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            output.flush()?;
            return Ok(());
        }

        if !line.starts_with('@') {
            // First body line ends the header for good
            output.write_all(line.as_bytes())?;
            break;
        }

        if line.starts_with("@SQ") {
            let name = contig_name(&line)?;
            let replacement = dict.get(name).ok_or_else(|| RewriteError::UnknownContig {
                name: name.to_string(),
            })?;
            output.write_all(replacement.as_bytes())?;
        } else {
            output.write_all(line.as_bytes())?;
        }
        output.flush()?;
    }

    // Pass-through phase: no inspection, even for lines starting with '@'
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        output.write_all(line.as_bytes())?;
    }
    output.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::dict::parse_dict_text;

    fn run(dict_text: &str, input: &str) -> Result<String, RewriteError> {
        let dict = parse_dict_text(dict_text).unwrap();
        let mut output = Vec::new();
        rewrite(&dict, input.as_bytes(), &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_substitutes_sq_line() {
        let output = run(
            "@SQ\tSN:chr1\tLN:100\n",
            "@HD\tVN:1.0\n@SQ\tSN:chr1\tLN:999\nread1\t4\t*\t0\n",
        )
        .unwrap();
        assert_eq!(output, "@HD\tVN:1.0\n@SQ\tSN:chr1\tLN:100\nread1\t4\t*\t0\n");
    }

    #[test]
    fn test_substitution_ignores_input_sq_fields() {
        // The input line's own fields are discarded wholesale
        let output = run(
            "@SQ\tSN:chr1\tLN:100\tM5:abc\tUR:file:///ref.fa\n",
            "@SQ\tSN:chr1\tLN:999\tAS:stale\n",
        )
        .unwrap();
        assert_eq!(output, "@SQ\tSN:chr1\tLN:100\tM5:abc\tUR:file:///ref.fa\n");
    }

    #[test]
    fn test_non_sq_header_lines_unchanged() {
        let input = "@HD\tVN:1.6\tSO:coordinate\n@RG\tID:sample1\n@PG\tID:bwa\nr1\t4\t*\n";
        let output = run("@SQ\tSN:chr1\tLN:100\n", input).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_body_at_sign_not_reinspected() {
        // '@' at the start of a body line (e.g. a read named "@weird") must
        // not re-enter header handling once the header has ended
        let input = "@SQ\tSN:chr1\tLN:999\nread1\t4\t*\n@SQ\tSN:chrUnknown\tLN:1\n";
        let output = run("@SQ\tSN:chr1\tLN:100\n", input).unwrap();
        assert_eq!(
            output,
            "@SQ\tSN:chr1\tLN:100\nread1\t4\t*\n@SQ\tSN:chrUnknown\tLN:1\n"
        );
    }

    #[test]
    fn test_unknown_contig_is_fatal() {
        let err = run("@SQ\tSN:chr1\tLN:100\n", "@SQ\tSN:chr7\tLN:5\n").unwrap_err();
        assert!(matches!(err, RewriteError::UnknownContig { ref name } if name == "chr7"));
        assert!(err.to_string().contains("chr7"));
    }

    #[test]
    fn test_unknown_contig_keeps_emitted_prefix() {
        let dict = parse_dict_text("@SQ\tSN:chr1\tLN:100\n").unwrap();
        let mut output = Vec::new();
        let input = "@HD\tVN:1.0\n@SQ\tSN:chr1\tLN:999\n@SQ\tSN:chr7\tLN:5\n";
        let err = rewrite(&dict, input.as_bytes(), &mut output).unwrap_err();

        assert!(matches!(err, RewriteError::UnknownContig { .. }));
        // No rollback: the lines before the failure stand
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "@HD\tVN:1.0\n@SQ\tSN:chr1\tLN:100\n"
        );
    }

    #[test]
    fn test_malformed_input_sq_is_fatal() {
        let err = run("@SQ\tSN:chr1\tLN:100\n", "@SQ\tLN:999\n").unwrap_err();
        assert!(matches!(err, RewriteError::Parse(_)));
    }

    #[test]
    fn test_one_line_per_line() {
        let dict_text = "@SQ\tSN:chr1\tLN:100\n@SQ\tSN:chr2\tLN:200\n";
        let input = "@SQ\tSN:chr2\tLN:9\n@SQ\tSN:chr1\tLN:9\nr1\t4\t*\nr2\t4\t*\n";
        let output = run(dict_text, input).unwrap();

        // Positional correspondence, with the input's @SQ order preserved
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "@SQ\tSN:chr2\tLN:200");
        assert_eq!(lines[1], "@SQ\tSN:chr1\tLN:100");
        assert_eq!(lines[2], "r1\t4\t*");
        assert_eq!(lines[3], "r2\t4\t*");
    }

    #[test]
    fn test_empty_input() {
        let output = run("@SQ\tSN:chr1\tLN:100\n", "").unwrap();
        assert_eq!(output, "");
    }

    #[test]
    fn test_header_only_input() {
        let input = "@HD\tVN:1.0\n@SQ\tSN:chr1\tLN:999\n";
        let output = run("@SQ\tSN:chr1\tLN:100\n", input).unwrap();
        assert_eq!(output, "@HD\tVN:1.0\n@SQ\tSN:chr1\tLN:100\n");
    }

    #[test]
    fn test_final_line_without_terminator() {
        let input = "@SQ\tSN:chr1\tLN:999\nread1\t4\t*";
        let output = run("@SQ\tSN:chr1\tLN:100\n", input).unwrap();
        assert_eq!(output, "@SQ\tSN:chr1\tLN:100\nread1\t4\t*");
    }

    #[test]
    fn test_crlf_lines_round_trip() {
        let output = run(
            "@SQ\tSN:chr1\tLN:100\n",
            "@HD\tVN:1.0\r\n@SQ\tSN:chr1\tLN:999\r\nread1\t4\t*\r\n",
        )
        .unwrap();
        // Substituted line carries the dictionary's terminator; everything
        // else keeps its own
        assert_eq!(output, "@HD\tVN:1.0\r\n@SQ\tSN:chr1\tLN:100\nread1\t4\t*\r\n");
    }
}
