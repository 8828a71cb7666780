//! # rehead-sq
//!
//! A streaming filter that normalizes the sequence dictionary of a SAM
//! header.
//!
//! Alignment headers produced by different pipelines often carry `@SQ` lines
//! that disagree with the canonical sequence dictionary for the reference
//! assembly (missing `M5`/`UR` tags, stale `AS` fields, and so on).
//! `rehead-sq` reads SAM text from stdin, replaces every `@SQ` header line
//! with the matching entry from a pre-generated `.dict` file (as produced by
//! `samtools dict` or Picard `CreateSequenceDictionary`), and passes every
//! other line through to stdout untouched — including the entire alignment
//! body, which is never inspected.
//!
//! ## Example
//!
//! ```rust
//! use rehead_sq::parsing::dict::parse_dict_text;
//! use rehead_sq::rewrite::rewrite;
//!
//! let dict = parse_dict_text("@SQ\tSN:chr1\tLN:100\n").unwrap();
//!
//! let input = "@HD\tVN:1.6\n@SQ\tSN:chr1\tLN:999\nread1\t4\t*\t0\n";
//! let mut output = Vec::new();
//! rewrite(&dict, input.as_bytes(), &mut output).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "@HD\tVN:1.6\n@SQ\tSN:chr1\tLN:100\nread1\t4\t*\t0\n"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Dictionary data types
//! - [`parsing`]: Dictionary loading and `@SQ` field extraction
//! - [`rewrite`]: The streaming header rewriter
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod parsing;
pub mod rewrite;

// Re-export commonly used types for convenience
pub use crate::core::dict::{DictEntry, SqDict};
pub use crate::parsing::sq::ParseError;
pub use crate::rewrite::RewriteError;
