//! Parsers for the sequence dictionary and `@SQ` header lines.
//!
//! This module provides:
//!
//! - **`.dict` files**: Load a sequence dictionary (as generated by
//!   `samtools dict` or Picard `CreateSequenceDictionary`) into an
//!   [`SqDict`](crate::core::dict::SqDict)
//! - **`@SQ` fields**: Extract the contig name (`SN:` tag) from a raw `@SQ`
//!   line, shared between the dictionary loader and the header rewriter
//!
//! Lines are kept as raw text with their terminators attached; nothing here
//! re-serializes a header line, so substituted output is byte-identical to
//! the dictionary source.
//!
//! ## Example
//!
//! ```rust
//! use rehead_sq::parsing::dict::parse_dict_text;
//! use rehead_sq::parsing::sq::contig_name;
//!
//! let dict = parse_dict_text("@HD\tVN:1.6\n@SQ\tSN:chr1\tLN:100\n").unwrap();
//! assert_eq!(dict.len(), 1);
//!
//! assert_eq!(contig_name("@SQ\tSN:chr1\tLN:100\n").unwrap(), "chr1");
//! ```

pub mod dict;
pub mod sq;
