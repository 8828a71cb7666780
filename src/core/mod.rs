//! Core data types for the sequence dictionary.
//!
//! - [`dict::DictEntry`]: one `@SQ` record loaded from a `.dict` file
//! - [`dict::SqDict`]: the ordered, name-indexed lookup table the rewriter
//!   consults

pub mod dict;
