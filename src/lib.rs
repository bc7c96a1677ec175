//! Parsing of single-line, Java-like method signatures such as
//! `public void log(String value)`, plus a small delimiter-based string
//! splitter.

mod error;
pub mod parse;
mod signature;
pub mod split;

pub use error::MalformedSignature;
pub use signature::{Argument, MethodSignature};
pub use split::{SplitMode, Splitter};
