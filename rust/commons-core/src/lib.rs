//! Core definitions (error type, result alias and argument checks), relied upon by all
//! commons-* crates.

pub mod error;
pub mod macros;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
