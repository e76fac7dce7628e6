//! Shellwords - Bourne-shell word splitting and escaping.
//!
//! Splits a line into the words a POSIX shell would produce, and escapes
//! words back into a line the shell reads as the same arguments.
//!
//! ```
//! use shellwords::{escape, join, split};
//!
//! let words = split(r#"cp "my file" dest\ dir"#).unwrap();
//! assert_eq!(words, vec!["cp", "my file", "dest dir"]);
//! assert_eq!(join(&words), r"cp my\ file dest\ dir");
//! assert_eq!(escape(""), "''");
//! ```

pub mod audit;
pub mod config;
pub mod dispatch;
pub mod input;
pub mod outcome;
pub mod output;
pub mod shell;

pub use config::Config;
pub use dispatch::run;
pub use input::Request;
pub use outcome::Outcome;
pub use output::format_response;
pub use shell::{SplitError, escape, join, split};
