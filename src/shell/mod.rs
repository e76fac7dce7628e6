//! Shell word splitting and quoting.

mod escaper;
mod splitter;

pub use escaper::{escape, join};
pub use splitter::{SplitError, split};
