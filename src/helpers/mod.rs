//! Helper functions for derived post fields and templates
//!
//! Everything here is pure: dates, markup stripping, reading time and URL
//! building take their inputs explicitly and touch no shared state.

mod date;
mod html;
mod reading;
mod url;

pub use date::*;
pub use html::*;
pub use reading::*;
pub use url::*;
