//! Reusable widgets.

pub mod detail;
pub mod filter;
pub mod text_input;

pub use detail::DetailPanel;
pub use filter::FilterBar;
pub use text_input::{TextInput, TextInputState};
