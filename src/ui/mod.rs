//! UI module for bmi-tui
//!
//! Rendering for the single calculator screen: input fields, the result
//! card with the fade-in, and the validation notice.

mod render;

pub use render::render;
