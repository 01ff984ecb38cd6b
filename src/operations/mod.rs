//! Operations module
//!
//! Record operations on the `students` table and rendering of their output

pub mod render;
pub mod students;

pub use render::*;
pub use students::*;
