//! Lesson catalog subsystem
//!
//! Static curriculum content: no storage, no mutation. The catalog is built
//! once and shared by the HTTP routes and the CLI.

mod catalog;
mod model;

pub use catalog::LessonCatalog;
pub use model::{Lesson, LessonContent, LessonExample, LessonSummary};
