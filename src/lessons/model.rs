//! Lesson record types
//!
//! Lessons are static content: an id, a title, a category banner, and a
//! content block of theory text plus runnable examples. The sandbox routes
//! never mutate them.

use serde::{Deserialize, Serialize};

/// A single worked example inside a lesson.
///
/// `query` is a complete, self-contained submission: it runs successfully
/// against a fresh sandbox without relying on earlier examples.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonExample {
    pub title: String,
    pub description: String,
    pub query: String,
    pub explanation: String,
}

impl LessonExample {
    pub fn new(title: &str, description: &str, query: &str, explanation: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            query: query.to_string(),
            explanation: explanation.to_string(),
        }
    }
}

/// The teachable body of a lesson.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonContent {
    pub description: String,
    /// Markdown theory text rendered by the frontend
    pub theory: String,
    pub examples: Vec<LessonExample>,
}

/// A full lesson record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub content: LessonContent,
}

impl Lesson {
    pub fn new(
        id: u32,
        title: &str,
        category: &str,
        description: &str,
        theory: &str,
        examples: Vec<LessonExample>,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            category: category.to_string(),
            content: LessonContent {
                description: description.to_string(),
                theory: theory.to_string(),
                examples,
            },
        }
    }

    /// Project the navigation summary.
    pub fn summary(&self) -> LessonSummary {
        LessonSummary {
            id: self.id,
            title: self.title.clone(),
            category: self.category.clone(),
        }
    }
}

/// Metadata used by the lesson navigation sidebar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonSummary {
    pub id: u32,
    pub title: String,
    pub category: String,
}
