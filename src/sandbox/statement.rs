//! Statement splitting and classification
//!
//! The sandbox accepts a raw editor buffer, not a single statement. Splitting
//! is textual: the buffer is cut on `;`, fragments are trimmed, and empty
//! fragments are dropped. Quoted semicolons are not honored; the guard and
//! the engine both see the same fragments, so the behavior stays consistent.

/// Maximum number of statements accepted in a single submission.
pub const MAX_STATEMENTS: usize = 15;

/// Split a raw query buffer into trimmed, non-empty statements.
///
/// The returned fragments carry no trailing `;`.
pub fn split_statements(query: &str) -> Vec<String> {
    query
        .split(';')
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Extract the leading keyword of a statement, uppercased.
///
/// The keyword is the longest leading run of ASCII letters, so
/// `"select*from t"` yields `SELECT` and `"  update t ..."` yields `UPDATE`.
/// Returns `None` when the statement does not start with a letter.
pub fn leading_keyword(statement: &str) -> Option<String> {
    let word: String = statement
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();

    if word.is_empty() {
        None
    } else {
        Some(word.to_ascii_uppercase())
    }
}

/// Whether a statement is a SELECT (result-set producing) statement.
pub fn is_select(statement: &str) -> bool {
    leading_keyword(statement).as_deref() == Some("SELECT")
}
