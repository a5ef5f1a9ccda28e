//! Answer evaluation.

/// Decide whether `submitted` matches `expected`.
///
/// Surrounding whitespace is ignored on both sides; the remaining text must
/// match exactly, including case.
pub fn evaluate(expected: &str, submitted: &str) -> bool {
    expected.trim() == submitted.trim()
}

/// Returns `true` if a submission carries no answer at all.
pub fn is_blank(submitted: &str) -> bool {
    submitted.trim().is_empty()
}
