//! Line-by-line comparison of captured output against expected output.

/// Index of the first line where `actual` and `expected` disagree.
///
/// When one sequence is a strict prefix of the other, the index is the length
/// of the shorter one. Returns `None` when both are identical.
pub fn first_mismatch<A, E>(actual: &[A], expected: &[E]) -> Option<usize>
where
    A: AsRef<str>,
    E: AsRef<str>,
{
    let differing = actual
        .iter()
        .zip(expected)
        .position(|(left, right)| left.as_ref() != right.as_ref());
    match differing {
        Some(index) => Some(index),
        None if actual.len() != expected.len() => Some(actual.len().min(expected.len())),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_sequences_match() {
        assert_eq!(first_mismatch(&["a", "b"], &["a", "b"]), None);
        assert_eq!(first_mismatch::<&str, &str>(&[], &[]), None);
    }

    #[test]
    fn reports_first_differing_line() {
        assert_eq!(first_mismatch(&["a", "x", "y"], &["a", "b", "c"]), Some(1));
    }

    #[test]
    fn missing_line_points_past_shorter_sequence() {
        assert_eq!(first_mismatch(&["a"], &["a", "b"]), Some(1));
        assert_eq!(first_mismatch(&["a", "b", "c"], &["a"]), Some(1));
        assert_eq!(first_mismatch(&["a"], &[] as &[&str]), Some(0));
    }

    #[test]
    fn content_mismatch_wins_over_length_mismatch() {
        assert_eq!(first_mismatch(&["x"], &["a", "b"]), Some(0));
    }

    #[test]
    fn whitespace_is_significant() {
        assert_eq!(first_mismatch(&["-4... "], &["-4..."]), Some(0));
    }
}
