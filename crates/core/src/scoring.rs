//! Boundary scoring convention.
//!
//! There is exactly one indexing convention in this codebase and it lives
//! here:
//!
//! - `true_boundary` is the **1-indexed count** of human-written sentences
//!   from the top of the displayed text. An item whose displayed text is
//!   entirely human has `true_boundary` equal to the number of displayed
//!   sentences.
//! - `guessed_boundary` is the **0-indexed position** of the sentence the
//!   annotator believes is the first machine-generated one.
//!
//! The signed distance between the two is
//! `guessed_boundary + 1 - true_boundary`: negative means the annotator
//! called the transition too early, zero is an exact hit, positive means
//! the guess landed at or past the true transition. The selector, the
//! submission path, and the aggregator all go through these functions
//! rather than re-deriving the arithmetic.

/// Signed distance of a guess from the true boundary, in sentences.
pub fn distance(guessed_boundary: i32, true_boundary: i32) -> i32 {
    guessed_boundary + 1 - true_boundary
}

/// Whether the guess names exactly the first machine-generated sentence.
pub fn is_exactly_correct(guessed_boundary: i32, true_boundary: i32) -> bool {
    distance(guessed_boundary, true_boundary) == 0
}

/// Whether the guess falls at or after the true boundary.
///
/// A past-boundary guess means the annotator read machine-generated text
/// and believed it was still human.
pub fn is_past_boundary(guessed_boundary: i32, true_boundary: i32) -> bool {
    distance(guessed_boundary, true_boundary) >= 0
}

/// Whether the displayed text contains no machine-generated sentence.
///
/// `shown_len` is the total number of displayed sentences (prompt plus
/// the capped continuation).
pub fn is_all_human(true_boundary: i32, shown_len: usize) -> bool {
    true_boundary >= 0 && true_boundary as usize >= shown_len
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_hit_has_zero_distance() {
        // true_boundary=5 (five human sentences), guess=4 (0-indexed fifth
        // sentence is the first machine one).
        assert_eq!(distance(4, 5), 0);
        assert!(is_exactly_correct(4, 5));
        assert!(is_past_boundary(4, 5));
    }

    #[test]
    fn late_guess_is_past_boundary() {
        assert_eq!(distance(6, 5), 2);
        assert!(!is_exactly_correct(6, 5));
        assert!(is_past_boundary(6, 5));
    }

    #[test]
    fn early_guess_is_negative_and_not_past() {
        assert_eq!(distance(1, 5), -3);
        assert!(!is_exactly_correct(1, 5));
        assert!(!is_past_boundary(1, 5));
    }

    #[test]
    fn one_past_the_boundary() {
        assert_eq!(distance(5, 5), 1);
        assert!(is_past_boundary(5, 5));
    }

    #[test]
    fn all_human_when_boundary_covers_display() {
        assert!(is_all_human(10, 10));
        assert!(is_all_human(12, 10));
        assert!(!is_all_human(9, 10));
    }

    #[test]
    fn negative_boundary_is_never_all_human() {
        assert!(!is_all_human(-1, 10));
    }
}
