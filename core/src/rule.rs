//! Word adjacency: two words are neighbors when exactly one character
//! substitution, insertion, or deletion turns one into the other.

/// True if `w1` and `w2` differ by a single character edit.
///
/// Equal words are never adjacent. Comparison is per Unicode scalar value;
/// ASCII pairs compare bytes directly without allocating.
pub fn is_adjacent_words(w1: &str, w2: &str) -> bool {
    if w1 == w2 {
        return false;
    }
    if w1.is_ascii() && w2.is_ascii() {
        return one_edit_apart(w1.as_bytes(), w2.as_bytes());
    }
    let a: Vec<char> = w1.chars().collect();
    let b: Vec<char> = w2.chars().collect();
    one_edit_apart(&a, &b)
}

/// True if `a` and `b` are exactly one substitution, insertion, or deletion apart.
///
/// For lengths differing by one, deletion is tried at the first mismatch and
/// the whole remaining suffix must then line up. If any deletion position
/// works, the first mismatch works too, so one check covers every alignment.
pub fn one_edit_apart<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    match a.len().abs_diff(b.len()) {
        0 => a.iter().zip(b).filter(|(x, y)| x != y).take(2).count() == 1,
        1 => {
            let (long, short) = if a.len() > b.len() { (a, b) } else { (b, a) };
            let p = long
                .iter()
                .zip(short)
                .position(|(x, y)| x != y)
                .unwrap_or(short.len());
            long[p + 1..] == short[p..]
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution() {
        assert!(is_adjacent_words("CAT", "RAT"));
        assert!(is_adjacent_words("CAT", "COT"));
        assert!(is_adjacent_words("CAT", "CAB"));
        assert!(!is_adjacent_words("CAT", "DOG"));
        assert!(!is_adjacent_words("CAT", "CUB"));
    }

    #[test]
    fn test_insertion_and_deletion() {
        assert!(is_adjacent_words("CAT", "CATS"));
        assert!(is_adjacent_words("CATS", "CAT"));
        assert!(is_adjacent_words("CAT", "SCAT"));
        assert!(is_adjacent_words("CAT", "CHAT"));
        assert!(is_adjacent_words("HEAT", "WHEAT"));
        assert!(!is_adjacent_words("CAT", "CHATS"));
    }

    #[test]
    fn test_equal_words_not_adjacent() {
        assert!(!is_adjacent_words("CAT", "CAT"));
        assert!(!is_adjacent_words("", ""));
    }

    #[test]
    fn test_length_gap_too_large() {
        assert!(!is_adjacent_words("A", "ABC"));
        assert!(!is_adjacent_words("WHEAT", "HAT"));
    }

    #[test]
    fn test_single_char_and_empty() {
        assert!(is_adjacent_words("A", "AC"));
        assert!(is_adjacent_words("A", "B"));
        assert!(is_adjacent_words("", "A"));
    }

    #[test]
    fn test_deletion_beyond_first_mismatch() {
        assert!(is_adjacent_words("AAB", "AB"));
        assert!(is_adjacent_words("AB", "AAB"));
        assert!(is_adjacent_words("ABB", "AB"));
        assert!(is_adjacent_words("BANANA", "BANANNA"));
        // one deletion realigns the prefix but the suffix still differs
        assert!(!is_adjacent_words("ABCDE", "ACDX"));
        assert!(!is_adjacent_words("AXBY", "ABZ"));
    }

    #[test]
    fn test_two_substitutions() {
        assert!(!is_adjacent_words("NEAT", "HEAD"));
        assert!(!is_adjacent_words("ABCD", "ABDC"));
    }

    #[test]
    fn test_non_ascii() {
        assert!(is_adjacent_words("ÉTÉ", "ÉTÉS"));
        assert!(is_adjacent_words("ÇA", "ÇÀ"));
        // "É" is two bytes but one character
        assert!(is_adjacent_words("É", "E"));
        assert!(!is_adjacent_words("ÉÉ", "EE"));
    }

    #[test]
    fn test_symmetric() {
        let words = [
            "CAT", "CATS", "AAB", "AB", "HEAT", "WHEAT", "NEAT", "KIT", "A", "",
        ];
        for a in words {
            for b in words {
                assert_eq!(is_adjacent_words(a, b), is_adjacent_words(b, a), "{a}/{b}");
            }
        }
    }
}
