/// Cut `symbols` into consecutive beats of `width`, keeping a short last beat
pub(super) fn chunk(symbols: &[char], width: usize) -> Vec<String> {
    symbols
        .chunks(width)
        .map(|beat| beat.iter().collect())
        .collect()
}

#[cfg(test)]
mod flat_tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(chunk(&[], 4).is_empty());
    }

    #[test]
    fn test_exact_multiple() {
        assert_eq!(chunk(&chars("abcdefgh"), 4), vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_short_tail_kept() {
        assert_eq!(chunk(&chars("abcde"), 4), vec!["abcd", "e"]);
    }

    #[test]
    fn test_width_larger_than_input() {
        assert_eq!(chunk(&chars("abc"), 128), vec!["abc"]);
    }
}
