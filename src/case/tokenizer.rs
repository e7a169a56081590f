// Each delimiter collapses onto the next one in the cascade; the space
// split must always come last so every delimiter type funnels into it.
const DELIMITER_CASCADE: [(char, char); 3] = [('-', '_'), ('_', ','), (',', ' ')];

/// Split a file-name stem into an ordered sequence of word tokens.
///
/// Words are separated by `-`, `_`, `,` or space in any combination, and
/// whitespace around each piece is trimmed. Empty pieces produced by
/// adjacent delimiters are dropped. Tokens are lowercased unless
/// `keep_upper` is set and the token equals its own upper-cased form, in
/// which case it is preserved verbatim.
pub fn tokenize(stem: &str, keep_upper: bool) -> Vec<String> {
    let mut name = stem.to_string();

    for (from, to) in DELIMITER_CASCADE {
        name = name
            .split(from)
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(&to.to_string());
    }

    name.split(' ')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            if keep_upper && piece == piece.to_uppercase() {
                piece.to_string()
            } else {
                piece.to_lowercase()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_delimiters_without_keep_upper() {
        let inputs = [
            "This-is_an_random-Name",
            "This is - an Random Name",
            "this_is-an_random-Name",
            "This_is_an-Random_Name",
            "This is AN random, name",
        ];

        for input in inputs {
            assert_eq!(
                tokenize(input, false),
                vec!["this", "is", "an", "random", "name"],
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_mixed_delimiters_with_keep_upper() {
        let inputs = [
            "this-is_an_random-NAME",
            "This is - an Random NAME",
            "this_is-an_random-NAME",
            "This_is_an-Random_NAME",
            "This is an random, NAME",
        ];

        for input in inputs {
            assert_eq!(
                tokenize(input, true),
                vec!["this", "is", "an", "random", "NAME"],
                "input: {input:?}"
            );
        }
    }

    #[test]
    fn test_each_delimiter_splits_alone() {
        assert_eq!(tokenize("one-two-three", false), vec!["one", "two", "three"]);
        assert_eq!(tokenize("one_two_three", false), vec!["one", "two", "three"]);
        assert_eq!(tokenize("one,two,three", false), vec!["one", "two", "three"]);
        assert_eq!(tokenize("one two three", false), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_adjacent_delimiters_collapse() {
        assert_eq!(tokenize("a--b", false), vec!["a", "b"]);
        assert_eq!(tokenize("a-_,b", false), vec!["a", "b"]);
        assert_eq!(tokenize("a , _ - b", false), vec!["a", "b"]);
        assert_eq!(tokenize("  padded -  name  ", false), vec!["padded", "name"]);
    }

    #[test]
    fn test_delimiter_only_stem_yields_no_tokens() {
        assert!(tokenize("", false).is_empty());
        assert!(tokenize("---", false).is_empty());
        assert!(tokenize("_,- ", true).is_empty());
    }

    #[test]
    fn test_tokens_with_no_letters_count_as_upper() {
        assert_eq!(
            tokenize("version-2_FINAL", true),
            vec!["version", "2", "FINAL"]
        );
        assert_eq!(
            tokenize("version-2_FINAL", false),
            vec!["version", "2", "final"]
        );
    }

    #[test]
    fn test_single_character_tokens() {
        assert_eq!(
            tokenize("x-RAY of a CT", true),
            vec!["x", "RAY", "of", "a", "CT"]
        );
    }
}
