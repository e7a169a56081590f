pub mod tokenizer;

use lazy_static::lazy_static;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use tokenizer::tokenize;

lazy_static! {
    // Articles, conjunctions and short prepositions that title case keeps
    // lowercase unless they lead the name.
    static ref SMALL_WORDS: HashSet<&'static str> = [
        "a", "an", "the", "and", "as", "but", "for", "if", "nor", "or",
        "so", "yet", "at", "by", "in", "of", "off", "on", "per", "to",
        "up", "via",
    ]
    .into_iter()
    .collect();
}

/// The seven supported naming conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseStyle {
    Title,
    Pascal,
    Camel,
    Snake,
    Kebab,
    PascalSnake,
    PascalKebab,
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "title" => Ok(CaseStyle::Title),
            "pascal" => Ok(CaseStyle::Pascal),
            "camel" => Ok(CaseStyle::Camel),
            "snake" => Ok(CaseStyle::Snake),
            "kebab" => Ok(CaseStyle::Kebab),
            "pascal-snake" => Ok(CaseStyle::PascalSnake),
            "pascal-kebab" => Ok(CaseStyle::PascalKebab),
            _ => Err(format!(
                "Unknown case style: {} (expected title, pascal, camel, snake, kebab, pascal-snake or pascal-kebab)",
                s
            )),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStyle::Title => write!(f, "title"),
            CaseStyle::Pascal => write!(f, "pascal"),
            CaseStyle::Camel => write!(f, "camel"),
            CaseStyle::Snake => write!(f, "snake"),
            CaseStyle::Kebab => write!(f, "kebab"),
            CaseStyle::PascalSnake => write!(f, "pascal-snake"),
            CaseStyle::PascalKebab => write!(f, "pascal-kebab"),
        }
    }
}

/// Returned when a name tokenizes to nothing, e.g. it consists entirely of
/// delimiter characters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("name has no words to convert")]
pub struct EmptyNameError;

/// Join a token sequence into a single stem in the given style.
///
/// The sequence must be non-empty; a stem that tokenized to nothing yields
/// `EmptyNameError` rather than an empty or panicking render.
pub fn render(tokens: &[String], style: CaseStyle) -> Result<String, EmptyNameError> {
    if tokens.is_empty() {
        return Err(EmptyNameError);
    }

    let rendered = match style {
        CaseStyle::Title => tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                if index != 0 && SMALL_WORDS.contains(token.to_lowercase().as_str()) {
                    token.clone()
                } else {
                    capitalize(token)
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
        CaseStyle::Pascal => tokens.iter().map(|token| capitalize(token)).collect(),
        CaseStyle::Camel => tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                if index == 0 {
                    token.clone()
                } else {
                    capitalize(token)
                }
            })
            .collect(),
        CaseStyle::Snake => tokens.join("_"),
        CaseStyle::Kebab => tokens.join("-"),
        CaseStyle::PascalSnake => tokens
            .iter()
            .map(|token| capitalize(token))
            .collect::<Vec<_>>()
            .join("_"),
        CaseStyle::PascalKebab => tokens
            .iter()
            .map(|token| capitalize(token))
            .collect::<Vec<_>>()
            .join("-"),
    };

    Ok(rendered)
}

// Uppercases the first character only, so a preserved all-upper token keeps
// its interior casing.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|word| word.to_string()).collect()
    }

    #[test]
    fn test_title_case_keeps_small_words_lowercase() {
        assert_eq!(
            render(
                &tokens(&["this", "is", "an", "random", "example"]),
                CaseStyle::Title
            )
            .unwrap(),
            "This Is an Random Example"
        );
        assert_eq!(
            render(
                &tokens(&["an", "example", "starts", "with", "a", "short"]),
                CaseStyle::Title
            )
            .unwrap(),
            "An Example Starts With a Short"
        );
    }

    #[test]
    fn test_title_case_always_capitalizes_first_token() {
        assert_eq!(
            render(&tokens(&["an", "apple"]), CaseStyle::Title).unwrap(),
            "An Apple"
        );
    }

    #[test]
    fn test_pascal_case_concatenates_capitalized_tokens() {
        assert_eq!(
            render(
                &tokens(&["this", "is", "an", "random", "example"]),
                CaseStyle::Pascal
            )
            .unwrap(),
            "ThisIsAnRandomExample"
        );
        assert_eq!(
            render(
                &tokens(&["an", "example", "starts", "with", "a", "short"]),
                CaseStyle::Pascal
            )
            .unwrap(),
            "AnExampleStartsWithAShort"
        );
    }

    #[test]
    fn test_camel_case_leaves_first_token_untouched() {
        assert_eq!(
            render(
                &tokens(&["this", "is", "an", "random", "example"]),
                CaseStyle::Camel
            )
            .unwrap(),
            "thisIsAnRandomExample"
        );
        assert_eq!(
            render(
                &tokens(&["an", "example", "starts", "with", "a", "short"]),
                CaseStyle::Camel
            )
            .unwrap(),
            "anExampleStartsWithAShort"
        );
    }

    #[test]
    fn test_snake_and_kebab_join_without_case_change() {
        let words = tokens(&["this", "is", "an", "random", "example"]);
        assert_eq!(
            render(&words, CaseStyle::Snake).unwrap(),
            "this_is_an_random_example"
        );
        assert_eq!(
            render(&words, CaseStyle::Kebab).unwrap(),
            "this-is-an-random-example"
        );
    }

    #[test]
    fn test_pascal_snake_and_pascal_kebab() {
        let words = tokens(&["this", "is", "an", "random", "example"]);
        assert_eq!(
            render(&words, CaseStyle::PascalSnake).unwrap(),
            "This_Is_An_Random_Example"
        );
        assert_eq!(
            render(&words, CaseStyle::PascalKebab).unwrap(),
            "This-Is-An-Random-Example"
        );
    }

    #[test]
    fn test_preserved_tokens_keep_interior_casing() {
        let words = tokens(&["go", "IS", "fun"]);
        assert_eq!(render(&words, CaseStyle::Pascal).unwrap(), "GoISFun");
        assert_eq!(render(&words, CaseStyle::Title).unwrap(), "Go IS Fun");
        assert_eq!(render(&words, CaseStyle::Kebab).unwrap(), "go-IS-fun");
    }

    #[test]
    fn test_empty_token_sequence_is_an_error() {
        assert_eq!(render(&[], CaseStyle::Snake), Err(EmptyNameError));
    }

    #[test]
    fn test_round_trip_through_snake_and_kebab() {
        let original = tokenize("This-is_an_random-Name", false);

        let snake = render(&original, CaseStyle::Snake).unwrap();
        assert_eq!(tokenize(&snake, false), original);

        let kebab = render(&original, CaseStyle::Kebab).unwrap();
        assert_eq!(tokenize(&kebab, false), original);
    }

    #[test]
    fn test_case_style_parses_all_seven_names() {
        for name in [
            "title",
            "pascal",
            "camel",
            "snake",
            "kebab",
            "pascal-snake",
            "pascal-kebab",
        ] {
            let style: CaseStyle = name.parse().unwrap();
            assert_eq!(style.to_string(), name);
        }

        assert!("studly".parse::<CaseStyle>().is_err());
    }
}
