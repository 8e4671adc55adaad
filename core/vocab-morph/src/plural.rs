//! Rule-based English noun pluralizer, compiled in with the `plural` feature.

use crate::Pluralize;

/// (noun, plural). Nouns that are already plural map to themselves.
static IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("analyses", "analyses"),
    ("analysis", "analyses"),
    ("cattle", "cattle"),
    ("child", "children"),
    ("children", "children"),
    ("crises", "crises"),
    ("crisis", "crises"),
    ("criteria", "criteria"),
    ("criterion", "criteria"),
    ("data", "data"),
    ("deer", "deer"),
    ("feet", "feet"),
    ("fish", "fish"),
    ("foot", "feet"),
    ("geese", "geese"),
    ("goose", "geese"),
    ("man", "men"),
    ("men", "men"),
    ("mice", "mice"),
    ("mouse", "mice"),
    ("people", "people"),
    ("person", "people"),
    ("phenomena", "phenomena"),
    ("phenomenon", "phenomena"),
    ("police", "police"),
    ("sheep", "sheep"),
    ("species", "species"),
    ("teeth", "teeth"),
    ("tooth", "teeth"),
    ("woman", "women"),
    ("women", "women"),
];

/// "-man" words that are not compounds of "man".
static REGULAR_MAN: &[&str] = &["caiman", "german", "human", "roman", "shaman"];

/// Words ending in "f"/"fe" that switch to "ves".
static F_TO_VES: &[&str] = &[
    "calf", "half", "knife", "leaf", "life", "loaf", "self", "shelf", "thief", "wife", "wolf",
];

/// Words ending in consonant + "o" that take "es".
static O_TO_OES: &[&str] = &["echo", "hero", "potato", "tomato", "veto"];

#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishPluralizer;

impl EnglishPluralizer {
    pub fn new() -> Self {
        Self
    }
}

fn ends_with_consonant_y(word: &str) -> bool {
    let mut rev = word.chars().rev();
    matches!(
        (rev.next(), rev.next()),
        (Some('y'), Some(c)) if !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
    )
}

impl Pluralize for EnglishPluralizer {
    fn plural(&self, word: &str) -> Option<String> {
        let word = word.trim();
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            return None;
        }
        let lower = word.to_lowercase();

        if let Ok(i) = IRREGULAR_PLURALS.binary_search_by(|(s, _)| (*s).cmp(lower.as_str())) {
            return Some(IRREGULAR_PLURALS[i].1.to_string());
        }
        // compound heads: "policeman" -> "policemen"
        if lower.len() > 3 && lower.ends_with("man") && !REGULAR_MAN.contains(&lower.as_str()) {
            return Some(format!("{}men", &lower[..lower.len() - 3]));
        }

        if F_TO_VES.contains(&lower.as_str()) {
            let stem = lower.strip_suffix("fe").or_else(|| lower.strip_suffix('f'))?;
            return Some(format!("{stem}ves"));
        }
        if O_TO_OES.contains(&lower.as_str()) {
            return Some(format!("{lower}es"));
        }
        if ["s", "x", "z", "ch", "sh"].iter().any(|s| lower.ends_with(s)) {
            return Some(format!("{lower}es"));
        }
        if ends_with_consonant_y(&lower) {
            return Some(format!("{}ies", &lower[..lower.len() - 1]));
        }
        Some(format!("{lower}s"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irregular_table_is_sorted() {
        assert!(IRREGULAR_PLURALS.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_plural_rules() {
        let p = EnglishPluralizer::new();
        assert_eq!(p.plural("cat").as_deref(), Some("cats"));
        assert_eq!(p.plural("bus").as_deref(), Some("buses"));
        assert_eq!(p.plural("church").as_deref(), Some("churches"));
        assert_eq!(p.plural("city").as_deref(), Some("cities"));
        assert_eq!(p.plural("day").as_deref(), Some("days"));
        assert_eq!(p.plural("knife").as_deref(), Some("knives"));
        assert_eq!(p.plural("leaf").as_deref(), Some("leaves"));
        assert_eq!(p.plural("child").as_deref(), Some("children"));
        assert_eq!(p.plural("people").as_deref(), Some("people"));
        assert_eq!(p.plural("children").as_deref(), Some("children"));
        assert_eq!(p.plural("women").as_deref(), Some("women"));
        assert_eq!(p.plural("data").as_deref(), Some("data"));
        assert_eq!(p.plural("policeman").as_deref(), Some("policemen"));
        assert_eq!(p.plural("human").as_deref(), Some("humans"));
        assert_eq!(p.plural("potato").as_deref(), Some("potatoes"));
    }

    #[test]
    fn test_rejects_non_words() {
        let p = EnglishPluralizer::new();
        assert_eq!(p.plural(""), None);
        assert_eq!(p.plural("bus stop"), None);
    }
}
