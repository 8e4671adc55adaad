use vocab_protocol::{Inflections, PartOfSpeech};

use crate::syllables::count_syllables;
use crate::tables::{irregular_degrees, irregular_past, is_uncountable};
use crate::Pluralize;

/// Whether the chain should keep looking after a rule ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// One step of the inflection cascade. Rules that do not apply to a
/// lemma/tag pair return `Flow::Continue` without touching `forms`.
pub trait InflectionRule {
    fn name(&self) -> &'static str;
    fn apply(&self, lemma: &str, pos: PartOfSpeech, forms: &mut Inflections) -> Flow;
}

fn is_plain_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn ends_with_consonant_y(word: &str) -> bool {
    let mut rev = word.chars().rev();
    matches!((rev.next(), rev.next()), (Some('y'), Some(c)) if !is_plain_vowel(c))
}

/// consonant-vowel-consonant ending, where the final consonant can double
/// ("big" -> "bigg-").
fn ends_cvc(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    if n <= 2 {
        return false;
    }
    let (c1, v, c2) = (chars[n - 3], chars[n - 2], chars[n - 1]);
    !is_plain_vowel(c1) && is_plain_vowel(v) && !is_plain_vowel(c2) && !matches!(c2, 'w' | 'x' | 'y')
}

pub struct UncountableNoun;

impl InflectionRule for UncountableNoun {
    fn name(&self) -> &'static str {
        "uncountable-noun"
    }

    fn apply(&self, lemma: &str, pos: PartOfSpeech, forms: &mut Inflections) -> Flow {
        if pos != PartOfSpeech::Noun || !is_uncountable(lemma) {
            return Flow::Continue;
        }
        forms.plural = Some(String::new());
        Flow::Stop
    }
}

pub struct NounPlural {
    pluralizer: Box<dyn Pluralize>,
}

impl NounPlural {
    pub fn new(pluralizer: Box<dyn Pluralize>) -> Self {
        Self { pluralizer }
    }
}

impl InflectionRule for NounPlural {
    fn name(&self) -> &'static str {
        "noun-plural"
    }

    fn apply(&self, lemma: &str, pos: PartOfSpeech, forms: &mut Inflections) -> Flow {
        if pos != PartOfSpeech::Noun {
            return Flow::Continue;
        }
        let plural = self
            .pluralizer
            .plural(lemma)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| format!("{lemma}s"));
        forms.plural = Some(plural);
        Flow::Stop
    }
}

pub struct IrregularVerb;

impl InflectionRule for IrregularVerb {
    fn name(&self) -> &'static str {
        "irregular-verb"
    }

    fn apply(&self, lemma: &str, pos: PartOfSpeech, forms: &mut Inflections) -> Flow {
        if pos != PartOfSpeech::Verb {
            return Flow::Continue;
        }
        match irregular_past(lemma) {
            Some(past) => {
                forms.past_tense = Some(past.to_string());
                Flow::Stop
            }
            None => Flow::Continue,
        }
    }
}

pub struct RegularPastTense;

impl InflectionRule for RegularPastTense {
    fn name(&self) -> &'static str {
        "regular-past"
    }

    fn apply(&self, lemma: &str, pos: PartOfSpeech, forms: &mut Inflections) -> Flow {
        if pos != PartOfSpeech::Verb || lemma.is_empty() {
            return Flow::Continue;
        }
        let past = if lemma.ends_with('e') {
            format!("{lemma}d")
        } else if ends_with_consonant_y(lemma) {
            format!("{}ied", &lemma[..lemma.len() - 1])
        } else {
            format!("{lemma}ed")
        };
        forms.past_tense = Some(past);
        Flow::Stop
    }
}

pub struct IrregularAdjective;

impl InflectionRule for IrregularAdjective {
    fn name(&self) -> &'static str {
        "irregular-adjective"
    }

    fn apply(&self, lemma: &str, pos: PartOfSpeech, forms: &mut Inflections) -> Flow {
        if pos != PartOfSpeech::Adj {
            return Flow::Continue;
        }
        match irregular_degrees(lemma) {
            Some((comparative, superlative)) => {
                forms.comparative = Some(comparative.to_string());
                forms.superlative = Some(superlative.to_string());
                Flow::Stop
            }
            None => Flow::Continue,
        }
    }
}

/// Comparative and superlative chosen by syllable count.
pub struct GradableAdjective;

impl GradableAdjective {
    fn degrees(lemma: &str) -> (String, String) {
        let suffixed = |stem: &str, er: &str, est: &str| (format!("{stem}{er}"), format!("{stem}{est}"));
        let periphrastic = || (format!("more {lemma}"), format!("most {lemma}"));

        match count_syllables(lemma) {
            0 | 1 => {
                if lemma.ends_with('e') {
                    suffixed(lemma, "r", "st")
                } else if ends_cvc(lemma) {
                    let last = lemma.chars().last().unwrap_or_default();
                    let doubled = format!("{lemma}{last}");
                    suffixed(&doubled, "er", "est")
                } else {
                    suffixed(lemma, "er", "est")
                }
            }
            2 => {
                if let Some(stem) = lemma.strip_suffix('y') {
                    suffixed(stem, "ier", "iest")
                } else if lemma.ends_with("le") {
                    suffixed(lemma, "r", "st")
                } else if lemma.ends_with("er") || lemma.ends_with("ow") {
                    suffixed(lemma, "er", "est")
                } else {
                    periphrastic()
                }
            }
            _ => periphrastic(),
        }
    }
}

impl InflectionRule for GradableAdjective {
    fn name(&self) -> &'static str {
        "gradable-adjective"
    }

    fn apply(&self, lemma: &str, pos: PartOfSpeech, forms: &mut Inflections) -> Flow {
        if pos != PartOfSpeech::Adj || lemma.is_empty() {
            return Flow::Continue;
        }
        let (comparative, superlative) = Self::degrees(lemma);
        forms.comparative = Some(comparative);
        forms.superlative = Some(superlative);
        Flow::Stop
    }
}
