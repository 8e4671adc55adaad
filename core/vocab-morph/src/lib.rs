pub mod rules;
pub mod syllables;
pub mod tables;

#[cfg(feature = "plural")]
pub mod plural;

use tracing::{debug, warn};
use vocab_protocol::{Inflections, PartOfSpeech};

use crate::rules::{
    Flow, GradableAdjective, InflectionRule, IrregularAdjective, IrregularVerb, NounPlural,
    RegularPastTense, UncountableNoun,
};

/// Anything that can turn a singular noun into its plural.
pub trait Pluralize {
    fn plural(&self, word: &str) -> Option<String>;
}

/// The pluralizer compiled into this build, if any.
pub fn default_pluralizer() -> Option<Box<dyn Pluralize>> {
    #[cfg(feature = "plural")]
    {
        Some(Box::new(plural::EnglishPluralizer::new()))
    }
    #[cfg(not(feature = "plural"))]
    {
        None
    }
}

/// Derives plural, past-tense and degree forms from an ordered rule chain.
///
/// Construct it once at startup. Without a pluralizer the whole feature is
/// switched off: one warning is logged here and `generate` returns empty
/// inflections for every lemma.
pub struct MorphologyGenerator {
    rules: Vec<Box<dyn InflectionRule>>,
}

impl MorphologyGenerator {
    pub fn new(pluralizer: Option<Box<dyn Pluralize>>) -> Self {
        let Some(pluralizer) = pluralizer else {
            warn!("no pluralizer available: inflection generation is disabled");
            return Self::disabled();
        };

        Self {
            rules: vec![
                Box::new(UncountableNoun),
                Box::new(NounPlural::new(pluralizer)),
                Box::new(IrregularVerb),
                Box::new(RegularPastTense),
                Box::new(IrregularAdjective),
                Box::new(GradableAdjective),
            ],
        }
    }

    /// Uses whatever `default_pluralizer` provides.
    pub fn standard() -> Self {
        Self::new(default_pluralizer())
    }

    pub fn disabled() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn is_enabled(&self) -> bool {
        !self.rules.is_empty()
    }

    /// Append a rule at the end of the chain. Ignored while disabled.
    pub fn push_rule(&mut self, rule: Box<dyn InflectionRule>) {
        if self.is_enabled() {
            self.rules.push(rule);
        }
    }

    pub fn generate(&self, lemma: &str, pos: PartOfSpeech) -> Inflections {
        let mut forms = Inflections::default();
        let lemma = lemma.trim();
        if lemma.is_empty() {
            return forms;
        }

        for rule in &self.rules {
            if rule.apply(lemma, pos, &mut forms) == Flow::Stop {
                debug!(lemma, rule = rule.name(), "inflection rule applied");
                break;
            }
        }
        forms
    }
}

impl Default for MorphologyGenerator {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct NoPlural;

    impl Pluralize for NoPlural {
        fn plural(&self, _word: &str) -> Option<String> {
            None
        }
    }

    fn generator() -> MorphologyGenerator {
        MorphologyGenerator::new(Some(Box::new(NoPlural)))
    }

    #[test]
    fn test_reference_forms() {
        let morph = MorphologyGenerator::standard();

        let big = morph.generate("big", PartOfSpeech::Adj);
        assert_eq!(big.comparative.as_deref(), Some("bigger"));
        assert_eq!(big.superlative.as_deref(), Some("biggest"));

        let happy = morph.generate("happy", PartOfSpeech::Adj);
        assert_eq!(happy.comparative.as_deref(), Some("happier"));
        assert_eq!(happy.superlative.as_deref(), Some("happiest"));

        assert_eq!(morph.generate("go", PartOfSpeech::Verb).past_tense.as_deref(), Some("went"));
        assert_eq!(morph.generate("water", PartOfSpeech::Noun).plural.as_deref(), Some(""));
        assert_eq!(morph.generate("good", PartOfSpeech::Adj).comparative.as_deref(), Some("better"));
    }

    #[test]
    fn test_plural_falls_back_to_s() {
        let morph = generator();
        assert_eq!(morph.generate("bus", PartOfSpeech::Noun).plural.as_deref(), Some("buss"));
    }

    #[test]
    fn test_untagged_parts_of_speech_get_nothing() {
        let morph = generator();
        assert!(morph.generate("quickly", PartOfSpeech::Adv).is_empty());
        assert!(morph.generate("hong kong", PartOfSpeech::Propn).is_empty());
        assert!(morph.generate("the bus stop", PartOfSpeech::NounPhrase).is_empty());
    }

    #[test]
    fn test_disabled_generator_is_empty() {
        let morph = MorphologyGenerator::new(None);
        assert!(!morph.is_enabled());
        assert!(morph.generate("go", PartOfSpeech::Verb).is_empty());
        assert!(morph.generate("water", PartOfSpeech::Noun).is_empty());
    }

    #[test]
    fn test_appended_rule_runs_last() {
        struct AdverbDegree;

        impl InflectionRule for AdverbDegree {
            fn name(&self) -> &'static str {
                "adverb-degree"
            }

            fn apply(&self, lemma: &str, pos: PartOfSpeech, forms: &mut Inflections) -> Flow {
                if pos != PartOfSpeech::Adv {
                    return Flow::Continue;
                }
                forms.comparative = Some(format!("more {lemma}"));
                Flow::Stop
            }
        }

        let mut morph = generator();
        morph.push_rule(Box::new(AdverbDegree));
        let forms = morph.generate("quickly", PartOfSpeech::Adv);
        assert_eq!(forms.comparative.as_deref(), Some("more quickly"));
    }

    proptest! {
        #[test]
        fn test_regular_past_keeps_stem(stem in "[b-df-hj-np-tv-xz]{1,3}[aiou][b-df-hj-np-tv-xz]") {
            // none of these generated words are in the irregular table
            prop_assume!(tables::irregular_past(&stem).is_none());
            let past = generator().generate(&stem, PartOfSpeech::Verb).past_tense.unwrap();
            prop_assert!(past.starts_with(&stem));
            prop_assert!(past.ends_with("ed"));
        }

        #[test]
        fn test_adjectives_always_get_both_degrees(word in "[a-z]{2,12}") {
            let forms = generator().generate(&word, PartOfSpeech::Adj);
            prop_assert!(forms.comparative.is_some());
            prop_assert!(forms.superlative.is_some());
            prop_assert!(forms.plural.is_none());
        }
    }
}
