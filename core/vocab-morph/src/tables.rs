//! Fixed lookup tables. Every table is sorted by its first column so lookups
//! can binary-search; `test_tables_are_sorted` guards the ordering.

/// Nouns that take no plural.
pub static UNCOUNTABLE_NOUNS: &[&str] = &[
    "advice",
    "air",
    "baggage",
    "bread",
    "electricity",
    "equipment",
    "evidence",
    "feedback",
    "fun",
    "furniture",
    "health",
    "homework",
    "housework",
    "information",
    "knowledge",
    "litter",
    "luggage",
    "milk",
    "money",
    "music",
    "news",
    "pollution",
    "progress",
    "research",
    "rice",
    "scenery",
    "software",
    "traffic",
    "transport",
    "water",
    "weather",
    "work",
];

/// (lemma, past tense)
pub static IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("arise", "arose"),
    ("be", "was"),
    ("bear", "bore"),
    ("beat", "beat"),
    ("become", "became"),
    ("begin", "began"),
    ("bend", "bent"),
    ("bet", "bet"),
    ("bind", "bound"),
    ("bite", "bit"),
    ("bleed", "bled"),
    ("blow", "blew"),
    ("break", "broke"),
    ("breed", "bred"),
    ("bring", "brought"),
    ("build", "built"),
    ("burst", "burst"),
    ("buy", "bought"),
    ("catch", "caught"),
    ("choose", "chose"),
    ("come", "came"),
    ("cost", "cost"),
    ("creep", "crept"),
    ("cut", "cut"),
    ("deal", "dealt"),
    ("dig", "dug"),
    ("do", "did"),
    ("draw", "drew"),
    ("drink", "drank"),
    ("drive", "drove"),
    ("eat", "ate"),
    ("fall", "fell"),
    ("feed", "fed"),
    ("feel", "felt"),
    ("fight", "fought"),
    ("find", "found"),
    ("flee", "fled"),
    ("fly", "flew"),
    ("forbid", "forbade"),
    ("forget", "forgot"),
    ("forgive", "forgave"),
    ("freeze", "froze"),
    ("get", "got"),
    ("give", "gave"),
    ("go", "went"),
    ("grow", "grew"),
    ("hang", "hung"),
    ("have", "had"),
    ("hear", "heard"),
    ("hide", "hid"),
    ("hit", "hit"),
    ("hold", "held"),
    ("hurt", "hurt"),
    ("keep", "kept"),
    ("know", "knew"),
    ("lay", "laid"),
    ("lead", "led"),
    ("leave", "left"),
    ("lend", "lent"),
    ("let", "let"),
    ("lie", "lay"),
    ("light", "lit"),
    ("lose", "lost"),
    ("make", "made"),
    ("mean", "meant"),
    ("meet", "met"),
    ("pay", "paid"),
    ("put", "put"),
    ("quit", "quit"),
    ("read", "read"),
    ("ride", "rode"),
    ("ring", "rang"),
    ("rise", "rose"),
    ("run", "ran"),
    ("say", "said"),
    ("see", "saw"),
    ("seek", "sought"),
    ("sell", "sold"),
    ("send", "sent"),
    ("set", "set"),
    ("shake", "shook"),
    ("shine", "shone"),
    ("shoot", "shot"),
    ("show", "showed"),
    ("shut", "shut"),
    ("sing", "sang"),
    ("sink", "sank"),
    ("sit", "sat"),
    ("sleep", "slept"),
    ("slide", "slid"),
    ("speak", "spoke"),
    ("spend", "spent"),
    ("spread", "spread"),
    ("stand", "stood"),
    ("steal", "stole"),
    ("stick", "stuck"),
    ("sting", "stung"),
    ("strike", "struck"),
    ("swear", "swore"),
    ("sweep", "swept"),
    ("swim", "swam"),
    ("swing", "swung"),
    ("take", "took"),
    ("teach", "taught"),
    ("tear", "tore"),
    ("tell", "told"),
    ("think", "thought"),
    ("throw", "threw"),
    ("understand", "understood"),
    ("wake", "woke"),
    ("wear", "wore"),
    ("win", "won"),
    ("write", "wrote"),
];

/// (lemma, comparative, superlative)
pub static IRREGULAR_ADJECTIVES: &[(&str, &str, &str)] = &[
    ("bad", "worse", "worst"),
    ("far", "further", "furthest"),
    ("good", "better", "best"),
    ("ill", "worse", "worst"),
    ("little", "less", "least"),
    ("many", "more", "most"),
    ("much", "more", "most"),
    ("well", "better", "best"),
];

pub fn is_uncountable(lemma: &str) -> bool {
    UNCOUNTABLE_NOUNS.binary_search(&lemma).is_ok()
}

pub fn irregular_past(lemma: &str) -> Option<&'static str> {
    IRREGULAR_VERBS
        .binary_search_by(|(base, _)| (*base).cmp(lemma))
        .ok()
        .map(|i| IRREGULAR_VERBS[i].1)
}

pub fn irregular_degrees(lemma: &str) -> Option<(&'static str, &'static str)> {
    IRREGULAR_ADJECTIVES
        .binary_search_by(|(base, _, _)| (*base).cmp(lemma))
        .ok()
        .map(|i| (IRREGULAR_ADJECTIVES[i].1, IRREGULAR_ADJECTIVES[i].2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted() {
        assert!(UNCOUNTABLE_NOUNS.windows(2).all(|w| w[0] < w[1]));
        assert!(IRREGULAR_VERBS.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(IRREGULAR_ADJECTIVES.windows(2).all(|w| w[0].0 < w[1].0));
    }

    #[test]
    fn test_lookups() {
        assert_eq!(irregular_past("go"), Some("went"));
        assert_eq!(irregular_past("walk"), None);
        assert_eq!(irregular_degrees("good"), Some(("better", "best")));
        assert!(is_uncountable("water"));
        assert!(!is_uncountable("cat"));
    }
}
