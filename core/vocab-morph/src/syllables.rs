fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimate syllables by counting vowel groups.
///
/// A trailing "e" is treated as silent, except in a consonant + "le" ending
/// ("simple", "gentle") where it carries its own syllable. Never returns 0.
pub fn count_syllables(word: &str) -> usize {
    let chars: Vec<char> = word.to_lowercase().chars().filter(|c| c.is_alphabetic()).collect();
    if chars.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut previous_vowel = false;
    for &c in &chars {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            count += 1;
        }
        previous_vowel = vowel;
    }

    let n = chars.len();
    if chars[n - 1] == 'e' && count > 1 {
        count -= 1;
    }
    if n > 2 && chars[n - 2] == 'l' && chars[n - 1] == 'e' && !is_vowel(chars[n - 3]) {
        count += 1;
    }

    count.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_syllables() {
        for word in ["big", "large", "nice", "fast", "blue", "cool"] {
            assert_eq!(count_syllables(word), 1, "{word}");
        }
    }

    #[test]
    fn test_two_syllables() {
        for word in ["happy", "simple", "gentle", "narrow", "clever"] {
            assert_eq!(count_syllables(word), 2, "{word}");
        }
    }

    #[test]
    fn test_long_words() {
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("interesting"), 4);
        assert_eq!(count_syllables(""), 0);
    }
}
