//! Default metrics provider built on simple text counts.

use super::easy_words::is_familiar;
use super::MetricsProvider;

/// Counts every formula is derived from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextCounts {
    pub sentences: usize,
    pub words: usize,
    /// Alphanumeric characters inside words.
    pub characters: usize,
    /// Alphabetic characters inside words.
    pub letters: usize,
    pub syllables: usize,
    /// Words of three or more syllables.
    pub polysyllables: usize,
    /// Words of two or more syllables that are not on the familiar list.
    pub difficult_words: usize,
}

impl TextCounts {
    pub fn from_text(text: &str) -> Self {
        let mut counts = TextCounts::default();
        let mut open_sentence = false;

        for token in text.split_whitespace() {
            let word = token.trim_matches(|c: char| !c.is_alphanumeric());
            if word.is_empty() {
                continue;
            }

            counts.words += 1;
            counts.characters += word.chars().filter(|c| c.is_alphanumeric()).count();
            counts.letters += word.chars().filter(|c| c.is_alphabetic()).count();

            let syllables = count_syllables(word);
            counts.syllables += syllables;
            if syllables >= 3 {
                counts.polysyllables += 1;
            }
            if syllables >= 2 && !is_familiar(&word.to_lowercase()) {
                counts.difficult_words += 1;
            }

            open_sentence = true;
            if ends_sentence(token) {
                counts.sentences += 1;
                open_sentence = false;
            }
        }

        if open_sentence {
            counts.sentences += 1;
        }
        counts
    }

    fn average_sentence_length(&self) -> f64 {
        ratio(self.words, self.sentences)
    }
}

fn ends_sentence(token: &str) -> bool {
    token
        .trim_end_matches(|c: char| matches!(c, '"' | '\'' | ')' | ']'))
        .ends_with(['.', '!', '?'])
}

/// `numerator / denominator`, or 0 when there is nothing to divide by.
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Estimate syllables from vowel groups, discounting a silent final `e`
/// and a silent `-ed`.
pub fn count_syllables(word: &str) -> usize {
    let word: String = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();
    if word.is_empty() {
        return 0;
    }
    if word.len() <= 3 {
        return 1;
    }

    let is_vowel = |c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
    let mut groups = 0;
    let mut previous_vowel = false;
    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !previous_vowel {
            groups += 1;
        }
        previous_vowel = vowel;
    }

    let silent_e = word.ends_with('e') && !word.ends_with("le") && !word.ends_with("ee");
    let silent_ed = word.ends_with("ed") && !word.ends_with("ted") && !word.ends_with("ded");
    if groups > 1 && (silent_e || silent_ed) {
        groups -= 1;
    }

    groups.max(1)
}

/// Standard readability formulas over [`TextCounts`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextStatistics;

impl MetricsProvider for TextStatistics {
    fn flesch_reading_ease(&self, text: &str) -> f64 {
        let c = TextCounts::from_text(text);
        206.835 - 1.015 * c.average_sentence_length() - 84.6 * ratio(c.syllables, c.words)
    }

    fn gunning_fog(&self, text: &str) -> f64 {
        let c = TextCounts::from_text(text);
        0.4 * (c.average_sentence_length() + 100.0 * ratio(c.polysyllables, c.words))
    }

    fn automated_readability_index(&self, text: &str) -> f64 {
        let c = TextCounts::from_text(text);
        4.71 * ratio(c.characters, c.words) + 0.5 * c.average_sentence_length() - 21.43
    }

    fn dale_chall_readability_score(&self, text: &str) -> f64 {
        let c = TextCounts::from_text(text);
        let difficult_pct = 100.0 * ratio(c.difficult_words, c.words);
        let score = 0.1579 * difficult_pct + 0.0496 * c.average_sentence_length();
        if difficult_pct > 5.0 {
            score + 3.6365
        } else {
            score
        }
    }

    fn coleman_liau_index(&self, text: &str) -> f64 {
        let c = TextCounts::from_text(text);
        // Letters and sentences per hundred words; undefined without words.
        let words = c.words as f64;
        let letters = c.letters as f64 / words * 100.0;
        let sentences = c.sentences as f64 / words * 100.0;
        0.0588 * letters - 0.296 * sentences - 15.8
    }
}
