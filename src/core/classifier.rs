use crate::domain::model::LetterCounts;
use unicode_general_category::{get_general_category, GeneralCategory};

const VOWELS: &str = "AEIOUaeiou";

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// 只有 L* 類別 (Lu, Ll, Lt, Lm, Lo) 算字母；組合記號、羅馬數字、圈字母不算
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

impl LetterCounts {
    /// 累計單一字元；非字母字元不影響任何計數器
    pub fn tally(&mut self, c: char) {
        if !is_letter(c) {
            return;
        }

        if is_vowel(c) {
            self.vowels += 1;
        } else {
            self.consonants += 1;
        }

        // 標題字母 (例如 ǅ) 既非大寫也非小寫
        if c.is_uppercase() {
            self.uppercase += 1;
        } else if c.is_lowercase() {
            self.lowercase += 1;
        }
    }
}

/// Single linear pass over `text`.
pub fn classify(text: &str) -> LetterCounts {
    let mut counts = LetterCounts::default();
    for c in text.chars() {
        counts.tally(c);
    }
    counts
}
