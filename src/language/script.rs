//! Unicode script classification.
//!
//! Only the scripts the detector and transliterator care about are
//! distinguished; everything else is [`Script::Other`]. Digits, punctuation
//! and whitespace are [`Script::Common`] and never count towards a script.

/// A writing system.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Script {
    Latin,
    Cyrillic,
    Greek,
    Han,
    Hiragana,
    Katakana,
    Hangul,
    Arabic,
    Hebrew,
    Thai,
    Devanagari,
    Georgian,
    Armenian,
    Common,
    Other,
}

impl Script {
    /// The script of a single character.
    pub fn of(c: char) -> Script {
        match c as u32 {
            0x0041..=0x005A | 0x0061..=0x007A => Script::Latin,
            0x00C0..=0x00D6 | 0x00D8..=0x00F6 | 0x00F8..=0x024F => Script::Latin,
            0x1E00..=0x1EFF | 0x2C60..=0x2C7F | 0xA720..=0xA7FF => Script::Latin,
            0xFF21..=0xFF3A | 0xFF41..=0xFF5A => Script::Latin,
            0x0370..=0x03FF | 0x1F00..=0x1FFF => Script::Greek,
            0x0400..=0x052F | 0x2DE0..=0x2DFF | 0xA640..=0xA69F => Script::Cyrillic,
            0x0530..=0x058F => Script::Armenian,
            0x0590..=0x05FF => Script::Hebrew,
            0x0600..=0x06FF | 0x0750..=0x077F | 0xFB50..=0xFDFF | 0xFE70..=0xFEFF => {
                Script::Arabic
            }
            0x0900..=0x097F => Script::Devanagari,
            0x0E00..=0x0E7F => Script::Thai,
            0x10A0..=0x10FF => Script::Georgian,
            0x1100..=0x11FF | 0x3130..=0x318F | 0xAC00..=0xD7AF => Script::Hangul,
            0x3040..=0x309F => Script::Hiragana,
            // prolonged sound mark is shared, count it with katakana
            0x30A0..=0x30FF | 0x31F0..=0x31FF | 0xFF66..=0xFF9F => Script::Katakana,
            0x3005 | 0x3007 => Script::Han,
            0x3400..=0x4DBF | 0x4E00..=0x9FFF | 0xF900..=0xFAFF | 0x20000..=0x2FA1F => {
                Script::Han
            }
            _ if c.is_alphabetic() => Script::Other,
            _ => Script::Common,
        }
    }

    /// Whether this is one of the Japanese syllabaries.
    pub fn is_kana(self) -> bool {
        matches!(self, Script::Hiragana | Script::Katakana)
    }

    /// Han and kana together: the scripts written without word spacing.
    pub fn is_cjk(self) -> bool {
        matches!(self, Script::Han | Script::Hiragana | Script::Katakana)
    }

    /// Whether characters of this script carry letters at all.
    pub fn is_letter_script(self) -> bool {
        !matches!(self, Script::Common)
    }
}

/// Letter counts per script over some text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptCounts {
    counts: Vec<(Script, usize)>,
}

impl ScriptCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count the letters of `text`.
    pub fn of(text: &str) -> Self {
        let mut counts = ScriptCounts::new();
        counts.add(text);
        counts
    }

    /// Add the letters of `text` to the tally.
    pub fn add(&mut self, text: &str) {
        for c in text.chars() {
            let script = Script::of(c);
            if !script.is_letter_script() {
                continue;
            }
            match self.counts.iter_mut().find(|(s, _)| *s == script) {
                Some((_, n)) => *n += 1,
                None => self.counts.push((script, 1)),
            }
        }
    }

    pub fn get(&self, script: Script) -> usize {
        self.counts
            .iter()
            .find(|(s, _)| *s == script)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }

    /// Total letters counted.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Letters in any script other than Latin.
    pub fn non_latin(&self) -> usize {
        self.total() - self.get(Script::Latin)
    }

    /// Letters in Han, hiragana or katakana.
    pub fn cjk(&self) -> usize {
        self.get(Script::Han) + self.get(Script::Hiragana) + self.get(Script::Katakana)
    }

    /// The most frequent non-Latin script, with Han and kana pooled.
    ///
    /// Ties go to the script seen first. Returns `None` when there are no
    /// non-Latin letters.
    pub fn dominant_non_latin(&self) -> Option<Script> {
        let mut best: Option<(Script, usize)> = None;
        for &(script, n) in &self.counts {
            if script == Script::Latin {
                continue;
            }
            let (key, n) = if script.is_cjk() {
                (Script::Han, self.cjk())
            } else {
                (script, n)
            };
            if best.is_none_or(|(_, top)| n > top) {
                best = Some((key, n));
            }
        }
        best.map(|(script, _)| script)
    }

    /// Whether non-Latin letters outnumber Latin ones.
    pub fn is_non_latin_dominant(&self) -> bool {
        self.non_latin() > self.get(Script::Latin)
    }
}

/// Whether `text` contains any letter outside the Latin script.
pub fn has_non_latin_letters(text: &str) -> bool {
    text.chars().any(|c| {
        let script = Script::of(c);
        script.is_letter_script() && script != Script::Latin
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_of() {
        assert_eq!(Script::of('a'), Script::Latin);
        assert_eq!(Script::of('é'), Script::Latin);
        assert_eq!(Script::of('ß'), Script::Latin);
        assert_eq!(Script::of('ж'), Script::Cyrillic);
        assert_eq!(Script::of('λ'), Script::Greek);
        assert_eq!(Script::of('東'), Script::Han);
        assert_eq!(Script::of('し'), Script::Hiragana);
        assert_eq!(Script::of('カ'), Script::Katakana);
        assert_eq!(Script::of('서'), Script::Hangul);
        assert_eq!(Script::of('ק'), Script::Hebrew);
        assert_eq!(Script::of('5'), Script::Common);
        assert_eq!(Script::of('-'), Script::Common);
    }

    #[test]
    fn test_counts_pool_cjk() {
        let counts = ScriptCounts::of("渋谷区しぶや abc");
        assert_eq!(counts.get(Script::Han), 3);
        assert_eq!(counts.cjk(), 6);
        assert_eq!(counts.get(Script::Latin), 3);
        assert!(counts.is_non_latin_dominant());
        assert_eq!(counts.dominant_non_latin(), Some(Script::Han));
    }

    #[test]
    fn test_latin_dominant() {
        let counts = ScriptCounts::of("Main Street 東");
        assert!(!counts.is_non_latin_dominant());
        assert_eq!(ScriptCounts::of("123 - 45").total(), 0);
        assert_eq!(ScriptCounts::of("42").dominant_non_latin(), None);
    }

    #[test]
    fn test_has_non_latin_letters() {
        assert!(has_non_latin_letters("丁目"));
        assert!(has_non_latin_letters("Москва"));
        assert!(!has_non_latin_letters("Crème brûlée 42"));
    }
}
