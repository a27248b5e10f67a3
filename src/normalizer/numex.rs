//! Numeric expressions: spelled-out numbers, ordinal suffixes and Roman numerals.

use crate::resources::Resources;

/// A parsed number word.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Number {
    Cardinal(u64),
    /// Value and the suffix it is written with (`st`, `er`, `º`)
    Ordinal(u64, String),
}

impl Number {
    fn render(&self) -> String {
        match self {
            Number::Cardinal(n) => n.to_string(),
            Number::Ordinal(n, suffix) => format!("{n}{suffix}"),
        }
    }
}

/// Spells out numbers as digits using the number words of `languages`.
pub struct NumberWords<'a> {
    resources: &'a Resources,
    languages: &'a [String],
}

impl<'a> NumberWords<'a> {
    pub fn new(resources: &'a Resources, languages: &'a [String]) -> Self {
        NumberWords {
            resources,
            languages,
        }
    }

    /// Replace number words with digits, combining `twenty one` and
    /// `twenty-first` into `21` and `21st`.
    ///
    /// Returns `None` when nothing was replaced.
    pub fn replace(&self, text: &str) -> Option<String> {
        let tokens: Vec<&str> = text.split_whitespace().collect();
        let mut output = Vec::with_capacity(tokens.len());
        let mut changed = false;
        let mut i = 0;
        while i < tokens.len() {
            match self.parse(&tokens[i..]) {
                Some((number, consumed)) => {
                    output.push(number.render());
                    changed = true;
                    i += consumed;
                }
                None => {
                    output.push(tokens[i].to_string());
                    i += 1;
                }
            }
        }
        changed.then(|| output.join(" "))
    }

    /// Number at the head of `tokens` and how many tokens it spans.
    fn parse(&self, tokens: &[&str]) -> Option<(Number, usize)> {
        let first = tokens.first()?;
        if first.contains('-') {
            let parts: Vec<&str> = first.split('-').collect();
            return match parts.as_slice() {
                [left, right] => {
                    let left = self.word(left)?;
                    let right = self.word(right)?;
                    combine(&left, &right).map(|n| (n, 1))
                }
                _ => None,
            };
        }

        let head = self.word(first)?;
        let combined = tokens
            .get(1)
            .and_then(|next| self.word(next))
            .and_then(|next| combine(&head, &next));
        match combined {
            Some(number) => Some((number, 2)),
            None => Some((head, 1)),
        }
    }

    fn word(&self, word: &str) -> Option<Number> {
        let word = word.to_lowercase();
        let numeric = self.resources.number(self.languages, &word)?;
        let digits_end = numeric
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(numeric.len());
        let value: u64 = numeric[..digits_end].parse().ok()?;
        if self.resources.is_cardinal(self.languages, &word) {
            Some(Number::Cardinal(value))
        } else {
            Some(Number::Ordinal(value, numeric[digits_end..].to_string()))
        }
    }
}

/// `twenty` + `one`, `twenty` + `first`, `three` + `hundred`.
fn combine(head: &Number, next: &Number) -> Option<Number> {
    let &Number::Cardinal(tens) = head else {
        return None;
    };
    match next {
        Number::Cardinal(100) if (1..=9).contains(&tens) => Some(Number::Cardinal(tens * 100)),
        Number::Cardinal(unit) if is_tens(tens) && (1..=9).contains(unit) => {
            Some(Number::Cardinal(tens + unit))
        }
        Number::Ordinal(unit, suffix) if is_tens(tens) && (1..=9).contains(unit) => {
            Some(Number::Ordinal(tens + unit, suffix.clone()))
        }
        _ => None,
    }
}

fn is_tens(n: u64) -> bool {
    (20..=90).contains(&n) && n % 10 == 0
}

/// Digits of `token` when it is digits followed by one of `suffixes`.
pub fn strip_ordinal_suffix<'t>(token: &'t str, suffixes: &[String]) -> Option<&'t str> {
    let digits_end = token.find(|c: char| !c.is_ascii_digit())?;
    if digits_end == 0 {
        return None;
    }
    let suffix = token[digits_end..].to_lowercase();
    suffixes
        .iter()
        .any(|s| *s == suffix)
        .then(|| &token[..digits_end])
}

const ROMAN_DIGITS: &[(u32, &str)] = &[
    (100, "c"),
    (90, "xc"),
    (50, "l"),
    (40, "xl"),
    (10, "x"),
    (9, "ix"),
    (5, "v"),
    (4, "iv"),
    (1, "i"),
];

/// Value of a Roman numeral written with `i v x l c` in canonical form.
///
/// Single letters only count for `i`, `v` and `x`; mixed case is rejected.
///
/// ```
/// use neardupe::normalizer::numex::roman_value;
///
/// assert_eq!(roman_value("IV"), Some(4));
/// assert_eq!(roman_value("xlii"), Some(42));
/// assert_eq!(roman_value("iiii"), None);
/// assert_eq!(roman_value("Iv"), None);
/// assert_eq!(roman_value("l"), None);
/// ```
pub fn roman_value(token: &str) -> Option<u32> {
    let lower = if token.chars().all(|c| c.is_ascii_lowercase()) {
        token.to_string()
    } else if token.chars().all(|c| c.is_ascii_uppercase()) {
        token.to_ascii_lowercase()
    } else {
        return None;
    };
    if lower.len() < 2 && !matches!(lower.as_str(), "i" | "v" | "x") {
        return None;
    }
    if !lower.chars().all(|c| "ivxlc".contains(c)) {
        return None;
    }

    let mut value = 0;
    let mut rest = lower.as_str();
    for &(n, digits) in ROMAN_DIGITS {
        while let Some(tail) = rest.strip_prefix(digits) {
            value += n;
            rest = tail;
        }
    }
    if !rest.is_empty() || value == 0 || to_roman(value) != lower {
        return None;
    }
    Some(value)
}

fn to_roman(mut value: u32) -> String {
    let mut roman = String::new();
    for &(n, digits) in ROMAN_DIGITS {
        while value >= n {
            roman.push_str(digits);
            value -= n;
        }
    }
    roman
}
