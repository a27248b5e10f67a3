//! Romanization of non-Latin scripts.
//!
//! Sound-alike output is the goal, not a reversible transliteration: two
//! records spelling the same name in different scripts only have to land on
//! the same Latin string often enough to share a key.
//!
//! ```
//! use neardupe::resources::transliterate::Transliterator;
//!
//! let transliterator = Transliterator::builtin();
//! assert_eq!(transliterator.transliterate("Москва").as_deref(), Some("Moskva"));
//! assert_eq!(transliterator.transliterate("東京").as_deref(), Some("dongjing"));
//! assert_eq!(transliterator.transliterate("서울").as_deref(), Some("seoul"));
//! assert_eq!(transliterator.transliterate("Main St"), None);
//! ```

use ahash::AHashMap;

use crate::language::script::{Script, has_non_latin_letters};

const CYRILLIC: &[(char, &str)] = &[
    ('а', "a"), ('б', "b"), ('в', "v"), ('г', "g"), ('д', "d"), ('е', "e"),
    ('ё', "e"), ('ж', "zh"), ('з', "z"), ('и', "i"), ('й', "y"), ('к', "k"),
    ('л', "l"), ('м', "m"), ('н', "n"), ('о', "o"), ('п', "p"), ('р', "r"),
    ('с', "s"), ('т', "t"), ('у', "u"), ('ф', "f"), ('х', "kh"), ('ц', "ts"),
    ('ч', "ch"), ('ш', "sh"), ('щ', "shch"), ('ъ', ""), ('ы', "y"), ('ь', ""),
    ('э', "e"), ('ю', "yu"), ('я', "ya"), ('і', "i"), ('ї', "yi"), ('є', "ye"),
    ('ґ', "g"), ('ў', "u"), ('ј', "j"), ('љ', "lj"), ('њ', "nj"), ('ћ', "c"),
    ('ђ', "dj"), ('џ', "dz"),
];

const GREEK: &[(char, &str)] = &[
    ('α', "a"), ('β', "v"), ('γ', "g"), ('δ', "d"), ('ε', "e"), ('ζ', "z"),
    ('η', "i"), ('θ', "th"), ('ι', "i"), ('κ', "k"), ('λ', "l"), ('μ', "m"),
    ('ν', "n"), ('ξ', "x"), ('ο', "o"), ('π', "p"), ('ρ', "r"), ('σ', "s"),
    ('ς', "s"), ('τ', "t"), ('υ', "y"), ('φ', "f"), ('χ', "ch"), ('ψ', "ps"),
    ('ω', "o"), ('ά', "a"), ('έ', "e"), ('ή', "i"), ('ί', "i"), ('ό', "o"),
    ('ύ', "y"), ('ώ', "o"), ('ϊ', "i"), ('ϋ', "y"), ('ΐ', "i"), ('ΰ', "y"),
];

/// Hiragana; katakana is folded onto these before lookup.
const KANA: &[(char, &str)] = &[
    ('あ', "a"), ('い', "i"), ('う', "u"), ('え', "e"), ('お', "o"),
    ('か', "ka"), ('き', "ki"), ('く', "ku"), ('け', "ke"), ('こ', "ko"),
    ('が', "ga"), ('ぎ', "gi"), ('ぐ', "gu"), ('げ', "ge"), ('ご', "go"),
    ('さ', "sa"), ('し', "shi"), ('す', "su"), ('せ', "se"), ('そ', "so"),
    ('ざ', "za"), ('じ', "ji"), ('ず', "zu"), ('ぜ', "ze"), ('ぞ', "zo"),
    ('た', "ta"), ('ち', "chi"), ('つ', "tsu"), ('て', "te"), ('と', "to"),
    ('だ', "da"), ('ぢ', "ji"), ('づ', "zu"), ('で', "de"), ('ど', "do"),
    ('な', "na"), ('に', "ni"), ('ぬ', "nu"), ('ね', "ne"), ('の', "no"),
    ('は', "ha"), ('ひ', "hi"), ('ふ', "fu"), ('へ', "he"), ('ほ', "ho"),
    ('ば', "ba"), ('び', "bi"), ('ぶ', "bu"), ('べ', "be"), ('ぼ', "bo"),
    ('ぱ', "pa"), ('ぴ', "pi"), ('ぷ', "pu"), ('ぺ', "pe"), ('ぽ', "po"),
    ('ま', "ma"), ('み', "mi"), ('む', "mu"), ('め', "me"), ('も', "mo"),
    ('や', "ya"), ('ゆ', "yu"), ('よ', "yo"),
    ('ら', "ra"), ('り', "ri"), ('る', "ru"), ('れ', "re"), ('ろ', "ro"),
    ('わ', "wa"), ('ゐ', "i"), ('ゑ', "e"), ('を', "o"), ('ん', "n"), ('ゔ', "vu"),
    ('ぁ', "a"), ('ぃ', "i"), ('ぅ', "u"), ('ぇ', "e"), ('ぉ', "o"), ('ゎ', "wa"),
];

/// Common place-name ideographs with their Mandarin reading.
const HAN: &[(char, &str)] = &[
    ('一', "yi"), ('二', "er"), ('三', "san"), ('四', "si"), ('五', "wu"),
    ('六', "liu"), ('七', "qi"), ('八', "ba"), ('九', "jiu"), ('十', "shi"),
    ('百', "bai"), ('千', "qian"), ('万', "wan"), ('丁', "ding"), ('目', "mu"),
    ('東', "dong"), ('东', "dong"), ('西', "xi"), ('南', "nan"), ('北', "bei"),
    ('中', "zhong"), ('京', "jing"), ('都', "du"), ('渋', "se"), ('澀', "se"),
    ('谷', "gu"), ('区', "qu"), ('區', "qu"), ('国', "guo"), ('國', "guo"),
    ('市', "shi"), ('上', "shang"), ('下', "xia"), ('海', "hai"), ('大', "da"),
    ('小', "xiao"), ('阪', "ban"), ('山', "shan"), ('川', "chuan"), ('田', "tian"),
    ('本', "ben"), ('日', "ri"), ('新', "xin"), ('宿', "su"), ('港', "gang"),
    ('香', "xiang"), ('台', "tai"), ('臺', "tai"), ('湾', "wan"), ('灣', "wan"),
    ('城', "cheng"), ('长', "chang"), ('長', "chang"), ('安', "an"), ('街', "jie"),
    ('路', "lu"), ('道', "dao"), ('门', "men"), ('門', "men"), ('天', "tian"),
    ('津', "jin"), ('广', "guang"), ('廣', "guang"), ('州', "zhou"), ('深', "shen"),
    ('圳', "zhen"), ('庆', "qing"), ('慶', "qing"), ('成', "cheng"), ('武', "wu"),
    ('汉', "han"), ('漢', "han"), ('杭', "hang"), ('苏', "su"), ('蘇', "su"),
    ('名', "ming"), ('古', "gu"), ('屋', "wu"), ('横', "heng"), ('浜', "bang"),
    ('神', "shen"), ('户', "hu"), ('戸', "hu"), ('福', "fu"), ('冈', "gang"),
    ('岡', "gang"), ('札', "zha"), ('幌', "huang"), ('县', "xian"), ('県', "xian"),
    ('府', "fu"), ('町', "ting"), ('村', "cun"), ('番', "fan"), ('地', "di"),
    ('号', "hao"), ('號', "hao"), ('楼', "lou"), ('樓', "lou"), ('层', "ceng"),
    ('室', "shi"), ('站', "zhan"), ('駅', "yi"), ('桥', "qiao"), ('橋', "qiao"),
    ('学', "xue"), ('學', "xue"), ('公', "gong"), ('园', "yuan"), ('園', "yuan"),
    ('医', "yi"), ('院', "yuan"), ('银', "yin"), ('行', "hang"), ('店', "dian"),
    ('饭', "fan"), ('酒', "jiu"), ('宾', "bin"), ('馆', "guan"), ('館', "guan"),
    ('和', "he"), ('平', "ping"), ('明', "ming"), ('光', "guang"), ('花', "hua"),
    ('石', "shi"), ('木', "mu"), ('林', "lin"), ('森', "sen"), ('水', "shui"),
    ('金', "jin"), ('高', "gao"), ('王', "wang"), ('民', "min"), ('人', "ren"),
    ('华', "hua"), ('華', "hua"), ('文', "wen"), ('化', "hua"), ('世', "shi"),
    ('界', "jie"), ('前', "qian"), ('后', "hou"), ('後', "hou"), ('内', "nei"),
    ('外', "wai"), ('江', "jiang"), ('河', "he"), ('湖', "hu"), ('岛', "dao"),
    ('島', "dao"), ('野', "ye"), ('原', "yuan"), ('池', "chi"), ('袋', "dai"),
    ('品', "pin"), ('浅', "qian"), ('草', "cao"), ('銀', "yin"), ('座', "zuo"),
    ('橫', "heng"), ('丸', "wan"), ('之', "zhi"), ('心', "xin"),
];

const HANGUL_INITIALS: [&str; 19] = [
    "g", "kk", "n", "d", "tt", "r", "m", "b", "pp", "s", "ss", "", "j", "jj", "ch", "k", "t",
    "p", "h",
];

const HANGUL_MEDIALS: [&str; 21] = [
    "a", "ae", "ya", "yae", "eo", "e", "yeo", "ye", "o", "wa", "wae", "oe", "yo", "u", "wo",
    "we", "wi", "yu", "eu", "ui", "i",
];

const HANGUL_FINALS: [&str; 28] = [
    "", "k", "k", "k", "n", "n", "n", "t", "l", "k", "m", "l", "l", "l", "p", "l", "m", "p",
    "p", "t", "t", "ng", "t", "t", "k", "t", "p", "t",
];

const HANGUL_BASE: u32 = 0xAC00;
const HANGUL_LAST: u32 = 0xD7A3;

/// Table-driven romanizer with algorithmic Hangul and contextual kana rules.
#[derive(Clone, Debug)]
pub struct Transliterator {
    table: AHashMap<char, String>,
}

impl Default for Transliterator {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Transliterator {
    /// The built-in Cyrillic, Greek, kana and Han tables.
    pub fn builtin() -> Self {
        let table = CYRILLIC
            .iter()
            .chain(GREEK)
            .chain(KANA)
            .chain(HAN)
            .map(|&(c, latin)| (c, latin.to_string()))
            .collect();
        Transliterator { table }
    }

    /// Replace or add single-character mappings.
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (char, String)>,
    {
        self.table.extend(overrides);
        self
    }

    /// Number of table entries (Hangul is algorithmic and not counted).
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Romanize `text`, or `None` when it has no non-Latin letters or
    /// romanizing would not change it.
    pub fn transliterate(&self, text: &str) -> Option<String> {
        if !has_non_latin_letters(text) {
            return None;
        }

        let chars: Vec<char> = text.chars().collect();
        let mut output = String::with_capacity(text.len());
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            let script = Script::of(c);

            if script == Script::Hangul {
                push_hangul(&mut output, c);
            } else if script.is_kana() {
                i += self.push_kana(&mut output, &chars, i);
                continue;
            } else if let Some(latin) = self.lookup(c) {
                if c.is_uppercase() {
                    push_capitalized(&mut output, &latin);
                } else {
                    output.push_str(&latin);
                }
            } else {
                output.push(c);
            }
            i += 1;
        }

        if output == text { None } else { Some(output) }
    }

    fn lookup(&self, c: char) -> Option<String> {
        if let Some(latin) = self.table.get(&c) {
            return Some(latin.clone());
        }
        let mut lower = c.to_lowercase();
        match (lower.next(), lower.next()) {
            (Some(l), None) if l != c => self.table.get(&l).cloned(),
            _ => None,
        }
    }

    /// Romanize the kana run starting at `start`, returning how many chars were consumed.
    fn push_kana(&self, output: &mut String, chars: &[char], start: usize) -> usize {
        let c = to_hiragana(chars[start]);
        let next = chars.get(start + 1).copied().map(to_hiragana);

        match c {
            // sokuon doubles the next consonant
            'っ' => {
                let first = next
                    .and_then(|n| self.table.get(&n))
                    .and_then(|romaji| romaji.chars().next());
                if let Some(first) = first.filter(|f| !matches!(f, 'a' | 'i' | 'u' | 'e' | 'o' | 'n')) {
                    output.push(first);
                }
                1
            }
            // prolonged sound mark
            'ー' => 1,
            _ => {
                let Some(romaji) = self.table.get(&c) else {
                    output.push(chars[start]);
                    return 1;
                };
                match next {
                    Some(small @ ('ゃ' | 'ゅ' | 'ょ')) if romaji.ends_with('i') && romaji.len() > 1 => {
                        let stem = &romaji[..romaji.len() - 1];
                        let vowel = match small {
                            'ゃ' => "a",
                            'ゅ' => "u",
                            _ => "o",
                        };
                        // shi/chi/ji drop the glide: sha, cha, ja
                        if stem.ends_with("sh") || stem.ends_with("ch") || stem == "j" {
                            output.push_str(stem);
                        } else {
                            output.push_str(stem);
                            output.push('y');
                        }
                        output.push_str(vowel);
                        2
                    }
                    _ => {
                        output.push_str(romaji);
                        1
                    }
                }
            }
        }
    }
}

fn to_hiragana(c: char) -> char {
    match c as u32 {
        code @ 0x30A1..=0x30F6 => char::from_u32(code - 0x60).unwrap_or(c),
        _ => c,
    }
}

fn push_hangul(output: &mut String, c: char) {
    let code = c as u32;
    if !(HANGUL_BASE..=HANGUL_LAST).contains(&code) {
        output.push(c);
        return;
    }
    let index = (code - HANGUL_BASE) as usize;
    output.push_str(HANGUL_INITIALS[index / (21 * 28)]);
    output.push_str(HANGUL_MEDIALS[(index % (21 * 28)) / 28]);
    output.push_str(HANGUL_FINALS[index % 28]);
}

fn push_capitalized(output: &mut String, latin: &str) {
    let mut chars = latin.chars();
    if let Some(first) = chars.next() {
        output.extend(first.to_uppercase());
        output.push_str(chars.as_str());
    }
}
