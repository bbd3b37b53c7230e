use std::collections::HashSet;
use std::fmt;

use pinyin_core::preprocess::{DefaultPreprocessor, Preprocessor};
use pinyin_core::types::{NeutralTone, UmlautStyle};

use crate::inventory::{MAX_SYLLABLE_LEN, is_syllabic_nasal, is_syllable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    First,
    Second,
    Third,
    Fourth,
    Neutral,
}

impl Tone {
    /// Tone number 1-4, `None` for the neutral tone
    pub fn number(self) -> Option<u8> {
        match self {
            Tone::First => Some(1),
            Tone::Second => Some(2),
            Tone::Third => Some(3),
            Tone::Fourth => Some(4),
            Tone::Neutral => None,
        }
    }

    fn mark_index(self) -> Option<usize> {
        self.number().map(|n| n as usize - 1)
    }

    fn from_mark_index(idx: usize) -> Tone {
        match idx {
            0 => Tone::First,
            1 => Tone::Second,
            2 => Tone::Third,
            _ => Tone::Fourth,
        }
    }
}

const TONE_MARKS: &[(char, [char; 4])] = &[
    ('a', ['ā', 'á', 'ǎ', 'à']),
    ('e', ['ē', 'é', 'ě', 'è']),
    ('i', ['ī', 'í', 'ǐ', 'ì']),
    ('o', ['ō', 'ó', 'ǒ', 'ò']),
    ('u', ['ū', 'ú', 'ǔ', 'ù']),
    ('ü', ['ǖ', 'ǘ', 'ǚ', 'ǜ']),
    ('A', ['Ā', 'Á', 'Ǎ', 'À']),
    ('E', ['Ē', 'É', 'Ě', 'È']),
    ('I', ['Ī', 'Í', 'Ǐ', 'Ì']),
    ('O', ['Ō', 'Ó', 'Ǒ', 'Ò']),
    ('U', ['Ū', 'Ú', 'Ǔ', 'Ù']),
    ('Ü', ['Ǖ', 'Ǘ', 'Ǚ', 'Ǜ']),
];

// Precomposed nasals; m̄, m̀ and n̄ only exist as a letter plus a combining mark
const NASAL_MARKS: &[(char, char, Tone)] = &[
    ('ḿ', 'm', Tone::Second),
    ('ń', 'n', Tone::Second),
    ('ň', 'n', Tone::Third),
    ('ǹ', 'n', Tone::Fourth),
    ('Ḿ', 'M', Tone::Second),
    ('Ń', 'N', Tone::Second),
    ('Ň', 'N', Tone::Third),
    ('Ǹ', 'N', Tone::Fourth),
];

/// Combining macron, acute, caron and grave, in tone order
const COMBINING_MARKS: [char; 4] = ['\u{0304}', '\u{0301}', '\u{030C}', '\u{0300}'];

/// Split a marked letter into its base letter and tone
fn strip_mark(c: char) -> Option<(char, Tone)> {
    TONE_MARKS
        .iter()
        .find_map(|(base, marks)| {
            marks
                .iter()
                .position(|&m| m == c)
                .map(|idx| (*base, Tone::from_mark_index(idx)))
        })
        .or_else(|| {
            NASAL_MARKS
                .iter()
                .find(|(m, _, _)| *m == c)
                .map(|&(_, base, tone)| (base, tone))
        })
}

fn push_marked(out: &mut String, base: char, tone: Tone) {
    let Some(idx) = tone.mark_index() else {
        out.push(base);
        return;
    };
    match TONE_MARKS.iter().find(|(b, _)| *b == base) {
        Some((_, marks)) => out.push(marks[idx]),
        None => {
            out.push(base);
            out.push(COMBINING_MARKS[idx]);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyllableError {
    #[error("reading is empty")]
    Empty,

    #[error("unexpected character {0:?}")]
    InvalidCharacter(char),

    #[error("{0:?} cannot be split into pinyin syllables")]
    Unsplittable(String),

    #[error("found {found} syllables, expected {expected}")]
    WrongCount { expected: usize, found: usize },
}

/// One romanized syllable: base spelling (ü kept as ü) plus tone
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Syllable {
    base: String,
    tone: Tone,
}

impl Syllable {
    pub fn new(base: impl Into<String>, tone: Tone) -> Result<Self, SyllableError> {
        let base = base.into();
        if !is_syllable(&base.to_lowercase()) {
            return Err(SyllableError::Unsplittable(base));
        }
        Ok(Self { base, tone })
    }

    /// Parse a single marked syllable such as `"lǜ"`
    pub fn parse(text: &str) -> Result<Self, SyllableError> {
        let mut syllables = split_reading(text, Some(1))?;
        Ok(syllables.remove(0))
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Whether this is `m`, `n`, `ng`, `hm` or `hng`
    pub fn is_syllabic_nasal(&self) -> bool {
        is_syllabic_nasal(&self.base.to_lowercase())
    }

    /// Index (in chars) of the letter carrying the tone mark: a > o > e > last of
    /// i/u/ü, or the `m`/`n` of a syllabic nasal
    fn mark_position(&self) -> Option<usize> {
        let lower: Vec<char> = self.base.to_lowercase().chars().collect();
        ['a', 'o', 'e']
            .iter()
            .find_map(|v| lower.iter().position(|c| c == v))
            .or_else(|| lower.iter().rposition(|c| matches!(c, 'i' | 'u' | 'ü')))
            .or_else(|| lower.iter().position(|c| matches!(c, 'm' | 'n')))
    }

    pub fn to_diacritic(&self) -> String {
        let Some(pos) = self.mark_position().filter(|_| self.tone != Tone::Neutral) else {
            return self.base.clone();
        };
        let mut out = String::with_capacity(self.base.len() + 2);
        for (i, c) in self.base.chars().enumerate() {
            if i == pos {
                push_marked(&mut out, c, self.tone);
            } else {
                out.push(c);
            }
        }
        // ń and ň have precomposed forms, m̄ does not
        if self.is_syllabic_nasal() {
            return DefaultPreprocessor.process(&out);
        }
        out
    }

    /// Base spelling followed by the tone digit.
    ///
    /// With [`UmlautStyle::V`] the letter `ü` is written `v`, so `nv3` and `nǚ`
    /// share one base spelling. Neutral tone gets the digit `neutral` asks for,
    /// if any.
    pub fn to_numeric(&self, neutral: NeutralTone, umlaut: UmlautStyle) -> String {
        let mut out: String = match umlaut {
            UmlautStyle::V => self
                .base
                .chars()
                .map(|c| match c {
                    'ü' => 'v',
                    'Ü' => 'V',
                    other => other,
                })
                .collect(),
            UmlautStyle::Diaeresis => self.base.clone(),
        };
        match self.tone.number() {
            Some(n) => out.push(char::from(b'0' + n)),
            None => out.extend(neutral.digit()),
        }
        out
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_diacritic())
    }
}

#[derive(Debug, Clone, Copy)]
struct Letter {
    base: char,
    tone: Option<Tone>,
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\'' | '’' | '-')
}

fn to_letter(c: char) -> Result<Letter, SyllableError> {
    if let Some((base, tone)) = strip_mark(c) {
        return Ok(Letter { base, tone: Some(tone) });
    }
    let base = match c {
        'v' => 'ü',
        'V' => 'Ü',
        c if c.is_ascii_alphabetic() || c == 'ü' || c == 'Ü' => c,
        other => return Err(SyllableError::InvalidCharacter(other)),
    };
    Ok(Letter { base, tone: None })
}

/// Splits a word into letters, attaching a combining tone mark to the letter
/// before it. NFC leaves marks such as m̄ uncomposed.
fn to_letters(word: &str) -> Result<Vec<Letter>, SyllableError> {
    let mut letters: Vec<Letter> = Vec::with_capacity(word.len());
    for c in word.chars() {
        if let Some(idx) = COMBINING_MARKS.iter().position(|&m| m == c) {
            match letters.last_mut() {
                Some(letter) if letter.tone.is_none() => {
                    letter.tone = Some(Tone::from_mark_index(idx));
                }
                _ => return Err(SyllableError::InvalidCharacter(c)),
            }
            continue;
        }
        letters.push(to_letter(c)?);
    }
    Ok(letters)
}

fn syllable_from(letters: &[Letter]) -> Option<Syllable> {
    let mut tones = letters.iter().filter_map(|l| l.tone);
    let tone = tones.next().unwrap_or(Tone::Neutral);
    if tones.next().is_some() {
        return None;
    }
    let base: String = letters.iter().map(|l| l.base).collect();
    is_syllable(&base.to_lowercase()).then_some(Syllable { base, tone })
}

/// Backtracking splitter; explicit separators always end a syllable
struct Splitter<'a> {
    tokens: &'a [Vec<Letter>],
    /// No syllable may start with a, o or e inside a token (written pinyin puts
    /// an apostrophe there: `xī'ān`, so `hénán` is `hé nán`)
    strict: bool,
    failed: HashSet<(usize, usize, Option<usize>)>,
}

impl<'a> Splitter<'a> {
    fn solve(
        &mut self,
        ti: usize,
        pos: usize,
        remaining: Option<usize>,
        out: &mut Vec<Syllable>,
    ) -> bool {
        let tokens = self.tokens;
        let Some(token) = tokens.get(ti) else {
            return remaining.is_none_or(|r| r == 0);
        };
        if pos == token.len() {
            return self.solve(ti + 1, 0, remaining, out);
        }
        if remaining == Some(0) || self.failed.contains(&(ti, pos, remaining)) {
            return false;
        }
        let zero_initial = matches!(token[pos].base.to_ascii_lowercase(), 'a' | 'o' | 'e');
        if self.strict && pos > 0 && zero_initial {
            self.failed.insert((ti, pos, remaining));
            return false;
        }

        let max = MAX_SYLLABLE_LEN.min(token.len() - pos);
        for len in (1..=max).rev() {
            let Some(syllable) = syllable_from(&token[pos..pos + len]) else {
                continue;
            };
            // m, n and ng only stand alone, otherwise `xian` could become `xia n`
            if syllable.is_syllabic_nasal() && len != token.len() {
                continue;
            }
            out.push(syllable);
            if self.solve(ti, pos + len, remaining.map(|r| r - 1), out) {
                return true;
            }
            out.pop();
        }

        self.failed.insert((ti, pos, remaining));
        false
    }
}

fn split_tokens(tokens: &[Vec<Letter>], expected: Option<usize>) -> Option<Vec<Syllable>> {
    [true, false].into_iter().find_map(|strict| {
        let mut splitter = Splitter {
            tokens,
            strict,
            failed: HashSet::new(),
        };
        let mut out = Vec::new();
        splitter.solve(0, 0, expected, &mut out).then_some(out)
    })
}

/// Split a marked reading into syllables.
///
/// Accepts separated (`"yín háng"`, `"nǚ'ér"`) and concatenated (`"yínháng"`)
/// spellings. With `expected` set, only a split into exactly that many
/// syllables is accepted. Splits where no syllable inside a word starts with
/// a, o or e are preferred (`hénán` is `hé nán`), then the one with the
/// longest leading syllables wins (`xīān` is still `xī ān`).
pub fn split_reading(reading: &str, expected: Option<usize>) -> Result<Vec<Syllable>, SyllableError> {
    let normalized = DefaultPreprocessor.process(reading);

    let mut tokens: Vec<Vec<Letter>> = Vec::new();
    for word in normalized.split(is_separator).filter(|w| !w.is_empty()) {
        tokens.push(to_letters(word)?);
    }
    if tokens.is_empty() {
        return Err(SyllableError::Empty);
    }

    if let Some(syllables) = split_tokens(&tokens, expected) {
        return Ok(syllables);
    }

    match (expected, split_tokens(&tokens, None)) {
        (Some(expected), Some(found)) => Err(SyllableError::WrongCount {
            expected,
            found: found.len(),
        }),
        _ => Err(SyllableError::Unsplittable(normalized)),
    }
}
