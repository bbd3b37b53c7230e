use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How tones are written in romanized output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToneFormat {
    /// Tone mark on the vowel: `hǎo`
    #[default]
    Diacritic,
    /// Trailing tone digit: `hao3`
    Numeric,
}

impl FromStr for ToneFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "diacritic" | "marks" | "tones" => Ok(Self::Diacritic),
            "numeric" | "numbers" | "digits" => Ok(Self::Numeric),
            _ => Err("Could not parse a tone format"),
        }
    }
}

/// Digit written for the neutral tone in numeric output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeutralTone {
    #[default]
    Unmarked,
    Five,
    Zero,
}

impl NeutralTone {
    pub fn digit(&self) -> Option<char> {
        match self {
            NeutralTone::Unmarked => None,
            NeutralTone::Five => Some('5'),
            NeutralTone::Zero => Some('0'),
        }
    }
}

impl FromStr for NeutralTone {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "none" | "unmarked" => Ok(Self::Unmarked),
            "5" | "five" => Ok(Self::Five),
            "0" | "zero" => Ok(Self::Zero),
            _ => Err("Could not parse a neutral tone marker"),
        }
    }
}

/// Spelling of ü in numeric output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UmlautStyle {
    /// `lv4`
    #[default]
    V,
    /// `lü4`
    Diaeresis,
}

impl FromStr for UmlautStyle {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "v" => Ok(Self::V),
            "ü" | "u:" | "diaeresis" => Ok(Self::Diaeresis),
            _ => Err("Could not parse an umlaut style"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Multi-character dictionary match
    Word,
    /// Single-character dictionary match
    Character,
    /// Character absent from the dictionary, emitted unchanged
    Passthrough,
}

/// One resolved span of the input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'t> {
    pub source: &'t str,
    /// Offset of the span in characters
    pub position: usize,
    pub kind: SegmentKind,
    pub reading: String,
    /// Non-primary readings, rendered the same way as `reading`
    pub alternatives: Vec<String>,
}

impl<'t> Segment<'t> {
    pub fn passthrough(source: &'t str, position: usize) -> Self {
        Self {
            source,
            position,
            kind: SegmentKind::Passthrough,
            reading: source.to_string(),
            alternatives: Vec::new(),
        }
    }

    pub fn is_passthrough(&self) -> bool {
        self.kind == SegmentKind::Passthrough
    }

    pub fn is_polyphonic(&self) -> bool {
        !self.alternatives.is_empty()
    }

    /// Length of the span in characters
    pub fn char_len(&self) -> usize {
        self.source.chars().count()
    }
}

/// Join segments into a display line.
///
/// Romanized segments are separated by single spaces. Runs of passthrough
/// characters stay together, and whitespace in the input only acts as a
/// boundary.
pub fn render_line(segments: &[Segment<'_>]) -> String {
    let mut chunks: Vec<String> = Vec::new();
    let mut pending = String::new();

    for segment in segments {
        if segment.is_passthrough() {
            if segment.source.chars().all(char::is_whitespace) {
                if !pending.is_empty() {
                    chunks.push(std::mem::take(&mut pending));
                }
            } else {
                pending.push_str(segment.source);
            }
            continue;
        }

        if !pending.is_empty() {
            chunks.push(std::mem::take(&mut pending));
        }
        chunks.push(segment.reading.clone());
    }

    if !pending.is_empty() {
        chunks.push(pending);
    }

    chunks.join(" ")
}
