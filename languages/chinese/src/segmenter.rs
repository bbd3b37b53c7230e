use std::iter;

use pinyin_core::dictionary::ReadingDictionary;
use pinyin_core::types::SegmentKind;

/// A span of the input resolved against the dictionary
#[derive(Debug)]
pub struct Match<'t, 'd, R> {
    pub span: &'t str,
    /// Offset in characters
    pub position: usize,
    pub kind: SegmentKind,
    /// Candidate readings, primary first. Empty for passthrough.
    pub readings: &'d [R],
}

/// Greedy longest-match segmenter.
///
/// At each position the longest dictionary key starting there wins; a
/// character with no entry is passed through on its own. The produced spans
/// cover the input exactly, in order.
pub struct Segmenter<'t, 'd, D: ReadingDictionary> {
    dictionary: &'d D,
    text: &'t str,
    /// Byte offset of the cursor
    offset: usize,
    /// Character offset of the cursor
    position: usize,
}

impl<'t, 'd, D: ReadingDictionary> Segmenter<'t, 'd, D> {
    pub fn new(dictionary: &'d D, text: &'t str) -> Self {
        Self {
            dictionary,
            text,
            offset: 0,
            position: 0,
        }
    }
}

impl<'t, 'd, D: ReadingDictionary> Iterator for Segmenter<'t, 'd, D> {
    type Item = Match<'t, 'd, D::Reading>;

    fn next(&mut self) -> Option<Self::Item> {
        let text: &'t str = self.text;
        let dictionary: &'d D = self.dictionary;
        let rest = &text[self.offset..];
        if rest.is_empty() {
            return None;
        }

        // ends[k] is the byte length of the first k + 1 characters of `rest`
        let window = dictionary.max_key_length().max(1);
        let ends: Vec<usize> = rest
            .char_indices()
            .skip(1)
            .map(|(i, _)| i)
            .chain(iter::once(rest.len()))
            .take(window)
            .collect();

        let found = ends.iter().enumerate().rev().find_map(|(k, &end)| {
            let span = &rest[..end];
            dictionary
                .lookup(span)
                .filter(|readings| !readings.is_empty())
                .map(|readings| (k + 1, span, readings))
        });

        let item = match found {
            Some((len, span, readings)) => Match {
                span,
                position: self.position,
                kind: if len > 1 {
                    SegmentKind::Word
                } else {
                    SegmentKind::Character
                },
                readings,
            },
            None => Match {
                span: &rest[..ends[0]],
                position: self.position,
                kind: SegmentKind::Passthrough,
                readings: Default::default(),
            },
        };

        self.offset += item.span.len();
        self.position += item.span.chars().count();
        Some(item)
    }
}
