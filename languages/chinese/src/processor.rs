use std::sync::Arc;

use pinyin_core::language::Romanizer;
use pinyin_core::types::{Segment, ToneFormat};

use crate::dictionary::{PinyinDictionary, Reading};
use crate::render::RenderOptions;
use crate::segmenter::{Match, Segmenter};

/// Lazy conversion of a text into rendered segments
pub struct Conversion<'t, 'd> {
    segmenter: Segmenter<'t, 'd, PinyinDictionary>,
    options: RenderOptions,
}

impl<'t, 'd> Conversion<'t, 'd> {
    pub fn new(dictionary: &'d PinyinDictionary, text: &'t str, options: RenderOptions) -> Self {
        Self {
            segmenter: Segmenter::new(dictionary, text),
            options,
        }
    }

    fn render(&self, m: Match<'t, 'd, Reading>) -> Segment<'t> {
        let Some((primary, others)) = m.readings.split_first() else {
            return Segment::passthrough(m.span, m.position);
        };
        Segment {
            source: m.span,
            position: m.position,
            kind: m.kind,
            reading: primary.render(&self.options),
            alternatives: others.iter().map(|r| r.render(&self.options)).collect(),
        }
    }
}

impl<'t, 'd> Iterator for Conversion<'t, 'd> {
    type Item = Segment<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.segmenter.next()?;
        Some(self.render(m))
    }
}

/// Chinese language processor
pub struct ChineseProcessor {
    dictionary: Arc<PinyinDictionary>,
    options: RenderOptions,
}

impl ChineseProcessor {
    pub fn new(dictionary: Arc<PinyinDictionary>) -> Self {
        Self::with_options(dictionary, RenderOptions::default())
    }

    pub fn with_options(dictionary: Arc<PinyinDictionary>, options: RenderOptions) -> Self {
        Self {
            dictionary,
            options,
        }
    }

    pub fn dictionary(&self) -> &Arc<PinyinDictionary> {
        &self.dictionary
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Convert `text` lazily using the processor's options and the given format
    pub fn convert<'t>(&self, text: &'t str, format: ToneFormat) -> Conversion<'t, '_> {
        Conversion::new(
            &self.dictionary,
            text,
            self.options.clone().with_format(format),
        )
    }
}

impl Romanizer for ChineseProcessor {
    fn language_code(&self) -> &str {
        "zh"
    }

    fn romanize<'t>(&self, text: &'t str, format: ToneFormat) -> Vec<Segment<'t>> {
        self.convert(text, format).collect()
    }
}
