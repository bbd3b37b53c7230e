use crate::types::{Segment, ToneFormat, render_line};

/// Romanization interface for language implementations
pub trait Romanizer: Send + Sync {
    /// Language identifier (ISO 639-1 code: "zh", "yue", ...)
    fn language_code(&self) -> &str;

    /// Split text into segments covering it exactly, each with its reading
    fn romanize<'t>(&self, text: &'t str, format: ToneFormat) -> Vec<Segment<'t>>;

    /// Romanize text into a single display line
    fn romanize_line(&self, text: &str, format: ToneFormat) -> String {
        render_line(&self.romanize(text, format))
    }
}
