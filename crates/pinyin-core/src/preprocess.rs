use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default: canonical composition, so combining tone marks become single code points
    fn process(&self, text: &str) -> String {
        text.trim().nfc().collect()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Folds full-width forms (ＡＢＣ１２３) to their ASCII equivalents
pub struct WidthPreprocessor;
impl Preprocessor for WidthPreprocessor {
    fn process(&self, text: &str) -> String {
        text.nfkc().collect()
    }
}
