use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    /// Default query cleanup: NFKC, then trim the ends. Inner spacing is kept.
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        text.nfkc().collect::<String>().trim().to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
