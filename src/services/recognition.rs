// Text recognition via the system Tesseract installation
//
// The engine is consumed through a fixed contract: binarized image in, plain
// text out. An empty result is a valid outcome ("nothing detected"), not an
// error; only a failure to invoke the engine at all is reported.

use std::collections::HashMap;

use image::{DynamicImage, GrayImage};
use rusty_tesseract::{Args, Image};
use tracing::debug;

use crate::core::errors::{RecognitionError, RecognitionResult};

/// Recognition capability: preprocessed image to raw recognized text.
pub trait Recognizer: Send + Sync {
    fn recognize(&self, image: &GrayImage) -> RecognitionResult<String>;
}

/// Tesseract-backed recognizer with a fixed language hint.
///
/// The tesseract binary is resolved from `PATH`; a missing installation or
/// missing language data surfaces as [`RecognitionError::Unavailable`].
pub struct TesseractRecognizer {
    lang: String,
}

impl TesseractRecognizer {
    pub fn new(lang: impl Into<String>) -> Self {
        Self { lang: lang.into() }
    }

    fn args(&self) -> Args {
        Args {
            lang: self.lang.clone(),
            config_variables: HashMap::new(),
            dpi: Some(300),
            psm: Some(6), // single uniform block of text
            oem: Some(3),
        }
    }
}

impl Recognizer for TesseractRecognizer {
    fn recognize(&self, image: &GrayImage) -> RecognitionResult<String> {
        let dynamic = DynamicImage::ImageLuma8(image.clone());
        let tess_image = Image::from_dynamic_image(&dynamic).map_err(|e| {
            RecognitionError::Unavailable(format!("failed to prepare image for tesseract: {e}"))
        })?;

        let text = rusty_tesseract::image_to_string(&tess_image, &self.args()).map_err(|e| {
            RecognitionError::Unavailable(format!(
                "tesseract invocation failed (is Tesseract installed with '{}' language data?): {e}",
                self.lang
            ))
        })?;

        debug!("Recognized {} chars", text.chars().count());
        Ok(text)
    }
}

/// Strip recognition noise: every whitespace and line-break character,
/// including the U+3000 ideographic space Tesseract emits for Japanese.
/// Pure, idempotent and length-non-increasing.
pub fn normalize(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_all_whitespace() {
        assert_eq!(normalize("こん にち\nは\r\n"), "こんにちは");
        assert_eq!(normalize("こ\u{3000}ん"), "こん");
        assert_eq!(normalize("  \n\t "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let inputs = ["こん にちは\n", "hello world", "", " \u{3000} "];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn normalize_is_length_non_increasing() {
        let inputs = ["こん にちは\n", "no-spaces", "", "\u{3000}\u{3000}"];
        for input in inputs {
            assert!(normalize(input).chars().count() <= input.chars().count());
        }
    }

    #[test]
    fn normalize_preserves_non_whitespace_order() {
        assert_eq!(normalize("a b c"), "abc");
    }
}
