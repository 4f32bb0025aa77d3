pub mod capture;
pub mod preprocess;
pub mod reading;
pub mod recognition;
pub mod translation;

// Re-export commonly used services
pub use capture::{ClipboardSource, ImageSource};
pub use reading::{KakasiConverter, ReadingConverter};
pub use recognition::{Recognizer, TesseractRecognizer};
pub use translation::{GoogleTranslator, Translator};
