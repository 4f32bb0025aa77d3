// Phonetic reading derivation
//
// The conversion capability decomposes normalized text into ordered,
// contiguous segments carrying a hiragana and a romanized rendering. The
// production implementation is backed by the kakasi transliteration crate;
// segmentation is by contiguous script run (kanji / kana / other), which
// keeps every segment mapped to an exact span of the input.

use crate::core::errors::ConversionResult;
use crate::core::types::ReadingSegment;

/// Phonetic conversion capability: text to ordered reading segments.
pub trait ReadingConverter: Send + Sync {
    fn derive_reading(&self, text: &str) -> ConversionResult<Vec<ReadingSegment>>;
}

/// Concatenated phonetic forms of all segments, in order.
pub fn join_reading(segments: &[ReadingSegment]) -> String {
    segments.iter().map(|s| s.phonetic.as_str()).collect()
}

/// Space-joined romanized forms; segments with no romanization (bare
/// punctuation runs) are skipped so separators never double up.
pub fn join_romaji(segments: &[ReadingSegment]) -> String {
    segments
        .iter()
        .map(|s| s.romanized.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Script {
    Kanji,
    Kana,
    Other,
}

fn script_of(c: char) -> Script {
    match c {
        // Hiragana, katakana (incl. prolonged sound mark), small kana extensions
        '\u{3040}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' => Script::Kana,
        // CJK unified ideographs (+ ext. A) and the iteration mark
        '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{3005}' => Script::Kanji,
        _ => Script::Other,
    }
}

/// Split text into maximal runs of a single script class, preserving order.
fn script_runs(text: &str) -> Vec<(Script, String)> {
    let mut runs: Vec<(Script, String)> = Vec::new();
    for c in text.chars() {
        let script = script_of(c);
        match runs.last_mut() {
            Some((last, run)) if *last == script => run.push(c),
            _ => runs.push((script, c.to_string())),
        }
    }
    runs
}

/// kakasi-backed converter (Rust port of the kakasi transliterator).
pub struct KakasiConverter;

impl ReadingConverter for KakasiConverter {
    fn derive_reading(&self, text: &str) -> ConversionResult<Vec<ReadingSegment>> {
        let mut segments = Vec::with_capacity(4);
        for (_, surface) in script_runs(text) {
            // kakasi passes non-Japanese runs through unchanged, so every
            // run converts to an aligned (phonetic, romanized) pair.
            let converted = kakasi::convert(&surface);
            segments.push(ReadingSegment {
                surface,
                phonetic: converted.hiragana,
                romanized: converted.romaji,
            });
        }
        Ok(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segments_cover_input_exactly() {
        let converter = KakasiConverter;
        let input = "日本語とEnglish、ね。";
        let segments = converter.derive_reading(input).unwrap();

        let rebuilt: String = segments.iter().map(|s| s.surface.as_str()).collect();
        assert_eq!(rebuilt, input);
        assert!(!segments.is_empty());
    }

    #[test]
    fn kana_run_reads_as_itself() {
        let converter = KakasiConverter;
        let segments = converter.derive_reading("ねこ").unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].surface, "ねこ");
        assert_eq!(segments[0].phonetic, "ねこ");
        assert_eq!(segments[0].romanized, "neko");
    }

    #[test]
    fn script_runs_split_on_boundaries() {
        let runs = script_runs("猫がneko");
        let kinds: Vec<Script> = runs.iter().map(|(s, _)| *s).collect();
        assert_eq!(kinds, vec![Script::Kanji, Script::Kana, Script::Other]);
        assert_eq!(runs[0].1, "猫");
        assert_eq!(runs[1].1, "が");
        assert_eq!(runs[2].1, "neko");
    }

    #[test]
    fn joins_aggregate_in_order() {
        let segments = vec![
            ReadingSegment {
                surface: "今日".into(),
                phonetic: "きょう".into(),
                romanized: "kyou".into(),
            },
            ReadingSegment {
                surface: "は".into(),
                phonetic: "は".into(),
                romanized: "ha".into(),
            },
        ];
        assert_eq!(join_reading(&segments), "きょうは");
        assert_eq!(join_romaji(&segments), "kyou ha");
    }

    #[test]
    fn empty_romanized_forms_are_skipped() {
        let segments = vec![
            ReadingSegment {
                surface: "ねこ".into(),
                phonetic: "ねこ".into(),
                romanized: "neko".into(),
            },
            ReadingSegment {
                surface: "。".into(),
                phonetic: "。".into(),
                romanized: " ".into(),
            },
        ];
        assert_eq!(join_romaji(&segments), "neko");
    }

    #[test]
    fn empty_input_yields_no_segments() {
        let converter = KakasiConverter;
        assert!(converter.derive_reading("").unwrap().is_empty());
        assert_eq!(join_reading(&[]), "");
        assert_eq!(join_romaji(&[]), "");
    }
}
