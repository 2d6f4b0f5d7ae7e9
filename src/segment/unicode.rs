//! UAX #29 sentence segmenter.
use unicode_segmentation::UnicodeSegmentation;

use super::Segmenter;

/// Splits on Unicode sentence boundaries.
///
/// Boundaries follow [UAX #29](https://www.unicode.org/reports/tr29/#Sentence_Boundaries),
/// so `"3.5"` stays in one piece while `"Xin chào. Tạm biệt."` yields two sentences.
/// Surrounding whitespace is trimmed off each sentence.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnicodeSegmenter;

impl Segmenter for UnicodeSegmenter {
    fn segment(&self, line: &str) -> Vec<String> {
        line.split_sentence_bounds()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(String::from)
            .collect()
    }
}
