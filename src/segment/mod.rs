/*! Sentence segmentation

Splits a line of raw text into sentences.

Segmenters implement [Segmenter]:
- [UnicodeSegmenter] uses Unicode sentence boundaries (UAX #29) and is the default,
- [LineSegmenter] keeps the whole line as a single sentence.

Segmenters never fail. Blank input yields no sentence, and returned sentences are trimmed and non-empty.
!*/
mod line;
mod segmenter;
mod unicode;

pub use line::LineSegmenter;
pub use segmenter::Segmenter;
pub use unicode::UnicodeSegmenter;
