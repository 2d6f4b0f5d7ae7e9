//! One-sentence-per-line segmenter.
use super::Segmenter;

/// Treats each (trimmed) line as a sentence.
///
/// Useful for corpora that already are one sentence per line.
#[derive(Debug, Default, Clone, Copy)]
pub struct LineSegmenter;

impl Segmenter for LineSegmenter {
    fn segment(&self, line: &str) -> Vec<String> {
        let line = line.trim();
        if line.is_empty() {
            Vec::new()
        } else {
            vec![line.to_string()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_line() {
        assert_eq!(
            LineSegmenter.segment(" One. Two! \n"),
            vec!["One. Two!".to_string()]
        );
        assert!(LineSegmenter.segment("   ").is_empty());
    }
}
