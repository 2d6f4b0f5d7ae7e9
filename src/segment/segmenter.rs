//! Segmenter trait.

/// Sentence boundary detection over a single line of text.
pub trait Segmenter {
    /// Returns the sentences of `line`, in order.
    fn segment(&self, line: &str) -> Vec<String>;
}

impl<S: Segmenter + ?Sized> Segmenter for &S {
    fn segment(&self, line: &str) -> Vec<String> {
        (**self).segment(line)
    }
}

impl<S: Segmenter + ?Sized> Segmenter for Box<S> {
    fn segment(&self, line: &str) -> Vec<String> {
        (**self).segment(line)
    }
}
