//! Nested → flat.
use super::{DOC_SEP, SENT_SEP};
use crate::error::Error;

/// Checks that a sentence can go through the flat encoding without loss.
pub fn validate_sentence(sentence: &str) -> Result<(), Error> {
    if sentence.is_empty() {
        return Err(Error::EmptySentence);
    }
    if sentence.contains(SENT_SEP) || sentence.contains(DOC_SEP) {
        return Err(Error::Delimiter(sentence.to_string()));
    }
    Ok(())
}

/// Joins sentences with [SENT_SEP].
pub fn encode_summary<S: AsRef<str>>(sentences: &[S]) -> Result<String, Error> {
    let sentences: Vec<&str> = sentences.iter().map(|s| s.as_ref()).collect();
    for sentence in &sentences {
        validate_sentence(sentence)?;
    }
    Ok(sentences.join(SENT_SEP))
}

/// Joins each document's sentences with [SENT_SEP], then documents with [DOC_SEP].
pub fn encode_cluster<D: AsRef<[S]>, S: AsRef<str>>(documents: &[D]) -> Result<String, Error> {
    let documents: Vec<String> = documents
        .iter()
        .map(|doc| encode_summary(doc.as_ref()))
        .collect::<Result<_, _>>()?;

    Ok(documents.join(DOC_SEP))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster() {
        let c = vec![vec!["s1", "s2"], vec!["s3"]];
        assert_eq!(encode_cluster(&c).unwrap(), "s1<sent/>s2<doc/>s3");
    }

    #[test]
    fn cluster_with_empty_document() {
        let c: Vec<Vec<&str>> = vec![vec!["a"], vec![], vec!["b"]];
        assert_eq!(encode_cluster(&c).unwrap(), "a<doc/><doc/>b");
    }

    #[test]
    fn empty() {
        let no_docs: Vec<Vec<&str>> = Vec::new();
        let one_empty_doc: Vec<Vec<&str>> = vec![vec![]];
        assert_eq!(encode_cluster(&no_docs).unwrap(), "");
        assert_eq!(encode_cluster(&one_empty_doc).unwrap(), "");
        assert_eq!(encode_summary::<&str>(&[]).unwrap(), "");
    }

    #[test]
    fn summary() {
        assert_eq!(encode_summary(&["a.", "b!"]).unwrap(), "a.<sent/>b!");
    }

    #[test]
    fn reserved_delimiters() {
        assert!(matches!(
            encode_summary(&["uses <sent/> inline"]),
            Err(Error::Delimiter(_))
        ));
        assert!(matches!(
            encode_cluster(&[vec!["fine"], vec!["not <doc/> fine"]]),
            Err(Error::Delimiter(_))
        ));
    }

    #[test]
    fn empty_sentence() {
        assert!(matches!(
            encode_summary(&["a", ""]),
            Err(Error::EmptySentence)
        ));
    }
}
