//! Vectorization strategies.

mod base;
mod mock;
mod tfidf;

pub use base::{Vectorization, VectorizeError, Vectorizer, VectorizerKind};
pub use mock::MockVectorizer;
pub use tfidf::{TfidfModel, TfidfVectorizer};

/// Build the vectorizer selected at startup.
pub fn build_vectorizer(kind: VectorizerKind, max_features: usize) -> Box<dyn Vectorizer> {
    match kind {
        VectorizerKind::Tfidf => Box::new(TfidfVectorizer::new(max_features)),
        VectorizerKind::Mock => Box::new(MockVectorizer::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_selects_kind() {
        assert_eq!(build_vectorizer(VectorizerKind::Tfidf, 10).kind(), VectorizerKind::Tfidf);
        assert_eq!(build_vectorizer(VectorizerKind::Mock, 10).kind(), VectorizerKind::Mock);
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(VectorizerKind::Tfidf.to_string(), "tfidf");
        assert_eq!(
            serde_json::from_str::<VectorizerKind>("\"mock\"").unwrap(),
            VectorizerKind::Mock
        );
    }
}
