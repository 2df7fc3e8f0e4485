//! Placeholder vectorizer used when real vectorization is switched off.

use std::path::Path;

use super::base::{Vectorization, VectorizeError, Vectorizer, VectorizerKind};
use crate::MOCK_VECTOR_SIZE;

/// Always succeeds with a fixed-size result and no vector.
#[derive(Debug, Clone, Default)]
pub struct MockVectorizer;

impl MockVectorizer {
    pub fn new() -> Self {
        Self
    }
}

impl Vectorizer for MockVectorizer {
    fn kind(&self) -> VectorizerKind {
        VectorizerKind::Mock
    }

    fn vectorize(&self, _content: &str, _path: &Path) -> Result<Vectorization, VectorizeError> {
        Ok(Vectorization::placeholder(MOCK_VECTOR_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_result_has_no_vector() {
        let result = MockVectorizer::new()
            .vectorize("anything at all", Path::new("x.rs"))
            .unwrap();

        assert_eq!(result.vector_size, 100);
        assert_eq!(result.vector_type, VectorizerKind::Mock);
        assert!(result.vector.is_none());

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["vector_type"], "mock");
        assert!(json.get("vector").is_none());
    }

    #[test]
    fn test_mock_accepts_content_tfidf_would_reject() {
        assert!(MockVectorizer::new().vectorize("+ -", Path::new("ops")).is_ok());
    }
}
