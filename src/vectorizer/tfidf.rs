//! Single-document TF-IDF vectorizer.
//!
//! The model is fitted on the one document being vectorized. With a single
//! document and smoothed IDF (`ln((1 + n) / (1 + df)) + 1`) every term gets
//! an IDF of exactly 1, so the weights are raw term counts scaled to unit
//! L2 norm.

use std::collections::HashMap;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::error;

use super::base::{Vectorization, VectorizeError, Vectorizer, VectorizerKind};
use crate::DEFAULT_MAX_FEATURES;

lazy_static! {
    /// Two or more word characters between word boundaries.
    static ref TOKEN_PATTERN: Regex = Regex::new(r"\b\w\w+\b").unwrap();
}

/// A fitted vocabulary and its weights, both in vocabulary order.
#[derive(Debug, Clone, PartialEq)]
pub struct TfidfModel {
    pub vocabulary: Vec<String>,
    pub weights: Vec<f64>,
}

/// Bag-of-terms vectorizer with a feature cap.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    max_features: usize,
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FEATURES)
    }
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self { max_features }
    }

    /// Fit on `content` and return the weighted vocabulary.
    ///
    /// The most frequent terms are kept (ties broken alphabetically), then the
    /// kept vocabulary is sorted alphabetically.
    pub fn fit_transform(&self, content: &str) -> Result<TfidfModel, VectorizeError> {
        if self.max_features == 0 {
            return Err(VectorizeError::NoFeatures);
        }

        let lowered = content.to_lowercase();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for token in TOKEN_PATTERN.find_iter(&lowered) {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }

        if counts.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let mut terms: Vec<(&str, usize)> = counts.into_iter().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(self.max_features);
        terms.sort_by(|a, b| a.0.cmp(b.0));

        let norm = terms
            .iter()
            .map(|(_, count)| (*count as f64).powi(2))
            .sum::<f64>()
            .sqrt();

        let (vocabulary, weights): (Vec<String>, Vec<f64>) = terms
            .into_iter()
            .map(|(term, count)| (term.to_string(), count as f64 / norm))
            .unzip();

        Ok(TfidfModel {
            vocabulary,
            weights,
        })
    }
}

impl Vectorizer for TfidfVectorizer {
    fn kind(&self) -> VectorizerKind {
        VectorizerKind::Tfidf
    }

    fn vectorize(&self, content: &str, path: &Path) -> Result<Vectorization, VectorizeError> {
        match self.fit_transform(content) {
            Ok(model) => Ok(Vectorization::dense(model.weights, VectorizerKind::Tfidf)),
            Err(e) => {
                error!(path = %path.display(), error = %e, "Error vectorizing");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_unit_norm(weights: &[f64]) {
        let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9, "norm was {}", norm);
    }

    #[test]
    fn test_vocabulary_is_sorted_and_lowercased() {
        let model = TfidfVectorizer::default()
            .fit_transform("def Hello(): return hello_world + Hello")
            .unwrap();

        assert_eq!(
            model.vocabulary,
            vec!["def", "hello", "hello_world", "return"]
        );
        assert_unit_norm(&model.weights);
    }

    #[test]
    fn test_weights_follow_term_counts() {
        let model = TfidfVectorizer::default()
            .fit_transform("foo foo bar")
            .unwrap();

        assert_eq!(model.vocabulary, vec!["bar", "foo"]);
        let expected_bar = 1.0 / 5f64.sqrt();
        let expected_foo = 2.0 / 5f64.sqrt();
        assert!((model.weights[0] - expected_bar).abs() < 1e-12);
        assert!((model.weights[1] - expected_foo).abs() < 1e-12);
    }

    #[test]
    fn test_single_character_tokens_ignored() {
        let model = TfidfVectorizer::default()
            .fit_transform("a = b + c; let xy = 1")
            .unwrap();

        assert_eq!(model.vocabulary, vec!["let", "xy"]);
    }

    #[test]
    fn test_max_features_keeps_most_frequent() {
        let model = TfidfVectorizer::new(2)
            .fit_transform("zeta zeta zeta alpha beta beta gamma")
            .unwrap();

        assert_eq!(model.vocabulary, vec!["beta", "zeta"]);
        assert_unit_norm(&model.weights);
    }

    #[test]
    fn test_vector_capped_at_max_features() {
        let content: String = (0..250).map(|i| format!("term{} ", i)).collect();

        let result = TfidfVectorizer::default()
            .vectorize(&content, Path::new("many.txt"))
            .unwrap();

        assert_eq!(result.vector_size, 100);
        assert_eq!(result.vector.as_ref().map(Vec::len), Some(100));
        assert_eq!(result.vector_type, VectorizerKind::Tfidf);
    }

    #[test]
    fn test_empty_vocabulary_fails() {
        let err = TfidfVectorizer::default()
            .vectorize("+ - * / ; x", Path::new("ops.txt"))
            .unwrap_err();

        assert_eq!(err, VectorizeError::EmptyVocabulary);
        assert!(err.to_string().starts_with("empty vocabulary"));
    }

    #[test]
    fn test_zero_features_rejected() {
        let err = TfidfVectorizer::new(0).fit_transform("hello world").unwrap_err();
        assert_eq!(err, VectorizeError::NoFeatures);
    }

    #[test]
    fn test_serialized_shape() {
        let result = TfidfVectorizer::default()
            .vectorize("hello world", Path::new("hw.py"))
            .unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["vector_size"], 2);
        assert_eq!(json["vector_type"], "tfidf");
        assert_eq!(json["vector"].as_array().map(Vec::len), Some(2));
    }
}
