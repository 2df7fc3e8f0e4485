//! Output writers for vectorization results.

pub mod artifact;

pub use artifact::{
    path_bucket, ArtifactError, ArtifactWriter, VectorArtifact, ARTIFACT_BUCKETS, ARTIFACT_SUFFIX,
};
