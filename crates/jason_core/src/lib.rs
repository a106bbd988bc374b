//! Typed, path-based access into decoded JSON trees.

/// Key paths, typed conversion, accessors, and the `serde_json` codec facade.
pub mod json;
