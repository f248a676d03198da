//! Output stage: renders a `TransformReport` to any byte sink.
pub mod json;
pub mod text;
