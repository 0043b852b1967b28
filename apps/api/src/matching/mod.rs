//! Document feature extraction and similarity ranking.
//!
//! Leaf-first: `tokenizer` → `tfidf` → `similarity` → `ranking`.
//! Everything below `handlers` is synchronous, pure and stateless.

pub mod handlers;
pub mod ranking;
pub mod similarity;
pub mod tfidf;
pub mod tokenizer;
