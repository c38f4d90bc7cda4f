//! Aggregate peer-submitted ratings into ranked per-item scores.
//!
//! The `scoring` module is the core: pure, synchronous functions that turn a
//! flat rating list into ranked summaries, with optional compensation
//! strategies that blend an owner's own rating-giving behavior back into the
//! score of items they own. `input`, `config` and `output` carry the CLI
//! around it.

pub mod config;
pub mod input;
pub mod output;
pub mod scoring;
