//! # Scenarios that run the whole pipeline from text to rank vectors.
//!
//! Convention for function names:
//!
//! * `const GRAPH_LITERAL_STRING`
//! * `fn raw()`
//! * `fn stochastic()`
//! * `fn transition()`
//! * `fn ranks()`
pub mod dangling;
