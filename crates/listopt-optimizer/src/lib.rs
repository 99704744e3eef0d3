//! Listing optimization via a chat-completions service.
//!
//! Builds the optimization prompt for a [`ProductRecord`](listopt_core::ProductRecord),
//! sends it to the generative-text service, and parses the semi-structured
//! reply into a [`SuggestionBundle`](listopt_core::SuggestionBundle). The
//! parser is pure and never fails; only the network call can.

pub mod client;
pub mod error;
pub mod parse;
pub mod prompt;

mod types;

pub use client::OptimizationClient;
pub use error::OptimizerError;
pub use parse::parse_reply;
pub use prompt::build_optimization_prompt;
