// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # rulebot
//!
//! A rule-based conversational engine. User input is normalized, reduced to
//! keywords, and matched against an insertion-ordered table of phrase →
//! reply pairs, with context- and frequency-based fallbacks when nothing
//! matches. Users can teach new pairs, which are appended to a flat file and
//! reloaded on the next start.
//!
//! ## Architecture
//!
//! - **Lexicon** (`lexicon`): built-in replies, stop words, ordered table
//! - **Keywords** (`keywords`): normalization and keyword extraction
//! - **Matcher** (`matcher`): exact → keyword → substring → context → frequency
//! - **Context** (`context`): topic label and bounded input history
//! - **Store** (`store`): `question|answer` training file
//! - **Engine** (`engine`): the facade tying it together
//!
//! ## Library usage
//!
//! ```no_run
//! use rulebot::config::EngineConfig;
//! use rulebot::engine::Engine;
//!
//! let mut engine = Engine::new(EngineConfig::default());
//! println!("{}", engine.get_response("hello"));
//! engine.process_training_command("train: favorite language | Rust");
//! assert_eq!(engine.get_response("Favorite language"), "Rust");
//! ```

pub mod command;
pub mod config;
pub mod context;
pub mod engine;
pub mod error;
pub mod frequency;
pub mod keywords;
pub mod lexicon;
pub mod matcher;
pub mod stats;
pub mod store;
