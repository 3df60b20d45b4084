//! Validation-based compilation of trigger definitions.
//!
//! Compiling a trigger uses Stillwater's `Validation` type to accumulate
//! ALL definition defects instead of failing at the first one: malformed
//! transition expressions, unsupported aliases, invalid timings, bad
//! keyframe offsets and empty state names are collected across every
//! entry and reported as one [`TriggerDefinitionError`].
//!
//! # Example
//!
//! ```rust
//! use segue::builder::{animate, state, transition};
//! use segue::style;
//! use segue::validation::compile_trigger;
//!
//! let trigger = compile_trigger(
//!     "openClose",
//!     vec![
//!         state("open", style! { "height" => "200px" }),
//!         state("closed", style! { "height" => "100px" }),
//!         transition("open => closed", vec![animate("1s", style! { "opacity" => 0.5 })]),
//!     ],
//! )
//! .unwrap();
//!
//! assert!(trigger.match_transition("open", "closed").is_some());
//! assert!(trigger.match_transition("closed", "open").is_none());
//! ```

mod compile;
mod rules;
mod violations;

pub use compile::{compile_trigger, compile_trigger_with};
pub use violations::{DefinitionError, TriggerDefinitionError};
