//! Segue: animation trigger compilation and transition matching
//!
//! Segue takes a declarative trigger definition (named states with styles,
//! plus ordered transition rules) and, for a concrete state change, selects
//! the applicable rule and builds it into keyframe timelines. Playing those
//! timelines is left to the caller.
//!
//! # Core Concepts
//!
//! - **States**: names bound to style snapshots, several aliases per style
//! - **Matchers**: transition expressions (`a => b`, `* => b`, `a <=> b`,
//!   `:enter`, comma-separated lists) or opaque predicates
//! - **First match wins**: rules are tried in declaration order
//! - **Locals**: `$name` tokens resolved from overrides, then defaults
//! - **Grouped errors**: every definition defect is reported at once
//!
//! # Example
//!
//! ```rust
//! use segue::{animate, compile_trigger, state, style, transition_with, Locals};
//!
//! let trigger = compile_trigger(
//!     "expand",
//!     vec![
//!         state("on, off", style! { "width" => 50 }),
//!         transition_with(
//!             "a => b",
//!             vec![
//!                 segue::builder::style(style! { "height" => "$a" }),
//!                 animate(1000, style! { "height" => "$b" }),
//!             ],
//!             Locals::new().set("$a", "100px").set("$b", "200px"),
//!         ),
//!     ],
//! )
//! .unwrap();
//!
//! let rule = trigger.match_transition("a", "b").unwrap();
//! let instruction = rule
//!     .build(&(), "a", "b", Some(&Locals::new().set("$a", "300px")))
//!     .unwrap();
//!
//! let keyframes = &instruction.timelines[0].keyframes;
//! assert_eq!(keyframes[0].get("height").unwrap().to_string(), "300px");
//! assert_eq!(keyframes[1].get("height").unwrap().to_string(), "200px");
//! ```

pub mod builder;
pub mod core;
pub mod timeline;
pub mod trigger;
pub mod validation;

// Re-export commonly used types
pub use builder::{
    animate, animate_to_state, keyframe, keyframe_at, keyframes, state, transition,
    transition_with, when, TriggerBuilder,
};
pub use self::core::{Locals, Matcher, Style, StyleValue};
pub use timeline::{ElementContext, Keyframe, Timeline, TransitionInstruction};
pub use trigger::{CompiledTrigger, TransitionRule, TriggerOptions, UnresolvedLocals};
pub use validation::{compile_trigger, compile_trigger_with, TriggerDefinitionError};
