//! Core data types of a trigger.
//!
//! This module holds the pure building blocks shared by compilation and
//! timeline building:
//! - Style snapshots and values
//! - The state registry
//! - Matchers and the transition expression parser
//! - Locals (variables) and their two-level lookup
//!
//! Nothing in here performs I/O or keeps mutable shared state.

mod expression;
mod locals;
mod matcher;
mod state;
mod style;

pub use expression::{parse_expression, parse_expression_all, ParseError};
pub use locals::{Locals, LocalsScope, VARIABLE_SIGIL};
pub use matcher::{Matcher, StatePredicate, StateSide, ANY_STATE};
pub use state::{split_state_names, StateRegistry, VOID_STATE};
pub use style::{Style, StyleValue, AUTO_STYLE};
