//! Timeline building: turns a matched rule into a transition instruction.
//!
//! # Key Concepts
//!
//! - **Compiled steps**: validated `style`/`animate` steps with offsets and
//!   timings worked out at compile time
//! - **Resolver**: substitutes `$name` tokens from override and default locals
//! - **Element context**: read-only source for auto (`*`) values
//! - **Instruction**: the owned, serializable result handed to playback

mod builder;
mod element;
mod instruction;
mod resolve;
mod step;
mod timing;

pub use builder::TimelineBuilder;
pub use element::ElementContext;
pub use instruction::{Keyframe, Timeline, TransitionInstruction};
pub use resolve::{has_tokens, ResolveError, Resolver};
pub use step::{CompiledStep, TargetPlan, TimingPlan};
pub use timing::{parse_timing, Timing, TimingError};
