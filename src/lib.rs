//! # What is This?
//!
//! Glaze is a small OpenGL render-state tracking library. It models the
//! mutually-exclusive server states of a context (blending, depth test,
//! viewport, rasterization, draw buffers) as typed objects that can be:
//!
//! - captured from the live context (`StateSet::current`);
//! - grouped into identifier-keyed sets and applied in bulk, with an
//!   equality-gated skip so unchanged state never hits the driver again
//!   (`StateSet::apply`);
//! - merged along inheritance chains, where most kinds overwrite and the
//!   transform composes (`StateSet::merge`);
//! - saved and restored on scope exit (`StateKeeper`).
//!
//! States that have no server-side counterpart mirror themselves into
//! shader uniforms through a static per-type table instead of runtime
//! reflection (`ShaderUniforms`).
//!
//! Glaze does not create windows or contexts; callers bring their own and
//! keep every call on the thread the context is current on.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub mod backends;
pub mod errors;
pub mod math;
pub mod states;
pub mod utils;

pub mod prelude {
    pub use crate::backends::{new_headless, ShaderProgram, Visitor};
    pub use crate::errors::{Error, Result};
    pub use crate::math::Color;
    pub use crate::states::prelude::*;
}
