//! Typed render states that can be captured from a live context, diffed
//! against a previous set and re-applied only when they actually changed.

pub mod blend;
pub mod depth;
pub mod keeper;
pub mod raster;
pub mod render_buffer;
pub mod set;
pub mod transform;
pub mod uniforms;
pub mod viewport;

pub mod prelude {
    pub use super::blend::{BlendFactor, BlendState, BlendValue, Equation};
    pub use super::depth::{Comparison, DepthTestState};
    pub use super::keeper::StateKeeper;
    pub use super::raster::{LineState, OffsetModes, PolygonMode, PolygonModeState,
                            PolygonOffsetState};
    pub use super::render_buffer::{DrawBuffer, RenderBufferState};
    pub use super::set::StateSet;
    pub use super::transform::TransformState;
    pub use super::uniforms::{ShaderUniforms, UniformEntry, UniformVariable,
                              UniformVariableType};
    pub use super::viewport::ViewportState;
    pub use super::{current_state, default_state, GraphicsState, StateId};
}

use std::any::Any;
use std::fmt;

use crate::backends::{ShaderProgram, Visitor};
use crate::errors::{Error, Result};

use self::prelude::*;

/// Identifies a render state kind. At most one state instance per
/// identifier is live in a `StateSet`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct StateId(pub &'static str);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tolerance used wherever state parameters hold floating point values.
pub(crate) const EPSILON: f32 = 1e-6;

#[inline]
pub(crate) fn approx_eq(lhs: f32, rhs: f32) -> bool {
    (lhs - rhs).abs() < EPSILON
}

/// A server-side render state. Implementations own a handful of OpenGL
/// parameter values and know how to push them into a context, merge with a
/// predecessor and compare for equality.
pub trait GraphicsState: fmt::Debug {
    /// The identifier of this state kind, or `None` for custom states that
    /// live in the unordered tail of a `StateSet`.
    fn id(&self) -> Option<StateId>;

    /// Whether this state carries over from an enclosing scope when a
    /// nested set leaves it unspecified.
    fn inheritable(&self) -> bool {
        true
    }

    /// Whether this state maps to real driver-tracked state, as opposed to
    /// a pure shader-uniform value.
    fn context_bound(&self) -> bool {
        true
    }

    /// Issues whatever native calls are needed to make the server (and/or
    /// uniform) state match this instance. Re-issues commands
    /// unconditionally; the equality-gated skip lives in `StateSet::apply`.
    fn apply(
        &self,
        visitor: &mut dyn Visitor,
        program: Option<&mut dyn ShaderProgram>,
    ) -> Result<()>;

    /// Overwrites (or, for composing kinds like `TransformState`, combines)
    /// this instance's fields with `other`'s. Fails with `StateMismatch`
    /// when `other` is a different concrete kind.
    fn merge(&mut self, other: &dyn GraphicsState) -> Result<()>;

    /// Identifier check first, then field-by-field comparison. Floats
    /// compare with a tolerance. Always `false` across concrete kinds.
    fn eq_state(&self, other: &dyn GraphicsState) -> bool;

    /// A deep copy; owned buffers and matrices are cloned.
    fn duplicate(&self) -> Box<dyn GraphicsState>;

    fn as_any(&self) -> &dyn Any;
}

/// Returns the default-constructed state for one of the built-in kinds.
pub fn default_state(id: StateId) -> Result<Box<dyn GraphicsState>> {
    if id == BlendState::ID {
        Ok(Box::new(BlendState::default()))
    } else if id == DepthTestState::ID {
        Ok(Box::new(DepthTestState::default()))
    } else if id == ViewportState::ID {
        Ok(Box::new(ViewportState::default()))
    } else if id == PolygonModeState::ID {
        Ok(Box::new(PolygonModeState::default()))
    } else if id == PolygonOffsetState::ID {
        Ok(Box::new(PolygonOffsetState::default()))
    } else if id == LineState::ID {
        Ok(Box::new(LineState::default()))
    } else if id == RenderBufferState::ID {
        Ok(Box::new(RenderBufferState::default()))
    } else if id == TransformState::ID {
        Ok(Box::new(TransformState::default()))
    } else {
        Err(Error::StateUnsupported(id))
    }
}

/// Snapshots the live server state for one of the built-in kinds.
///
/// `TransformState` is not context bound, so its "current" value is the
/// identity transform.
pub fn current_state(visitor: &dyn Visitor, id: StateId) -> Result<Box<dyn GraphicsState>> {
    if id == BlendState::ID {
        Ok(Box::new(visitor.blend()?))
    } else if id == DepthTestState::ID {
        Ok(Box::new(visitor.depth_test()?))
    } else if id == ViewportState::ID {
        Ok(Box::new(visitor.viewport()?))
    } else if id == PolygonModeState::ID {
        Ok(Box::new(visitor.polygon_mode()?))
    } else if id == PolygonOffsetState::ID {
        Ok(Box::new(visitor.polygon_offset()?))
    } else if id == LineState::ID {
        Ok(Box::new(visitor.line()?))
    } else if id == RenderBufferState::ID {
        Ok(Box::new(visitor.render_buffers()?))
    } else if id == TransformState::ID {
        Ok(Box::new(TransformState::default()))
    } else {
        Err(Error::StateUnsupported(id))
    }
}

/// The built-in state kinds, in the order `StateSet::default_set` defines
/// them.
pub(crate) const BUILT_IN_STATES: [StateId; 8] = [
    BlendState::ID,
    DepthTestState::ID,
    ViewportState::ID,
    PolygonModeState::ID,
    PolygonOffsetState::ID,
    LineState::ID,
    RenderBufferState::ID,
    TransformState::ID,
];

pub(crate) fn mismatch(expect: StateId, found: &dyn GraphicsState) -> Error {
    Error::StateMismatch {
        expect,
        found: found
            .id()
            .map(|v| v.to_string())
            .unwrap_or_else(|| "Custom".to_string()),
    }
}
