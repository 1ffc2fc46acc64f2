//! Viewport server state.

use std::any::Any;

use crate::backends::{ShaderProgram, Visitor};
use crate::errors::Result;
use crate::math::prelude::Vector2;

use super::{mismatch, GraphicsState, StateId};

/// The viewport rectangle, relative to the lower-left corner of the
/// window, in pixels. Equality is exact.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ViewportState {
    pub position: Vector2<i32>,
    pub size: Vector2<u32>,
}

impl Default for ViewportState {
    fn default() -> Self {
        ViewportState {
            position: Vector2::new(0, 0),
            size: Vector2::new(0, 0),
        }
    }
}

impl ViewportState {
    pub const ID: StateId = StateId("Viewport");

    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        ViewportState {
            position: Vector2::new(x, y),
            size: Vector2::new(width, height),
        }
    }
}

impl GraphicsState for ViewportState {
    fn id(&self) -> Option<StateId> {
        Some(Self::ID)
    }

    /// The viewport is tied to the bound surface's dimensions; a nested
    /// scope must restate it rather than inherit it.
    fn inheritable(&self) -> bool {
        false
    }

    fn apply(
        &self,
        visitor: &mut dyn Visitor,
        _: Option<&mut dyn ShaderProgram>,
    ) -> Result<()> {
        visitor.set_viewport(self)
    }

    fn merge(&mut self, other: &dyn GraphicsState) -> Result<()> {
        match other.as_any().downcast_ref::<Self>() {
            Some(v) => {
                *self = *v;
                Ok(())
            }
            None => Err(mismatch(Self::ID, other)),
        }
    }

    fn eq_state(&self, other: &dyn GraphicsState) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .map_or(false, |v| self == v)
    }

    fn duplicate(&self) -> Box<dyn GraphicsState> {
        Box::new(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
