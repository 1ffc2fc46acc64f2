//! Draw buffer selection and the color write mask.

use std::any::Any;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::backends::{ShaderProgram, Visitor};
use crate::errors::Result;

use super::{mismatch, GraphicsState, StateId};

/// A color buffer fragment colors are written to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum DrawBuffer {
    NoBuffer,
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
    Front,
    Back,
    ColorAttachment(u8),
}

/// The set of draw buffers subsequent rendering writes to, plus the
/// per-channel color write mask.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RenderBufferState {
    pub draw_buffers: SmallVec<[DrawBuffer; 4]>,
    pub color_write: (bool, bool, bool, bool),
}

impl Default for RenderBufferState {
    fn default() -> Self {
        let mut draw_buffers = SmallVec::new();
        draw_buffers.push(DrawBuffer::Back);

        RenderBufferState {
            draw_buffers,
            color_write: (true, true, true, true),
        }
    }
}

impl RenderBufferState {
    pub const ID: StateId = StateId("RenderBuffer");

    pub fn new<T>(draw_buffers: T) -> Self
    where
        T: IntoIterator<Item = DrawBuffer>,
    {
        RenderBufferState {
            draw_buffers: draw_buffers.into_iter().collect(),
            color_write: (true, true, true, true),
        }
    }
}

impl GraphicsState for RenderBufferState {
    fn id(&self) -> Option<StateId> {
        Some(Self::ID)
    }

    fn apply(
        &self,
        visitor: &mut dyn Visitor,
        _: Option<&mut dyn ShaderProgram>,
    ) -> Result<()> {
        visitor.set_render_buffers(self)
    }

    fn merge(&mut self, other: &dyn GraphicsState) -> Result<()> {
        match other.as_any().downcast_ref::<Self>() {
            Some(v) => {
                *self = v.clone();
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
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
