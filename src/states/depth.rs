//! Depth test server state.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::backends::{ShaderProgram, Visitor};
use crate::errors::Result;

use super::{mismatch, GraphicsState, StateId};

/// A pixel-wise comparison function.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Comparison {
    Never,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
    Equal,
    NotEqual,
    Always,
}

/// Depth test state: an optional comparison function (`None` disables the
/// test) and the depth write mask.
///
/// Note that even if the depth buffer exists and the depth mask is
/// non-zero, the depth buffer is not updated if the depth test is disabled.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct DepthTestState {
    pub function: Option<Comparison>,
    pub write: bool,
}

impl Default for DepthTestState {
    fn default() -> Self {
        DepthTestState {
            function: None,
            write: false,
        }
    }
}

impl DepthTestState {
    pub const ID: StateId = StateId("DepthTest");

    pub fn new(function: Comparison, write: bool) -> Self {
        DepthTestState {
            function: Some(function),
            write,
        }
    }
}

impl GraphicsState for DepthTestState {
    fn id(&self) -> Option<StateId> {
        Some(Self::ID)
    }

    fn apply(
        &self,
        visitor: &mut dyn Visitor,
        _: Option<&mut dyn ShaderProgram>,
    ) -> Result<()> {
        visitor.set_depth_test(self)
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
