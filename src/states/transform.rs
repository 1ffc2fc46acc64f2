//! The model transform, mirrored into shader uniforms instead of server
//! state. Merging composes matrices along the inheritance chain rather
//! than overwriting.

use std::any::Any;

use crate::backends::{ShaderProgram, Visitor};
use crate::errors::Result;
use crate::math::prelude::{Matrix4, SquareMatrix};

use super::uniforms::{ShaderUniforms, UniformEntry, UniformVariable};
use super::{approx_eq, mismatch, GraphicsState, StateId};

#[derive(Debug, Clone, Copy)]
pub struct TransformState {
    transform: Matrix4<f32>,
}

impl Default for TransformState {
    fn default() -> Self {
        TransformState {
            transform: Matrix4::identity(),
        }
    }
}

impl TransformState {
    pub const ID: StateId = StateId("Transform");

    pub fn new(transform: Matrix4<f32>) -> Self {
        TransformState { transform }
    }

    pub fn transform(&self) -> Matrix4<f32> {
        self.transform
    }

    pub fn set_transform(&mut self, transform: Matrix4<f32>) {
        self.transform = transform;
    }
}

fn uniform_transform(state: &TransformState) -> UniformVariable {
    state.transform.into()
}

impl ShaderUniforms for TransformState {
    const UNIFORMS: &'static [UniformEntry<Self>] = &[UniformEntry {
        name: "glaze_Transform",
        get: uniform_transform,
    }];
}

impl PartialEq for TransformState {
    fn eq(&self, other: &Self) -> bool {
        let lhs: &[f32; 16] = self.transform.as_ref();
        let rhs: &[f32; 16] = other.transform.as_ref();
        lhs.iter().zip(rhs.iter()).all(|(a, b)| approx_eq(*a, *b))
    }
}

impl GraphicsState for TransformState {
    fn id(&self) -> Option<StateId> {
        Some(Self::ID)
    }

    fn context_bound(&self) -> bool {
        false
    }

    fn apply(
        &self,
        _: &mut dyn Visitor,
        program: Option<&mut dyn ShaderProgram>,
    ) -> Result<()> {
        if let Some(program) = program {
            self.bind_uniforms(program)?;
        }

        Ok(())
    }

    /// Composes with the inherited transform: `other` is the enclosing
    /// scope, this instance is the local one.
    fn merge(&mut self, other: &dyn GraphicsState) -> Result<()> {
        match other.as_any().downcast_ref::<Self>() {
            Some(v) => {
                self.transform = v.transform * self.transform;
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
