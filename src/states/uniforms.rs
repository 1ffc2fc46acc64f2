//! Uniform values and the static per-type tables that replace runtime
//! reflection when a state mirrors itself into shader uniforms.

use crate::backends::ShaderProgram;
use crate::errors::Result;
use crate::math::prelude::{Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};

/// Uniform variable type.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UniformVariableType {
    I32,
    F32,
    Vector2f,
    Vector3f,
    Vector4f,
    Matrix2f,
    Matrix3f,
    Matrix4f,
}

/// Uniform variable for a shader program object. Each matrix based
/// `UniformVariable` is assumed to be supplied in row major order with a
/// optional transpose.
#[derive(Debug, Copy, Clone)]
pub enum UniformVariable {
    I32(i32),
    F32(f32),
    Vector2f([f32; 2]),
    Vector3f([f32; 3]),
    Vector4f([f32; 4]),
    Matrix2f([[f32; 2]; 2], bool),
    Matrix3f([[f32; 3]; 3], bool),
    Matrix4f([[f32; 4]; 4], bool),
}

impl UniformVariable {
    pub fn variable_type(&self) -> UniformVariableType {
        match *self {
            UniformVariable::I32(_) => UniformVariableType::I32,
            UniformVariable::F32(_) => UniformVariableType::F32,
            UniformVariable::Vector2f(_) => UniformVariableType::Vector2f,
            UniformVariable::Vector3f(_) => UniformVariableType::Vector3f,
            UniformVariable::Vector4f(_) => UniformVariableType::Vector4f,
            UniformVariable::Matrix2f(_, _) => UniformVariableType::Matrix2f,
            UniformVariable::Matrix3f(_, _) => UniformVariableType::Matrix3f,
            UniformVariable::Matrix4f(_, _) => UniformVariableType::Matrix4f,
        }
    }
}

impl Into<UniformVariable> for i32 {
    fn into(self) -> UniformVariable {
        UniformVariable::I32(self)
    }
}

impl Into<UniformVariable> for f32 {
    fn into(self) -> UniformVariable {
        UniformVariable::F32(self)
    }
}

impl Into<UniformVariable> for Vector2<f32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector2f(*self.as_ref())
    }
}

impl Into<UniformVariable> for Vector3<f32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector3f(*self.as_ref())
    }
}

impl Into<UniformVariable> for Vector4<f32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector4f(*self.as_ref())
    }
}

impl Into<UniformVariable> for Matrix2<f32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Matrix2f(*self.as_ref(), false)
    }
}

impl Into<UniformVariable> for Matrix3<f32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Matrix3f(*self.as_ref(), false)
    }
}

impl Into<UniformVariable> for Matrix4<f32> {
    fn into(self) -> UniformVariable {
        UniformVariable::Matrix4f(*self.as_ref(), false)
    }
}

impl Into<UniformVariable> for [f32; 2] {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector2f(self)
    }
}

impl Into<UniformVariable> for [f32; 3] {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector3f(self)
    }
}

impl Into<UniformVariable> for [f32; 4] {
    fn into(self) -> UniformVariable {
        UniformVariable::Vector4f(self)
    }
}

impl Into<UniformVariable> for [[f32; 4]; 4] {
    fn into(self) -> UniformVariable {
        UniformVariable::Matrix4f(self, false)
    }
}

/// One row of a state's uniform table: a uniform name and the accessor
/// that reads its value out of the state.
pub struct UniformEntry<S: 'static> {
    pub name: &'static str,
    pub get: fn(&S) -> UniformVariable,
}

/// States that mirror (part of) themselves into shader uniforms declare a
/// static table of name/accessor rows instead of discovering members with
/// runtime reflection.
pub trait ShaderUniforms: Sized + 'static {
    const UNIFORMS: &'static [UniformEntry<Self>];

    /// Pushes every table entry the program lists as active. Inactive
    /// names are skipped silently; a shader is free to consume a subset.
    fn bind_uniforms(&self, program: &mut dyn ShaderProgram) -> Result<()> {
        for entry in Self::UNIFORMS {
            if program.is_active(entry.name) {
                program.set_uniform(entry.name, &(entry.get)(self))?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn variable_types() {
        let v: UniformVariable = 1.0f32.into();
        assert_eq!(v.variable_type(), UniformVariableType::F32);

        let v: UniformVariable = Vector3::new(0.0f32, 1.0, 2.0).into();
        assert_eq!(v.variable_type(), UniformVariableType::Vector3f);

        let v: UniformVariable = Matrix4::from_scale(2.0f32).into();
        match v {
            UniformVariable::Matrix4f(m, transpose) => {
                assert!(!transpose);
                assert_eq!(m[0][0], 2.0);
            }
            v => panic!("unexpected variable {:?}", v),
        }
        assert_eq!(v.variable_type(), UniformVariableType::Matrix4f);
    }
}
