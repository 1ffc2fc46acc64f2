use gl;
use gl::types::*;

use std::ffi::CString;
use std::thread;

use crate::backends::ShaderProgram;
use crate::errors::{Error, Result};
use crate::states::prelude::UniformVariable;
use crate::utils::{FastHashMap, HashValue};

use super::check;

/// The uniform surface of a linked GL program. The active-uniform table
/// and locations are read once at construction, so `set_uniform` never
/// round-trips to the driver for a name.
pub struct GlShaderProgram {
    id: GLuint,
    thread: thread::ThreadId,
    locations: FastHashMap<HashValue<str>, GLint>,
}

impl GlShaderProgram {
    /// Wraps a successfully linked program object.
    ///
    /// # Safety
    ///
    /// The context that owns `id` must be current on this thread, and `id`
    /// must name a linked program.
    pub unsafe fn from_raw(id: GLuint) -> Result<Self> {
        let mut count = 0;
        gl::GetProgramiv(id, gl::ACTIVE_UNIFORMS, &mut count);

        let mut max_len = 0;
        gl::GetProgramiv(id, gl::ACTIVE_UNIFORM_MAX_LENGTH, &mut max_len);
        check()?;

        let mut locations = FastHashMap::default();
        for i in 0..count as GLuint {
            let mut name = vec![0u8; max_len as usize + 1];
            let mut length = 0;
            let mut size = 0;
            let mut tp = 0;
            gl::GetActiveUniform(
                id,
                i,
                name.len() as GLsizei,
                &mut length,
                &mut size,
                &mut tp,
                name.as_mut_ptr() as *mut GLchar,
            );
            check()?;

            name.truncate(length as usize);
            let name = String::from_utf8(name)
                .map_err(|_| Error::Backend("Uniform name is unformatted.".into()))?;

            let c_name = CString::new(name.as_bytes())
                .map_err(|_| Error::Backend("Uniform name is unformatted.".into()))?;
            let location = gl::GetUniformLocation(id, c_name.as_ptr());
            check()?;

            locations.insert(name.as_str().into(), location);
        }

        Ok(GlShaderProgram {
            id,
            thread: thread::current().id(),
            locations,
        })
    }

    pub fn id(&self) -> GLuint {
        self.id
    }

    unsafe fn bind_uniform_variable(location: GLint, variable: &UniformVariable) -> Result<()> {
        match *variable {
            UniformVariable::I32(v) => gl::Uniform1i(location, v),
            UniformVariable::F32(v) => gl::Uniform1f(location, v),
            UniformVariable::Vector2f(v) => gl::Uniform2f(location, v[0], v[1]),
            UniformVariable::Vector3f(v) => gl::Uniform3f(location, v[0], v[1], v[2]),
            UniformVariable::Vector4f(v) => gl::Uniform4f(location, v[0], v[1], v[2], v[3]),
            UniformVariable::Matrix2f(v, transpose) => {
                let transpose = if transpose { gl::TRUE } else { gl::FALSE };
                gl::UniformMatrix2fv(location, 1, transpose, v[0].as_ptr())
            }
            UniformVariable::Matrix3f(v, transpose) => {
                let transpose = if transpose { gl::TRUE } else { gl::FALSE };
                gl::UniformMatrix3fv(location, 1, transpose, v[0].as_ptr())
            }
            UniformVariable::Matrix4f(v, transpose) => {
                let transpose = if transpose { gl::TRUE } else { gl::FALSE };
                gl::UniformMatrix4fv(location, 1, transpose, v[0].as_ptr())
            }
        }

        check()
    }
}

impl ShaderProgram for GlShaderProgram {
    fn is_active(&self, name: &str) -> bool {
        self.locations.contains_key(&name.into())
    }

    /// The program must be in use (`gl::UseProgram`) when this runs.
    fn set_uniform(&mut self, name: &str, variable: &UniformVariable) -> Result<()> {
        debug_assert_eq!(
            self.thread,
            thread::current().id(),
            "GlShaderProgram is bound to the thread its context is current on."
        );

        let location = *self
            .locations
            .get(&name.into())
            .ok_or_else(|| Error::UniformUndefined(name.into()))?;

        unsafe { Self::bind_uniform_variable(location, variable) }
    }
}
