pub mod capabilities;
pub mod program;
pub mod types;
pub mod visitor;

use crate::errors::{Error, Result};

/// Maps `gl::GetError` into our error type. Must run on the thread that
/// owns the context.
pub(crate) unsafe fn check() -> Result<()> {
    match gl::GetError() {
        gl::NO_ERROR => Ok(()),

        gl::INVALID_ENUM => Err(Error::Backend(
            "An unacceptable value is specified for an enumerated argument.".into(),
        )),

        gl::INVALID_VALUE => Err(Error::Backend("A numeric argument is out of range.".into())),

        gl::INVALID_OPERATION => Err(Error::Backend(
            "The specified operation is not allowed in the current state.".into(),
        )),

        gl::OUT_OF_MEMORY => Err(Error::Backend(
            "There is not enough memory left to execute the command.".into(),
        )),

        _ => Err(Error::Backend("Oops, unknown OpenGL error.".into())),
    }
}
