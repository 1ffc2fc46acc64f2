use crate::states::StateId;

#[derive(Debug, Fail)]
pub enum Error {
    /// The state identifier is not one of the supported kinds.
    #[fail(display = "State '{}' is not supported.", _0)]
    StateUnsupported(StateId),
    /// The requested configuration needs an OpenGL feature the active
    /// driver does not expose.
    #[fail(display = "OpenGL implementation doesn't support {}.", _0)]
    Requirement(String),
    /// `merge` received a state of a different concrete kind.
    #[fail(display = "Expects state '{}', found '{}'.", expect, found)]
    StateMismatch { expect: StateId, found: String },
    #[fail(display = "Uniform '{}' is undefined in shader sources.", _0)]
    UniformUndefined(String),
    #[fail(display = "[GL] {}", _0)]
    Backend(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;
