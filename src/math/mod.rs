//! Math utilities, mostly re-exported from `cgmath`.

pub use cgmath::*;

pub mod color;
pub use self::color::Color;

pub mod prelude {
    pub use super::color::Color;
    pub use cgmath::prelude::*;
    pub use cgmath::{Matrix2, Matrix3, Matrix4, Vector2, Vector3, Vector4};
}
