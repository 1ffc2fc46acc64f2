//! The backend of the state tracker, responsible for only one thing:
//! pushing state values into (and reading them back out of) the underlying
//! graphics API.

pub mod gl;
pub mod headless;

use crate::errors::Result;
use crate::states::prelude::*;

use self::gl::capabilities::Capabilities;

/// The server-state surface the state objects are written against. The GL
/// implementation talks to a live context; the headless implementation
/// records values, which makes it usable for dry-run tracking and tests.
pub trait Visitor {
    fn capabilities(&self) -> &Capabilities;

    fn set_blend(&mut self, state: &BlendState) -> Result<()>;
    fn blend(&self) -> Result<BlendState>;

    fn set_depth_test(&mut self, state: &DepthTestState) -> Result<()>;
    fn depth_test(&self) -> Result<DepthTestState>;

    fn set_viewport(&mut self, state: &ViewportState) -> Result<()>;
    fn viewport(&self) -> Result<ViewportState>;

    fn set_polygon_mode(&mut self, state: &PolygonModeState) -> Result<()>;
    fn polygon_mode(&self) -> Result<PolygonModeState>;

    fn set_polygon_offset(&mut self, state: &PolygonOffsetState) -> Result<()>;
    fn polygon_offset(&self) -> Result<PolygonOffsetState>;

    fn set_line(&mut self, state: &LineState) -> Result<()>;
    fn line(&self) -> Result<LineState>;

    fn set_render_buffers(&mut self, state: &RenderBufferState) -> Result<()>;
    fn render_buffers(&self) -> Result<RenderBufferState>;
}

/// The uniform surface of a linked shader program.
pub trait ShaderProgram {
    /// Whether `name` is an active uniform of the program.
    fn is_active(&self, name: &str) -> bool;

    /// Binds `variable` to the uniform `name`. Fails with
    /// `UniformUndefined` when the program does not expose the name.
    fn set_uniform(&mut self, name: &str, variable: &UniformVariable) -> Result<()>;
}

/// Creates a visitor over the OpenGL context that is current on the
/// calling thread.
///
/// # Safety
///
/// A GL context must be current on this thread and must stay current for
/// the visitor's lifetime; the loaded function pointers must belong to it.
pub unsafe fn new() -> Result<Box<dyn Visitor>> {
    let visitor = self::gl::visitor::GlVisitor::new()?;
    Ok(Box::new(visitor))
}

pub fn new_headless() -> Box<dyn Visitor> {
    Box::new(self::headless::HeadlessVisitor::new())
}
