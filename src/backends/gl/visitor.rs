use gl;
use gl::types::*;

use std::thread;

use smallvec::SmallVec;

use crate::backends::Visitor;
use crate::errors::{Error, Result};
use crate::math::prelude::Vector2;
use crate::math::Color;
use crate::states::prelude::*;

use super::capabilities::Capabilities;
use super::{check, types};

/// A visitor over the live OpenGL context of the calling thread. Contexts
/// are thread-affine, so the owning thread is captured at construction and
/// asserted on every call.
pub struct GlVisitor {
    capabilities: Capabilities,
    thread: thread::ThreadId,
}

impl GlVisitor {
    /// # Safety
    ///
    /// A GL context must be current on this thread and must stay current
    /// for the visitor's lifetime; the loaded function pointers must belong
    /// to it.
    pub unsafe fn new() -> Result<Self> {
        let capabilities = Capabilities::parse()?;
        info!("GlVisitor {:#?}", capabilities);

        Ok(GlVisitor {
            capabilities,
            thread: thread::current().id(),
        })
    }

    #[inline]
    fn check_thread(&self) {
        debug_assert_eq!(
            self.thread,
            thread::current().id(),
            "GlVisitor is bound to the thread its context is current on."
        );
    }
}

impl Visitor for GlVisitor {
    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn set_blend(&mut self, state: &BlendState) -> Result<()> {
        self.check_thread();
        state.validate(&self.capabilities)?;

        unsafe {
            if state.enabled() {
                gl::Enable(gl::BLEND);

                if state.equation_separated() {
                    gl::BlendEquationSeparate(
                        state.equation().into(),
                        state.alpha_equation().into(),
                    );
                } else {
                    gl::BlendEquation(state.equation().into());
                }

                if state.function_separated() {
                    gl::BlendFuncSeparate(
                        state.src_factor().into(),
                        state.dst_factor().into(),
                        state.alpha_src_factor().into(),
                        state.alpha_dst_factor().into(),
                    );
                } else {
                    gl::BlendFunc(state.src_factor().into(), state.dst_factor().into());
                }

                if let Some(v) = state.color() {
                    gl::BlendColor(v.r, v.g, v.b, v.a);
                }
            } else {
                gl::Disable(gl::BLEND);
            }

            check()
        }
    }

    fn blend(&self) -> Result<BlendState> {
        self.check_thread();

        unsafe {
            let enabled = gl::IsEnabled(gl::BLEND) == gl::TRUE;

            let mut rgb_equation = 0;
            let mut alpha_equation = 0;
            let mut rgb_src = 0;
            let mut rgb_dst = 0;
            let mut alpha_src = 0;
            let mut alpha_dst = 0;
            gl::GetIntegerv(gl::BLEND_EQUATION_RGB, &mut rgb_equation);
            gl::GetIntegerv(gl::BLEND_EQUATION_ALPHA, &mut alpha_equation);
            gl::GetIntegerv(gl::BLEND_SRC_RGB, &mut rgb_src);
            gl::GetIntegerv(gl::BLEND_DST_RGB, &mut rgb_dst);
            gl::GetIntegerv(gl::BLEND_SRC_ALPHA, &mut alpha_src);
            gl::GetIntegerv(gl::BLEND_DST_ALPHA, &mut alpha_dst);

            let mut color = [0.0f32; 4];
            gl::GetFloatv(gl::BLEND_COLOR, color.as_mut_ptr());
            check()?;

            let rgb_src = types::blend_factor(rgb_src as GLenum)?;
            let rgb_dst = types::blend_factor(rgb_dst as GLenum)?;
            let alpha_src = types::blend_factor(alpha_src as GLenum)?;
            let alpha_dst = types::blend_factor(alpha_dst as GLenum)?;

            Ok(BlendState::from_parts(
                enabled,
                types::equation(rgb_equation as GLenum)?,
                types::equation(alpha_equation as GLenum)?,
                rgb_src,
                rgb_dst,
                alpha_src,
                alpha_dst,
                Color::from(color),
            ))
        }
    }

    fn set_depth_test(&mut self, state: &DepthTestState) -> Result<()> {
        self.check_thread();

        unsafe {
            // Even if the depth mask is non-zero, the depth buffer is not
            // updated while the depth test is disabled.
            if state.function.is_some() || state.write {
                gl::Enable(gl::DEPTH_TEST);
            } else {
                gl::Disable(gl::DEPTH_TEST);
            }

            let function = state.function.unwrap_or(Comparison::Always);
            gl::DepthFunc(function.into());
            gl::DepthMask(if state.write { gl::TRUE } else { gl::FALSE });

            check()
        }
    }

    fn depth_test(&self) -> Result<DepthTestState> {
        self.check_thread();

        unsafe {
            let enabled = gl::IsEnabled(gl::DEPTH_TEST) == gl::TRUE;

            let mut function = 0;
            gl::GetIntegerv(gl::DEPTH_FUNC, &mut function);

            let mut write = 0;
            gl::GetBooleanv(gl::DEPTH_WRITEMASK, &mut write);
            check()?;

            let function = if enabled {
                Some(types::comparison(function as GLenum)?)
            } else {
                None
            };

            Ok(DepthTestState {
                function,
                write: write == gl::TRUE,
            })
        }
    }

    fn set_viewport(&mut self, state: &ViewportState) -> Result<()> {
        self.check_thread();

        unsafe {
            gl::Viewport(
                state.position.x,
                state.position.y,
                state.size.x as GLsizei,
                state.size.y as GLsizei,
            );

            check()
        }
    }

    fn viewport(&self) -> Result<ViewportState> {
        self.check_thread();

        unsafe {
            let mut rect = [0 as GLint; 4];
            gl::GetIntegerv(gl::VIEWPORT, rect.as_mut_ptr());
            check()?;

            Ok(ViewportState {
                position: Vector2::new(rect[0], rect[1]),
                size: Vector2::new(rect[2] as u32, rect[3] as u32),
            })
        }
    }

    fn set_polygon_mode(&mut self, state: &PolygonModeState) -> Result<()> {
        self.check_thread();

        unsafe {
            gl::PolygonMode(gl::FRONT_AND_BACK, state.mode.into());
            check()
        }
    }

    fn polygon_mode(&self) -> Result<PolygonModeState> {
        self.check_thread();

        unsafe {
            // One mode per face; we only ever set both faces at once.
            let mut modes = [0 as GLint; 2];
            gl::GetIntegerv(gl::POLYGON_MODE, modes.as_mut_ptr());
            check()?;

            Ok(PolygonModeState {
                mode: types::polygon_mode(modes[0] as GLenum)?,
            })
        }
    }

    fn set_polygon_offset(&mut self, state: &PolygonOffsetState) -> Result<()> {
        self.check_thread();

        unsafe {
            let toggles = [
                (gl::POLYGON_OFFSET_FILL, state.modes.fill),
                (gl::POLYGON_OFFSET_LINE, state.modes.line),
                (gl::POLYGON_OFFSET_POINT, state.modes.point),
            ];

            for &(cap, on) in &toggles {
                if on {
                    gl::Enable(cap);
                } else {
                    gl::Disable(cap);
                }
            }

            if state.modes.any() {
                gl::PolygonOffset(state.factor, state.units);
            }

            check()
        }
    }

    fn polygon_offset(&self) -> Result<PolygonOffsetState> {
        self.check_thread();

        unsafe {
            let mut factor = 0.0f32;
            let mut units = 0.0f32;
            gl::GetFloatv(gl::POLYGON_OFFSET_FACTOR, &mut factor);
            gl::GetFloatv(gl::POLYGON_OFFSET_UNITS, &mut units);

            let modes = OffsetModes {
                fill: gl::IsEnabled(gl::POLYGON_OFFSET_FILL) == gl::TRUE,
                line: gl::IsEnabled(gl::POLYGON_OFFSET_LINE) == gl::TRUE,
                point: gl::IsEnabled(gl::POLYGON_OFFSET_POINT) == gl::TRUE,
            };
            check()?;

            Ok(PolygonOffsetState {
                factor,
                units,
                modes,
            })
        }
    }

    fn set_line(&mut self, state: &LineState) -> Result<()> {
        self.check_thread();

        unsafe {
            gl::LineWidth(state.width);
            check()
        }
    }

    fn line(&self) -> Result<LineState> {
        self.check_thread();

        unsafe {
            let mut width = 1.0f32;
            gl::GetFloatv(gl::LINE_WIDTH, &mut width);
            check()?;

            Ok(LineState { width })
        }
    }

    fn set_render_buffers(&mut self, state: &RenderBufferState) -> Result<()> {
        self.check_thread();

        if state.draw_buffers.len() > 1 && !self.capabilities.supports_draw_buffers() {
            return Err(Error::Requirement("multiple draw buffers".into()));
        }

        if state.draw_buffers.len() > self.capabilities.max_draw_buffers as usize {
            return Err(Error::Requirement(format!(
                "{} draw buffers (limit is {})",
                state.draw_buffers.len(),
                self.capabilities.max_draw_buffers
            )));
        }

        unsafe {
            let buffers: SmallVec<[GLenum; 4]> = state
                .draw_buffers
                .iter()
                .map(|v| GLenum::from(*v))
                .collect();
            gl::DrawBuffers(buffers.len() as GLsizei, buffers.as_ptr());

            let (r, g, b, a) = state.color_write;
            gl::ColorMask(r as GLboolean, g as GLboolean, b as GLboolean, a as GLboolean);

            check()
        }
    }

    fn render_buffers(&self) -> Result<RenderBufferState> {
        self.check_thread();

        unsafe {
            let mut draw_buffers: SmallVec<[DrawBuffer; 4]> = SmallVec::new();
            for i in 0..self.capabilities.max_draw_buffers {
                let mut buffer = 0;
                gl::GetIntegerv(gl::DRAW_BUFFER0 + i as GLenum, &mut buffer);
                draw_buffers.push(types::draw_buffer(buffer as GLenum)?);
            }

            // Trailing NoBuffer entries carry no information.
            while draw_buffers.len() > 1 && draw_buffers.last() == Some(&DrawBuffer::NoBuffer) {
                draw_buffers.pop();
            }

            let mut mask = [0 as GLboolean; 4];
            gl::GetBooleanv(gl::COLOR_WRITEMASK, mask.as_mut_ptr());
            check()?;

            Ok(RenderBufferState {
                draw_buffers,
                color_write: (
                    mask[0] == gl::TRUE,
                    mask[1] == gl::TRUE,
                    mask[2] == gl::TRUE,
                    mask[3] == gl::TRUE,
                ),
            })
        }
    }
}
