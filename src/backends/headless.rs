//! A backend that tracks state without a graphics device behind it.

use crate::errors::Result;
use crate::states::prelude::*;

use super::gl::capabilities::Capabilities;
use super::Visitor;

/// Stores the last value applied for every state kind and serves it back
/// from the snapshot getters. Reports a full capability set.
pub struct HeadlessVisitor {
    capabilities: Capabilities,
    blend: BlendState,
    depth_test: DepthTestState,
    viewport: ViewportState,
    polygon_mode: PolygonModeState,
    polygon_offset: PolygonOffsetState,
    line: LineState,
    render_buffers: RenderBufferState,
    applies: usize,
}

impl Default for HeadlessVisitor {
    fn default() -> Self {
        HeadlessVisitor::new()
    }
}

impl HeadlessVisitor {
    pub fn new() -> Self {
        HeadlessVisitor {
            capabilities: Capabilities::full(),
            blend: BlendState::default(),
            depth_test: DepthTestState::default(),
            viewport: ViewportState::default(),
            polygon_mode: PolygonModeState::default(),
            polygon_offset: PolygonOffsetState::default(),
            line: LineState::default(),
            render_buffers: RenderBufferState::default(),
            applies: 0,
        }
    }

    /// How many setter calls this visitor has received. Diff tests use it
    /// to observe which applications were skipped.
    pub fn applies(&self) -> usize {
        self.applies
    }
}

impl Visitor for HeadlessVisitor {
    fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    fn set_blend(&mut self, state: &BlendState) -> Result<()> {
        self.applies += 1;
        self.blend = *state;
        Ok(())
    }

    fn blend(&self) -> Result<BlendState> {
        Ok(self.blend)
    }

    fn set_depth_test(&mut self, state: &DepthTestState) -> Result<()> {
        self.applies += 1;
        self.depth_test = *state;
        Ok(())
    }

    fn depth_test(&self) -> Result<DepthTestState> {
        Ok(self.depth_test)
    }

    fn set_viewport(&mut self, state: &ViewportState) -> Result<()> {
        self.applies += 1;
        self.viewport = *state;
        Ok(())
    }

    fn viewport(&self) -> Result<ViewportState> {
        Ok(self.viewport)
    }

    fn set_polygon_mode(&mut self, state: &PolygonModeState) -> Result<()> {
        self.applies += 1;
        self.polygon_mode = *state;
        Ok(())
    }

    fn polygon_mode(&self) -> Result<PolygonModeState> {
        Ok(self.polygon_mode)
    }

    fn set_polygon_offset(&mut self, state: &PolygonOffsetState) -> Result<()> {
        self.applies += 1;
        self.polygon_offset = *state;
        Ok(())
    }

    fn polygon_offset(&self) -> Result<PolygonOffsetState> {
        Ok(self.polygon_offset)
    }

    fn set_line(&mut self, state: &LineState) -> Result<()> {
        self.applies += 1;
        self.line = *state;
        Ok(())
    }

    fn line(&self) -> Result<LineState> {
        Ok(self.line)
    }

    fn set_render_buffers(&mut self, state: &RenderBufferState) -> Result<()> {
        self.applies += 1;
        self.render_buffers = state.clone();
        Ok(())
    }

    fn render_buffers(&self) -> Result<RenderBufferState> {
        Ok(self.render_buffers.clone())
    }
}
