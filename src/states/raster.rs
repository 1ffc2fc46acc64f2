//! Rasterization server states: polygon mode, polygon offset and line
//! width.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::backends::{ShaderProgram, Visitor};
use crate::errors::Result;

use super::{approx_eq, mismatch, GraphicsState, StateId};

/// How polygons are rasterized.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum PolygonMode {
    Point,
    Line,
    Fill,
}

/// Polygon rasterization state, applied to both front- and back-facing
/// polygons.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct PolygonModeState {
    pub mode: PolygonMode,
}

impl Default for PolygonModeState {
    fn default() -> Self {
        PolygonModeState {
            mode: PolygonMode::Fill,
        }
    }
}

impl PolygonModeState {
    pub const ID: StateId = StateId("PolygonMode");

    pub fn new(mode: PolygonMode) -> Self {
        PolygonModeState { mode }
    }
}

impl GraphicsState for PolygonModeState {
    fn id(&self) -> Option<StateId> {
        Some(Self::ID)
    }

    fn apply(
        &self,
        visitor: &mut dyn Visitor,
        _: Option<&mut dyn ShaderProgram>,
    ) -> Result<()> {
        visitor.set_polygon_mode(self)
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

/// Which rasterization modes a polygon offset participates in.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub struct OffsetModes {
    pub fill: bool,
    pub line: bool,
    pub point: bool,
}

impl OffsetModes {
    pub fn fill() -> Self {
        OffsetModes {
            fill: true,
            line: false,
            point: false,
        }
    }

    pub fn any(&self) -> bool {
        self.fill || self.line || self.point
    }
}

/// The scale and units used to calculate depth values for offset
/// polygons.
#[derive(Debug, Clone, Copy)]
pub struct PolygonOffsetState {
    pub factor: f32,
    pub units: f32,
    pub modes: OffsetModes,
}

impl Default for PolygonOffsetState {
    fn default() -> Self {
        PolygonOffsetState {
            factor: 0.0,
            units: 0.0,
            modes: OffsetModes::default(),
        }
    }
}

impl PolygonOffsetState {
    pub const ID: StateId = StateId("PolygonOffset");

    pub fn new(factor: f32, units: f32, modes: OffsetModes) -> Self {
        PolygonOffsetState {
            factor,
            units,
            modes,
        }
    }
}

impl PartialEq for PolygonOffsetState {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.factor, other.factor)
            && approx_eq(self.units, other.units)
            && self.modes == other.modes
    }
}

impl GraphicsState for PolygonOffsetState {
    fn id(&self) -> Option<StateId> {
        Some(Self::ID)
    }

    fn apply(
        &self,
        visitor: &mut dyn Visitor,
        _: Option<&mut dyn ShaderProgram>,
    ) -> Result<()> {
        visitor.set_polygon_offset(self)
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

/// Rasterized line width, in pixels.
#[derive(Debug, Clone, Copy)]
pub struct LineState {
    pub width: f32,
}

impl Default for LineState {
    fn default() -> Self {
        LineState { width: 1.0 }
    }
}

impl LineState {
    pub const ID: StateId = StateId("Line");

    pub fn new(width: f32) -> Self {
        LineState { width }
    }
}

impl PartialEq for LineState {
    fn eq(&self, other: &Self) -> bool {
        approx_eq(self.width, other.width)
    }
}

impl GraphicsState for LineState {
    fn id(&self) -> Option<StateId> {
        Some(Self::ID)
    }

    fn apply(
        &self,
        visitor: &mut dyn Visitor,
        _: Option<&mut dyn ShaderProgram>,
    ) -> Result<()> {
        visitor.set_line(self)
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
