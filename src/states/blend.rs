//! Blending server state: equations, factors and the optional constant
//! blend color, with separated RGB/alpha support gated on capabilities.

use std::any::Any;

use serde::{Deserialize, Serialize};

use crate::backends::gl::capabilities::Capabilities;
use crate::backends::{ShaderProgram, Visitor};
use crate::errors::{Error, Result};
use crate::math::Color;

use super::{approx_eq, mismatch, GraphicsState, StateId};

/// Specifies how incoming RGBA values (source) and the RGBA in framebuffer
/// (destination) are combined.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum Equation {
    /// Adds source and destination. Source and destination are multiplied
    /// by blending parameters before addition.
    Add,
    /// Subtracts destination from source. Source and destination are
    /// multiplied by blending parameters before subtraction.
    Subtract,
    /// Subtracts source from destination. Source and destination are
    /// multiplied by blending parameters before subtraction.
    ReverseSubtract,
    /// The component-wise minimum; blending parameters are ignored.
    Min,
    /// The component-wise maximum; blending parameters are ignored.
    Max,
}

/// Blend values.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BlendValue {
    SourceColor,
    SourceAlpha,
    DestinationColor,
    DestinationAlpha,
}

/// Blend factors.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum BlendFactor {
    Zero,
    One,
    Value(BlendValue),
    OneMinusValue(BlendValue),
    ConstantColor,
    OneMinusConstantColor,
    SrcAlphaSaturate,
}

impl BlendFactor {
    fn references_constant_color(self) -> bool {
        match self {
            BlendFactor::ConstantColor | BlendFactor::OneMinusConstantColor => true,
            _ => false,
        }
    }
}

/// Blending server state. The RGB and alpha channels each carry an
/// equation and a source/destination factor pair; a constant blend color
/// backs the `ConstantColor` factors.
#[derive(Debug, Clone, Copy)]
pub struct BlendState {
    enabled: bool,
    rgb_equation: Equation,
    alpha_equation: Equation,
    rgb_src: BlendFactor,
    rgb_dst: BlendFactor,
    alpha_src: BlendFactor,
    alpha_dst: BlendFactor,
    color: Option<Color<f32>>,
}

impl Default for BlendState {
    fn default() -> Self {
        BlendState::disabled()
    }
}

impl BlendState {
    pub const ID: StateId = StateId("Blend");

    /// Blending off. Equations and factors hold the OpenGL defaults.
    pub fn disabled() -> Self {
        BlendState {
            enabled: false,
            rgb_equation: Equation::Add,
            alpha_equation: Equation::Add,
            rgb_src: BlendFactor::One,
            rgb_dst: BlendFactor::Zero,
            alpha_src: BlendFactor::One,
            alpha_dst: BlendFactor::Zero,
            color: None,
        }
    }

    /// Non-separated blending: the same equation and factors drive both
    /// the RGB and alpha channels.
    pub fn new(equation: Equation, src: BlendFactor, dst: BlendFactor) -> Self {
        BlendState {
            enabled: true,
            rgb_equation: equation,
            alpha_equation: equation,
            rgb_src: src,
            rgb_dst: dst,
            alpha_src: src,
            alpha_dst: dst,
            color: None,
        }
    }

    /// Non-separated blending with a constant blend color.
    pub fn with_color(
        equation: Equation,
        src: BlendFactor,
        dst: BlendFactor,
        color: Color<f32>,
    ) -> Self {
        let mut state = BlendState::new(equation, src, dst);
        state.color = Some(color);
        state
    }

    /// Separated blending: RGB and alpha channels carry independent
    /// equations and factors. Checks the capability set up front and
    /// reports `Requirement` instead of issuing calls the driver would
    /// reject.
    pub fn separate(
        caps: &Capabilities,
        rgb_equation: Equation,
        alpha_equation: Equation,
        rgb_src: BlendFactor,
        rgb_dst: BlendFactor,
        alpha_src: BlendFactor,
        alpha_dst: BlendFactor,
    ) -> Result<Self> {
        let state = BlendState {
            enabled: true,
            rgb_equation,
            alpha_equation,
            rgb_src,
            rgb_dst,
            alpha_src,
            alpha_dst,
            color: None,
        };

        state.validate(caps)?;
        Ok(state)
    }

    /// Assembles a snapshot read back from a live context. The constant
    /// blend color is only meaningful while some factor references it.
    pub(crate) fn from_parts(
        enabled: bool,
        rgb_equation: Equation,
        alpha_equation: Equation,
        rgb_src: BlendFactor,
        rgb_dst: BlendFactor,
        alpha_src: BlendFactor,
        alpha_dst: BlendFactor,
        color: Color<f32>,
    ) -> Self {
        let constant = rgb_src.references_constant_color()
            || rgb_dst.references_constant_color()
            || alpha_src.references_constant_color()
            || alpha_dst.references_constant_color();

        BlendState {
            enabled,
            rgb_equation,
            alpha_equation,
            rgb_src,
            rgb_dst,
            alpha_src,
            alpha_dst,
            color: if constant { Some(color) } else { None },
        }
    }

    /// Verifies that every requested equation and factor is available on
    /// the given capability set.
    pub fn validate(&self, caps: &Capabilities) -> Result<()> {
        if self.equation_separated() && !caps.supports_separate_blend_equation() {
            return Err(Error::Requirement("separate blend equations".into()));
        }

        if self.function_separated() && !caps.supports_separate_blend_function() {
            return Err(Error::Requirement("separate blend functions".into()));
        }

        let minmax = |v: Equation| v == Equation::Min || v == Equation::Max;
        if (minmax(self.rgb_equation) || minmax(self.alpha_equation))
            && !caps.supports_blend_minmax()
        {
            return Err(Error::Requirement("min/max blend equations".into()));
        }

        let constant = self.color.is_some()
            || self.rgb_src.references_constant_color()
            || self.rgb_dst.references_constant_color()
            || self.alpha_src.references_constant_color()
            || self.alpha_dst.references_constant_color();
        if constant && !caps.supports_blend_color() {
            return Err(Error::Requirement("constant blend color".into()));
        }

        Ok(())
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn equation(&self) -> Equation {
        self.rgb_equation
    }

    pub fn alpha_equation(&self) -> Equation {
        self.alpha_equation
    }

    pub fn src_factor(&self) -> BlendFactor {
        self.rgb_src
    }

    pub fn dst_factor(&self) -> BlendFactor {
        self.rgb_dst
    }

    pub fn alpha_src_factor(&self) -> BlendFactor {
        self.alpha_src
    }

    pub fn alpha_dst_factor(&self) -> BlendFactor {
        self.alpha_dst
    }

    pub fn color(&self) -> Option<Color<f32>> {
        self.color
    }

    pub fn set_color(&mut self, color: Option<Color<f32>>) {
        self.color = color;
    }

    /// True iff the RGB and alpha equations differ.
    pub fn equation_separated(&self) -> bool {
        self.rgb_equation != self.alpha_equation
    }

    /// True iff the RGB and alpha factor pairs differ.
    pub fn function_separated(&self) -> bool {
        self.rgb_src != self.alpha_src || self.rgb_dst != self.alpha_dst
    }
}

impl PartialEq for BlendState {
    fn eq(&self, other: &Self) -> bool {
        let color_eq = match (self.color, other.color) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => {
                approx_eq(lhs.r, rhs.r)
                    && approx_eq(lhs.g, rhs.g)
                    && approx_eq(lhs.b, rhs.b)
                    && approx_eq(lhs.a, rhs.a)
            }
            _ => false,
        };

        self.enabled == other.enabled
            && self.rgb_equation == other.rgb_equation
            && self.alpha_equation == other.alpha_equation
            && self.rgb_src == other.rgb_src
            && self.rgb_dst == other.rgb_dst
            && self.alpha_src == other.alpha_src
            && self.alpha_dst == other.alpha_dst
            && color_eq
    }
}

impl GraphicsState for BlendState {
    fn id(&self) -> Option<StateId> {
        Some(Self::ID)
    }

    fn apply(
        &self,
        visitor: &mut dyn Visitor,
        _: Option<&mut dyn ShaderProgram>,
    ) -> Result<()> {
        visitor.set_blend(self)
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
