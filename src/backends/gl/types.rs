//! Conversions between the state enums and their `GLenum` values. The
//! reverse direction backs the live snapshot getters.

use gl;
use gl::types::*;

use crate::errors::{Error, Result};
use crate::states::prelude::*;

impl From<Comparison> for GLenum {
    fn from(cmp: Comparison) -> Self {
        match cmp {
            Comparison::Never => gl::NEVER,
            Comparison::Less => gl::LESS,
            Comparison::LessOrEqual => gl::LEQUAL,
            Comparison::Greater => gl::GREATER,
            Comparison::GreaterOrEqual => gl::GEQUAL,
            Comparison::Equal => gl::EQUAL,
            Comparison::NotEqual => gl::NOTEQUAL,
            Comparison::Always => gl::ALWAYS,
        }
    }
}

pub fn comparison(v: GLenum) -> Result<Comparison> {
    match v {
        gl::NEVER => Ok(Comparison::Never),
        gl::LESS => Ok(Comparison::Less),
        gl::LEQUAL => Ok(Comparison::LessOrEqual),
        gl::GREATER => Ok(Comparison::Greater),
        gl::GEQUAL => Ok(Comparison::GreaterOrEqual),
        gl::EQUAL => Ok(Comparison::Equal),
        gl::NOTEQUAL => Ok(Comparison::NotEqual),
        gl::ALWAYS => Ok(Comparison::Always),
        _ => Err(Error::Backend(format!(
            "Unexpected comparison function 0x{:X}.",
            v
        ))),
    }
}

impl From<Equation> for GLenum {
    fn from(eq: Equation) -> Self {
        match eq {
            Equation::Add => gl::FUNC_ADD,
            Equation::Subtract => gl::FUNC_SUBTRACT,
            Equation::ReverseSubtract => gl::FUNC_REVERSE_SUBTRACT,
            Equation::Min => gl::MIN,
            Equation::Max => gl::MAX,
        }
    }
}

pub fn equation(v: GLenum) -> Result<Equation> {
    match v {
        gl::FUNC_ADD => Ok(Equation::Add),
        gl::FUNC_SUBTRACT => Ok(Equation::Subtract),
        gl::FUNC_REVERSE_SUBTRACT => Ok(Equation::ReverseSubtract),
        gl::MIN => Ok(Equation::Min),
        gl::MAX => Ok(Equation::Max),
        _ => Err(Error::Backend(format!(
            "Unexpected blend equation 0x{:X}.",
            v
        ))),
    }
}

impl From<BlendFactor> for GLenum {
    fn from(factor: BlendFactor) -> Self {
        match factor {
            BlendFactor::Zero => gl::ZERO,
            BlendFactor::One => gl::ONE,
            BlendFactor::Value(BlendValue::SourceColor) => gl::SRC_COLOR,
            BlendFactor::Value(BlendValue::SourceAlpha) => gl::SRC_ALPHA,
            BlendFactor::Value(BlendValue::DestinationColor) => gl::DST_COLOR,
            BlendFactor::Value(BlendValue::DestinationAlpha) => gl::DST_ALPHA,
            BlendFactor::OneMinusValue(BlendValue::SourceColor) => gl::ONE_MINUS_SRC_COLOR,
            BlendFactor::OneMinusValue(BlendValue::SourceAlpha) => gl::ONE_MINUS_SRC_ALPHA,
            BlendFactor::OneMinusValue(BlendValue::DestinationColor) => gl::ONE_MINUS_DST_COLOR,
            BlendFactor::OneMinusValue(BlendValue::DestinationAlpha) => gl::ONE_MINUS_DST_ALPHA,
            BlendFactor::ConstantColor => gl::CONSTANT_COLOR,
            BlendFactor::OneMinusConstantColor => gl::ONE_MINUS_CONSTANT_COLOR,
            BlendFactor::SrcAlphaSaturate => gl::SRC_ALPHA_SATURATE,
        }
    }
}

pub fn blend_factor(v: GLenum) -> Result<BlendFactor> {
    match v {
        gl::ZERO => Ok(BlendFactor::Zero),
        gl::ONE => Ok(BlendFactor::One),
        gl::SRC_COLOR => Ok(BlendFactor::Value(BlendValue::SourceColor)),
        gl::SRC_ALPHA => Ok(BlendFactor::Value(BlendValue::SourceAlpha)),
        gl::DST_COLOR => Ok(BlendFactor::Value(BlendValue::DestinationColor)),
        gl::DST_ALPHA => Ok(BlendFactor::Value(BlendValue::DestinationAlpha)),
        gl::ONE_MINUS_SRC_COLOR => Ok(BlendFactor::OneMinusValue(BlendValue::SourceColor)),
        gl::ONE_MINUS_SRC_ALPHA => Ok(BlendFactor::OneMinusValue(BlendValue::SourceAlpha)),
        gl::ONE_MINUS_DST_COLOR => Ok(BlendFactor::OneMinusValue(BlendValue::DestinationColor)),
        gl::ONE_MINUS_DST_ALPHA => Ok(BlendFactor::OneMinusValue(BlendValue::DestinationAlpha)),
        gl::CONSTANT_COLOR => Ok(BlendFactor::ConstantColor),
        gl::ONE_MINUS_CONSTANT_COLOR => Ok(BlendFactor::OneMinusConstantColor),
        gl::SRC_ALPHA_SATURATE => Ok(BlendFactor::SrcAlphaSaturate),
        _ => Err(Error::Backend(format!("Unexpected blend factor 0x{:X}.", v))),
    }
}

impl From<PolygonMode> for GLenum {
    fn from(mode: PolygonMode) -> Self {
        match mode {
            PolygonMode::Point => gl::POINT,
            PolygonMode::Line => gl::LINE,
            PolygonMode::Fill => gl::FILL,
        }
    }
}

pub fn polygon_mode(v: GLenum) -> Result<PolygonMode> {
    match v {
        gl::POINT => Ok(PolygonMode::Point),
        gl::LINE => Ok(PolygonMode::Line),
        gl::FILL => Ok(PolygonMode::Fill),
        _ => Err(Error::Backend(format!("Unexpected polygon mode 0x{:X}.", v))),
    }
}

impl From<DrawBuffer> for GLenum {
    fn from(buffer: DrawBuffer) -> Self {
        match buffer {
            DrawBuffer::NoBuffer => gl::NONE,
            DrawBuffer::FrontLeft => gl::FRONT_LEFT,
            DrawBuffer::FrontRight => gl::FRONT_RIGHT,
            DrawBuffer::BackLeft => gl::BACK_LEFT,
            DrawBuffer::BackRight => gl::BACK_RIGHT,
            DrawBuffer::Front => gl::FRONT,
            DrawBuffer::Back => gl::BACK,
            DrawBuffer::ColorAttachment(v) => gl::COLOR_ATTACHMENT0 + GLenum::from(v),
        }
    }
}

pub fn draw_buffer(v: GLenum) -> Result<DrawBuffer> {
    match v {
        gl::NONE => Ok(DrawBuffer::NoBuffer),
        gl::FRONT_LEFT => Ok(DrawBuffer::FrontLeft),
        gl::FRONT_RIGHT => Ok(DrawBuffer::FrontRight),
        gl::BACK_LEFT => Ok(DrawBuffer::BackLeft),
        gl::BACK_RIGHT => Ok(DrawBuffer::BackRight),
        gl::FRONT => Ok(DrawBuffer::Front),
        gl::BACK => Ok(DrawBuffer::Back),
        v if v >= gl::COLOR_ATTACHMENT0 && v <= gl::COLOR_ATTACHMENT31 => {
            Ok(DrawBuffer::ColorAttachment((v - gl::COLOR_ATTACHMENT0) as u8))
        }
        _ => Err(Error::Backend(format!("Unexpected draw buffer 0x{:X}.", v))),
    }
}
