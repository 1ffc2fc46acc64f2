extern crate cgmath;
extern crate glaze;
#[macro_use]
extern crate approx;

use cgmath as math;
use glaze::backends::gl::capabilities::{Capabilities, Extensions, Version};
use glaze::backends::headless::HeadlessVisitor;
use glaze::prelude::*;

#[test]
fn blend_reads_back_its_factors() {
    let state = BlendState::new(
        Equation::Add,
        BlendFactor::Value(BlendValue::SourceAlpha),
        BlendFactor::OneMinusValue(BlendValue::SourceAlpha),
    );

    assert!(state.enabled());
    assert_eq!(state.equation(), Equation::Add);
    assert_eq!(state.src_factor(), BlendFactor::Value(BlendValue::SourceAlpha));
    assert_eq!(
        state.dst_factor(),
        BlendFactor::OneMinusValue(BlendValue::SourceAlpha)
    );
    assert!(!state.equation_separated());
    assert!(!state.function_separated());
}

#[test]
fn blend_separated_flags() {
    let caps = Capabilities::full();

    let state = BlendState::separate(
        &caps,
        Equation::Add,
        Equation::Max,
        BlendFactor::One,
        BlendFactor::Zero,
        BlendFactor::One,
        BlendFactor::Zero,
    )
    .unwrap();
    assert!(state.equation_separated());
    assert!(!state.function_separated());

    let state = BlendState::separate(
        &caps,
        Equation::Add,
        Equation::Add,
        BlendFactor::Value(BlendValue::SourceAlpha),
        BlendFactor::OneMinusValue(BlendValue::SourceAlpha),
        BlendFactor::One,
        BlendFactor::Zero,
    )
    .unwrap();
    assert!(!state.equation_separated());
    assert!(state.function_separated());
}

#[test]
fn blend_rejects_missing_capabilities() {
    let caps = Capabilities {
        version: Version::GL(1, 3),
        extensions: Extensions::none(),
        max_draw_buffers: 1,
    };

    let err = BlendState::separate(
        &caps,
        Equation::Add,
        Equation::Subtract,
        BlendFactor::One,
        BlendFactor::Zero,
        BlendFactor::One,
        BlendFactor::Zero,
    )
    .unwrap_err();

    match err {
        Error::Requirement(_) => {}
        v => panic!("unexpected error {:?}", v),
    }

    // Constant color factors need GL 1.4 / the blend color extension.
    let state = BlendState::new(
        Equation::Add,
        BlendFactor::ConstantColor,
        BlendFactor::OneMinusConstantColor,
    );
    assert!(state.validate(&caps).is_err());
    assert!(state.validate(&Capabilities::full()).is_ok());
}

#[test]
fn viewport_equality_is_exact() {
    let lhs = ViewportState::new(0, 0, 800, 600);
    let rhs = ViewportState::new(0, 0, 800, 600);
    assert_eq!(lhs, rhs);
    assert!(lhs.eq_state(&rhs));

    let smaller = ViewportState::new(0, 0, 640, 480);
    assert_ne!(lhs, smaller);
    assert!(!lhs.eq_state(&smaller));
}

#[test]
fn equality_is_reflexive_and_kind_guarded() {
    let blend = BlendState::default();
    let depth = DepthTestState::default();

    assert!(blend.eq_state(&blend));
    assert!(depth.eq_state(&depth));
    // Identical field values never make two different kinds equal.
    assert!(!blend.eq_state(&depth));
    assert!(!depth.eq_state(&blend));
}

#[test]
fn float_fields_compare_with_tolerance() {
    assert!(LineState::new(1.0).eq_state(&LineState::new(1.0 + 1e-8)));
    assert!(!LineState::new(1.0).eq_state(&LineState::new(1.5)));

    let lhs = PolygonOffsetState::new(2.0, 4.0, OffsetModes::fill());
    let rhs = PolygonOffsetState::new(2.0 + 1e-8, 4.0, OffsetModes::fill());
    assert!(lhs.eq_state(&rhs));
}

#[test]
fn duplicates_own_their_buffers() {
    let original = RenderBufferState::new(vec![
        DrawBuffer::ColorAttachment(0),
        DrawBuffer::ColorAttachment(1),
    ]);

    let mut copy = original.clone();
    copy.draw_buffers.push(DrawBuffer::ColorAttachment(2));
    copy.color_write = (true, true, true, false);

    assert_eq!(original.draw_buffers.len(), 2);
    assert_eq!(original.color_write, (true, true, true, true));

    let boxed = original.duplicate();
    assert!(boxed.eq_state(&original));

    let transform = TransformState::new(math::Matrix4::from_scale(2.0));
    let mut copy = transform;
    copy.set_transform(math::Matrix4::from_scale(4.0));
    assert!(!transform.eq_state(&copy));
    assert!(transform.duplicate().eq_state(&transform));
}

#[test]
fn merge_rejects_mismatched_kinds() {
    let mut blend = BlendState::default();
    let err = blend.merge(&LineState::default()).unwrap_err();

    match err {
        Error::StateMismatch { .. } => {}
        v => panic!("unexpected error {:?}", v),
    }
}

#[test]
fn merge_overwrites_fixed_function_state() {
    let mut lhs = DepthTestState::default();
    let rhs = DepthTestState::new(Comparison::LessOrEqual, true);

    lhs.merge(&rhs).unwrap();
    assert_eq!(lhs, rhs);
}

#[test]
fn transform_merge_composes() {
    let local = math::Matrix4::from_translation(math::Vector3::new(1.0, 0.0, 0.0));
    let outer = math::Matrix4::from_translation(math::Vector3::new(0.0, 2.0, 0.0));

    let mut state = TransformState::new(local);
    state.merge(&TransformState::new(outer)).unwrap();

    assert!(ulps_eq!(state.transform(), outer * local));

    let copy = state;
    assert!(state.eq_state(&copy));
}

#[derive(Default)]
struct RecordProgram {
    active: Vec<&'static str>,
    bound: Vec<(String, UniformVariable)>,
}

impl ShaderProgram for RecordProgram {
    fn is_active(&self, name: &str) -> bool {
        self.active.iter().any(|v| *v == name)
    }

    fn set_uniform(&mut self, name: &str, variable: &UniformVariable) -> Result<()> {
        self.bound.push((name.to_string(), *variable));
        Ok(())
    }
}

#[test]
fn transform_binds_its_uniform_table() {
    let mut visitor = HeadlessVisitor::new();
    let mut program = RecordProgram {
        active: vec!["glaze_Transform"],
        bound: Vec::new(),
    };

    let transform = math::Matrix4::from_translation(math::Vector3::new(1.0, 2.0, 3.0));
    let state = TransformState::new(transform);
    state
        .apply(&mut visitor, Some(&mut program as &mut dyn ShaderProgram))
        .unwrap();

    assert_eq!(program.bound.len(), 1);
    let (name, variable) = &program.bound[0];
    assert_eq!(name.as_str(), "glaze_Transform");
    match variable {
        UniformVariable::Matrix4f(m, transpose) => {
            assert!(!*transpose);
            assert_eq!(m[3], [1.0, 2.0, 3.0, 1.0]);
        }
        v => panic!("unexpected variable {:?}", v),
    }
}

#[test]
fn inactive_uniforms_are_skipped() {
    let mut visitor = HeadlessVisitor::new();
    let mut program = RecordProgram::default();

    let state = TransformState::default();
    state
        .apply(&mut visitor, Some(&mut program as &mut dyn ShaderProgram))
        .unwrap();

    assert!(program.bound.is_empty());
}
