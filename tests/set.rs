extern crate glaze;

use std::any::Any;

use glaze::backends::headless::HeadlessVisitor;
use glaze::prelude::*;

/// An identifier-less state used to exercise the custom tail. Applying it
/// widens lines so the effect is observable through the visitor.
#[derive(Debug)]
struct WideLines;

impl GraphicsState for WideLines {
    fn id(&self) -> Option<StateId> {
        None
    }

    fn apply(
        &self,
        visitor: &mut dyn Visitor,
        _: Option<&mut dyn ShaderProgram>,
    ) -> Result<()> {
        visitor.set_line(&LineState::new(5.0))
    }

    fn merge(&mut self, _: &dyn GraphicsState) -> Result<()> {
        Ok(())
    }

    fn eq_state(&self, _: &dyn GraphicsState) -> bool {
        false
    }

    fn duplicate(&self) -> Box<dyn GraphicsState> {
        Box::new(WideLines)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn define_and_undefine() {
    let mut set = StateSet::new();
    assert!(set.is_empty());

    set.define_state(Box::new(BlendState::default()));
    assert!(set.is_defined(BlendState::ID));
    assert_eq!(set.len(), 1);

    // Re-defining the same identifier replaces, not appends.
    set.define_state(Box::new(BlendState::new(
        Equation::Add,
        BlendFactor::One,
        BlendFactor::One,
    )));
    assert_eq!(set.len(), 1);

    let blend = set
        .get(BlendState::ID)
        .and_then(|v| v.as_any().downcast_ref::<BlendState>())
        .unwrap();
    assert!(blend.enabled());

    assert!(set.undefine_state(BlendState::ID));
    assert!(!set.is_defined(BlendState::ID));
    assert!(!set.undefine_state(BlendState::ID));
}

#[test]
fn default_set_covers_the_built_ins() {
    let set = StateSet::default_set();

    for id in &[
        BlendState::ID,
        DepthTestState::ID,
        ViewportState::ID,
        PolygonModeState::ID,
        PolygonOffsetState::ID,
        LineState::ID,
        RenderBufferState::ID,
        TransformState::ID,
    ] {
        assert!(set.is_defined(*id), "missing {}", id);
    }
}

#[test]
fn current_matches_a_fresh_headless_context() {
    let visitor = HeadlessVisitor::new();
    let current = StateSet::current(&visitor).unwrap();
    let defaults = StateSet::default_set();

    for state in defaults.iter() {
        let id = state.id().unwrap();
        assert!(state.eq_state(current.get(id).unwrap()), "diverged on {}", id);
    }
}

#[test]
fn apply_skips_unchanged_inheritable_state() {
    let mut visitor = HeadlessVisitor::new();

    let set = StateSet::default_set();
    set.apply(&mut visitor, None, None).unwrap();
    // Seven context-bound kinds hit the visitor; the transform does not.
    assert_eq!(visitor.applies(), 7);

    // Identical previous set: only the non-inheritable viewport re-applies.
    let previous = set.duplicate();
    set.apply(&mut visitor, None, Some(&previous)).unwrap();
    assert_eq!(visitor.applies(), 8);

    // Changing one state re-applies exactly that state (plus the viewport).
    let mut next = set.duplicate();
    next.define_state(Box::new(BlendState::new(
        Equation::Add,
        BlendFactor::Value(BlendValue::SourceAlpha),
        BlendFactor::OneMinusValue(BlendValue::SourceAlpha),
    )));
    next.apply(&mut visitor, None, Some(&previous)).unwrap();
    assert_eq!(visitor.applies(), 10);
    assert!(visitor.blend().unwrap().enabled());
}

#[test]
fn custom_states_apply_after_keyed_ones() {
    let mut visitor = HeadlessVisitor::new();

    let mut set = StateSet::default_set();
    set.define_state(Box::new(WideLines));
    assert_eq!(set.len(), 9);

    set.apply(&mut visitor, None, None).unwrap();
    // The keyed default LineState ran first, the custom one last.
    assert!(visitor.line().unwrap().eq_state(&LineState::new(5.0)));
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
fn non_context_bound_state_never_skips() {
    let mut visitor = HeadlessVisitor::new();
    let mut program = RecordProgram {
        active: vec!["glaze_Transform"],
        bound: Vec::new(),
    };

    let set = StateSet::default_set();
    let previous = set.duplicate();
    set.apply(
        &mut visitor,
        Some(&mut program as &mut dyn ShaderProgram),
        Some(&previous),
    )
    .unwrap();

    // Equal context-bound states are skipped, but the transform still
    // pushes its uniform.
    assert_eq!(program.bound.len(), 1);
    assert_eq!(program.bound[0].0.as_str(), "glaze_Transform");
}

#[test]
fn merge_drops_non_inheritable_state_absent_in_other() {
    let mut lhs = StateSet::new();
    lhs.define_state(Box::new(ViewportState::new(0, 0, 800, 600)));
    lhs.define_state(Box::new(BlendState::default()));

    let rhs = StateSet::new();
    lhs.merge(&rhs).unwrap();

    // The viewport is non-inheritable and `rhs` did not redefine it.
    assert!(!lhs.is_defined(ViewportState::ID));
    // The blend state is inheritable and carries over.
    assert!(lhs.is_defined(BlendState::ID));
}

#[test]
fn merge_takes_the_redefinition_of_non_inheritable_state() {
    let mut lhs = StateSet::new();
    lhs.define_state(Box::new(ViewportState::new(0, 0, 800, 600)));

    let mut rhs = StateSet::new();
    rhs.define_state(Box::new(ViewportState::new(0, 0, 640, 480)));

    lhs.merge(&rhs).unwrap();

    let viewport = lhs
        .get(ViewportState::ID)
        .and_then(|v| v.as_any().downcast_ref::<ViewportState>())
        .unwrap();
    assert_eq!(*viewport, ViewportState::new(0, 0, 640, 480));
}

#[test]
fn merge_copies_states_only_in_other() {
    let mut lhs = StateSet::new();

    let mut rhs = StateSet::new();
    rhs.define_state(Box::new(LineState::new(2.0)));
    rhs.define_state(Box::new(WideLines));

    lhs.merge(&rhs).unwrap();

    assert!(lhs.is_defined(LineState::ID));
    // Custom states are appended to the tail.
    assert_eq!(lhs.len(), 2);
}

#[test]
fn merge_delegates_to_the_state_for_inheritable_kinds() {
    let mut lhs = StateSet::new();
    lhs.define_state(Box::new(DepthTestState::default()));

    let mut rhs = StateSet::new();
    rhs.define_state(Box::new(DepthTestState::new(Comparison::Less, true)));

    lhs.merge(&rhs).unwrap();

    let depth = lhs
        .get(DepthTestState::ID)
        .and_then(|v| v.as_any().downcast_ref::<DepthTestState>())
        .unwrap();
    assert_eq!(*depth, DepthTestState::new(Comparison::Less, true));
}
