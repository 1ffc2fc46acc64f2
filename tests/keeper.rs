extern crate glaze;

use glaze::backends::headless::HeadlessVisitor;
use glaze::prelude::*;

#[test]
fn restores_kept_state_on_drop() {
    let _ = env_logger::try_init();

    let mut visitor = HeadlessVisitor::new();
    visitor
        .set_viewport(&ViewportState::new(0, 0, 800, 600))
        .unwrap();

    {
        let mut keeper = StateKeeper::new(&mut visitor);
        keeper.keep(BlendState::ID).unwrap();
        keeper.keep(ViewportState::ID).unwrap();
        assert_eq!(keeper.kept().count(), 2);

        keeper
            .visitor()
            .set_blend(&BlendState::new(
                Equation::Add,
                BlendFactor::Value(BlendValue::SourceAlpha),
                BlendFactor::OneMinusValue(BlendValue::SourceAlpha),
            ))
            .unwrap();
        keeper
            .visitor()
            .set_viewport(&ViewportState::new(0, 0, 320, 240))
            .unwrap();
    }

    assert!(!visitor.blend().unwrap().enabled());
    assert_eq!(
        visitor.viewport().unwrap(),
        ViewportState::new(0, 0, 800, 600)
    );
}

#[test]
fn rejects_unsupported_identifiers() {
    let mut visitor = HeadlessVisitor::new();
    let mut keeper = StateKeeper::new(&mut visitor);

    match keeper.keep(LineState::ID) {
        Err(Error::StateUnsupported(id)) => assert_eq!(id, LineState::ID),
        other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(keeper.kept().count(), 0);
}

#[test]
fn keeping_twice_restores_the_newest_capture() {
    let mut visitor = HeadlessVisitor::new();
    visitor
        .set_viewport(&ViewportState::new(0, 0, 800, 600))
        .unwrap();

    {
        let mut keeper = StateKeeper::new(&mut visitor);
        keeper.keep(ViewportState::ID).unwrap();

        keeper
            .visitor()
            .set_viewport(&ViewportState::new(0, 0, 640, 480))
            .unwrap();
        keeper.keep(ViewportState::ID).unwrap();
        assert_eq!(keeper.kept().count(), 1);

        keeper
            .visitor()
            .set_viewport(&ViewportState::new(0, 0, 320, 240))
            .unwrap();
    }

    assert_eq!(
        visitor.viewport().unwrap(),
        ViewportState::new(0, 0, 640, 480)
    );
}
