//! Scoped save/restore of live server state.

use smallvec::SmallVec;

use crate::backends::Visitor;
use crate::errors::{Error, Result};

use super::blend::BlendState;
use super::viewport::ViewportState;
use super::{current_state, GraphicsState, StateId};

/// Snapshots chosen state kinds from the live context and re-applies them
/// exactly once when the keeper drops, regardless of what happens to the
/// server state in between. The mutable borrow on the visitor keeps any
/// other mutation from interleaving with the restore.
///
/// Only `BlendState::ID` and `ViewportState::ID` are wired; anything else
/// is rejected with `StateUnsupported`.
pub struct StateKeeper<'a> {
    visitor: &'a mut dyn Visitor,
    saved: SmallVec<[Box<dyn GraphicsState>; 2]>,
}

impl<'a> StateKeeper<'a> {
    pub fn new(visitor: &'a mut dyn Visitor) -> Self {
        StateKeeper {
            visitor,
            saved: SmallVec::new(),
        }
    }

    /// Snapshots the current server state under `id`. Keeping the same
    /// identifier twice replaces (and drops) the earlier snapshot; the
    /// restore uses the newest capture.
    pub fn keep(&mut self, id: StateId) -> Result<()> {
        if id != BlendState::ID && id != ViewportState::ID {
            return Err(Error::StateUnsupported(id));
        }

        let state = current_state(&*self.visitor, id)?;
        if let Some(v) = self.saved.iter_mut().find(|v| v.id() == Some(id)) {
            *v = state;
        } else {
            self.saved.push(state);
        }

        Ok(())
    }

    /// Reborrows the guarded visitor so state changes inside the kept
    /// scope still flow through this keeper.
    pub fn visitor(&mut self) -> &mut dyn Visitor {
        &mut *self.visitor
    }

    /// The identifiers currently kept, in capture order.
    pub fn kept(&self) -> impl Iterator<Item = StateId> + '_ {
        self.saved.iter().filter_map(|v| v.id())
    }
}

impl<'a> Drop for StateKeeper<'a> {
    fn drop(&mut self) {
        for state in self.saved.drain() {
            if let Err(err) = state.apply(self.visitor, None) {
                warn!("Failed to restore {:?}: {}.", state.id(), err);
            }
        }
    }
}
