//! An identifier-keyed collection of render states with bulk apply, diff
//! and merge operations.

use crate::backends::{ShaderProgram, Visitor};
use crate::errors::Result;

use super::{current_state, default_state, GraphicsState, StateId, BUILT_IN_STATES};

/// An insertion-ordered mapping from state identifier to state instance,
/// plus a list of custom (identifier-less) states applied after the keyed
/// ones. At most one state per identifier is live; re-defining an
/// identifier drops the previous instance.
#[derive(Debug, Default)]
pub struct StateSet {
    states: Vec<Box<dyn GraphicsState>>,
    customs: Vec<Box<dyn GraphicsState>>,
}

impl StateSet {
    pub fn new() -> Self {
        StateSet::default()
    }

    /// A set holding every built-in state kind at its default value.
    pub fn default_set() -> Self {
        let mut set = StateSet::new();
        for id in &BUILT_IN_STATES {
            // The allow-list is closed, the lookup cannot fail here.
            if let Ok(state) = default_state(*id) {
                set.define_state(state);
            }
        }

        set
    }

    /// Snapshots the live server state of every built-in kind.
    pub fn current(visitor: &dyn Visitor) -> Result<Self> {
        let mut set = StateSet::new();
        for id in &BUILT_IN_STATES {
            set.define_state(current_state(visitor, *id)?);
        }

        debug!("Detected current state set {:?}.", set);
        Ok(set)
    }

    /// Inserts `state`, replacing any existing state under the same
    /// identifier (the replaced instance drops). Identifier-less states
    /// append to the custom tail.
    pub fn define_state(&mut self, state: Box<dyn GraphicsState>) {
        match state.id() {
            Some(id) => {
                if let Some(v) = self.states.iter_mut().find(|v| v.id() == Some(id)) {
                    *v = state;
                } else {
                    self.states.push(state);
                }
            }
            None => self.customs.push(state),
        }
    }

    /// Removes the state under `id`. Returns whether anything was defined.
    pub fn undefine_state(&mut self, id: StateId) -> bool {
        let len = self.states.len();
        self.states.retain(|v| v.id() != Some(id));
        self.states.len() != len
    }

    pub fn is_defined(&self, id: StateId) -> bool {
        self.states.iter().any(|v| v.id() == Some(id))
    }

    pub fn get(&self, id: StateId) -> Option<&dyn GraphicsState> {
        self.states
            .iter()
            .find(|v| v.id() == Some(id))
            .map(|v| v.as_ref())
    }

    pub fn get_mut(&mut self, id: StateId) -> Option<&mut (dyn GraphicsState + 'static)> {
        self.states
            .iter_mut()
            .find(|v| v.id() == Some(id))
            .map(|v| v.as_mut())
    }

    /// Keyed states followed by the custom tail, in application order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn GraphicsState> {
        self.states
            .iter()
            .chain(self.customs.iter())
            .map(|v| v.as_ref())
    }

    pub fn len(&self) -> usize {
        self.states.len() + self.customs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.customs.is_empty()
    }

    /// Applies every state in order. A keyed state is skipped only when it
    /// is context bound, `previous` defines the same identifier, that
    /// previous state is inheritable, and the two compare equal; the server
    /// then already holds the value. Custom states always apply, after the
    /// keyed ones.
    pub fn apply(
        &self,
        visitor: &mut dyn Visitor,
        mut program: Option<&mut dyn ShaderProgram>,
        previous: Option<&StateSet>,
    ) -> Result<()> {
        for state in &self.states {
            let unchanged = state.context_bound()
                && state.id().map_or(false, |id| {
                    previous
                        .and_then(|set| set.get(id))
                        .map_or(false, |v| v.inheritable() && v.eq_state(state.as_ref()))
                });

            if !unchanged {
                state.apply(
                    visitor,
                    program.as_deref_mut().map(|p| p as &mut dyn ShaderProgram),
                )?;
            }
        }

        for state in &self.customs {
            state.apply(
                visitor,
                program.as_deref_mut().map(|p| p as &mut dyn ShaderProgram),
            )?;
        }

        Ok(())
    }

    /// Merges `other` into this set in place:
    ///
    /// - inheritable states present in both delegate to the state's own
    ///   `merge`;
    /// - non-inheritable states are dropped unless `other` redefines the
    ///   identifier, in which case `other`'s copy wins;
    /// - states present only in `other` (keyed and custom) are copied in.
    pub fn merge(&mut self, other: &StateSet) -> Result<()> {
        let mut merged: Vec<Box<dyn GraphicsState>> = Vec::with_capacity(self.states.len());

        for mut state in self.states.drain(..) {
            let redefined = state.id().and_then(|id| other.get(id));
            match (state.inheritable(), redefined) {
                (true, Some(v)) => {
                    state.merge(v)?;
                    merged.push(state);
                }
                (true, None) => merged.push(state),
                (false, Some(v)) => merged.push(v.duplicate()),
                (false, None) => {}
            }
        }

        for state in &other.states {
            let id = state.id();
            if !merged.iter().any(|v| v.id() == id) {
                merged.push(state.duplicate());
            }
        }

        self.states = merged;

        for state in &other.customs {
            self.customs.push(state.duplicate());
        }

        Ok(())
    }

    pub fn duplicate(&self) -> StateSet {
        StateSet {
            states: self.states.iter().map(|v| v.duplicate()).collect(),
            customs: self.customs.iter().map(|v| v.duplicate()).collect(),
        }
    }
}
