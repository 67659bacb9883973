//! Whole-string matching by simulating an Nfa over its active state set.

use crate::digraph::StateSet;
use crate::error::Error;
use crate::nfa::{is_metacharacter, Nfa, START_STATE};
use log::trace;

impl Nfa {
    /// Test whether the whole of `text` is matched by this automaton.
    ///
    /// Fails on the first `(`, `)`, `|` or `*` the simulation reaches; the
    /// error names that character and its position in chars. Text after the
    /// point where no state survives is never examined.
    pub fn matches(&self, text: &str) -> Result<bool, Error> {
        recognize(self, text)
    }

    /// \return the epsilon closure of `states`.
    #[inline]
    fn epsilon_closure<I>(&self, states: I) -> StateSet
    where
        I: IntoIterator<Item = usize>,
    {
        self.graph().reachable(states)
    }
}

/// Run the simulation over `text`, one char at a time.
fn recognize(nfa: &Nfa, text: &str) -> Result<bool, Error> {
    // States reachable from the start without consuming anything.
    let mut active = nfa.epsilon_closure(core::iter::once(START_STATE));

    for (pos, c) in text.chars().enumerate() {
        if is_metacharacter(c) {
            return Err(Error::InvalidCharacterInText { c, position: pos });
        }

        // States reached by consuming c, then everything epsilon-reachable
        // from those.
        let next = active.iter().filter_map(|state| nfa.step(state, c));
        active = nfa.epsilon_closure(next);
        trace!("pos {} {:?}: {} active states", pos, c, active.len());

        if active.is_empty() {
            trace!("no states survive at pos {}", pos);
            return Ok(false);
        }
    }

    Ok(active.contains(nfa.accept_state()))
}
