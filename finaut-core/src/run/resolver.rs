//! Transition resolution.

use crate::automaton::{Automaton, Label, StateId};

/// A resolved step: the next state and the label whose transition fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub next: StateId,
    pub via: Label,
}

/// Pick the next state for `symbol` from `state`.
///
/// Every class containing the symbol is tried in declaration order and the
/// first one with a transition out of `state` wins. Only when no class
/// transition exists is the literal symbol looked up. `None` means the run
/// is stuck on this symbol.
pub fn resolve(automaton: &Automaton, state: StateId, symbol: char) -> Option<Resolution> {
    for class in automaton.classes_containing(symbol) {
        let via = Label::Class(class);
        if let Some(next) = automaton.transition_for(state, via) {
            return Some(Resolution { next, via });
        }
    }

    let via = Label::Symbol(symbol);
    automaton
        .transition_for(state, via)
        .map(|next| Resolution { next, via })
}
