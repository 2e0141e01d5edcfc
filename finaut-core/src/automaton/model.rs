//! Immutable automaton definition and its lookups.

use super::state::StateId;
use super::symbol::{ClassId, Label, SymbolClass};
use crate::run::{self, Resolution, Verdict};
use std::collections::{BTreeSet, HashMap};

/// A deterministic automaton whose transitions may be labelled with symbol
/// classes as well as literal symbols.
///
/// Built once through [`AutomatonBuilder`](super::AutomatonBuilder) and
/// read-only afterwards, so a single instance can be shared by any number of
/// concurrent runs.
#[derive(Debug, Clone)]
pub struct Automaton {
    /// State names in declaration order (index = StateId)
    pub(crate) states: Vec<String>,
    pub(crate) state_index: HashMap<String, StateId>,
    /// Declared alphabet (diagnostics only, not consulted by runs)
    pub(crate) alphabet: BTreeSet<char>,
    /// Symbol classes in resolution order
    pub(crate) classes: Vec<SymbolClass>,
    pub(crate) transitions: HashMap<(StateId, Label), StateId>,
    pub(crate) start: StateId,
    /// Accepting flag per state
    pub(crate) accepting: Vec<bool>,
}

impl Automaton {
    /// Exact-key lookup of the transition for `(state, label)`.
    pub fn transition_for(&self, state: StateId, label: Label) -> Option<StateId> {
        self.transitions.get(&(state, label)).copied()
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.get(state.index()).copied().unwrap_or(false)
    }

    /// The class whose member set contains `symbol`, if any.
    ///
    /// Classes are pairwise disjoint, so at most one can match.
    pub fn class_containing(&self, symbol: char) -> Option<ClassId> {
        self.classes_containing(symbol).next()
    }

    /// All classes containing `symbol`, in resolution order.
    pub fn classes_containing(&self, symbol: char) -> impl Iterator<Item = ClassId> + '_ {
        self.classes
            .iter()
            .enumerate()
            .filter(move |(_, class)| class.contains(symbol))
            .map(|(i, _)| ClassId(i as u32))
    }

    /// Resolve the next state for `symbol` from `state`.
    pub fn resolve(&self, state: StateId, symbol: char) -> Option<Resolution> {
        run::resolve(self, state, symbol)
    }

    /// Run `input` to completion and report whether it is accepted.
    pub fn accepts(&self, input: &str) -> bool {
        run::evaluate(self, input) == Verdict::Accept
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.state_index.get(name).copied()
    }

    /// Name of a state; ids from another automaton render as `<unknown>`.
    pub fn state_name(&self, state: StateId) -> &str {
        self.states
            .get(state.index())
            .map(String::as_str)
            .unwrap_or("<unknown>")
    }

    /// States in declaration order
    pub fn states(&self) -> impl Iterator<Item = (StateId, &str)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(i, name)| (StateId(i as u32), name.as_str()))
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn accept_states(&self) -> impl Iterator<Item = StateId> + '_ {
        self.accepting
            .iter()
            .enumerate()
            .filter(|(_, accepting)| **accepting)
            .map(|(i, _)| StateId(i as u32))
    }

    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.alphabet.iter().copied()
    }

    pub fn in_alphabet(&self, symbol: char) -> bool {
        self.alphabet.contains(&symbol)
    }

    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &SymbolClass)> + '_ {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, class)| (ClassId(i as u32), class))
    }

    pub fn class(&self, id: ClassId) -> Option<&SymbolClass> {
        self.classes.get(id.index())
    }

    pub fn class_by_name(&self, name: &str) -> Option<ClassId> {
        self.classes
            .iter()
            .position(|class| class.name() == name)
            .map(|i| ClassId(i as u32))
    }

    /// All transitions, in no particular order.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, Label, StateId)> + '_ {
        self.transitions
            .iter()
            .map(|(&(from, label), &to)| (from, label, to))
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Human-readable label: the quoted literal symbol or the class name.
    pub fn label_name(&self, label: Label) -> String {
        label.display(self).to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::automaton::{AutomatonBuilder, Label, LabelSpec};

    fn sample() -> crate::Automaton {
        AutomatonBuilder::new()
            .states(["q0", "q1", "q2"])
            .alphabet("0123456789+-*/$".chars())
            .class("dig", '0'..='9')
            .class("op", ['+', '-', '*', '/'])
            .start("q0")
            .accept("q2")
            .transition("q0", LabelSpec::class("dig"), "q1")
            .transition("q1", LabelSpec::class("op"), "q0")
            .transition("q1", '$', "q2")
            .build()
            .unwrap()
    }

    #[test]
    fn test_state_lookup() {
        let a = sample();
        let q1 = a.state_id("q1").unwrap();
        assert_eq!(a.state_name(q1), "q1");
        assert_eq!(a.state_count(), 3);
        assert!(a.state_id("q7").is_none());
        assert_eq!(a.state_name(a.start()), "q0");
    }

    #[test]
    fn test_accepting() {
        let a = sample();
        let q2 = a.state_id("q2").unwrap();
        assert!(a.is_accepting(q2));
        assert!(!a.is_accepting(a.start()));
        assert_eq!(a.accept_states().collect::<Vec<_>>(), vec![q2]);
    }

    #[test]
    fn test_class_containing() {
        let a = sample();
        let dig = a.class_by_name("dig").unwrap();
        let op = a.class_by_name("op").unwrap();
        assert_eq!(a.class_containing('4'), Some(dig));
        assert_eq!(a.class_containing('*'), Some(op));
        assert_eq!(a.class_containing('$'), None);
        assert_eq!(a.class(op).unwrap().name(), "op");
    }

    #[test]
    fn test_transition_for_is_exact() {
        let a = sample();
        let q0 = a.start();
        let q1 = a.state_id("q1").unwrap();
        let dig = a.class_by_name("dig").unwrap();
        assert_eq!(a.transition_for(q0, Label::Class(dig)), Some(q1));
        // 字面符号键与类键互不替代
        assert_eq!(a.transition_for(q0, Label::Symbol('3')), None);
        assert_eq!(a.transition_count(), 3);
    }

    #[test]
    fn test_label_name() {
        let a = sample();
        let op = a.class_by_name("op").unwrap();
        assert_eq!(a.label_name(Label::Class(op)), "op");
        assert_eq!(a.label_name(Label::Symbol('$')), "'$'");
    }

    #[test]
    fn test_alphabet_is_diagnostic_only() {
        let a = sample();
        assert!(a.in_alphabet('$'));
        assert!(!a.in_alphabet('x'));
        assert_eq!(a.alphabet().count(), 15);
    }
}
