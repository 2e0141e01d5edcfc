//! Finaut Core - Symbol-class automaton engine (pure logic, no IO)
//!
//! Contains the automaton model, the transition resolver, the run evaluator
//! and the parser for the line-oriented specification format.
//! Only operates on in-memory data structures, no file IO or terminal output.
//!
//! Configuration is passed explicitly via parameters, not via global state.

pub mod automaton;
pub mod run;
pub mod text;

// Re-export common types
pub use automaton::{
    Automaton, AutomatonBuilder, AutomatonError, ClassId, Label, LabelDisplay, LabelSpec, StateId,
    StateRole, SymbolClass,
};
pub use run::{
    evaluate, resolve, run, run_observed, Halt, NoopObserver, Resolution, Run, RunObserver,
    RunOutcome, Stuck, TraceEvent, TraceRecorder, TraceStats, TracingObserver, Verdict,
};
pub use text::{parse_automaton, ParseError, ParseReport, Parsed, SkipReason, SkippedLine};

// Re-export config types from finaut-config
pub use finaut_config::{ClassDef, LoaderConfig, ParsePolicy, Phase};
