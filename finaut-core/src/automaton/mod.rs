//! 自动机模型
//!
//! 构造完成后只读：状态、字母表、符号类、转移表、起始状态与接受状态。
//! 所有构造期校验集中在 [`AutomatonBuilder::build`]。

mod builder;
mod error;
mod model;
mod state;
mod symbol;

pub use builder::AutomatonBuilder;
pub use error::{AutomatonError, StateRole};
pub use model::Automaton;
pub use state::StateId;
pub use symbol::{ClassId, Label, LabelDisplay, LabelSpec, SymbolClass};
