//! 行式自动机描述格式
//!
//! ```text
//! q0 q1 q2 q3        <- 状态
//! 0 1 2 + - $        <- 字母表
//! q0                 <- 起始状态
//! q3                 <- 接受状态（可为空行）
//! q0 dig q1          <- 转移：<状态> <标签> <下一状态>
//! q1 $ q3
//! ```
//!
//! 标签先按配置的符号类名匹配，否则必须是单个符号。
//! 格式错误的转移行按 [`ParsePolicy`](finaut_config::ParsePolicy) 处理：
//! 宽松模式丢弃并记入报告，严格模式直接报错。

mod error;
mod parser;

pub use error::{ParseError, SkipReason};
pub use parser::{parse_automaton, ParseReport, Parsed, SkippedLine};
