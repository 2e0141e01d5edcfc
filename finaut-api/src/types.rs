//! API 类型定义

use finaut_core::{Halt, RunOutcome, Verdict};
use serde::Serialize;

/// 单个输入的求值结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub input: String,
    pub verdict: Verdict,
    /// 成功消费的符号数
    pub consumed: usize,
    pub halt: Halt,
}

impl Evaluation {
    pub fn new(input: impl Into<String>, outcome: &RunOutcome) -> Self {
        Self {
            input: input.into(),
            verdict: outcome.verdict,
            consumed: outcome.consumed,
            halt: outcome.halt,
        }
    }

    /// `String '<input>': <verdict>`
    pub fn summary(&self) -> String {
        format!("String '{}': {}", self.input, self.verdict)
    }
}
