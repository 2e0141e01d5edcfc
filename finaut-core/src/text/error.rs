//! 描述解析错误

use crate::automaton::AutomatonError;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// 一行转移为何无法使用
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum SkipReason {
    /// 不是恰好三个字段
    TokenCount { found: usize },
    /// 标签既不是类名也不是单个符号
    InvalidLabel { label: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TokenCount { found } => {
                write!(f, "expected 3 fields (state label next), found {found}")
            }
            SkipReason::InvalidLabel { label } => write!(
                f,
                "label '{label}' is neither a symbol class nor a single symbol"
            ),
        }
    }
}

/// 描述解析错误（构造期）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: missing {field} line")]
    MissingHeader { line: usize, field: &'static str },

    #[error("line {line}: expected exactly one start state, found {found} tokens")]
    MalformedStartState { line: usize, found: usize },

    #[error("line {line}: alphabet symbol '{token}' is not a single character")]
    InvalidAlphabetSymbol { line: usize, token: String },

    #[error("line {line}: malformed transition: {reason}")]
    MalformedTransition { line: usize, reason: SkipReason },

    #[error("invalid specification: {0}")]
    Invalid(#[from] AutomatonError),
}

impl ParseError {
    /// 出错的行号（1 起），校验错误没有行号
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::MissingHeader { line, .. }
            | ParseError::MalformedStartState { line, .. }
            | ParseError::InvalidAlphabetSymbol { line, .. }
            | ParseError::MalformedTransition { line, .. } => Some(*line),
            ParseError::Invalid(_) => None,
        }
    }

    /// 错误类型名（用于结构化报告）
    pub fn kind(&self) -> &'static str {
        match self {
            ParseError::MissingHeader { .. } => "MissingHeader",
            ParseError::MalformedStartState { .. } => "MalformedStartState",
            ParseError::InvalidAlphabetSymbol { .. } => "InvalidAlphabetSymbol",
            ParseError::MalformedTransition { .. } => "MalformedTransition",
            ParseError::Invalid(e) => e.kind(),
        }
    }
}
