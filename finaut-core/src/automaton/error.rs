//! 构造期错误类型

use std::fmt;
use thiserror::Error;

/// 状态在描述中扮演的角色（用于错误信息）
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateRole {
    Start,
    Accept,
    Source,
    Target,
}

impl fmt::Display for StateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StateRole::Start => "start state",
            StateRole::Accept => "accept state",
            StateRole::Source => "transition source",
            StateRole::Target => "transition target",
        };
        write!(f, "{s}")
    }
}

/// 自动机构造错误
///
/// 只在 `AutomatonBuilder::build` 中产生；运行期没有错误类型。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("no start state given")]
    MissingStartState,

    #[error("{role} '{name}' is not a declared state")]
    UndeclaredState { name: String, role: StateRole },

    #[error("transition label '{name}' is not a declared symbol class")]
    UnknownClass { name: String },

    #[error("symbol classes '{first}' and '{second}' both contain '{symbol}'")]
    OverlappingClasses {
        first: String,
        second: String,
        symbol: char,
    },

    #[error("symbol class '{name}' declared twice")]
    DuplicateClass { name: String },

    #[error("invalid symbol class name '{name}'")]
    InvalidClassName { name: String },

    #[error("symbol class '{name}' has no members")]
    EmptyClass { name: String },
}

impl AutomatonError {
    /// 错误类型名（用于结构化报告）
    pub fn kind(&self) -> &'static str {
        match self {
            AutomatonError::MissingStartState => "MissingStartState",
            AutomatonError::UndeclaredState { .. } => "UndeclaredState",
            AutomatonError::UnknownClass { .. } => "UnknownClass",
            AutomatonError::OverlappingClasses { .. } => "OverlappingClasses",
            AutomatonError::DuplicateClass { .. } => "DuplicateClass",
            AutomatonError::InvalidClassName { .. } => "InvalidClassName",
            AutomatonError::EmptyClass { .. } => "EmptyClass",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undeclared_state_display() {
        let err = AutomatonError::UndeclaredState {
            name: "q9".to_string(),
            role: StateRole::Target,
        };
        assert_eq!(err.to_string(), "transition target 'q9' is not a declared state");
        assert_eq!(err.kind(), "UndeclaredState");
    }

    #[test]
    fn test_overlap_display() {
        let err = AutomatonError::OverlappingClasses {
            first: "dig".to_string(),
            second: "odd".to_string(),
            symbol: '3',
        };
        let msg = err.to_string();
        assert!(msg.contains("dig"));
        assert!(msg.contains("odd"));
        assert!(msg.contains("'3'"));
    }
}
