//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。

use finaut_core::ParseError;
use finaut_vfs::VfsError;
use serde::Serialize;
use thiserror::Error;

/// Finaut 错误类型（只在构造期出现，求值没有错误）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FinautError {
    /// 描述文件不存在
    #[error("specification not found: {path}")]
    SpecNotFound { path: String },

    /// 其他读取失败（权限、目录、非 UTF-8 等）
    #[error("cannot read specification {path}: {message}")]
    Io { path: String, message: String },

    /// 解析或校验失败
    #[error("{0}")]
    Parse(#[from] ParseError),
}

impl From<VfsError> for FinautError {
    fn from(err: VfsError) -> Self {
        match err {
            VfsError::NotFound { path } => FinautError::SpecNotFound { path },
            other => FinautError::Io {
                path: other.path().to_string(),
                message: other.to_string(),
            },
        }
    }
}

impl FinautError {
    /// 描述文本中的行号（1 起，如果有）
    pub fn line(&self) -> Option<usize> {
        match self {
            FinautError::Parse(e) => e.line(),
            _ => None,
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            FinautError::SpecNotFound { .. } | FinautError::Io { .. } => "io",
            FinautError::Parse(ParseError::Invalid(_)) => "validation",
            FinautError::Parse(_) => "parse",
        }
    }

    /// 错误类型名（可用于程序化处理）
    pub fn kind(&self) -> &'static str {
        match self {
            FinautError::SpecNotFound { .. } => "SpecNotFound",
            FinautError::Io { .. } => "Io",
            FinautError::Parse(e) => e.kind(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, FinautError::SpecNotFound { .. })
    }

    /// 转换为结构化错误报告
    ///
    /// CLI 可以直接打印，上层应用可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        ErrorReport {
            phase: self.phase(),
            line: self.line(),
            error_kind: self.kind().to_string(),
            message: self.to_string(),
        }
    }
}

/// 结构化错误报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport {
    /// 错误阶段: io, parse, validation
    pub phase: &'static str,
    /// 描述文本行号（1-based，如果有）
    pub line: Option<usize>,
    pub error_kind: String,
    /// 人类可读的错误消息
    pub message: String,
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "[line {}] {} error: {}", line, self.phase, self.message),
            None => write!(f, "[{}] {} error: {}", self.phase, self.error_kind, self.message),
        }
    }
}

impl ErrorReport {
    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            format!(r#"{{"phase":"{}","error_kind":"Unserializable"}}"#, self.phase)
        })
    }

    /// 简洁格式（适合终端）
    pub fn to_short(&self) -> String {
        format!("{}: {}", self.phase, self.message)
    }
}
