//! Finaut Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Finaut crates.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 保留的数字类名
pub const DIGIT_CLASS: &str = "dig";

/// 保留的运算符类名
pub const OPERATOR_CLASS: &str = "op";

/// Log target for the specification loader
pub const LOADER_TARGET: &str = "finaut::loader";

/// Log target for automaton runs
pub const RUN_TARGET: &str = "finaut::run";

/// Log target for the command line front end
pub const CLI_TARGET: &str = "finaut::cli";

/// How the loader treats malformed transition lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParsePolicy {
    /// Reject the whole specification on the first malformed line
    Strict,
    /// Drop malformed lines and keep going
    #[default]
    Lenient,
}

impl ParsePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParsePolicy::Strict => "strict",
            ParsePolicy::Lenient => "lenient",
        }
    }
}

/// 符号类定义：类名 + 成员符号
///
/// 成员以字符串形式书写（`"0123456789"`），每个字符是一个符号。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDef {
    /// 类名（转移行中的标签）
    pub name: String,
    /// 成员符号
    pub members: String,
}

impl ClassDef {
    pub fn new(name: impl Into<String>, members: impl IntoIterator<Item = char>) -> Self {
        Self {
            name: name.into(),
            members: members.into_iter().collect(),
        }
    }

    /// `dig`: 0-9
    pub fn digits() -> Self {
        Self::new(DIGIT_CLASS, '0'..='9')
    }

    /// `op`: + - * /
    pub fn operators() -> Self {
        Self::new(OPERATOR_CLASS, ['+', '-', '*', '/'])
    }

    /// Iterate over the member symbols
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.members.chars()
    }
}

/// 默认的保留符号类（声明顺序即解析顺序）
pub fn reserved_classes() -> Vec<ClassDef> {
    vec![ClassDef::digits(), ClassDef::operators()]
}

/// Configuration for loading an automaton specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Malformed-line policy
    #[serde(default)]
    pub policy: ParsePolicy,
    /// Symbol classes available as transition labels
    #[serde(default = "reserved_classes")]
    pub classes: Vec<ClassDef>,
}

impl LoaderConfig {
    /// Strict loader with the reserved classes
    pub fn strict() -> Self {
        Self {
            policy: ParsePolicy::Strict,
            ..Self::default()
        }
    }

    pub fn with_policy(mut self, policy: ParsePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the class table
    pub fn with_classes(mut self, classes: Vec<ClassDef>) -> Self {
        self.classes = classes;
        self
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            policy: ParsePolicy::default(),
            classes: reserved_classes(),
        }
    }
}

/// Execution phase enum for phase-specific log configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loader,
    Run,
    Cli,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Loader => "loader",
            Phase::Run => "run",
            Phase::Cli => "cli",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> &'static str {
        match self {
            Phase::Loader => LOADER_TARGET,
            Phase::Run => RUN_TARGET,
            Phase::Cli => CLI_TARGET,
        }
    }
}

/// 日志级别
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// 解析级别字符串，`silent` 视为只输出错误
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "silent" | "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// 项目配置文件（JSON）
///
/// 所有字段可选，命令行参数优先。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// 自动机描述文件路径（相对于配置文件所在目录）
    #[serde(default)]
    pub spec: Option<PathBuf>,
    /// 待测试的输入串
    #[serde(default)]
    pub inputs: Option<Vec<String>>,
    /// 加载器配置
    #[serde(default)]
    pub loader: LoaderConfig,
    /// 日志级别
    #[serde(default)]
    pub log_level: Option<LogLevel>,
    /// 是否输出逐步跟踪
    #[serde(default)]
    pub trace: bool,
}
