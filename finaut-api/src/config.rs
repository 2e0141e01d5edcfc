//! API 层配置
//!
//! 显式传参，不使用全局单例。

use finaut_config::{LoaderConfig, ProjectConfig};

/// 加载与运行配置
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// 描述解析配置（策略 + 符号类）
    pub loader: LoaderConfig,
    /// 是否为每个输入安装 tracing 观察者
    pub trace: bool,
}

impl RunConfig {
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }
}

impl From<&ProjectConfig> for RunConfig {
    fn from(project: &ProjectConfig) -> Self {
        Self {
            loader: project.loader.clone(),
            trace: project.trace,
        }
    }
}
