//! CLI 配置
//!
//! 日志配置：全局级别，`--trace` 时单独放开运行阶段

use finaut_config::{LogLevel, Phase};
use tracing::Level;

/// CLI 日志配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub global: Level,
    pub run: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            run: None,
        }
    }
}

impl LogConfig {
    pub fn new(level: Option<LogLevel>, trace: bool) -> Self {
        let mut config = Self::default();
        if let Some(level) = level {
            config.global = to_tracing_level(level);
        }
        // 逐步跟踪以 debug 级别输出到运行阶段
        if trace && config.global < Level::DEBUG {
            config.run = Some(Level::DEBUG);
        }
        config
    }

    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            t if t == Phase::Run.target() => self.run.unwrap_or(self.global),
            _ => self.global,
        }
    }
}

pub fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finaut_config::{LOADER_TARGET, RUN_TARGET};

    #[test]
    fn test_default_levels() {
        let config = LogConfig::default();
        assert_eq!(config.level_for(LOADER_TARGET), Level::WARN);
        assert_eq!(config.level_for(RUN_TARGET), Level::WARN);
        assert_eq!(config.level_for("other"), Level::WARN);
    }

    #[test]
    fn test_trace_raises_run_level_only() {
        let config = LogConfig::new(None, true);
        assert_eq!(config.level_for(RUN_TARGET), Level::DEBUG);
        assert_eq!(config.level_for(LOADER_TARGET), Level::WARN);
    }

    #[test]
    fn test_trace_does_not_lower_verbose_global() {
        let config = LogConfig::new(Some(LogLevel::Trace), true);
        assert_eq!(config.run, None);
        assert_eq!(config.level_for(RUN_TARGET), Level::TRACE);
    }

    #[test]
    fn test_explicit_level() {
        let config = LogConfig::new(LogLevel::parse("silent"), false);
        assert_eq!(config.global, Level::ERROR);
    }
}
