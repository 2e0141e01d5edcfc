//! Finaut API - Loading and evaluation layer
//!
//! Provides the entry points used by the CLI and by library consumers:
//! - Loading a specification through a [`VirtualFileSystem`]
//! - Batch evaluation of input strings
//! - Unified error handling (FinautError)
//!
//! Configuration is passed explicitly; there is no global state.

use finaut_config::{LOADER_TARGET, RUN_TARGET};
use finaut_core::{
    parse_automaton, run_observed, Automaton, NoopObserver, RunObserver, TracingObserver,
};
use std::path::Path;

pub mod config;
pub mod error;
pub mod types;

pub use config::RunConfig;
pub use error::{ErrorReport, FinautError};
pub use types::Evaluation;

// Re-export core and config types
pub use finaut_config;
pub use finaut_config::{ClassDef, LoaderConfig, LogLevel, ParsePolicy, Phase, ProjectConfig};
pub use finaut_core::{Halt, ParseReport, Parsed, Verdict};
pub use finaut_vfs::{MemoryFileSystem, NativeFileSystem, VirtualFileSystem};

/// 未指定时读取的描述文件
pub const DEFAULT_SPEC_PATH: &str = "file.txt";

/// 未指定时测试的输入（算术表达式样例）
pub const DEFAULT_INPUTS: [&str; 6] = ["3+5$", "1/4*3$", "7-2+1$", "3+5", "5*", "$"];

/// 从文件系统加载并构造自动机
///
/// 文件不存在 → `SpecNotFound`；其他读取失败 → `Io`；
/// 解析或校验失败 → `Parse`。出错时不返回任何自动机。
pub fn load_automaton(
    fs: &dyn VirtualFileSystem,
    path: &Path,
    config: &LoaderConfig,
) -> Result<Parsed, FinautError> {
    tracing::info!(
        target: LOADER_TARGET,
        path = %path.display(),
        policy = config.policy.as_str(),
        "loading specification"
    );

    let text = fs.read_to_string(path)?;
    let parsed = load_automaton_from_str(&text, config)?;

    tracing::info!(
        target: LOADER_TARGET,
        states = parsed.automaton.state_count(),
        transitions = parsed.automaton.transition_count(),
        skipped = parsed.report.skipped.len(),
        "specification loaded"
    );
    Ok(parsed)
}

/// 从内存中的描述文本构造自动机
pub fn load_automaton_from_str(text: &str, config: &LoaderConfig) -> Result<Parsed, FinautError> {
    Ok(parse_automaton(text, config)?)
}

/// 求值单个输入
pub fn evaluate(automaton: &Automaton, input: &str) -> Evaluation {
    evaluate_observed(automaton, input, &mut NoopObserver)
}

/// 求值单个输入并把每一步通知给观察者
pub fn evaluate_observed<O>(automaton: &Automaton, input: &str, observer: &mut O) -> Evaluation
where
    O: RunObserver + ?Sized,
{
    let outcome = run_observed(automaton, input, observer);
    tracing::debug!(
        target: RUN_TARGET,
        input,
        verdict = outcome.verdict.as_str(),
        consumed = outcome.consumed,
        "input evaluated"
    );
    Evaluation::new(input, &outcome)
}

/// 按顺序求值一批输入
pub fn evaluate_batch<I, S>(automaton: &Automaton, inputs: I) -> Vec<Evaluation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    evaluate_batch_with(automaton, inputs, |_| NoopObserver)
}

/// 按顺序求值一批输入，每个输入使用工厂新建的观察者
pub fn evaluate_batch_with<I, S, F, O>(
    automaton: &Automaton,
    inputs: I,
    mut make_observer: F,
) -> Vec<Evaluation>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(&str) -> O,
    O: RunObserver,
{
    inputs
        .into_iter()
        .map(|input| {
            let input = input.as_ref();
            let mut observer = make_observer(input);
            evaluate_observed(automaton, input, &mut observer)
        })
        .collect()
}

/// 加载描述并求值全部输入
///
/// `config.trace` 打开时为每个输入安装 [`TracingObserver`]。
pub fn run<I, S>(
    fs: &dyn VirtualFileSystem,
    path: &Path,
    inputs: I,
    config: &RunConfig,
) -> Result<Vec<Evaluation>, FinautError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parsed = load_automaton(fs, path, &config.loader)?;
    let automaton = &parsed.automaton;
    let evaluations = if config.trace {
        evaluate_batch_with(automaton, inputs, |_| TracingObserver::new())
    } else {
        evaluate_batch(automaton, inputs)
    };
    Ok(evaluations)
}
