//! 运行：转移解析、求值与逐步观察
//!
//! 求值是纯函数：不打印、不记录日志。需要逐步跟踪时由调用方
//! 注入 [`RunObserver`]。

mod evaluator;
mod observer;
mod resolver;

pub use evaluator::{evaluate, run, run_observed, Halt, Run, RunOutcome, Stuck, Verdict};
pub use observer::{
    NoopObserver, RunObserver, TraceEvent, TraceRecorder, TraceStats, TracingObserver,
};
pub use resolver::{resolve, Resolution};
