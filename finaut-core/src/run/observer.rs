//! 运行观察者
//!
//! 每一步（起始状态、读入符号、发生转移、卡住、结束）都会回调观察者。
//! 求值本身不产生任何输出；跟踪只在注入观察者时发生。

use super::evaluator::{Halt, RunOutcome, Verdict};
use super::resolver::Resolution;
use crate::automaton::{Automaton, Label, StateId};
use finaut_config::RUN_TARGET;
use std::collections::VecDeque;

/// 逐步观察接口，所有方法默认空实现
pub trait RunObserver {
    /// 运行开始，位于起始状态
    fn on_start(&mut self, automaton: &Automaton, state: StateId) {
        let _ = (automaton, state);
    }

    /// 读入第 `index` 个符号
    fn on_symbol(&mut self, automaton: &Automaton, index: usize, symbol: char) {
        let _ = (automaton, index, symbol);
    }

    /// 从 `from` 经 `resolution.via` 转移到 `resolution.next`
    fn on_transition(
        &mut self,
        automaton: &Automaton,
        from: StateId,
        symbol: char,
        resolution: Resolution,
    ) {
        let _ = (automaton, from, symbol, resolution);
    }

    /// `state` 上没有 `symbol` 的转移
    fn on_stuck(&mut self, automaton: &Automaton, state: StateId, index: usize, symbol: char) {
        let _ = (automaton, state, index, symbol);
    }

    /// 运行结束
    fn on_finish(&mut self, automaton: &Automaton, outcome: &RunOutcome) {
        let _ = (automaton, outcome);
    }
}

/// 不做任何事的观察者
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// 一条跟踪事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    Start {
        state: StateId,
    },
    Read {
        index: usize,
        symbol: char,
    },
    Transition {
        from: StateId,
        to: StateId,
        via: Label,
    },
    Stuck {
        state: StateId,
        index: usize,
        symbol: char,
    },
    Finish {
        verdict: Verdict,
        state: StateId,
        halt: Halt,
    },
}

impl TraceEvent {
    /// 渲染为一行可读文本
    pub fn render(&self, automaton: &Automaton) -> String {
        match *self {
            TraceEvent::Start { state } => {
                format!("Starting at state: {}", automaton.state_name(state))
            }
            TraceEvent::Read { symbol, .. } => format!("Reading symbol: {symbol}"),
            TraceEvent::Transition { to, .. } => {
                format!("Transitioned to state: {}", automaton.state_name(to))
            }
            TraceEvent::Stuck { state, symbol, .. } => format!(
                "No transition found for state: {} and symbol: {}",
                automaton.state_name(state),
                symbol
            ),
            TraceEvent::Finish { verdict, state, .. } => {
                let word = match verdict {
                    Verdict::Accept => "accepted",
                    Verdict::Reject => "rejected",
                };
                format!("String {word} in state: {}", automaton.state_name(state))
            }
        }
    }
}

/// 跟踪缓冲区统计信息
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TraceStats {
    pub event_count: usize,
    pub dropped_count: usize,
    pub capacity: usize,
}

/// 把事件记录到内存中的观察者
///
/// 容量有限时保留最新的事件，满了丢弃最旧的并计数。
#[derive(Debug, Clone)]
pub struct TraceRecorder {
    events: VecDeque<TraceEvent>,
    capacity: usize,
    dropped: usize,
}

impl TraceRecorder {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.min(64)),
            capacity,
            dropped: 0,
        }
    }

    /// 不丢弃任何事件
    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    fn push(&mut self, event: TraceEvent) {
        if self.capacity == 0 {
            self.dropped += 1;
            return;
        }
        if self.events.len() >= self.capacity {
            self.events.pop_front();
            self.dropped += 1;
        }
        self.events.push_back(event);
    }

    /// 当前保留的事件（按时间顺序）
    pub fn events(&self) -> impl Iterator<Item = &TraceEvent> + '_ {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.dropped = 0;
    }

    pub fn stats(&self) -> TraceStats {
        TraceStats {
            event_count: self.events.len(),
            dropped_count: self.dropped,
            capacity: self.capacity,
        }
    }

    /// 渲染所有保留事件
    pub fn render(&self, automaton: &Automaton) -> Vec<String> {
        self.events.iter().map(|e| e.render(automaton)).collect()
    }
}

impl Default for TraceRecorder {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl RunObserver for TraceRecorder {
    fn on_start(&mut self, _automaton: &Automaton, state: StateId) {
        self.push(TraceEvent::Start { state });
    }

    fn on_symbol(&mut self, _automaton: &Automaton, index: usize, symbol: char) {
        self.push(TraceEvent::Read { index, symbol });
    }

    fn on_transition(
        &mut self,
        _automaton: &Automaton,
        from: StateId,
        _symbol: char,
        resolution: Resolution,
    ) {
        self.push(TraceEvent::Transition {
            from,
            to: resolution.next,
            via: resolution.via,
        });
    }

    fn on_stuck(&mut self, _automaton: &Automaton, state: StateId, index: usize, symbol: char) {
        self.push(TraceEvent::Stuck {
            state,
            index,
            symbol,
        });
    }

    fn on_finish(&mut self, _automaton: &Automaton, outcome: &RunOutcome) {
        self.push(TraceEvent::Finish {
            verdict: outcome.verdict,
            state: outcome.final_state,
            halt: outcome.halt,
        });
    }
}

/// 把每一步作为 `tracing` 事件发出（target `finaut::run`，debug 级别）
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    pub fn new() -> Self {
        Self
    }
}

impl RunObserver for TracingObserver {
    fn on_start(&mut self, automaton: &Automaton, state: StateId) {
        tracing::debug!(
            target: RUN_TARGET,
            state = automaton.state_name(state),
            "Starting at state: {}",
            automaton.state_name(state)
        );
    }

    fn on_symbol(&mut self, _automaton: &Automaton, index: usize, symbol: char) {
        tracing::debug!(
            target: RUN_TARGET,
            index,
            symbol = %symbol,
            "Reading symbol: {}",
            symbol
        );
    }

    fn on_transition(
        &mut self,
        automaton: &Automaton,
        from: StateId,
        _symbol: char,
        resolution: Resolution,
    ) {
        tracing::debug!(
            target: RUN_TARGET,
            from = automaton.state_name(from),
            via = %automaton.label_name(resolution.via),
            class = resolution.via.is_class(),
            "Transitioned to state: {}",
            automaton.state_name(resolution.next)
        );
    }

    fn on_stuck(&mut self, automaton: &Automaton, state: StateId, index: usize, symbol: char) {
        tracing::debug!(
            target: RUN_TARGET,
            index,
            "No transition found for state: {} and symbol: {}",
            automaton.state_name(state),
            symbol
        );
    }

    fn on_finish(&mut self, automaton: &Automaton, outcome: &RunOutcome) {
        tracing::debug!(
            target: RUN_TARGET,
            verdict = outcome.verdict.as_str(),
            consumed = outcome.consumed,
            "String {} in state: {}",
            if outcome.verdict.is_accept() { "accepted" } else { "rejected" },
            automaton.state_name(outcome.final_state)
        );
    }
}
