//! 求值器：单路径、从左到右驱动解析器，给出接受/拒绝结论

use super::observer::{NoopObserver, RunObserver};
use super::resolver::{resolve, Resolution};
use crate::automaton::{Automaton, StateId};
use serde::Serialize;
use std::fmt;

/// 运行结论
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Accept => "accept",
            Verdict::Reject => "reject",
        }
    }

    pub fn is_accept(&self) -> bool {
        matches!(self, Verdict::Accept)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 运行停止的原因
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Halt {
    /// 输入已全部读完
    Exhausted,
    /// 第 `index` 个符号（0 起）没有可用转移
    Stuck { index: usize, symbol: char },
}

/// [`Run::step`] 失败：当前状态上没有该符号的转移
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stuck {
    pub state: StateId,
    /// 卡住符号的位置（0 起）
    pub index: usize,
    pub symbol: char,
}

impl fmt::Display for Stuck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "no transition for symbol '{}' at index {}",
            self.symbol, self.index
        )
    }
}

/// 一次运行的完整结果
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOutcome {
    pub verdict: Verdict,
    /// 停止时所在的状态
    pub final_state: StateId,
    /// 成功消费的符号数
    pub consumed: usize,
    pub halt: Halt,
}

/// 运行游标
///
/// 只持有当前状态；自动机本身只读共享。一旦卡住，后续 `step`
/// 不再移动，直到 `reset`。
#[derive(Debug, Clone)]
pub struct Run<'a> {
    automaton: &'a Automaton,
    current: StateId,
    consumed: usize,
    stuck: Option<Stuck>,
}

impl<'a> Run<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self {
            automaton,
            current: automaton.start(),
            consumed: 0,
            stuck: None,
        }
    }

    /// 读入一个符号；没有转移时返回 [`Stuck`] 并停在原状态
    ///
    /// 卡住后每次调用都返回同一个 `Stuck`。
    pub fn step(&mut self, symbol: char) -> Result<Resolution, Stuck> {
        if let Some(stuck) = self.stuck {
            return Err(stuck);
        }
        match resolve(self.automaton, self.current, symbol) {
            Some(resolution) => {
                self.current = resolution.next;
                self.consumed += 1;
                Ok(resolution)
            }
            None => {
                let stuck = Stuck {
                    state: self.current,
                    index: self.consumed,
                    symbol,
                };
                self.stuck = Some(stuck);
                Err(stuck)
            }
        }
    }

    /// 重置到起始状态
    pub fn reset(&mut self) {
        self.current = self.automaton.start();
        self.consumed = 0;
        self.stuck = None;
    }

    pub fn current(&self) -> StateId {
        self.current
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }

    pub fn is_stuck(&self) -> bool {
        self.stuck.is_some()
    }

    pub fn is_accepting(&self) -> bool {
        self.automaton.is_accepting(self.current)
    }

    /// 按当前位置给出结论（卡住即拒绝）
    pub fn verdict(&self) -> Verdict {
        if self.stuck.is_none() && self.is_accepting() {
            Verdict::Accept
        } else {
            Verdict::Reject
        }
    }

    pub fn automaton(&self) -> &'a Automaton {
        self.automaton
    }
}

/// 求值：接受或拒绝
pub fn evaluate(automaton: &Automaton, input: &str) -> Verdict {
    run(automaton, input).verdict
}

/// 运行并返回完整结果（无观察者）
pub fn run(automaton: &Automaton, input: &str) -> RunOutcome {
    run_observed(automaton, input, &mut NoopObserver)
}

/// 运行并把每一步通知给观察者
pub fn run_observed<O>(automaton: &Automaton, input: &str, observer: &mut O) -> RunOutcome
where
    O: RunObserver + ?Sized,
{
    let mut cursor = Run::new(automaton);
    observer.on_start(automaton, cursor.current());

    for (index, symbol) in input.chars().enumerate() {
        observer.on_symbol(automaton, index, symbol);
        let from = cursor.current();
        match cursor.step(symbol) {
            Ok(resolution) => observer.on_transition(automaton, from, symbol, resolution),
            Err(_) => {
                observer.on_stuck(automaton, from, index, symbol);
                let outcome = RunOutcome {
                    verdict: Verdict::Reject,
                    final_state: from,
                    consumed: cursor.consumed(),
                    halt: Halt::Stuck { index, symbol },
                };
                observer.on_finish(automaton, &outcome);
                return outcome;
            }
        }
    }

    let outcome = RunOutcome {
        verdict: cursor.verdict(),
        final_state: cursor.current(),
        consumed: cursor.consumed(),
        halt: Halt::Exhausted,
    };
    observer.on_finish(automaton, &outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::{AutomatonBuilder, LabelSpec};

    /// digit (op digit)* $
    fn expr() -> Automaton {
        AutomatonBuilder::new()
            .states(["q0", "q1", "q2", "q3"])
            .alphabet("0123456789+-*/$".chars())
            .class("dig", '0'..='9')
            .class("op", ['+', '-', '*', '/'])
            .start("q0")
            .accept("q3")
            .transition("q0", LabelSpec::class("dig"), "q1")
            .transition("q1", LabelSpec::class("op"), "q2")
            .transition("q2", LabelSpec::class("dig"), "q1")
            .transition("q1", '$', "q3")
            .build()
            .unwrap()
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::Accept.to_string(), "accept");
        assert_eq!(Verdict::Reject.to_string(), "reject");
        assert!(Verdict::Accept.is_accept());
    }

    #[test]
    fn test_accept_path() {
        let a = expr();
        let outcome = run(&a, "3+5$");
        assert_eq!(outcome.verdict, Verdict::Accept);
        assert_eq!(outcome.consumed, 4);
        assert_eq!(outcome.halt, Halt::Exhausted);
        assert_eq!(a.state_name(outcome.final_state), "q3");
    }

    #[test]
    fn test_exhausted_in_non_accepting_state() {
        let a = expr();
        let outcome = run(&a, "3+5");
        assert_eq!(outcome.verdict, Verdict::Reject);
        assert_eq!(outcome.halt, Halt::Exhausted);
        assert_eq!(a.state_name(outcome.final_state), "q1");
    }

    #[test]
    fn test_stuck_short_circuits() {
        let a = expr();
        let outcome = run(&a, "3x+5$");
        assert_eq!(outcome.verdict, Verdict::Reject);
        assert_eq!(outcome.halt, Halt::Stuck { index: 1, symbol: 'x' });
        assert_eq!(outcome.consumed, 1);
        assert_eq!(a.state_name(outcome.final_state), "q1");
    }

    #[test]
    fn test_empty_input_uses_start_state() {
        let a = expr();
        assert_eq!(evaluate(&a, ""), Verdict::Reject);

        let b = AutomatonBuilder::new()
            .state("only")
            .start("only")
            .accept("only")
            .build()
            .unwrap();
        assert_eq!(evaluate(&b, ""), Verdict::Accept);
        assert_eq!(evaluate(&b, "a"), Verdict::Reject);
    }

    #[test]
    fn test_cursor_step_and_reset() {
        let a = expr();
        let mut cursor = Run::new(&a);
        assert!(cursor.step('1').is_ok());
        assert!(cursor.step('$').is_ok());
        assert!(cursor.is_accepting());
        assert_eq!(cursor.verdict(), Verdict::Accept);

        let q3 = a.state_id("q3").unwrap();
        let stuck = Stuck {
            state: q3,
            index: 2,
            symbol: '1',
        };
        assert_eq!(cursor.step('1'), Err(stuck));
        assert!(cursor.is_stuck());
        // 卡住后不再移动
        assert_eq!(cursor.step('$'), Err(stuck));
        assert_eq!(cursor.current(), q3);
        assert_eq!(cursor.verdict(), Verdict::Reject);
        assert_eq!(cursor.consumed(), 2);

        cursor.reset();
        assert!(!cursor.is_stuck());
        assert_eq!(cursor.current(), a.start());
        assert_eq!(cursor.consumed(), 0);
    }

    #[test]
    fn test_accepts_shortcut() {
        let a = expr();
        assert!(a.accepts("9*9$"));
        assert!(!a.accepts("9*"));
    }

    #[test]
    fn test_halt_serialization() {
        let json = serde_json::to_string(&Halt::Stuck { index: 2, symbol: '?' }).unwrap();
        assert_eq!(json, r#"{"kind":"stuck","index":2,"symbol":"?"}"#);
        let json = serde_json::to_string(&Verdict::Accept).unwrap();
        assert_eq!(json, r#""accept""#);
    }
}
