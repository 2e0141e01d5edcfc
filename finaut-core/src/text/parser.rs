//! 描述文本解析器

use super::error::{ParseError, SkipReason};
use crate::automaton::{Automaton, AutomatonBuilder, LabelSpec};
use finaut_config::{LoaderConfig, ParsePolicy, LOADER_TARGET};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap, HashSet};

const STATES_LINE: usize = 1;
const ALPHABET_LINE: usize = 2;
const START_LINE: usize = 3;
const ACCEPT_LINE: usize = 4;

/// 解析结果：自动机 + 解析报告
#[derive(Debug, Clone)]
pub struct Parsed {
    pub automaton: Automaton,
    pub report: ParseReport,
}

/// 被宽松模式丢弃的转移行
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// 行号（1 起）
    pub line: usize,
    /// 去掉首尾空白后的原文
    pub content: String,
    pub reason: SkipReason,
}

/// 解析过程中容忍的问题
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub policy: ParsePolicy,
    /// 被接受的转移行数（含覆盖）
    pub transitions: usize,
    pub skipped: Vec<SkippedLine>,
    /// 覆盖了先前同键转移的行号
    pub overwritten: Vec<usize>,
    /// 被忽略的多字符字母表记号
    pub ignored_symbols: Vec<String>,
    /// 转移中出现但未在字母表声明的字面符号
    pub undeclared_symbols: BTreeSet<char>,
}

impl ParseReport {
    /// 没有任何被容忍的问题
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
            && self.overwritten.is_empty()
            && self.ignored_symbols.is_empty()
            && self.undeclared_symbols.is_empty()
    }
}

/// 解析行式描述并构造自动机
///
/// 前四行是固定头部，缺失即报错；其余每行是一条转移。
/// 头部之后的空行总是忽略。
pub fn parse_automaton(text: &str, config: &LoaderConfig) -> Result<Parsed, ParseError> {
    let mut lines = text.lines();
    let states_line = header(lines.next(), STATES_LINE, "states")?;
    let alphabet_line = header(lines.next(), ALPHABET_LINE, "alphabet")?;
    let start_line = header(lines.next(), START_LINE, "start state")?;
    let accept_line = header(lines.next(), ACCEPT_LINE, "accept states")?;

    let policy = config.policy;
    let mut report = ParseReport {
        policy,
        ..ParseReport::default()
    };
    let mut builder = AutomatonBuilder::new();

    builder.states(states_line.split_whitespace());

    let mut alphabet = BTreeSet::new();
    for token in alphabet_line.split_whitespace() {
        match single_symbol(token) {
            Some(symbol) => {
                alphabet.insert(symbol);
            }
            None if policy == ParsePolicy::Strict => {
                return Err(ParseError::InvalidAlphabetSymbol {
                    line: ALPHABET_LINE,
                    token: token.to_string(),
                });
            }
            None => {
                tracing::warn!(
                    target: LOADER_TARGET,
                    line = ALPHABET_LINE,
                    token,
                    "ignoring multi-character alphabet symbol"
                );
                report.ignored_symbols.push(token.to_string());
            }
        }
    }
    builder.alphabet(alphabet.iter().copied());

    let start_tokens: Vec<&str> = start_line.split_whitespace().collect();
    match start_tokens.as_slice() {
        [start] => {
            builder.start(*start);
        }
        _ => {
            return Err(ParseError::MalformedStartState {
                line: START_LINE,
                found: start_tokens.len(),
            });
        }
    }

    for name in accept_line.split_whitespace() {
        builder.accept(name);
    }

    for class in &config.classes {
        builder.class(class.name.clone(), class.symbols());
    }
    let class_names: HashSet<&str> = config.classes.iter().map(|c| c.name.as_str()).collect();

    let mut seen: HashMap<(String, LabelSpec), usize> = HashMap::new();
    for (offset, raw) in lines.enumerate() {
        let line = ACCEPT_LINE + 1 + offset;
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        let parsed = match tokens.as_slice() {
            [from, label, to] => label_spec(label, &class_names)
                .map(|label| (*from, label, *to))
                .ok_or_else(|| SkipReason::InvalidLabel {
                    label: label.to_string(),
                }),
            _ => Err(SkipReason::TokenCount {
                found: tokens.len(),
            }),
        };

        let (from, label, to) = match parsed {
            Ok(transition) => transition,
            Err(reason) if policy == ParsePolicy::Strict => {
                return Err(ParseError::MalformedTransition { line, reason });
            }
            Err(reason) => {
                tracing::warn!(
                    target: LOADER_TARGET,
                    line,
                    reason = %reason,
                    "skipping malformed transition line"
                );
                report.skipped.push(SkippedLine {
                    line,
                    content: raw.trim().to_string(),
                    reason,
                });
                continue;
            }
        };

        if let Some(previous) = seen.insert((from.to_string(), label.clone()), line) {
            tracing::debug!(
                target: LOADER_TARGET,
                line,
                previous,
                state = from,
                label = %label,
                "transition overrides an earlier definition"
            );
            report.overwritten.push(line);
        }
        if let LabelSpec::Symbol(symbol) = &label {
            if !alphabet.contains(symbol) {
                report.undeclared_symbols.insert(*symbol);
            }
        }

        builder.transition(from, label, to);
        report.transitions += 1;
    }

    for symbol in &report.undeclared_symbols {
        tracing::warn!(
            target: LOADER_TARGET,
            symbol = %symbol,
            "transition symbol is not in the declared alphabet"
        );
    }

    let automaton = builder.build()?;

    tracing::debug!(
        target: LOADER_TARGET,
        policy = policy.as_str(),
        states = automaton.state_count(),
        transitions = automaton.transition_count(),
        skipped = report.skipped.len(),
        "specification parsed"
    );

    Ok(Parsed { automaton, report })
}

fn header<'a>(
    line: Option<&'a str>,
    number: usize,
    field: &'static str,
) -> Result<&'a str, ParseError> {
    line.ok_or(ParseError::MissingHeader {
        line: number,
        field,
    })
}

fn single_symbol(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// 类名优先，其次单个字面符号
fn label_spec(token: &str, class_names: &HashSet<&str>) -> Option<LabelSpec> {
    if class_names.contains(token) {
        return Some(LabelSpec::class(token));
    }
    single_symbol(token).map(LabelSpec::Symbol)
}
