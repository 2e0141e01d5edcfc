//! 自动机构建器
//!
//! 收集按名字引用的状态、符号类与转移，`build()` 时统一校验并驻留为句柄。

use super::error::{AutomatonError, StateRole};
use super::model::Automaton;
use super::state::StateId;
use super::symbol::{ClassId, Label, LabelSpec, SymbolClass};
use std::collections::{BTreeSet, HashMap};

/// 构建 [`Automaton`] 的可变草稿
#[derive(Debug, Clone, Default)]
pub struct AutomatonBuilder {
    states: Vec<String>,
    alphabet: Vec<char>,
    classes: Vec<(String, BTreeSet<char>)>,
    start: Option<String>,
    accepts: Vec<String>,
    transitions: Vec<(String, LabelSpec, String)>,
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// 声明状态（重复声明会被合并）
    pub fn state(&mut self, name: impl Into<String>) -> &mut Self {
        self.states.push(name.into());
        self
    }

    pub fn states<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.states.extend(names.into_iter().map(Into::into));
        self
    }

    /// 声明字母表符号
    pub fn symbol(&mut self, symbol: char) -> &mut Self {
        self.alphabet.push(symbol);
        self
    }

    pub fn alphabet<I>(&mut self, symbols: I) -> &mut Self
    where
        I: IntoIterator<Item = char>,
    {
        self.alphabet.extend(symbols);
        self
    }

    /// 声明符号类；解析时按声明顺序检查
    pub fn class<I>(&mut self, name: impl Into<String>, members: I) -> &mut Self
    where
        I: IntoIterator<Item = char>,
    {
        self.classes
            .push((name.into(), members.into_iter().collect()));
        self
    }

    pub fn start(&mut self, name: impl Into<String>) -> &mut Self {
        self.start = Some(name.into());
        self
    }

    pub fn accept(&mut self, name: impl Into<String>) -> &mut Self {
        self.accepts.push(name.into());
        self
    }

    /// 添加转移；相同 (状态, 标签) 的后写覆盖先写
    pub fn transition(
        &mut self,
        from: impl Into<String>,
        label: impl Into<LabelSpec>,
        to: impl Into<String>,
    ) -> &mut Self {
        self.transitions
            .push((from.into(), label.into(), to.into()));
        self
    }

    /// 校验并生成只读自动机
    ///
    /// 失败条件：缺少起始状态、引用未声明状态、未知类名、
    /// 类名非法/重复/为空、两个类存在公共符号。
    pub fn build(&self) -> Result<Automaton, AutomatonError> {
        let mut states = Vec::with_capacity(self.states.len());
        let mut state_index = HashMap::with_capacity(self.states.len());
        for name in &self.states {
            if !state_index.contains_key(name) {
                state_index.insert(name.clone(), StateId(states.len() as u32));
                states.push(name.clone());
            }
        }

        let classes = self.build_classes()?;

        let lookup = |name: &str, role: StateRole| {
            state_index
                .get(name)
                .copied()
                .ok_or_else(|| AutomatonError::UndeclaredState {
                    name: name.to_string(),
                    role,
                })
        };

        let start_name = self
            .start
            .as_deref()
            .ok_or(AutomatonError::MissingStartState)?;
        let start = lookup(start_name, StateRole::Start)?;

        let mut accepting = vec![false; states.len()];
        for name in &self.accepts {
            let id = lookup(name, StateRole::Accept)?;
            accepting[id.index()] = true;
        }

        let mut transitions = HashMap::with_capacity(self.transitions.len());
        for (from, label, to) in &self.transitions {
            let from = lookup(from, StateRole::Source)?;
            let to = lookup(to, StateRole::Target)?;
            let label = match label {
                LabelSpec::Symbol(c) => Label::Symbol(*c),
                LabelSpec::Class(name) => classes
                    .iter()
                    .position(|class| class.name() == name)
                    .map(|i| Label::Class(ClassId(i as u32)))
                    .ok_or_else(|| AutomatonError::UnknownClass { name: name.clone() })?,
            };
            transitions.insert((from, label), to);
        }

        Ok(Automaton {
            states,
            state_index,
            alphabet: self.alphabet.iter().copied().collect(),
            classes,
            transitions,
            start,
            accepting,
        })
    }

    fn build_classes(&self) -> Result<Vec<SymbolClass>, AutomatonError> {
        let mut classes: Vec<SymbolClass> = Vec::with_capacity(self.classes.len());
        for (name, members) in &self.classes {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(AutomatonError::InvalidClassName { name: name.clone() });
            }
            if members.is_empty() {
                return Err(AutomatonError::EmptyClass { name: name.clone() });
            }
            if classes.iter().any(|class| class.name() == name) {
                return Err(AutomatonError::DuplicateClass { name: name.clone() });
            }

            let class = SymbolClass::new(name.clone(), members.clone());
            for existing in &classes {
                if let Some(symbol) = existing.first_shared(&class) {
                    return Err(AutomatonError::OverlappingClasses {
                        first: existing.name().to_string(),
                        second: name.clone(),
                        symbol,
                    });
                }
            }
            classes.push(class);
        }
        Ok(classes)
    }
}
