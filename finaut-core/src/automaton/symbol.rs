//! 符号、符号类与转移标签

use super::model::Automaton;
use std::collections::BTreeSet;
use std::fmt;

/// 符号类句柄（声明顺序下标）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassId(pub(crate) u32);

impl ClassId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// 命名的符号集合，可作为转移标签代表其任意成员
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolClass {
    name: String,
    members: BTreeSet<char>,
}

impl SymbolClass {
    pub(crate) fn new(name: String, members: BTreeSet<char>) -> Self {
        Self { name, members }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.members.contains(&symbol)
    }

    /// 成员符号（有序）
    pub fn members(&self) -> impl Iterator<Item = char> + '_ {
        self.members.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// 与另一个类的第一个公共符号（用于不相交校验）
    pub(crate) fn first_shared(&self, other: &SymbolClass) -> Option<char> {
        self.members.intersection(&other.members).next().copied()
    }
}

/// 已解析的转移标签：字面符号或符号类
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    Symbol(char),
    Class(ClassId),
}

impl Label {
    pub fn is_class(&self) -> bool {
        matches!(self, Label::Class(_))
    }

    /// 可打印形式：字面符号加引号，符号类用类名
    pub fn display(self, automaton: &Automaton) -> LabelDisplay<'_> {
        LabelDisplay {
            label: self,
            automaton,
        }
    }
}

/// [`Label::display`] 的返回值
#[derive(Clone, Copy, Debug)]
pub struct LabelDisplay<'a> {
    label: Label,
    automaton: &'a Automaton,
}

impl fmt::Display for LabelDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            Label::Symbol(c) => write!(f, "'{c}'"),
            Label::Class(id) => match self.automaton.class(id) {
                Some(class) => write!(f, "{}", class.name()),
                None => write!(f, "<class {}>", id.index()),
            },
        }
    }
}

/// 构造期使用的标签：类按名字引用，`build()` 时解析为 [`Label`]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LabelSpec {
    Symbol(char),
    Class(String),
}

impl LabelSpec {
    pub fn class(name: impl Into<String>) -> Self {
        LabelSpec::Class(name.into())
    }
}

impl From<char> for LabelSpec {
    fn from(symbol: char) -> Self {
        LabelSpec::Symbol(symbol)
    }
}

impl fmt::Display for LabelSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelSpec::Symbol(c) => write!(f, "'{c}'"),
            LabelSpec::Class(name) => write!(f, "{name}"),
        }
    }
}
