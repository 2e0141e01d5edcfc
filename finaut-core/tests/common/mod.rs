//! 测试辅助工具
//!
//! 以行式描述构造测试用自动机

#![allow(dead_code)]

use finaut_core::{parse_automaton, Automaton, LoaderConfig};

/// `digit (op digit)* $`
pub const EXPRESSION_SPEC: &str = "\
q0 q1 q2 q3
0 1 2 3 4 5 6 7 8 9 + - * / $
q0
q3
q0 dig q1
q1 op q2
q2 dig q1
q1 $ q3
";

/// 解析描述文本（宽松模式、保留类），失败即 panic
pub fn automaton_from(text: &str) -> Automaton {
    parse_automaton(text, &LoaderConfig::default())
        .unwrap_or_else(|e| panic!("failed to parse test automaton: {e}"))
        .automaton
}

pub fn expression_automaton() -> Automaton {
    automaton_from(EXPRESSION_SPEC)
}
