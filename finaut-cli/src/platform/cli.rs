//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和描述文件上下文打印。

use finaut_api::FinautError;

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 2;

/// 打印错误，有行号时附带描述文件上下文
pub fn print_error_with_source(e: &FinautError, source: Option<&str>) {
    eprintln!("❌ {}", e);

    if let (Some(error_line), Some(source)) = (e.line(), source) {
        if let Some(context) = source_context(source, error_line) {
            eprint!("{context}");
        }
    }
}

/// 渲染错误行前后几行，错误行下方加 `^` 标记
///
/// 行号越界时返回 `None`。
fn source_context(source: &str, error_line: usize) -> Option<String> {
    let lines: Vec<&str> = source.lines().collect();
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return None;
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);
    let width = end_line.to_string().len();
    let separator = "-".repeat(width + 1);

    let mut out = format!("{separator}|--\n");
    for line_idx in start_line..=end_line {
        let content = lines[line_idx - 1];
        out.push_str(&format!("{line_idx:>width$} | {content}\n"));
        if line_idx == error_line {
            let indent = content.len() - content.trim_start().len();
            let marker = "^".repeat(content.trim().chars().count().max(1));
            out.push_str(&format!("{:width$} | {}{}\n", "", " ".repeat(indent), marker));
        }
    }
    out.push_str(&format!("{separator}|--\n"));
    Some(out)
}
