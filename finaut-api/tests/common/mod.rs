//! 测试辅助工具

#![allow(dead_code)]

use std::path::PathBuf;

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

/// 本进程专用的临时目录，测试结束时删除
pub struct TempDir {
    pub path: PathBuf,
}

impl TempDir {
    pub fn new(name: &str) -> Self {
        let path =
            std::env::temp_dir().join(format!("finaut_api_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}
