//! 集成测试 - 从真实文件系统加载描述

mod common;

use common::{TempDir, EXPRESSION_SPEC};
use finaut_api::{
    evaluate_batch, load_automaton, run, FinautError, LoaderConfig, NativeFileSystem, RunConfig,
    Verdict, DEFAULT_INPUTS,
};
use std::path::Path;

#[test]
fn test_load_and_run_from_disk() {
    let dir = TempDir::new("disk");
    let path = dir.write("file.txt", EXPRESSION_SPEC);

    let evaluations = run(
        &NativeFileSystem::new(),
        &path,
        DEFAULT_INPUTS,
        &RunConfig::default(),
    )
    .unwrap();
    let lines: Vec<String> = evaluations.iter().map(|e| e.summary()).collect();
    assert_eq!(
        lines,
        vec![
            "String '3+5$': accept",
            "String '1/4*3$': accept",
            "String '7-2+1$': accept",
            "String '3+5': reject",
            "String '5*': reject",
            "String '$': reject",
        ]
    );
}

#[test]
fn test_relative_path_with_base() {
    let dir = TempDir::new("base");
    dir.write("file.txt", EXPRESSION_SPEC);

    let fs = NativeFileSystem::with_base(dir.path.clone());
    let parsed = load_automaton(&fs, Path::new("file.txt"), &LoaderConfig::default()).unwrap();
    assert_eq!(parsed.automaton.state_count(), 4);
}

#[test]
fn test_missing_file_is_spec_not_found() {
    let dir = TempDir::new("missing");
    let err = load_automaton(
        &NativeFileSystem::new(),
        &dir.path.join("file.txt"),
        &LoaderConfig::default(),
    )
    .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_report().phase, "io");
}

#[test]
fn test_directory_is_io_error() {
    let dir = TempDir::new("directory");
    let err = load_automaton(&NativeFileSystem::new(), &dir.path, &LoaderConfig::default())
        .unwrap_err();
    assert!(matches!(err, FinautError::Io { .. }));
}

#[test]
fn test_lenient_and_strict_on_garbled_file() {
    let dir = TempDir::new("garbled");
    let garbled = format!("{EXPRESSION_SPEC}q1 q2\n\nthis line has too many tokens\n");
    let path = dir.write("file.txt", &garbled);
    let fs = NativeFileSystem::new();

    let parsed = load_automaton(&fs, &path, &LoaderConfig::default()).unwrap();
    assert_eq!(parsed.report.skipped.len(), 2);
    assert_eq!(parsed.report.skipped[0].line, 9);
    assert_eq!(parsed.report.skipped[1].line, 11);
    let verdicts: Vec<Verdict> = evaluate_batch(&parsed.automaton, ["3+5$", "5*"])
        .into_iter()
        .map(|e| e.verdict)
        .collect();
    assert_eq!(verdicts, vec![Verdict::Accept, Verdict::Reject]);

    let err = load_automaton(&fs, &path, &LoaderConfig::strict()).unwrap_err();
    assert_eq!(err.line(), Some(9));
    assert_eq!(err.to_report().phase, "parse");
}

#[test]
fn test_invalid_reference_aborts_load() {
    let dir = TempDir::new("invalid");
    let path = dir.write("file.txt", "q0 q1\n0\nq0\nq2\nq0 dig q1\n");
    let err = load_automaton(&NativeFileSystem::new(), &path, &LoaderConfig::default())
        .unwrap_err();
    let report = err.to_report();
    assert_eq!(report.phase, "validation");
    assert_eq!(report.error_kind, "UndeclaredState");
}
