//! Integration Tests for the Dispatcher
//!
//! Resolution, arity enforcement and loop termination.

#[path = "../test_utils/mod.rs"]
mod test_utils;

use std::path::Path;

use test_utils::{fake_shell, run_lines};
use texshell::{ArgumentPolicy, Compiler, Error, Flow};

const ROOT: &str = "/home/tex";

#[test]
fn test_unknown_command_reported_and_loop_continues() {
    let (mut shell, _) = fake_shell(Path::new(ROOT), &[]);
    let mut out = Vec::new();
    shell
        .run("make all\nGETCC\ngetCC\n".as_bytes(), &mut out)
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "*** Unknown command: make\n*** Unknown command: GETCC\npdfcslatex\nBye ...\n"
    );
}

#[test]
fn test_dispatch_returns_typed_errors() {
    let (mut shell, _) = fake_shell(Path::new(ROOT), &[]);
    let mut out = Vec::new();

    assert!(matches!(
        shell.dispatch("nope", &mut out),
        Err(Error::UnknownCommand { command }) if command == "nope"
    ));
    assert!(matches!(
        shell.dispatch("getCC now", &mut out),
        Err(Error::Arity { policy: ArgumentPolicy::NoArgs, .. })
    ));
    assert!(matches!(
        shell.dispatch("setCC", &mut out),
        Err(Error::Arity { policy: ArgumentPolicy::ExactlyOne, .. })
    ));
    assert!(out.is_empty());
}

#[test]
fn test_no_argument_commands_reject_arguments_without_side_effects() {
    let (mut shell, handles) = fake_shell(Path::new(ROOT), &[]);
    handles.fs.add_file(&Path::new(ROOT).join("a.tex"));

    for line in ["whoami me", "ls -la", "lspdfs x", "lstex x", "getCC pdflatex"] {
        let before = shell.session().clone();
        let output = run_lines(&mut shell, &[line]);
        assert!(
            output.contains("Function takes no arguments!"),
            "{line}: {output}"
        );
        assert_eq!(shell.session().prompt(), before.prompt());
        assert_eq!(shell.session().compiler(), before.compiler());
        assert_eq!(
            shell.session().current_directory(),
            before.current_directory()
        );
    }
}

#[test]
fn test_exactly_one_commands_reject_empty_and_multiline() {
    let (mut shell, handles) = fake_shell(Path::new(ROOT), &[]);
    let mut out = Vec::new();

    for line in ["setCC", "compile", "mkdir", "setCC pdflatex\ntex", "compile a\nb"] {
        assert!(
            matches!(shell.dispatch(line, &mut out), Err(Error::Arity { .. })),
            "{line:?} should fail arity"
        );
    }
    assert_eq!(shell.session().compiler(), Compiler::PdfCsLatex);
    assert!(handles.process.calls().is_empty());
}

#[test]
fn test_end_of_input_runs_farewell() {
    let (mut shell, _) = fake_shell(Path::new(ROOT), &[]);
    let mut out = Vec::new();
    shell.run("".as_bytes(), &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Bye ...\n");
}

#[test]
fn test_eof_command_terminates() {
    let (mut shell, _) = fake_shell(Path::new(ROOT), &[]);
    let mut out = Vec::new();
    assert_eq!(shell.execute_line("EOF", &mut out).unwrap(), Flow::Exit);
}

#[test]
fn test_crlf_lines_are_accepted() {
    let (mut shell, _) = fake_shell(Path::new(ROOT), &[]);
    let mut out = Vec::new();
    shell
        .run("setCC latex\r\ngetCC\r\n".as_bytes(), &mut out)
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "latex\nBye ...\n");
}

#[test]
fn test_help_lists_commands() {
    let (mut shell, _) = fake_shell(Path::new(ROOT), &[]);
    let output = run_lines(&mut shell, &["help"]);
    for name in ["whoami", "im", "mkdir", "ls", "compile", "config", "setCC"] {
        assert!(output.contains(name), "help should list {name}");
    }
}

#[test]
fn test_help_for_one_command() {
    let (mut shell, _) = fake_shell(Path::new(ROOT), &[]);
    let output = run_lines(&mut shell, &["? setCC"]);
    assert!(output.starts_with("setCC pdfcslatex|pdflatex|cslatex|latex|tex\n"));

    let output = run_lines(&mut shell, &["help bogus"]);
    assert_eq!(output, "*** Unknown command: bogus\n");
}

#[test]
fn test_prompt_follows_navigation() {
    let (shell, handles) = fake_shell(Path::new(ROOT), &[]);
    handles.fs.add_dir(&Path::new(ROOT).join("thesis"));
    let mut shell = shell.with_prompt(true);

    let mut out = Vec::new();
    shell.run("im thesis\n".as_bytes(), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "[texshell] >> [texshell] /thesis >> \nBye ...\n"
    );
}
