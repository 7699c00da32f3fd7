//! Test Fixtures
//!
//! Shell constructors over fakes or a real temporary directory.

use std::path::Path;

use super::fakes::{FakeFilesystem, RecordingProcess, ScriptedConfirm};
use texshell::platform::NativeFilesystem;
use texshell::{SessionState, Shell};

/// Handles onto the fakes owned by a shell
pub struct FakeHandles {
    pub fs: FakeFilesystem,
    pub process: RecordingProcess,
    pub confirm: ScriptedConfirm,
}

/// Shell over an in-memory tree rooted at `root`
pub fn fake_shell(root: &Path, answers: &[bool]) -> (Shell, FakeHandles) {
    let handles = FakeHandles {
        fs: FakeFilesystem::with_root(root),
        process: RecordingProcess::default(),
        confirm: ScriptedConfirm::answering(answers),
    };
    let shell = Shell::new(
        SessionState::with_root(root.to_path_buf()),
        Box::new(handles.fs.clone()),
        Box::new(handles.process.clone()),
        Box::new(handles.confirm.clone()),
    )
    .with_prompt(false);
    (shell, handles)
}

/// Shell over the real filesystem rooted at `root`
pub fn native_shell(root: &Path, answers: &[bool]) -> (Shell, RecordingProcess) {
    let process = RecordingProcess::default();
    let shell = Shell::new(
        SessionState::with_root(root.to_path_buf()),
        Box::new(NativeFilesystem::new()),
        Box::new(process.clone()),
        Box::new(ScriptedConfirm::answering(answers)),
    )
    .with_prompt(false);
    (shell, process)
}

/// Execute `lines` one by one and return everything written
pub fn run_lines(shell: &mut Shell, lines: &[&str]) -> String {
    let mut out = Vec::new();
    for line in lines {
        shell.execute_line(line, &mut out).unwrap();
    }
    String::from_utf8(out).unwrap()
}
