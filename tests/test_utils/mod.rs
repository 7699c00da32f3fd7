//! Test Utilities and Fakes
//!
//! In-memory implementations of the platform traits plus helpers for
//! driving a shell line by line.

#![allow(dead_code)]

pub mod fixtures;

pub use fakes::{FakeFilesystem, RecordingProcess, ScriptedConfirm};
pub use fixtures::{fake_shell, native_shell, run_lines, FakeHandles};
