// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Narrow subprocess seam.
//!
//! Everything that shells out goes through [`CommandRunner`] so tests can
//! swap in a recording fake and assert on the exact argument lists without
//! spawning anything.

use std::process::Command;

use crate::error::{Error, Result};

/// Captured result of a finished subprocess.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Whether the process exited with status 0.
    pub success: bool,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

/// Spawns an external command and blocks until it finishes.
pub trait CommandRunner {
    /// Run `program` with `args`, capturing both output streams.
    fn run_captured(&self, program: &str, args: &[String]) -> Result<ProcessOutput>;

    /// Run `program` with `args`, streams inherited from the parent.
    ///
    /// Returns whether the process exited with status 0.
    fn run_status(&self, program: &str, args: &[String]) -> Result<bool>;
}

/// The real runner, backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run_captured(&self, program: &str, args: &[String]) -> Result<ProcessOutput> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| Error::ProcessSpawnFailed {
                program: program.to_string(),
                source,
            })?;

        Ok(ProcessOutput {
            success: output.status.success(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }

    fn run_status(&self, program: &str, args: &[String]) -> Result<bool> {
        let status = Command::new(program)
            .args(args)
            .status()
            .map_err(|source| Error::ProcessSpawnFailed {
                program: program.to_string(),
                source,
            })?;

        Ok(status.success())
    }
}
