// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Dispatch of boot, list and program requests to the loader binary.
//!
//! Each operation validates its options, builds the argument list and runs
//! the loader once. There is no state between calls and no retries; a
//! failed invocation is reported to the caller, who may retry manually.

use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::mcu::Mcu;
use crate::process::{CommandRunner, SystemRunner};

/// Name of the uploader executable, resolved through `PATH` by default.
pub const DEFAULT_LOADER: &str = "teensy_loader_cli";

/// Options for a boot-only request.
#[derive(Debug, Clone, Copy)]
pub struct BootOptions {
    /// Wait for the device to appear before acting (`-w`).
    pub wait: bool,
    /// Ask the loader for verbose output (`-v`).
    pub verbose: bool,
}

impl Default for BootOptions {
    fn default() -> Self {
        Self {
            wait: true,
            verbose: false,
        }
    }
}

/// Options for a firmware-programming request.
#[derive(Debug, Clone, Copy)]
pub struct ProgramOptions {
    /// Wait for the device to appear before acting (`-w`).
    pub wait: bool,
    /// Ask the loader for verbose output (`-v`).
    pub verbose: bool,
    /// Reboot via the hardware reset line after programming (`-r`).
    pub hard_reboot: bool,
    /// Reboot via USB signaling after programming (`-s`, Teensy 3.x/4.x only).
    pub soft_reboot: bool,
    /// Leave the device in its bootloader after programming (`-n`).
    pub no_reboot: bool,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            wait: true,
            verbose: false,
            hard_reboot: false,
            soft_reboot: false,
            no_reboot: false,
        }
    }
}

/// Front-end to the external loader binary.
pub struct Loader<R: CommandRunner = SystemRunner> {
    runner: R,
    binary: String,
}

impl Loader<SystemRunner> {
    /// Loader using the real process runner and the default executable name.
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }
}

impl Default for Loader<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> Loader<R> {
    /// Loader over an explicit runner implementation.
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            binary: DEFAULT_LOADER.to_string(),
        }
    }

    /// Use a different loader executable (name or path).
    pub fn binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Capture the loader's usage text.
    ///
    /// The loader prints usage to stderr and exits non-zero even when asked
    /// for help, so the exit status is ignored here. Only a failure to
    /// spawn the binary is an error.
    pub fn help(&self) -> Result<String> {
        let output = self.runner.run_captured(&self.binary, &["--help".to_string()])?;
        Ok(String::from_utf8_lossy(&output.stderr).into_owned())
    }

    /// Capture the loader's own list of supported MCU identifiers.
    pub fn list_mcus(&self) -> Result<String> {
        let output = self
            .runner
            .run_captured(&self.binary, &["--list-mcus".to_string()])?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Put the device into its bootloader without uploading firmware.
    ///
    /// Returns whether the loader exited successfully.
    pub fn boot(&self, opts: &BootOptions) -> Result<bool> {
        let mut args = vec!["-b".to_string()];
        if opts.wait {
            args.push("-w".to_string());
        }
        if opts.verbose {
            args.push("-v".to_string());
        }

        debug!("running {} {}", self.binary, args.join(" "));
        self.runner.run_status(&self.binary, &args)
    }

    /// Upload `file` to the device identified by `mcu`.
    ///
    /// Validation happens up front, in a fixed order, before any process is
    /// spawned; the first violated rule wins. Returns whether the loader
    /// exited successfully.
    pub fn program(&self, mcu: Mcu, file: &Path, opts: &ProgramOptions) -> Result<bool> {
        if opts.hard_reboot && opts.soft_reboot {
            return Err(Error::ConflictingRebootMode);
        }
        if opts.soft_reboot && !mcu.supports_soft_reboot() {
            return Err(Error::UnsupportedSoftReboot { mcu });
        }
        if opts.no_reboot && (opts.hard_reboot || opts.soft_reboot) {
            return Err(Error::ConflictingRebootMode);
        }
        if !file.exists() {
            return Err(Error::FileNotFound {
                path: file.to_path_buf(),
            });
        }

        let mut args = vec![format!("--mcu={}", mcu.id())];
        if opts.wait {
            args.push("-w".to_string());
        }
        if opts.verbose {
            args.push("-v".to_string());
        }
        if opts.hard_reboot {
            args.push("-r".to_string());
        }
        if opts.soft_reboot {
            args.push("-s".to_string());
        }
        if opts.no_reboot {
            args.push("-n".to_string());
        }
        args.push(file.display().to_string());

        debug!("running {} {}", self.binary, args.join(" "));
        self.runner.run_status(&self.binary, &args)
    }
}
