// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Error taxonomy shared by the dispatcher and the udev installer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::mcu::Mcu;
use crate::udev::UdevStep;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong short of a bug.
///
/// Validation failures are reported before any subprocess is spawned, so a
/// rejected request has no side effects.
#[derive(Debug, Error)]
pub enum Error {
    /// More than one reboot behavior requested at once.
    #[error("cannot specify both to reboot and not to reboot")]
    ConflictingRebootMode,

    /// Soft reboot requested for a board outside the Teensy 3.x/4.x family.
    #[error("{mcu} does not support soft reboot")]
    UnsupportedSoftReboot { mcu: Mcu },

    /// The firmware image does not exist at invocation time.
    #[error("firmware file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// The external command could not be started at all.
    #[error("failed to spawn `{program}`")]
    ProcessSpawnFailed {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The udev rules download did not complete.
    #[error("failed to download {url}: {reason}")]
    DownloadFailed { url: String, reason: String },

    /// One of the elevated install sub-steps exited unsuccessfully.
    #[error("privileged {step} step failed")]
    PrivilegedCommandFailed { step: UdevStep },
}
