// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Shared logic for teensyup, a validated front-end to `teensy_loader_cli`.
//!
//! The loader binary itself is treated as a black box: this crate only
//! knows which MCU identifiers it accepts, which flag combinations are
//! legal, and how to interpret its exit status. Subprocess execution and
//! the udev rules download go through narrow traits so every code path can
//! be exercised without a device, network access, or root privileges.

pub mod error;
pub mod loader;
pub mod mcu;
pub mod process;
pub mod udev;

// Re-export commonly used types
pub use error::Error;
pub use loader::{BootOptions, Loader, ProgramOptions, DEFAULT_LOADER};
pub use mcu::Mcu;
pub use process::{CommandRunner, ProcessOutput, SystemRunner};
pub use udev::{HttpFetcher, RulesFetcher, UdevInstaller, UdevStep};
