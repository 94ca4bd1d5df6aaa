// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};

use teensyup_common::udev::DEFAULT_PREFLIGHT_DELAY;
use teensyup_common::{BootOptions, Loader, Mcu, ProgramOptions, UdevInstaller, DEFAULT_LOADER};

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "teensyup")]
#[command(about = "Validated front-end for the Teensy command-line loader")]
pub struct Cli {
    /// Loader executable (name or path)
    #[arg(long, default_value = DEFAULT_LOADER)]
    pub loader: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the loader's own usage text
    LoaderHelp,

    /// List MCU identifiers supported by the loader
    ListMcus,

    /// Put the device into its bootloader without uploading
    Boot {
        /// Do not wait for the device to appear
        #[arg(long)]
        no_wait: bool,

        /// Verbose loader output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Upload a firmware image
    Program {
        /// Target MCU identifier (see list-mcus)
        #[arg(long)]
        mcu: Mcu,

        /// Firmware image file (ihex)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Do not wait for the device to appear
        #[arg(long)]
        no_wait: bool,

        /// Verbose loader output
        #[arg(short, long)]
        verbose: bool,

        /// Hard reboot after programming
        #[arg(short = 'r', long)]
        hard_reboot: bool,

        /// Soft reboot after programming (Teensy 3.x/4.x only)
        #[arg(short = 's', long)]
        soft_reboot: bool,

        /// Leave the device in its bootloader after programming
        #[arg(short = 'n', long)]
        no_reboot: bool,
    },

    /// Install the Teensy udev rule file system-wide
    InstallUdev {
        /// Actually install instead of the default dry run
        #[arg(long)]
        live: bool,

        /// Seconds to wait before the live install begins
        #[arg(long, default_value_t = DEFAULT_PREFLIGHT_DELAY.as_secs())]
        delay: u64,
    },
}

/// Execute the parsed CLI command.
pub fn run(cli: Cli) -> Result<()> {
    let loader = Loader::new().binary(cli.loader);

    match cli.command {
        Commands::LoaderHelp => {
            print!("{}", loader.help()?);
            Ok(())
        }
        Commands::ListMcus => {
            print!("{}", loader.list_mcus()?);
            Ok(())
        }
        Commands::Boot { no_wait, verbose } => {
            let opts = BootOptions {
                wait: !no_wait,
                verbose,
            };
            if !loader.boot(&opts)? {
                bail!("loader reported a boot failure");
            }
            Ok(())
        }
        Commands::Program {
            mcu,
            file,
            no_wait,
            verbose,
            hard_reboot,
            soft_reboot,
            no_reboot,
        } => {
            let opts = ProgramOptions {
                wait: !no_wait,
                verbose,
                hard_reboot,
                soft_reboot,
                no_reboot,
            };
            if !loader.program(mcu, &file, &opts)? {
                bail!("loader reported an upload failure");
            }
            Ok(())
        }
        Commands::InstallUdev { live, delay } => {
            let installer = UdevInstaller::new().preflight_delay(Duration::from_secs(delay));
            installer.install(!live)?;
            Ok(())
        }
    }
}
