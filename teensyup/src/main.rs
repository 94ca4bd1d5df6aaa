// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Validated front-end for the Teensy command-line loader.
//!
//! Usage:
//!   teensyup program --mcu TEENSY40 firmware.hex
//!   teensyup boot
//!   teensyup install-udev --live

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    let mut builder = env_logger::Builder::from_default_env();
    builder.filter(None, log::LevelFilter::Info);
    builder.init();

    cli::run(args)
}
