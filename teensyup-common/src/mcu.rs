// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Catalog of MCU identifiers understood by the loader.
//!
//! The loader accepts both raw chip names (`atmega32u4`, `imxrt1062`, ...)
//! and board aliases (`TEENSY40`, ...). Both kinds live in one closed enum
//! so the soft-reboot capability check is exhaustive at compile time.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A microcontroller variant supported by the loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mcu {
    At90usb162,
    Atmega32u4,
    At90usb646,
    At90usb1286,
    Mkl26z64,
    Mk20dx128,
    Mk20dx256,
    Mk66fx1m0,
    Mk64fx512,
    Imxrt1062,
    Teensy2,
    Teensy2pp,
    Teensylc,
    Teensy30,
    Teensy31,
    Teensy32,
    Teensy35,
    Teensy36,
    Teensy40,
    Teensy41,
    TeensyMicromod,
}

impl Mcu {
    /// Every identifier the loader accepts, chip names first.
    pub const ALL: [Mcu; 21] = [
        Mcu::At90usb162,
        Mcu::Atmega32u4,
        Mcu::At90usb646,
        Mcu::At90usb1286,
        Mcu::Mkl26z64,
        Mcu::Mk20dx128,
        Mcu::Mk20dx256,
        Mcu::Mk66fx1m0,
        Mcu::Mk64fx512,
        Mcu::Imxrt1062,
        Mcu::Teensy2,
        Mcu::Teensy2pp,
        Mcu::Teensylc,
        Mcu::Teensy30,
        Mcu::Teensy31,
        Mcu::Teensy32,
        Mcu::Teensy35,
        Mcu::Teensy36,
        Mcu::Teensy40,
        Mcu::Teensy41,
        Mcu::TeensyMicromod,
    ];

    /// The exact spelling passed to the loader's `--mcu=` flag.
    pub fn id(self) -> &'static str {
        match self {
            Mcu::At90usb162 => "at90usb162",
            Mcu::Atmega32u4 => "atmega32u4",
            Mcu::At90usb646 => "at90usb646",
            Mcu::At90usb1286 => "at90usb1286",
            Mcu::Mkl26z64 => "mkl26z64",
            Mcu::Mk20dx128 => "mk20dx128",
            Mcu::Mk20dx256 => "mk20dx256",
            Mcu::Mk66fx1m0 => "mk66fx1m0",
            Mcu::Mk64fx512 => "mk64fx512",
            Mcu::Imxrt1062 => "imxrt1062",
            Mcu::Teensy2 => "TEENSY2",
            Mcu::Teensy2pp => "TEENSY2PP",
            Mcu::Teensylc => "TEENSYLC",
            Mcu::Teensy30 => "TEENSY30",
            Mcu::Teensy31 => "TEENSY31",
            Mcu::Teensy32 => "TEENSY32",
            Mcu::Teensy35 => "TEENSY35",
            Mcu::Teensy36 => "TEENSY36",
            Mcu::Teensy40 => "TEENSY40",
            Mcu::Teensy41 => "TEENSY41",
            Mcu::TeensyMicromod => "TEENSY_MICROMOD",
        }
    }

    /// Whether the device can be reset over USB signaling alone.
    ///
    /// Only the Teensy 3.x and 4.x boards implement this.
    pub fn supports_soft_reboot(self) -> bool {
        matches!(
            self,
            Mcu::Teensy31
                | Mcu::Teensy32
                | Mcu::Teensy35
                | Mcu::Teensy36
                | Mcu::Teensy40
                | Mcu::Teensy41
        )
    }
}

impl fmt::Display for Mcu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Error returned when parsing a string that names no known MCU.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown MCU identifier `{0}`")]
pub struct UnknownMcu(pub String);

impl FromStr for Mcu {
    type Err = UnknownMcu;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mcu::ALL
            .iter()
            .copied()
            .find(|mcu| mcu.id() == s)
            .ok_or_else(|| UnknownMcu(s.to_string()))
    }
}
