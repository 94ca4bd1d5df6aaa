// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Unit tests for the MCU catalog and the soft-reboot predicate.

use std::str::FromStr;

use teensyup_common::Mcu;

const SOFT_REBOOT_SET: [Mcu; 6] = [
    Mcu::Teensy31,
    Mcu::Teensy32,
    Mcu::Teensy35,
    Mcu::Teensy36,
    Mcu::Teensy40,
    Mcu::Teensy41,
];

// =============================================================================
// catalog tests
// =============================================================================

#[test]
fn test_all_lists_twenty_one_identifiers() {
    assert_eq!(Mcu::ALL.len(), 21);
}

#[test]
fn test_all_identifiers_are_distinct() {
    for (i, a) in Mcu::ALL.iter().enumerate() {
        for b in &Mcu::ALL[i + 1..] {
            assert_ne!(a.id(), b.id());
        }
    }
}

#[test]
fn test_id_round_trips_through_from_str() {
    for mcu in Mcu::ALL {
        assert_eq!(Mcu::from_str(mcu.id()), Ok(mcu));
    }
}

#[test]
fn test_display_matches_loader_identifier() {
    assert_eq!(Mcu::Atmega32u4.to_string(), "atmega32u4");
    assert_eq!(Mcu::Imxrt1062.to_string(), "imxrt1062");
    assert_eq!(Mcu::Teensy2pp.to_string(), "TEENSY2PP");
    assert_eq!(Mcu::Teensy40.to_string(), "TEENSY40");
    assert_eq!(Mcu::TeensyMicromod.to_string(), "TEENSY_MICROMOD");
}

#[test]
fn test_from_str_rejects_unknown_identifier() {
    assert!(Mcu::from_str("TEENSY99").is_err());
    assert!(Mcu::from_str("atmega328p").is_err());
    assert!(Mcu::from_str("").is_err());
}

#[test]
fn test_from_str_is_case_sensitive() {
    assert!(Mcu::from_str("teensy40").is_err());
    assert!(Mcu::from_str("ATMEGA32U4").is_err());
}

#[test]
fn test_from_str_error_names_the_rejected_string() {
    let err = Mcu::from_str("TEENSY99").unwrap_err();
    assert!(err.to_string().contains("TEENSY99"));
}

// =============================================================================
// soft reboot predicate tests
// =============================================================================

#[test]
fn test_soft_reboot_supported_on_teensy_3x_and_4x() {
    for mcu in SOFT_REBOOT_SET {
        assert!(mcu.supports_soft_reboot(), "{} should support soft reboot", mcu);
    }
}

#[test]
fn test_soft_reboot_unsupported_everywhere_else() {
    for mcu in Mcu::ALL {
        if !SOFT_REBOOT_SET.contains(&mcu) {
            assert!(
                !mcu.supports_soft_reboot(),
                "{} should not support soft reboot",
                mcu
            );
        }
    }
}
