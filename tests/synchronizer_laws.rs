// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use baseconv::model::{BaseSet, Radix};
use baseconv::sync::{parse_digits, ConverterSession, SyncOptions, DEFAULT_MAX_DIGITS};
use num_bigint::BigUint;
use rstest::rstest;

const SAMPLE_DECIMALS: [&str; 8] = [
    "0",
    "1",
    "7",
    "255",
    "4096",
    "65535",
    "18446744073709551615",
    "340282366920938463463374607431768211457",
];

fn value_of(set: &BaseSet, radix: Radix) -> BigUint {
    parse_digits(radix, set.text(radix), DEFAULT_MAX_DIGITS).expect("synchronized text parses")
}

#[rstest]
fn round_trip_holds_for_every_radix_pair(
    #[values(Radix::Bin, Radix::Oct, Radix::Dec, Radix::Hex)] from: Radix,
    #[values(Radix::Bin, Radix::Oct, Radix::Dec, Radix::Hex)] to: Radix,
) {
    for decimal in SAMPLE_DECIMALS {
        let mut seed = ConverterSession::new(SyncOptions::default());
        let source_text = seed
            .on_field_edited(Radix::Dec, decimal)
            .expect("decimal seed")
            .text(from)
            .to_owned();

        let mut session = ConverterSession::new(SyncOptions::default());
        let target_text = session
            .on_field_edited(from, &source_text)
            .expect("source text")
            .text(to)
            .to_owned();

        let mut back = ConverterSession::new(SyncOptions::default());
        let set = back.on_field_edited(to, &target_text).expect("target text");

        assert_eq!(
            value_of(set, from),
            decimal.parse::<BigUint>().expect("decimal literal"),
            "{decimal}: {from} -> {to} -> {from}"
        );
        assert!(set.is_consistent());
    }
}

#[rstest]
#[case(Radix::Oct, "0007", Radix::Hex)]
#[case(Radix::Hex, "00aF", Radix::Bin)]
#[case(Radix::Bin, "0001", Radix::Dec)]
#[case(Radix::Dec, "000", Radix::Oct)]
fn round_trip_ignores_leading_zeros(#[case] from: Radix, #[case] source: &str, #[case] to: Radix) {
    let mut session = ConverterSession::new(SyncOptions::default());
    let forward = session.on_field_edited(from, source).expect("source text");
    let expected = value_of(forward, from);
    let target_text = forward.text(to).to_owned();

    let mut back = ConverterSession::new(SyncOptions::default());
    let set = back.on_field_edited(to, &target_text).expect("target text");

    assert_eq!(value_of(set, from), expected, "{source}: {from} -> {to} -> {from}");
    assert_eq!(
        value_of(set, from),
        parse_digits(from, source, DEFAULT_MAX_DIGITS).expect("source literal")
    );
    assert!(set.is_consistent());
}

#[test]
fn hex_ff_example() {
    let mut session = ConverterSession::new(SyncOptions::default());
    let set = session.on_field_edited(Radix::Hex, "FF").expect("valid hex");

    assert_eq!(set.text(Radix::Bin), "11111111");
    assert_eq!(set.text(Radix::Oct), "377");
    assert_eq!(set.text(Radix::Dec), "255");
    assert_eq!(set.value(), Some(BigUint::from(255u32)));
}

#[test]
fn later_edit_fully_replaces_earlier_one() {
    let mut session = ConverterSession::new(SyncOptions::default());
    session.on_field_edited(Radix::Hex, "FFFF").expect("valid hex");
    let set = session.on_field_edited(Radix::Oct, "10").expect("valid oct");

    assert_eq!(set.text(Radix::Bin), "1000");
    assert_eq!(set.text(Radix::Dec), "8");
    assert_eq!(set.text(Radix::Hex), "8");
    assert_eq!(session.last_source(), Some(Radix::Oct));
}

#[test]
fn rejected_edit_then_clear() {
    let mut session = ConverterSession::new(SyncOptions::default());
    session.on_field_edited(Radix::Dec, "12").expect("valid dec");
    session.on_field_edited(Radix::Oct, "9").unwrap_err();
    assert_eq!(session.bases().text(Radix::Dec), "12");

    let cleared = session.on_clear();
    assert!(cleared.is_cleared());
    assert_eq!(cleared.value(), None);
}
