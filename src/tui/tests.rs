// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Baseconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Baseconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::testing::HeadlessTui;
use super::{footer_label_ucfirst, AlertButton, Modal, Screen};
use crate::config::{AppConfig, Edition, PAID_APP_ID};
use crate::model::Radix;
use crate::services::testing::{PlatformCall, RecordingPlatform};
use crate::services::{AdEvent, MailDraft};
use crate::store::{PreferenceStore, Preferences};
use crate::test_support::TempDir;
use crossterm::event::KeyCode;
use rstest::rstest;

fn paid_tui() -> (HeadlessTui, RecordingPlatform) {
    tui_with(Edition::Paid, None, true)
}

fn free_tui() -> (HeadlessTui, RecordingPlatform) {
    tui_with(Edition::Free, None, true)
}

fn tui_with(
    edition: Edition,
    store: Option<PreferenceStore>,
    can_send_mail: bool,
) -> (HeadlessTui, RecordingPlatform) {
    let preferences = store
        .as_ref()
        .map(|store| store.load().unwrap())
        .unwrap_or_default();
    let (platform, recorder) = RecordingPlatform::new(can_send_mail);
    let tui = HeadlessTui::new(AppConfig::new(edition, preferences), store, platform);
    (tui, recorder)
}

fn upgrade_alert_open(tui: &HeadlessTui) -> bool {
    matches!(
        tui.modal(),
        Some(Modal::Alert(alert)) if alert.buttons() == [AlertButton::Done, AlertButton::Upgrade]
    )
}

#[test]
fn typing_hex_digits_synchronizes_every_field() {
    let (mut tui, _) = paid_tui();
    tui.focus(Radix::Hex);
    tui.type_text("ff");

    assert_eq!(tui.texts(), ["11111111", "377", "255", "ff"]);
}

#[test]
fn typing_continues_from_the_synchronized_text() {
    let (mut tui, _) = paid_tui();
    tui.focus(Radix::Hex);
    tui.type_text("ff");
    tui.focus(Radix::Dec);
    tui.type_text("0");

    assert_eq!(tui.texts(), ["100111110110", "4766", "2550", "9F6"]);
}

#[test]
fn invalid_digit_keeps_fields_and_shows_toast() {
    let (mut tui, _) = paid_tui();
    tui.focus(Radix::Bin);
    tui.type_text("10");
    let before = tui.texts();

    tui.press(KeyCode::Char('2'));

    assert_eq!(tui.texts(), before);
    let toast = tui.toast().expect("error toast");
    assert!(toast.contains("not a valid BIN digit"), "{toast}");
}

#[test]
fn over_long_input_is_rejected() {
    let (platform, _recorder) = RecordingPlatform::new(true);
    let config = AppConfig::new(Edition::Paid, Preferences::default()).with_max_digits(3);
    let mut tui = HeadlessTui::new(config, None, platform);
    tui.type_text("9999");

    assert_eq!(tui.text(Radix::Dec), "999");
    assert!(tui.toast().expect("toast").contains("limit is 3"));
}

#[test]
fn backspace_to_empty_clears_all_fields() {
    let (mut tui, _) = paid_tui();
    tui.type_text("12");
    tui.press(KeyCode::Backspace);
    assert_eq!(tui.texts(), ["1", "1", "1", "1"]);

    tui.press(KeyCode::Backspace);
    assert_eq!(tui.texts(), ["", "", "", ""]);

    assert!(tui.press(KeyCode::Backspace), "backspace on empty is consumed");
    assert_eq!(tui.texts(), ["", "", "", ""]);
}

#[rstest]
#[case::delete(KeyCode::Delete)]
#[case::refresh(KeyCode::Char('r'))]
fn clearing_keys_empty_every_field(#[case] key: KeyCode) {
    let (mut tui, _) = paid_tui();
    tui.type_text("42");
    tui.focus(Radix::Oct);
    tui.press(key);

    assert_eq!(tui.texts(), ["", "", "", ""]);
}

#[test]
fn focus_moves_with_arrows_and_tab() {
    let (mut tui, _) = paid_tui();
    tui.press(KeyCode::Down);
    tui.type_text("1");
    assert_eq!(tui.text(Radix::Hex), "1");

    tui.press(KeyCode::Tab);
    tui.press(KeyCode::Char('1'));
    assert_eq!(tui.text(Radix::Bin), "11");
    assert_eq!(tui.text(Radix::Dec), "3");

    tui.press(KeyCode::Up);
    tui.press(KeyCode::BackTab);
    tui.press(KeyCode::Char('0'));
    assert_eq!(tui.text(Radix::Dec), "30");
    assert_eq!(tui.text(Radix::Oct), "36");
}

#[test]
fn copy_puts_focused_text_on_the_clipboard() {
    let (mut tui, recorder) = paid_tui();
    tui.press(KeyCode::Char('y'));
    assert_eq!(tui.toast(), Some("DEC is empty"));
    assert!(recorder.calls().is_empty());

    tui.type_text("255");
    tui.press(KeyCode::Char('y'));

    assert_eq!(recorder.calls(), vec![PlatformCall::Copy("255".to_owned())]);
    assert_eq!(tui.toast(), Some("Copied DEC"));
}

#[test]
fn menu_actions_reach_the_platform() {
    let (mut tui, recorder) = paid_tui();
    tui.press(KeyCode::Char('m'));
    assert_eq!(tui.screen(), Screen::Menu);

    // Send feedback
    tui.press(KeyCode::Down);
    tui.press(KeyCode::Enter);
    // Rate app
    tui.press(KeyCode::Down);
    tui.press(KeyCode::Enter);
    // Share app
    tui.press(KeyCode::Down);
    tui.press(KeyCode::Enter);

    assert_eq!(
        recorder.calls(),
        vec![
            PlatformCall::Mail(MailDraft::feedback()),
            PlatformCall::Rate(PAID_APP_ID.to_owned()),
            PlatformCall::Share("https://itunes.apple.com/app/id1283197781".to_owned()),
        ]
    );
    assert_eq!(tui.screen(), Screen::Menu);
}

#[test]
fn feedback_without_mail_client_shows_notice() {
    let (mut tui, recorder) = tui_with(Edition::Paid, None, false);
    tui.press(KeyCode::Char('m'));
    tui.press(KeyCode::Down);
    tui.press(KeyCode::Enter);

    match tui.modal() {
        Some(Modal::Alert(alert)) => {
            assert_eq!(alert.title(), "Mail services are not available");
            assert_eq!(alert.buttons(), [AlertButton::Done]);
        }
        other => panic!("expected notice alert, got {other:?}"),
    }
    assert!(recorder.calls().is_empty());

    tui.press(KeyCode::Esc);
    assert!(tui.modal().is_none());
}

#[test]
fn menu_selection_is_clamped() {
    let (mut tui, recorder) = paid_tui();
    tui.press(KeyCode::Char('m'));
    for _ in 0..10 {
        tui.press(KeyCode::Down);
    }
    // Close is the last entry.
    tui.press(KeyCode::Enter);
    assert_eq!(tui.screen(), Screen::Converter);
    assert!(recorder.calls().is_empty());
}

#[test]
fn free_edition_requests_ads_on_start() {
    let (_tui, recorder) = free_tui();
    assert_eq!(
        recorder.calls(),
        vec![PlatformCall::LoadBanner, PlatformCall::LoadInterstitial]
    );
}

#[test]
fn paid_edition_never_touches_ads_or_upgrade_alert() {
    let (mut tui, recorder) = paid_tui();
    tui.press(KeyCode::Char('m'));
    tui.press(KeyCode::Esc);

    assert_eq!(tui.screen(), Screen::Converter);
    assert!(tui.modal().is_none());
    assert!(recorder.calls().is_empty());
}

#[test]
fn closing_menu_in_free_edition_offers_upgrade() {
    let (mut tui, recorder) = free_tui();
    tui.press(KeyCode::Char('m'));
    tui.press(KeyCode::Esc);

    assert_eq!(tui.screen(), Screen::Converter);
    assert!(upgrade_alert_open(&tui));

    tui.press(KeyCode::Char('u'));
    assert!(tui.modal().is_none());
    assert_eq!(
        recorder.calls().last(),
        Some(&PlatformCall::Rate(PAID_APP_ID.to_owned()))
    );
}

#[test]
fn upgrade_alert_buttons_cycle_and_done_dismisses() {
    let (mut tui, recorder) = free_tui();
    tui.press(KeyCode::Char('m'));
    tui.press(KeyCode::Esc);

    tui.press(KeyCode::Right);
    tui.press(KeyCode::Right);
    tui.press(KeyCode::Enter);

    assert!(tui.modal().is_none());
    assert!(!recorder
        .calls()
        .iter()
        .any(|call| matches!(call, PlatformCall::Rate(_))));
}

#[test]
fn alert_swallows_digit_keys() {
    let (mut tui, _) = free_tui();
    tui.press(KeyCode::Char('m'));
    tui.press(KeyCode::Esc);

    assert!(!tui.press(KeyCode::Char('7')));
    assert_eq!(tui.text(Radix::Dec), "");
}

#[test]
fn loaded_interstitial_is_shown_then_followed_by_upgrade_alert() {
    let (mut tui, recorder) = free_tui();
    recorder.push_ad_event(AdEvent::InterstitialLoaded {
        unit_id: "unit".to_owned(),
        headline: "Go ad-free".to_owned(),
    });
    tui.poll_ads();

    assert!(matches!(
        tui.modal(),
        Some(Modal::Interstitial { headline }) if headline == "Go ad-free"
    ));
    let screen = tui.render(60, 16);
    assert!(screen.contains("Go ad-free"), "{screen}");

    tui.press(KeyCode::Esc);
    assert!(upgrade_alert_open(&tui));
}

#[test]
fn failed_interstitial_goes_straight_to_upgrade_alert() {
    let (mut tui, recorder) = free_tui();
    recorder.push_ad_event(AdEvent::InterstitialFailed {
        reason: "no fill".to_owned(),
    });
    tui.poll_ads();

    assert!(upgrade_alert_open(&tui));
}

#[test]
fn banner_failure_is_silent_and_load_shows_headline() {
    let (mut tui, recorder) = free_tui();
    recorder.push_ad_event(AdEvent::BannerFailed {
        reason: "offline".to_owned(),
    });
    tui.poll_ads();
    assert_eq!(tui.banner(), None);
    assert!(tui.modal().is_none());

    recorder.push_ad_event(AdEvent::BannerLoaded {
        unit_id: "unit".to_owned(),
        headline: "House ad".to_owned(),
    });
    tui.poll_ads();
    assert_eq!(tui.banner(), Some("House ad"));
    assert!(tui.render(60, 16).contains("House ad"));
}

#[test]
fn settings_changes_are_saved_and_applied_on_leave() {
    let tmp = TempDir::new("tui-settings");
    let store = PreferenceStore::new(tmp.path().join("preferences.json"));
    let (mut tui, _) = tui_with(Edition::Paid, Some(store.clone()), true);
    assert!(tui.is_light_theme());

    tui.press(KeyCode::Char('s'));
    assert_eq!(tui.screen(), Screen::Settings);

    tui.press(KeyCode::Enter);
    assert!(!store.load().unwrap().light_theme);
    assert!(tui.is_light_theme(), "theme switches at the reload point");

    tui.press(KeyCode::Down);
    tui.press(KeyCode::Right);
    assert_eq!(store.load().unwrap().decimal_places, 20);
    tui.press(KeyCode::Left);
    tui.press(KeyCode::Left);
    assert_eq!(store.load().unwrap().decimal_places, 18);

    tui.press(KeyCode::Esc);
    assert_eq!(tui.screen(), Screen::Converter);
    assert!(!tui.is_light_theme());
    assert_eq!(tui.config().sync.decimal_places, 18);
}

#[test]
fn closing_menu_reloads_preferences_from_the_store() {
    let tmp = TempDir::new("tui-reload");
    let store = PreferenceStore::new(tmp.path().join("preferences.json"));
    let (mut tui, _) = tui_with(Edition::Paid, Some(store.clone()), true);

    store
        .save(&Preferences {
            light_theme: false,
            decimal_places: 3,
        })
        .unwrap();
    assert!(tui.is_light_theme());

    tui.press(KeyCode::Char('m'));
    tui.press(KeyCode::Esc);

    assert!(!tui.is_light_theme());
    assert_eq!(tui.config().preferences.decimal_places, 3);
}

#[test]
fn help_overlay_toggles_and_q_quits() {
    let (mut tui, _) = paid_tui();
    tui.press(KeyCode::Char('?'));
    assert!(tui.render(80, 24).contains("Refresh (clear all fields)"));
    tui.press(KeyCode::Char('1'));
    assert_eq!(tui.text(Radix::Dec), "", "help swallows digits");

    tui.press(KeyCode::Esc);
    assert!(!tui.should_quit());
    tui.press(KeyCode::Char('q'));
    assert!(tui.should_quit());
}

#[test]
fn render_shows_labels_values_and_footer() {
    let (mut tui, _) = paid_tui();
    tui.focus(Radix::Hex);
    tui.type_text("FF");

    let screen = tui.render(100, 14);
    for needle in ["BIN", "OCT", "DEC", "HEX", "11111111", "377", "255", "FF", "Base Converter++"] {
        assert!(screen.contains(needle), "missing {needle}:\n{screen}");
    }
    assert!(screen.contains("Quit:q"), "{screen}");
}

#[test]
fn render_menu_lists_every_action() {
    let (mut tui, _) = paid_tui();
    tui.press(KeyCode::Char('m'));

    let screen = tui.render(60, 14);
    for needle in ["Settings", "Send feedback", "Rate app", "Share app", "Close"] {
        assert!(screen.contains(needle), "missing {needle}:\n{screen}");
    }
}

#[test]
fn footer_labels_are_capitalized() {
    assert_eq!(footer_label_ucfirst("SETTINGS"), "Settings");
    assert_eq!(footer_label_ucfirst(""), "");
}
