use std::collections::HashSet;

use dealkit_cli::run;
use serial_test::serial;

mod helpers;
use helpers::clear_env;

fn run_ok(args: &[&str]) -> String {
    clear_env();
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let argv = std::iter::once("dealkit").chain(args.iter().copied());
    let code = run(argv, &mut out, &mut err);
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
    String::from_utf8(out).unwrap()
}

#[test]
#[serial]
fn deal_prints_four_full_hands_by_default() {
    let s = run_ok(&["deal", "--seed", "1"]);
    let lines: Vec<&str> = s.lines().collect();
    assert_eq!(lines.len(), 4);

    let mut seen = HashSet::new();
    for line in &lines {
        let (_, cards) = line.split_once(": ").expect("Player N: prefix");
        for card in cards.split(", ") {
            assert!(seen.insert(card.to_string()), "{card} dealt twice");
        }
    }
    assert_eq!(seen.len(), 52);
}

#[test]
#[serial]
fn deal_json_has_requested_shape() {
    let s = run_ok(&[
        "deal", "--deck", "pokemon", "--players", "3", "--cards", "5", "--seed", "7", "--json",
    ]);
    let v: serde_json::Value = serde_json::from_str(&s).unwrap();
    assert_eq!(v["deck"], "pokemon");
    assert_eq!(v["seed"], 7);
    let hands = v["hands"].as_array().unwrap();
    assert_eq!(hands.len(), 3);
    for hand in hands {
        let hand = hand.as_array().unwrap();
        assert_eq!(hand.len(), 5);
        assert!(hand[0]["suit"].is_string());
        assert!(hand[0]["value"].is_string());
    }
}

#[test]
#[serial]
fn same_seed_same_deal() {
    let a = run_ok(&["deal", "--seed", "99", "--players", "2", "--cards", "3"]);
    let b = run_ok(&["deal", "--seed", "99", "--players", "2", "--cards", "3"]);
    assert_eq!(a, b);
}

#[test]
#[serial]
fn unknown_deck_exits_with_error() {
    clear_env();
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["dealkit", "deal", "--deck", "unknown-id"], &mut out, &mut err);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    let msg = String::from_utf8_lossy(&err).to_lowercase();
    assert!(msg.contains("not found"), "stderr: {msg}");
}

#[test]
#[serial]
fn oversized_deal_exits_with_error() {
    clear_env();
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["dealkit", "deal", "--players", "6", "--cards", "10"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).contains("need 60, have 52"));
}
