use ingest::events;
use pretty_assertions::assert_eq;

#[test]
fn kill_defaults() {
    let entries: Vec<common::KillEntry> = serde_json::from_value(serde_json::json!([
        {"victim_steamid": "V1", "headshot": null}
    ]))
    .unwrap();

    let normalized = events::normalize_kills(&entries);

    let expected = vec![events::KillRecord {
        attacker_steamid: None,
        attacker_role: None,
        victim_steamid: Some("V1".to_owned()),
        victim_role: None,
        weapon: None,
        headshot: false,
    }];
    assert_eq!(expected, normalized);
}

#[test]
fn kill_without_victim_is_kept() {
    let entries = vec![common::KillEntry {
        attacker_steamid: Some("A".to_owned()),
        attacker_role: Some("traitor".to_owned()),
        victim_steamid: None,
        victim_role: None,
        weapon: Some("weapon_ttt_knife".to_owned()),
        headshot: Some(true),
    }];

    let normalized = events::normalize_kills(&entries);

    assert_eq!(1, normalized.len());
    assert_eq!(None, normalized[0].victim_steamid);
    assert!(normalized[0].headshot);
}

#[test]
fn world_kill_has_no_attacker() {
    let entries: Vec<common::KillEntry> = serde_json::from_value(serde_json::json!([
        {"victim_steamid": "V1", "victim_role": "innocent", "weapon": "prop_physics"}
    ]))
    .unwrap();

    let normalized = events::normalize_kills(&entries);

    let expected = vec![events::KillRecord {
        attacker_steamid: None,
        attacker_role: None,
        victim_steamid: Some("V1".to_owned()),
        victim_role: Some("innocent".to_owned()),
        weapon: Some("prop_physics".to_owned()),
        headshot: false,
    }];
    assert_eq!(expected, normalized);
}

#[test]
fn buy_with_all_fields_missing() {
    let entries: Vec<common::BuyEntry> =
        serde_json::from_value(serde_json::json!([{}])).unwrap();

    let normalized = events::normalize_buys(&entries);

    let expected = vec![events::BuyRecord {
        steam_id: None,
        role: None,
        item: None,
    }];
    assert_eq!(expected, normalized);
}

#[test]
fn buys_map_one_to_one() {
    let entries: Vec<common::BuyEntry> = serde_json::from_value(serde_json::json!([
        {"steam_id": "A", "role": "traitor", "item": "item_armor"},
        {"steam_id": "A", "role": "traitor", "item": "weapon_ttt_c4"},
        {"steam_id": "B", "role": "detective"}
    ]))
    .unwrap();

    let normalized = events::normalize_buys(&entries);

    assert_eq!(3, normalized.len());
    assert_eq!(Some("weapon_ttt_c4".to_owned()), normalized[1].item);
    assert_eq!(None, normalized[2].item);
}

#[test]
fn empty_lists() {
    assert_eq!(0, events::normalize_kills(&[]).len());
    assert_eq!(0, events::normalize_buys(&[]).len());
}
