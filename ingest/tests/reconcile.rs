use ingest::reconcile;
use pretty_assertions::assert_eq;

fn entry(steamid: &str, role: &str, karma: Option<i32>, points: Option<i32>) -> common::RoleEntry {
    common::RoleEntry {
        player_steamid: Some(steamid.to_owned()),
        role: Some(role.to_owned()),
        karma,
        points,
    }
}

#[test]
fn one_record_per_player() {
    let start = vec![
        entry("A", "innocent", Some(1000), Some(0)),
        entry("B", "traitor", Some(1000), Some(5)),
    ];
    let end = vec![
        entry("B", "traitor", Some(950), Some(8)),
        entry("A", "innocent", Some(1000), Some(1)),
        entry("C", "detective", Some(1000), Some(0)),
    ];

    let merged = reconcile::merge_role_reports(&start, &end);

    assert_eq!(3, merged.len());
    // start-seen players first, end-only players after
    let order: Vec<&str> = merged.keys().map(|k| k.as_str()).collect();
    assert_eq!(vec!["A", "B", "C"], order);
}

#[test]
fn start_only_player() {
    let start = vec![entry("A", "innocent", Some(1000), Some(3))];

    let merged = reconcile::merge_role_reports(&start, &[]);

    let expected = reconcile::MergedPlayer {
        steam_id: "A".to_owned(),
        role_start: Some("innocent".to_owned()),
        role_end: None,
        karma_start: Some(1000),
        karma_end: None,
        points_start: Some(3),
        points_end: None,
    };
    assert_eq!(Some(&expected), merged.get("A"));
    assert_eq!(None, expected.karma_diff());
    assert_eq!(None, expected.points_diff());
}

#[test]
fn end_only_player() {
    let end = vec![entry("B", "traitor", Some(900), Some(12))];

    let merged = reconcile::merge_role_reports(&[], &end);

    let expected = reconcile::MergedPlayer {
        steam_id: "B".to_owned(),
        role_start: None,
        role_end: Some("traitor".to_owned()),
        karma_start: None,
        karma_end: Some(900),
        points_start: None,
        points_end: Some(12),
    };
    assert_eq!(Some(&expected), merged.get("B"));
    assert_eq!(None, expected.karma_diff());
    assert_eq!(None, expected.points_diff());
}

#[test]
fn role_change_and_metric_diffs() {
    let start = vec![entry("A", "traitor", Some(900), Some(10))];
    let end = vec![entry("A", "innocent", Some(850), Some(15))];

    let merged = reconcile::merge_role_reports(&start, &end);
    let player = merged.get("A").unwrap();

    assert_eq!(Some("traitor".to_owned()), player.role_start);
    assert_eq!(Some("innocent".to_owned()), player.role_end);
    assert_eq!(Some(-50), player.karma_diff());
    assert_eq!(Some(5), player.points_diff());
}

#[test]
fn one_sided_metric_yields_no_diff() {
    let start = vec![common::RoleEntry {
        player_steamid: Some("A".to_owned()),
        role: Some("innocent".to_owned()),
        karma: Some(100),
        points: None,
    }];
    let end = vec![common::RoleEntry {
        player_steamid: Some("A".to_owned()),
        role: Some("innocent".to_owned()),
        karma: Some(80),
        points: Some(7),
    }];

    let merged = reconcile::merge_role_reports(&start, &end);
    let player = merged.get("A").unwrap();

    assert_eq!(Some(-20), player.karma_diff());
    assert_eq!(None, player.points_diff());
}

#[test]
fn missing_or_empty_steamid_is_skipped() {
    let start = vec![
        common::RoleEntry {
            player_steamid: None,
            role: Some("innocent".to_owned()),
            karma: Some(1000),
            points: Some(0),
        },
        common::RoleEntry {
            player_steamid: Some("".to_owned()),
            role: Some("traitor".to_owned()),
            karma: Some(1000),
            points: Some(0),
        },
        entry("A", "detective", Some(1000), Some(0)),
    ];

    let merged = reconcile::merge_role_reports(&start, &[]);

    assert_eq!(1, merged.len());
    assert!(merged.contains_key("A"));
}

#[test]
fn later_duplicate_overwrites_same_side() {
    let start = vec![
        entry("A", "innocent", Some(1000), Some(0)),
        entry("A", "traitor", Some(990), Some(2)),
    ];
    let end = vec![entry("A", "traitor", Some(940), Some(6))];

    let merged = reconcile::merge_role_reports(&start, &end);

    assert_eq!(1, merged.len());
    let player = merged.get("A").unwrap();
    assert_eq!(Some("traitor".to_owned()), player.role_start);
    assert_eq!(Some(990), player.karma_start);
    assert_eq!(Some(-50), player.karma_diff());
    assert_eq!(Some(4), player.points_diff());
}

#[test]
fn metric_diff_requires_both_sides() {
    assert_eq!(Some(-20), reconcile::metric_diff(Some(100), Some(80)));
    assert_eq!(Some(5), reconcile::metric_diff(Some(10), Some(15)));
    assert_eq!(Some(0), reconcile::metric_diff(Some(42), Some(42)));
    assert_eq!(None, reconcile::metric_diff(Some(100), None));
    assert_eq!(None, reconcile::metric_diff(None, Some(80)));
    assert_eq!(None, reconcile::metric_diff(None, None));
}
