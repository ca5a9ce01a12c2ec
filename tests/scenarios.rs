use rent_cover::cli::{run, SearchConfig};
use rent_cover::{find_all_covers, HousemateSet, PreferenceError, Preferences};

fn load(json: &str) -> (Preferences, usize) {
    let prefs = Preferences::from_json(json).unwrap();
    let rooms = prefs.validate().unwrap();
    (prefs, rooms)
}

#[test]
fn three_flat_people_two_rooms() {
    let (prefs, rooms) = load("[[100, 100], [100, 100], [100, 100]]");
    assert_eq!(rooms, 2);
    let covers: Vec<_> = find_all_covers(150.0, &prefs, rooms).collect();
    assert_eq!(covers.len(), 6);
    assert!(covers.iter().all(|c| c.total == 200.0));
}

#[test]
fn decision_on_person_zero() {
    let (prefs, _) = load(r#"[[0, 0], {"person": 0, "in": [50, 200], "out": [10, 10]}, [0, 0]]"#);
    let with_zero: HousemateSet = [0, 1].into_iter().collect();
    let without_zero: HousemateSet = [1, 2].into_iter().collect();
    let tree = prefs.of(1).unwrap();
    assert_eq!(tree.resolve_price(&with_zero, 1), 200.0);
    assert_eq!(tree.resolve_price(&without_zero, 1), 10.0);
}

#[test]
fn negative_leaf_fails_before_search_output() {
    let prefs = Preferences::from_json("[[-5, 10], [3, 3]]").unwrap();
    assert!(matches!(prefs.validate(), Err(PreferenceError::InvalidPrice { owner: 0, .. })));

    let mut out = Vec::new();
    let result = run(&SearchConfig { rent: 0.0, limit: None }, "[[3, 3], [-5, 10]]", &mut out);
    assert!(result.is_err());
    assert!(out.is_empty());
}

#[test]
fn duplicate_branch_from_json() {
    let json = r#"[{"person": 1, "in": {"person": 1, "in": [1], "out": [2]}, "out": [3]}, [1]]"#;
    let prefs = Preferences::from_json(json).unwrap();
    assert_eq!(prefs.validate(), Err(PreferenceError::DuplicateBranch { owner: 0, person: 1 }));
}

#[test]
fn out_of_range_branch_from_json() {
    let json = r#"[{"person": 7, "in": [1], "out": [2]}, [1]]"#;
    let prefs = Preferences::from_json(json).unwrap();
    assert!(matches!(prefs.validate(), Err(PreferenceError::InvalidPersonIndex { owner: 0, .. })));
}

#[test]
fn household_of_four_sharing_three_rooms() {
    // Person 3 only pays well when person 0 is not around.
    let json = r#"[
        [3000, 2800, 2500],
        [2900, 2900, 2600],
        {"person": 1, "in": [2700, 2700, 2700], "out": [2000, 2000, 2000]},
        {"person": 0, "in": [1000, 1000, 1000], "out": [3100, 2900, 2800]}
    ]"#;
    let (prefs, rooms) = load(json);
    assert_eq!(rooms, 3);
    let covers: Vec<_> = find_all_covers(8400.0, &prefs, rooms).collect();
    assert!(!covers.is_empty());
    for cover in &covers {
        assert!(cover.total >= 8400.0);
        assert!(!(cover.housemates.contains(0) && cover.housemates.contains(3)));
    }
    // {0, 1, 2}: 3000 + 2900 + 2700 is the best ordering of the first set.
    assert_eq!(covers[0].people(), vec![0, 1, 2]);
    assert_eq!(covers[0].total, 8600.0);
}
