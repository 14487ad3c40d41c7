use playertrack_core::{from_row, to_row, Category, UNSAVED_CATEGORY_ID};

#[test]
fn new_category_is_unsaved() {
    let category = Category::new("Friends", 1);

    assert_eq!(category.id, UNSAVED_CATEGORY_ID);
    assert!(!category.is_persisted());
    assert_eq!(category.created, 0);
    assert_eq!(category.updated, 0);
    assert!(Category::with_id(3, "Friends", 1).is_persisted());
}

#[test]
fn row_round_trip_keeps_name_and_rank() {
    for (name, rank) in [("Friends", 1), ("", 0), ("Free Company", -4)] {
        let category = Category::new(name, rank);
        let back = from_row(to_row(&category));
        assert_eq!(back.name, name);
        assert_eq!(back.rank, rank);
    }
}

#[test]
fn category_serialization_uses_expected_wire_fields() {
    let category = Category {
        id: 1,
        name: "Friends".to_string(),
        rank: 2,
        created: 1_700_000_000_000,
        updated: 1_700_000_360_000,
    };

    let json = serde_json::to_value(&category).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": 1,
            "name": "Friends",
            "rank": 2,
            "created": 1_700_000_000_000_i64,
            "updated": 1_700_000_360_000_i64,
        })
    );

    let decoded: Category = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, category);
}
