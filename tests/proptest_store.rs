use encouragebot::db::Position;
use encouragebot::tests::util::init_test_db;
use proptest::prelude::*;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_delete_at_matches_vec_remove(
        entries in prop::collection::vec("[a-z]{1,8}", 0..8),
        position in 0usize..10,
    ) {
        let (deleted, remaining) = runtime().block_on(async {
            let db = init_test_db().await;
            for entry in &entries {
                db.add_encouragement(entry).await.unwrap();
            }
            let deleted = db.delete_encouragement_at(Position(position)).await.unwrap();
            (deleted, db.list_encouragements().await.unwrap())
        });

        let mut expected = entries.clone();
        if position < expected.len() {
            expected.remove(position);
        }
        prop_assert_eq!(deleted, position < entries.len());
        prop_assert_eq!(remaining, expected);
    }

    #[test]
    fn prop_delete_text_removes_at_most_one(
        entries in prop::collection::vec("[ab]{1,2}", 0..8),
        target in "[ab]{1,2}",
    ) {
        let (deleted, remaining) = runtime().block_on(async {
            let db = init_test_db().await;
            for entry in &entries {
                db.add_encouragement(entry).await.unwrap();
            }
            let deleted = db.delete_encouragement_text(&target).await.unwrap();
            (deleted, db.list_encouragements().await.unwrap())
        });

        let mut expected = entries.clone();
        if let Some(index) = expected.iter().position(|e| e == &target) {
            expected.remove(index);
        }
        prop_assert_eq!(deleted, entries.contains(&target));
        prop_assert_eq!(remaining, expected);
    }
}
