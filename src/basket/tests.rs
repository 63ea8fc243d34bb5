use super::*;
use crate::storage::MemoryStore;
use proptest::prelude::*;
use serde_json::json;
use std::cell::Cell;

// =========================================================
// 辅助函数
// =========================================================

fn course(id: u64) -> Course {
    Course::new(id).with_detail("title", format!("Course {id}"))
}

fn ids(store: &BasketStore<MemoryStore>) -> Vec<u64> {
    store.course_ids().into_iter().map(|id| id.0).collect()
}

fn stored_value(storage: &MemoryStore) -> Value {
    serde_json::from_str(&storage.get("comparison_items").expect("basket not persisted")).unwrap()
}

/// 写入计数，用来验证写回次数
struct CountingStore {
    inner: MemoryStore,
    writes: Cell<usize>,
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.set(self.writes.get() + 1);
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write {
            key: key.to_string(),
            reason: "read only".to_string(),
        })
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

// =========================================================
// 状态转换
// =========================================================

#[test]
fn test_walkthrough() {
    let mut store = BasketStore::open(MemoryStore::new());
    assert_eq!(store.state(), BasketState::Empty);

    store.add_item(course(1)).unwrap();
    store.add_item(course(2)).unwrap();
    assert_eq!(store.state(), BasketState::Partial);

    let err = store.add_item(course(1)).unwrap_err();
    assert!(matches!(err, BasketError::Duplicate(CourseId(1))));
    assert_eq!(store.count(), 2);

    store.add_item(course(3)).unwrap();
    assert_eq!(store.state(), BasketState::Full);

    let err = store.add_item(course(4)).unwrap_err();
    assert!(matches!(err, BasketError::Full { capacity: 3 }));
    assert_eq!(store.count(), 3);

    let removed = store.remove_item(CourseId(2)).unwrap();
    assert_eq!(removed.map(|c| c.id), Some(CourseId(2)));
    assert_eq!(ids(&store), vec![1, 3]);
}

#[test]
fn test_duplicate_checked_before_capacity() {
    let mut store = BasketStore::open(MemoryStore::new());
    for id in 1..=3 {
        store.add_item(course(id)).unwrap();
    }
    assert!(matches!(
        store.add_item(course(2)),
        Err(BasketError::Duplicate(CourseId(2)))
    ));
}

#[test]
fn test_duplicate_ignores_other_fields() {
    let mut store = BasketStore::open(MemoryStore::new());
    store.add_item(course(7)).unwrap();
    let err = store
        .add_item(Course::new(7u64).with_detail("title", "another title"))
        .unwrap_err();
    assert!(err.is_rejection());
    assert_eq!(store.items()[0].detail_str("title"), Some("Course 7"));
}

#[test]
fn test_remove_any_position_and_absent() {
    let mut store = BasketStore::open(MemoryStore::new());
    for id in [5, 6, 7] {
        store.add_item(course(id)).unwrap();
    }

    store.remove_item(CourseId(5)).unwrap();
    assert_eq!(ids(&store), vec![6, 7]);

    assert!(store.remove_item(CourseId(99)).unwrap().is_none());
    assert_eq!(ids(&store), vec![6, 7]);
}

#[test]
fn test_is_added() {
    let mut store = BasketStore::open(MemoryStore::new());
    store.add_item(course(1)).unwrap();
    assert!(store.is_added(CourseId(1)));
    assert!(!store.is_added(CourseId(2)));
}

#[test]
fn test_rejection_messages() {
    assert_eq!(
        BasketError::Duplicate(CourseId(1)).to_string(),
        "이미 분석함에 담긴 강좌입니다."
    );
    assert_eq!(
        BasketError::Full { capacity: 3 }.to_string(),
        "최대 3개 강좌까지 분석할 수 있습니다."
    );
}

// =========================================================
// 持久化
// =========================================================

#[test]
fn test_every_mutation_writes_full_list() {
    let storage = MemoryStore::new();
    let mut store = BasketStore::open(storage.clone());

    store.add_item(course(1)).unwrap();
    store.add_item(course(2)).unwrap();
    assert_eq!(
        stored_value(&storage),
        json!([{"id": 1, "title": "Course 1"}, {"id": 2, "title": "Course 2"}])
    );

    store.remove_item(CourseId(1)).unwrap();
    assert_eq!(stored_value(&storage), json!([{"id": 2, "title": "Course 2"}]));

    store.clear().unwrap();
    assert_eq!(store.count(), 0);
    assert_eq!(stored_value(&storage), json!([]));
}

#[test]
fn test_rejected_add_does_not_write() {
    let store_backend = CountingStore {
        inner: MemoryStore::new(),
        writes: Cell::new(0),
    };
    let mut store = BasketStore::open(&store_backend);

    store.add_item(course(1)).unwrap();
    assert_eq!(store_backend.writes.get(), 1);

    assert!(store.add_item(course(1)).is_err());
    assert_eq!(store_backend.writes.get(), 1);

    store.remove_item(CourseId(42)).unwrap();
    assert_eq!(store_backend.writes.get(), 2);
}

#[test]
fn test_rehydrate_matches_memory() {
    let storage = MemoryStore::new();
    let mut store = BasketStore::open(storage.clone());
    store.add_item(course(3)).unwrap();
    store
        .add_item(Course::new(1u64).with_detail("instructor", json!({"name": "Lee"})))
        .unwrap();

    let reopened = BasketStore::open(storage);
    assert_eq!(reopened.basket(), store.basket());
}

#[test]
fn test_detail_id_does_not_shadow_course_id() {
    let storage = MemoryStore::new();
    let mut store = BasketStore::open(storage.clone());
    store.add_item(Course::new(1u64).with_detail("id", 99)).unwrap();

    assert_eq!(stored_value(&storage), json!([{"id": 1}]));

    let mut reopened = BasketStore::open(storage);
    assert_eq!(reopened.basket(), store.basket());
    assert!(reopened.add_item(course(1)).unwrap_err().is_rejection());
}

#[test]
fn test_storage_failure_surfaces() {
    let mut store = BasketStore::open(ReadOnlyStore);
    let err = store.add_item(course(1)).unwrap_err();
    assert!(matches!(err, BasketError::Storage(_)));
    assert!(!err.is_rejection());
    // 内存中的变更保留
    assert!(store.is_added(CourseId(1)));
}

#[test]
fn test_custom_key() {
    let storage = MemoryStore::new();
    let mut store = BasketStore::open_with_key(storage.clone(), "basket_v2");
    store.add_item(course(1)).unwrap();
    assert!(storage.get("comparison_items").is_none());
    assert!(storage.get("basket_v2").is_some());
}

// =========================================================
// 恢复时的校验
// =========================================================

fn open_with_raw(raw: &str) -> BasketStore<MemoryStore> {
    let storage = MemoryStore::new();
    storage.set("comparison_items", raw).unwrap();
    BasketStore::open(storage)
}

#[test]
fn test_malformed_storage_degrades_to_empty() {
    for raw in ["{not json", "", "null", "42", "{\"id\": 1}", "\"[]\""] {
        let store = open_with_raw(raw);
        assert_eq!(store.count(), 0, "raw value: {raw:?}");
    }
}

#[test]
fn test_invalid_entries_are_skipped() {
    let store = open_with_raw(r#"[{"id": 1}, {"title": "no id"}, 5, {"id": "2"}, {"id": 3}]"#);
    assert_eq!(ids(&store), vec![1, 3]);
}

#[test]
fn test_hydration_enforces_invariants() {
    let store = open_with_raw(r#"[{"id": 1}, {"id": 1}, {"id": 2}, {"id": 3}, {"id": 4}]"#);
    assert_eq!(ids(&store), vec![1, 2, 3]);
    assert_eq!(store.state(), BasketState::Full);
}

#[test]
fn test_hydration_keeps_display_fields() {
    let store = open_with_raw(r#"[{"id": 9, "title": "Deep Learning", "price": 0}]"#);
    assert_eq!(store.items()[0].display_title(), "Deep Learning");
    assert_eq!(store.items()[0].detail("price"), Some(&json!(0)));
}

// =========================================================
// 性质测试
// =========================================================

#[derive(Debug, Clone)]
enum Op {
    Add(u64),
    Remove(u64),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0u64..6).prop_map(Op::Add),
        3 => (0u64..6).prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_invariants_hold(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let storage = MemoryStore::new();
        let mut store = BasketStore::open(storage.clone());

        for op in ops {
            match op {
                Op::Add(id) => { let _ = store.add_item(course(id)); }
                Op::Remove(id) => { store.remove_item(CourseId(id)).unwrap(); }
                Op::Clear => store.clear().unwrap(),
            }

            let current = ids(&store);
            prop_assert!(current.len() <= BASKET_CAPACITY);
            let mut unique = current.clone();
            unique.sort_unstable();
            unique.dedup();
            prop_assert_eq!(unique.len(), current.len());

            let reopened = BasketStore::open(storage.clone());
            prop_assert_eq!(reopened.basket(), store.basket());
        }
    }

    #[test]
    fn prop_add_then_remove_restores(
        seed in prop::collection::btree_set(0u64..20, 0..3),
        extra in 20u64..40,
    ) {
        let mut store = BasketStore::open(MemoryStore::new());
        for id in &seed {
            store.add_item(course(*id)).unwrap();
        }
        let before = store.basket().clone();

        store.add_item(course(extra)).unwrap();
        store.remove_item(CourseId(extra)).unwrap();

        prop_assert_eq!(store.basket(), &before);
    }
}
