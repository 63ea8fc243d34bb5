//! 分析篮上下文
//!
//! 包装核心库的 `BasketStore`：每次修改都由 store 自身写回 LocalStorage，
//! 信号只负责通知界面刷新。

use leptos::prelude::*;
use moduway::basket::{BasketState, BasketStore};
use moduway::config::ApiConfig;
use moduway::error::BasketError;
use moduway::model::{Course, CourseId};

use crate::web::LocalStorage;

#[derive(Clone, Copy)]
pub struct BasketContext {
    store: RwSignal<BasketStore<LocalStorage>>,
}

impl BasketContext {
    pub fn new(config: &ApiConfig) -> Self {
        let store = BasketStore::open_with_key(LocalStorage, config.basket_key.clone());
        Self {
            store: RwSignal::new(store),
        }
    }

    pub fn items(&self) -> Vec<Course> {
        self.store.with(|s| s.items().to_vec())
    }

    pub fn count(&self) -> usize {
        self.store.with(|s| s.count())
    }

    pub fn state(&self) -> BasketState {
        self.store.with(|s| s.state())
    }

    pub fn is_added(&self, course_id: CourseId) -> bool {
        self.store.with(|s| s.is_added(course_id))
    }

    pub fn course_ids(&self) -> Vec<CourseId> {
        self.store.with(|s| s.course_ids())
    }

    pub fn add_item(&self, course: Course) -> Result<(), BasketError> {
        self.store
            .try_update(|s| s.add_item(course))
            .unwrap_or(Ok(()))
    }

    pub fn remove_item(&self, course_id: CourseId) -> Result<(), BasketError> {
        self.store
            .try_update(|s| s.remove_item(course_id).map(|_| ()))
            .unwrap_or(Ok(()))
    }

    pub fn clear(&self) -> Result<(), BasketError> {
        self.store.try_update(|s| s.clear()).unwrap_or(Ok(()))
    }
}

/// 从 Context 获取分析篮上下文
pub fn use_basket() -> BasketContext {
    use_context::<BasketContext>().expect("BasketContext should be provided")
}
