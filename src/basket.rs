//! 比较分析篮
//!
//! 最多容纳 [`BASKET_CAPACITY`] 门课程，按加入顺序排列，按 ID 去重。
//!
//! 持久化约定：每个修改操作（add / remove / clear）在修改内存状态后，
//! 立即把完整列表写回存储（write-through，不做批量或防抖）。
//! 被拒绝的添加不改变状态，也不写存储。

use serde_json::Value;
use tracing::{info, warn};

use crate::config::DEFAULT_BASKET_KEY;
use crate::error::{BasketError, StorageError};
use crate::model::{Course, CourseId};
use crate::storage::KeyValueStore;

#[cfg(test)]
mod tests;

pub const BASKET_CAPACITY: usize = 3;

/// 按容量划分的三种状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasketState {
    Empty,
    Partial,
    Full,
}

// =========================================================
// 纯状态
// =========================================================

/// 分析篮内容（不含持久化）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonBasket {
    items: Vec<Course>,
}

impl ComparisonBasket {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从外部数据构建，丢弃重复 ID 与超出容量的条目
    pub fn from_items(items: impl IntoIterator<Item = Course>) -> Self {
        let mut basket = Self::new();
        for course in items {
            let id = course.id;
            if let Err(e) = basket.try_push(course) {
                warn!(course_id = %id, "dropping stored basket entry: {e}");
            }
        }
        basket
    }

    pub fn items(&self) -> &[Course] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn state(&self) -> BasketState {
        match self.items.len() {
            0 => BasketState::Empty,
            n if n >= BASKET_CAPACITY => BasketState::Full,
            _ => BasketState::Partial,
        }
    }

    pub fn is_added(&self, course_id: CourseId) -> bool {
        self.items.iter().any(|c| c.id == course_id)
    }

    pub fn course_ids(&self) -> Vec<CourseId> {
        self.items.iter().map(|c| c.id).collect()
    }

    fn try_push(&mut self, course: Course) -> Result<(), BasketError> {
        if self.is_added(course.id) {
            return Err(BasketError::Duplicate(course.id));
        }
        if self.items.len() >= BASKET_CAPACITY {
            return Err(BasketError::Full {
                capacity: BASKET_CAPACITY,
            });
        }
        self.items.push(course);
        Ok(())
    }

    fn remove(&mut self, course_id: CourseId) -> Option<Course> {
        let pos = self.items.iter().position(|c| c.id == course_id)?;
        Some(self.items.remove(pos))
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

// =========================================================
// 持久化读写
// =========================================================

/// 解析存储中的原始值
///
/// 缺失、非 JSON、非数组都退化为空篮；数组中不是合法课程对象的条目被跳过。
fn parse_stored(raw: Option<&str>) -> ComparisonBasket {
    let Some(raw) = raw else {
        return ComparisonBasket::new();
    };

    let entries = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(other) => {
            warn!("stored basket is not an array ({}), starting empty", json_kind(&other));
            return ComparisonBasket::new();
        }
        Err(e) => {
            warn!("stored basket is not valid JSON, starting empty: {e}");
            return ComparisonBasket::new();
        }
    };

    let courses = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<Course>(entry) {
            Ok(course) => Some(course),
            Err(e) => {
                warn!("skipping invalid stored course: {e}");
                None
            }
        });

    ComparisonBasket::from_items(courses)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// =========================================================
// 带持久化的存储
// =========================================================

#[derive(Debug, Clone)]
pub struct BasketStore<S> {
    storage: S,
    key: String,
    basket: ComparisonBasket,
}

impl<S: KeyValueStore> BasketStore<S> {
    /// 创建并从存储中恢复（只在构造时读取一次）
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, DEFAULT_BASKET_KEY)
    }

    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let basket = parse_stored(storage.get(&key).as_deref());
        Self {
            storage,
            key,
            basket,
        }
    }

    pub fn basket(&self) -> &ComparisonBasket {
        &self.basket
    }

    pub fn items(&self) -> &[Course] {
        self.basket.items()
    }

    pub fn count(&self) -> usize {
        self.basket.count()
    }

    pub fn state(&self) -> BasketState {
        self.basket.state()
    }

    pub fn is_added(&self, course_id: CourseId) -> bool {
        self.basket.is_added(course_id)
    }

    pub fn course_ids(&self) -> Vec<CourseId> {
        self.basket.course_ids()
    }

    /// 加入课程
    ///
    /// 重复或已满时返回拒绝错误，状态与存储都不变。
    pub fn add_item(&mut self, course: Course) -> Result<(), BasketError> {
        let id = course.id;
        if let Err(e) = self.basket.try_push(course) {
            warn!(course_id = %id, "add rejected: {e}");
            return Err(e);
        }
        info!(course_id = %id, count = self.count(), "course added to basket");
        self.persist()?;
        Ok(())
    }

    /// 移除课程，不存在时列表不变但仍会写回
    pub fn remove_item(&mut self, course_id: CourseId) -> Result<Option<Course>, BasketError> {
        let removed = self.basket.remove(course_id);
        if removed.is_some() {
            info!(course_id = %course_id, count = self.count(), "course removed from basket");
        }
        self.persist()?;
        Ok(removed)
    }

    pub fn clear(&mut self) -> Result<(), BasketError> {
        self.basket.clear();
        info!("basket cleared");
        self.persist()?;
        Ok(())
    }

    /// 把完整列表序列化写入存储
    pub fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(self.basket.items())?;
        self.storage.set(&self.key, &json)
    }
}
