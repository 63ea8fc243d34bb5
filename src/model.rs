use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 课程 ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u64);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for CourseId {
    fn from(id: u64) -> Self {
        CourseId(id)
    }
}

/// 课程记录（分析篮条目）
///
/// 只有 `id` 参与唯一性判断；调用方放入的其余展示字段原样保留，
/// 序列化时与 `id` 平铺在同一个 JSON 对象里。`details` 中不会出现 `id` 键。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    #[serde(flatten)]
    details: Map<String, Value>,
}

const ID_KEY: &str = "id";

impl Course {
    pub fn new(id: impl Into<CourseId>) -> Self {
        Self {
            id: id.into(),
            details: Map::new(),
        }
    }

    /// 附加展示字段，`id` 键会被忽略
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != ID_KEY {
            self.details.insert(key, value.into());
        }
        self
    }

    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.get(key)
    }

    pub fn detail_str(&self, key: &str) -> Option<&str> {
        self.detail(key).and_then(Value::as_str)
    }

    /// 展示用标题，缺失时回退为 `#<id>`
    pub fn display_title(&self) -> String {
        self.detail_str("title")
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_course_keeps_extra_fields() {
        let raw = json!({"id": 7, "title": "Rust 入门", "rating": 4.5});
        let course: Course = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(course.id, CourseId(7));
        assert_eq!(course.detail_str("title"), Some("Rust 入门"));
        assert_eq!(serde_json::to_value(&course).unwrap(), raw);
    }

    #[test]
    fn test_course_requires_integer_id() {
        assert!(serde_json::from_value::<Course>(json!({"title": "x"})).is_err());
        assert!(serde_json::from_value::<Course>(json!({"id": "7"})).is_err());
    }

    #[test]
    fn test_with_detail_ignores_id_key() {
        let course = Course::new(1u64).with_detail("id", 99).with_detail("title", "x");

        assert_eq!(course.id, CourseId(1));
        assert_eq!(course.detail("id"), None);
        assert_eq!(serde_json::to_value(&course).unwrap(), json!({"id": 1, "title": "x"}));
    }

    #[test]
    fn test_display_title_fallback() {
        assert_eq!(Course::new(3u64).display_title(), "#3");
        assert_eq!(
            Course::new(3u64).with_detail("title", "Algorithms").display_title(),
            "Algorithms"
        );
    }
}
