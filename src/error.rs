use thiserror::Error;

use crate::model::CourseId;

// =========================================================
// 传输层错误
// =========================================================

/// HTTP 调用错误
///
/// 传输层和服务端返回的错误原样交给调用方，不做统一翻译。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 请求构建失败（序列化请求体、设置 Header 等）
    #[error("request build failed: {0}")]
    RequestBuild(String),
    /// 网络请求失败
    #[error("network error: {0}")]
    Network(String),
    /// 服务端返回非 2xx 状态
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },
    /// 响应体解析失败
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// 非 2xx 响应的状态码
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

// =========================================================
// 持久化存储错误
// =========================================================

#[derive(Debug, Error)]
pub enum StorageError {
    /// 存储后端不可用（例如浏览器禁用了 localStorage）
    #[error("persistent storage is unavailable")]
    Unavailable,
    /// 写入失败（配额耗尽等）
    #[error("failed to write key `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

// =========================================================
// 分析篮错误
// =========================================================

/// 分析篮操作被拒绝的原因
///
/// Display 文本直接面向用户，由表现层决定如何展示。
#[derive(Debug, Error)]
pub enum BasketError {
    #[error("이미 분석함에 담긴 강좌입니다.")]
    Duplicate(CourseId),
    #[error("최대 {capacity}개 강좌까지 분석할 수 있습니다.")]
    Full { capacity: usize },
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl BasketError {
    /// 拒绝类错误不改变状态；存储错误发生时内存中的变更已生效
    pub fn is_rejection(&self) -> bool {
        matches!(self, BasketError::Duplicate(_) | BasketError::Full { .. })
    }
}
