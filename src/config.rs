//! 客户端配置
//!
//! API 地址在构建时通过 `MODUWAY_API_URL` 注入（与打包工具的环境变量作用相同）：
//! - 本地开发: `MODUWAY_API_URL=http://localhost/api/v1`
//! - 生产部署: 不设置，使用同源相对路径 `/api/v1`，由反向代理转发

use tracing::info;

// =========================================================
// 默认值
// =========================================================

pub const DEFAULT_API_BASE_URL: &str = "/api/v1";
pub const DEFAULT_AUTH_TOKEN_KEY: &str = "auth_token";
pub const DEFAULT_BASKET_KEY: &str = "comparison_items";
pub const DEFAULT_CSRF_COOKIE: &str = "csrftoken";

pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const HEADER_CSRF_TOKEN: &str = "X-CSRFToken";
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
pub const CONTENT_TYPE_JSON: &str = "application/json";

const API_URL_VAR: &str = "MODUWAY_API_URL";

/// 运行时配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// API 根地址，不带末尾斜杠
    pub base_url: String,
    /// 认证令牌在持久化存储中的键
    pub auth_token_key: String,
    /// 分析篮在持久化存储中的键
    pub basket_key: String,
    /// CSRF 令牌所在的 Cookie 名
    pub csrf_cookie: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            auth_token_key: DEFAULT_AUTH_TOKEN_KEY.to_string(),
            basket_key: DEFAULT_BASKET_KEY.to_string(),
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_string(),
        }
    }
}

impl ApiConfig {
    /// 读取构建时注入的 API 地址，未设置或为空则使用默认值
    pub fn load() -> Self {
        Self::from_base_url(option_env!("MODUWAY_API_URL"))
    }

    fn from_base_url(value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => Self::default().with_base_url(url),
            None => {
                info!("{API_URL_VAR} not set, using default: {DEFAULT_API_BASE_URL}");
                Self::default()
            }
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// 拼接完整请求地址
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}
