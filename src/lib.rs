//! moduway 课程比较客户端核心
//!
//! 与平台无关的部分都在这里，浏览器端 (`moduway-frontend`) 只提供各个 trait 的实现：
//! - `request`: HTTP 抽象（方法、请求、响应、`HttpClient`）
//! - `interceptor`: 身份令牌与 CSRF 令牌注入
//! - `api` / `protocol`: REST 接口封装与协议类型
//! - `storage`: 持久化键值存储抽象
//! - `basket` / `auth`: 分析篮与认证状态
//! - `route`: 路由表

pub mod api;
pub mod auth;
pub mod basket;
pub mod config;
pub mod error;
pub mod interceptor;
pub mod model;
pub mod protocol;
pub mod request;
pub mod route;
pub mod storage;

pub use api::ApiClient;
pub use auth::AuthStore;
pub use basket::{BASKET_CAPACITY, BasketState, BasketStore, ComparisonBasket};
pub use config::ApiConfig;
pub use error::{ApiError, BasketError, StorageError};
pub use interceptor::{CookieJar, CredentialInterceptor, RequestInterceptor};
pub use model::{Course, CourseId};
pub use protocol::{AnalyzeComparisonRequest, ApiRequest, UserPreferences};
pub use request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
pub use route::AppRoute;
pub use storage::{KeyValueStore, MemoryStore};
