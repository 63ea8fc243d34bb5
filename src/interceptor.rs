//! 请求拦截器
//!
//! 每个请求发出前同步读取身份令牌和 CSRF 令牌并写入请求头。
//! 令牌在发送时读取，登录后构造的请求会立即带上新令牌。

use crate::config::{ApiConfig, HEADER_AUTHORIZATION, HEADER_CSRF_TOKEN};
use crate::request::HttpRequest;
use crate::storage::KeyValueStore;

/// Cookie 读取接口，浏览器端由 `document.cookie` 实现
pub trait CookieJar {
    fn cookie(&self, name: &str) -> Option<String>;
}

/// 请求发出前的改写钩子
pub trait RequestInterceptor {
    fn intercept(&self, req: HttpRequest) -> HttpRequest;
}

/// 不做任何改写
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopInterceptor;

impl RequestInterceptor for NoopInterceptor {
    fn intercept(&self, req: HttpRequest) -> HttpRequest {
        req
    }
}

/// 从 `Cookie` 头格式的字符串 (`a=1; b=2`) 中取出指定名称的原始值
///
/// 返回值未做百分号解码。
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
}

/// 注入 `Authorization` 与 `X-CSRFToken`
#[derive(Debug, Clone)]
pub struct CredentialInterceptor<S, J> {
    storage: S,
    cookies: J,
    token_key: String,
    csrf_cookie: String,
}

impl<S: KeyValueStore, J: CookieJar> CredentialInterceptor<S, J> {
    pub fn new(config: &ApiConfig, storage: S, cookies: J) -> Self {
        Self {
            storage,
            cookies,
            token_key: config.auth_token_key.clone(),
            csrf_cookie: config.csrf_cookie.clone(),
        }
    }
}

impl<S: KeyValueStore, J: CookieJar> RequestInterceptor for CredentialInterceptor<S, J> {
    fn intercept(&self, mut req: HttpRequest) -> HttpRequest {
        if let Some(token) = self.storage.get(&self.token_key).filter(|t| !t.is_empty()) {
            req = req.with_header(HEADER_AUTHORIZATION, &format!("Token {}", token));
        }

        if let Some(csrf) = self.cookies.cookie(&self.csrf_cookie) {
            req = req.with_header(HEADER_CSRF_TOKEN, &csrf);
        }

        req
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::HttpMethod;
    use crate::storage::MemoryStore;
    use std::collections::HashMap;

    #[derive(Default)]
    struct StaticCookies(HashMap<String, String>);

    impl CookieJar for StaticCookies {
        fn cookie(&self, name: &str) -> Option<String> {
            self.0.get(name).cloned()
        }
    }

    fn request() -> HttpRequest {
        HttpRequest::new("/api/v1/courses/", HttpMethod::Get)
    }

    #[test]
    fn test_find_cookie() {
        let raw = "sessionid=abc; csrftoken=t%3Dk; other=1";
        assert_eq!(find_cookie(raw, "csrftoken"), Some("t%3Dk"));
        assert_eq!(find_cookie(raw, "sessionid"), Some("abc"));
        assert_eq!(find_cookie(raw, "missing"), None);
        assert_eq!(find_cookie("", "csrftoken"), None);
    }

    #[test]
    fn test_find_cookie_requires_exact_name() {
        assert_eq!(find_cookie("xcsrftoken=1; csrftoken2=2", "csrftoken"), None);
        assert_eq!(find_cookie("csrftoken=", "csrftoken"), Some(""));
    }

    #[test]
    fn test_no_credentials_no_headers() {
        let interceptor = CredentialInterceptor::new(
            &ApiConfig::default(),
            MemoryStore::new(),
            StaticCookies::default(),
        );
        let req = interceptor.intercept(request());
        assert!(req.header("Authorization").is_none());
        assert!(req.header("X-CSRFToken").is_none());
    }

    #[test]
    fn test_injects_token_and_csrf() {
        let storage = MemoryStore::new();
        storage.set("auth_token", "abc123").unwrap();
        let mut cookies = StaticCookies::default();
        cookies.0.insert("csrftoken".into(), "csrf-value".into());

        let interceptor = CredentialInterceptor::new(&ApiConfig::default(), storage, cookies);
        let req = interceptor.intercept(request());

        assert_eq!(req.header("Authorization"), Some("Token abc123"));
        assert_eq!(req.header("X-CSRFToken"), Some("csrf-value"));
    }

    #[test]
    fn test_token_read_at_send_time() {
        let storage = MemoryStore::new();
        let interceptor = CredentialInterceptor::new(
            &ApiConfig::default(),
            storage.clone(),
            StaticCookies::default(),
        );

        assert!(interceptor.intercept(request()).header("Authorization").is_none());

        storage.set("auth_token", "late").unwrap();
        assert_eq!(
            interceptor.intercept(request()).header("Authorization"),
            Some("Token late")
        );

        storage.set("auth_token", "").unwrap();
        assert!(interceptor.intercept(request()).header("Authorization").is_none());
    }
}
