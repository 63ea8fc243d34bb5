use serde::de::DeserializeOwned;
use std::collections::HashMap;

use crate::error::ApiError;

#[cfg(test)]
use std::cell::RefCell;

// =========================================================
// 核心抽象层 (HTTP Interface Abstraction)
// =========================================================

/// 通用 HTTP 方法枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

/// 通用 HTTP 请求结构
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub method: HttpMethod,
    pub headers: HashMap<String, String>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(url: &str, method: HttpMethod) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: HashMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, key: &str, value: &str) -> Self {
        self.headers.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body.to_string());
        self
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }
}

/// 通用 HTTP 响应结构
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// 解析 JSON 响应体，空响应体（如 204）按 `null` 处理
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let body = if self.body.trim().is_empty() {
            "null"
        } else {
            &self.body
        };
        Ok(serde_json::from_str(body)?)
    }
}

/// HTTP 客户端特性 (Trait)
/// (?Send) 是因为浏览器 fetch 返回的 Future 不是 Send 的
#[async_trait::async_trait(?Send)]
pub trait HttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[async_trait::async_trait(?Send)]
impl<T: HttpClient + ?Sized> HttpClient for &T {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        (**self).send(req).await
    }
}

// =========================================================
// 测试工具: MockHttpClient
// =========================================================

#[cfg(test)]
pub struct MockHttpClient {
    // (Method, URL) -> (Status, Response Body)
    responses: RefCell<HashMap<(HttpMethod, String), (u16, String)>>,
    // 记录发出的请求
    pub requests: RefCell<Vec<HttpRequest>>,
    // 模拟网络故障
    fail_with: RefCell<Option<String>>,
}

#[cfg(test)]
impl MockHttpClient {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(HashMap::new()),
            requests: RefCell::new(Vec::new()),
            fail_with: RefCell::new(None),
        }
    }

    pub fn mock_response(
        &self,
        method: HttpMethod,
        url: &str,
        status: u16,
        body: serde_json::Value,
    ) {
        self.responses
            .borrow_mut()
            .insert((method, url.to_string()), (status, body.to_string()));
    }

    pub fn mock_raw(&self, method: HttpMethod, url: &str, status: u16, body: &str) {
        self.responses
            .borrow_mut()
            .insert((method, url.to_string()), (status, body.to_string()));
    }

    pub fn fail_network(&self, reason: &str) {
        *self.fail_with.borrow_mut() = Some(reason.to_string());
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

#[cfg(test)]
#[async_trait::async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(req.clone());

        if let Some(reason) = self.fail_with.borrow().as_ref() {
            return Err(ApiError::Network(reason.clone()));
        }

        let responses = self.responses.borrow();
        if let Some((status, body)) = responses.get(&(req.method, req.url.clone())) {
            Ok(HttpResponse {
                status: *status,
                body: body.clone(),
            })
        } else {
            Ok(HttpResponse {
                status: 404,
                body: "Not Found".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_decodes_as_null() {
        let resp = HttpResponse {
            status: 204,
            body: String::new(),
        };
        assert!(resp.ok());
        assert_eq!(resp.json::<serde_json::Value>().unwrap(), serde_json::Value::Null);
    }

    #[test]
    fn test_invalid_body_is_decode_error() {
        let resp = HttpResponse {
            status: 200,
            body: "<html>".to_string(),
        };
        assert!(matches!(
            resp.json::<serde_json::Value>(),
            Err(ApiError::Decode(_))
        ));
    }
}
