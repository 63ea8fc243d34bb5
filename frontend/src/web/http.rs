//! HTTP 传输实现
//!
//! 使用 `gloo-net` 的 fetch 封装实现核心库的 [`HttpClient`]。
//! 凭据注入由核心库的拦截器完成，这里只负责把请求原样发出。

use gloo_net::http::Request;
use moduway::error::ApiError;
use moduway::request::{HttpClient, HttpMethod, HttpRequest, HttpResponse};

/// 基于浏览器 fetch 的 HTTP 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
        };

        let builder = req
            .headers
            .iter()
            .fold(builder, |builder, (key, value)| builder.header(key, value));

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::RequestBuild(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("读取响应体失败: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
