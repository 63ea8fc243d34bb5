use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{ApiConfig, CONTENT_TYPE_JSON, HEADER_CONTENT_TYPE};
use crate::error::ApiError;
use crate::interceptor::RequestInterceptor;
use crate::model::{Course, CourseId};
use crate::protocol::{
    AnalyzeComparisonRequest, ApiRequest, CourseAiReviewRequest, CourseReviewSummaryRequest,
    CourseSentimentRequest, ListCoursesRequest,
};
use crate::request::{HttpClient, HttpMethod, HttpRequest};


// =========================================================
// API 客户端
// =========================================================

/// 课程比较 API 客户端
///
/// 传输实现与请求拦截器都通过泛型注入，浏览器端使用 fetch + 凭据拦截器，
/// 测试中使用 `MockHttpClient`。没有重试、超时和错误翻译。
#[derive(Debug, Clone)]
pub struct ApiClient<C, I> {
    config: ApiConfig,
    client: C,
    interceptor: I,
}

impl<C: HttpClient, I: RequestInterceptor> ApiClient<C, I> {
    pub fn new(config: ApiConfig, client: C, interceptor: I) -> Self {
        Self {
            config,
            client,
            interceptor,
        }
    }

    /// 构建请求：默认头 + 拦截器注入的凭据
    fn prepare(&self, method: HttpMethod, path: &str) -> HttpRequest {
        let req = HttpRequest::new(&self.config.url(path), method)
            .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON);
        self.interceptor.intercept(req)
    }

    async fn dispatch<T: DeserializeOwned>(&self, req: HttpRequest) -> Result<T, ApiError> {
        debug!(method = req.method.as_str(), url = %req.url, "sending request");

        let resp = self.client.send(req).await?;
        if !resp.ok() {
            warn!(status = resp.status, "request failed");
            return Err(ApiError::Status {
                status: resp.status,
                body: resp.body,
            });
        }

        resp.json()
    }

    /// GET 原语
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.prepare(HttpMethod::Get, path);
        self.dispatch(req).await
    }

    /// POST 原语，请求体序列化为 JSON
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::RequestBuild(e.to_string()))?;
        let req = self.prepare(HttpMethod::Post, path).with_body(body);
        self.dispatch(req).await
    }

    /// 按协议定义发送请求
    pub async fn send<R: ApiRequest>(&self, request: &R) -> Result<R::Response, ApiError> {
        let path = request.path();
        match R::METHOD {
            HttpMethod::Get => self.get(&path).await,
            HttpMethod::Post => self.post(&path, request).await,
        }
    }

    // --- 业务接口 ---

    /// POST /comparisons/analyze/
    pub async fn analyze_comparison(
        &self,
        request: &AnalyzeComparisonRequest,
    ) -> Result<Value, ApiError> {
        self.send(request).await
    }

    /// GET /comparisons/courses/{course_id}/ai-review/
    pub async fn get_course_ai_review(&self, course_id: CourseId) -> Result<Value, ApiError> {
        self.send(&CourseAiReviewRequest { course_id }).await
    }

    /// GET /comparisons/courses/{course_id}/review-summary/
    pub async fn get_course_review_summary(&self, course_id: CourseId) -> Result<Value, ApiError> {
        self.send(&CourseReviewSummaryRequest { course_id }).await
    }

    /// GET /comparisons/courses/{course_id}/sentiment/
    pub async fn get_course_sentiment(&self, course_id: CourseId) -> Result<Value, ApiError> {
        self.send(&CourseSentimentRequest { course_id }).await
    }

    /// GET /courses/
    pub async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        self.send(&ListCoursesRequest)
            .await
            .map(|page| page.into_courses())
    }
}
