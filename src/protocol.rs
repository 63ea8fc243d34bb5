use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::model::{Course, CourseId};
use crate::request::HttpMethod;

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The HTTP method. GET requests are sent without a body.
    const METHOD: HttpMethod;
    /// The URL path relative to the API base.
    fn path(&self) -> String;
}

// =========================================================
// Request Definitions
// =========================================================

/// User preference ratings, each 0-5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserPreferences {
    pub theory: u8,
    pub practical: u8,
    pub difficulty: u8,
    pub duration: u8,
}

/// Submit the basket for analysis.
///
/// Ranges (1-3 courses, 1-168 weekly hours, goal of 10-1000 characters) are
/// enforced by the server only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeComparisonRequest {
    pub course_ids: Vec<CourseId>,
    pub weekly_hours: u32,
    pub user_preferences: UserPreferences,
    pub user_goal: String,
}

impl ApiRequest for AnalyzeComparisonRequest {
    type Response = Value;
    const METHOD: HttpMethod = HttpMethod::Post;

    fn path(&self) -> String {
        "/comparisons/analyze/".to_string()
    }
}

/// Per-course insight endpoints share one shape: GET on a path templated by course id.
macro_rules! course_insight_request {
    ($(#[$meta:meta])* $name:ident, $suffix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            pub course_id: CourseId,
        }

        impl ApiRequest for $name {
            type Response = Value;
            const METHOD: HttpMethod = HttpMethod::Get;

            fn path(&self) -> String {
                format!(concat!("/comparisons/courses/{}/", $suffix, "/"), self.course_id)
            }
        }
    };
}

course_insight_request!(
    /// AI review of a single course
    CourseAiReviewRequest,
    "ai-review"
);
course_insight_request!(
    /// Summary of user reviews for a course
    CourseReviewSummaryRequest,
    "review-summary"
);
course_insight_request!(
    /// Sentiment analysis of a course's reviews
    CourseSentimentRequest,
    "sentiment"
);

/// List courses
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListCoursesRequest;

impl ApiRequest for ListCoursesRequest {
    type Response = CourseListResponse;
    const METHOD: HttpMethod = HttpMethod::Get;

    fn path(&self) -> String {
        "/courses/".to_string()
    }
}

/// The course list comes back either as a bare array or as a paginated page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CourseListResponse {
    Plain(Vec<Course>),
    Paginated { results: Vec<Course> },
}

impl CourseListResponse {
    pub fn into_courses(self) -> Vec<Course> {
        match self {
            CourseListResponse::Plain(courses) => courses,
            CourseListResponse::Paginated { results } => results,
        }
    }
}
