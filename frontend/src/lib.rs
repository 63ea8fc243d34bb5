//! moduway 前端应用
//!
//! 采用 Context-Driven 架构，状态容器在 `App` 中创建并注入：
//! - `api`: API 客户端（fetch + 凭据拦截器）
//! - `auth`: 认证状态
//! - `basket`: 比较分析篮
//! - `web::router`: 路由服务
//! - `components`: UI 组件层

mod api;
mod auth;
mod basket;
mod components {
    mod analysis_form;
    mod basket_panel;
    pub mod course_list;
    mod course_insight;
    pub mod home;
    pub mod navbar;
}

use crate::api::create_api;
use crate::auth::AuthContext;
use crate::basket::BasketContext;
use crate::components::course_list::CourseListPage;
use crate::components::home::HomePage;
use crate::components::navbar::NavBar;

use leptos::prelude::*;
use moduway::config::ApiConfig;
use moduway::route::AppRoute;

// 浏览器 API 封装：核心库各 trait 的实现
pub(crate) mod web {
    mod cookie;
    mod http;
    pub mod router;
    mod storage;

    pub use cookie::DocumentCookies;
    pub use http::FetchClient;
    pub use storage::LocalStorage;
}

use web::router::{Router, RouterOutlet};

/// 路由匹配函数
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Home => view! { <HomePage /> }.into_any(),
        AppRoute::Courses => view! { <CourseListPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-[60vh]">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"페이지를 찾을 수 없습니다"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = ApiConfig::load();

    // 1. 状态容器（从 LocalStorage 恢复）
    provide_context(AuthContext::new(&config));
    provide_context(BasketContext::new(&config));

    // 2. API 客户端
    provide_context(create_api(config));

    view! {
        <Router>
            <div class="min-h-screen bg-base-200">
                <NavBar />
                <main class="max-w-7xl mx-auto p-4 md:p-8">
                    <RouterOutlet matcher=route_matcher />
                </main>
            </div>
        </Router>
    }
}
