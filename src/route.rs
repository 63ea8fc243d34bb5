//! 路由定义模块 - 领域模型
//!
//! 纯粹的路由表，不依赖于 DOM 或 web_sys。
//! 路由没有守卫、懒加载或嵌套。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页
    #[default]
    Home,
    /// 课程列表
    Courses,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 可导航的路由表
    pub const ROUTES: [AppRoute; 2] = [AppRoute::Home, AppRoute::Courses];

    /// 将 URL path 解析为路由枚举，容忍一个末尾斜杠
    pub fn from_path(path: &str) -> Self {
        let path = match path.strip_suffix('/') {
            Some(stripped) if !stripped.is_empty() => stripped,
            _ => path,
        };
        match path {
            "/" | "" => Self::Home,
            "/courses" => Self::Courses,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Courses => "/courses",
            Self::NotFound => "/404",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Courses => "courses",
            Self::NotFound => "not-found",
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path("/courses"), AppRoute::Courses);
        assert_eq!(AppRoute::from_path("/courses/"), AppRoute::Courses);
        assert_eq!(AppRoute::from_path("/courses/1"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/login"), AppRoute::NotFound);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in AppRoute::ROUTES {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
        assert_eq!(AppRoute::Courses.name(), "courses");
        assert_eq!(AppRoute::Home.to_string(), "/");
    }
}
