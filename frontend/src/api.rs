//! 浏览器端 API 客户端装配

use leptos::prelude::*;
use moduway::config::ApiConfig;
use moduway::interceptor::CredentialInterceptor;
use moduway::ApiClient;

use crate::web::{DocumentCookies, FetchClient, LocalStorage};

/// fetch 传输 + LocalStorage 令牌 + document.cookie CSRF
pub type ModuwayApi = ApiClient<FetchClient, CredentialInterceptor<LocalStorage, DocumentCookies>>;

pub fn create_api(config: ApiConfig) -> ModuwayApi {
    let interceptor = CredentialInterceptor::new(&config, LocalStorage, DocumentCookies);
    ApiClient::new(config, FetchClient, interceptor)
}

/// 从 Context 获取 API 客户端
pub fn use_api() -> ModuwayApi {
    use_context::<ModuwayApi>().expect("ModuwayApi should be provided")
}
