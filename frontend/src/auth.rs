//! 认证上下文
//!
//! 包装核心库的 `AuthStore`，通过 Context 在组件间共享。
//! 令牌由登录流程写入 LocalStorage，页面加载时恢复。

use leptos::prelude::*;
use moduway::auth::AuthStore;
use moduway::config::ApiConfig;

use crate::web::LocalStorage;

#[derive(Clone, Copy)]
pub struct AuthContext {
    store: RwSignal<AuthStore<LocalStorage>>,
}

impl AuthContext {
    /// 创建认证上下文并从 LocalStorage 恢复令牌
    pub fn new(config: &ApiConfig) -> Self {
        let store = AuthStore::open_with_key(LocalStorage, config.auth_token_key.clone());
        Self {
            store: RwSignal::new(store),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.with(|s| s.is_authenticated())
    }

    pub fn logout(&self) {
        self.store.update(|s| s.logout());
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}
