//! 认证状态
//!
//! 两种状态：匿名（无令牌）与已认证（有令牌）。令牌的每次变化都同步到持久化存储，
//! 请求拦截器在发送时从同一个键读取令牌。

use serde_json::Value;
use tracing::{info, warn};

use crate::config::DEFAULT_AUTH_TOKEN_KEY;
use crate::error::StorageError;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone)]
pub struct AuthStore<S> {
    storage: S,
    key: String,
    token: Option<String>,
    /// 用户资料（仅内存，不持久化）
    user: Option<Value>,
}

impl<S: KeyValueStore> AuthStore<S> {
    /// 从持久化存储恢复令牌，空字符串视为未登录
    pub fn open(storage: S) -> Self {
        Self::open_with_key(storage, DEFAULT_AUTH_TOKEN_KEY)
    }

    pub fn open_with_key(storage: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let token = storage.get(&key).filter(|t| !t.is_empty());
        Self {
            storage,
            key,
            token,
            user: None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user(&self) -> Option<&Value> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: Option<Value>) {
        self.user = user;
    }

    /// 登录成功后保存令牌
    pub fn login(&mut self, token: impl Into<String>) -> Result<(), StorageError> {
        let token = token.into();
        info!("login");

        if token.is_empty() {
            self.token = None;
            return self.storage.remove(&self.key);
        }

        self.storage.set(&self.key, &token)?;
        self.token = Some(token);
        Ok(())
    }

    /// 注销
    ///
    /// 只清理客户端状态，不依赖服务端确认，因此不会失败。
    pub fn logout(&mut self) {
        info!("logout: clearing client state");
        self.token = None;
        self.user = None;
        if let Err(e) = self.storage.remove(&self.key) {
            warn!("failed to clear persisted token: {e}");
        }
    }
}
