//! LocalStorage 封装模块
//!
//! 使用 `web_sys::Storage` 提供本地存储接口，并在其上实现会话存储。

use growmate::{ProviderSession, SessionStore};

/// 本地存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage API。
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 获取存储的字符串值，键不存在或出错时为 `None`
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 设置存储值，返回是否成功
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }

    /// 删除存储的键值对，返回是否成功
    pub fn delete(key: &str) -> bool {
        Self::storage()
            .and_then(|s| s.remove_item(key).ok())
            .is_some()
    }
}

/// 把提供方会话以 JSON 形式保存在 LocalStorage 中
#[derive(Debug, Clone)]
pub struct BrowserSessionStore {
    key: String,
}

impl BrowserSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionStore for BrowserSessionStore {
    fn load(&self) -> Option<ProviderSession> {
        let raw = LocalStorage::get(&self.key)?;
        match serde_json_wasm::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                log::warn!("[Storage] discarding unreadable session: {}", err);
                LocalStorage::delete(&self.key);
                None
            }
        }
    }

    fn save(&self, session: &ProviderSession) {
        match serde_json_wasm::to_string(session) {
            Ok(raw) => {
                if !LocalStorage::set(&self.key, &raw) {
                    log::warn!("[Storage] failed to persist session");
                }
            }
            Err(err) => log::error!("[Storage] failed to encode session: {}", err),
        }
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}
