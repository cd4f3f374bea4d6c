use serde::{Deserialize, Serialize};

pub mod date;
pub mod plant;

pub use chrono;
pub use plant::{Plant, PlantDraft, PlantDraftError, demo_plants};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 提供方未给出名字时使用的占位名
pub const FALLBACK_USER_NAME: &str = "User";

/// 注册时生成头像地址所用的服务
pub const AVATAR_SERVICE_URL: &str = "https://i.pravatar.cc/150";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 应用内的用户投影
///
/// 由提供方的用户记录映射而来，只读。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl User {
    /// 头像缺失时显示的首字母
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('U')
    }
}

/// 提供方在用户记录上附带的元数据
///
/// 所有字段均可能缺失。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// 提供方返回的原始用户记录
///
/// 只声明映射所需的字段，其余字段在反序列化时忽略。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: Option<UserMetadata>,
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|s| !s.is_empty()).cloned()
}

/// 全函数映射：任何可选字段缺失都不会失败
impl From<&ProviderUser> for User {
    fn from(raw: &ProviderUser) -> Self {
        let metadata = raw.user_metadata.as_ref();
        Self {
            id: raw.id.clone(),
            name: non_empty(metadata.and_then(|m| m.name.as_ref()))
                .unwrap_or_else(|| FALLBACK_USER_NAME.to_string()),
            email: raw.email.clone().unwrap_or_default(),
            avatar: non_empty(metadata.and_then(|m| m.avatar_url.as_ref())),
        }
    }
}

impl From<ProviderUser> for User {
    fn from(raw: ProviderUser) -> Self {
        User::from(&raw)
    }
}

/// 根据邮箱生成确定性的头像地址
pub fn avatar_url_for(email: &str) -> String {
    format!("{}?u={}", AVATAR_SERVICE_URL, email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(metadata: Option<UserMetadata>) -> ProviderUser {
        ProviderUser {
            id: "u-1".into(),
            email: Some("ann@x.com".into()),
            user_metadata: metadata,
        }
    }

    #[test]
    fn maps_all_fields_when_present() {
        let user = User::from(&raw(Some(UserMetadata {
            name: Some("Ann".into()),
            avatar_url: Some("https://img/ann".into()),
        })));
        assert_eq!(user.id, "u-1");
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "ann@x.com");
        assert_eq!(user.avatar.as_deref(), Some("https://img/ann"));
    }

    #[test]
    fn missing_metadata_falls_back() {
        let user = User::from(&raw(None));
        assert_eq!(user.name, FALLBACK_USER_NAME);
        assert_eq!(user.avatar, None);
    }

    #[test]
    fn empty_strings_are_treated_as_absent() {
        let user = User::from(&ProviderUser {
            id: "u-2".into(),
            email: None,
            user_metadata: Some(UserMetadata {
                name: Some(String::new()),
                avatar_url: Some(String::new()),
            }),
        });
        assert_eq!(user.name, "User");
        assert_eq!(user.email, "");
        assert!(user.avatar.is_none());
    }

    #[test]
    fn deserializes_sparse_provider_payload() {
        let payload = r#"{"id":"abc","aud":"authenticated","role":"authenticated"}"#;
        let parsed: ProviderUser = serde_json::from_str(payload).unwrap();
        let user = User::from(parsed);
        assert_eq!(user.id, "abc");
        assert_eq!(user.name, "User");
        assert_eq!(user.email, "");
        assert!(user.avatar.is_none());
    }

    #[test]
    fn avatar_url_is_deterministic() {
        assert_eq!(
            avatar_url_for("ann@x.com"),
            "https://i.pravatar.cc/150?u=ann@x.com"
        );
        assert_eq!(avatar_url_for("ann@x.com"), avatar_url_for("ann@x.com"));
    }

    #[test]
    fn initial_uses_first_letter() {
        let mut user = User::from(&raw(None));
        user.name = "ann".into();
        assert_eq!(user.initial(), 'A');
        user.name.clear();
        assert_eq!(user.initial(), 'U');
    }
}
