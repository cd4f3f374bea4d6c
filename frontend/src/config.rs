//! 运行配置
//!
//! 编译期从环境变量读取 Supabase 连接信息，缺失时回退到默认值。

use growmate::ProviderConfig;

const URL_VAR: Option<&str> = option_env!("GROWMATE_SUPABASE_URL");
const ANON_KEY_VAR: Option<&str> = option_env!("GROWMATE_SUPABASE_ANON_KEY");

const DEFAULT_SUPABASE_URL: &str = "http://localhost:54321";

/// 读取变量，空字符串视为未设置
fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub fn provider_config() -> ProviderConfig {
    let url = non_empty(URL_VAR).unwrap_or(DEFAULT_SUPABASE_URL);
    let anon_key = match non_empty(ANON_KEY_VAR) {
        Some(key) => key,
        None => {
            log::warn!("[Config] GROWMATE_SUPABASE_ANON_KEY not set, requests will be rejected");
            ""
        }
    };
    log::info!("[Config] Supabase endpoint: {}", url);
    ProviderConfig::new(url, anon_key)
}
