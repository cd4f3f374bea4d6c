//! 时间工具模块
//!
//! - 植物日期使用 `NaiveDate`（仅日期，表单输入为 `YYYY-MM-DD`）
//! - 会话过期时间使用 Unix 秒

use chrono::{Local, NaiveDate, Utc};

/// 表单与存储使用的日期格式
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// 当前本地日期
#[inline]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// 当前 Unix 时间（秒）
#[inline]
pub fn now_unix() -> i64 {
    Utc::now().timestamp()
}

/// 解析 `YYYY-MM-DD`
///
/// 返回 None 如果解析失败
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT).ok()
}

/// 转换为表单输入值
pub fn to_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// 用于卡片展示的日期，如 `Apr 15, 2023`
pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_form_dates() {
        assert_eq!(
            parse_iso_date("2023-04-15"),
            NaiveDate::from_ymd_opt(2023, 4, 15)
        );
        assert_eq!(
            parse_iso_date(" 2023-04-15 "),
            NaiveDate::from_ymd_opt(2023, 4, 15)
        );
        assert_eq!(parse_iso_date("15/04/2023"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn formats_dates() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 5).unwrap();
        assert_eq!(to_iso_date(date), "2023-04-05");
        assert_eq!(display_date(date), "Apr 5, 2023");
    }
}
