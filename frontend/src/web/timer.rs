//! 定时器封装模块
//!
//! 使用 `web_sys` 的原生 `setTimeout`。

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// 一次性定时器
///
/// 回调通过 `Closure::once_into_js` 交给浏览器，触发后由 JS 侧释放，
/// 不需要在 Rust 侧保存句柄。
pub struct Timeout;

impl Timeout {
    /// 安排回调；无法获取 window 时回调不会执行
    pub fn schedule<F>(millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        let Some(window) = web_sys::window() else {
            log::warn!("[Timer] window unavailable, timeout dropped");
            return;
        };

        let callback = Closure::once_into_js(callback);
        if window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                millis as i32,
            )
            .is_err()
        {
            log::warn!("[Timer] failed to schedule timeout");
        }
    }
}
