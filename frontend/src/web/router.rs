//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 守卫 -> 处理 -> 加载"的导航流程。

use growmate::guard::{self, AuthResult, GuardDecision};
use growmate::route::AppRoute;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向，不留下历史记录）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 认证结果以信号形式注入，路由不依赖认证模块。
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    auth: Signal<AuthResult>,
}

impl RouterService {
    /// 创建路由服务，初始路由从 URL 解析
    pub fn new(auth: Signal<AuthResult>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            auth,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 当前路由的守卫判定
    pub fn decision(&self) -> GuardDecision {
        guard::evaluate(self.current_route.get(), self.auth.get())
    }

    /// 导航到指定路由
    ///
    /// 只负责推入历史并更新信号，守卫由 `setup_guard` 统一执行。
    pub fn navigate(&self, route: AppRoute) {
        if self.current_route.get_untracked() == route {
            return;
        }
        log::debug!("[Router] navigate -> {}", route);
        push_history_state(route.to_path());
        self.set_route.set(route);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;

        let closure = Closure::<dyn Fn()>::new(move || {
            set_route.set(AppRoute::from_path(&current_path()));
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 路由或认证结果变化时重新执行守卫
    fn setup_guard(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let auth = self.auth;

        Effect::new(move |_| {
            let route = current_route.get();
            let result = auth.get();

            if let GuardDecision::Redirect(target) = guard::evaluate(route, result) {
                log::info!("[Router] {} is not available ({:?}), redirecting to {}", route, result, target);
                replace_history_state(target.to_path());
                set_route.set(target);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
pub fn provide_router(router: RouterService) {
    router.init_popstate_listener();
    router.setup_guard();
    provide_context(router);
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    expect_context::<RouterService>()
}

// ============================================================================
// UI 组件
// ============================================================================

/// 守卫判定为等待时的占位
#[component]
pub fn RouteLoading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-screen">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

/// 路由出口组件
///
/// 只有守卫判定为 `Render` 时才调用匹配函数渲染目标视图。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    let route = Memo::new(move |_| router.current_route().get());
    let decision = Memo::new(move |_| router.decision());

    move || match decision.get() {
        GuardDecision::Render => matcher(route.get()),
        GuardDecision::Loading | GuardDecision::Redirect(_) => view! { <RouteLoading /> }.into_any(),
    }
}
