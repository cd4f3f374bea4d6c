//! 认证模块
//!
//! 把核心库的 `AuthController` 接入 Leptos：
//! 状态放在 `RwSignal` 中，导航与通知交给路由服务和通知队列。
//! 路由服务只拿到派生出的 `AuthResult` 信号，与认证实现解耦。

use crate::components::toaster::ToasterContext;
use crate::web::router::RouterService;
use crate::web::{BrowserSessionStore, FetchClient};
use growmate::{
    AppRoute, AuthController, AuthEffects, AuthGateway, AuthResult, AuthState, AuthStateCell,
    Notification, ProviderConfig, SupabaseProvider,
};
use growmate_shared::User;
use leptos::prelude::*;
use leptos::task::spawn_local;

type AppProvider = SupabaseProvider<FetchClient, BrowserSessionStore>;

/// 应用使用的控制器类型
pub type AppController = AuthController<AppProvider, SignalStateCell, LeptosEffects>;

/// 以 Signal 作为控制器的状态容器
#[derive(Clone, Copy)]
pub struct SignalStateCell(RwSignal<AuthState>);

impl AuthStateCell for SignalStateCell {
    fn get(&self) -> AuthState {
        self.0.get_untracked()
    }

    fn update<F: FnOnce(&mut AuthState)>(&self, f: F) {
        self.0.update(f);
    }
}

/// 控制器的副作用：路由跳转与通知
#[derive(Clone, Copy)]
pub struct LeptosEffects {
    router: RouterService,
    toaster: ToasterContext,
}

impl LeptosEffects {
    pub fn new(router: RouterService, toaster: ToasterContext) -> Self {
        Self { router, toaster }
    }
}

impl AuthEffects for LeptosEffects {
    fn navigate(&self, route: AppRoute) {
        self.router.navigate(route);
    }

    fn notify(&self, notification: Notification) {
        self.toaster.push(notification);
    }
}

/// 创建认证状态信号，供路由服务在控制器之前拿到
pub fn auth_state_signal() -> RwSignal<AuthState> {
    RwSignal::new(AuthState::default())
}

/// 路由守卫使用的三态结果
pub fn auth_result_signal(state: RwSignal<AuthState>) -> Signal<AuthResult> {
    Signal::derive(move || state.with(AuthState::auth_result))
}

/// 认证上下文
///
/// 控制器持有 `Rc`，因此放在本地存储的 `StoredValue` 中。
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    controller: StoredValue<AppController, LocalStorage>,
}

impl AuthContext {
    pub fn new(
        state: RwSignal<AuthState>,
        config: ProviderConfig,
        effects: LeptosEffects,
    ) -> Self {
        let store = BrowserSessionStore::new(config.storage_key());
        let provider = SupabaseProvider::new(config, FetchClient, store);
        let controller =
            AuthController::new(AuthGateway::new(provider), SignalStateCell(state), effects);

        Self {
            state,
            controller: StoredValue::new_local(controller),
        }
    }

    pub fn controller(&self) -> AppController {
        self.controller.get_value()
    }

    pub fn user(&self) -> Signal<Option<User>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.user.clone()))
    }

    /// 启动时的会话检查，在后台执行
    pub fn bootstrap(&self) {
        let controller = self.controller();
        spawn_local(async move {
            controller.bootstrap().await;
        });
    }

    /// 导航到受保护路由时重新确认会话
    pub fn revalidate(&self) {
        let controller = self.controller();
        spawn_local(async move {
            controller.revalidate().await;
        });
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}
