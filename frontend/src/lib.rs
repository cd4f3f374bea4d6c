//! GrowMate 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::router`: 路由服务（核心引擎），守卫逻辑来自 `growmate::guard`
//! - `auth`: 把认证控制器接入 Leptos
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod authentication;
    pub mod dashboard;
    mod icons;
    pub mod navbar;
    pub mod plant_form;
    pub mod toaster;
}
mod config;
mod plants;

use crate::auth::{AuthContext, LeptosEffects, auth_result_signal, auth_state_signal};
use crate::components::authentication::AuthenticationPage;
use crate::components::dashboard::DashboardPage;
use crate::components::plant_form::PlantFormPage;
use crate::components::toaster::{Toaster, ToasterContext};
use crate::plants::PlantStore;

use growmate::AppRoute;
use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    mod http;
    pub mod router;
    mod storage;
    mod timer;

    pub use http::FetchClient;
    pub use storage::BrowserSessionStore;
    pub use timer::Timeout;
}

use web::router::{RouterOutlet, RouterService, provide_router};

/// 路由匹配函数
///
/// 只在守卫判定为渲染时调用。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Entry => view! { <AuthenticationPage /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::AddPlant => view! { <PlantFormPage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 认证状态信号先于路由创建，路由只拿到派生的三态结果
    let state = auth_state_signal();
    let router = RouterService::new(auth_result_signal(state));
    provide_router(router);

    // 2. 通知队列与植物列表
    let toaster = ToasterContext::new();
    provide_context(toaster);
    provide_context(PlantStore::new());

    // 3. 认证上下文，控制器的副作用指向路由与通知
    let auth = AuthContext::new(
        state,
        config::provider_config(),
        LeptosEffects::new(router, toaster),
    );
    provide_context(auth);

    // 4. 启动检查
    auth.bootstrap();

    // 5. 每次进入受保护路由时重新确认会话
    Effect::new(move |_| {
        if router.current_route().get().requires_auth() {
            auth.revalidate();
        }
    });

    view! {
        <RouterOutlet matcher=route_matcher />
        <Toaster />
    }
}
