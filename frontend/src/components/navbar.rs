use crate::auth::use_auth;
use crate::components::icons::{Home, Leaf, LogOut, Plus};
use crate::web::router::use_router;
use growmate::AppRoute;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// 顶部导航
///
/// 用户信息直接读取认证状态，不单独请求。
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let user = auth.user();

    let on_logout = move |_| {
        let controller = auth.controller();
        spawn_local(async move {
            // 失败时控制器已经发出通知
            let _ = controller.logout().await;
        });
    };

    let nav_class = move |route: AppRoute| {
        if router.current_route().get() == route {
            "btn btn-ghost btn-sm gap-2 text-success"
        } else {
            "btn btn-ghost btn-sm gap-2"
        }
    };

    view! {
        <div class="navbar bg-base-100 rounded-box shadow-xl">
            <div class="flex-1 gap-2">
                <a class="btn btn-ghost text-xl gap-2" on:click=move |_| router.navigate(AppRoute::Dashboard)>
                    <Leaf attr:class="h-7 w-7 text-success" />
                    "GrowMate"
                </a>
            </div>
            <div class="flex-none gap-2">
                <button class=move || nav_class(AppRoute::Dashboard) on:click=move |_| router.navigate(AppRoute::Dashboard)>
                    <Home attr:class="h-4 w-4" /> "Dashboard"
                </button>
                <button class=move || nav_class(AppRoute::AddPlant) on:click=move |_| router.navigate(AppRoute::AddPlant)>
                    <Plus attr:class="h-4 w-4" /> "Add Plant"
                </button>
                {move || user.get().map(|user| {
                    let avatar = match user.avatar.clone() {
                        Some(src) => view! {
                            <img class="h-8 w-8 rounded-full object-cover border-2 border-success" src=src alt=user.name.clone() />
                        }.into_any(),
                        None => view! {
                            <div class="h-8 w-8 rounded-full bg-success/20 flex items-center justify-center font-medium">
                                {user.initial().to_string()}
                            </div>
                        }.into_any(),
                    };
                    view! {
                        <div class="flex items-center gap-2 px-2">
                            {avatar}
                            <span class="text-sm font-medium hidden md:inline">{user.name}</span>
                        </div>
                    }
                })}
                <button on:click=on_logout class="btn btn-outline btn-error btn-sm gap-2">
                    <LogOut attr:class="h-4 w-4" /> "Logout"
                </button>
            </div>
        </div>
    }
}
