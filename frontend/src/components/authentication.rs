use crate::auth::use_auth;
use crate::components::icons::Leaf;
use leptos::prelude::*;
use leptos::task::spawn_local;

const LOGIN_FAILED_HINT: &str = "Please check your credentials and try again.";
const SIGNUP_FAILED_HINT: &str = "Please try again with different credentials.";
const PASSWORD_MISMATCH_HINT: &str = "Please make sure your passwords match.";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Login,
    Register,
}

/// 登录 / 注册页
///
/// 成功后的跳转和通知由控制器完成，这里只负责表单状态。
#[component]
pub fn AuthenticationPage() -> impl IntoView {
    let auth = use_auth();

    let (tab, set_tab) = signal(Tab::Login);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let switch_to = move |next: Tab| {
        set_tab.set(next);
        set_error_msg.set(None);
    };

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_loading.set(true);
        set_error_msg.set(None);

        let controller = auth.controller();
        let (email, password) = (email.get_untracked(), password.get_untracked());
        spawn_local(async move {
            if controller.login(email.trim(), &password).await.is_err() {
                set_error_msg.set(Some(LOGIN_FAILED_HINT.to_string()));
            }
            set_is_loading.set(false);
        });
    };

    let on_register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if password.get_untracked() != confirm.get_untracked() {
            set_error_msg.set(Some(PASSWORD_MISMATCH_HINT.to_string()));
            return;
        }
        set_is_loading.set(true);
        set_error_msg.set(None);

        let controller = auth.controller();
        let name = name.get_untracked();
        let (email, password) = (email.get_untracked(), password.get_untracked());
        spawn_local(async move {
            if controller
                .register(name.trim(), email.trim(), &password)
                .await
                .is_err()
            {
                set_error_msg.set(Some(SIGNUP_FAILED_HINT.to_string()));
            }
            set_is_loading.set(false);
        });
    };

    let tab_class = move |which: Tab| {
        if tab.get() == which {
            "tab tab-active"
        } else {
            "tab"
        }
    };

    view! {
        <div class="min-h-screen w-full flex">
            <div class="hidden lg:flex lg:w-1/2 bg-gradient-to-br from-green-400 to-green-600 text-white p-12 flex-col justify-center">
                <Leaf attr:class="h-12 w-12 mb-6 text-white/80" />
                <h1 class="text-4xl font-bold mb-6">"Welcome to GrowMate"</h1>
                <p class="text-lg text-white/90 max-w-md">
                    "Track and nurture your plants while contributing to a greener future."
                </p>
            </div>

            <div class="w-full lg:w-1/2 flex items-center justify-center p-8">
                <div class="w-full max-w-md">
                    <div class="mb-8">
                        <h2 class="text-2xl font-semibold mb-2">
                            {move || if tab.get() == Tab::Login { "Sign In" } else { "Create Account" }}
                        </h2>
                        <p class="text-base-content/70">
                            {move || if tab.get() == Tab::Login {
                                "Welcome back! Please enter your details."
                            } else {
                                "Get started with your plant care journey."
                            }}
                        </p>
                    </div>

                    <div role="tablist" class="tabs tabs-boxed mb-6">
                        <a role="tab" class=move || tab_class(Tab::Login) on:click=move |_| switch_to(Tab::Login)>"Login"</a>
                        <a role="tab" class=move || tab_class(Tab::Register) on:click=move |_| switch_to(Tab::Register)>"Sign up"</a>
                    </div>

                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2 mb-4">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <Show
                        when=move || tab.get() == Tab::Login
                        fallback=move || view! {
                            <form class="space-y-4" on:submit=on_register>
                                <input
                                    type="text"
                                    placeholder="Enter your full name"
                                    class="input input-bordered w-full"
                                    prop:value=name
                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                    required
                                />
                                <input
                                    type="email"
                                    placeholder="Enter your email"
                                    class="input input-bordered w-full"
                                    prop:value=email
                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                    required
                                />
                                <input
                                    type="password"
                                    placeholder="Create a password"
                                    class="input input-bordered w-full"
                                    prop:value=password
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    required
                                />
                                <input
                                    type="password"
                                    placeholder="Confirm your password"
                                    class="input input-bordered w-full"
                                    prop:value=confirm
                                    on:input=move |ev| set_confirm.set(event_target_value(&ev))
                                    required
                                />
                                <button class="btn btn-success w-full" disabled=move || is_loading.get()>
                                    {move || if is_loading.get() {
                                        view! { <span class="loading loading-spinner"></span> "Creating account..." }.into_any()
                                    } else {
                                        "SIGN UP".into_any()
                                    }}
                                </button>
                            </form>
                        }
                    >
                        <form class="space-y-4" on:submit=on_login>
                            <input
                                type="email"
                                placeholder="Enter your email"
                                class="input input-bordered w-full"
                                prop:value=email
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                required
                            />
                            <input
                                type="password"
                                placeholder="Enter your password"
                                class="input input-bordered w-full"
                                prop:value=password
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                required
                            />
                            <button class="btn btn-success w-full" disabled=move || is_loading.get()>
                                {move || if is_loading.get() {
                                    view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                } else {
                                    "LOGIN".into_any()
                                }}
                            </button>
                        </form>
                    </Show>
                </div>
            </div>
        </div>
    }
}
