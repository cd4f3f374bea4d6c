use crate::auth::use_auth;
use crate::components::icons::{ArrowLeft, Leaf};
use crate::components::navbar::Navbar;
use crate::components::toaster::use_toaster;
use crate::plants::use_plants;
use crate::web::router::use_router;
use growmate::{AppRoute, Notification};
use growmate_shared::PlantDraft;
use growmate_shared::date::today;
use leptos::prelude::*;

/// 植物录入表单
///
/// 校验通过后保存到会话内的植物列表并返回面板。
#[component]
pub fn PlantFormPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let toaster = use_toaster();
    let store = use_plants();
    let user = auth.user();

    let draft = RwSignal::new(PlantDraft::default());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(user) = user.get_untracked() else {
            return;
        };
        let id = uuid::Uuid::new_v4().to_string();

        match draft.with_untracked(|d| d.validate(id, user.id, today())) {
            Ok(plant) => {
                set_error_msg.set(None);
                toaster.push(Notification::success(
                    "Plant added successfully!",
                    format!("{} has been added to your collection.", plant.name),
                ));
                store.add(plant);
                draft.set(PlantDraft::default());
                router.navigate(AppRoute::Dashboard);
            }
            Err(err) => set_error_msg.set(Some(err.to_string())),
        }
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-4xl mx-auto space-y-8">
                <Navbar />

                <button class="btn btn-ghost gap-2" on:click=move |_| router.navigate(AppRoute::Dashboard)>
                    <ArrowLeft attr:class="h-4 w-4" /> "Back to Dashboard"
                </button>

                <div class="card bg-base-100 shadow-xl">
                    <form class="card-body gap-4" on:submit=on_submit>
                        <div class="flex items-center gap-3">
                            <div class="p-2 bg-success/10 rounded-xl text-success">
                                <Leaf attr:class="h-6 w-6" />
                            </div>
                            <div>
                                <h2 class="card-title text-2xl">"Add New Plant"</h2>
                                <p class="text-base-content/70">
                                    "Enter the details of your new plant to start tracking its growth journey"
                                </p>
                            </div>
                        </div>

                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <div class="grid grid-cols-1 gap-4 sm:grid-cols-2">
                            <label class="form-control">
                                <span class="label-text">"Plant Name"</span>
                                <input
                                    class="input input-bordered"
                                    placeholder="e.g. Living Room Monstera"
                                    prop:value=move || draft.with(|d| d.name.clone())
                                    on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                                    required
                                />
                            </label>
                            <label class="form-control">
                                <span class="label-text">"Species (if known)"</span>
                                <input
                                    class="input input-bordered"
                                    placeholder="e.g. Monstera deliciosa"
                                    prop:value=move || draft.with(|d| d.species.clone())
                                    on:input=move |ev| draft.update(|d| d.species = event_target_value(&ev))
                                />
                            </label>
                            <label class="form-control">
                                <span class="label-text">"Date Planted/Purchased"</span>
                                <input
                                    type="date"
                                    class="input input-bordered"
                                    prop:value=move || draft.with(|d| d.planted_date.clone())
                                    on:input=move |ev| draft.update(|d| d.planted_date = event_target_value(&ev))
                                    required
                                />
                            </label>
                            <label class="form-control">
                                <span class="label-text">"Location"</span>
                                <input
                                    class="input input-bordered"
                                    placeholder="e.g. Living Room, Balcony"
                                    prop:value=move || draft.with(|d| d.location.clone())
                                    on:input=move |ev| draft.update(|d| d.location = event_target_value(&ev))
                                    required
                                />
                            </label>
                        </div>

                        <label class="form-control">
                            <span class="label-text">"Water Frequency (days)"</span>
                            <input
                                type="number"
                                min="1"
                                class="input input-bordered"
                                placeholder="e.g. 7"
                                prop:value=move || draft.with(|d| d.water_frequency.clone())
                                on:input=move |ev| draft.update(|d| d.water_frequency = event_target_value(&ev))
                            />
                        </label>

                        <label class="form-control">
                            <span class="label-text">"Notes"</span>
                            <textarea
                                class="textarea textarea-bordered"
                                placeholder="Add any special care instructions or observations"
                                prop:value=move || draft.with(|d| d.notes.clone())
                                on:input=move |ev| draft.update(|d| d.notes = event_target_value(&ev))
                            ></textarea>
                        </label>

                        <div class="card-actions justify-end">
                            <button type="button" class="btn btn-ghost" on:click=move |_| router.navigate(AppRoute::Dashboard)>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-success">"Save Plant"</button>
                        </div>
                    </form>
                </div>
            </div>
        </div>
    }
}
