use crate::auth::use_auth;
use crate::components::icons::*;
use crate::components::navbar::Navbar;
use crate::plants::use_plants;
use crate::web::router::use_router;
use growmate::AppRoute;
use growmate_shared::date::{display_date, today};
use growmate_shared::{Plant, User, demo_plants};
use leptos::prelude::*;

/// 多少天内需要浇水的植物计入提醒
const WATERING_SOON_DAYS: i64 = 2;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let store = use_plants();
    let user = auth.user();

    let plants = Memo::new(move |_| match user.get() {
        Some(user) => {
            let mut list = demo_plants(&user.id);
            list.extend(store.for_user(&user.id));
            list
        }
        None => Vec::new(),
    });

    let total = move || plants.with(Vec::len);
    let needs_water = move || {
        let now = today();
        plants.with(|list| {
            list.iter()
                .filter(|p| {
                    p.days_until_watering(now)
                        .is_some_and(|days| days <= WATERING_SOON_DAYS)
                })
                .count()
        })
    };

    view! {
        <div class="min-h-screen bg-base-200 p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <Navbar />

                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-3xl font-bold">"Welcome to GrowMate"</h1>
                        <p class="text-base-content/70">"Your plant care dashboard"</p>
                    </div>
                    <button class="btn btn-success gap-2" on:click=move |_| router.navigate(AppRoute::AddPlant)>
                        <Plus attr:class="h-4 w-4" /> "Add Plant"
                    </button>
                </div>

                <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                    <div class="stat">
                        <div class="stat-figure text-success"><Leaf attr:class="h-8 w-8" /></div>
                        <div class="stat-title">"Total Plants"</div>
                        <div class="stat-value text-success">{total}</div>
                    </div>
                    <div class="stat">
                        <div class="stat-figure text-info"><Droplets attr:class="h-8 w-8" /></div>
                        <div class="stat-title">"Needs Water Soon"</div>
                        <div class="stat-value text-info">{needs_water}</div>
                        <div class="stat-desc">{format!("within {} days", WATERING_SOON_DAYS)}</div>
                    </div>
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class="lg:col-span-1">
                        {move || user.get().map(|user| view! { <UserProfile user=user /> })}
                    </div>
                    <div class="lg:col-span-2 grid grid-cols-1 md:grid-cols-2 gap-6">
                        <For
                            each=move || plants.get()
                            key=|plant| plant.id.clone()
                            children=|plant| view! { <PlantCard plant=plant /> }
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn UserProfile(user: User) -> impl IntoView {
    let avatar = match user.avatar.clone() {
        Some(src) => view! {
            <img src=src alt=user.name.clone() class="w-24 h-24 rounded-full object-cover border-4 border-success/20" />
        }
        .into_any(),
        None => view! {
            <div class="w-24 h-24 rounded-full bg-success/10 flex items-center justify-center text-3xl font-bold">
                {user.initial().to_string()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body items-center text-center">
                <h3 class="card-title">"Your Profile"</h3>
                {avatar}
                <p class="text-lg font-medium">{user.name}</p>
                <p class="text-base-content/70">{user.email}</p>
            </div>
        </div>
    }
}

#[component]
fn PlantCard(plant: Plant) -> impl IntoView {
    let progress = ((plant.watering_progress() * 100.0).round() as u32).to_string();
    let next = plant.next_watering().map(display_date);
    let image = match plant.image_url.clone() {
        Some(src) => view! { <img src=src alt=plant.name.clone() class="w-full h-48 object-cover" /> }.into_any(),
        None => view! {
            <div class="w-full h-48 bg-success/10 flex items-center justify-center">
                <span class="text-success">"No Image"</span>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="card bg-base-100 shadow-xl overflow-hidden">
            <figure>{image}</figure>
            <div class="card-body gap-2">
                <h3 class="card-title">{plant.name}</h3>
                <p class="text-sm italic text-base-content/70">{plant.species}</p>
                <div class="flex items-center gap-2 text-sm">
                    <Calendar attr:class="h-4 w-4 text-success" />
                    {format!("Planted: {}", display_date(plant.planted_date))}
                </div>
                <div class="flex items-center gap-2 text-sm">
                    <MapPin attr:class="h-4 w-4 text-success" />
                    {plant.location}
                </div>
                {plant.water_frequency_days.map(|days| view! {
                    <div class="flex items-center gap-2 text-sm">
                        <Droplets attr:class="h-4 w-4 text-success" />
                        {format!("Water every {} days", days)}
                    </div>
                    <progress class="progress progress-info w-full" value=progress max="100"></progress>
                })}
                {next.map(|date| view! { <p class="text-xs text-base-content/60">{format!("Next watering: {}", date)}</p> })}
                {plant.notes.map(|notes| view! { <p class="text-sm text-base-content/70 line-clamp-2">{notes}</p> })}
            </div>
        </div>
    }
}
