use crate::pages::directory::view_model::DirectoryViewModel;
use crate::sessions::{PriceBand, TimePeriod, PLAYER_LEVELS};
use leptos::*;

fn period_button_class(active: bool) -> &'static str {
    if active {
        "px-4 py-2 rounded-lg text-sm font-semibold bg-primary text-gray-900"
    } else {
        "px-4 py-2 rounded-lg text-sm font-semibold bg-gray-700 text-gray-200 hover:bg-gray-600"
    }
}

#[component]
pub fn PeriodTabs(vm: DirectoryViewModel) -> impl IntoView {
    let current = vm.period();
    view! {
        <div class="flex flex-wrap gap-2 mb-6">
            {TimePeriod::ALL
                .into_iter()
                .map(|period| {
                    view! {
                        <button
                            class=move || period_button_class(current.get() == period)
                            on:click=move |_| vm.set_period(period)
                        >
                            {period.as_str()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn FilterSection(vm: DirectoryViewModel) -> impl IntoView {
    let has_filters = vm.has_filters();
    let level = vm.level_value();
    let location = vm.location_value();
    let price = vm.price_value();
    let date_from = vm.date_from_value();
    let date_to = vm.date_to_value();
    view! {
        <div class="bg-gray-800 rounded-lg p-4 mb-4 grid gap-3 md:grid-cols-5">
            <select
                class="rounded bg-gray-900 border border-gray-700 px-2 py-2 text-sm"
                prop:value=move || level.get()
                on:change=move |ev| vm.set_level(event_target_value(&ev))
            >
                <option value="">"All Levels"</option>
                {PLAYER_LEVELS
                    .iter()
                    .map(|level| view! { <option value=*level>{*level}</option> })
                    .collect_view()}
            </select>
            <input
                type="text"
                class="rounded bg-gray-900 border border-gray-700 px-2 py-2 text-sm"
                placeholder="Location"
                prop:value=move || location.get()
                on:input=move |ev| vm.set_location(event_target_value(&ev))
            />
            <select
                class="rounded bg-gray-900 border border-gray-700 px-2 py-2 text-sm"
                prop:value=move || price.get()
                on:change=move |ev| vm.set_price(event_target_value(&ev))
            >
                {PriceBand::ALL
                    .into_iter()
                    .map(|band| view! { <option value=band.as_str()>{band.label()}</option> })
                    .collect_view()}
            </select>
            <input
                type="date"
                class="rounded bg-gray-900 border border-gray-700 px-2 py-2 text-sm"
                aria-label="From date"
                prop:value=move || date_from.get()
                on:change=move |ev| vm.set_date_from(event_target_value(&ev))
            />
            <input
                type="date"
                class="rounded bg-gray-900 border border-gray-700 px-2 py-2 text-sm"
                aria-label="To date"
                prop:value=move || date_to.get()
                on:change=move |ev| vm.set_date_to(event_target_value(&ev))
            />
            <Show when=move || has_filters.get()>
                <button class="text-sm text-gray-300 underline md:col-span-5 text-left" on:click=move |_| vm.clear()>
                    "Clear filters"
                </button>
            </Show>
        </div>
    }
}
