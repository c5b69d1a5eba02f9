use crate::pages::directory::view_model::DirectoryViewModel;
use leptos::*;

#[component]
pub fn SearchBar(vm: DirectoryViewModel) -> impl IntoView {
    let search_input = vm.search_input;
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.apply_search();
    };
    view! {
        <form class="flex gap-2 mb-4" on:submit=on_submit>
            <input
                type="text"
                class="flex-grow rounded-lg bg-gray-800 border border-gray-700 px-4 py-2 text-white"
                placeholder="Search sessions by ID..."
                prop:value=move || search_input.get()
                on:input=move |ev| search_input.set(event_target_value(&ev))
            />
            <button type="submit" class="bg-primary text-gray-900 px-4 py-2 rounded-lg hover:bg-opacity-90">
                "Search"
            </button>
        </form>
    }
}
