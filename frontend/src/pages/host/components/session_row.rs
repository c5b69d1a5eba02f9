use crate::pages::directory::utils::{format_price, time_window};
use crate::pages::host::utils::vacancy_toggle_label;
use crate::sessions::Session;
use leptos::*;

#[component]
pub fn SessionRow(
    session: Session,
    on_edit: Callback<String>,
    on_toggle: Callback<String>,
) -> impl IntoView {
    let id = store_value(session.id.clone());
    let status_class = if session.is_full() {
        "text-red-400"
    } else {
        "text-green-400"
    };
    let toggle_label = vacancy_toggle_label(&session);
    view! {
        <div class="bg-gray-700 rounded-lg p-4 flex justify-between items-center">
            <div>
                <h3 class="text-lg font-semibold text-white">{session.title.clone()}</h3>
                <p class="text-sm text-gray-400">{session.date.clone()}" - "{time_window(&session)}</p>
                <p class="text-sm text-gray-400">{session.location.clone()}</p>
                <p class="text-sm text-gray-400">{format_price(session.price)}</p>
            </div>
            <div class="flex items-center space-x-3">
                <button
                    class="text-blue-400 hover:text-blue-300"
                    on:click=move |_| on_edit.call(id.get_value())
                >
                    "Edit"
                </button>
                <button
                    class=format!("flex items-center text-xs {status_class}")
                    title=format!("Toggle vacancies (currently {})", session.vacancies)
                    on:click=move |_| on_toggle.call(id.get_value())
                >
                    <span class="mr-1 font-bold">{session.vacancies.as_str()}</span>
                    <span class="underline">{toggle_label}</span>
                </button>
            </div>
        </div>
    }
}
