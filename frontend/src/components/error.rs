use crate::error::AppError;
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<AppError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-red-500 bg-opacity-20 border border-red-500 text-red-300 px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.to_string()).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    if e.details().is_empty() {
                        return ().into_view();
                    }
                    view! {
                        <ul class="list-disc list-inside text-sm">
                            {e.details().iter().map(|field| {
                                view! { <li>{field.clone()}</li> }
                            }).collect_view()}
                        </ul>
                    }.into_view()
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}
