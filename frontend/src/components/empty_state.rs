use leptos::*;

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="text-center py-12 px-4 rounded-lg border-2 border-dashed border-gray-700">
            <h3 class="mt-2 text-sm font-semibold">{title}</h3>
            {move || description.clone().map(|desc| view! {
                <p class="mt-1 text-sm text-gray-400">{desc}</p>
            })}
        </div>
    }
}
