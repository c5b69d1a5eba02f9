use crate::components::layout::Layout;
use crate::pages::host::{components::forms::PostingForm, view_model::PostSessionViewModel};
use leptos::*;

#[component]
pub fn PostSessionPage() -> impl IntoView {
    let vm = PostSessionViewModel::new();
    view! {
        <Layout>
            <div class="max-w-2xl mx-auto">
                <h2 class="text-2xl font-semibold text-primary mb-4">"Post a Session"</h2>
                <PostingForm vm=vm />
            </div>
        </Layout>
    }
}
