use crate::components::{empty_state::EmptyState, layout::Layout};
use crate::pages::directory::utils::indexed;
use crate::pages::host::{
    components::{forms::EditForm, session_row::SessionRow},
    utils::row_key,
    view_model::HostDashboardViewModel,
};
use crate::sessions::Session;
use leptos::*;

#[component]
pub fn HostDashboardPage() -> impl IntoView {
    let vm = HostDashboardViewModel::new();
    let listing = vm.listing();
    let editing = vm.editing;
    let on_edit = Callback::new(move |id: String| vm.start_edit(id));
    let on_toggle = Callback::new(move |id: String| vm.toggle(id));
    let on_save = Callback::new(move |_: ()| {
        if let Err(err) = vm.save_edit() {
            log::debug!("edit not saved: {}", err.code());
        }
    });
    let on_cancel = Callback::new(move |_: ()| vm.cancel_edit());

    view! {
        <Layout>
            <div class="bg-gray-800 rounded-lg p-6">
                <h2 class="text-2xl font-bold text-primary mb-6">"Host Dashboard"</h2>
                <button
                    class="mb-4 w-full bg-primary text-gray-900 py-2 rounded-lg hover:bg-opacity-90"
                    on:click=move |_| vm.post_new()
                >
                    "Post New Session"
                </button>
                <Show
                    when=move || !listing.with(Vec::is_empty)
                    fallback=|| view! {
                        <EmptyState title="No sessions yet" description="Post a session to see it here." />
                    }
                >
                    <div class="space-y-4">
                        <For
                            each=move || indexed(listing.get())
                            key=row_key
                            children=move |(_, session): (usize, Session)| {
                                let id = session.id.clone();
                                let is_editing = move || editing.with(|current| current.as_deref() == Some(id.as_str()));
                                let row = session.clone();
                                view! {
                                    <Show
                                        when=is_editing
                                        fallback=move || view! {
                                            <SessionRow session=row.clone() on_edit=on_edit on_toggle=on_toggle />
                                        }
                                    >
                                        <EditForm form=vm.form on_save=on_save on_cancel=on_cancel />
                                    </Show>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>
        </Layout>
    }
}
