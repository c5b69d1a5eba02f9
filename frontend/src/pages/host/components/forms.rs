use crate::components::common::{Button, ButtonVariant};
use crate::pages::host::{
    components::fields::SessionFields, utils::SessionFormState, view_model::PostSessionViewModel,
};
use leptos::*;

#[component]
pub fn PostingForm(vm: PostSessionViewModel) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Err(err) = vm.submit() {
            log::debug!("posting form rejected: {}", err.code());
        }
    };
    view! {
        <form class="bg-gray-800 rounded-lg p-6" on:submit=on_submit>
            <SessionFields form=vm.form />
            <div class="mt-6 flex justify-end space-x-2">
                <Button variant=ButtonVariant::Secondary on_click=move |_: ev::MouseEvent| vm.cancel()>
                    "CANCEL"
                </Button>
                <Button>"POST!"</Button>
            </div>
        </form>
    }
}

/// Inline editor shown in place of a dashboard row.
#[component]
pub fn EditForm(
    form: SessionFormState,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_save.call(());
    };
    view! {
        <form class="w-full bg-gray-700 rounded-lg p-4" on:submit=on_submit>
            <SessionFields form=form />
            <div class="mt-4 flex justify-end space-x-2">
                <Button variant=ButtonVariant::Secondary on_click=move |_: ev::MouseEvent| on_cancel.call(())>
                    "Cancel"
                </Button>
                <Button>"Save"</Button>
            </div>
        </form>
    }
}
