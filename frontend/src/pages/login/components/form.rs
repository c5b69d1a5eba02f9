use crate::components::{common::Button, error::InlineErrorMessage};
use crate::pages::login::view_model::LoginViewModel;
use leptos::*;

const INPUT_CLASS: &str =
    "w-full p-2 rounded-lg bg-gray-700 text-white border border-gray-600 focus:outline-none focus:ring-2 focus:ring-primary";

#[component]
pub fn LoginForm(vm: LoginViewModel) -> impl IntoView {
    let email = vm.form.email;
    let password = vm.form.password;
    let mode = vm.mode;
    let pending = vm.pending();
    let error = Signal::derive(move || vm.error.get());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <form class="space-y-4" on:submit=on_submit>
            <div>
                <label for="email" class="block mb-2 text-sm font-medium text-gray-300">"Email"</label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    autocomplete="email"
                    class=INPUT_CLASS
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label for="password" class="block mb-2 text-sm font-medium text-gray-300">"Password"</label>
                <input
                    id="password"
                    name="password"
                    type="password"
                    autocomplete="current-password"
                    class=INPUT_CLASS
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </div>
            <InlineErrorMessage error=error />
            <Button class="w-full" loading=pending>
                {move || mode.get().title()}
            </Button>
            <p class="text-center text-sm text-gray-400">
                {move || mode.get().switch_prompt()}
                <button
                    type="button"
                    class="text-primary hover:underline"
                    on:click=move |_| vm.toggle_mode()
                >
                    {move || mode.get().toggled().title()}
                </button>
            </p>
        </form>
    }
}
