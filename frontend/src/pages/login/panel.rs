use crate::config;
use crate::pages::login::{
    components::{form::LoginForm, identity::IdentitySignIn},
    view_model::use_login_view_model,
};
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let mode = vm.mode;
    view! {
        <div class="max-w-md mx-auto bg-gray-800 rounded-lg p-6 shadow">
            <h2 class="text-xl font-semibold text-primary mb-4">{move || mode.get().title()}</h2>
            <LoginForm vm=vm />
            <IdentitySignIn vm=vm client_id=config::google_client_id() />
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_credentials_form() {
        let html = render_to_string(|| view! { <LoginPanel /> });
        assert!(html.contains("name=\"email\""));
        assert!(html.contains("name=\"password\""));
        assert!(html.contains("Login"));
        assert!(html.contains("Register"));
    }

    #[test]
    fn identity_button_needs_a_client_id() {
        let html = render_to_string(|| view! { <LoginPanel /> });
        assert!(!html.contains("g_id_onload"));
    }
}
