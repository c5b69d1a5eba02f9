use crate::pages::login::{utils::IDENTITY_CALLBACK, view_model::LoginViewModel};
use leptos::*;

/// Container the identity provider's script turns into a sign-in button.
/// Nothing renders when no client id is configured.
#[component]
pub fn IdentitySignIn(vm: LoginViewModel, client_id: Option<String>) -> impl IntoView {
    if client_id.is_some() {
        register_callback(vm);
    }
    client_id.map(|client_id| {
        view! {
            <div class="mt-6">
                <div class="flex items-center my-4">
                    <div class="flex-grow border-t border-gray-600"></div>
                    <span class="mx-3 text-sm text-gray-400">"or"</span>
                    <div class="flex-grow border-t border-gray-600"></div>
                </div>
                <div
                    id="g_id_onload"
                    data-client_id=client_id
                    data-callback=IDENTITY_CALLBACK
                    data-auto_prompt="false"
                ></div>
                <div class="g_id_signin flex justify-center" data-type="standard"></div>
            </div>
        }
    })
}

#[cfg(target_arch = "wasm32")]
fn register_callback(vm: LoginViewModel) {
    use wasm_bindgen::{closure::Closure, JsValue};

    let Some(window) = web_sys::window() else {
        return;
    };
    let callback = Closure::<dyn FnMut(JsValue)>::new(move |response: JsValue| {
        let read = |key: &str| {
            js_sys::Reflect::get(&response, &JsValue::from_str(key))
                .ok()
                .and_then(|value| value.as_string())
        };
        vm.identity_response(read("credential"), read("clientId").or_else(|| read("client_id")));
    });
    let name = JsValue::from_str(IDENTITY_CALLBACK);
    if let Err(err) = js_sys::Reflect::set(&window, &name, callback.as_ref()) {
        log::warn!("could not register {IDENTITY_CALLBACK}: {err:?}");
        return;
    }
    callback.forget();
    on_cleanup(move || {
        if let Some(window) = web_sys::window() {
            let _ = js_sys::Reflect::delete_property(&window, &name);
        }
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn register_callback(_vm: LoginViewModel) {
    log::debug!("identity callback is only registered in the browser");
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::login::view_model::use_login_view_model;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_provider_container_with_client_id() {
        let html = render_to_string(|| {
            let vm = use_login_view_model();
            view! { <IdentitySignIn vm=vm client_id=Some("client-123".to_string()) /> }
        });
        assert!(html.contains("g_id_onload"));
        assert!(html.contains("client-123"));
        assert!(html.contains(IDENTITY_CALLBACK));
    }

    #[test]
    fn renders_nothing_without_client_id() {
        let html = render_to_string(|| {
            let vm = use_login_view_model();
            view! { <IdentitySignIn vm=vm client_id=None /> }
        });
        assert!(!html.contains("g_id_signin"));
    }
}
