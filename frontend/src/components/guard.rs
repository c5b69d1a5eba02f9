use crate::{router::use_go_to, state::auth::use_auth};
use leptos::*;

/// Renders host-only pages. Visitors who are not logged in are sent to the
/// login page, which is where the "I'm Host" button leads.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let go_to = use_go_to();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        go_to.call("/login".to_string());
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                view! {
                    <p class="text-sm text-gray-400">
                        "Please "<a href="/login" class="text-primary hover:underline">"log in"</a>" to host sessions."
                    </p>
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{host, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_children_for_logged_in_host() {
        let html = render_to_string(|| {
            provide_auth(Some(host()));
            view! { <RequireAuth><span>"dashboard"</span></RequireAuth> }
        });
        assert!(html.contains("dashboard"));
    }

    #[test]
    fn prompts_visitors_to_log_in() {
        let html = render_to_string(|| {
            view! { <RequireAuth><span>"dashboard"</span></RequireAuth> }
        });
        assert!(!html.contains("dashboard"));
        assert!(html.contains("log in"));
    }
}
