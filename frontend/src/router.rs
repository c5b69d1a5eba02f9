use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::RequireAuth,
    pages::{
        directory::DirectoryPage,
        host::{HostDashboardPage, PostSessionPage},
        login::LoginPage,
    },
    state::{auth::AuthProvider, notice::NoticeState, sessions::SessionsProvider},
};

pub const ROUTE_PATHS: &[&str] = &["/", "/login", "/host", "/host/new"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/host", "/host/new"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(create_rw_signal(NoticeState::default()));
    view! {
        <AuthProvider>
            <SessionsProvider>
                <Router>
                    <Routes>
                        <Route path="/" view=DirectoryPage/>
                        <Route path="/login" view=LoginPage/>
                        <Route path="/host" view=ProtectedHostDashboard/>
                        <Route path="/host/new" view=ProtectedPostSession/>
                    </Routes>
                </Router>
            </SessionsProvider>
        </AuthProvider>
    }
}

/// Client-side navigation that keeps in-memory state. Outside a router
/// (host-side rendering) the request is only logged.
pub fn use_go_to() -> Callback<String> {
    if use_context::<RouterContext>().is_some() {
        let navigate = use_navigate();
        Callback::new(move |path: String| navigate(&path, NavigateOptions::default()))
    } else {
        Callback::new(|path: String| log::debug!("no router mounted; skipping navigation to {path}"))
    }
}

#[component]
fn ProtectedHostDashboard() -> impl IntoView {
    view! { <RequireAuth><HostDashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedPostSession() -> impl IntoView {
    view! { <RequireAuth><PostSessionPage/></RequireAuth> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn route_paths_include_host_routes() {
        assert!(ROUTE_PATHS.contains(&"/host"));
        assert!(ROUTE_PATHS.contains(&"/host/new"));
    }

    #[test]
    fn protected_and_public_routes_partition_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        assert!(protected.is_disjoint(&public));
        let union: HashSet<&str> = protected.union(&public).copied().collect();
        assert_eq!(union, all);
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }
}
