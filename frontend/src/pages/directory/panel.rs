use crate::components::layout::Layout;
use crate::pages::directory::{
    components::{
        filter::{FilterSection, PeriodTabs},
        list::SessionList,
        search::SearchBar,
    },
    view_model::DirectoryViewModel,
};
use leptos::*;

#[component]
pub fn DirectoryPage() -> impl IntoView {
    let vm = DirectoryViewModel::new();
    let visible = vm.visible;
    view! {
        <Layout>
            <h2 class="text-3xl font-bold mb-6">"Badminton Sessions"</h2>
            <SearchBar vm=vm />
            <FilterSection vm=vm />
            <PeriodTabs vm=vm />
            <SessionList sessions=visible />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::session;
    use crate::test_support::ssr::render_with_state;

    #[test]
    fn lists_seeded_sessions() {
        let html = render_with_state(
            vec![session("INT_001", "07:00", "08:00"), session("INT_002", "19:00", "20:00")],
            None,
            || view! { <DirectoryPage /> },
        );
        assert!(html.contains("Badminton Sessions"));
        assert!(html.contains("INT_001"));
        assert!(html.contains("INT_002"));
        assert!(html.contains("WHOLE"));
    }

    #[test]
    fn empty_directory_shows_empty_state() {
        let html = render_with_state(Vec::new(), None, || view! { <DirectoryPage /> });
        assert!(html.contains("No sessions found"));
    }
}
