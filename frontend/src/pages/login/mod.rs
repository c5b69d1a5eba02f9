use crate::components::layout::Layout;
use leptos::*;

pub mod components;
pub mod repository;
pub mod types;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::LoginPanel;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Layout>
            <LoginPanel />
        </Layout>
    }
}
