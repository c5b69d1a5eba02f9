use crate::{
    components::error::InlineErrorMessage,
    state::{
        auth::{self, use_auth},
        notice::use_notice,
    },
};
use leptos::*;

#[component]
pub fn Header() -> impl IntoView {
    let (auth, set_auth) = use_auth();
    let is_logged_in = move || auth.get().is_authenticated;
    let host_name = move || {
        auth.get()
            .host
            .map(|host| host.display_name)
            .unwrap_or_default()
    };
    let notice = use_notice();
    let on_logout = move |_| {
        auth::logout(set_auth);
        notice.update(|n| n.set_success("Logged out."));
    };
    view! {
        <header class="bg-gray-800 shadow-md">
            <div class="container mx-auto px-4 py-4 flex justify-between items-center">
                <div class="flex items-center space-x-4">
                    <Show when=is_logged_in>
                        <a href="/" class="text-gray-300 hover:text-white" aria-label="Back to sessions">
                            "←"
                        </a>
                    </Show>
                    <h1 class="text-2xl font-bold text-primary">
                        <a href="/">"BadmintonBook"</a>
                    </h1>
                </div>
                <nav class="flex items-center space-x-4">
                    <Show
                        when=is_logged_in
                        fallback=|| view! {
                            <a href="/login" class="bg-primary text-gray-900 px-4 py-2 rounded-lg hover:bg-opacity-90">
                                "I'm Host"
                            </a>
                        }
                    >
                        <span class="text-sm text-gray-400">{host_name}</span>
                        <a href="/host" class="bg-blue-500 text-white px-4 py-2 rounded-lg hover:bg-opacity-90">
                            "Maintain"
                        </a>
                        <a href="/host/new" class="bg-primary text-gray-900 px-4 py-2 rounded-lg hover:bg-opacity-90">
                            "Post Session"
                        </a>
                        <button
                            on:click=on_logout
                            class="text-gray-300 hover:text-white px-3 py-2 rounded-md text-sm font-medium"
                        >
                            "Logout"
                        </button>
                    </Show>
                </nav>
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 py-4">
            <div class="container mx-auto px-4 text-center text-sm text-gray-400">
                "BadmintonBook. Find a court, join a game."
            </div>
        </footer>
    }
}

/// Success or error message left by the last action.
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notice = use_notice();
    let error = Signal::derive(move || notice.get().error);
    let on_dismiss = move |_| notice.update(|n| n.clear());
    view! {
        <Show when=move || notice.get().success.is_some() || error.get().is_some()>
            <div class="mb-4 flex items-start justify-between gap-4">
                <div class="flex-grow">
                    <Show when=move || notice.get().success.is_some()>
                        <SuccessMessage message=Signal::derive(move || notice.get().success.unwrap_or_default()) />
                    </Show>
                    <InlineErrorMessage error=error />
                </div>
                <button class="text-gray-400 hover:text-white" on:click=on_dismiss aria-label="Dismiss">
                    "×"
                </button>
            </div>
        </Show>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Header/>
            <main class="flex-grow container mx-auto px-4 py-8">
                <NoticeBanner/>
                {children()}
            </main>
            <Footer/>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-green-500 bg-opacity-20 border border-green-500 text-green-300 px-4 py-3 rounded">
            <p class="text-sm">{move || message.get()}</p>
        </div>
    }
}
