use crate::components::empty_state::EmptyState;
use crate::pages::directory::utils::{
    card_key, format_price, indexed, time_window, vacancy_badge_class,
};
use crate::sessions::Session;
use leptos::*;

#[component]
pub fn SessionCard(session: Session) -> impl IntoView {
    let badge = vacancy_badge_class(session.vacancies);
    let time = time_window(&session);
    let price = format_price(session.price);
    view! {
        <div class="bg-gray-800 rounded-lg p-4 shadow">
            <div class="flex justify-between items-start mb-2">
                <h3 class="text-lg font-semibold">{session.title.clone()}</h3>
                <span class=format!("text-xs font-bold px-2 py-1 rounded {badge}")>
                    {session.vacancies.as_str()}
                </span>
            </div>
            <p class="text-sm text-gray-400">"ID: "{session.id.clone()}</p>
            <p class="text-sm">{session.player_level.clone()}</p>
            <p class="text-sm">{session.location.clone()}</p>
            <p class="text-sm">{session.date.clone()}" "{time}</p>
            <p class="text-sm font-semibold text-primary">{price}</p>
            {session.remarks.clone().map(|remarks| view! {
                <p class="text-sm text-gray-400 mt-2">{remarks}</p>
            })}
            {session.host.clone().map(|host| view! {
                <p class="text-xs text-gray-500 mt-2">"Hosted by "{host}</p>
            })}
        </div>
    }
}

#[component]
pub fn SessionList(#[prop(into)] sessions: Signal<Vec<Session>>) -> impl IntoView {
    view! {
        <Show
            when=move || !sessions.with(Vec::is_empty)
            fallback=|| view! {
                <EmptyState
                    title="No sessions found"
                    description="Try another time period or clear the filters."
                />
            }
        >
            <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                <For
                    each=move || indexed(sessions.get())
                    key=card_key
                    children=move |(_, session): (usize, Session)| view! { <SessionCard session=session /> }
                />
            </div>
        </Show>
    }
}
