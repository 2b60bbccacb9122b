//! Admin dashboard shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route after sign-in. Content is static overview
//! data; the page only guards access and renders the layout.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::header::Header;
use crate::state::auth::SessionContext;
use crate::util::auth::install_unauth_redirect;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

pub const OVERVIEW_STATS: [StatCard; 4] = [
    StatCard { title: "Total Incidents", value: "53", change: "+20.1% from last month" },
    StatCard { title: "Incident Resolved", value: "+18", change: "+30.1% from last month" },
    StatCard { title: "Illegal Activites", value: "5", change: "-9% from last month" },
    StatCard { title: "Current Incident", value: "+3", change: "+201 since last hour" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

/// Direction of a change caption, read from its leading sign.
#[must_use]
pub fn trend(change: &str) -> Trend {
    match change.trim_start().chars().next() {
        Some('+') => Trend::Up,
        Some('-') => Trend::Down,
        _ => Trend::Flat,
    }
}

fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "stat-card__change stat-card__change--up",
        Trend::Down => "stat-card__change stat-card__change--down",
        Trend::Flat => "stat-card__change",
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = SessionContext::expect();
    install_unauth_redirect(session, use_navigate());

    view! {
        <Header/>
        <Show
            when=move || session.user().is_some()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>
                            {move || {
                                if session.state().loading { "Loading..." } else { "Redirecting to sign in..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <main class="dashboard-page">
                <div class="dashboard-page__header">
                    <h2 class="dashboard-page__title">"Admin Dashboard"</h2>
                </div>
                <div class="tabs" role="tablist">
                    <button class="tabs__trigger tabs__trigger--active" role="tab" aria-selected="true">
                        "Overview"
                    </button>
                    <button class="tabs__trigger" role="tab" aria-selected="false" disabled=true>
                        "Analytics"
                    </button>
                </div>
                <div class="dashboard-page__stats">
                    {OVERVIEW_STATS
                        .into_iter()
                        .map(|card| {
                            view! {
                                <div class="card stat-card">
                                    <p class="stat-card__title">{card.title}</p>
                                    <p class="stat-card__value">{card.value}</p>
                                    <p class=trend_class(trend(card.change))>{card.change}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="dashboard-page__charts">
                    <div class="card dashboard-page__chart dashboard-page__chart--wide">
                        <h3 class="card__title">"Overview"</h3>
                        <div class="chart-placeholder" aria-hidden="true"></div>
                    </div>
                    <div class="card dashboard-page__chart">
                        <h3 class="card__title">"Recent Transactions"</h3>
                        <p class="card__description">"No transactions to show yet."</p>
                    </div>
                </div>
            </main>
        </Show>
    }
}
