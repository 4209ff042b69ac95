//! Dashboard Page
//!
//! Overview dashboard: headline stats, featured mock picks, recent
//! prediction confidence trend, and a watchlist snapshot. Each widget loads
//! independently; a failed widget logs to the console and stays empty.

use leptos::*;

use crate::api;
use crate::api::finance::StockAsset;
use crate::api::sports::Match;
use crate::api::watchlist::WatchlistItem;
use crate::api::Prediction;
use crate::components::{ConfidenceGauge, Sparkline, StatCard};
use crate::mock;
use crate::state::auth::AuthState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    let (matches, set_matches) = create_signal(Vec::<Match>::new());
    let (stocks, set_stocks) = create_signal(Vec::<StockAsset>::new());
    let (watchlist, set_watchlist) = create_signal(Vec::<WatchlistItem>::new());
    let (recent, set_recent) = create_signal(Vec::<Prediction>::new());

    // Fan-out: each widget fetches concurrently on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::sports::matches().await {
                Ok(data) => set_matches.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch matches: {}", e).into())
                }
            }
        });

        spawn_local(async move {
            match api::finance::stocks().await {
                Ok(data) => set_stocks.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch stocks: {}", e).into())
                }
            }
        });

        spawn_local(async move {
            match api::watchlist::list().await {
                Ok(data) => set_watchlist.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch watchlist: {}", e).into())
                }
            }
        });

        spawn_local(async move {
            match api::sports::history().await {
                Ok(data) => set_recent.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch history: {}", e).into())
                }
            }
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">
                    {move || {
                        match auth.user.get() {
                            Some(user) => format!("Welcome, {}", user.display_name()),
                            None => "Dashboard".to_string(),
                        }
                    }}
                </h1>
                <p class="text-gray-400 mt-1">"Your predictions at a glance"</p>
            </div>

            // Headline stats
            <section>
                <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                    {move || view! {
                        <StatCard
                            label="Upcoming matches"
                            value=matches.get().len().to_string()
                            hint="across tracked leagues"
                        />
                    }}
                    {move || view! {
                        <StatCard
                            label="Tracked stocks"
                            value=stocks.get().len().to_string()
                            hint="with live quotes"
                        />
                    }}
                    {move || view! {
                        <StatCard
                            label="Watchlist items"
                            value=watchlist.get().len().to_string()
                            hint="teams, tickers & more"
                        />
                    }}
                </div>
            </section>

            // Featured picks (mock data until the models serve them)
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Featured AI Picks"</h2>
                <div class="grid md:grid-cols-2 gap-4">
                    {mock::featured_picks().into_iter().map(|pick| {
                        let confidence = pick.confidence;
                        view! {
                            <div class="bg-gray-700 rounded-lg p-4 flex items-start justify-between">
                                <div class="flex-1 pr-4">
                                    <div class="flex items-center space-x-2">
                                        <span class="font-semibold">{pick.title}</span>
                                        <span class="text-xs text-gray-400">{pick.domain.label()}</span>
                                    </div>
                                    <p class="text-orange-400 font-medium mt-1">{pick.result}</p>
                                    <p class="text-gray-400 text-sm mt-2">{pick.summary}</p>
                                    <p class="text-gray-500 text-xs mt-2">{pick.model_version}</p>
                                </div>
                                <ConfidenceGauge value=Signal::derive(move || confidence) />
                            </div>
                        }
                    }).collect_view()}
                </div>
            </section>

            <div class="grid md:grid-cols-2 gap-8">
                // Confidence trend of recent sports predictions
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Recent Prediction Confidence"</h2>
                    <Sparkline values=Signal::derive(move || {
                        recent.get().iter().map(|p| p.confidence).collect::<Vec<_>>()
                    }) />
                    <p class="text-gray-500 text-sm mt-3">
                        {move || format!("{} predictions in history", recent.get().len())}
                    </p>
                </section>

                // Watchlist snapshot
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Watchlist"</h2>
                    {move || {
                        let items = watchlist.get();
                        if items.is_empty() {
                            view! {
                                <p class="text-gray-400 text-sm">"Nothing tracked yet. Add teams or tickers from their pages."</p>
                            }.into_view()
                        } else {
                            items.into_iter().take(5).map(|item| view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                    <div class="flex items-center space-x-3">
                                        <span class="text-xs bg-gray-700 rounded-full px-2 py-0.5 text-gray-300">
                                            {item.item_type.as_str()}
                                        </span>
                                        <span>{item.name}</span>
                                    </div>
                                    {item.alert_enabled.then(|| view! {
                                        <span class="text-yellow-400 text-sm">"🔔"</span>
                                    })}
                                </div>
                            }).collect_view()
                        }
                    }}
                </section>
            </div>
        </div>
    }
}
