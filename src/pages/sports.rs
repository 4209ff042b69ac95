//! Sports Page
//!
//! Upcoming matches with odds, per-match predictions, team statistics
//! lookup, and the sports prediction history.

use leptos::*;

use crate::api;
use crate::api::sports::{Match, TeamStatistics};
use crate::api::Prediction;
use crate::components::{ListSkeleton, PredictionCard};
use crate::state::global::GlobalState;

/// Sports page component
#[component]
pub fn Sports() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (matches, set_matches) = create_signal(Vec::<Match>::new());
    let (loading, set_loading) = create_signal(true);
    let (prediction, set_prediction) = create_signal(None::<Prediction>);
    let (predicting, set_predicting) = create_signal(None::<u32>);

    // Fetch matches on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::sports::matches().await {
                Ok(data) => set_matches.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch matches: {}", e).into())
                }
            }
            set_loading.set(false);
        });
    });

    let predict = move |match_id: u32| {
        set_predicting.set(Some(match_id));

        spawn_local(async move {
            match api::sports::predict_match(match_id).await {
                Ok(result) => set_prediction.set(Some(result)),
                Err(e) => state.show_error(&e.to_string()),
            }
            set_predicting.set(None);
        });
    };

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Sports"</h1>
                <p class="text-gray-400 mt-1">"Upcoming matches and model picks"</p>
            </div>

            // Latest prediction
            {move || prediction.get().map(|p| view! {
                <PredictionCard prediction=p />
            })}

            // Matches table
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Upcoming Matches"</h2>

                {move || {
                    if loading.get() {
                        view! { <ListSkeleton count=5 /> }.into_view()
                    } else if matches.get().is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"No upcoming matches right now."</p>
                        }.into_view()
                    } else {
                        view! {
                            <table class="w-full text-sm">
                                <thead>
                                    <tr class="text-left text-gray-400 border-b border-gray-700">
                                        <th class="pb-3">"Match"</th>
                                        <th class="pb-3">"League"</th>
                                        <th class="pb-3">"Date"</th>
                                        <th class="pb-3 text-center">"1 / X / 2"</th>
                                        <th class="pb-3">"Form"</th>
                                        <th class="pb-3"></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {matches.get().into_iter().map(|m| {
                                        let match_id = m.id;
                                        view! {
                                            <tr class="border-b border-gray-700 last:border-0">
                                                <td class="py-3 font-medium">
                                                    {format!("{} vs {}", m.home_team, m.away_team)}
                                                </td>
                                                <td class="py-3 text-gray-400">{m.league}</td>
                                                <td class="py-3 text-gray-400">{m.date}</td>
                                                <td class="py-3 text-center text-gray-300">
                                                    {format_odds(m.home_odds, m.draw_odds, m.away_odds)}
                                                </td>
                                                <td class="py-3 text-gray-400 font-mono text-xs">
                                                    {format!(
                                                        "{} / {}",
                                                        m.home_form.unwrap_or_else(|| "-".into()),
                                                        m.away_form.unwrap_or_else(|| "-".into()),
                                                    )}
                                                </td>
                                                <td class="py-3 text-right">
                                                    <button
                                                        on:click=move |_| predict(match_id)
                                                        disabled=move || predicting.get() == Some(match_id)
                                                        class="px-3 py-1.5 bg-orange-600 hover:bg-orange-700 disabled:bg-gray-600
                                                               rounded-lg text-xs font-medium transition-colors"
                                                    >
                                                        {move || {
                                                            if predicting.get() == Some(match_id) {
                                                                "Predicting..."
                                                            } else {
                                                                "Predict"
                                                            }
                                                        }}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_view()
                    }
                }}
            </section>

            <div class="grid md:grid-cols-2 gap-8">
                <TeamStatsLookup />
                <CustomFixture on_prediction=move |p| set_prediction.set(Some(p)) />
            </div>

            <SportsHistory />
        </div>
    }
}

/// Combined odds column, e.g. "2.10 / 3.40 / 3.80"
fn format_odds(home: Option<f64>, draw: Option<f64>, away: Option<f64>) -> String {
    let fmt = |odds: Option<f64>| match odds {
        Some(value) => format!("{:.2}", value),
        None => "-".to_string(),
    };
    format!("{} / {} / {}", fmt(home), fmt(draw), fmt(away))
}

/// Team statistics lookup
#[component]
fn TeamStatsLookup() -> impl IntoView {
    let (team, set_team) = create_signal(String::new());
    let (stats, set_stats) = create_signal(None::<TeamStatistics>);
    let (error, set_error) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let team = team.get();
        if team.is_empty() {
            return;
        }

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::sports::team_statistics(&team).await {
                Ok(data) => set_stats.set(Some(data)),
                Err(e) => {
                    set_stats.set(None);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Team Statistics"</h2>

            <form on:submit=on_submit class="flex space-x-2">
                <input
                    type="text"
                    placeholder="Team name"
                    prop:value=move || team.get()
                    on:input=move |ev| set_team.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-orange-500 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || loading.get()
                    class="px-4 py-2 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                           rounded-lg font-medium transition-colors"
                >
                    {move || if loading.get() { "..." } else { "Look up" }}
                </button>
            </form>

            {move || error.get().map(|message| view! {
                <p class="text-red-400 text-sm mt-3">{message}</p>
            })}

            {move || stats.get().map(|s| {
                let win_rate = s.win_rate();
                view! {
                    <div class="mt-4 space-y-2 text-sm">
                        <div class="flex justify-between">
                            <span class="text-gray-400">"Record (W-D-L)"</span>
                            <span class="font-medium">{format!("{}-{}-{}", s.wins, s.draws, s.losses)}</span>
                        </div>
                        <div class="flex justify-between">
                            <span class="text-gray-400">"Win rate"</span>
                            <span class="font-medium">{format!("{:.0}%", win_rate * 100.0)}</span>
                        </div>
                        <div class="flex justify-between">
                            <span class="text-gray-400">"Goals (for/against)"</span>
                            <span class="font-medium">{format!("{} / {}", s.goals_scored, s.goals_conceded)}</span>
                        </div>
                        {s.recent_form.map(|form| view! {
                            <div class="flex justify-between">
                                <span class="text-gray-400">"Recent form"</span>
                                <span class="font-mono">{form}</span>
                            </div>
                        })}
                    </div>
                }
            })}
        </section>
    }
}

/// Ad-hoc fixture prediction form
#[component]
fn CustomFixture(on_prediction: impl Fn(Prediction) + Copy + 'static) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (home, set_home) = create_signal(String::new());
    let (away, set_away) = create_signal(String::new());
    let (league, set_league) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let home = home.get();
        let away = away.get();
        let league = league.get();

        if home.is_empty() || away.is_empty() {
            state.show_error("Both team names are required");
            return;
        }

        set_loading.set(true);

        spawn_local(async move {
            match api::sports::predict(&home, &away, &league).await {
                Ok(prediction) => on_prediction(prediction),
                Err(e) => state.show_error(&e.to_string()),
            }
            set_loading.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Custom Fixture"</h2>

            <form on:submit=on_submit class="space-y-3">
                <input
                    type="text"
                    placeholder="Home team"
                    prop:value=move || home.get()
                    on:input=move |ev| set_home.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-orange-500 focus:outline-none"
                />
                <input
                    type="text"
                    placeholder="Away team"
                    prop:value=move || away.get()
                    on:input=move |ev| set_away.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-orange-500 focus:outline-none"
                />
                <input
                    type="text"
                    placeholder="League (optional)"
                    prop:value=move || league.get()
                    on:input=move |ev| set_league.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-orange-500 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || loading.get()
                    class="w-full px-4 py-2 bg-orange-600 hover:bg-orange-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if loading.get() { "Asking the model..." } else { "Predict" }}
                </button>
            </form>
        </section>
    }
}

/// Past sports predictions
#[component]
fn SportsHistory() -> impl IntoView {
    let (history, set_history) = create_signal(Vec::<Prediction>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            match api::sports::history().await {
                Ok(data) => set_history.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch history: {}", e).into())
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Prediction History"</h2>

            {move || {
                if loading.get() {
                    view! { <ListSkeleton /> }.into_view()
                } else if history.get().is_empty() {
                    view! {
                        <p class="text-gray-400 text-sm">"No sports predictions yet."</p>
                    }.into_view()
                } else {
                    view! {
                        <div class="grid md:grid-cols-2 gap-4">
                            {history.get().into_iter().map(|p| view! {
                                <PredictionCard prediction=p />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_odds_with_full_market() {
        assert_eq!(
            format_odds(Some(2.1), Some(3.4), Some(3.8)),
            "2.10 / 3.40 / 3.80"
        );
    }

    #[test]
    fn test_format_odds_with_missing_draw() {
        assert_eq!(format_odds(Some(1.5), None, Some(2.5)), "1.50 / - / 2.50");
    }
}
