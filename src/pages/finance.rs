//! Finance Page
//!
//! Stock quotes with indicator drill-down, per-ticker predictions, and the
//! finance prediction history.

use leptos::*;

use crate::api;
use crate::api::finance::{StockAsset, StockIndicators};
use crate::api::Prediction;
use crate::components::{ListSkeleton, PredictionCard};
use crate::state::global::GlobalState;

/// Finance page component
#[component]
pub fn Finance() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (stocks, set_stocks) = create_signal(Vec::<StockAsset>::new());
    let (loading, set_loading) = create_signal(true);
    let (indicators, set_indicators) = create_signal(None::<StockIndicators>);
    let (prediction, set_prediction) = create_signal(None::<Prediction>);
    let (busy_ticker, set_busy_ticker) = create_signal(None::<String>);

    // Fetch quotes on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::finance::stocks().await {
                Ok(data) => set_stocks.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch stocks: {}", e).into())
                }
            }
            set_loading.set(false);
        });
    });

    let show_indicators = move |ticker: String| {
        spawn_local(async move {
            match api::finance::indicators(&ticker).await {
                Ok(data) => set_indicators.set(Some(data)),
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    let predict = move |ticker: String| {
        set_busy_ticker.set(Some(ticker.clone()));

        spawn_local(async move {
            match api::finance::predict_ticker(&ticker).await {
                Ok(result) => set_prediction.set(Some(result)),
                Err(e) => state.show_error(&e.to_string()),
            }
            set_busy_ticker.set(None);
        });
    };

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Finance"</h1>
                <p class="text-gray-400 mt-1">"Market quotes and price-direction picks"</p>
            </div>

            // Latest prediction
            {move || prediction.get().map(|p| view! {
                <PredictionCard prediction=p />
            })}

            // Stock table
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Stocks"</h2>

                {move || {
                    if loading.get() {
                        view! { <ListSkeleton count=5 /> }.into_view()
                    } else if stocks.get().is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"No tracked stocks."</p>
                        }.into_view()
                    } else {
                        view! {
                            <table class="w-full text-sm">
                                <thead>
                                    <tr class="text-left text-gray-400 border-b border-gray-700">
                                        <th class="pb-3">"Ticker"</th>
                                        <th class="pb-3">"Name"</th>
                                        <th class="pb-3 text-right">"Price"</th>
                                        <th class="pb-3 text-right">"Change"</th>
                                        <th class="pb-3"></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {stocks.get().into_iter().map(|stock| {
                                        let ticker = stock.ticker.clone();
                                        let ticker_for_ind = ticker.clone();
                                        let ticker_for_predict = ticker.clone();
                                        let ticker_for_busy = ticker.clone();
                                        view! {
                                            <tr class="border-b border-gray-700 last:border-0">
                                                <td class="py-3 font-mono font-medium">{stock.ticker.clone()}</td>
                                                <td class="py-3 text-gray-400">
                                                    {stock.name.clone().unwrap_or_default()}
                                                </td>
                                                <td class="py-3 text-right">{format!("${:.2}", stock.price)}</td>
                                                <td class="py-3 text-right">
                                                    {change_cell(stock.change_percent)}
                                                </td>
                                                <td class="py-3 text-right space-x-2">
                                                    <button
                                                        on:click=move |_| show_indicators(ticker_for_ind.clone())
                                                        class="px-3 py-1.5 bg-gray-600 hover:bg-gray-500
                                                               rounded-lg text-xs font-medium transition-colors"
                                                    >
                                                        "Indicators"
                                                    </button>
                                                    <button
                                                        on:click=move |_| predict(ticker_for_predict.clone())
                                                        disabled=move || busy_ticker.get().as_deref() == Some(ticker_for_busy.as_str())
                                                        class="px-3 py-1.5 bg-orange-600 hover:bg-orange-700 disabled:bg-gray-600
                                                               rounded-lg text-xs font-medium transition-colors"
                                                    >
                                                        "Predict"
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
                // Indicators panel
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Technical Indicators"</h2>
                    {move || {
                        match indicators.get() {
                            Some(ind) => view! {
                                <div class="space-y-2 text-sm">
                                    <p class="font-mono font-semibold text-lg">{ind.ticker.clone()}</p>
                                    <IndicatorRow label="SMA 20" value=ind.sma_20 />
                                    <IndicatorRow label="SMA 50" value=ind.sma_50 />
                                    <IndicatorRow label="EMA 12" value=ind.ema_12 />
                                    <IndicatorRow label="RSI" value=ind.rsi />
                                    <IndicatorRow label="MACD" value=ind.macd />
                                    <IndicatorRow label="MACD signal" value=ind.macd_signal />
                                    <IndicatorRow label="Volatility" value=ind.volatility />
                                </div>
                            }.into_view(),
                            None => view! {
                                <p class="text-gray-400 text-sm">"Pick a stock to see its indicators."</p>
                            }.into_view(),
                        }
                    }}
                </section>

                <TickerPredict on_prediction=move |p| set_prediction.set(Some(p)) />
            </div>

            <FinanceHistory />
        </div>
    }
}

/// Colored day-change cell
fn change_cell(change: Option<f64>) -> impl IntoView {
    match change {
        Some(change) => {
            let color = if change > 0.0 {
                "text-green-400"
            } else if change < 0.0 {
                "text-red-400"
            } else {
                "text-gray-400"
            };
            view! {
                <span class=color>{format!("{:+.2}%", change)}</span>
            }
            .into_view()
        }
        None => view! { <span class="text-gray-500">"-"</span> }.into_view(),
    }
}

/// One indicator line
#[component]
fn IndicatorRow(label: &'static str, value: Option<f64>) -> impl IntoView {
    view! {
        <div class="flex justify-between">
            <span class="text-gray-400">{label}</span>
            <span class="font-medium">
                {match value {
                    Some(value) => format!("{:.2}", value),
                    None => "-".to_string(),
                }}
            </span>
        </div>
    }
}

/// Predict by ticker symbol
#[component]
fn TickerPredict(on_prediction: impl Fn(Prediction) + Copy + 'static) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (ticker, set_ticker) = create_signal(String::new());
    let (loading, set_loading) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let ticker = ticker.get().trim().to_uppercase();
        if ticker.is_empty() {
            state.show_error("Ticker symbol is required");
            return;
        }

        set_loading.set(true);

        spawn_local(async move {
            match api::finance::predict(&ticker).await {
                Ok(prediction) => on_prediction(prediction),
                Err(e) => state.show_error(&e.to_string()),
            }
            set_loading.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Predict a Ticker"</h2>

            <form on:submit=on_submit class="flex space-x-2">
                <input
                    type="text"
                    placeholder="e.g. AAPL"
                    prop:value=move || ticker.get()
                    on:input=move |ev| set_ticker.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-2 font-mono uppercase
                           border border-gray-600 focus:border-orange-500 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || loading.get()
                    class="px-4 py-2 bg-orange-600 hover:bg-orange-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if loading.get() { "..." } else { "Predict" }}
                </button>
            </form>
        </section>
    }
}

/// Past finance predictions
#[component]
fn FinanceHistory() -> impl IntoView {
    let (history, set_history) = create_signal(Vec::<Prediction>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            match api::finance::history().await {
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
                        <p class="text-gray-400 text-sm">"No finance predictions yet."</p>
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
