//! Watchlist Page
//!
//! Tracked items with notes and alert flags: add, edit, delete, and a bulk
//! add form that takes one `type:id:name` entry per line.

use leptos::*;

use crate::api;
use crate::api::watchlist::{ItemType, NewWatchlistItem, WatchlistItem, WatchlistUpdate};
use crate::components::ListSkeleton;
use crate::state::global::GlobalState;

/// Parse one bulk-add line of the form `type:id:name`.
pub(crate) fn parse_bulk_line(line: &str) -> Result<NewWatchlistItem, String> {
    let mut parts = line.splitn(3, ':').map(str::trim);
    let type_str = parts.next().unwrap_or_default();
    let item_type = ItemType::parse(type_str)
        .ok_or_else(|| format!("Unknown item type '{}'", type_str))?;
    let item_id = parts
        .next()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| format!("Missing id in '{}'", line))?;
    let name = parts.next().filter(|name| !name.is_empty()).unwrap_or(item_id);

    Ok(NewWatchlistItem {
        item_type,
        item_id: item_id.to_string(),
        name: name.to_string(),
        notes: None,
        alert_enabled: false,
    })
}

/// Parse the whole bulk textarea, skipping blank lines.
pub(crate) fn parse_bulk_input(input: &str) -> Result<Vec<NewWatchlistItem>, String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_bulk_line)
        .collect()
}

/// Watchlist page component
#[component]
pub fn Watchlist() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (items, set_items) = create_signal(Vec::<WatchlistItem>::new());
    let (loading, set_loading) = create_signal(true);

    let refresh = move || {
        spawn_local(async move {
            match api::watchlist::list().await {
                Ok(mut data) => {
                    // Keep items of the same type together
                    data.sort_by_key(|item| item.item_type.as_str());
                    set_items.set(data);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch watchlist: {}", e).into())
                }
            }
            set_loading.set(false);
        });
    };

    create_effect(move |_| refresh());

    let remove = move |id: u32| {
        spawn_local(async move {
            match api::watchlist::remove(id).await {
                Ok(_) => {
                    set_items.update(|items| items.retain(|item| item.id != id));
                    state.show_success("Removed from watchlist");
                }
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    let toggle_alert = move |item: WatchlistItem| {
        let update = WatchlistUpdate {
            alert_enabled: Some(!item.alert_enabled),
            ..Default::default()
        };
        spawn_local(async move {
            match api::watchlist::update(item.id, &update).await {
                Ok(updated) => {
                    set_items.update(|items| {
                        if let Some(existing) = items.iter_mut().find(|i| i.id == updated.id) {
                            *existing = updated;
                        }
                    });
                }
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    let save_notes = move |id: u32, notes: String| {
        let update = WatchlistUpdate {
            notes: Some(notes),
            ..Default::default()
        };
        spawn_local(async move {
            match api::watchlist::update(id, &update).await {
                Ok(updated) => {
                    set_items.update(|items| {
                        if let Some(existing) = items.iter_mut().find(|i| i.id == updated.id) {
                            *existing = updated;
                        }
                    });
                    state.show_success("Notes saved");
                }
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Watchlist"</h1>
                <p class="text-gray-400 mt-1">"Teams, leagues, tickers, and crypto you follow"</p>
            </div>

            // Items
            <section class="bg-gray-800 rounded-xl p-6">
                {move || {
                    if loading.get() {
                        view! { <ListSkeleton count=4 /> }.into_view()
                    } else if items.get().is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"Your watchlist is empty. Add something below!"</p>
                        }.into_view()
                    } else {
                        items.get().into_iter().map(|item| {
                            let item_for_toggle = item.clone();
                            let item_id = item.id;
                            let alert_on = item.alert_enabled;
                            let (notes, set_notes) = create_signal(item.notes.clone().unwrap_or_default());
                            view! {
                                <div class="flex items-center justify-between py-3 border-b border-gray-700 last:border-0 gap-4">
                                    <div class="flex items-center space-x-3 min-w-0">
                                        <span class="text-xs bg-gray-700 rounded-full px-2 py-0.5 text-gray-300 shrink-0">
                                            {item.item_type.as_str()}
                                        </span>
                                        <div class="min-w-0">
                                            <p class="font-medium truncate">{item.name.clone()}</p>
                                            <p class="text-gray-500 text-xs font-mono">{item.item_id.clone()}</p>
                                        </div>
                                    </div>

                                    <div class="flex items-center space-x-2 shrink-0">
                                        <input
                                            type="text"
                                            placeholder="Notes"
                                            prop:value=move || notes.get()
                                            on:input=move |ev| set_notes.set(event_target_value(&ev))
                                            on:change=move |_| save_notes(item_id, notes.get_untracked())
                                            class="w-48 bg-gray-700 rounded-lg px-3 py-1.5 text-sm
                                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                                        />
                                        <button
                                            on:click=move |_| toggle_alert(item_for_toggle.clone())
                                            class=move || {
                                                if alert_on {
                                                    "px-2 py-1.5 rounded-lg text-yellow-400 bg-gray-700"
                                                } else {
                                                    "px-2 py-1.5 rounded-lg text-gray-500 hover:text-gray-300"
                                                }
                                            }
                                            title="Toggle alert"
                                        >
                                            "🔔"
                                        </button>
                                        <button
                                            on:click=move |_| remove(item_id)
                                            class="px-2 py-1.5 rounded-lg text-gray-500 hover:text-red-400"
                                            title="Remove"
                                        >
                                            "🗑"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }
                }}
            </section>

            <div class="grid md:grid-cols-2 gap-8">
                <AddItemForm on_added=move |item| set_items.update(|items| items.push(item)) />
                <BulkAddForm on_added=move || refresh() />
            </div>
        </div>
    }
}

/// Single-item add form
#[component]
fn AddItemForm(on_added: impl Fn(WatchlistItem) + Copy + 'static) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (item_type, set_item_type) = create_signal("team".to_string());
    let (item_id, set_item_id) = create_signal(String::new());
    let (name, set_name) = create_signal(String::new());
    let (notes, set_notes) = create_signal(String::new());
    let (alert, set_alert) = create_signal(false);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let Some(item_type) = ItemType::parse(&item_type.get()) else {
            state.show_error("Pick an item type");
            return;
        };
        let item_id = item_id.get();
        let name = name.get();
        if item_id.is_empty() || name.is_empty() {
            state.show_error("Id and name are required");
            return;
        }

        set_submitting.set(true);

        let notes = notes.get();
        let item = NewWatchlistItem {
            item_type,
            item_id: item_id.clone(),
            name,
            notes: (!notes.is_empty()).then_some(notes),
            alert_enabled: alert.get(),
        };

        spawn_local(async move {
            // The check endpoint guards against duplicates before adding
            match api::watchlist::check(item.item_type, &item.item_id).await {
                Ok(true) => {
                    state.show_error("Already in your watchlist");
                    set_submitting.set(false);
                    return;
                }
                Ok(false) => {}
                Err(e) => {
                    web_sys::console::warn_1(&format!("Watchlist check failed: {}", e).into());
                }
            }

            match api::watchlist::add(&item).await {
                Ok(added) => {
                    on_added(added);
                    state.show_success("Added to watchlist");
                }
                Err(e) => state.show_error(&e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Add Item"</h2>

            <form on:submit=on_submit class="space-y-3">
                <select
                    on:change=move |ev| set_item_type.set(event_target_value(&ev))
                    prop:value=move || item_type.get()
                    class="w-full bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-orange-500 focus:outline-none"
                >
                    {ItemType::ALL.into_iter().map(|t| view! {
                        <option value=t.as_str()>{t.as_str()}</option>
                    }).collect_view()}
                </select>
                <input
                    type="text"
                    placeholder="Id (team id, ticker, ...)"
                    prop:value=move || item_id.get()
                    on:input=move |ev| set_item_id.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-orange-500 focus:outline-none"
                />
                <input
                    type="text"
                    placeholder="Display name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-orange-500 focus:outline-none"
                />
                <input
                    type="text"
                    placeholder="Notes (optional)"
                    prop:value=move || notes.get()
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-2
                           border border-gray-600 focus:border-orange-500 focus:outline-none"
                />
                <label class="flex items-center space-x-2 text-sm text-gray-300">
                    <input
                        type="checkbox"
                        prop:checked=move || alert.get()
                        on:change=move |ev| set_alert.set(event_target_checked(&ev))
                    />
                    <span>"Alert me about this item"</span>
                </label>
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full px-4 py-2 bg-orange-600 hover:bg-orange-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Adding..." } else { "Add" }}
                </button>
            </form>
        </section>
    }
}

/// Bulk add form, one `type:id:name` per line
#[component]
fn BulkAddForm(on_added: impl Fn() + Copy + 'static) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (input, set_input) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let items = match parse_bulk_input(&input.get()) {
            Ok(items) if !items.is_empty() => items,
            Ok(_) => {
                state.show_error("Nothing to add");
                return;
            }
            Err(message) => {
                state.show_error(&message);
                return;
            }
        };

        set_submitting.set(true);

        spawn_local(async move {
            match api::watchlist::bulk_add(&items).await {
                Ok(response) => {
                    state.show_success(&format!("Added {} items", response.added.len()));
                    set_input.set(String::new());
                    on_added();
                }
                Err(e) => state.show_error(&e.to_string()),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Bulk Add"</h2>
            <p class="text-gray-400 text-sm mb-3">
                "One item per line: " <code class="text-gray-300">"type:id:name"</code>
                ", e.g. " <code class="text-gray-300">"ticker:NVDA:NVIDIA"</code>
            </p>

            <form on:submit=on_submit class="space-y-3">
                <textarea
                    rows="5"
                    placeholder="team:42:Arsenal\nticker:AAPL:Apple"
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-2 font-mono text-sm
                           border border-gray-600 focus:border-orange-500 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full px-4 py-2 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700
                           rounded-lg font-medium transition-colors"
                >
                    {move || if submitting.get() { "Adding..." } else { "Add All" }}
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bulk_line_full_form() {
        let item = parse_bulk_line("ticker:NVDA:NVIDIA").unwrap();
        assert_eq!(item.item_type, ItemType::Ticker);
        assert_eq!(item.item_id, "NVDA");
        assert_eq!(item.name, "NVIDIA");
        assert!(!item.alert_enabled);
    }

    #[test]
    fn test_parse_bulk_line_defaults_name_to_id() {
        let item = parse_bulk_line("crypto:BTC-USD").unwrap();
        assert_eq!(item.name, "BTC-USD");
    }

    #[test]
    fn test_parse_bulk_line_rejects_unknown_type() {
        assert!(parse_bulk_line("bond:X:Y").is_err());
    }

    #[test]
    fn test_parse_bulk_line_rejects_missing_id() {
        assert!(parse_bulk_line("team:").is_err());
        assert!(parse_bulk_line("team").is_err());
    }

    #[test]
    fn test_parse_bulk_input_skips_blank_lines() {
        let items = parse_bulk_input("team:1:Arsenal\n\n  \nticker:AAPL:Apple\n").unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_parse_bulk_input_fails_on_any_bad_line() {
        assert!(parse_bulk_input("team:1:Arsenal\nbogus").is_err());
    }
}
