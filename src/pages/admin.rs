//! Admin Page
//!
//! User management table, platform stats, and the recent activity feed.
//! Reached only through the admin guard.

use leptos::*;

use crate::api;
use crate::api::admin::{ActivityEntry, AdminStats, UserUpdate};
use crate::components::{CardSkeleton, ListSkeleton, StatCard};
use crate::state::auth::User;
use crate::state::global::GlobalState;

/// Admin page component
#[component]
pub fn Admin() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (users, set_users) = create_signal(Vec::<User>::new());
    let (total, set_total) = create_signal(None::<u64>);
    let (loading, set_loading) = create_signal(true);
    let (search, set_search) = create_signal(String::new());
    let (page, set_page) = create_signal(1u32);

    const PER_PAGE: u32 = 25;

    let load_users = move || {
        set_loading.set(true);
        let search = search.get_untracked();
        let page = page.get_untracked();

        spawn_local(async move {
            match api::admin::list_users(Some(&search), page, PER_PAGE).await {
                Ok(response) => {
                    set_users.set(response.users);
                    set_total.set(response.total);
                }
                Err(e) => state.show_error(&e.to_string()),
            }
            set_loading.set(false);
        });
    };

    create_effect(move |_| load_users());

    let replace_user = move |updated: User| {
        set_users.update(|users| {
            if let Some(existing) = users.iter_mut().find(|u| u.id == updated.id) {
                *existing = updated;
            }
        });
    };

    let toggle_active = move |user: User| {
        let update = UserUpdate {
            is_active: Some(!user.is_active),
            ..Default::default()
        };
        spawn_local(async move {
            match api::admin::update_user(user.id, &update).await {
                Ok(updated) => replace_user(updated),
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    let toggle_role = move |user: User| {
        spawn_local(async move {
            let result = if user.is_admin() {
                api::admin::demote_user(user.id).await
            } else {
                api::admin::promote_user(user.id).await
            };
            match result {
                Ok(updated) => replace_user(updated),
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    let delete = move |user: User| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete user '{}'?", user.username))
                    .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match api::admin::delete_user(user.id).await {
                Ok(_) => {
                    set_users.update(|users| users.retain(|u| u.id != user.id));
                    state.show_success("User deleted");
                }
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_page.set(1);
        load_users();
    };

    view! {
        <div class="space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Admin"</h1>
                <p class="text-gray-400 mt-1">"User management and platform health"</p>
            </div>

            <PlatformStats />

            // User table
            <section class="bg-gray-800 rounded-xl p-6">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">"Users"</h2>

                    <form on:submit=on_search class="flex space-x-2">
                        <input
                            type="text"
                            placeholder="Search users..."
                            prop:value=move || search.get()
                            on:input=move |ev| set_search.set(event_target_value(&ev))
                            class="bg-gray-700 rounded-lg px-4 py-2 text-sm
                                   border border-gray-600 focus:border-orange-500 focus:outline-none"
                        />
                        <button
                            type="submit"
                            class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg text-sm font-medium transition-colors"
                        >
                            "Search"
                        </button>
                    </form>
                </div>

                {move || {
                    if loading.get() {
                        view! { <ListSkeleton count=5 /> }.into_view()
                    } else if users.get().is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm">"No users match."</p>
                        }.into_view()
                    } else {
                        view! {
                            <table class="w-full text-sm">
                                <thead>
                                    <tr class="text-left text-gray-400 border-b border-gray-700">
                                        <th class="pb-3">"User"</th>
                                        <th class="pb-3">"Email"</th>
                                        <th class="pb-3">"Role"</th>
                                        <th class="pb-3">"Status"</th>
                                        <th class="pb-3"></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {users.get().into_iter().map(|user| {
                                        let user_for_active = user.clone();
                                        let user_for_role = user.clone();
                                        let user_for_delete = user.clone();
                                        let is_admin = user.is_admin();
                                        let is_active = user.is_active;
                                        view! {
                                            <tr class="border-b border-gray-700 last:border-0">
                                                <td class="py-3 font-medium">{user.username.clone()}</td>
                                                <td class="py-3 text-gray-400">{user.email.clone()}</td>
                                                <td class="py-3">
                                                    <span class=if is_admin {
                                                        "bg-purple-600 text-xs px-2 py-0.5 rounded-full"
                                                    } else {
                                                        "bg-gray-600 text-xs px-2 py-0.5 rounded-full"
                                                    }>
                                                        {if is_admin { "admin" } else { "user" }}
                                                    </span>
                                                </td>
                                                <td class="py-3">
                                                    <span class=if is_active { "text-green-400" } else { "text-red-400" }>
                                                        {if is_active { "active" } else { "disabled" }}
                                                    </span>
                                                </td>
                                                <td class="py-3 text-right space-x-2">
                                                    <button
                                                        on:click=move |_| toggle_active(user_for_active.clone())
                                                        class="px-3 py-1.5 bg-gray-600 hover:bg-gray-500
                                                               rounded-lg text-xs font-medium transition-colors"
                                                    >
                                                        {if is_active { "Deactivate" } else { "Activate" }}
                                                    </button>
                                                    <button
                                                        on:click=move |_| toggle_role(user_for_role.clone())
                                                        class="px-3 py-1.5 bg-gray-600 hover:bg-gray-500
                                                               rounded-lg text-xs font-medium transition-colors"
                                                    >
                                                        {if is_admin { "Demote" } else { "Promote" }}
                                                    </button>
                                                    <button
                                                        on:click=move |_| delete(user_for_delete.clone())
                                                        class="px-3 py-1.5 bg-red-700 hover:bg-red-600
                                                               rounded-lg text-xs font-medium transition-colors"
                                                    >
                                                        "Delete"
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

                // Pagination
                <div class="flex items-center justify-between mt-4 text-sm text-gray-400">
                    <span>
                        {move || match total.get() {
                            Some(total) => format!("{} users total", total),
                            None => String::new(),
                        }}
                    </span>
                    <div class="space-x-2">
                        <button
                            on:click=move |_| {
                                if page.get_untracked() > 1 {
                                    set_page.update(|p| *p -= 1);
                                    load_users();
                                }
                            }
                            class="px-3 py-1.5 bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors"
                        >
                            "Prev"
                        </button>
                        <span>{move || format!("Page {}", page.get())}</span>
                        <button
                            on:click=move |_| {
                                set_page.update(|p| *p += 1);
                                load_users();
                            }
                            class="px-3 py-1.5 bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors"
                        >
                            "Next"
                        </button>
                    </div>
                </div>
            </section>

            <ActivityFeed />
        </div>
    }
}

/// Platform stat cards
#[component]
fn PlatformStats() -> impl IntoView {
    let (stats, set_stats) = create_signal(None::<AdminStats>);
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            match api::admin::stats().await {
                Ok(data) => set_stats.set(Some(data)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch stats: {}", e).into())
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <section>
            {move || {
                if loading.get() {
                    view! {
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                            <CardSkeleton />
                        </div>
                    }.into_view()
                } else {
                    match stats.get() {
                        Some(stats) => view! {
                            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                                <StatCard label="Total users" value=stats.total_users.to_string() />
                                <StatCard label="Active users" value=stats.active_users.to_string() />
                                <StatCard label="Admins" value=stats.admin_users.to_string() />
                                <StatCard
                                    label="Predictions today"
                                    value=stats.predictions_today.map(|n| n.to_string()).unwrap_or_else(|| "-".into())
                                />
                            </div>
                        }.into_view(),
                        None => view! {
                            <p class="text-gray-400 text-sm">"Stats unavailable."</p>
                        }.into_view(),
                    }
                }
            }}
        </section>
    }
}

/// Recent activity feed
#[component]
fn ActivityFeed() -> impl IntoView {
    let (entries, set_entries) = create_signal(Vec::<ActivityEntry>::new());

    create_effect(move |_| {
        spawn_local(async move {
            match api::admin::activity().await {
                Ok(data) => set_entries.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch activity: {}", e).into())
                }
            }
        });
    });

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Recent Activity"</h2>

            {move || {
                let entries = entries.get();
                if entries.is_empty() {
                    view! {
                        <p class="text-gray-400 text-sm">"No recent activity."</p>
                    }.into_view()
                } else {
                    entries.into_iter().take(10).map(|entry| view! {
                        <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0 text-sm">
                            <div>
                                <span class="font-medium">{entry.username}</span>
                                <span class="text-gray-400 ml-2">{entry.action}</span>
                            </div>
                            <span class="text-gray-500 text-xs">{entry.timestamp}</span>
                        </div>
                    }).collect_view()
                }
            }}
        </section>
    }
}
