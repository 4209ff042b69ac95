//! Chat Page
//!
//! Conversation with the analysis assistant: history, suggestion chips,
//! send, and clear.

use leptos::*;

use crate::api;
use crate::api::chat::{ChatMessage, MessageRole};
use crate::state::global::GlobalState;

/// Chat page component
#[component]
pub fn Chat() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (messages, set_messages) = create_signal(Vec::<ChatMessage>::new());
    let (suggestions, set_suggestions) = create_signal(Vec::<String>::new());
    let (draft, set_draft) = create_signal(String::new());
    let (sending, set_sending) = create_signal(false);

    // Load history and suggestion chips concurrently on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::chat::history().await {
                Ok(data) => set_messages.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch chat history: {}", e).into())
                }
            }
        });

        spawn_local(async move {
            match api::chat::suggestions().await {
                Ok(data) => set_suggestions.set(data),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch suggestions: {}", e).into())
                }
            }
        });
    });

    let send = move |text: String| {
        let text = text.trim().to_string();
        if text.is_empty() || sending.get_untracked() {
            return;
        }

        set_messages.update(|messages| messages.push(ChatMessage::local_user(&text)));
        set_draft.set(String::new());
        set_sending.set(true);

        spawn_local(async move {
            match api::chat::send_message(&text).await {
                Ok(reply) => set_messages.update(|messages| messages.push(reply)),
                Err(e) => state.show_error(&e.to_string()),
            }
            set_sending.set(false);
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        send(draft.get());
    };

    let clear = move |_| {
        spawn_local(async move {
            match api::chat::clear().await {
                Ok(_) => {
                    set_messages.set(Vec::new());
                    state.show_success("Conversation cleared");
                }
                Err(e) => state.show_error(&e.to_string()),
            }
        });
    };

    view! {
        <div class="space-y-6 max-w-3xl mx-auto">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Chat"</h1>
                    <p class="text-gray-400 mt-1">"Ask the analysis assistant anything"</p>
                </div>

                <button
                    on:click=clear
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                >
                    "Clear history"
                </button>
            </div>

            // Message thread
            <section class="bg-gray-800 rounded-xl p-6 min-h-[40vh] space-y-4">
                {move || {
                    let messages = messages.get();
                    if messages.is_empty() {
                        view! {
                            <p class="text-gray-400 text-sm text-center py-12">
                                "No messages yet. Try one of the suggestions below."
                            </p>
                        }.into_view()
                    } else {
                        messages.into_iter().map(|message| {
                            let mine = message.role == MessageRole::User;
                            view! {
                                <div class=if mine { "flex justify-end" } else { "flex justify-start" }>
                                    <div class=if mine {
                                        "bg-orange-600 rounded-xl rounded-br-none px-4 py-2 max-w-[80%]"
                                    } else {
                                        "bg-gray-700 rounded-xl rounded-bl-none px-4 py-2 max-w-[80%]"
                                    }>
                                        <p class="text-sm leading-relaxed whitespace-pre-wrap">{message.content}</p>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }
                }}

                // Typing indicator
                {move || sending.get().then(|| view! {
                    <div class="flex justify-start">
                        <div class="bg-gray-700 rounded-xl rounded-bl-none px-4 py-3">
                            <div class="loading-spinner w-4 h-4" />
                        </div>
                    </div>
                })}
            </section>

            // Suggestion chips
            {move || {
                let suggestions = suggestions.get();
                (!suggestions.is_empty()).then(|| view! {
                    <div class="flex flex-wrap gap-2">
                        {suggestions.into_iter().map(|suggestion| {
                            let text = suggestion.clone();
                            view! {
                                <button
                                    on:click=move |_| send(text.clone())
                                    class="px-3 py-1 bg-gray-700 hover:bg-gray-600 rounded-full text-xs text-gray-300 transition-colors"
                                >
                                    {suggestion}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                })
            }}

            // Composer
            <form on:submit=on_submit class="flex space-x-2">
                <input
                    type="text"
                    placeholder="Ask about a match or a ticker..."
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-orange-500 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || sending.get() || draft.get().trim().is_empty()
                    class="px-6 py-3 bg-orange-600 hover:bg-orange-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors"
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}
