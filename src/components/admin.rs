use crate::components::{EventPanel, PhotoPanel, StatePanel};
use crate::AppServices;
use dioxus::prelude::*;
use gallery_admin::{load_event_scope, load_events, AdminState, AdminTab, FormMessage};
use gallery_api::{EntityId, GalleryClient, Session};
use std::sync::Arc;

pub(crate) const INPUT_STYLE: &str =
    "width: 100%; padding: 8px; border: 1px solid #ccc; border-radius: 6px; box-sizing: border-box;";
pub(crate) const SECONDARY_BUTTON: &str = "padding: 4px 12px; background: #9ca3af; color: white; border: none; border-radius: 6px; cursor: pointer;";
pub(crate) const DELETE_BUTTON: &str = "padding: 4px 12px; background: #dc2626; color: white; border: none; border-radius: 6px; cursor: pointer;";

fn tab_style(active: bool, color: &str) -> String {
    if active {
        format!(
            "padding: 8px 16px; border: none; border-radius: 6px; cursor: pointer; background: {}; color: white;",
            color
        )
    } else {
        "padding: 8px 16px; border: none; border-radius: 6px; cursor: pointer; background: #e5e7eb; color: #333;"
            .to_string()
    }
}

#[component]
pub fn AdminScreen(session: Signal<Session>) -> Element {
    let services = use_context::<AppServices>();
    let mut admin = use_signal(AdminState::new);

    // Reload the event list on mount and whenever the session changes
    let client = services.client.clone();
    use_effect(move || {
        let session = session();
        let client = client.clone();
        spawn(async move {
            let result = load_events(&*client, &session).await;
            admin.write().apply_events(result);
        });
    });

    let tab = admin.read().tab;

    rsx! {
        div { style: "padding: 16px; max-width: 900px; margin: 0 auto;",
            h1 { style: "text-align: center; margin: 24px 0; font-size: 28px; font-weight: 700; color: #333;",
                "Admin Panel"
            }

            if !session.read().is_authenticated() {
                div { style: "background: #fff7e6; color: #8a5a00; padding: 8px 12px; border-radius: 6px; margin-bottom: 16px; font-size: 14px;",
                    "You are not signed in. Changes will be rejected by the server."
                }
            }

            div { style: "display: flex; justify-content: center; gap: 8px; margin-bottom: 24px;",
                button {
                    style: tab_style(tab == AdminTab::Photo, "#9333ea"),
                    onclick: move |_| admin.write().set_tab(AdminTab::Photo),
                    "Upload Photo"
                }
                button {
                    style: tab_style(tab == AdminTab::Event, "#2563eb"),
                    onclick: move |_| admin.write().set_tab(AdminTab::Event),
                    "Upload Event"
                }
                button {
                    style: tab_style(tab == AdminTab::State, "#16a34a"),
                    onclick: move |_| admin.write().set_tab(AdminTab::State),
                    "Upload State"
                }
            }

            match tab {
                AdminTab::Event => rsx! {
                    EventPanel { admin, session }
                },
                AdminTab::State => rsx! {
                    StatePanel { admin, session }
                },
                AdminTab::Photo => rsx! {
                    PhotoPanel { admin, session }
                },
            }
        }
    }
}

/// Select the event chosen in a dropdown and fetch its states and photos
pub(crate) fn change_selected_event(
    mut admin: Signal<AdminState>,
    session: Signal<Session>,
    client: Arc<GalleryClient>,
    value: String,
) {
    let Some(event_id) = admin.write().select_event(EntityId::new(value)) else {
        return;
    };
    let session = session.read().clone();
    spawn(async move {
        let scope = load_event_scope(&*client, &session, &event_id).await;
        admin.write().apply_event_scope(&event_id, scope);
    });
}

/// Dropdown over the cached event list bound to the selected event
#[component]
pub fn EventSelect(admin: Signal<AdminState>, session: Signal<Session>) -> Element {
    let services = use_context::<AppServices>();
    let state = admin.read();
    let selected = state
        .selected_event
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    rsx! {
        select {
            style: INPUT_STYLE,
            value: "{selected}",
            onchange: move |e| {
                change_selected_event(admin, session, services.client.clone(), e.value())
            },
            option { value: "", "Select Event" }
            for event in state.events.iter() {
                option {
                    key: "{event.id}",
                    value: "{event.id}",
                    selected: selected == event.id.as_str(),
                    "{event.name}"
                }
            }
        }
    }
}

/// Success or error line of one form
#[component]
pub fn FormMessageLine(#[props(default)] message: Option<FormMessage>) -> Element {
    match message {
        Some(msg) => rsx! {
            p {
                style: if msg.is_error() {
                    "margin: 8px 0; font-size: 14px; color: #dc2626;"
                } else {
                    "margin: 8px 0; font-size: 14px; color: #16a34a;"
                },
                "{msg.text()}"
            }
        },
        None => rsx! {},
    }
}
