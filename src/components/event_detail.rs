use crate::{AppServices, Screen};
use dioxus::prelude::*;
use gallery_api::{EntityId, GalleryBackend, Session, State};

#[component]
pub fn EventDetailScreen(
    event_id: EntityId,
    event_name: String,
    on_navigate: EventHandler<Screen>,
) -> Element {
    let services = use_context::<AppServices>();
    let scoped_event = event_id.clone();
    let states = use_resource(use_reactive!(|scoped_event| {
        let client = services.client.clone();
        async move {
            let result = client
                .list::<State>(&Session::anonymous(), Some(&scoped_event))
                .await;
            if let Err(e) = &result {
                log::error!("Failed to load states of {}: {}", scoped_event, e);
            }
            result
        }
    }));

    rsx! {
        div { style: "padding: 16px; max-width: 960px; margin: 0 auto;",
            button {
                style: "border: none; background: none; color: #0066cc; cursor: pointer; font-size: 14px; padding: 0;",
                onclick: move |_| on_navigate.call(Screen::Home),
                "< All events"
            }
            h1 { style: "text-align: center; margin: 24px 0; font-size: 26px; font-weight: 700; color: #333;",
                "{event_name}"
            }
            match &*states.read() {
                None => rsx! {
                    p { style: "text-align: center; color: #999;", "Loading..." }
                },
                Some(Err(_)) => rsx! {
                    p { style: "text-align: center; color: #c00;", "Could not load states." }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { style: "text-align: center; color: #999;", "No states for this event" }
                },
                Some(Ok(list)) => rsx! {
                    div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px;",
                        for state in list.iter().cloned() {
                            div {
                                key: "{state.id}",
                                style: "padding: 24px; background: white; border: 1px solid #e0e0e0; border-radius: 16px; text-align: center; cursor: pointer;",
                                onclick: {
                                    let target = Screen::StateDetail {
                                        event_id: event_id.clone(),
                                        state_id: state.id.clone(),
                                        state_name: state.name.clone(),
                                    };
                                    move |_| on_navigate.call(target.clone())
                                },
                                h3 { style: "margin: 0; font-size: 18px; font-weight: 600; color: #333;",
                                    "{state.name}"
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}
