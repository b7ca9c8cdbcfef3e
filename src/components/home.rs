use crate::{AppServices, Screen};
use dioxus::prelude::*;
use gallery_api::{Event, GalleryBackend, Session};

#[component]
pub fn HomeScreen(on_navigate: EventHandler<Screen>) -> Element {
    let services = use_context::<AppServices>();
    let events = use_resource(move || {
        let client = services.client.clone();
        async move {
            let result = client.list::<Event>(&Session::anonymous(), None).await;
            if let Err(e) = &result {
                log::error!("Failed to load events: {}", e);
            }
            result
        }
    });

    rsx! {
        div { style: "padding: 16px; max-width: 960px; margin: 0 auto;",
            h1 { style: "text-align: center; margin: 40px 0 24px 0; font-size: 28px; font-weight: 700; color: #333;",
                "Events"
            }
            match &*events.read() {
                None => rsx! {
                    p { style: "text-align: center; color: #999;", "Loading..." }
                },
                Some(Err(_)) => rsx! {
                    p { style: "text-align: center; color: #c00;", "Could not load events." }
                },
                Some(Ok(list)) if list.is_empty() => rsx! {
                    p { style: "text-align: center; color: #999;", "No events yet" }
                },
                Some(Ok(list)) => rsx! {
                    div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px;",
                        for event in list.iter().cloned() {
                            EventCard {
                                key: "{event.id}",
                                event: event.clone(),
                                on_click: {
                                    let target = Screen::EventDetail {
                                        event_id: event.id.clone(),
                                        event_name: event.name.clone(),
                                    };
                                    move |_| on_navigate.call(target.clone())
                                },
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
pub fn EventCard(event: Event, on_click: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "background: #f3f4f6; border-radius: 12px; overflow: hidden; cursor: pointer; box-shadow: 0 1px 3px rgba(0,0,0,0.1); text-align: center;",
            onclick: move |_| on_click.call(()),
            if !event.cover_image.is_empty() {
                img {
                    src: "{event.cover_image}",
                    alt: "{event.name}",
                    style: "width: 100%; height: 140px; object-fit: cover;",
                }
            }
            h2 { style: "margin: 0; padding: 16px; font-size: 20px; font-weight: 700;",
                "{event.name}"
            }
        }
    }
}
