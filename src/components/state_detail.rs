use crate::{AppServices, Screen};
use dioxus::prelude::*;
use dioxus_gallery::{GalleryItem, PhotoGrid};
use gallery_api::{EntityId, GalleryBackend, Photo, Session};

/// Photos of the event that belong to `state_id`
pub fn photos_in_state(photos: &[Photo], state_id: &EntityId) -> Vec<GalleryItem> {
    photos
        .iter()
        .filter(|p| &p.state_id == state_id)
        .map(|p| GalleryItem {
            id: p.id.to_string(),
            url: p.url.clone(),
            date: p.date.clone(),
        })
        .collect()
}

#[component]
pub fn StateDetailScreen(
    event_id: EntityId,
    state_id: EntityId,
    state_name: String,
    on_navigate: EventHandler<Screen>,
) -> Element {
    let services = use_context::<AppServices>();
    let scoped_event = event_id.clone();
    let photos = use_resource(use_reactive!(|scoped_event| {
        let client = services.client.clone();
        async move {
            let result = client
                .list::<Photo>(&Session::anonymous(), Some(&scoped_event))
                .await;
            if let Err(e) = &result {
                log::error!("Failed to load photos of {}: {}", scoped_event, e);
            }
            result
        }
    }));

    rsx! {
        div { style: "padding: 16px; max-width: 1100px; margin: 0 auto;",
            button {
                style: "border: none; background: none; color: #0066cc; cursor: pointer; font-size: 14px; padding: 0;",
                onclick: move |_| on_navigate.call(Screen::Home),
                "< All events"
            }
            h1 { style: "margin: 24px 0; font-size: 24px; font-weight: 700; color: #333;",
                "{state_name}"
            }
            match &*photos.read() {
                None => rsx! {
                    p { style: "color: #999;", "Loading..." }
                },
                Some(Err(_)) => rsx! {
                    p { style: "color: #c00;", "Could not load photos." }
                },
                Some(Ok(list)) => rsx! {
                    PhotoGrid { items: photos_in_state(list, &state_id) }
                },
            }
        }
    }
}
