use crate::components::admin::{EventSelect, FormMessageLine, INPUT_STYLE, SECONDARY_BUTTON};
use crate::{picker, AppServices};
use dioxus::prelude::*;
use dioxus_gallery::{Gallery, GalleryItem};
use gallery_admin::{photos, upload, AdminState, FormMessage};
use gallery_api::{EntityId, Session};

#[component]
pub fn PhotoPanel(mut admin: Signal<AdminState>, session: Signal<Session>) -> Element {
    let services = use_context::<AppServices>();
    let mut uploading = use_signal(|| false);
    let state = admin.read();
    let form = state.photo_form.clone();
    let selected_state = state
        .selected_state
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();
    let items: Vec<GalleryItem> = state
        .photos
        .iter()
        .map(|p| GalleryItem {
            id: p.id.to_string(),
            url: p.url.clone(),
            date: p.date.clone(),
        })
        .collect();

    let submit = {
        let client = services.client.clone();
        let concurrency = services.config.upload_concurrency;
        move |_: MouseEvent| {
            let Some(batch) = admin.write().prepare_photo_upload() else {
                return;
            };
            let client = client.clone();
            let session = session.read().clone();
            let event_id = batch.event_id.clone();
            uploading.set(true);
            spawn(async move {
                let report = upload::upload_photo_batch(client, session, batch, concurrency).await;
                admin.write().complete_photo_upload(&event_id, report);
                uploading.set(false);
            });
        }
    };

    let delete = {
        let client = services.client.clone();
        move |id: String| {
            let Some(id) = EntityId::new(id) else {
                return;
            };
            let id = admin.write().prepare_photo_delete(&id);
            let client = client.clone();
            let session = session.read().clone();
            spawn(async move {
                let result = photos::delete_photo(&*client, &session, &id).await;
                admin.write().complete_photo_delete(&id, result);
            });
        }
    };

    let pick = move |_: MouseEvent| {
        spawn(async move {
            match picker::pick_images().await {
                Ok(files) if files.is_empty() => {}
                Ok(files) => admin.write().set_photo_files(files),
                Err(e) => {
                    log::error!("Photo selection failed: {}", e);
                    admin.write().photo_form.message = Some(FormMessage::Error(e.user_message()));
                }
            }
        });
    };

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 12px; padding: 16px; background: white; border: 1px solid #e0e0e0; border-radius: 8px;",
            h2 { style: "margin: 0; font-size: 20px; font-weight: 700;", "Upload Photo" }
            EventSelect { admin, session }
            select {
                style: INPUT_STYLE,
                value: "{selected_state}",
                onchange: move |e| admin.write().select_state(EntityId::new(e.value())),
                option { value: "", "Select State" }
                for item in state.states.iter() {
                    option {
                        key: "{item.id}",
                        value: "{item.id}",
                        selected: selected_state == item.id.as_str(),
                        "{item.name}"
                    }
                }
            }
            div { style: "display: flex; align-items: center; gap: 12px;",
                button { style: SECONDARY_BUTTON, onclick: pick, "Choose photos" }
                span { style: "font-size: 14px; color: #666;",
                    if form.files.is_empty() {
                        "No photos selected"
                    } else {
                        "{form.files.len()} photo(s) selected"
                    }
                }
            }
            button {
                style: "align-self: flex-start; padding: 8px 16px; background: #9333ea; color: white; border: none; border-radius: 6px; cursor: pointer;",
                disabled: uploading(),
                onclick: submit,
                if uploading() {
                    "Uploading..."
                } else {
                    "Upload Photo(s)"
                }
            }
            FormMessageLine { message: form.message.clone() }

            if !items.is_empty() {
                h3 { style: "margin: 16px 0 8px 0; font-size: 18px; font-weight: 600;",
                    "Last Uploaded Photos"
                }
                Gallery { items, on_delete: delete }
            }
        }
    }
}
