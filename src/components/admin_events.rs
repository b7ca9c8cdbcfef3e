use crate::components::admin::{FormMessageLine, DELETE_BUTTON, INPUT_STYLE, SECONDARY_BUTTON};
use crate::{picker, AppServices};
use dioxus::prelude::*;
use dioxus_gallery::format_display_date;
use gallery_admin::{events, AdminState, FormMessage};
use gallery_api::{EntityId, PendingFile, Session};

/// Pick one cover image and hand it to `apply`; picker failures land on the event form
fn pick_cover(
    mut admin: Signal<AdminState>,
    apply: impl FnOnce(&mut AdminState, PendingFile) + 'static,
) {
    spawn(async move {
        match picker::pick_image().await {
            Ok(Some(file)) => apply(&mut *admin.write(), file),
            Ok(None) => {}
            Err(e) => {
                log::error!("Cover image selection failed: {}", e);
                admin.write().event_form.message = Some(FormMessage::Error(e.user_message()));
            }
        }
    });
}

#[component]
pub fn EventPanel(mut admin: Signal<AdminState>, session: Signal<Session>) -> Element {
    let services = use_context::<AppServices>();
    let state = admin.read();
    let form = state.event_form.clone();
    let image_name = form.image.as_ref().map(|f| f.name.clone());

    let submit = {
        let client = services.client.clone();
        move |_: MouseEvent| {
            let Some(draft) = admin.write().prepare_event_create() else {
                return;
            };
            let client = client.clone();
            let session = session.read().clone();
            spawn(async move {
                let result = events::create_event(&*client, &session, draft).await;
                admin.write().complete_event_create(result);
            });
        }
    };

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 24px;",
            div { style: "display: flex; flex-direction: column; gap: 12px; padding: 16px; background: white; border: 1px solid #e0e0e0; border-radius: 8px;",
                h2 { style: "margin: 0; font-size: 20px; font-weight: 700;", "Upload Event" }
                input {
                    r#type: "text",
                    placeholder: "Event Name",
                    style: INPUT_STYLE,
                    value: "{form.name}",
                    oninput: move |e| admin.write().set_event_name(e.value()),
                }
                div { style: "display: flex; align-items: center; gap: 12px;",
                    button {
                        style: SECONDARY_BUTTON,
                        onclick: move |_| pick_cover(admin, |s, file| s.set_event_image(Some(file))),
                        "Choose cover image"
                    }
                    span { style: "font-size: 14px; color: #666;",
                        {image_name.unwrap_or_else(|| "No image selected".to_string())}
                    }
                }
                button {
                    style: "align-self: flex-start; padding: 8px 16px; background: #2563eb; color: white; border: none; border-radius: 6px; cursor: pointer;",
                    onclick: submit,
                    "Upload Event"
                }
                FormMessageLine { message: form.message.clone() }
            }

            div { style: "display: flex; flex-direction: column; gap: 12px;",
                for event in state.events.iter().cloned() {
                    div {
                        key: "{event.id}",
                        style: "display: flex; gap: 16px; align-items: center; padding: 12px; background: white; border: 1px solid #e0e0e0; border-radius: 8px;",
                        img {
                            src: "{event.cover_image}",
                            alt: "{event.name}",
                            style: "width: 96px; height: 64px; object-fit: cover; border-radius: 6px;",
                        }
                        match form.editing.as_ref().filter(|edit| edit.id == event.id) {
                            Some(edit) => rsx! {
                                EventEditRow {
                                    admin,
                                    session,
                                    name: edit.name.clone(),
                                    image_name: edit.image.as_ref().map(|f| f.name.clone()),
                                }
                            },
                            None => rsx! {
                                EventRow { admin, session, event_id: event.id.clone(), name: event.name.clone(), date: event.date.clone() }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn EventRow(
    mut admin: Signal<AdminState>,
    session: Signal<Session>,
    event_id: EntityId,
    name: String,
    date: String,
) -> Element {
    let services = use_context::<AppServices>();
    let edit_id = event_id.clone();

    rsx! {
        div { style: "flex: 1;",
            h3 { style: "margin: 0; font-size: 18px; font-weight: 600;", "{name}" }
            p { style: "margin: 4px 0 0 0; font-size: 13px; color: #666;", "{format_display_date(&date)}" }
        }
        button {
            style: "padding: 4px 12px; background: #3b82f6; color: white; border: none; border-radius: 6px; cursor: pointer;",
            onclick: move |_| {
                let mut state = admin.write();
                let event = state.events.iter().find(|e| e.id == edit_id).cloned();
                if let Some(event) = event {
                    state.begin_event_edit(&event);
                }
            },
            "Edit"
        }
        button {
            style: DELETE_BUTTON,
            onclick: move |_| {
                let id = admin.write().prepare_event_delete(&event_id);
                let client = services.client.clone();
                let session = session.read().clone();
                spawn(async move {
                    let result = events::delete_event(&*client, &session, &id).await;
                    admin.write().complete_event_delete(&id, result);
                });
            },
            "Delete"
        }
    }
}

#[component]
fn EventEditRow(
    mut admin: Signal<AdminState>,
    session: Signal<Session>,
    name: String,
    image_name: Option<String>,
) -> Element {
    let services = use_context::<AppServices>();

    rsx! {
        div { style: "flex: 1; display: flex; flex-direction: column; gap: 8px;",
            input {
                r#type: "text",
                style: INPUT_STYLE,
                value: "{name}",
                oninput: move |e| admin.write().set_edit_event_name(e.value()),
            }
            div { style: "display: flex; align-items: center; gap: 8px;",
                button {
                    style: SECONDARY_BUTTON,
                    onclick: move |_| pick_cover(admin, |s, file| s.set_edit_event_image(Some(file))),
                    "Replace cover"
                }
                span { style: "font-size: 13px; color: #666;",
                    {image_name.unwrap_or_else(|| "Keeping current cover".to_string())}
                }
            }
            div { style: "display: flex; gap: 8px;",
                button {
                    style: "padding: 4px 12px; background: #16a34a; color: white; border: none; border-radius: 6px; cursor: pointer;",
                    onclick: move |_| {
                        let Some(draft) = admin.write().prepare_event_update() else {
                            return;
                        };
                        let client = services.client.clone();
                        let session = session.read().clone();
                        spawn(async move {
                            let result = events::update_event(&*client, &session, draft).await;
                            admin.write().complete_event_update(result);
                        });
                    },
                    "Save"
                }
                button {
                    style: SECONDARY_BUTTON,
                    onclick: move |_| admin.write().cancel_event_edit(),
                    "Cancel"
                }
            }
        }
    }
}
