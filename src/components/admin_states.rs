use crate::components::admin::{
    EventSelect, FormMessageLine, DELETE_BUTTON, INPUT_STYLE, SECONDARY_BUTTON,
};
use crate::AppServices;
use dioxus::prelude::*;
use gallery_admin::{states, AdminState};
use gallery_api::{EntityId, Session};

#[component]
pub fn StatePanel(mut admin: Signal<AdminState>, session: Signal<Session>) -> Element {
    let services = use_context::<AppServices>();
    let state = admin.read();
    let form = state.state_form.clone();

    let submit = {
        let client = services.client.clone();
        move |_: MouseEvent| {
            let Some(draft) = admin.write().prepare_state_create() else {
                return;
            };
            let client = client.clone();
            let session = session.read().clone();
            spawn(async move {
                let result = states::create_state(&*client, &session, &draft).await;
                admin.write().complete_state_create(&draft, result);
            });
        }
    };

    let save = {
        let client = services.client.clone();
        move |_: MouseEvent| {
            let Some(draft) = admin.write().prepare_state_update() else {
                return;
            };
            let client = client.clone();
            let session = session.read().clone();
            spawn(async move {
                let result = states::update_state(&*client, &session, &draft).await;
                admin.write().complete_state_update(&draft, result);
            });
        }
    };

    let delete = {
        let client = services.client.clone();
        move |id: EntityId| {
            let (id, event_id) = admin.write().prepare_state_delete(&id);
            let client = client.clone();
            let session = session.read().clone();
            spawn(async move {
                let result =
                    states::delete_state(&*client, &session, &id, event_id.as_ref()).await;
                admin
                    .write()
                    .complete_state_delete(&id, event_id.as_ref(), result);
            });
        }
    };

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 12px; padding: 16px; background: white; border: 1px solid #e0e0e0; border-radius: 8px;",
            h2 { style: "margin: 0; font-size: 20px; font-weight: 700;", "Manage State" }
            EventSelect { admin, session }
            input {
                r#type: "text",
                placeholder: "State Name",
                style: INPUT_STYLE,
                value: "{form.name}",
                oninput: move |e| admin.write().set_state_name(e.value()),
            }
            button {
                style: "align-self: flex-start; padding: 8px 16px; background: #16a34a; color: white; border: none; border-radius: 6px; cursor: pointer;",
                onclick: submit,
                "Upload State"
            }
            FormMessageLine { message: form.message.clone() }

            div { style: "display: flex; flex-direction: column; gap: 8px; margin-top: 8px;",
                for item in state.states.iter().cloned() {
                    div {
                        key: "{item.id}",
                        style: "display: flex; align-items: center; gap: 8px; padding: 8px; border: 1px solid #e0e0e0; border-radius: 6px;",
                        if form.is_editing(&item.id) {
                            input {
                                r#type: "text",
                                style: INPUT_STYLE,
                                value: "{form.name}",
                                oninput: move |e| admin.write().set_state_name(e.value()),
                            }
                            button {
                                style: "padding: 4px 12px; background: #16a34a; color: white; border: none; border-radius: 6px; cursor: pointer;",
                                onclick: save.clone(),
                                "Save"
                            }
                            button {
                                style: SECONDARY_BUTTON,
                                onclick: move |_| admin.write().cancel_state_edit(),
                                "Cancel"
                            }
                        } else {
                            span { style: "flex: 1; font-size: 16px;", "{item.name}" }
                            button {
                                style: "padding: 4px 12px; background: #2563eb; color: white; border: none; border-radius: 6px; cursor: pointer;",
                                onclick: {
                                    let item = item.clone();
                                    move |_| admin.write().begin_state_edit(&item)
                                },
                                "Edit"
                            }
                            button {
                                style: DELETE_BUTTON,
                                onclick: {
                                    let id = item.id.clone();
                                    let mut delete = delete.clone();
                                    move |_| delete(id.clone())
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}
