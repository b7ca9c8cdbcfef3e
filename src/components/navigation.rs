use crate::Screen;
use dioxus::prelude::*;
use gallery_api::Session;

const TAB_ACTIVE: &str = "padding: 8px 12px; border: none; border-bottom: 2px solid #0066cc; background: none; cursor: pointer; font-size: 14px; color: #111;";
const TAB_IDLE: &str = "padding: 8px 12px; border: none; border-bottom: 2px solid transparent; background: none; cursor: pointer; font-size: 14px; color: #666;";

#[component]
pub fn NavigationBar(
    current_screen: Screen,
    mut session: Signal<Session>,
    on_navigate: EventHandler<Screen>,
) -> Element {
    let username = session.read().username().map(str::to_string);
    let on_public_page = matches!(
        current_screen,
        Screen::Home | Screen::EventDetail { .. } | Screen::StateDetail { .. }
    );

    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; padding: 10px 16px; background: #ffffff; border-bottom: 1px solid #ddd;",

            button {
                style: "border: none; background: none; font-size: 20px; font-weight: 700; color: #333; cursor: pointer;",
                onclick: move |_| on_navigate.call(Screen::Home),
                "Gallery"
            }

            div { style: "display: flex; gap: 8px;",
                button {
                    style: if on_public_page { TAB_ACTIVE } else { TAB_IDLE },
                    onclick: move |_| on_navigate.call(Screen::Home),
                    "Home"
                }
                button {
                    style: if current_screen == Screen::Admin { TAB_ACTIVE } else { TAB_IDLE },
                    onclick: move |_| on_navigate.call(Screen::Admin),
                    "Admin"
                }
                if username.is_none() {
                    button {
                        style: if current_screen == Screen::Login { TAB_ACTIVE } else { TAB_IDLE },
                        onclick: move |_| on_navigate.call(Screen::Login),
                        "Login"
                    }
                }
            }

            if let Some(name) = username {
                div { style: "display: flex; align-items: center; gap: 12px;",
                    span { style: "font-size: 14px; color: #555;",
                        "Welcome, "
                        span { style: "font-weight: 600;", "{name}" }
                    }
                    button {
                        style: "padding: 4px 12px; background: #dc2626; color: white; border: none; border-radius: 6px; font-size: 14px; cursor: pointer;",
                        onclick: move |_| {
                            session.write().sign_out();
                            on_navigate.call(Screen::Home);
                        },
                        "Logout"
                    }
                }
            } else {
                div {}
            }
        }
    }
}
