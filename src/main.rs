use dioxus::prelude::*;
use gallery_api::{EntityId, GalleryClient, GalleryConfig, Session};
use std::sync::Arc;

mod components;
mod error;
mod picker;

use components::{
    AdminScreen, EventDetailScreen, HomeScreen, LoginScreen, NavigationBar, StateDetailScreen,
};
use error::AppError;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    dioxus::launch(App);
}

/// Screen navigation for the app
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Home,
    EventDetail {
        event_id: EntityId,
        event_name: String,
    },
    StateDetail {
        event_id: EntityId,
        state_id: EntityId,
        state_name: String,
    },
    Admin,
    Login,
}

/// Shared across all screens through the context
#[derive(Clone)]
pub struct AppServices {
    pub client: Arc<GalleryClient>,
    pub config: GalleryConfig,
}

fn init_services() -> Result<AppServices, AppError> {
    let config = GalleryConfig::load()?;
    let client = GalleryClient::new(&config)?;
    log::info!("Using gallery API at {}", client.base_url());
    Ok(AppServices {
        client: Arc::new(client),
        config,
    })
}

#[component]
fn App() -> Element {
    let mut current_screen = use_signal(|| Screen::Home);
    let session = use_signal(Session::anonymous);
    let services = use_hook(|| {
        init_services().map_err(|e| {
            log::error!("Startup failed: {}", e);
            e.user_message()
        })
    });

    // The startup result never changes, so the hook order below is stable
    let services = match services {
        Ok(services) => services,
        Err(message) => {
            return rsx! {
                div { style: "padding: 16px; font-family: sans-serif; color: #c00;",
                    "{message}"
                }
            };
        }
    };
    use_context_provider(|| services);

    rsx! {
        div { style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif;",

            NavigationBar {
                current_screen: current_screen(),
                session,
                on_navigate: move |screen| current_screen.set(screen),
            }

            // Main Content
            div { style: "flex: 1; overflow-y: auto;",
                match current_screen() {
                    Screen::Home => rsx! {
                        HomeScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::EventDetail { event_id, event_name } => rsx! {
                        EventDetailScreen {
                            event_id,
                            event_name,
                            on_navigate: move |s| current_screen.set(s),
                        }
                    },
                    Screen::StateDetail { event_id, state_id, state_name } => rsx! {
                        StateDetailScreen {
                            event_id,
                            state_id,
                            state_name,
                            on_navigate: move |s| current_screen.set(s),
                        }
                    },
                    Screen::Admin => rsx! {
                        AdminScreen { session }
                    },
                    Screen::Login => rsx! {
                        LoginScreen { session, on_navigate: move |s| current_screen.set(s) }
                    },
                }
            }
        }
    }
}
