use crate::error::AppError;
use crate::Screen;
use dioxus::prelude::*;
use gallery_api::{Credentials, Session};

/// Both fields are required; surrounding whitespace is dropped
pub fn credentials_from_input(username: &str, token: &str) -> Result<Credentials, AppError> {
    let username = username.trim();
    let token = token.trim();
    if username.is_empty() || token.is_empty() {
        return Err(AppError::Validation(
            "Username and token are required.".to_string(),
        ));
    }
    Ok(Credentials {
        username: username.to_string(),
        token: token.to_string(),
    })
}

#[component]
pub fn LoginScreen(mut session: Signal<Session>, on_navigate: EventHandler<Screen>) -> Element {
    let mut username = use_signal(String::new);
    let mut token = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let mut sign_in = move || match credentials_from_input(&username(), &token()) {
        Ok(credentials) => {
            log::info!("Signed in as {}", credentials.username);
            session.set(Session::signed_in(credentials));
            on_navigate.call(Screen::Admin);
        }
        Err(e) => error.set(Some(e.user_message())),
    };

    rsx! {
        div { style: "padding: 16px; max-width: 400px; margin: 48px auto; background: white; border: 1px solid #e0e0e0; border-radius: 12px;",
            h1 { style: "margin: 0 0 16px 0; font-size: 22px; font-weight: 700; color: #333;",
                "Admin Login"
            }
            if let Some(msg) = error() {
                div { style: "background: #ffe6e6; color: #a00; padding: 8px 12px; border-radius: 6px; margin-bottom: 12px; font-size: 14px;",
                    "{msg}"
                }
            }
            div { style: "display: flex; flex-direction: column; gap: 12px;",
                input {
                    r#type: "text",
                    placeholder: "Username",
                    value: "{username}",
                    style: "padding: 8px; border: 1px solid #ccc; border-radius: 6px;",
                    oninput: move |e| username.set(e.value()),
                }
                input {
                    r#type: "password",
                    placeholder: "API token",
                    value: "{token}",
                    style: "padding: 8px; border: 1px solid #ccc; border-radius: 6px;",
                    oninput: move |e| token.set(e.value()),
                    onkeydown: move |e| {
                        if e.key() == Key::Enter {
                            sign_in();
                        }
                    },
                }
                button {
                    style: "padding: 10px; background: #0066cc; color: white; border: none; border-radius: 6px; cursor: pointer; font-size: 15px;",
                    onclick: move |_| sign_in(),
                    "Login"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_are_trimmed() {
        let creds = credentials_from_input("  admin ", " secret\n").unwrap();
        assert_eq!(creds.username, "admin");
        assert_eq!(creds.token, "secret");
    }

    #[test]
    fn test_both_fields_required() {
        assert!(matches!(
            credentials_from_input("admin", "  "),
            Err(AppError::Validation(_))
        ));
        assert!(credentials_from_input("", "t").is_err());
    }
}
