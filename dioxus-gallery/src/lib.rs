use dioxus::prelude::*;

pub mod filter;

pub use filter::{format_display_date, share_link, DateRange, Selection};

/// Represents a single photo in a grid
#[derive(Clone, PartialEq, Debug)]
pub struct GalleryItem {
    /// Unique identifier for the item
    pub id: String,
    /// Remote image URL
    pub url: String,
    /// Upload date (`YYYY-MM-DD` or RFC 3339)
    pub date: String,
}

/// Photo grid with date filter, multi-select sharing and a lightbox
///
/// Filtering only changes what is shown; `items` is never modified.
///
/// # Example
/// ```rust,ignore
/// PhotoGrid {
///     items: photos.iter().map(|p| GalleryItem {
///         id: p.id.to_string(),
///         url: p.url.clone(),
///         date: p.date.clone(),
///     }).collect(),
/// }
/// ```
#[component]
pub fn PhotoGrid(items: Vec<GalleryItem>) -> Element {
    let mut range = use_signal(DateRange::default);
    let mut selection = use_signal(Selection::default);
    let mut fullscreen = use_signal(|| None::<String>);

    let today = chrono::Utc::now().date_naive();
    let visible: Vec<GalleryItem> = items
        .into_iter()
        .filter(|item| range().includes(&item.date, today))
        .collect();

    rsx! {
        div {
            // Filter bar
            div { style: "display: flex; gap: 8px; margin-bottom: 16px; align-items: center;",
                for option in DateRange::OPTIONS {
                    button {
                        key: "{option.label()}",
                        style: if range() == option {
                            "padding: 4px 12px; border-radius: 6px; border: 1px solid #0066cc; background: #0066cc; color: white; cursor: pointer;"
                        } else {
                            "padding: 4px 12px; border-radius: 6px; border: 1px solid #ccc; background: white; color: black; cursor: pointer;"
                        },
                        onclick: move |_| range.set(option),
                        "{option.label()}"
                    }
                }
                if !selection().is_empty() {
                    a {
                        href: "{selection().share_link()}",
                        target: "_blank",
                        style: "margin-left: auto; padding: 4px 12px; border-radius: 6px; background: #16a34a; color: white; text-decoration: none;",
                        "Share Selected ({selection().len()})"
                    }
                }
            }

            if visible.is_empty() {
                div { style: "padding: 24px; text-align: center; background: #f5f5f5; border-radius: 8px; color: #999;",
                    "No photos available"
                }
            } else {
                div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 16px;",
                    for item in visible {
                        div {
                            key: "{item.id}",
                            style: "position: relative; overflow: hidden; border-radius: 8px; border: 1px solid #e0e0e0;",
                            img {
                                src: "{item.url}",
                                alt: "Uploaded",
                                style: "width: 100%; height: 192px; object-fit: cover; cursor: pointer;",
                                onclick: {
                                    let url = item.url.clone();
                                    move |_| fullscreen.set(Some(url.clone()))
                                },
                            }
                            div { style: "padding: 8px; font-size: 14px; color: #666;",
                                "{format_display_date(&item.date)}"
                            }
                            input {
                                r#type: "checkbox",
                                checked: selection().contains(&item.url),
                                style: "position: absolute; top: 4px; left: 4px; width: 20px; height: 20px; cursor: pointer;",
                                onchange: {
                                    let url = item.url.clone();
                                    move |_| selection.write().toggle(&url)
                                },
                            }
                        }
                    }
                }
            }

            if let Some(url) = fullscreen() {
                FullscreenImage { url, on_close: move |_| fullscreen.set(None) }
            }
        }
    }
}

/// Full-screen overlay showing one image; any click closes it
#[component]
pub fn FullscreenImage(url: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0, 0, 0, 0.8); z-index: 1000; display: flex; align-items: center; justify-content: center; cursor: zoom-out;",
            onclick: move |_| on_close.call(()),
            img {
                src: "{url}",
                alt: "Fullscreen preview",
                style: "max-width: 100%; max-height: 100%; object-fit: contain;",
            }
        }
    }
}

/// A plain grid with per-item delete buttons, for admin listings
#[component]
pub fn Gallery(
    /// List of gallery items to display
    items: Vec<GalleryItem>,
    /// Callback with the item id when its delete button is pressed
    #[props(default)]
    on_delete: Option<EventHandler<String>>,
) -> Element {
    if items.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 16px;",
            for item in items {
                div {
                    key: "{item.id}",
                    style: "border: 1px solid #e0e0e0; border-radius: 8px; padding: 8px; display: flex; flex-direction: column; gap: 8px;",
                    img {
                        src: "{item.url}",
                        alt: "Uploaded",
                        style: "width: 100%; height: 160px; object-fit: cover; border-radius: 6px;",
                    }
                    div { style: "font-size: 14px; color: #666;", "{format_display_date(&item.date)}" }
                    if let Some(handler) = on_delete {
                        button {
                            style: "align-self: flex-start; padding: 4px 8px; background: #dc2626; color: white; border-radius: 6px; font-size: 14px; border: none; cursor: pointer;",
                            onclick: {
                                let item_id = item.id.clone();
                                move |_| handler.call(item_id.clone())
                            },
                            "Delete"
                        }
                    }
                }
            }
        }
    }
}
