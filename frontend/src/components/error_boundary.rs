//! Error boundaries for render failures and failed data requests.

use dioxus::prelude::*;

const ERROR_CARD_STYLE: &str = "
    display: flex;
    flex-direction: column;
    gap: 10px;
    margin: 24px;
    padding: 16px 20px;
    background: white;
    border: 1px solid #E5A4A4;
    border-left: 6px solid #B91C1C;
    border-radius: 8px;
";

/// Catches anything a page throws. Also used outside the router, so the
/// home link is a plain anchor.
#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("render error in {}: {:?}", boundary_name.read(), err);
                rsx! {
                    div {
                        style: ERROR_CARD_STYLE,
                        h1 { style: "color: #B91C1C; font-size: 28px; font-weight: 500; margin: 0;", "Something went wrong" }
                        span { style: "color: #6B7280; font-size: 14px;", "Section: {boundary_name}" }
                        a {
                            href: "/",
                            "Return to the home page"
                        }
                        pre {
                            style: "color: #374151; font-size: 12px; text-wrap: auto; max-height: 300px; overflow-y: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

/// Boundary around one card or table; the user can retry in place.
#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(e) => format!("{:#?}", e.0),
                    None => "Unknown error".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "
                                height: 32px;
                                padding: 0 12px;
                                border: 1px solid #1F6FB2;
                                border-radius: 6px;
                                background: white;
                                color: #1F6FB2;
                                cursor: pointer;
                            ",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Try Again"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

/// Error box shown in place of data that failed to load.
#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    let headline = use_memo(move || {
        if error_txt.read().contains("not found") {
            "Not found"
        } else {
            "Could not load data"
        }
    });
    rsx! {
        div {
            style: ERROR_CARD_STYLE,
            h2 { style: "color: #B91C1C; font-size: 20px; font-weight: 500; margin: 0;", "{headline}" }
            pre {
                style: "color: #374151; font-size: 12px; text-wrap: auto; max-height: 300px; overflow-y: auto; margin: 0;",
                "{error_txt}"
            }
            {children}
        }
    }
}
