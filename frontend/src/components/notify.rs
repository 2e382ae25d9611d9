//! Toast notifications for finished user actions.

use dioxus_primitives::toast::{ToastOptions, consume_toast};

pub fn notify(title: impl Into<String>, description: impl Into<String>) {
    let toast_api = consume_toast();
    toast_api
            .info(
                title.into(),
                ToastOptions::new()
                    .description(description.into())
                    .duration(std::time::Duration::from_secs(8))
                    .permanent(false),
            );
}
