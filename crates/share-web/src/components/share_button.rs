use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;

use super::IconShare;
use crate::share::{Availability, ShareController, ShareData, ShareError, use_share_capability};

/// Button that opens the platform share sheet with `{title, text, url}`.
///
/// Renders nothing until a post-mount effect has found a native share
/// capability, so the server render and browsers without Web Share produce no
/// markup at all. Attributes spread onto the component (`attr:class`,
/// `attr:aria-label`, ...) land on the `<button>`.
///
/// A failed share goes to `on_error` when given, otherwise to the console.
#[component]
pub fn ShareButton(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] text: Signal<String>,
    #[prop(into)] url: Signal<String>,
    /// Receives cancellations and rejections from the platform
    #[prop(optional, into)]
    on_error: Option<Callback<ShareError>>,
) -> impl IntoView {
    let controller = Arc::new(ShareController::new(use_share_capability()));
    let (availability, set_availability) = signal(Availability::Unavailable);

    // Reads no signals: runs once after mount, never again on prop changes
    let detector = Arc::clone(&controller);
    Effect::new(move |_| {
        if detector.detect().is_available() {
            set_availability.set(Availability::Available);
        }
    });

    let on_click = Callback::new(move |_: MouseEvent| {
        let data = ShareData {
            title: title.get_untracked(),
            text: text.get_untracked(),
            url: url.get_untracked(),
        };
        let pending = controller.activate(data);
        spawn_local(async move {
            if let Err(err) = pending.await {
                report(err, on_error);
            }
        });
    });

    move || {
        availability
            .get()
            .is_available()
            .then(|| view! { <ShareControl on_click=on_click /> })
    }
}

/// The actionable control shown once sharing is available
#[component]
pub fn ShareControl(on_click: Callback<MouseEvent>) -> impl IntoView {
    view! {
        <button type="button" on:click=move |ev| on_click.run(ev)>
            <IconShare />
            " Share"
        </button>
    }
}

fn report(err: ShareError, on_error: Option<Callback<ShareError>>) {
    match on_error {
        Some(callback) => callback.run(err),
        None => leptos::logging::error!("[share] native share failed: {}", err),
    }
}
