//! Smoke test: drive the public share API with a capability defined outside
//! the crate, the way an embedding app would substitute its own.

use futures::FutureExt;
use futures::executor::block_on;
use futures::future::{self, LocalBoxFuture};
use share_web::{Availability, ShareCapability, ShareController, ShareData, ShareError, ShareProvider};
use std::sync::{Arc, Mutex};

/// Accepts the first share, then behaves like a user dismissing the sheet.
#[derive(Default)]
struct CancelAfterFirst {
    shared: Mutex<Vec<ShareData>>,
}

impl ShareCapability for CancelAfterFirst {
    fn is_supported(&self) -> bool {
        true
    }

    fn share(&self, data: ShareData) -> LocalBoxFuture<'static, Result<(), ShareError>> {
        let mut shared = self.shared.lock().unwrap();
        let outcome = if shared.is_empty() { Ok(()) } else { Err(ShareError::from_dom("AbortError", "Share canceled")) };
        shared.push(data);
        future::ready(outcome).boxed_local()
    }
}

#[test]
fn scenario_share_page_then_cancel() {
    let capability = Arc::new(CancelAfterFirst::default());
    let controller = ShareController::new(ShareProvider::from(capability.clone()));

    assert_eq!(controller.detect(), Availability::Available);

    let payload = ShareData::new("Page", "Check this out", "https://x.test/a");
    block_on(controller.activate(payload.clone())).expect("first share should resolve");
    assert_eq!(*capability.shared.lock().unwrap(), vec![payload.clone()]);

    let err = block_on(controller.activate(payload)).unwrap_err();
    assert!(err.is_cancelled(), "expected cancellation, got {err}");
    assert_eq!(capability.shared.lock().unwrap().len(), 2);

    // Availability stays put after detection and failed shares
    assert_eq!(controller.availability(), Availability::Available);
}

#[cfg(feature = "ssr")]
#[test]
fn server_render_of_share_button_is_empty() {
    use leptos::prelude::*;
    use share_web::{ShareButton, provide_share_capability};

    let owner = Owner::new();
    let html = owner.with(|| {
        provide_share_capability(Arc::new(CancelAfterFirst::default()));
        view! { <ShareButton title="T" text="B" url="https://example.com" attr:class="share-trigger" /> }.to_html()
    });

    assert!(!html.contains("<button"), "server render should hold back the control: {html}");
}
