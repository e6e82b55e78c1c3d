//! Native share capability: payload, probe/invoke abstraction and the
//! per-instance controller that caches detection.
//!
//! Components never touch `navigator` directly. They ask Leptos context for a
//! [`ShareProvider`] (see [`use_share_capability`]) and fall back to
//! [`platform`] when none was provided, so tests and embedders can swap in
//! their own [`ShareCapability`].

#[cfg(feature = "hydrate")]
mod navigator;

use futures::FutureExt;
use futures::future::{self, LocalBoxFuture};
use leptos::prelude::*;
use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, OnceLock};

#[cfg(feature = "hydrate")]
pub use navigator::NavigatorShare;

/// The record handed to the platform share sheet.
///
/// Forwarded verbatim: no trimming, no URL validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShareData {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareData {
    pub fn new(title: impl Into<String>, text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            url: url.into(),
        }
    }
}

/// Result of capability detection for one component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    Unavailable,
    Available,
}

impl Availability {
    pub fn from_supported(supported: bool) -> Self {
        if supported { Self::Available } else { Self::Unavailable }
    }

    pub fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }
}

/// Why a share invocation did not complete.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShareError {
    #[error("share was cancelled")]
    Cancelled,

    #[error("share not allowed: {0}")]
    NotAllowed(String),

    #[error("share data rejected: {0}")]
    InvalidData(String),

    #[error("native share is not supported here")]
    Unsupported,

    #[error("share failed ({name}): {message}")]
    Platform { name: String, message: String },
}

impl ShareError {
    /// Map a rejected `navigator.share()` promise, identified by the
    /// `DOMException`/`Error` name, onto a variant.
    pub fn from_dom(name: &str, message: &str) -> Self {
        match name {
            "AbortError" => Self::Cancelled,
            "NotAllowedError" => Self::NotAllowed(message.to_string()),
            "TypeError" | "DataError" => Self::InvalidData(message.to_string()),
            _ => Self::Platform {
                name: name.to_string(),
                message: message.to_string(),
            },
        }
    }

    /// User dismissed the native sheet.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Host-provided sharing facility.
///
/// `share` returns a `'static` local future: the browser promise is `!Send`
/// and the future must outlive the click handler that started it.
pub trait ShareCapability: Send + Sync {
    /// Whether the host exposes a native share capability. No side effects.
    fn is_supported(&self) -> bool;

    /// Open the native share UI with `data`. Resolves when the user
    /// completes the share, fails on cancellation or rejection.
    fn share(&self, data: ShareData) -> LocalBoxFuture<'static, Result<(), ShareError>>;
}

/// Capability used where the host has no share sheet (server rendering,
/// non-browser targets).
#[derive(Debug, Clone, Copy, Default)]
pub struct Unsupported;

impl ShareCapability for Unsupported {
    fn is_supported(&self) -> bool {
        false
    }

    fn share(&self, _data: ShareData) -> LocalBoxFuture<'static, Result<(), ShareError>> {
        future::ready(Err(ShareError::Unsupported)).boxed_local()
    }
}

/// Shared handle to a [`ShareCapability`], cheap to clone into closures and
/// Leptos context.
#[derive(Clone)]
pub struct ShareProvider(Arc<dyn ShareCapability>);

impl ShareProvider {
    pub fn new(capability: impl ShareCapability + 'static) -> Self {
        Self(Arc::new(capability))
    }
}

impl<T: ShareCapability + 'static> From<Arc<T>> for ShareProvider {
    fn from(capability: Arc<T>) -> Self {
        Self(capability)
    }
}

impl Deref for ShareProvider {
    type Target = dyn ShareCapability;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl fmt::Debug for ShareProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ShareProvider").finish_non_exhaustive()
    }
}

/// The capability of the environment this build targets.
pub fn platform() -> ShareProvider {
    #[cfg(feature = "hydrate")]
    {
        ShareProvider::new(NavigatorShare)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        ShareProvider::new(Unsupported)
    }
}

/// Make `provider` the capability for every share component below the
/// current owner.
pub fn provide_share_capability(provider: impl Into<ShareProvider>) {
    provide_context(provider.into());
}

/// Capability from context, or [`platform`] when none was provided.
pub fn use_share_capability() -> ShareProvider {
    use_context::<ShareProvider>().unwrap_or_else(platform)
}

/// Detection and invocation for a single mounted share control.
///
/// The probe result is computed on the first [`detect`](Self::detect) and
/// cached for the controller's lifetime: later calls never consult the
/// capability again, so availability can only go from unknown to its one
/// detected value.
#[derive(Debug)]
pub struct ShareController {
    provider: ShareProvider,
    detected: OnceLock<Availability>,
}

impl ShareController {
    pub fn new(provider: ShareProvider) -> Self {
        Self {
            provider,
            detected: OnceLock::new(),
        }
    }

    /// Probe the capability once and return the cached result.
    pub fn detect(&self) -> Availability {
        *self
            .detected
            .get_or_init(|| Availability::from_supported(self.provider.is_supported()))
    }

    /// Cached result, `Unavailable` before detection has run.
    pub fn availability(&self) -> Availability {
        self.detected.get().copied().unwrap_or_default()
    }

    /// Start exactly one platform share with `data`.
    pub fn activate(&self, data: ShareData) -> LocalBoxFuture<'static, Result<(), ShareError>> {
        self.provider.share(data)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingShare;
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn absent_capability_is_unavailable() {
        let fake = RecordingShare::absent();
        let controller = ShareController::new(fake.clone().into());
        assert_eq!(controller.detect(), Availability::Unavailable);
        assert!(!controller.availability().is_available());
    }

    #[test]
    fn availability_is_unavailable_before_detection() {
        let fake = RecordingShare::supported();
        let controller = ShareController::new(fake.clone().into());
        assert_eq!(controller.availability(), Availability::Unavailable);
        assert_eq!(fake.probes(), 0);
    }

    #[test]
    fn detection_probes_once() {
        let fake = RecordingShare::supported();
        let controller = ShareController::new(fake.clone().into());
        assert_eq!(controller.detect(), Availability::Available);
        assert_eq!(controller.detect(), Availability::Available);
        assert_eq!(controller.availability(), Availability::Available);
        assert_eq!(fake.probes(), 1);
    }

    #[test]
    fn activation_forwards_payload_once() {
        let fake = RecordingShare::supported();
        let controller = ShareController::new(fake.clone().into());
        let data = ShareData::new("T", "B", "https://example.com");

        assert_eq!(block_on(controller.activate(data.clone())), Ok(()));
        assert_eq!(fake.calls(), vec![data]);
    }

    #[test]
    fn share_page_scenario() {
        let fake = RecordingShare::supported();
        let controller = ShareController::new(fake.clone().into());
        assert_eq!(controller.availability(), Availability::Unavailable);
        assert_eq!(controller.detect(), Availability::Available);

        block_on(controller.activate(ShareData::new("Page", "Check this out", "https://x.test/a"))).unwrap();

        assert_eq!(
            fake.calls(),
            vec![ShareData {
                title: "Page".into(),
                text: "Check this out".into(),
                url: "https://x.test/a".into(),
            }]
        );
        assert_eq!(controller.availability(), Availability::Available);
    }

    #[test]
    fn each_activation_is_one_invocation() {
        let fake = RecordingShare::supported();
        let controller = ShareController::new(fake.clone().into());
        let data = ShareData::new("T", "B", "https://example.com");

        for _ in 0..3 {
            block_on(controller.activate(data.clone())).unwrap();
        }
        assert_eq!(fake.calls().len(), 3);
    }

    #[test]
    fn rejection_reaches_the_caller() {
        let fake = RecordingShare::rejecting(ShareError::Cancelled);
        let controller = ShareController::new(fake.clone().into());
        controller.detect();

        let err = block_on(controller.activate(ShareData::default())).unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(fake.calls().len(), 1);
    }

    #[test]
    fn payload_is_not_normalized() {
        let fake = RecordingShare::supported();
        let controller = ShareController::new(fake.clone().into());
        let data = ShareData::new("  spaced  ", "", "not a url");

        block_on(controller.activate(data.clone())).unwrap();
        assert_eq!(fake.calls()[0], data);
    }

    #[test]
    fn unsupported_capability_rejects() {
        let controller = ShareController::new(ShareProvider::new(Unsupported));
        assert_eq!(controller.detect(), Availability::Unavailable);
        assert_eq!(
            block_on(controller.activate(ShareData::default())),
            Err(ShareError::Unsupported)
        );
    }

    #[test]
    fn dom_errors_map_to_variants() {
        assert_eq!(ShareError::from_dom("AbortError", "Share canceled"), ShareError::Cancelled);
        assert_eq!(
            ShareError::from_dom("NotAllowedError", "requires transient activation"),
            ShareError::NotAllowed("requires transient activation".into())
        );
        assert_eq!(
            ShareError::from_dom("TypeError", "Invalid URL"),
            ShareError::InvalidData("Invalid URL".into())
        );
        assert_eq!(
            ShareError::from_dom("InvalidStateError", "already sharing"),
            ShareError::Platform {
                name: "InvalidStateError".into(),
                message: "already sharing".into(),
            }
        );
    }
}
