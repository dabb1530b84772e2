//! Lazy references to out-of-band binary payloads.
//!
//! Embedded media travels through the attribute channel as a handle only;
//! the bytes live in the package layer and are fetched on first access. The
//! reference caches the first successful fetch, so repeated resolution is
//! idempotent and cheap.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use once_cell::sync::OnceCell;

use crate::error::Result;

/// Supplier of out-of-band payload bytes, implemented by the package or
/// archive layer that owns the document.
pub trait BinaryProvider: Send + Sync {
    /// Return the payload for `handle`, or
    /// [`Error::BinaryNotFound`](crate::Error::BinaryNotFound).
    fn payload(&self, handle: &str) -> Result<Bytes>;
}

/// Lazy handle to an embedded-media or embedded-object payload.
///
/// No I/O happens at construction. Clones share the resolution cache, so a
/// payload is fetched at most once per originating reference no matter how
/// many properties carry it.
#[derive(Clone)]
pub struct BinaryReference {
    handle: Arc<str>,
    provider: Arc<dyn BinaryProvider>,
    resolved: Arc<OnceCell<Bytes>>,
}

impl BinaryReference {
    /// Create a reference bound to `provider` without touching the payload.
    pub fn new(handle: impl Into<Arc<str>>, provider: Arc<dyn BinaryProvider>) -> Self {
        Self {
            handle: handle.into(),
            provider,
            resolved: Arc::new(OnceCell::new()),
        }
    }

    /// The package-layer handle this reference points at.
    #[inline]
    pub fn handle(&self) -> &str {
        &self.handle
    }

    /// Resolve the payload, fetching it from the provider on first use.
    ///
    /// Returns `None` when the provider cannot supply the payload; whether
    /// that is fatal is the consumer's decision. Failures are not cached, so
    /// a later attempt may still succeed.
    pub fn bytes(&self) -> Option<Bytes> {
        self.resolved
            .get_or_try_init(|| self.provider.payload(&self.handle))
            .ok()
            .cloned()
    }

    /// Whether the payload has already been fetched.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.resolved.get().is_some()
    }
}

impl fmt::Debug for BinaryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryReference")
            .field("handle", &self.handle)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}
