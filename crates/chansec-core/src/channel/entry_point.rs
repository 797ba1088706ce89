//! Channel escalation entry points.

use tracing::debug;

use super::context::RequestContext;
use super::error::ChannelError;

/// Capability that commences a channel switch for an unacceptable
/// channel.
///
/// Implementations own the transport mechanics (rewriting a URL to the
/// secure scheme and port, issuing the redirect). The decision core only
/// guarantees it calls [`commence`](Self::commence) at most once per
/// `decide` invocation, even when several attributes match.
///
/// # Thread Safety
///
/// Entry points are configured once and shared across all concurrent
/// request tasks, so implementations must be `Send + Sync`.
pub trait ChannelEntryPoint: Send + Sync {
    /// Commences the channel switch, committing a response on the
    /// context.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::EntryPoint`] when the switch cannot be
    /// initiated (for example the redirect cannot be written).
    fn commence(&self, context: &mut dyn RequestContext) -> Result<(), ChannelError>;
}

/// Default entry point that marks the context handled and nothing else.
///
/// Deployments are expected to inject an entry point that knows their
/// transport (scheme, port mapping) in its place; this default keeps a
/// freshly constructed processor usable and makes the escalation visible
/// to the caller through [`RequestContext::is_handled`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkHandledEntryPoint;

impl ChannelEntryPoint for MarkHandledEntryPoint {
    fn commence(&self, context: &mut dyn RequestContext) -> Result<(), ChannelError> {
        debug!(secure = context.is_secure(), "commencing channel switch");
        context.mark_handled();
        Ok(())
    }
}
