//! Request context abstraction for channel decisions.

/// Abstraction over the in-flight request/response pair.
///
/// Implemented by the intercepting framework, not by this crate. One
/// context is created per inbound request and handed to a single
/// `decide` call; the core never retains a reference beyond that call.
///
/// `mark_handled` records that a response has been committed for this
/// request (an entry point has begun a channel switch, typically by
/// issuing a redirect). Once handled, no further channel processing is
/// meaningful for the request.
pub trait RequestContext {
    /// Returns `true` when the request arrived over a secure channel.
    fn is_secure(&self) -> bool;

    /// Marks the response as committed.
    fn mark_handled(&mut self);

    /// Returns `true` once a response has been committed.
    fn is_handled(&self) -> bool;
}
