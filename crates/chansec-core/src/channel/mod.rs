//! Channel-security decision strategies.
//!
//! This module decides whether an intercepted request's transport channel
//! (secure vs. insecure) satisfies the required-channel attributes attached
//! to the requested resource, and escalates through an injected
//! [`ChannelEntryPoint`] when it does not.
//!
//! # Architecture
//!
//! ```text
//! RequestContext + ConfigAttributeDefinition
//!         |
//!         v
//! ChannelDecisionManager --> ChannelProcessor (per keyword)
//!                                  |
//!                                  v  (channel unacceptable)
//!                            ChannelEntryPoint::commence
//! ```
//!
//! # Key Concepts
//!
//! - **Processor**: one strategy per keyword, deciding whether the current
//!   channel matches the attribute it supports
//! - **Entry point**: collaborator that commences the channel switch
//!   (e.g. a redirect to the secure transport); invoked at most once per
//!   `decide` call
//! - **Staged configuration**: processors are built, mutated, then checked
//!   with an explicit `validate()` before serving requests
//!
//! # Security Properties
//!
//! - **Fail-closed**: a processor asked to escalate without an entry point
//!   returns a configuration error instead of silently passing the request
//! - **No per-call state**: `decide` is reentrant; everything request-scoped
//!   lives in the caller-owned [`RequestContext`]

mod context;
mod decision;
mod entry_point;
mod error;
mod processor;

pub use context::RequestContext;
pub use decision::ChannelDecisionManager;
pub use entry_point::{ChannelEntryPoint, MarkHandledEntryPoint};
pub use error::ChannelError;
pub use processor::{
    ChannelProcessor, InsecureChannelProcessor, SecureChannelProcessor,
    REQUIRES_INSECURE_CHANNEL, REQUIRES_SECURE_CHANNEL,
};
