//! chansec-core - Channel-security decision strategies
//!
//! This library decides whether an intercepted request's transport channel
//! (secure vs. insecure) satisfies the required-channel attributes attached
//! to the requested resource. When it does not, an injected
//! [`channel::ChannelEntryPoint`] commences the channel switch (typically a
//! redirect to the secure transport). The library performs no
//! authentication, no resource-level authorization beyond the channel
//! question, and no network I/O of its own.
//!
//! # Modules
//!
//! - [`access`]: policy tokens ([`access::ConfigAttribute`]) and the ordered
//!   per-resource collection ([`access::ConfigAttributeDefinition`])
//! - [`channel`]: the [`channel::ChannelProcessor`] strategy contract, the
//!   secure/insecure processors, the entry-point capability and the
//!   ordered dispatch manager
//! - [`config`]: TOML-declared channel policy that builds a validated
//!   dispatch manager
//!
//! # Usage
//!
//! ```rust
//! use chansec_core::access::{ConfigAttribute, ConfigAttributeDefinition};
//! use chansec_core::channel::{ChannelProcessor, SecureChannelProcessor, RequestContext};
//!
//! struct Intercepted {
//!     secure: bool,
//!     handled: bool,
//! }
//!
//! impl RequestContext for Intercepted {
//!     fn is_secure(&self) -> bool {
//!         self.secure
//!     }
//!     fn mark_handled(&mut self) {
//!         self.handled = true;
//!     }
//!     fn is_handled(&self) -> bool {
//!         self.handled
//!     }
//! }
//!
//! let processor = SecureChannelProcessor::new();
//! processor.validate().expect("processor misconfigured");
//!
//! let mut definition = ConfigAttributeDefinition::new();
//! definition.add(ConfigAttribute::new("REQUIRES_SECURE_CHANNEL"));
//!
//! let mut request = Intercepted { secure: false, handled: false };
//! processor.decide(&mut request, &definition).expect("decision failed");
//! assert!(request.is_handled());
//! ```

pub mod access;
pub mod channel;
pub mod config;

pub use access::{ConfigAttribute, ConfigAttributeDefinition};
pub use channel::{
    ChannelDecisionManager, ChannelEntryPoint, ChannelError, ChannelProcessor,
    InsecureChannelProcessor, MarkHandledEntryPoint, RequestContext, SecureChannelProcessor,
};
pub use config::{ChannelPolicyConfig, ConfigError};
