//! Channel processor strategies.
//!
//! One processor per required-channel keyword. Each processor scans the
//! attribute definition for the keyword it supports and, when the channel
//! condition fails, escalates through its entry point exactly once for
//! that `decide` call.

use std::sync::Arc;

use tracing::debug;

use crate::access::{ConfigAttribute, ConfigAttributeDefinition};

use super::context::RequestContext;
use super::entry_point::{ChannelEntryPoint, MarkHandledEntryPoint};
use super::error::ChannelError;

/// Default keyword demanding a secure channel.
pub const REQUIRES_SECURE_CHANNEL: &str = "REQUIRES_SECURE_CHANNEL";

/// Default keyword demanding an insecure channel.
pub const REQUIRES_INSECURE_CHANNEL: &str = "REQUIRES_INSECURE_CHANNEL";

/// Strategy deciding whether the current transport channel satisfies one
/// required-channel attribute.
///
/// Processors are long-lived and shared across concurrent request tasks.
/// `decide` is reentrant and keeps no per-call state on the processor;
/// everything request-scoped lives in the caller-owned context.
///
/// # Lifecycle
///
/// Configuration is staged: construct, mutate via setters, then run
/// [`validate`](Self::validate) once before the processor serves
/// requests. `decide` does not re-run the validation.
pub trait ChannelProcessor: Send + Sync {
    /// Returns `true` iff this processor handles the attribute's keyword.
    fn supports(&self, attribute: &ConfigAttribute) -> bool;

    /// Evaluates the channel condition for every supported attribute in
    /// `attributes`, escalating through the entry point at most once when
    /// the condition fails. A channel that is already acceptable is the
    /// silent success path.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::MissingConfiguration`] when escalation is
    /// required but no entry point is configured, and propagates
    /// [`ChannelError::EntryPoint`] failures from the collaborator.
    fn decide(
        &self,
        context: &mut dyn RequestContext,
        attributes: &ConfigAttributeDefinition,
    ) -> Result<(), ChannelError>;

    /// Explicit lifecycle check, run once before first use.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::MissingConfiguration`] naming the missing
    /// or empty configuration field.
    fn validate(&self) -> Result<(), ChannelError>;
}

/// Enforces that resources demanding a secure channel are reached over
/// one.
///
/// Supports [`REQUIRES_SECURE_CHANNEL`] by default. When a supported
/// attribute is present and the context reports an insecure channel, the
/// entry point is commenced (conceptually a redirect to the
/// HTTPS-equivalent transport).
pub struct SecureChannelProcessor {
    secure_keyword: String,
    entry_point: Option<Arc<dyn ChannelEntryPoint>>,
}

impl SecureChannelProcessor {
    /// Construct with the default keyword and entry point.
    #[must_use]
    pub fn new() -> Self {
        Self {
            secure_keyword: REQUIRES_SECURE_CHANNEL.to_string(),
            entry_point: Some(Arc::new(MarkHandledEntryPoint)),
        }
    }

    /// The keyword this processor supports.
    #[must_use]
    pub fn secure_keyword(&self) -> &str {
        &self.secure_keyword
    }

    /// Override the supported keyword. Takes effect for subsequent
    /// `decide` calls; mutate only before the processor is in service.
    pub fn set_secure_keyword(&mut self, keyword: impl Into<String>) {
        self.secure_keyword = keyword.into();
    }

    /// The configured entry point, if any.
    #[must_use]
    pub fn entry_point(&self) -> Option<&Arc<dyn ChannelEntryPoint>> {
        self.entry_point.as_ref()
    }

    /// Replace or clear the entry point. A cleared entry point fails
    /// `validate()`.
    pub fn set_entry_point(&mut self, entry_point: Option<Arc<dyn ChannelEntryPoint>>) {
        self.entry_point = entry_point;
    }
}

impl Default for SecureChannelProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelProcessor for SecureChannelProcessor {
    fn supports(&self, attribute: &ConfigAttribute) -> bool {
        attribute.attribute() == self.secure_keyword
    }

    fn decide(
        &self,
        context: &mut dyn RequestContext,
        attributes: &ConfigAttributeDefinition,
    ) -> Result<(), ChannelError> {
        for attribute in attributes {
            if self.supports(attribute) && !context.is_secure() {
                debug!(
                    keyword = %attribute,
                    "insecure channel for secured resource, commencing switch"
                );
                return escalate(self.entry_point.as_deref(), context);
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ChannelError> {
        if self.secure_keyword.is_empty() {
            return Err(ChannelError::missing("secureKeyword"));
        }
        if self.entry_point.is_none() {
            return Err(ChannelError::missing("entryPoint"));
        }
        Ok(())
    }
}

/// Enforces that resources demanding an insecure channel are not reached
/// over a secure one.
///
/// Structurally the mirror of [`SecureChannelProcessor`]: same contract,
/// inverted channel condition, keyword default
/// [`REQUIRES_INSECURE_CHANNEL`].
pub struct InsecureChannelProcessor {
    insecure_keyword: String,
    entry_point: Option<Arc<dyn ChannelEntryPoint>>,
}

impl InsecureChannelProcessor {
    /// Construct with the default keyword and entry point.
    #[must_use]
    pub fn new() -> Self {
        Self {
            insecure_keyword: REQUIRES_INSECURE_CHANNEL.to_string(),
            entry_point: Some(Arc::new(MarkHandledEntryPoint)),
        }
    }

    /// The keyword this processor supports.
    #[must_use]
    pub fn insecure_keyword(&self) -> &str {
        &self.insecure_keyword
    }

    /// Override the supported keyword.
    pub fn set_insecure_keyword(&mut self, keyword: impl Into<String>) {
        self.insecure_keyword = keyword.into();
    }

    /// The configured entry point, if any.
    #[must_use]
    pub fn entry_point(&self) -> Option<&Arc<dyn ChannelEntryPoint>> {
        self.entry_point.as_ref()
    }

    /// Replace or clear the entry point. A cleared entry point fails
    /// `validate()`.
    pub fn set_entry_point(&mut self, entry_point: Option<Arc<dyn ChannelEntryPoint>>) {
        self.entry_point = entry_point;
    }
}

impl Default for InsecureChannelProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelProcessor for InsecureChannelProcessor {
    fn supports(&self, attribute: &ConfigAttribute) -> bool {
        attribute.attribute() == self.insecure_keyword
    }

    fn decide(
        &self,
        context: &mut dyn RequestContext,
        attributes: &ConfigAttributeDefinition,
    ) -> Result<(), ChannelError> {
        for attribute in attributes {
            if self.supports(attribute) && context.is_secure() {
                debug!(
                    keyword = %attribute,
                    "secure channel for insecure-only resource, commencing switch"
                );
                return escalate(self.entry_point.as_deref(), context);
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ChannelError> {
        if self.insecure_keyword.is_empty() {
            return Err(ChannelError::missing("insecureKeyword"));
        }
        if self.entry_point.is_none() {
            return Err(ChannelError::missing("entryPoint"));
        }
        Ok(())
    }
}

// Fail closed when escalation is needed but the entry point was cleared
// and the processor never validated.
fn escalate(
    entry_point: Option<&dyn ChannelEntryPoint>,
    context: &mut dyn RequestContext,
) -> Result<(), ChannelError> {
    let entry_point = entry_point.ok_or(ChannelError::missing("entryPoint"))?;
    entry_point.commence(context)
}



#[cfg(test)]
mod tests_support {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    pub(super) struct CountedContext {
        secure: bool,
        handled: bool,
    }

    impl CountedContext {
        pub(super) fn secure() -> Self {
            Self {
                secure: true,
                handled: false,
            }
        }

        pub(super) fn insecure() -> Self {
            Self {
                secure: false,
                handled: false,
            }
        }
    }

    impl RequestContext for CountedContext {
        fn is_secure(&self) -> bool {
            self.secure
        }

        fn mark_handled(&mut self) {
            self.handled = true;
        }

        fn is_handled(&self) -> bool {
            self.handled
        }
    }

    #[derive(Default)]
    pub(super) struct SharedCounter {
        commenced: AtomicUsize,
    }

    impl SharedCounter {
        pub(super) fn count(&self) -> usize {
            self.commenced.load(Ordering::SeqCst)
        }
    }

    impl ChannelEntryPoint for SharedCounter {
        fn commence(&self, context: &mut dyn RequestContext) -> Result<(), ChannelError> {
            self.commenced.fetch_add(1, Ordering::SeqCst);
            context.mark_handled();
            Ok(())
        }
    }

    pub(super) fn counting_processor() -> (SecureChannelProcessor, Arc<SharedCounter>) {
        let entry_point = Arc::new(SharedCounter::default());
        let mut processor = SecureChannelProcessor::new();
        processor.set_entry_point(Some(entry_point.clone()));
        (processor, entry_point)
    }
}
