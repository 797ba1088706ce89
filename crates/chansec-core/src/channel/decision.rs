//! Ordered dispatch across channel processors.

use std::sync::Arc;

use tracing::debug;

use crate::access::ConfigAttributeDefinition;

use super::context::RequestContext;
use super::error::ChannelError;
use super::processor::ChannelProcessor;

/// Holds an ordered list of [`ChannelProcessor`] strategies and walks
/// them for each intercepted request.
///
/// Each processor receives the full attribute definition and scans it
/// for the keyword it supports. Dispatch stops as soon as the context
/// reports handled: a processor has committed a response and further
/// channel processing is meaningless for the request.
#[derive(Default)]
pub struct ChannelDecisionManager {
    processors: Vec<Arc<dyn ChannelProcessor>>,
}

impl std::fmt::Debug for ChannelDecisionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelDecisionManager")
            .field("processors", &self.processors.len())
            .finish()
    }
}

impl ChannelDecisionManager {
    /// Construct an empty manager. At least one processor must be added
    /// before `validate()` passes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    /// Construct from an ordered processor list.
    #[must_use]
    pub fn with_processors(processors: Vec<Arc<dyn ChannelProcessor>>) -> Self {
        Self { processors }
    }

    /// Append a processor; dispatch order is insertion order.
    pub fn add_processor(&mut self, processor: Arc<dyn ChannelProcessor>) {
        self.processors.push(processor);
    }

    /// Number of registered processors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.processors.len()
    }

    /// Returns `true` when no processors are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }

    /// Walks the processors in order until one commits a response or all
    /// have run.
    ///
    /// # Errors
    ///
    /// Propagates the first processor error ([`ChannelError`]).
    pub fn decide(
        &self,
        context: &mut dyn RequestContext,
        attributes: &ConfigAttributeDefinition,
    ) -> Result<(), ChannelError> {
        for processor in &self.processors {
            processor.decide(context, attributes)?;
            if context.is_handled() {
                debug!("response committed, stopping channel dispatch");
                return Ok(());
            }
        }
        Ok(())
    }

    /// Explicit lifecycle check: requires a non-empty processor list and
    /// validates every member.
    ///
    /// # Errors
    ///
    /// Returns `"channelProcessors required"` when the list is empty,
    /// otherwise the first failing member's [`ChannelError`].
    pub fn validate(&self) -> Result<(), ChannelError> {
        if self.processors.is_empty() {
            return Err(ChannelError::missing("channelProcessors"));
        }
        for processor in &self.processors {
            processor.validate()?;
        }
        Ok(())
    }
}
