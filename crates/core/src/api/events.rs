//! Progress events emitted while processing documents.
//!
//! Callers observe the pipeline through an injected [`ProgressSink`] instead
//! of a global logger. Any `Fn(&PipelineEvent) + Sync` closure is a sink.

use std::time::Duration;

use crate::layout::Direction;

/// One step of the pipeline, reported per page.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    PageStarted {
        page_number: u32,
        fragments: usize,
    },
    DuplicatesRemoved {
        page_number: u32,
        removed: usize,
    },
    FragmentsMerged {
        page_number: u32,
        before: usize,
        after: usize,
    },
    GroupsFormed {
        page_number: u32,
        columns: usize,
        rows: usize,
        leading: Option<Direction>,
    },
    PageFinished {
        page_number: u32,
        fragments: usize,
        elapsed: Duration,
    },
    DocumentFinished {
        pages: usize,
        fragments: usize,
        elapsed: Duration,
    },
}

impl PipelineEvent {
    /// Page the event belongs to, `None` for document-level events.
    pub fn page_number(&self) -> Option<u32> {
        match *self {
            PipelineEvent::PageStarted { page_number, .. }
            | PipelineEvent::DuplicatesRemoved { page_number, .. }
            | PipelineEvent::FragmentsMerged { page_number, .. }
            | PipelineEvent::GroupsFormed { page_number, .. }
            | PipelineEvent::PageFinished { page_number, .. } => Some(page_number),
            PipelineEvent::DocumentFinished { .. } => None,
        }
    }
}

/// Receiver of pipeline events.
///
/// Pages may be processed on several threads at once, so sinks must be `Sync`
/// and can see events of different pages interleaved.
pub trait ProgressSink: Sync {
    fn on_event(&self, event: &PipelineEvent);
}

impl<F> ProgressSink for F
where
    F: Fn(&PipelineEvent) + Sync,
{
    fn on_event(&self, event: &PipelineEvent) {
        self(event)
    }
}

/// Sink that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ProgressSink for NoopSink {
    fn on_event(&self, _event: &PipelineEvent) {}
}
