//! Deduplicated record of completed boards
//!
//! Equivalent search paths (symmetric placements of the last stone, resumed
//! runs) can reach the same board more than once. The registry keys boards by
//! their signature and hands each new one to its persistence sinks.

use std::collections::HashSet;

use crate::io::error::Result;
use crate::spatial::board::Board;

/// Destination for newly discovered solutions
pub trait SolutionSink {
    /// Persist one new solution
    ///
    /// # Errors
    ///
    /// Returns an error if the solution cannot be written
    fn persist(&mut self, signature: &str, board: &Board) -> Result<()>;

    /// Flush buffered output
    ///
    /// # Errors
    ///
    /// Returns an error if buffered output cannot be written
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Signature-keyed set of solutions with persistence sinks
#[derive(Default)]
pub struct SolutionRegistry {
    seen: HashSet<String>,
    discovered: Vec<String>,
    sinks: Vec<Box<dyn SolutionSink>>,
}

impl SolutionRegistry {
    /// Create an empty registry without sinks
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink receiving every new solution
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn SolutionSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Mark signatures from an earlier run as known without persisting them
    pub fn seed<I, S>(&mut self, signatures: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seen.extend(signatures.into_iter().map(Into::into));
    }

    /// Record a completed board
    ///
    /// Returns `true` if the board was new and has been persisted, `false` if
    /// an identical board was recorded before.
    ///
    /// # Errors
    ///
    /// Returns an error if a sink fails to persist the board
    pub fn record(&mut self, board: &Board) -> Result<bool> {
        let signature = board.to_signature();
        if !self.seen.insert(signature.clone()) {
            return Ok(false);
        }

        for sink in &mut self.sinks {
            sink.persist(&signature, board)?;
        }
        self.discovered.push(signature);
        Ok(true)
    }

    /// Whether a board with this signature is known
    pub fn contains(&self, signature: &str) -> bool {
        self.seen.contains(signature)
    }

    /// Signatures discovered by this registry, in discovery order
    pub fn discovered(&self) -> &[String] {
        &self.discovered
    }

    /// Number of known signatures, seeded ones included
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether no signature is known
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Flush every sink
    ///
    /// # Errors
    ///
    /// Returns the first sink error encountered
    pub fn flush(&mut self) -> Result<()> {
        for sink in &mut self.sinks {
            sink.flush()?;
        }
        Ok(())
    }
}
