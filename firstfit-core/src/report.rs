use crate::simulation::{Outcome, Process};
use crate::store::BlockStore;
use std::fmt;

/// One line of the per-block status table. Block numbers are 1-based here,
/// matching what the front-ends display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStatus {
    pub number: usize,
    pub remaining_size: usize,
    pub allocated_sizes: Vec<usize>,
}

impl BlockStatus {
    pub fn is_allocated(&self) -> bool {
        !self.allocated_sizes.is_empty()
    }
}

/// The full per-block status table at some point in the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub blocks: Vec<BlockStatus>,
}

impl StatusReport {
    pub(crate) fn capture(store: &BlockStore) -> Self {
        Self {
            blocks: store
                .blocks()
                .iter()
                .map(|block| BlockStatus {
                    number: block.index() + 1,
                    remaining_size: block.remaining_size(),
                    allocated_sizes: block.allocated_sizes().to_vec(),
                })
                .collect(),
        }
    }
}

/// Outcome of a single submission plus the status table right after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessResult {
    pub sequence_number: usize,
    pub requested_size: usize,
    pub outcome: Outcome,
    pub status: StatusReport,
}

/// End-of-run view: every submitted process in order, then the final table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub processes: Vec<Process>,
    pub status: StatusReport,
}

fn write_process_line(
    f: &mut fmt::Formatter<'_>,
    sequence_number: usize,
    requested_size: usize,
    outcome: Outcome,
) -> fmt::Result {
    match outcome {
        Outcome::Assigned { block_index } => writeln!(
            f,
            "Process {} (Size: {}) allocated to Block {}.",
            sequence_number,
            requested_size,
            block_index + 1
        ),
        Outcome::Rejected => writeln!(
            f,
            "Process {} (Size: {}) could not be allocated.",
            sequence_number, requested_size
        ),
    }
}

impl fmt::Display for BlockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Block {}: {} (Remaining Size: {})",
            self.number,
            if self.is_allocated() { "Allocated" } else { "Free" },
            self.remaining_size
        )?;
        if self.is_allocated() {
            let sizes = self
                .allocated_sizes
                .iter()
                .map(|size| size.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, " | Allocated Processes: {sizes}")?;
        }
        Ok(())
    }
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in &self.blocks {
            writeln!(f, "{block}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ProcessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_process_line(f, self.sequence_number, self.requested_size, self.outcome)?;
        writeln!(f)?;
        writeln!(f, "Current Block Status:")?;
        write!(f, "{}", self.status)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Final Memory Allocation Summary:")?;
        for process in &self.processes {
            write_process_line(
                f,
                process.sequence_number(),
                process.requested_size(),
                process.outcome(),
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Final Block Status:")?;
        write!(f, "{}", self.status)
    }
}
