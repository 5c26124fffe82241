use crate::error::{Error, Result};
use crate::report::{ProcessResult, StatusReport, Summary};
use crate::store::BlockStore;

/// Final allocation decision for one process. Decided once, inside the
/// `submit_process` call that created the process, and never revised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Assigned { block_index: usize },
    Rejected,
}

/// One submitted process and its decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    sequence_number: usize,
    requested_size: usize,
    outcome: Outcome,
}

impl Process {
    /// 1-based submission order.
    pub fn sequence_number(&self) -> usize {
        self.sequence_number
    }

    pub fn requested_size(&self) -> usize {
        self.requested_size
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Accepting,
    Closed,
}

/// Scan blocks in ascending index order and pick the first one with enough
/// remaining capacity. The block order is the one fixed at setup.
fn first_fit(store: &BlockStore, process_size: usize) -> Option<usize> {
    store
        .blocks()
        .iter()
        .position(|block| block.remaining_size() >= process_size)
}

/// One First-Fit simulation run: the block store, the process history and the
/// run phase. Built in the accepting phase; closes itself once the configured
/// number of processes has been submitted.
pub struct Simulation {
    store: BlockStore,
    processes: Vec<Process>,
    process_total: usize,
    phase: Phase,
}

impl Simulation {
    pub fn new(block_sizes: &[usize], process_total: usize) -> Result<Self> {
        if process_total == 0 {
            return Err(Error::InvalidInput(
                "process count must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            store: BlockStore::new(block_sizes)?,
            processes: vec![],
            process_total,
            phase: Phase::Accepting,
        })
    }

    /// Submit the next process. Runs First-Fit, records the decision and
    /// returns it together with the status table right after it.
    pub fn submit_process(&mut self, requested_size: usize) -> Result<ProcessResult> {
        if requested_size == 0 {
            return Err(Error::InvalidInput(
                "process size must be positive".to_string(),
            ));
        }
        if self.phase == Phase::Closed {
            return Err(Error::InvalidState(format!(
                "all {} processes have been submitted, the run is closed",
                self.process_total
            )));
        }

        let sequence_number = self.processes.len() + 1;
        let outcome = match first_fit(&self.store, requested_size) {
            Some(block_index) => {
                self.store.commit(block_index, requested_size)?;
                Outcome::Assigned { block_index }
            }
            None => Outcome::Rejected,
        };
        self.processes.push(Process {
            sequence_number,
            requested_size,
            outcome,
        });
        if self.processes.len() == self.process_total {
            self.phase = Phase::Closed;
        }

        Ok(ProcessResult {
            sequence_number,
            requested_size,
            outcome,
            status: self.current_status(),
        })
    }

    pub fn current_status(&self) -> StatusReport {
        StatusReport::capture(&self.store)
    }

    /// Every submitted process in submission order, each with the block it
    /// was assigned at decision time, plus the current status table.
    pub fn final_summary(&self) -> Summary {
        Summary {
            processes: self.processes.clone(),
            status: self.current_status(),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.phase == Phase::Closed
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn store(&self) -> &BlockStore {
        &self.store
    }
}
