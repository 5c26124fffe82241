use crate::error::{Error, Result};

/// One fixed memory partition. Created at setup, mutated only by successful
/// commits, never resized or destroyed during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    index: usize,
    total_size: usize,
    remaining_size: usize,
    allocated_sizes: Vec<usize>,
}

impl Block {
    fn new(index: usize, total_size: usize) -> Self {
        Self {
            index,
            total_size,
            remaining_size: total_size,
            allocated_sizes: vec![],
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn total_size(&self) -> usize {
        self.total_size
    }

    pub fn remaining_size(&self) -> usize {
        self.remaining_size
    }

    /// Sizes of the processes committed into this block, in commit order.
    pub fn allocated_sizes(&self) -> &[usize] {
        &self.allocated_sizes
    }

    pub fn is_free(&self) -> bool {
        self.allocated_sizes.is_empty()
    }
}

/// The ordered list of partitions and their allocation state. Block order is
/// fixed at construction and never re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStore {
    blocks: Vec<Block>,
}

impl BlockStore {
    pub fn new(sizes: &[usize]) -> Result<Self> {
        if sizes.is_empty() {
            return Err(Error::InvalidInput("block list is empty".to_string()));
        }
        if let Some(pos) = sizes.iter().position(|&size| size == 0) {
            return Err(Error::InvalidInput(format!(
                "block {} has size 0, block sizes must be positive",
                pos + 1
            )));
        }
        Ok(Self {
            blocks: sizes
                .iter()
                .enumerate()
                .map(|(index, &size)| Block::new(index, size))
                .collect(),
        })
    }

    /// Commit `process_size` into the block at `block_index`. The caller is
    /// expected to have picked a block that fits; a failure here means the
    /// allocator scanned wrong, and the store stays untouched.
    pub fn commit(&mut self, block_index: usize, process_size: usize) -> Result<()> {
        let Some(block) = self.blocks.get_mut(block_index) else {
            return Err(Error::PreconditionViolated(format!(
                "commit to block index {block_index} out of range"
            )));
        };
        if process_size > block.remaining_size {
            return Err(Error::PreconditionViolated(format!(
                "commit of size {process_size} exceeds remaining {} in block {}",
                block.remaining_size,
                block_index + 1
            )));
        }
        block.remaining_size -= process_size;
        block.allocated_sizes.push(process_size);
        Ok(())
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
