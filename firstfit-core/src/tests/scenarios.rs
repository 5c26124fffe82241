#[cfg(test)]
mod suite {
    use crate::simulation::{Outcome, Simulation};
    use pretty_assertions::assert_eq;

    fn run(block_sizes: &[usize], process_sizes: &[usize]) -> (Simulation, Vec<Outcome>) {
        let mut sim = Simulation::new(block_sizes, process_sizes.len()).unwrap();
        let outcomes = process_sizes
            .iter()
            .map(|&size| sim.submit_process(size).unwrap().outcome)
            .collect();
        (sim, outcomes)
    }

    #[test]
    fn test_textbook_example() {
        let (sim, outcomes) = run(&[100, 500, 200, 300, 600], &[212, 417, 112, 426]);
        assert_eq!(
            outcomes,
            vec![
                Outcome::Assigned { block_index: 1 },
                Outcome::Assigned { block_index: 4 },
                Outcome::Assigned { block_index: 1 },
                Outcome::Rejected,
            ]
        );

        let blocks = sim.store().blocks();
        assert_eq!(blocks[1].remaining_size(), 176);
        assert_eq!(blocks[1].allocated_sizes(), &[212, 112]);
        assert_eq!(blocks[4].remaining_size(), 183);
    }

    #[test]
    fn test_exact_fit_then_reject() {
        let (sim, outcomes) = run(&[50], &[50, 1]);
        assert_eq!(
            outcomes,
            vec![Outcome::Assigned { block_index: 0 }, Outcome::Rejected]
        );
        assert_eq!(sim.store().blocks()[0].remaining_size(), 0);
    }

    #[test]
    fn test_blocks_are_reused_while_capacity_remains() {
        // Block 1 still has 5 left after the first process, so the second
        // one lands there too. Only the third spills over to block 2.
        let (sim, outcomes) = run(&[10, 10], &[5, 5, 5]);
        assert_eq!(
            outcomes,
            vec![
                Outcome::Assigned { block_index: 0 },
                Outcome::Assigned { block_index: 0 },
                Outcome::Assigned { block_index: 1 },
            ]
        );
        assert_eq!(sim.store().blocks()[0].allocated_sizes(), &[5, 5]);
    }

    #[test]
    fn test_exact_fits_fill_both_blocks() {
        let (_, outcomes) = run(&[5, 5], &[5, 5, 5]);
        assert_eq!(
            outcomes,
            vec![
                Outcome::Assigned { block_index: 0 },
                Outcome::Assigned { block_index: 1 },
                Outcome::Rejected,
            ]
        );
    }

    #[test]
    fn test_summary_keeps_duplicate_sized_processes_apart() {
        // Two processes of the same size land in different blocks. The
        // summary must report each one's own block, not the block where the
        // size happens to appear.
        let (sim, _) = run(&[5, 5], &[5, 5]);
        let summary = sim.final_summary();
        assert_eq!(
            summary.processes[0].outcome(),
            Outcome::Assigned { block_index: 0 }
        );
        assert_eq!(
            summary.processes[1].outcome(),
            Outcome::Assigned { block_index: 1 }
        );
    }

    #[test]
    fn test_step_report_text() {
        let mut sim = Simulation::new(&[100, 500], 1).unwrap();
        let result = sim.submit_process(212).unwrap();
        assert_eq!(
            result.to_string(),
            "Process 1 (Size: 212) allocated to Block 2.\n\
             \n\
             Current Block Status:\n\
             Block 1: Free (Remaining Size: 100)\n\
             Block 2: Allocated (Remaining Size: 288) | Allocated Processes: 212\n"
        );
    }

    #[test]
    fn test_summary_text() {
        let (sim, _) = run(&[5, 5], &[5, 5, 5]);
        assert_eq!(
            sim.final_summary().to_string(),
            "Final Memory Allocation Summary:\n\
             Process 1 (Size: 5) allocated to Block 1.\n\
             Process 2 (Size: 5) allocated to Block 2.\n\
             Process 3 (Size: 5) could not be allocated.\n\
             \n\
             Final Block Status:\n\
             Block 1: Allocated (Remaining Size: 0) | Allocated Processes: 5\n\
             Block 2: Allocated (Remaining Size: 0) | Allocated Processes: 5\n"
        );
    }
}
