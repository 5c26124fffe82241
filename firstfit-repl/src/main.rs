use firstfit_core::Simulation;
use std::io::{stdin, stdout, Write};

fn prompt(text: &str) -> String {
    print!("{text}");
    let _ = stdout().flush();

    let mut s = String::new();
    stdin()
        .read_line(&mut s)
        .expect("Did not enter a correct string");
    if let Some('\n') = s.chars().next_back() {
        s.pop();
    }
    if let Some('\r') = s.chars().next_back() {
        s.pop();
    }
    s
}

fn prompt_number(text: &str) -> usize {
    loop {
        match prompt(text).trim().parse::<usize>() {
            Ok(n) if n > 0 => return n,
            _ => println!("Please enter a number greater than zero."),
        }
    }
}

fn prompt_block_sizes(count: usize) -> Vec<usize> {
    loop {
        let input = prompt("Enter block sizes (comma-separated): ");
        let parsed: Result<Vec<usize>, _> = input
            .split(',')
            .map(|part| part.trim().parse::<usize>())
            .collect();
        match parsed {
            Ok(sizes) if sizes.len() != count => {
                println!("Number of block sizes does not match the number of blocks entered.")
            }
            Ok(sizes) if sizes.iter().any(|&size| size == 0) => {
                println!("Block sizes must be greater than zero.")
            }
            Ok(sizes) => return sizes,
            Err(_) => println!("Please enter valid numeric block sizes."),
        }
    }
}

fn main() {
    let num_blocks = prompt_number("Number of Memory Blocks: ");
    let sizes = prompt_block_sizes(num_blocks);
    let num_processes = prompt_number("Enter the number of Processes: ");

    let mut sim = match Simulation::new(&sizes, num_processes) {
        Ok(sim) => sim,
        Err(e) => {
            println!("{e}");
            return;
        }
    };
    println!("Blocks setup completed. Now, enter process sizes one by one.");

    while !sim.is_closed() {
        let size = prompt_number("Enter process size: ");
        match sim.submit_process(size) {
            Ok(result) => println!("{result}"),
            Err(e) => println!("{e}"),
        }
    }

    println!("{}", sim.final_summary());
}
