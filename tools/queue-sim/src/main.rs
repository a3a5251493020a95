//! Console front end for `ring-queue`: a menu over a single queue plus a scripted wrap-around demo.

use std::io::{self, Write};

use ring_queue::RingQueue;
use tracing::info;

mod demo;
mod flags;
mod logger;
mod menu;

/// Number of slots in the simulated queue.
pub const QUEUE_CAPACITY: usize = 20;

fn main() -> anyhow::Result<()> {
    let flags = match flags::QueueSim::from_env() {
        Ok(flags) => flags,
        Err(err) => {
            if err.is_help() {
                println!("{err}");
                std::process::exit(0);
            } else {
                eprintln!("error: {err}\n");
                println!("{}", flags::QueueSim::USAGE);
                std::process::exit(2);
            }
        }
    };
    logger::install(flags.verbose)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if flags.demo {
        demo::run::<QUEUE_CAPACITY>(&mut out)?;
        return Ok(());
    }

    writeln!(out, "Circular Queue Simulation")?;
    let mut queue: RingQueue<QUEUE_CAPACITY> = RingQueue::new();
    menu::run(&mut queue, io::stdin().lock(), &mut out)?;
    info!(remaining = queue.len(), "session ended");
    Ok(())
}
