use std::io::{self, Write};

use ring_queue::RingQueue;
use tracing::{debug, info};

/// Scripted run on a fresh queue: enqueue 1..=6, dequeue three times, then enqueue 7..=10. With
/// enough capacity the second batch of writes wraps `rear` forward past the freed slots. The state
/// is printed after every step and the final queue is returned.
pub fn run<const N: usize>(out: &mut impl Write) -> io::Result<RingQueue<N>> {
    info!(capacity = N, "starting auto demo");
    let mut queue = RingQueue::<N>::new();
    writeln!(
        out,
        "\nAuto Demo: enqueue 1..6, dequeue 3, enqueue 7..10 (shows wrap-around)"
    )?;

    for value in 1..=6 {
        enqueue_step(&mut queue, value, out)?;
    }
    for _ in 0..3 {
        match queue.dequeue() {
            Ok(value) => writeln!(out, "\nDequeued {value}")?,
            Err(_) => writeln!(out, "\nAttempt to dequeue -> underflow")?,
        }
        write!(out, "{}", queue.render())?;
    }
    for value in 7..=10 {
        enqueue_step(&mut queue, value, out)?;
    }

    writeln!(out, "\nAuto demo finished.")?;
    debug!(
        front = queue.front_index(),
        rear = queue.rear_index(),
        count = queue.len(),
        "auto demo finished"
    );
    Ok(queue)
}

fn enqueue_step<const N: usize>(
    queue: &mut RingQueue<N>,
    value: i32,
    out: &mut impl Write,
) -> io::Result<()> {
    match queue.enqueue(value) {
        Ok(()) => writeln!(out, "\nEnqueued {value}")?,
        Err(_) => writeln!(out, "\nAttempt to enqueue {value} -> overflow")?,
    }
    write!(out, "{}", queue.render())
}
