use std::io::{self, BufRead, Write};

use ring_queue::RingQueue;
use tracing::{debug, info, trace};

use crate::demo;

/// A line of user input, read as a number.
enum Input {
    Number(i32),
    Invalid,
    Closed,
}

/// Menu choice, numbered as printed.
#[derive(Debug)]
enum Choice {
    Enqueue,
    Dequeue,
    Peek,
    Display,
    Demo,
    Exit,
}

impl TryFrom<i32> for Choice {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Ok(match value {
            1 => Choice::Enqueue,
            2 => Choice::Dequeue,
            3 => Choice::Peek,
            4 => Choice::Display,
            5 => Choice::Demo,
            6 => Choice::Exit,
            other => return Err(other),
        })
    }
}

const MENU: &str = "\n--- Circular Queue Menu ---
1. Enqueue (push to rear)
2. Dequeue (pop from front)
3. Peek (front element)
4. Display internal state
5. Auto Demo (wrap-around)
6. Exit
Enter choice: ";

/// Runs the interactive menu against `queue` until the user picks exit or input runs out.
pub fn run<const N: usize>(
    queue: &mut RingQueue<N>,
    mut input: impl BufRead,
    mut out: impl Write,
) -> io::Result<()> {
    loop {
        prompt(&mut out, MENU)?;
        let choice = match read_number(&mut input)? {
            Input::Number(n) => n,
            // bad line is dropped, show the menu again
            Input::Invalid => continue,
            Input::Closed => {
                debug!("input closed, leaving menu");
                return Ok(());
            }
        };

        let choice = match Choice::try_from(choice) {
            Ok(choice) => choice,
            Err(other) => {
                trace!(other, "unknown menu choice");
                writeln!(out, "Invalid choice.")?;
                continue;
            }
        };
        debug!(?choice, "menu choice");

        match choice {
            Choice::Enqueue => {
                prompt(&mut out, "Enter value to enqueue: ")?;
                let value = match read_number(&mut input)? {
                    Input::Number(v) => v,
                    Input::Invalid => {
                        writeln!(out, "Invalid value.")?;
                        continue;
                    }
                    Input::Closed => return Ok(()),
                };
                match queue.enqueue(value) {
                    Ok(()) => {
                        writeln!(out, "Enqueued {value}")?;
                        write!(out, "{}", queue.render())?;
                    }
                    Err(_) => {
                        info!(value, "enqueue rejected, queue full");
                        writeln!(
                            out,
                            "Enqueue failed: queue overflow (capacity {})",
                            queue.capacity()
                        )?;
                    }
                }
            }
            Choice::Dequeue => match queue.dequeue() {
                Ok(value) => {
                    writeln!(out, "Dequeued {value}")?;
                    write!(out, "{}", queue.render())?;
                }
                Err(e) => {
                    info!("dequeue rejected: {e}");
                    writeln!(out, "Dequeue failed: {e}")?;
                }
            },
            Choice::Peek => match queue.peek() {
                Ok(value) => writeln!(out, "Front element = {value}")?,
                Err(_) => writeln!(out, "Peek failed: queue empty")?,
            },
            Choice::Display => write!(out, "{}", queue.render())?,
            Choice::Demo => {
                demo::run::<N>(&mut out)?;
            }
            Choice::Exit => {
                writeln!(out, "Exiting.")?;
                return Ok(());
            }
        }
    }
}

fn prompt(out: &mut impl Write, text: &str) -> io::Result<()> {
    write!(out, "{text}")?;
    out.flush()
}

/// Reads one line and parses its first token. Anything after the number is discarded along with
/// the rest of the line. Bytes that are not UTF-8 make the line invalid rather than failing the
/// read.
fn read_number(input: &mut impl BufRead) -> io::Result<Input> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(Input::Closed);
    }
    let parsed = String::from_utf8_lossy(&line)
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok());
    Ok(match parsed {
        Some(n) => Input::Number(n),
        None => Input::Invalid,
    })
}

#[cfg(test)]
mod test {
    use super::run;
    use ring_queue::RingQueue;
    use std::io::Cursor;

    fn transcript<const N: usize>(queue: &mut RingQueue<N>, input: impl AsRef<[u8]>) -> String {
        let mut out = Vec::new();
        run(queue, Cursor::new(input.as_ref()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn enqueue_peek_dequeue() {
        let mut queue: RingQueue<20> = RingQueue::new();
        let text = transcript(&mut queue, "1\n5\n1\n6\n3\n2\n6\n");

        assert!(text.contains("Enter value to enqueue: Enqueued 5\n"));
        assert!(text.contains("Enqueued 6\n"));
        assert!(text.contains("Front element = 5\n"));
        assert!(text.contains("Dequeued 5\n"));
        assert!(text.ends_with("Exiting.\n"));
        assert_eq!(queue.contents().as_slice(), &[6]);
    }

    #[test]
    fn failures_do_not_end_the_session() {
        let mut queue: RingQueue<1> = RingQueue::new();
        let text = transcript(&mut queue, "2\n3\n1\n1\n1\n2\n4\n6\n");

        assert!(text.contains("Dequeue failed: queue underflow (empty)\n"));
        assert!(text.contains("Peek failed: queue empty\n"));
        assert!(text.contains("Enqueue failed: queue overflow (capacity 1)\n"));
        assert!(text.ends_with("Exiting.\n"));
        assert!(queue.is_full());
        assert_eq!(queue.peek(), Ok(1));
    }

    #[test]
    fn bad_input_is_discarded() {
        let mut queue: RingQueue<4> = RingQueue::new();
        let text = transcript(&mut queue, "abc\n9\n1\nxyz\n1\n12 trailing\n6\n");

        // menu shown for: start, after "abc", after "9", after "xyz", after 12 was queued
        assert_eq!(text.matches("--- Circular Queue Menu ---").count(), 5);
        assert!(text.contains("Invalid choice.\n"));
        assert!(text.contains("Invalid value.\n"));
        assert!(text.contains("Enqueued 12\n"));
        assert_eq!(queue.contents().as_slice(), &[12]);
    }

    #[test]
    fn undecodable_line_is_discarded() {
        let mut queue: RingQueue<4> = RingQueue::new();
        let text = transcript(&mut queue, b"\xff\xfe\n1\n7\n1\n\xc3(\n6\n");

        assert!(text.contains("Enqueued 7\n"));
        assert!(text.contains("Invalid value.\n"));
        assert!(text.ends_with("Exiting.\n"));
        assert_eq!(queue.contents().as_slice(), &[7]);
    }

    #[test]
    fn end_of_input_exits_quietly() {
        let mut queue: RingQueue<4> = RingQueue::new();
        let text = transcript(&mut queue, "1\n3\n");

        assert!(text.contains("Enqueued 3\n"));
        assert!(!text.contains("Exiting."));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn demo_uses_its_own_queue() {
        let mut queue: RingQueue<20> = RingQueue::new();
        let text = transcript(&mut queue, "1\n77\n5\n6\n");

        assert!(text.contains("Auto demo finished.\n"));
        assert_eq!(queue.contents().as_slice(), &[77]);
        assert!(text.contains("Display internal state"));
    }

    #[test]
    fn display_shows_state() {
        let mut queue: RingQueue<3> = RingQueue::new();
        queue.enqueue(4).unwrap();
        let text = transcript(&mut queue, "4\n6\n");

        assert!(text.contains("capacity = 3, count = 1\n"));
        assert!(text.contains(" [ 0] : 4  <-- only element (front==rearprev)\n"));
    }
}
