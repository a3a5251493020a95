use std::io;

use tracing::{Dispatch, Level};
use tracing_subscriber::{Registry, filter::Targets, prelude::*};

/// Installs the global subscriber. Logs go to stderr so they never interleave with the menu
/// transcript on stdout.
pub fn install(verbosity: u32) -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_filter(filter(verbosity));
    let dispatch = Dispatch::new(Registry::default().with(fmt_layer));
    dispatch.try_init()?;
    Ok(())
}

/// Only this binary's own events pass, at the level picked by `-v`.
fn filter(verbosity: u32) -> Targets {
    Targets::new().with_target("queue_sim", level(verbosity))
}

fn level(verbosity: u32) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[cfg(test)]
mod test {
    use super::{filter, level};
    use tracing::Level;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level(0), Level::WARN);
        assert_eq!(level(1), Level::INFO);
        assert_eq!(level(2), Level::DEBUG);
        assert_eq!(level(3), Level::TRACE);
        assert_eq!(level(10), Level::TRACE);
    }

    #[test]
    fn filter_follows_verbosity() {
        let quiet = filter(0);
        assert!(quiet.would_enable("queue_sim::menu", &Level::WARN));
        assert!(!quiet.would_enable("queue_sim::menu", &Level::INFO));

        let chatty = filter(2);
        assert!(chatty.would_enable("queue_sim::demo", &Level::DEBUG));
        assert!(!chatty.would_enable("queue_sim::demo", &Level::TRACE));
    }

    #[test]
    fn other_crates_are_silenced() {
        assert!(!filter(3).would_enable("ring_queue", &Level::WARN));
    }
}
