xflags::xflags! {
    /// Circular queue simulation. Opens an interactive menu unless `--demo` is given.
    cmd queue-sim {
        /// Run the wrap-around demonstration once and exit.
        optional --demo
        /// Raise log verbosity on stderr (warn, info, debug, trace). May be repeated.
        repeated -v, --verbose
    }
}

impl QueueSim {
    /// Usage text. The generated `HELP_` is private to this module.
    pub const USAGE: &'static str = Self::HELP_;
}
