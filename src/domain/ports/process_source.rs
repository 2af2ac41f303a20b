//! ProcessSource port - abstraction over the OS process table
//!
//! Lets the running-script check work against a fixed list in tests and
//! against `sysinfo` in production.

/// Snapshot of one process as seen by the running-script check
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessInfo {
    pub pid: u32,
    /// Full command line; empty when it could not be read
    pub cmdline: Vec<String>,
}

impl ProcessInfo {
    pub fn new(pid: u32, cmdline: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            pid,
            cmdline: cmdline.into_iter().map(Into::into).collect(),
        }
    }
}

/// Lists processes visible to the current user.
///
/// Implementations skip processes that vanish or deny access while being
/// listed instead of failing the whole listing.
pub trait ProcessSource {
    fn processes(&self) -> Vec<ProcessInfo>;
}

/// Fixed process list, mostly for tests
impl ProcessSource for Vec<ProcessInfo> {
    fn processes(&self) -> Vec<ProcessInfo> {
        self.clone()
    }
}
