//! `sysinfo`-backed process table

use sysinfo::System;

use crate::domain::ports::{ProcessInfo, ProcessSource};

/// Reads the live process table on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysinfoProcessSource;

impl SysinfoProcessSource {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessSource for SysinfoProcessSource {
    fn processes(&self) -> Vec<ProcessInfo> {
        let system = System::new_all();
        let processes: Vec<ProcessInfo> = system
            .processes()
            .iter()
            .map(|(pid, process)| ProcessInfo {
                pid: pid.as_u32(),
                // Access-denied processes report an empty command line.
                cmdline: process
                    .cmd()
                    .iter()
                    .map(|arg| arg.to_string_lossy().into_owned())
                    .collect(),
            })
            .collect();
        tracing::trace!(count = processes.len(), "listed processes");
        processes
    }
}
