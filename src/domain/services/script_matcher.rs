//! Running-script detection
//!
//! A console-script entry point `foo` runs as `<python> .../foo-script.py`.
//! Counting processes shaped like that tells whether another instance of the
//! same script is alive: the caller itself is one match, so the default
//! threshold is two.

use crate::domain::ports::{ProcessInfo, ProcessSource};

/// Matches interpreter + script command lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptMatcher {
    interpreter: String,
    script_name: String,
    threshold: usize,
}

impl ScriptMatcher {
    pub const DEFAULT_INTERPRETER: &'static str = "python";
    pub const DEFAULT_SCRIPT_SUFFIX: &'static str = "-script.py";
    pub const DEFAULT_THRESHOLD: usize = 2;

    /// Matcher for `<script_prefix>-script.py` run by `python`.
    pub fn new(script_prefix: &str) -> Self {
        Self::with_options(
            script_prefix,
            Self::DEFAULT_INTERPRETER,
            Self::DEFAULT_SCRIPT_SUFFIX,
            Self::DEFAULT_THRESHOLD,
        )
    }

    pub fn with_options(
        script_prefix: &str,
        interpreter: &str,
        script_suffix: &str,
        threshold: usize,
    ) -> Self {
        Self {
            interpreter: interpreter.to_string(),
            script_name: format!("{script_prefix}{script_suffix}"),
            threshold: threshold.max(1),
        }
    }

    pub fn script_name(&self) -> &str {
        &self.script_name
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Argument 0 names the interpreter, argument 1 the script.
    pub fn matches(&self, process: &ProcessInfo) -> bool {
        match process.cmdline.as_slice() {
            [program, script, ..] => {
                program.contains(&self.interpreter) && script.contains(&self.script_name)
            }
            _ => false,
        }
    }

    /// True once `threshold` matching processes have been seen.
    pub fn is_running(&self, source: &dyn ProcessSource) -> bool {
        let mut found = 0;
        for process in source.processes() {
            if self.matches(&process) {
                let script = process.cmdline.get(1).map(String::as_str).unwrap_or_default();
                tracing::debug!(pid = process.pid, script, "found running process");
                found += 1;
                if found == self.threshold {
                    return true;
                }
            }
        }
        false
    }

    /// Number of matching processes, without stopping at the threshold.
    pub fn count(&self, source: &dyn ProcessSource) -> usize {
        source
            .processes()
            .iter()
            .filter(|process| self.matches(process))
            .count()
    }
}
