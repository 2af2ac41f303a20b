//! Environment helpers for console-script launched tools
//!
//! Currently the "already running" check, which lets a GUI entry point refuse
//! to start a second copy of itself.

use crate::config::ProcessConfig;
use crate::domain::ports::ProcessSource;
use crate::domain::services::ScriptMatcher;
use crate::infrastructure::SysinfoProcessSource;

/// `true` when another process is running `<script_prefix>-script.py`.
///
/// The calling process counts as one match, so this only fires on the
/// second instance. Uses the default interpreter, suffix and threshold.
pub fn already_running(script_prefix: &str) -> bool {
    already_running_with(script_prefix, &ProcessConfig::default(), &SysinfoProcessSource)
}

/// [`already_running`] with explicit matching options and process source.
pub fn already_running_with(
    script_prefix: &str,
    config: &ProcessConfig,
    source: &dyn ProcessSource,
) -> bool {
    let matcher = matcher_for(script_prefix, config);
    let running = matcher.is_running(source);
    tracing::debug!(script = matcher.script_name(), running, "already_running check");
    running
}

pub fn matcher_for(script_prefix: &str, config: &ProcessConfig) -> ScriptMatcher {
    ScriptMatcher::with_options(
        script_prefix,
        &config.interpreter,
        &config.script_suffix,
        config.threshold,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ProcessInfo;

    #[test]
    fn uses_configured_interpreter() {
        let procs = vec![
            ProcessInfo::new(1, ["/usr/bin/python3", "/env/bin/tool-script.py"]),
            ProcessInfo::new(2, ["pypy", "/env/bin/tool-script.py"]),
            ProcessInfo::new(3, ["pypy", "/env/bin/tool-script.py"]),
        ];

        let default = ProcessConfig::default();
        assert!(!already_running_with("tool", &default, &procs));

        let pypy = ProcessConfig {
            interpreter: "pypy".to_string(),
            ..ProcessConfig::default()
        };
        assert!(already_running_with("tool", &pypy, &procs));
    }

    #[test]
    fn test_binary_is_not_a_python_script() {
        assert!(!already_running("ulstools-test-nonexistent"));
    }
}
