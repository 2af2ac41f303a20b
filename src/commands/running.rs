use anyhow::Result;
use ulstools::env::matcher_for;
use ulstools::infrastructure::SysinfoProcessSource;

use super::Context;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};

pub fn cmd_running(
    script_prefix: &str,
    interpreter: Option<String>,
    threshold: Option<usize>,
    ctx: &Context,
) -> Result<bool> {
    const COMMAND: &str = "running";

    let mut process = ctx.config.process.clone();
    if let Some(interpreter) = interpreter {
        process.interpreter = interpreter;
    }
    if let Some(threshold) = threshold {
        process.threshold = threshold;
    }

    if ctx.json() {
        emit_event(&StartEvent::new(COMMAND))?;
    }

    let matcher = matcher_for(script_prefix, &process);
    let script = matcher.script_name();
    let matches = matcher.count(&SysinfoProcessSource);
    let running = matches >= matcher.threshold();
    tracing::debug!(script, matches, running, "running check");

    if ctx.json() {
        emit_event(&DataEvent::new(
            "running",
            COMMAND,
            serde_json::json!({
                "script": script,
                "running": running,
                "matches": matches,
                "threshold": matcher.threshold(),
            }),
        ))?;
        emit_event(&CompleteEvent::new(COMMAND, running))?;
    } else if running {
        println!("{script}: running");
    } else {
        println!("{script}: not running");
    }

    Ok(running)
}
