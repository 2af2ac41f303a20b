use anyhow::Result;
use ulstools::temp_filename;

use super::{report_error, Context};
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};

pub fn cmd_tempname(prefix: Option<&str>, suffix: Option<&str>, ctx: &Context) -> Result<bool> {
    const COMMAND: &str = "tempname";

    if ctx.json() {
        emit_event(&StartEvent::new(COMMAND))?;
    }

    let success = match temp_filename(prefix, suffix) {
        Ok(path) => {
            if ctx.json() {
                emit_event(&DataEvent::new(
                    "tempname",
                    COMMAND,
                    serde_json::json!({ "path": path }),
                ))?;
            } else {
                println!("{}", path.display());
            }
            true
        }
        Err(err) => {
            report_error(COMMAND, &format!("failed to reserve a temp filename: {err}"), ctx)?;
            false
        }
    };

    if ctx.json() {
        emit_event(&CompleteEvent::new(COMMAND, success))?;
    }
    Ok(success)
}
