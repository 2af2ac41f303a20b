//! CLI command implementations
//!
//! Each command returns `Ok(true)` on success and `Ok(false)` when it ran
//! but the answer was negative (invalid code, script not running); main maps
//! that to the exit code.

mod hetu;
mod running;
mod tempname;

use anyhow::Result;
use ulstools::config::{Config, OutputFormat};

use crate::cli::Commands;

pub use hetu::{cmd_hetu_age, cmd_hetu_check, cmd_hetu_info};
pub use running::cmd_running;
pub use tempname::cmd_tempname;

/// Settings shared by every command
pub struct Context {
    pub format: OutputFormat,
    pub config: Config,
}

impl Context {
    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

pub fn dispatch(command: Commands, ctx: &Context) -> Result<bool> {
    use crate::cli::HetuCommands;

    match command {
        Commands::Hetu { command } => match command {
            HetuCommands::Check { codes } => cmd_hetu_check(&codes, ctx),
            HetuCommands::Age { code, on } => cmd_hetu_age(&code, on, ctx),
            HetuCommands::Info { code, on } => cmd_hetu_info(&code, on, ctx),
        },
        Commands::Running {
            script_prefix,
            interpreter,
            threshold,
        } => cmd_running(&script_prefix, interpreter, threshold, ctx),
        Commands::Tempname { prefix, suffix } => {
            cmd_tempname(prefix.as_deref(), suffix.as_deref(), ctx)
        }
        Commands::Version => cmd_version(ctx),
    }
}

fn cmd_version(ctx: &Context) -> Result<bool> {
    use crate::ui::json::emit_event;
    use crate::ui::json::events::{CompleteEvent, DataEvent, StartEvent};

    const COMMAND: &str = "version";

    let version = env!("CARGO_PKG_VERSION");
    if ctx.json() {
        emit_event(&StartEvent::new(COMMAND))?;
        emit_event(&DataEvent::new(
            "version",
            COMMAND,
            serde_json::json!({ "version": version }),
        ))?;
        emit_event(&CompleteEvent::new(COMMAND, true))?;
    } else {
        println!("ulstools {version}");
    }
    Ok(true)
}

/// Report a command failure as an `error` event or on stderr.
pub(crate) fn report_error(command: &str, message: &str, ctx: &Context) -> Result<()> {
    use crate::ui::json::{emit_event, events::ErrorEvent};

    if ctx.json() {
        emit_event(&ErrorEvent::new(command, message))?;
    } else {
        eprintln!("Error: {message}");
    }
    Ok(())
}
