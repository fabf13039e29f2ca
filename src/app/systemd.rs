// Handles all interactions with the `systemctl` command.

use super::model::CheckResult;
use anyhow::{Context, Result};
use std::process::{Command, Output};
use tracing::{debug, warn};

/// Something that can report whether a named service is active.
pub trait StatusQuery {
    fn query(&self, service: &str) -> CheckResult;
}

/// Queries the system manager through `systemctl is-active`.
#[derive(Debug, Clone)]
pub struct Systemctl {
    program: String,
}

impl Systemctl {
    pub fn new() -> Self {
        Self::with_program("systemctl")
    }

    /// Uses a different executable in place of `systemctl`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn is_active(&self, service: &str) -> Result<Output> {
        // Output is captured so the report stays one line per service.
        Command::new(&self.program)
            .arg("is-active")
            .arg(service)
            .output()
            .with_context(|| format!("failed to execute {}", self.program))
    }
}

impl Default for Systemctl {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusQuery for Systemctl {
    fn query(&self, service: &str) -> CheckResult {
        match self.is_active(service) {
            Ok(output) => {
                let state = String::from_utf8_lossy(&output.stdout);
                debug!(
                    service,
                    code = ?output.status.code(),
                    state = state.trim(),
                    "systemctl is-active finished"
                );

                if output.status.success() {
                    CheckResult::Running
                } else {
                    CheckResult::NotRunning
                }
            }
            Err(e) => {
                let reason = format!("{:#}", e);
                warn!(service, error = %reason, "could not run status query");
                CheckResult::CheckError(reason)
            }
        }
    }
}
