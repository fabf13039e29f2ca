// Defines the core data structures for the application.

/// Services checked on every run, in print order.
pub const SERVICES: &[&str] = &["sshd", "firewalld", "auditd"];

/// Outcome of asking the service manager about a single service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Running,
    /// Any non-zero exit, whether the unit is stopped, failed or unknown.
    NotRunning,
    CheckError(String),
}

impl CheckResult {
    /// Formats the report line for `service`, without a trailing newline.
    pub fn line(&self, service: &str) -> String {
        match self {
            CheckResult::Running => format!("[OK] {} is running.", service),
            CheckResult::NotRunning => format!("[FAIL] {} is NOT running.", service),
            CheckResult::CheckError(reason) => {
                format!("[ERROR] Could not check {}: {}.", service, reason)
            }
        }
    }
}
