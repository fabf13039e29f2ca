// Reports whether each configured service is active.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod app;

use app::{App, systemd::Systemctl};

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries only the report.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let app = App::new(Systemctl::new());
    let stdout = std::io::stdout();
    app.run(&mut stdout.lock())
}
