// The central health check driver.

use std::io::Write;

use anyhow::Result;

pub mod model;
pub mod systemd;

use model::{CheckResult, SERVICES};
use systemd::StatusQuery;

pub const BANNER: &str = "Starting health check...";

pub struct App<Q> {
    query: Q,
    services: &'static [&'static str],
}

impl<Q: StatusQuery> App<Q> {
    pub fn new(query: Q) -> Self {
        Self::with_services(query, SERVICES)
    }

    pub fn with_services(query: Q, services: &'static [&'static str]) -> Self {
        Self { query, services }
    }

    /// Prints the banner, then one line per service in list order.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{}", BANNER)?;

        for service in self.services {
            self.check(service, out)?;
        }

        out.flush()?;
        Ok(())
    }

    /// Checks one service and writes its report line.
    pub fn check<W: Write>(&self, service: &str, out: &mut W) -> Result<CheckResult> {
        let result = self.query.query(service);
        writeln!(out, "{}", result.line(service))?;
        Ok(result)
    }
}
