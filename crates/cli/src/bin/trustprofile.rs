// SPDX-FileCopyrightText: 2026 the trustprofile contributors
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;

use trustprofile_cli::cli::Cli;
use trustprofile_cli::{run, trace_init};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    trace_init(cli.debug);

    let report = run(&cli)?;

    if cli.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!(
            "{} certificate(s) incorporated, {} skipped",
            report.incorporated(),
            report.skipped().len()
        );
        for skip in report.skipped() {
            println!("  record {}: {}", skip.index, skip.reason);
        }
    }
    Ok(())
}
