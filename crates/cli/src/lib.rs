// SPDX-FileCopyrightText: 2026 the trustprofile contributors
// SPDX-License-Identifier: Apache-2.0

pub mod cli;

use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use trustprofile::bundle::split_records;
use trustprofile::{ProfileBuilder, ProfileSerializer, RandomIdentifiers, RunReport, TrustProfile};

use crate::cli::Cli;

/// Init logging to stderr. `TRUSTPROFILE_LOG` overrides the level; the
/// `--debug` switch raises the default from `info` to `debug`.
pub fn trace_init(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("TRUSTPROFILE_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Drive one conversion run: read every bundle, feed its records to the
/// builder in input order, serialize once, then write the artifact.
///
/// # Errors
/// Per-record failures are logged and counted, never fatal. Unreadable
/// inputs, serialization failure and output I/O abort the run.
pub fn run(cli: &Cli) -> anyhow::Result<RunReport> {
    let mut builder = ProfileBuilder::new(RandomIdentifiers);
    let mut profile = builder.begin(
        cli.organization.clone(),
        cli.removal_allowed,
        cli.display_name.clone(),
    );
    let mut report = RunReport::new();

    let mut ordinal = 0usize;
    for bundle in &cli.bundles {
        let text = fs::read_to_string(bundle)
            .with_context(|| format!("reading bundle {}", bundle.display()))?;
        for record in split_records(&text) {
            ordinal += 1;
            match builder.add_certificate(&mut profile, record) {
                Ok(()) => report.record_incorporated(),
                Err(err) => {
                    warn!(record = ordinal, %err, "skipping certificate record");
                    report.record_skip(ordinal, err.to_string());
                }
            }
        }
    }

    let output = cli.output_path();
    let bytes = ProfileSerializer::to_bytes(&profile)?;
    fs::write(&output, bytes)
        .with_context(|| format!("writing profile {}", output.display()))?;
    info!(
        path = %output.display(),
        payloads = profile.payloads().len(),
        "wrote trust profile"
    );

    if let Some(dir) = &cli.export_certs {
        export_certificates(&profile, dir)?;
    }

    Ok(report)
}

/// Write each payload's raw certificate bytes to `dir` under the payload's
/// certificate file name.
fn export_certificates(profile: &TrustProfile, dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating export directory {}", dir.display()))?;
    for payload in profile.payloads() {
        let path = dir.join(payload.certificate_file_name());
        fs::write(&path, payload.certificate_bytes())
            .with_context(|| format!("exporting {}", path.display()))?;
    }
    info!(count = profile.payloads().len(), dir = %dir.display(), "exported certificates");
    Ok(())
}
