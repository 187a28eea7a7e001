// SPDX-FileCopyrightText: 2026 the trustprofile contributors
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "trustprofile",
    about = "Convert decoded certificate bundles into a device trust profile",
    version
)]
pub struct Cli {
    /// Decoded certificate bundle files (`subject=`/`issuer=` headers plus
    /// PEM blocks, as printed by the PKCS#7 decode step)
    #[arg(required = true)]
    pub bundles: Vec<PathBuf>,

    /// Title of the generated profile
    #[arg(long, env = "TRUSTPROFILE_NAME")]
    pub display_name: String,

    /// Cosmetic name for the organization deploying the profile
    #[arg(long, env = "TRUSTPROFILE_ORG", default_value = "")]
    pub organization: String,

    /// Allow the profile to be removed from the device
    #[arg(long, short = 'r', default_value_t = false)]
    pub removal_allowed: bool,

    /// Output path for the profile
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write each certificate to DIR as an individual .cer file
    #[arg(long, value_name = "DIR")]
    pub export_certs: Option<PathBuf>,

    /// Print the run summary as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long, short = 'd', default_value_t = false)]
    pub debug: bool,
}

impl Cli {
    /// Defaults to `<display-name>.mobileconfig` in the working directory.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.mobileconfig", self.display_name)))
    }
}
