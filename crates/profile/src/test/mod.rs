mod helpers;

pub use helpers::{builder, record_text, SequentialIdentifiers};

use crate::profile::TrustProfile;

/// A two-payload profile (one root, one intermediate) with deterministic
/// identifiers and default run parameters.
pub fn sample_profile() -> TrustProfile {
    let mut builder = builder();
    let mut profile = builder.begin("", false, "PKI Trust");
    builder
        .add_certificate(&mut profile, data::RECORD_ROOT)
        .unwrap();
    builder
        .add_certificate(&mut profile, data::RECORD_INTERMEDIATE)
        .unwrap();
    profile
}
