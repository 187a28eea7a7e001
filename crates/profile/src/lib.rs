// SPDX-FileCopyrightText: 2026 the trustprofile contributors
// SPDX-License-Identifier: Apache-2.0

pub mod bundle;
pub mod classify;
pub mod error;
pub mod ident;
pub mod profile;
pub mod record;
pub mod report;
pub mod serialize;

#[cfg(test)]
mod test;

pub use classify::CertificateKind;
pub use error::{ExtractionError, RecordError, SerializationError};
pub use ident::{IdentifierSource, RandomIdentifiers};
pub use profile::{CertificatePayload, ProfileBuilder, TrustProfile};
pub use record::{CertificateRecord, RecordExtractor};
pub use report::RunReport;
pub use serialize::ProfileSerializer;
