// SPDX-FileCopyrightText: 2026 the trustprofile contributors
// SPDX-License-Identifier: Apache-2.0

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

use crate::classify::CertificateKind;
use crate::error::RecordError;
use crate::ident::IdentifierSource;
use crate::record::RecordExtractor;

/// The profile aggregate. Created once per run, grown by appending payloads
/// in processing order, then handed to the serializer. Payload order is
/// never re-sorted.
#[derive(Debug, Clone)]
pub struct TrustProfile {
    organization: String,
    removal_allowed: bool,
    display_name: String,
    uuid: String,
    identifier: String,
    payloads: Vec<CertificatePayload>,
}

impl TrustProfile {
    #[must_use]
    pub fn organization(&self) -> &str {
        &self.organization
    }

    #[must_use]
    pub fn removal_allowed(&self) -> bool {
        self.removal_allowed
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Identifier of the profile itself; distinct from [`Self::uuid`].
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    #[must_use]
    pub fn payloads(&self) -> &[CertificatePayload] {
        &self.payloads
    }
}

/// One certificate entry of the profile. Owned exclusively by its
/// [`TrustProfile`]; carries the decoded certificate bytes.
#[derive(Debug, Clone)]
pub struct CertificatePayload {
    uuid: String,
    kind: CertificateKind,
    type_identifier: String,
    display_name: String,
    certificate_file_name: String,
    body: Vec<u8>,
}

impl CertificatePayload {
    #[must_use]
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    #[must_use]
    pub fn kind(&self) -> CertificateKind {
        self.kind
    }

    /// Fixed type prefix for the kind, dot, payload uuid.
    #[must_use]
    pub fn type_identifier(&self) -> &str {
        &self.type_identifier
    }

    /// The extracted subject CN. Unusual input can make this unusual text;
    /// it is carried through untouched.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn certificate_file_name(&self) -> &str {
        &self.certificate_file_name
    }

    /// Decoded binary certificate body.
    #[must_use]
    pub fn certificate_bytes(&self) -> &[u8] {
        &self.body
    }
}

/// Owns profile construction: runs each record through extraction, decode
/// and classification, and appends the resulting payload.
#[derive(Debug)]
pub struct ProfileBuilder<I> {
    extractor: RecordExtractor,
    identifiers: I,
}

impl<I: IdentifierSource> ProfileBuilder<I> {
    #[must_use]
    pub fn new(identifiers: I) -> Self {
        Self::with_extractor(identifiers, RecordExtractor::new())
    }

    /// Builder with a non-default extractor (custom marker list).
    #[must_use]
    pub fn with_extractor(identifiers: I, extractor: RecordExtractor) -> Self {
        Self {
            extractor,
            identifiers,
        }
    }

    /// Allocate the profile aggregate. The uuid and the identifier are two
    /// distinct draws from the identifier source; the output document
    /// requires them to differ.
    pub fn begin(
        &mut self,
        organization: impl Into<String>,
        removal_allowed: bool,
        display_name: impl Into<String>,
    ) -> TrustProfile {
        TrustProfile {
            organization: organization.into(),
            removal_allowed,
            display_name: display_name.into(),
            uuid: self.identifiers.next_identifier(),
            identifier: self.identifiers.next_identifier(),
            payloads: Vec::new(),
        }
    }

    /// Turn one textual record into a payload and append it to `profile`.
    ///
    /// # Errors
    /// [`RecordError`] when extraction or base64 decoding fails. The profile
    /// is left untouched and no identifier is consumed; the caller moves on
    /// to the next record.
    pub fn add_certificate(
        &mut self,
        profile: &mut TrustProfile,
        record: &str,
    ) -> Result<(), RecordError> {
        let record = self.extractor.extract(record)?;
        let body = decode_body(record.base64_body())?;
        let kind = CertificateKind::classify(record.subject_cn(), record.issuer_cn());
        let uuid = self.identifiers.next_identifier();
        let type_identifier = format!("{}.{}", kind.payload_type(), uuid);
        debug!(name = %record.subject_cn(), %kind, "adding certificate payload");

        profile.payloads.push(CertificatePayload {
            uuid,
            kind,
            type_identifier,
            display_name: record.subject_cn().to_string(),
            certificate_file_name: format!("{}.cer", record.subject_cn()),
            body,
        });
        Ok(())
    }
}

/// Decode the PEM interior. The captured body keeps its line breaks, so
/// whitespace is stripped before handing it to the base64 engine.
pub(crate) fn decode_body(base64_body: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let compact: String = base64_body.split_whitespace().collect();
    STANDARD.decode(compact)
}
