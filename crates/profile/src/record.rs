// SPDX-FileCopyrightText: 2026 the trustprofile contributors
// SPDX-License-Identifier: Apache-2.0

use regex::Regex;
use tracing::debug;

use crate::error::ExtractionError;

// Dash counts vary between openssl versions, accept any run of them
const PEM_PATTERN: &str = r"(?s)-+BEGIN CERTIFICATE-+(.*?)-+END CERTIFICATE-+";

/// Name markers tried in order on the subject and issuer lines. `CN=` cannot
/// match a line that only carries `CN = `, so the spaced variants are safe to
/// list second. OU is the fallback for certificates without a common name.
pub const DEFAULT_NAME_MARKERS: &[&str] = &["CN=", "CN = ", "OU=", "OU = "];

/// One certificate pulled out of its textual record: the subject and issuer
/// common names plus the verbatim base64 body between the PEM delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificateRecord {
    subject_cn: String,
    issuer_cn: String,
    base64_body: String,
}

impl CertificateRecord {
    #[must_use]
    pub fn subject_cn(&self) -> &str {
        &self.subject_cn
    }

    #[must_use]
    pub fn issuer_cn(&self) -> &str {
        &self.issuer_cn
    }

    #[must_use]
    pub fn base64_body(&self) -> &str {
        &self.base64_body
    }
}

/// Parses textual certificate records of the shape produced by the PKCS#7
/// decode step: a `subject=` / `issuer=` header pair followed by one PEM
/// block.
#[derive(Debug, Clone)]
pub struct RecordExtractor {
    pem: Regex,
    markers: Vec<String>,
}

impl Default for RecordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self::with_markers(DEFAULT_NAME_MARKERS.iter().map(|m| (*m).to_string()).collect())
    }

    /// Ordered list of markers to try instead of [`DEFAULT_NAME_MARKERS`].
    /// Real-world certificate text varies in spacing, so the list is
    /// configurable rather than baked in.
    #[must_use]
    pub fn with_markers(markers: Vec<String>) -> Self {
        Self {
            pem: Regex::new(PEM_PATTERN).expect("valid PEM pattern"),
            markers,
        }
    }

    /// Extract subject CN, issuer CN and the base64 body from one record.
    ///
    /// # Errors
    /// [`ExtractionError`] when the PEM block, subject line or issuer line is
    /// absent, or no configured marker matches. Per-record; not fatal.
    pub fn extract(&self, record: &str) -> Result<CertificateRecord, ExtractionError> {
        let base64_body = self
            .pem
            .captures(record)
            .and_then(|c| c.get(1))
            .ok_or(ExtractionError::MissingPemBlock)?
            .as_str()
            .to_string();

        let subject_line =
            line_starting_with(record, "subject").ok_or(ExtractionError::MissingSubjectLine)?;
        let issuer_line =
            line_starting_with(record, "issuer").ok_or(ExtractionError::MissingIssuerLine)?;

        let subject_cn = self.common_name(subject_line, "subject")?;
        let issuer_cn = self.common_name(issuer_line, "issuer")?;
        debug!(subject = %subject_cn, issuer = %issuer_cn, "extracted certificate record");

        Ok(CertificateRecord {
            subject_cn,
            issuer_cn,
            base64_body,
        })
    }

    /// Remainder of the line after the first marker that matches. Values are
    /// kept byte-for-byte; spacing or case differences are genuinely
    /// different names to the classifier.
    fn common_name(&self, line: &str, which: &'static str) -> Result<String, ExtractionError> {
        for marker in &self.markers {
            if let Some(at) = line.find(marker.as_str()) {
                if marker.starts_with("OU") {
                    debug!("using OU for CN on {which} line");
                }
                return Ok(line[at + marker.len()..].to_string());
            }
        }
        Err(ExtractionError::NoNameMarker { line: which })
    }
}

fn line_starting_with<'a>(record: &'a str, prefix: &str) -> Option<&'a str> {
    record.lines().find(|line| line.starts_with(prefix))
}
