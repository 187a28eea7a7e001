use thiserror::Error;

/// Failure to pull subject, issuer or certificate body out of one textual
/// record. Always a per-record condition; the batch continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("no PEM certificate block in record")]
    MissingPemBlock,

    #[error("no subject line in record")]
    MissingSubjectLine,

    #[error("no issuer line in record")]
    MissingIssuerLine,

    #[error("no name marker matched on {line} line")]
    NoNameMarker { line: &'static str },
}

/// Everything that can go wrong while turning one record into a payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("malformed base64 certificate body: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Fatal for the whole run; a profile is written completely or not at all.
#[derive(Error, Debug)]
#[error("profile serialization failed: {0}")]
pub struct SerializationError(#[from] plist::Error);
