use std::fmt;

/// Hierarchy classification of a certificate within the bundle. A root
/// authority is self-issued; everything else is treated as intermediate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CertificateKind {
    Root,
    Intermediate,
}

impl CertificateKind {
    /// Root iff subject and issuer common names are equal byte-for-byte.
    /// The textual record carries no basic-constraints field, so equality is
    /// the only signal consulted.
    #[must_use]
    pub fn classify(subject_cn: &str, issuer_cn: &str) -> Self {
        if subject_cn == issuer_cn {
            Self::Root
        } else {
            Self::Intermediate
        }
    }

    /// Fixed payload type string this kind maps to in the output document.
    #[must_use]
    pub fn payload_type(self) -> &'static str {
        match self {
            Self::Root => "com.apple.security.root",
            Self::Intermediate => "com.apple.security.pkcs1",
        }
    }
}

impl fmt::Display for CertificateKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::Intermediate => write!(f, "intermediate"),
        }
    }
}
