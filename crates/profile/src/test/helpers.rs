use crate::ident::IdentifierSource;
use crate::profile::ProfileBuilder;

/// Deterministic identifier source: canonical-looking values drawn from a
/// counter, so repeated runs produce identical profiles.
#[derive(Debug, Default)]
pub struct SequentialIdentifiers {
    next: u64,
}

impl IdentifierSource for SequentialIdentifiers {
    fn next_identifier(&mut self) -> String {
        self.next += 1;
        format!("00000000-0000-4000-8000-{:012}", self.next)
    }
}

pub fn builder() -> ProfileBuilder<SequentialIdentifiers> {
    ProfileBuilder::new(SequentialIdentifiers::default())
}

/// A record with the given subject and issuer relative distinguished names
/// (appended after `subject=/` and `issuer=/`) and PEM interior.
pub fn record_text(subject: &str, issuer: &str, body: &str) -> String {
    format!(
        "subject=/{subject}\nissuer=/{issuer}\n-----BEGIN CERTIFICATE-----\n{body}\n-----END CERTIFICATE-----\n"
    )
}
