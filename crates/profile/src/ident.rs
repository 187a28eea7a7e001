use uuid::Uuid;

/// Source of globally-unique identifiers for profiles and payloads.
///
/// Injected into [`crate::ProfileBuilder`] so tests can supply
/// deterministic, repeatable sequences.
pub trait IdentifierSource {
    fn next_identifier(&mut self) -> String;
}

/// Production source: a random 128-bit value rendered in canonical
/// hyphenated hexadecimal form. Collisions are treated as negligible.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomIdentifiers;

impl IdentifierSource for RandomIdentifiers {
    fn next_identifier(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}
