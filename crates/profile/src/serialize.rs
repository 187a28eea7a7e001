// SPDX-FileCopyrightText: 2026 the trustprofile contributors
// SPDX-License-Identifier: Apache-2.0

use std::io::Write;

use plist::{Dictionary, Integer, Value};

use crate::error::SerializationError;
use crate::profile::{CertificatePayload, TrustProfile};

/// Every payload carries the same fixed description.
const PAYLOAD_DESCRIPTION: &str = "Adds a PKCS#1-formatted certificate";

/// Renders a finished [`TrustProfile`] to the binary property-list document
/// consumed by device-management systems. The key set and nesting are an
/// exact output contract; the decoded certificate bytes go into the format's
/// native data element with no further text encoding.
pub struct ProfileSerializer;

impl ProfileSerializer {
    /// Serialize the profile to bytes.
    ///
    /// # Errors
    /// [`SerializationError`] on any encoding or stream failure; fatal for
    /// the run, no partial output is produced.
    pub fn to_bytes(profile: &TrustProfile) -> Result<Vec<u8>, SerializationError> {
        let mut out = Vec::new();
        Self::write_to(profile, &mut out)?;
        Ok(out)
    }

    /// Serialize the profile into `writer`.
    ///
    /// # Errors
    /// [`SerializationError`] on any encoding or stream failure.
    pub fn write_to<W: Write>(profile: &TrustProfile, writer: W) -> Result<(), SerializationError> {
        Value::Dictionary(root_dictionary(profile)).to_writer_binary(writer)?;
        Ok(())
    }
}

fn root_dictionary(profile: &TrustProfile) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.insert("PayloadVersion".to_string(), integer(1));
    dict.insert("PayloadOrganization".to_string(), string(profile.organization()));
    dict.insert("PayloadUUID".to_string(), string(profile.uuid()));
    dict.insert(
        "PayloadRemovalDisallowed".to_string(),
        Value::Boolean(!profile.removal_allowed()),
    );
    dict.insert("PayloadType".to_string(), string("Configuration"));
    dict.insert("PayloadScope".to_string(), string("System"));
    dict.insert("PayloadDescription".to_string(), string(profile.display_name()));
    dict.insert("PayloadDisplayName".to_string(), string(profile.display_name()));
    dict.insert("PayloadIdentifier".to_string(), string(profile.identifier()));
    dict.insert(
        "PayloadContent".to_string(),
        Value::Array(profile.payloads().iter().map(payload_dictionary).collect()),
    );
    dict
}

fn payload_dictionary(payload: &CertificatePayload) -> Value {
    let mut dict = Dictionary::new();
    dict.insert("PayloadVersion".to_string(), integer(1));
    dict.insert("PayloadUUID".to_string(), string(payload.uuid()));
    dict.insert("PayloadEnabled".to_string(), Value::Boolean(true));
    dict.insert("PayloadType".to_string(), string(payload.kind().payload_type()));
    dict.insert("PayloadIdentifier".to_string(), string(payload.type_identifier()));
    dict.insert("PayloadDisplayName".to_string(), string(payload.display_name()));
    dict.insert("AllowAllAppsAccess".to_string(), Value::Boolean(false));
    dict.insert(
        "PayloadCertificateFileName".to_string(),
        string(payload.certificate_file_name()),
    );
    dict.insert("KeyIsExtractable".to_string(), Value::Boolean(true));
    dict.insert("PayloadDescription".to_string(), string(PAYLOAD_DESCRIPTION));
    dict.insert(
        "PayloadContent".to_string(),
        Value::Data(payload.certificate_bytes().to_vec()),
    );
    Value::Dictionary(dict)
}

fn string(value: &str) -> Value {
    Value::String(value.to_string())
}

fn integer(value: u64) -> Value {
    Value::Integer(Integer::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::test::data::{BODY_ROOT, RECORD_INTERMEDIATE, RECORD_ROOT};
    use crate::test::{builder, sample_profile};

    fn parse(bytes: &[u8]) -> Dictionary {
        let value = Value::from_reader(Cursor::new(bytes)).expect("readable plist");
        value.into_dictionary().expect("root dictionary")
    }

    fn get<'a>(dict: &'a Dictionary, key: &str) -> &'a Value {
        dict.get(key).expect(key)
    }

    #[test]
    fn root_dictionary_key_order_is_exact() {
        let profile = sample_profile();
        let root = root_dictionary(&profile);

        let keys: Vec<_> = root.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "PayloadVersion",
                "PayloadOrganization",
                "PayloadUUID",
                "PayloadRemovalDisallowed",
                "PayloadType",
                "PayloadScope",
                "PayloadDescription",
                "PayloadDisplayName",
                "PayloadIdentifier",
                "PayloadContent",
            ]
        );
    }

    #[test]
    fn root_dictionary_values() {
        let profile = sample_profile();
        let root = parse(&ProfileSerializer::to_bytes(&profile).unwrap());

        assert_eq!(get(&root, "PayloadVersion").as_unsigned_integer(), Some(1));
        // defaults: empty organization, removal disallowed
        assert_eq!(get(&root, "PayloadOrganization").as_string(), Some(""));
        assert_eq!(get(&root, "PayloadRemovalDisallowed").as_boolean(), Some(true));
        assert_eq!(get(&root, "PayloadType").as_string(), Some("Configuration"));
        assert_eq!(get(&root, "PayloadScope").as_string(), Some("System"));
        assert_eq!(get(&root, "PayloadDescription").as_string(), Some("PKI Trust"));
        assert_eq!(get(&root, "PayloadDisplayName").as_string(), Some("PKI Trust"));
        assert_eq!(get(&root, "PayloadUUID").as_string(), Some(profile.uuid()));
        assert_eq!(
            get(&root, "PayloadIdentifier").as_string(),
            Some(profile.identifier())
        );
        assert_ne!(get(&root, "PayloadUUID"), get(&root, "PayloadIdentifier"));
    }

    #[test]
    fn payload_dictionary_key_order_is_exact() {
        let profile = sample_profile();
        let first = payload_dictionary(&profile.payloads()[0]);

        let first = first.as_dictionary().unwrap();
        let keys: Vec<_> = first.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "PayloadVersion",
                "PayloadUUID",
                "PayloadEnabled",
                "PayloadType",
                "PayloadIdentifier",
                "PayloadDisplayName",
                "AllowAllAppsAccess",
                "PayloadCertificateFileName",
                "KeyIsExtractable",
                "PayloadDescription",
                "PayloadContent",
            ]
        );
    }

    #[test]
    fn payload_dictionary_contract() {
        let profile = sample_profile();
        let root = parse(&ProfileSerializer::to_bytes(&profile).unwrap());

        let content = get(&root, "PayloadContent").as_array().unwrap();
        assert_eq!(content.len(), profile.payloads().len());

        let first = content[0].as_dictionary().unwrap();
        let payload = &profile.payloads()[0];
        assert_eq!(get(first, "PayloadEnabled").as_boolean(), Some(true));
        assert_eq!(get(first, "AllowAllAppsAccess").as_boolean(), Some(false));
        assert_eq!(get(first, "KeyIsExtractable").as_boolean(), Some(true));
        assert_eq!(
            get(first, "PayloadType").as_string(),
            Some("com.apple.security.root")
        );
        assert_eq!(
            get(first, "PayloadIdentifier").as_string(),
            Some(payload.type_identifier())
        );
        assert_eq!(
            get(first, "PayloadCertificateFileName").as_string(),
            Some("Example Root CA.cer")
        );
        assert_eq!(
            get(first, "PayloadDescription").as_string(),
            Some(PAYLOAD_DESCRIPTION)
        );
        // raw decoded bytes in the native data element
        assert_eq!(get(first, "PayloadContent").as_data(), Some(BODY_ROOT));
    }

    #[test]
    fn serialization_is_deterministic_under_fixed_identifiers() {
        let build = || {
            let mut builder = builder();
            let mut profile = builder.begin("Example Org", true, "PKI Trust");
            builder.add_certificate(&mut profile, RECORD_ROOT).unwrap();
            builder
                .add_certificate(&mut profile, RECORD_INTERMEDIATE)
                .unwrap();
            ProfileSerializer::to_bytes(&profile).unwrap()
        };

        assert_eq!(build(), build());
    }

    #[test]
    fn removal_allowed_inverts_to_disallowed() {
        let mut builder = builder();
        let profile = builder.begin("", true, "PKI Trust");
        let root = parse(&ProfileSerializer::to_bytes(&profile).unwrap());

        assert_eq!(get(&root, "PayloadRemovalDisallowed").as_boolean(), Some(false));
    }
}
