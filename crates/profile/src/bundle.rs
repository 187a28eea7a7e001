// SPDX-FileCopyrightText: 2026 the trustprofile contributors
// SPDX-License-Identifier: Apache-2.0

//! Splitting a decoded bundle text into per-certificate records.
//!
//! The PKCS#7 decode step prints every certificate as a `subject=` /
//! `issuer=` header pair followed by a PEM block. A record therefore starts
//! at each line beginning with `subject` and runs to the next such line.

/// Split bundle text into records. Content before the first `subject` line
/// is discarded.
#[must_use]
pub fn split_records(text: &str) -> Vec<&str> {
    let mut starts = Vec::new();
    let mut at = 0;
    for line in text.split_inclusive('\n') {
        if line.starts_with("subject") {
            starts.push(at);
        }
        at += line.len();
    }

    let mut records = Vec::with_capacity(starts.len());
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(text.len());
        records.push(&text[start..end]);
    }
    records
}
