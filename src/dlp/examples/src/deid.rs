// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Samples de-identifying and re-identifying text and tables.
//!
//! The text samples return the transformed string, the table samples return
//! the transformed [Table]. The helpers in this module build the keys and the
//! example tables used by several samples.

pub mod deidentify_cloud_storage;
pub mod deidentify_date_shift;
pub mod deidentify_deterministic;
pub mod deidentify_dictionary_replacement;
pub mod deidentify_fpe;
pub mod deidentify_free_text_with_fpe_using_surrogate;
pub mod deidentify_mask;
pub mod deidentify_table_bucketing;
pub mod deidentify_table_condition_infotypes;
pub mod deidentify_table_condition_masking;
pub mod deidentify_table_fpe;
pub mod deidentify_table_infotypes;
pub mod deidentify_table_primitive_bucketing;
pub mod deidentify_table_with_crypto_hash;
pub mod deidentify_table_with_multiple_crypto_hash;
pub mod deidentify_time_extract;
pub mod reidentify_deterministic;
pub mod reidentify_fpe;
pub mod reidentify_free_text_with_fpe_using_surrogate;
pub mod reidentify_table_fpe;
pub mod reidentify_text_fpe;

use anyhow::Context;
use base64::{Engine as _, engine::general_purpose};
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, CryptoKey, CustomInfoType, FieldId, InfoType, KmsWrappedCryptoKey,
    RecordCondition, RelationalOperator, Table, TransientCryptoKey, UnwrappedCryptoKey, Value,
    custom_info_type, record_condition, table,
};

/// A data encryption key wrapped by Cloud KMS.
///
/// `wrapped_key` is the base64 encoding of the wrapped key, as produced by
/// `gcloud kms encrypt`.
pub fn kms_wrapped_key(kms_key_name: &str, wrapped_key: &str) -> anyhow::Result<CryptoKey> {
    let wrapped = general_purpose::STANDARD
        .decode(wrapped_key)
        .context("cannot decode the wrapped key")?;
    Ok(CryptoKey::new().set_kms_wrapped(
        KmsWrappedCryptoKey::new()
            .set_wrapped_key(wrapped)
            .set_crypto_key_name(kms_key_name),
    ))
}

/// A key sent in the clear, `key` is its base64 encoding.
pub fn unwrapped_key(key: &str) -> anyhow::Result<CryptoKey> {
    let key = general_purpose::STANDARD
        .decode(key)
        .context("cannot decode the unwrapped key")?;
    Ok(CryptoKey::new().set_unwrapped(UnwrappedCryptoKey::new().set_key(key)))
}

/// A key generated by the service, consistent within a request.
pub fn transient_key(name: &str) -> CryptoKey {
    CryptoKey::new().set_transient(TransientCryptoKey::new().set_name(name))
}

/// Detects the surrogates added during de-identification.
pub fn surrogate(name: &str) -> CustomInfoType {
    CustomInfoType::new()
        .set_info_type(InfoType::new().set_name(name))
        .set_surrogate_type(custom_info_type::SurrogateType::new())
}

pub(crate) fn text_of(item: Option<ContentItem>) -> String {
    item.and_then(|i| i.value().cloned()).unwrap_or_default()
}

pub(crate) fn table_of(item: Option<ContentItem>) -> Table {
    item.and_then(|i| i.table().map(|t| t.as_ref().clone()))
        .unwrap_or_default()
}

/// Converts column names to field ids.
pub fn field_ids<I, S>(names: I) -> Vec<FieldId>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    names
        .into_iter()
        .map(|n| FieldId::new().set_name(n))
        .collect()
}

/// Matches the rows where the integer value of `field` exceeds `value`.
pub fn greater_than(field: &str, value: i64) -> RecordCondition {
    let condition = record_condition::Condition::new()
        .set_field(FieldId::new().set_name(field))
        .set_operator(RelationalOperator::GreaterThan)
        .set_value(Value::new().set_integer_value(value));
    RecordCondition::new().set_expressions(
        record_condition::Expressions::new()
            .set_conditions(record_condition::Conditions::new().set_conditions([condition])),
    )
}

/// Builds a table where all the cells are strings.
pub fn string_table<const N: usize>(headers: [&str; N], rows: &[[&str; N]]) -> Table {
    Table::new()
        .set_headers(headers.map(|h| FieldId::new().set_name(h)))
        .set_rows(rows.iter().map(|row| {
            table::Row::new().set_values(row.map(|v| Value::new().set_string_value(v)))
        }))
}

/// Three patients, with their age and happiness score.
pub fn patients() -> Table {
    string_table(
        ["AGE", "PATIENT", "HAPPINESS SCORE"],
        &[
            ["22", "Jane Austen", "21"],
            ["55", "Mark Twain", "75"],
            ["101", "Charles Dickens", "95"],
        ],
    )
}

/// The [patients] table with a free text column mentioning their names.
pub fn patients_with_factoids() -> Table {
    string_table(
        ["AGE", "PATIENT", "HAPPINESS SCORE", "FACTOID"],
        &[
            [
                "22",
                "Jane Austen",
                "21",
                "There are 14 kisses in Jane Austen's novels.",
            ],
            ["55", "Mark Twain", "75", "Mark Twain loved cats."],
            [
                "101",
                "Charles Dickens",
                "95",
                "Charles Dickens name was a curse invented by Shakespeare.",
            ],
        ],
    )
}

/// Employees and their compensation.
pub fn employees() -> Table {
    string_table(
        ["Employee ID", "Date", "Compensation"],
        &[
            ["11111", "2015", "$10"],
            ["22222", "2016", "$20"],
            ["33333", "2016", "$15"],
        ],
    )
}

/// Customers with their birth and registration dates.
pub fn customers() -> Table {
    string_table(
        ["Name", "Birth Date", "Credit Card", "Register Date"],
        &[
            ["Ann", "01/01/1970", "4532908762519852", "07/21/1996"],
            ["James", "03/06/1988", "4301261899725540", "04/09/2001"],
        ],
    )
}

/// User ids with free text comments containing emails and phone numbers.
pub fn user_comments() -> Table {
    string_table(
        ["userid", "comments"],
        &[
            [
                "user1@example.org",
                "my email is user1@example.org and phone is 858-555-0222",
            ],
            [
                "user2@example.org",
                "my email is user2@example.org and phone is 858-555-0232",
            ],
            [
                "user3@example.org",
                "my email is user3@example.org and phone is 858-555-0224",
            ],
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format_table;
    use pretty_assertions::assert_eq;

    #[test]
    fn wrapped_key() -> anyhow::Result<()> {
        let key = kms_wrapped_key("projects/p/locations/l/keyRings/r/cryptoKeys/k", "AQID")?;
        let wrapped = key.kms_wrapped().expect("key should be wrapped");
        assert_eq!(wrapped.wrapped_key.as_ref(), &[1_u8, 2, 3]);
        assert_eq!(
            wrapped.crypto_key_name,
            "projects/p/locations/l/keyRings/r/cryptoKeys/k"
        );
        Ok(())
    }

    #[test]
    fn bad_keys() {
        let err = kms_wrapped_key("k", "not base64!").unwrap_err();
        assert!(format!("{err}").contains("wrapped key"), "{err:?}");
        let err = unwrapped_key("not base64!").unwrap_err();
        assert!(format!("{err}").contains("unwrapped key"), "{err:?}");
    }

    #[test]
    fn other_keys() -> anyhow::Result<()> {
        let key = unwrapped_key("AQID")?;
        assert_eq!(
            key.unwrapped().map(|k| k.key.to_vec()),
            Some(vec![1_u8, 2, 3])
        );
        let key = transient_key("my-key");
        assert_eq!(key.transient().map(|k| k.name.as_str()), Some("my-key"));
        Ok(())
    }

    #[test]
    fn surrogate_type() {
        let got = surrogate("TOKEN");
        assert_eq!(got.info_type.clone().map(|t| t.name), Some("TOKEN".to_string()));
        assert!(got.surrogate_type().is_some());
    }

    #[test]
    fn conditions() {
        let got = greater_than("AGE", 89);
        let condition = got
            .expressions
            .as_ref()
            .and_then(|e| e.conditions())
            .and_then(|c| c.conditions.first())
            .expect("a single condition");
        assert_eq!(condition.field.as_ref().map(|f| f.name.as_str()), Some("AGE"));
        assert_eq!(condition.operator, RelationalOperator::GreaterThan);
        assert_eq!(
            condition.value.as_ref().and_then(|v| v.integer_value()),
            Some(&89)
        );
        assert_eq!(
            field_ids(["PATIENT", "FACTOID"]),
            vec![
                FieldId::new().set_name("PATIENT"),
                FieldId::new().set_name("FACTOID")
            ]
        );
    }

    #[test]
    fn tables() {
        assert_eq!(
            format_table(&patients()),
            "AGE, PATIENT, HAPPINESS SCORE\n\
             22, Jane Austen, 21\n\
             55, Mark Twain, 75\n\
             101, Charles Dickens, 95"
        );
        assert_eq!(patients_with_factoids().headers.len(), 4);
        assert_eq!(employees().rows.len(), 3);
        assert_eq!(customers().rows.len(), 2);
        assert_eq!(user_comments().rows.len(), 3);
    }

    #[test]
    fn outputs() {
        assert_eq!(text_of(Some(ContentItem::new().set_value("abc"))), "abc");
        assert_eq!(text_of(None), "");
        assert_eq!(table_of(Some(ContentItem::new().set_table(patients()))), patients());
        assert_eq!(table_of(Some(ContentItem::new().set_value("abc"))), Table::default());
    }
}
