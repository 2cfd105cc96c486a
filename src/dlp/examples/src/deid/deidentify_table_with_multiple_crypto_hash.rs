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

// [START dlp_deidentify_table_with_multiple_crypto_hash]
use crate::deid::{field_ids, table_of, transient_key};
use crate::format_table;
use crate::inspect::info_types;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, CryptoHashConfig, DeidentifyConfig, FieldTransformation,
    InfoTypeTransformations, InspectConfig, PrimitiveTransformation, RecordTransformations, Table,
    info_type_transformations::InfoTypeTransformation,
};

fn crypto_hash(key_name: &str) -> PrimitiveTransformation {
    PrimitiveTransformation::new()
        .set_crypto_hash_config(CryptoHashConfig::new().set_crypto_key(transient_key(key_name)))
}

/// Hashes the whole `userid` column with the first key, and the findings in
/// the `comments` column with the second key.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    table: Table,
    transient_key_name1: &str,
    transient_key_name2: &str,
) -> anyhow::Result<Table> {
    let userid = FieldTransformation::new()
        .set_fields(field_ids(["userid"]))
        .set_primitive_transformation(crypto_hash(transient_key_name1));
    let comments = FieldTransformation::new()
        .set_fields(field_ids(["comments"]))
        .set_info_type_transformations(InfoTypeTransformations::new().set_transformations([
            InfoTypeTransformation::new()
                .set_primitive_transformation(crypto_hash(transient_key_name2)),
        ]));
    let response = client
        .deidentify_content()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_inspect_config(
            InspectConfig::new().set_info_types(info_types(["PHONE_NUMBER", "EMAIL_ADDRESS"])),
        )
        .set_deidentify_config(DeidentifyConfig::new().set_record_transformations(
            RecordTransformations::new().set_field_transformations([userid, comments]),
        ))
        .set_item(ContentItem::new().set_table(table))
        .send()
        .await?;
    let table = table_of(response.item);
    println!("Table after de-identification :\n{}", format_table(&table));
    Ok(table)
}
// [END dlp_deidentify_table_with_multiple_crypto_hash]
