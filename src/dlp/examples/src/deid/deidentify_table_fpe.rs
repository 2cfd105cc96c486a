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

// [START dlp_deidentify_table_fpe]
use crate::deid::{field_ids, kms_wrapped_key, table_of};
use crate::format_table;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, CryptoReplaceFfxFpeConfig, DeidentifyConfig, FieldTransformation,
    PrimitiveTransformation, RecordTransformations, Table,
    crypto_replace_ffx_fpe_config::FfxCommonNativeAlphabet,
};

/// Encrypts the `Employee ID` column, keeping its numeric format.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    table: Table,
    kms_key_name: &str,
    wrapped_key: &str,
) -> anyhow::Result<Table> {
    let fpe = CryptoReplaceFfxFpeConfig::new()
        .set_crypto_key(kms_wrapped_key(kms_key_name, wrapped_key)?)
        .set_common_alphabet(FfxCommonNativeAlphabet::Numeric);
    let transformation = FieldTransformation::new()
        .set_fields(field_ids(["Employee ID"]))
        .set_primitive_transformation(
            PrimitiveTransformation::new().set_crypto_replace_ffx_fpe_config(fpe),
        );
    let response = client
        .deidentify_content()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_deidentify_config(DeidentifyConfig::new().set_record_transformations(
            RecordTransformations::new().set_field_transformations([transformation]),
        ))
        .set_item(ContentItem::new().set_table(table))
        .send()
        .await?;
    let table = table_of(response.item);
    println!(
        "De-identify Table after format-preserving encryption :\n{}",
        format_table(&table)
    );
    Ok(table)
}
// [END dlp_deidentify_table_fpe]
