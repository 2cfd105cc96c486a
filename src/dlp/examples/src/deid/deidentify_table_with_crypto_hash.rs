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

// [START dlp_deidentify_table_with_crypto_hash]
use crate::deid::{table_of, transient_key};
use crate::format_table;
use crate::inspect::info_types;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, CryptoHashConfig, DeidentifyConfig, InfoTypeTransformations, InspectConfig,
    PrimitiveTransformation, Table, info_type_transformations::InfoTypeTransformation,
};

/// Hashes the phone numbers and e-mail addresses found in any cell.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    table: Table,
    transient_key_name: &str,
) -> anyhow::Result<Table> {
    let targets = info_types(["PHONE_NUMBER", "EMAIL_ADDRESS"]);
    let transformation = InfoTypeTransformation::new()
        .set_info_types(targets.clone())
        .set_primitive_transformation(PrimitiveTransformation::new().set_crypto_hash_config(
            CryptoHashConfig::new().set_crypto_key(transient_key(transient_key_name)),
        ));
    let response = client
        .deidentify_content()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_inspect_config(InspectConfig::new().set_info_types(targets))
        .set_deidentify_config(DeidentifyConfig::new().set_info_type_transformations(
            InfoTypeTransformations::new().set_transformations([transformation]),
        ))
        .set_item(ContentItem::new().set_table(table))
        .send()
        .await?;
    let table = table_of(response.item);
    println!("Table after de-identification :\n{}", format_table(&table));
    Ok(table)
}
// [END dlp_deidentify_table_with_crypto_hash]
