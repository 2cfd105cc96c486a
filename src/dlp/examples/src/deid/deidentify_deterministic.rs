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

// [START dlp_deidentify_deterministic]
use crate::deid::{kms_wrapped_key, text_of};
use crate::inspect::info_types;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, CryptoDeterministicConfig, DeidentifyConfig, InfoType, InfoTypeTransformations,
    InspectConfig, PrimitiveTransformation, info_type_transformations::InfoTypeTransformation,
};

/// Replaces each finding with a deterministic, reversible token.
///
/// The same input always yields the same token for a given key.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    input: &str,
    info_type_names: &[&str],
    kms_key_name: &str,
    wrapped_key: &str,
    surrogate_info_type: &str,
) -> anyhow::Result<String> {
    let deterministic = CryptoDeterministicConfig::new()
        .set_crypto_key(kms_wrapped_key(kms_key_name, wrapped_key)?)
        .set_surrogate_info_type(InfoType::new().set_name(surrogate_info_type));
    let transformation = InfoTypeTransformation::new().set_primitive_transformation(
        PrimitiveTransformation::new().set_crypto_deterministic_config(deterministic),
    );
    let response = client
        .deidentify_content()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_inspect_config(
            InspectConfig::new().set_info_types(info_types(info_type_names.iter())),
        )
        .set_deidentify_config(DeidentifyConfig::new().set_info_type_transformations(
            InfoTypeTransformations::new().set_transformations([transformation]),
        ))
        .set_item(ContentItem::new().set_value(input))
        .send()
        .await?;
    let output = text_of(response.item);
    println!("output: {output}");
    Ok(output)
}
// [END dlp_deidentify_deterministic]
