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

// [START dlp_deidentify_free_text_with_fpe_using_surrogate]
use crate::deid::{text_of, unwrapped_key};
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, CryptoReplaceFfxFpeConfig, DeidentifyConfig, InfoType, InfoTypeTransformations,
    InspectConfig, Likelihood, PrimitiveTransformation,
    crypto_replace_ffx_fpe_config::FfxCommonNativeAlphabet,
    info_type_transformations::InfoTypeTransformation,
};

/// Encrypts the `info_type` findings (e.g. `PHONE_NUMBER`) with an unwrapped
/// key, `unwrapped_key` is the base64 encoding of the key.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    input: &str,
    info_type: &str,
    surrogate_type: &str,
    unwrapped: &str,
) -> anyhow::Result<String> {
    let fpe = CryptoReplaceFfxFpeConfig::new()
        .set_crypto_key(unwrapped_key(unwrapped)?)
        .set_common_alphabet(FfxCommonNativeAlphabet::Numeric)
        .set_surrogate_info_type(InfoType::new().set_name(surrogate_type));
    let transformation = InfoTypeTransformation::new()
        .set_info_types([InfoType::new().set_name(info_type)])
        .set_primitive_transformation(
            PrimitiveTransformation::new().set_crypto_replace_ffx_fpe_config(fpe),
        );
    let response = client
        .deidentify_content()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_inspect_config(
            InspectConfig::new()
                .set_info_types([InfoType::new().set_name(info_type)])
                .set_min_likelihood(Likelihood::Unlikely),
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
// [END dlp_deidentify_free_text_with_fpe_using_surrogate]
