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

// [START dlp_reidentify_fpe]
use crate::deid::{kms_wrapped_key, surrogate, text_of};
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, CryptoReplaceFfxFpeConfig, DeidentifyConfig, InfoType, InfoTypeTransformations,
    InspectConfig, PrimitiveTransformation, crypto_replace_ffx_fpe_config::FfxCommonNativeAlphabet,
    info_type_transformations::InfoTypeTransformation,
};

/// Decrypts the values tagged with `surrogate_info_type`.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    input: &str,
    kms_key_name: &str,
    wrapped_key: &str,
    surrogate_info_type: &str,
) -> anyhow::Result<String> {
    let fpe = CryptoReplaceFfxFpeConfig::new()
        .set_crypto_key(kms_wrapped_key(kms_key_name, wrapped_key)?)
        .set_common_alphabet(FfxCommonNativeAlphabet::AlphaNumeric)
        .set_surrogate_info_type(InfoType::new().set_name(surrogate_info_type));
    let transformation = InfoTypeTransformation::new().set_primitive_transformation(
        PrimitiveTransformation::new().set_crypto_replace_ffx_fpe_config(fpe),
    );
    let response = client
        .reidentify_content()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_inspect_config(
            InspectConfig::new().set_custom_info_types([surrogate(surrogate_info_type)]),
        )
        .set_reidentify_config(DeidentifyConfig::new().set_info_type_transformations(
            InfoTypeTransformations::new().set_transformations([transformation]),
        ))
        .set_item(ContentItem::new().set_value(input))
        .send()
        .await?;
    let output = text_of(response.item);
    println!("{output}");
    Ok(output)
}
// [END dlp_reidentify_fpe]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockDlpService, PROJECT_ID, client};
    use google_cloud_gax::response::Response;
    use google_cloud_privacy_dlp_v2::model::ReidentifyContentResponse;

    #[tokio::test]
    async fn surrogate_detector() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_reidentify_content()
            .withf(|r, _| {
                let custom = r
                    .inspect_config
                    .as_ref()
                    .and_then(|c| c.custom_info_types.first());
                custom.is_some_and(|c| {
                    c.surrogate_type().is_some()
                        && c.info_type.as_ref().is_some_and(|t| t.name == "SSN_TOKEN")
                }) && r.item.as_ref().and_then(|i| i.value()).map(String::as_str)
                    == Some("My SSN is SSN_TOKEN(9):987654321")
            })
            .return_once(|_, _| {
                Ok(Response::from(
                    ReidentifyContentResponse::new()
                        .set_item(ContentItem::new().set_value("My SSN is 123456789")),
                ))
            });
        let client = client(mock);

        let got = sample(
            &client,
            PROJECT_ID,
            "My SSN is SSN_TOKEN(9):987654321",
            "kms-key",
            "AQID",
            "SSN_TOKEN",
        )
        .await?;
        assert_eq!(got, "My SSN is 123456789");
        Ok(())
    }
}
