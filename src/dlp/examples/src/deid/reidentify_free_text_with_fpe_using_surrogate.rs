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

// [START dlp_reidentify_free_text_with_fpe_using_surrogate]
use crate::deid::{surrogate, text_of, unwrapped_key};
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, CryptoReplaceFfxFpeConfig, DeidentifyConfig, InfoType, InfoTypeTransformations,
    InspectConfig, PrimitiveTransformation, crypto_replace_ffx_fpe_config::FfxCommonNativeAlphabet,
    info_type_transformations::InfoTypeTransformation,
};

pub async fn sample(
    client: &DlpService,
    project_id: &str,
    input: &str,
    surrogate_type: &str,
    unwrapped: &str,
) -> anyhow::Result<String> {
    let fpe = CryptoReplaceFfxFpeConfig::new()
        .set_crypto_key(unwrapped_key(unwrapped)?)
        .set_common_alphabet(FfxCommonNativeAlphabet::Numeric)
        .set_surrogate_info_type(InfoType::new().set_name(surrogate_type));
    let transformation = InfoTypeTransformation::new().set_primitive_transformation(
        PrimitiveTransformation::new().set_crypto_replace_ffx_fpe_config(fpe),
    );
    let response = client
        .reidentify_content()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_inspect_config(InspectConfig::new().set_custom_info_types([surrogate(surrogate_type)]))
        .set_reidentify_config(DeidentifyConfig::new().set_info_type_transformations(
            InfoTypeTransformations::new().set_transformations([transformation]),
        ))
        .set_item(ContentItem::new().set_value(input))
        .send()
        .await?;
    let output = text_of(response.item);
    println!("output: {output}");
    Ok(output)
}
// [END dlp_reidentify_free_text_with_fpe_using_surrogate]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockDlpService, PROJECT_ID, client};
    use google_cloud_gax::response::Response;
    use google_cloud_privacy_dlp_v2::model::ReidentifyContentResponse;

    #[tokio::test]
    async fn reidentify() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_reidentify_content()
            .withf(|r, _| {
                r.inspect_config.as_ref().is_some_and(|c| {
                    c.custom_info_types
                        .iter()
                        .filter_map(|t| t.info_type.as_ref())
                        .map(|t| t.name.as_str())
                        .eq(["PHONE_TOKEN"])
                })
            })
            .return_once(|_, _| {
                Ok(Response::from(ReidentifyContentResponse::new().set_item(
                    ContentItem::new().set_value("My phone number is 4359916732"),
                )))
            });
        let client = client(mock);

        let got = sample(
            &client,
            PROJECT_ID,
            "My phone number is PHONE_TOKEN(10):9617256398",
            "PHONE_TOKEN",
            "hu4ZQa/R/q2g8S3j3QbtAw==",
        )
        .await?;
        assert_eq!(got, "My phone number is 4359916732");
        Ok(())
    }
}
