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

// [START dlp_deidentify_fpe]
use crate::deid::{kms_wrapped_key, text_of};
use crate::inspect::info_types;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, CryptoReplaceFfxFpeConfig, DeidentifyConfig, InfoType, InfoTypeTransformations,
    InspectConfig, PrimitiveTransformation, crypto_replace_ffx_fpe_config::FfxCommonNativeAlphabet,
    info_type_transformations::InfoTypeTransformation,
};

/// Encrypts the findings with format-preserving encryption.
///
/// Each encrypted value is prefixed with `surrogate_info_type`, e.g.
/// `SSN_TOKEN(9):123456789`, so [reidentify_fpe][super::reidentify_fpe]
/// can find it again.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    input: &str,
    info_type_names: &[&str],
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
    println!("{output}");
    Ok(output)
}
// [END dlp_deidentify_fpe]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockDlpService, PROJECT_ID, client};
    use google_cloud_gax::response::Response;
    use google_cloud_privacy_dlp_v2::model::DeidentifyContentResponse;

    #[tokio::test]
    async fn fpe_request() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_deidentify_content()
            .withf(|r, _| {
                let fpe = r
                    .deidentify_config
                    .as_ref()
                    .and_then(|c| c.info_type_transformations())
                    .and_then(|t| t.transformations.first())
                    .and_then(|t| t.primitive_transformation.as_ref())
                    .and_then(|p| p.crypto_replace_ffx_fpe_config());
                fpe.is_some_and(|f| {
                    f.common_alphabet() == Some(&FfxCommonNativeAlphabet::AlphaNumeric)
                        && f.surrogate_info_type.as_ref().is_some_and(|t| t.name == "SSN_TOKEN")
                        && f.crypto_key
                            .as_ref()
                            .and_then(|k| k.kms_wrapped())
                            .is_some_and(|k| k.crypto_key_name == "kms-key")
                })
            })
            .return_once(|_, _| {
                Ok(Response::from(DeidentifyContentResponse::new().set_item(
                    ContentItem::new().set_value("My SSN is SSN_TOKEN(9):987654321"),
                )))
            });
        let client = client(mock);

        let got = sample(
            &client,
            PROJECT_ID,
            "My SSN is 123456789",
            &["US_SOCIAL_SECURITY_NUMBER"],
            "kms-key",
            "AQID",
            "SSN_TOKEN",
        )
        .await?;
        assert_eq!(got, "My SSN is SSN_TOKEN(9):987654321");
        Ok(())
    }

    #[tokio::test]
    async fn bad_key() {
        let mut mock = MockDlpService::new();
        mock.expect_deidentify_content().never();
        let client = client(mock);

        let got = sample(
            &client,
            PROJECT_ID,
            "My SSN is 123456789",
            &["US_SOCIAL_SECURITY_NUMBER"],
            "kms-key",
            "not base64!",
            "SSN_TOKEN",
        )
        .await;
        assert!(got.is_err(), "{got:?}");
    }
}
