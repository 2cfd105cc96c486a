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

// [START dlp_deidentify_masking]
use crate::deid::text_of;
use crate::inspect::info_types;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    CharacterMaskConfig, ContentItem, DeidentifyConfig, InfoTypeTransformations, InspectConfig,
    PrimitiveTransformation, info_type_transformations::InfoTypeTransformation,
};

/// Replaces the first `number_to_mask` characters of each finding with
/// `masking_character`. Zero masks all of them.
///
/// An empty `info_type_names` uses the default detectors.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    input: &str,
    info_type_names: &[&str],
    masking_character: &str,
    number_to_mask: i32,
) -> anyhow::Result<String> {
    let transformation = InfoTypeTransformation::new().set_primitive_transformation(
        PrimitiveTransformation::new().set_character_mask_config(
            CharacterMaskConfig::new()
                .set_masking_character(masking_character)
                .set_number_to_mask(number_to_mask),
        ),
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
// [END dlp_deidentify_masking]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockDlpService, PARENT, PROJECT_ID, client};
    use google_cloud_gax::response::Response;
    use google_cloud_privacy_dlp_v2::model::DeidentifyContentResponse;

    #[tokio::test]
    async fn mask() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_deidentify_content()
            .withf(|r, _| {
                let mask = r
                    .deidentify_config
                    .as_ref()
                    .and_then(|c| c.info_type_transformations())
                    .and_then(|t| t.transformations.first())
                    .and_then(|t| t.primitive_transformation.as_ref())
                    .and_then(|p| p.character_mask_config());
                let names = r
                    .inspect_config
                    .as_ref()
                    .map(|c| c.info_types.iter().map(|t| t.name.clone()).collect::<Vec<_>>());
                r.parent == PARENT
                    && mask.is_some_and(|m| m.masking_character == "+" && m.number_to_mask == 6)
                    && names == Some(vec!["US_SOCIAL_SECURITY_NUMBER".to_string()])
            })
            .return_once(|_, _| {
                Ok(Response::from(
                    DeidentifyContentResponse::new()
                        .set_item(ContentItem::new().set_value("My SSN is ++++++333")),
                ))
            });
        let client = client(mock);

        let got = sample(
            &client,
            PROJECT_ID,
            "My SSN is 111222333",
            &["US_SOCIAL_SECURITY_NUMBER"],
            "+",
            6,
        )
        .await?;
        assert_eq!(got, "My SSN is ++++++333");
        Ok(())
    }
}
