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

// [START dlp_deidentify_date_shift]
use crate::deid::text_of;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ContentItem, DateShiftConfig, DeidentifyConfig, InfoType, InfoTypeTransformations,
    InspectConfig, PrimitiveTransformation, info_type_transformations::InfoTypeTransformation,
};

/// Shifts the dates in `input` by a random number of days in
/// `[lower_bound_days, upper_bound_days]`.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    input: &str,
    lower_bound_days: i32,
    upper_bound_days: i32,
) -> anyhow::Result<String> {
    let transformation = InfoTypeTransformation::new().set_primitive_transformation(
        PrimitiveTransformation::new().set_date_shift_config(
            DateShiftConfig::new()
                .set_lower_bound_days(lower_bound_days)
                .set_upper_bound_days(upper_bound_days),
        ),
    );
    let response = client
        .deidentify_content()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_inspect_config(InspectConfig::new().set_info_types([InfoType::new().set_name("DATE")]))
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
// [END dlp_deidentify_date_shift]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockDlpService, PROJECT_ID, client};
    use google_cloud_gax::response::Response;
    use google_cloud_privacy_dlp_v2::model::DeidentifyContentResponse;
    use test_case::test_case;

    #[test_case(1, "2016-01-11"; "forward")]
    #[test_case(-1, "2016-01-09"; "backward")]
    #[tokio::test]
    async fn shift(days: i32, want: &'static str) -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_deidentify_content()
            .withf(move |r, _| {
                let shift = r
                    .deidentify_config
                    .as_ref()
                    .and_then(|c| c.info_type_transformations())
                    .and_then(|t| t.transformations.first())
                    .and_then(|t| t.primitive_transformation.as_ref())
                    .and_then(|p| p.date_shift_config());
                let dates_only = r.inspect_config.as_ref().is_some_and(|c| {
                    c.info_types.iter().map(|t| t.name.as_str()).eq(["DATE"])
                });
                dates_only
                    && shift.is_some_and(|s| s.lower_bound_days == days && s.upper_bound_days == days)
            })
            .return_once(move |_, _| {
                Ok(Response::from(
                    DeidentifyContentResponse::new().set_item(ContentItem::new().set_value(want)),
                ))
            });
        let client = client(mock);

        let got = sample(&client, PROJECT_ID, "2016-01-10", days, days).await?;
        assert_eq!(got, want);
        Ok(())
    }
}
