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

// [START dlp_inspect_string]
use crate::inspect::{InspectOptions, print_findings};
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{ContentItem, Finding};

pub async fn sample(
    client: &DlpService,
    project_id: &str,
    input: &str,
    options: &InspectOptions,
) -> anyhow::Result<Vec<Finding>> {
    let response = client
        .inspect_content()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_inspect_config(options.inspect_config())
        .set_item(ContentItem::new().set_value(input))
        .send()
        .await?;
    let findings = response.result.map(|r| r.findings).unwrap_or_default();
    print_findings(&findings);
    Ok(findings)
}
// [END dlp_inspect_string]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockDlpService, PARENT, PROJECT_ID, client};
    use google_cloud_gax::response::Response;
    use google_cloud_privacy_dlp_v2::model::{
        InfoType, InspectContentResponse, InspectResult, Likelihood,
    };

    #[tokio::test]
    async fn findings() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_inspect_content()
            .withf(|r, _| {
                r.parent == PARENT
                    && r.item.as_ref().and_then(|i| i.value()).map(String::as_str)
                        == Some("My phone number is (223) 456-7890")
                    && r.inspect_config.as_ref().is_some_and(|c| c.include_quote)
            })
            .return_once(|_, _| {
                Ok(Response::from(InspectContentResponse::new().set_result(
                    InspectResult::new().set_findings([Finding::new()
                        .set_quote("(223) 456-7890")
                        .set_info_type(InfoType::new().set_name("PHONE_NUMBER"))
                        .set_likelihood(Likelihood::VeryLikely)]),
                )))
            });
        let client = client(mock);

        let options = InspectOptions {
            include_quote: true,
            ..InspectOptions::default()
        };
        let got = sample(
            &client,
            PROJECT_ID,
            "My phone number is (223) 456-7890",
            &options,
        )
        .await?;
        assert_eq!(got.len(), 1, "{got:?}");
        assert_eq!(got[0].quote, "(223) 456-7890");
        Ok(())
    }

    #[tokio::test]
    async fn no_result() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_inspect_content()
            .return_once(|_, _| Ok(Response::from(InspectContentResponse::new())));
        let client = client(mock);

        let got = sample(&client, PROJECT_ID, "nothing here", &InspectOptions::default()).await?;
        assert!(got.is_empty(), "{got:?}");
        Ok(())
    }
}
