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

// [START dlp_create_inspect_template]
use crate::inspect::InspectOptions;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::InspectTemplate;

/// Saves `options` as a reusable inspect template.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    template_id: &str,
    display_name: &str,
    description: &str,
    options: &InspectOptions,
) -> anyhow::Result<InspectTemplate> {
    let template = client
        .create_inspect_template()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_template_id(template_id)
        .set_inspect_template(
            InspectTemplate::new()
                .set_display_name(display_name)
                .set_description(description)
                .set_inspect_config(options.inspect_config()),
        )
        .send()
        .await?;
    println!("Successfully created inspect template: {}", template.name);
    Ok(template)
}
// [END dlp_create_inspect_template]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockDlpService, PARENT, PROJECT_ID, client};
    use google_cloud_gax::response::Response;
    use google_cloud_privacy_dlp_v2::model::Likelihood;

    #[tokio::test]
    async fn created() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_create_inspect_template()
            .withf(|r, _| {
                let config = r
                    .inspect_template
                    .as_ref()
                    .and_then(|t| t.inspect_config.as_ref());
                r.parent == PARENT
                    && r.template_id == "my-template"
                    && config.is_some_and(|c| {
                        c.min_likelihood == Likelihood::Likely && c.info_types.len() == 4
                    })
            })
            .return_once(|_, _| {
                Ok(Response::from(InspectTemplate::new().set_name(
                    "projects/test-project/locations/global/inspectTemplates/my-template",
                )))
            });
        let client = client(mock);

        let options = InspectOptions {
            min_likelihood: Likelihood::Likely,
            ..Default::default()
        };
        let got = sample(
            &client,
            PROJECT_ID,
            "my-template",
            "My Template",
            "finds the default info types",
            &options,
        )
        .await?;
        assert!(got.name.ends_with("/my-template"), "{got:?}");
        Ok(())
    }
}
