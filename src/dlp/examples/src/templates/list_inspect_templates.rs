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

// [START dlp_list_inspect_templates]
use crate::format_timestamp;
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::InspectTemplate;

pub async fn sample(client: &DlpService, project_id: &str) -> anyhow::Result<Vec<InspectTemplate>> {
    let mut items = client
        .list_inspect_templates()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .by_item();
    let mut templates = Vec::new();
    while let Some(t) = items.next().await.transpose()? {
        println!("Template {}", t.name);
        println!("  Created: {}", format_timestamp(t.create_time.as_ref()));
        println!("  Updated: {}", format_timestamp(t.update_time.as_ref()));
        println!("  Display Name: {:?}", t.display_name);
        println!("  Description: {:?}", t.description);
        templates.push(t);
    }
    Ok(templates)
}
// [END dlp_list_inspect_templates]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockDlpService, PARENT, PROJECT_ID, client};
    use google_cloud_gax::response::Response;
    use google_cloud_privacy_dlp_v2::model::ListInspectTemplatesResponse;

    #[tokio::test]
    async fn listed() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_list_inspect_templates()
            .withf(|r, _| r.parent == PARENT)
            .return_once(|_, _| {
                Ok(Response::from(
                    ListInspectTemplatesResponse::new()
                        .set_inspect_templates([InspectTemplate::new().set_name("it-1")]),
                ))
            });
        let client = client(mock);

        let got = sample(&client, PROJECT_ID).await?;
        assert_eq!(got, vec![InspectTemplate::new().set_name("it-1")]);
        Ok(())
    }
}
