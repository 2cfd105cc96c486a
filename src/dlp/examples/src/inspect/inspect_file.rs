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

// [START dlp_inspect_file]
use crate::inspect::{InspectOptions, print_findings};
use anyhow::Context;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ByteContentItem, ContentItem, Finding, byte_content_item::BytesType,
};
use std::path::Path;

pub async fn sample(
    client: &DlpService,
    project_id: &str,
    path: &Path,
    bytes_type: BytesType,
    options: &InspectOptions,
) -> anyhow::Result<Vec<Finding>> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("cannot read {}", path.display()))?;
    let response = client
        .inspect_content()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_inspect_config(options.inspect_config())
        .set_item(
            ContentItem::new()
                .set_byte_item(ByteContentItem::new().set_type(bytes_type).set_data(data)),
        )
        .send()
        .await?;
    let findings = response.result.map(|r| r.findings).unwrap_or_default();
    print_findings(&findings);
    Ok(findings)
}
// [END dlp_inspect_file]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockDlpService, PROJECT_ID, client};
    use google_cloud_gax::response::Response;
    use google_cloud_privacy_dlp_v2::model::{InfoType, InspectContentResponse, InspectResult};
    use std::io::Write;

    #[tokio::test]
    async fn reads_file() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"My email is gary@example.com")?;

        let mut mock = MockDlpService::new();
        mock.expect_inspect_content()
            .withf(|r, _| {
                r.item.as_ref().and_then(|i| i.byte_item()).is_some_and(|b| {
                    b.r#type == BytesType::TextUtf8
                        && b.data.as_ref() == b"My email is gary@example.com"
                })
            })
            .return_once(|_, _| {
                Ok(Response::from(InspectContentResponse::new().set_result(
                    InspectResult::new().set_findings([Finding::new()
                        .set_info_type(InfoType::new().set_name("EMAIL_ADDRESS"))]),
                )))
            });
        let client = client(mock);

        let got = sample(
            &client,
            PROJECT_ID,
            file.path(),
            BytesType::TextUtf8,
            &InspectOptions::default(),
        )
        .await?;
        assert_eq!(got.len(), 1, "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn missing_file() {
        let mut mock = MockDlpService::new();
        mock.expect_inspect_content().never();
        let client = client(mock);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = sample(
            &client,
            PROJECT_ID,
            &path,
            BytesType::TextUtf8,
            &InspectOptions::default(),
        )
        .await
        .unwrap_err();
        assert!(format!("{err}").contains("missing.txt"), "{err:?}");
    }
}
