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

// [START dlp_redact_image]
use crate::inspect::info_types;
use anyhow::Context;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    ByteContentItem, InspectConfig, Likelihood, byte_content_item::BytesType,
    redact_image_request::ImageRedactionConfig,
};
use std::path::Path;

/// Covers the findings in the image at `input_path` with boxes, and writes
/// the result to `output_path`.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    input_path: &Path,
    output_path: &Path,
    info_type_names: &[&str],
    min_likelihood: Likelihood,
    bytes_type: BytesType,
) -> anyhow::Result<()> {
    let data = tokio::fs::read(input_path)
        .await
        .with_context(|| format!("cannot read {}", input_path.display()))?;
    let targets = info_types(info_type_names.iter());
    let redactions = targets
        .iter()
        .map(|t| ImageRedactionConfig::new().set_info_type(t.clone()));
    let response = client
        .redact_image()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_inspect_config(
            InspectConfig::new()
                .set_info_types(targets.clone())
                .set_min_likelihood(min_likelihood),
        )
        .set_image_redaction_configs(redactions)
        .set_byte_item(ByteContentItem::new().set_type(bytes_type).set_data(data))
        .send()
        .await?;
    tokio::fs::write(output_path, &response.redacted_image)
        .await
        .with_context(|| format!("cannot write {}", output_path.display()))?;
    println!("Wrote output to {}", output_path.display());
    Ok(())
}
// [END dlp_redact_image]
