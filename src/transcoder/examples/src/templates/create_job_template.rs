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

// [START transcoder_create_job_template]
use crate::{config::ad_hoc_config, parent};
use google_cloud_video_transcoder_v1::client::TranscoderService;
use google_cloud_video_transcoder_v1::model::JobTemplate;

/// Creates a template with the SD and HD MP4 renditions.
pub async fn sample(
    client: &TranscoderService,
    project_id: &str,
    location: &str,
    template_id: &str,
) -> anyhow::Result<JobTemplate> {
    let template = client
        .create_job_template()
        .set_parent(parent(project_id, location))
        .set_job_template_id(template_id)
        .set_job_template(JobTemplate::new().set_config(ad_hoc_config()))
        .send()
        .await?;
    println!("Job template: {}", template.name);
    Ok(template)
}
// [END transcoder_create_job_template]
