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

// [START transcoder_create_job_from_ad_hoc]
use crate::{config::ad_hoc_config, parent};
use google_cloud_video_transcoder_v1::client::TranscoderService;
use google_cloud_video_transcoder_v1::model::Job;

/// Creates a job with an inline configuration: SD and HD video renditions
/// sharing one audio stream.
pub async fn sample(
    client: &TranscoderService,
    project_id: &str,
    location: &str,
    input_uri: &str,
    output_uri: &str,
) -> anyhow::Result<Job> {
    let job = client
        .create_job()
        .set_parent(parent(project_id, location))
        .set_job(
            Job::new()
                .set_input_uri(input_uri)
                .set_output_uri(output_uri)
                .set_config(ad_hoc_config()),
        )
        .send()
        .await?;
    println!("Job: {}", job.name);
    Ok(job)
}
// [END transcoder_create_job_from_ad_hoc]
