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

// [START transcoder_create_job_from_preset]
use crate::parent;
use google_cloud_video_transcoder_v1::client::TranscoderService;
use google_cloud_video_transcoder_v1::model::Job;

pub const DEFAULT_PRESET: &str = "preset/web-hd";

/// Creates a job using one of the service presets, e.g. [DEFAULT_PRESET].
pub async fn sample(
    client: &TranscoderService,
    project_id: &str,
    location: &str,
    input_uri: &str,
    output_uri: &str,
    preset: &str,
) -> anyhow::Result<Job> {
    let job = client
        .create_job()
        .set_parent(parent(project_id, location))
        .set_job(
            Job::new()
                .set_input_uri(input_uri)
                .set_output_uri(output_uri)
                .set_template_id(preset),
        )
        .send()
        .await?;
    println!("Job: {}", job.name);
    Ok(job)
}
// [END transcoder_create_job_from_preset]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{JOB_NAME, LOCATION, MockTranscoderService, PARENT, PROJECT_ID, client};
    use google_cloud_gax::response::Response;

    #[tokio::test]
    async fn preset() -> anyhow::Result<()> {
        let mut mock = MockTranscoderService::new();
        mock.expect_create_job()
            .withf(|r, _| {
                r.parent == PARENT
                    && r.job.as_ref().is_some_and(|j| {
                        j.input_uri == "gs://bucket/input.mp4"
                            && j.output_uri == "gs://bucket/output/"
                            && j.template_id().map(String::as_str) == Some(DEFAULT_PRESET)
                    })
            })
            .return_once(|_, _| Ok(Response::from(Job::new().set_name(JOB_NAME))));
        let client = client(mock);

        let got = sample(
            &client,
            PROJECT_ID,
            LOCATION,
            "gs://bucket/input.mp4",
            "gs://bucket/output/",
            DEFAULT_PRESET,
        )
        .await?;
        assert_eq!(got.name, JOB_NAME);
        Ok(())
    }
}
