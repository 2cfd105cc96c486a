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

// [START transcoder_create_job_from_template]
use crate::parent;
use google_cloud_video_transcoder_v1::client::TranscoderService;
use google_cloud_video_transcoder_v1::model::Job;

/// Creates a job using a template created with
/// [create_job_template](crate::templates::create_job_template).
pub async fn sample(
    client: &TranscoderService,
    project_id: &str,
    location: &str,
    input_uri: &str,
    output_uri: &str,
    template_id: &str,
) -> anyhow::Result<Job> {
    let job = client
        .create_job()
        .set_parent(parent(project_id, location))
        .set_job(
            Job::new()
                .set_input_uri(input_uri)
                .set_output_uri(output_uri)
                .set_template_id(template_id),
        )
        .send()
        .await?;
    println!("Job: {}", job.name);
    Ok(job)
}
// [END transcoder_create_job_from_template]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{JOB_NAME, LOCATION, MockTranscoderService, PARENT, PROJECT_ID, client};
    use google_cloud_gax::error::{
        Error,
        rpc::{Code, Status},
    };
    use google_cloud_gax::response::Response;

    #[tokio::test]
    async fn template() -> anyhow::Result<()> {
        let mut mock = MockTranscoderService::new();
        mock.expect_create_job()
            .withf(|r, _| {
                r.parent == PARENT
                    && r.job
                        .as_ref()
                        .and_then(|j| j.template_id())
                        .is_some_and(|t| t == "my-template")
            })
            .return_once(|_, _| Ok(Response::from(Job::new().set_name(JOB_NAME))));
        let client = client(mock);

        let got = sample(&client, PROJECT_ID, LOCATION, "gs://b/in.mp4", "gs://b/out/", "my-template").await?;
        assert_eq!(got.name, JOB_NAME);
        Ok(())
    }

    #[tokio::test]
    async fn missing_template() {
        let mut mock = MockTranscoderService::new();
        mock.expect_create_job().return_once(|_, _| {
            Err(Error::service(
                Status::default()
                    .set_code(Code::NotFound)
                    .set_message("template not found"),
            ))
        });
        let client = client(mock);

        let got = sample(&client, PROJECT_ID, LOCATION, "gs://b/in.mp4", "gs://b/out/", "missing").await;
        assert!(got.is_err(), "{got:?}");
    }
}
