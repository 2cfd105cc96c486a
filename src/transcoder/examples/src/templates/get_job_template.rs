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

// [START transcoder_get_job_template]
use google_cloud_video_transcoder_v1::client::TranscoderService;
use google_cloud_video_transcoder_v1::model::JobTemplate;

pub async fn sample(client: &TranscoderService, template_name: &str) -> anyhow::Result<JobTemplate> {
    let template = client.get_job_template().set_name(template_name).send().await?;
    println!("Job template: {}", template.name);
    Ok(template)
}
// [END transcoder_get_job_template]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockTranscoderService, client};
    use google_cloud_gax::error::{
        Error,
        rpc::{Code, Status},
    };
    use google_cloud_gax::response::Response;

    const TEMPLATE_NAME: &str = "projects/test-project/locations/us-central1/jobTemplates/my-template";

    #[tokio::test]
    async fn get() -> anyhow::Result<()> {
        let mut mock = MockTranscoderService::new();
        mock.expect_get_job_template()
            .withf(|r, _| r.name == TEMPLATE_NAME)
            .return_once(|_, _| {
                Ok(Response::from(JobTemplate::new().set_name(TEMPLATE_NAME)))
            });
        let client = client(mock);

        let got = sample(&client, TEMPLATE_NAME).await?;
        assert_eq!(got.name, TEMPLATE_NAME);
        Ok(())
    }

    #[tokio::test]
    async fn not_found() {
        let mut mock = MockTranscoderService::new();
        mock.expect_get_job_template().return_once(|_, _| {
            Err(Error::service(
                Status::default()
                    .set_code(Code::NotFound)
                    .set_message("no such template"),
            ))
        });
        let client = client(mock);

        let err = sample(&client, TEMPLATE_NAME).await.unwrap_err();
        let code = err
            .downcast_ref::<Error>()
            .and_then(|e| e.status())
            .map(|s| &s.code);
        assert_eq!(code, Some(&Code::NotFound), "{err:?}");
    }
}
