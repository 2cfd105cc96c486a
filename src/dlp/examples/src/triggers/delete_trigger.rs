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

// [START dlp_delete_trigger]
use google_cloud_privacy_dlp_v2::client::DlpService;

/// `trigger_name` is the full name, e.g.
/// `projects/my-project/locations/global/jobTriggers/my-trigger`.
pub async fn sample(client: &DlpService, trigger_name: &str) -> anyhow::Result<()> {
    client
        .delete_job_trigger()
        .set_name(trigger_name)
        .send()
        .await?;
    println!("Successfully deleted trigger {trigger_name}");
    Ok(())
}
// [END dlp_delete_trigger]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockDlpService, client};
    use google_cloud_gax::response::Response;

    #[tokio::test]
    async fn deleted() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_delete_job_trigger()
            .withf(|r, _| r.name == "projects/p/locations/global/jobTriggers/t")
            .return_once(|_, _| Ok(Response::from(())));
        let client = client(mock);

        sample(&client, "projects/p/locations/global/jobTriggers/t").await?;
        Ok(())
    }
}
