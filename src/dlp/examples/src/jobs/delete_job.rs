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

// [START dlp_delete_job]
use google_cloud_privacy_dlp_v2::client::DlpService;

/// Deletes the job named `job_name`, e.g. `projects/my-project/dlpJobs/i-123`.
pub async fn sample(client: &DlpService, job_name: &str) -> anyhow::Result<()> {
    client.delete_dlp_job().set_name(job_name).send().await?;
    println!("Successfully deleted job {job_name}");
    Ok(())
}
// [END dlp_delete_job]
