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

// [START dlp_list_jobs]
use crate::format_timestamp;
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{DlpJob, DlpJobType};

/// Lists the jobs of `job_type` matching `filter`, e.g. `state=DONE`.
///
/// An empty filter lists all the jobs.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    filter: &str,
    job_type: DlpJobType,
) -> anyhow::Result<Vec<DlpJob>> {
    let mut items = client
        .list_dlp_jobs()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_filter(filter)
        .set_type(job_type)
        .by_item();
    let mut jobs = Vec::new();
    while let Some(job) = items.next().await.transpose()? {
        println!(
            "Job {} status: {} created: {}",
            job.name,
            job.state,
            format_timestamp(job.create_time.as_ref())
        );
        jobs.push(job);
    }
    Ok(jobs)
}
// [END dlp_list_jobs]
