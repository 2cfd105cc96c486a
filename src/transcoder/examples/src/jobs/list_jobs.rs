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

// [START transcoder_list_jobs]
use crate::parent;
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_video_transcoder_v1::client::TranscoderService;
use google_cloud_video_transcoder_v1::model::Job;

pub async fn sample(
    client: &TranscoderService,
    project_id: &str,
    location: &str,
) -> anyhow::Result<Vec<Job>> {
    let mut items = client
        .list_jobs()
        .set_parent(parent(project_id, location))
        .by_item();
    let mut jobs = Vec::new();
    println!("Jobs:");
    while let Some(job) = items.next().await.transpose()? {
        println!("{}", job.name);
        jobs.push(job);
    }
    Ok(jobs)
}
// [END transcoder_list_jobs]
