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

// [START transcoder_list_job_templates]
use crate::parent;
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_video_transcoder_v1::client::TranscoderService;
use google_cloud_video_transcoder_v1::model::JobTemplate;

pub async fn sample(
    client: &TranscoderService,
    project_id: &str,
    location: &str,
) -> anyhow::Result<Vec<JobTemplate>> {
    let mut items = client
        .list_job_templates()
        .set_parent(parent(project_id, location))
        .by_item();
    let mut templates = Vec::new();
    println!("Job templates:");
    while let Some(template) = items.next().await.transpose()? {
        println!("{}", template.name);
        templates.push(template);
    }
    Ok(templates)
}
// [END transcoder_list_job_templates]
