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

// [START dlp_inspect_gcs]
use crate::inspect::InspectOptions;
use crate::job::{Notifications, print_info_type_stats, publish_to, wait_for_completion};
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    CloudStorageOptions, DlpJob, InspectJobConfig, StorageConfig, cloud_storage_options,
};

pub async fn sample(
    client: &DlpService,
    project_id: &str,
    options: &InspectOptions,
    bucket_name: &str,
    file_name: &str,
    notifications: &Notifications,
) -> anyhow::Result<DlpJob> {
    let channel = notifications.channel(project_id).await?;
    let job = create_job(
        client,
        project_id,
        options,
        &format!("gs://{bucket_name}/{file_name}"),
        &channel.topic,
    )
    .await?;
    println!("Created job: {}", job.name);

    let job = wait_for_completion(client, &channel, &job, notifications.timeout).await?;
    print_info_type_stats(&job);
    Ok(job)
}

pub async fn create_job(
    client: &DlpService,
    project_id: &str,
    options: &InspectOptions,
    url: &str,
    topic: &str,
) -> anyhow::Result<DlpJob> {
    let storage = StorageConfig::new().set_cloud_storage_options(
        CloudStorageOptions::new().set_file_set(cloud_storage_options::FileSet::new().set_url(url)),
    );
    let job = client
        .create_dlp_job()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_inspect_job(
            InspectJobConfig::new()
                .set_storage_config(storage)
                .set_inspect_config(options.inspect_config())
                .set_actions([publish_to(topic)]),
        )
        .send()
        .await?;
    Ok(job)
}
// [END dlp_inspect_gcs]
