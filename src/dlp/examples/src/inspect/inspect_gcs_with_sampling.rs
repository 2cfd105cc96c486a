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

// [START dlp_inspect_gcs_with_sampling]
use crate::job::{Notifications, print_info_type_stats, publish_to, wait_for_completion};
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    CloudStorageOptions, DlpJob, FileType, InfoType, InspectConfig, InspectJobConfig, Likelihood,
    StorageConfig, cloud_storage_options,
};

/// Inspects the first 200 bytes of a random sample of the text files under
/// `gcs_uri`, e.g. `gs://my-bucket/*`.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    gcs_uri: &str,
    notifications: &Notifications,
) -> anyhow::Result<DlpJob> {
    let channel = notifications.channel(project_id).await?;
    let job = create_job(client, project_id, gcs_uri, &channel.topic).await?;
    println!("Job Created: {}", job.name);

    let job = wait_for_completion(client, &channel, &job, notifications.timeout).await?;
    print_info_type_stats(&job);
    Ok(job)
}

pub async fn create_job(
    client: &DlpService,
    project_id: &str,
    gcs_uri: &str,
    topic: &str,
) -> anyhow::Result<DlpJob> {
    let options = CloudStorageOptions::new()
        .set_file_set(cloud_storage_options::FileSet::new().set_url(gcs_uri))
        .set_bytes_limit_per_file(200)
        .set_file_types([FileType::TextFile])
        .set_files_limit_percent(90)
        .set_sample_method(cloud_storage_options::SampleMethod::RandomStart);
    let inspect = InspectConfig::new()
        .set_info_types([InfoType::new().set_name("PERSON_NAME")])
        .set_exclude_info_types(true)
        .set_include_quote(true)
        .set_min_likelihood(Likelihood::Possible);

    let job = client
        .create_dlp_job()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_inspect_job(
            InspectJobConfig::new()
                .set_storage_config(StorageConfig::new().set_cloud_storage_options(options))
                .set_inspect_config(inspect)
                .set_actions([publish_to(topic)]),
        )
        .send()
        .await?;
    Ok(job)
}
// [END dlp_inspect_gcs_with_sampling]
