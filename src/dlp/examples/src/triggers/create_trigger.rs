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

// [START dlp_create_trigger]
use crate::inspect::InspectOptions;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    CloudStorageOptions, InspectJobConfig, JobTrigger, Schedule, StorageConfig,
    cloud_storage_options, job_trigger, storage_config,
};

/// The identity and schedule of a new trigger.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriggerSpec {
    /// May be empty, the service assigns an id in that case.
    pub trigger_id: String,
    pub display_name: String,
    pub description: String,
    pub scan_period_days: i64,
    /// Scan only the objects modified since the last run.
    pub auto_populate_timespan: bool,
}

/// Creates a trigger scanning all the objects in `bucket_name` every
/// `spec.scan_period_days` days.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    bucket_name: &str,
    spec: &TriggerSpec,
    options: &InspectOptions,
) -> anyhow::Result<JobTrigger> {
    let storage = StorageConfig::new()
        .set_cloud_storage_options(CloudStorageOptions::new().set_file_set(
            cloud_storage_options::FileSet::new().set_url(format!("gs://{bucket_name}/*")),
        ))
        .set_timespan_config(
            storage_config::TimespanConfig::new()
                .set_enable_auto_population_of_timespan_config(spec.auto_populate_timespan),
        );
    let schedule = Schedule::new().set_recurrence_period_duration(
        google_cloud_wkt::Duration::clamp(spec.scan_period_days * 24 * 60 * 60, 0),
    );
    let trigger = JobTrigger::new()
        .set_display_name(&spec.display_name)
        .set_description(&spec.description)
        .set_status(job_trigger::Status::Healthy)
        .set_triggers([job_trigger::Trigger::new().set_schedule(schedule)])
        .set_inspect_job(
            InspectJobConfig::new()
                .set_storage_config(storage)
                .set_inspect_config(options.inspect_config()),
        );
    let trigger = client
        .create_job_trigger()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_trigger_id(&spec.trigger_id)
        .set_job_trigger(trigger)
        .send()
        .await?;
    println!("Successfully created trigger: {}", trigger.name);
    Ok(trigger)
}
// [END dlp_create_trigger]
