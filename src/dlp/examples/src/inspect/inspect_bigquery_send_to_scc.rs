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

// [START dlp_inspect_bigquery_send_to_scc]
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    Action, BigQueryOptions, BigQueryTable, DlpJob, InfoType, InspectConfig, InspectJobConfig,
    Likelihood, StorageConfig, action, inspect_config,
};

/// Inspects a table and publishes the summary to Security Command Center.
///
/// The sample does not wait for the job, the results are available in the
/// Security Command Center console.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    dataset_id: &str,
    table_id: &str,
) -> anyhow::Result<DlpJob> {
    let table = BigQueryTable::new()
        .set_project_id(project_id)
        .set_dataset_id(dataset_id)
        .set_table_id(table_id);
    let inspect = InspectConfig::new()
        .set_info_types(
            ["EMAIL_ADDRESS", "PERSON_NAME", "LOCATION", "PHONE_NUMBER"]
                .map(|n| InfoType::new().set_name(n)),
        )
        .set_min_likelihood(Likelihood::Unlikely)
        .set_limits(inspect_config::FindingLimits::new().set_max_findings_per_item(100))
        .set_include_quote(true);

    let job = client
        .create_dlp_job()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_inspect_job(
            InspectJobConfig::new()
                .set_storage_config(
                    StorageConfig::new()
                        .set_big_query_options(BigQueryOptions::new().set_table_reference(table)),
                )
                .set_inspect_config(inspect)
                .set_actions([Action::new()
                    .set_publish_summary_to_cscc(action::PublishSummaryToCscc::new())]),
        )
        .send()
        .await?;
    println!("Job created successfully: {}", job.name);
    Ok(job)
}
// [END dlp_inspect_bigquery_send_to_scc]
