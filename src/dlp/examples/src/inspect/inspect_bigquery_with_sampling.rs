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

// [START dlp_inspect_bigquery_with_sampling]
use crate::job::{Notifications, print_info_type_stats, publish_to, wait_for_completion};
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    BigQueryOptions, BigQueryTable, DlpJob, FieldId, InfoType, InspectConfig, InspectJobConfig,
    StorageConfig, big_query_options,
};

/// Inspects 10,000 rows of a public table, starting at a random row.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    notifications: &Notifications,
) -> anyhow::Result<DlpJob> {
    let channel = notifications.channel(project_id).await?;
    let job = create_job(client, project_id, &channel.topic).await?;
    println!("Job Created: {}", job.name);

    let job = wait_for_completion(client, &channel, &job, notifications.timeout).await?;
    print_info_type_stats(&job);
    Ok(job)
}

pub async fn create_job(
    client: &DlpService,
    project_id: &str,
    topic: &str,
) -> anyhow::Result<DlpJob> {
    let table = BigQueryTable::new()
        .set_project_id("bigquery-public-data")
        .set_dataset_id("usa_names")
        .set_table_id("usa_1910_current");
    let options = BigQueryOptions::new()
        .set_table_reference(table)
        .set_rows_limit(10_000)
        .set_sample_method(big_query_options::SampleMethod::RandomStart)
        .set_identifying_fields([FieldId::new().set_name("name")]);
    let inspect = InspectConfig::new()
        .set_info_types([InfoType::new().set_name("PERSON_NAME")])
        .set_include_quote(true);

    let job = client
        .create_dlp_job()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_inspect_job(
            InspectJobConfig::new()
                .set_storage_config(StorageConfig::new().set_big_query_options(options))
                .set_inspect_config(inspect)
                .set_actions([publish_to(topic)]),
        )
        .send()
        .await?;
    Ok(job)
}
// [END dlp_inspect_bigquery_with_sampling]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockDlpService, PROJECT_ID, client};
    use google_cloud_gax::response::Response;

    #[tokio::test]
    async fn sampling_options() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_create_dlp_job()
            .withf(|r, _| {
                let options = r
                    .inspect_job()
                    .and_then(|j| j.storage_config.as_ref())
                    .and_then(|s| s.big_query_options());
                options.is_some_and(|o| {
                    o.rows_limit == 10_000
                        && o.sample_method == big_query_options::SampleMethod::RandomStart
                        && o.identifying_fields.iter().map(|f| f.name.as_str()).eq(["name"])
                        && o.table_reference
                            .as_ref()
                            .is_some_and(|t| t.table_id == "usa_1910_current")
                })
            })
            .return_once(|_, _| Ok(Response::from(DlpJob::new().set_name("j"))));
        let client = client(mock);

        let job = create_job(&client, PROJECT_ID, "projects/p/topics/t").await?;
        assert_eq!(job.name, "j");
        Ok(())
    }
}
