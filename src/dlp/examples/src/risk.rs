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

//! Samples computing re-identification risk metrics over BigQuery tables.
//!
//! Each sample creates a risk analysis job, waits for it to complete, and
//! prints the resulting histogram. The `report()` function in each module
//! formats the histogram.

pub mod risk_categorical;
pub mod risk_k_anonymity;
pub mod risk_k_anonymity_with_entity_id;
pub mod risk_k_map;
pub mod risk_l_diversity;
pub mod risk_numerical;

use crate::format_value;
use crate::job::{Notifications, publish_to, wait_for_completion};
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    Action, BigQueryTable, DlpJob, PrivacyMetric, RiskAnalysisJobConfig, Value,
};

/// A reference to a BigQuery table.
pub fn bigquery_table(project_id: &str, dataset_id: &str, table_id: &str) -> BigQueryTable {
    BigQueryTable::new()
        .set_project_id(project_id)
        .set_dataset_id(dataset_id)
        .set_table_id(table_id)
}

/// Creates a risk analysis job computing `metric` over `source`.
pub async fn create_job<I>(
    client: &DlpService,
    project_id: &str,
    source: &BigQueryTable,
    metric: PrivacyMetric,
    actions: I,
) -> anyhow::Result<DlpJob>
where
    I: IntoIterator<Item = Action>,
{
    let job = client
        .create_dlp_job()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .set_risk_job(
            RiskAnalysisJobConfig::new()
                .set_privacy_metric(metric)
                .set_source_table(source.clone())
                .set_actions(actions),
        )
        .send()
        .await?;
    Ok(job)
}

/// Creates the job with a Pub/Sub action and waits for its completion.
pub(crate) async fn run(
    client: &DlpService,
    project_id: &str,
    source: &BigQueryTable,
    metric: PrivacyMetric,
    notifications: &Notifications,
) -> anyhow::Result<DlpJob> {
    let channel = notifications.channel(project_id).await?;
    let job = create_job(client, project_id, source, metric, [publish_to(&channel.topic)]).await?;
    println!("Created job: {}", job.name);
    wait_for_completion(client, &channel, &job, notifications.timeout).await
}

pub(crate) fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .map(format_value)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockDlpService, PARENT, PROJECT_ID, client};
    use google_cloud_gax::response::Response;
    use google_cloud_privacy_dlp_v2::model::{FieldId, privacy_metric};

    #[tokio::test]
    async fn risk_job_request() -> anyhow::Result<()> {
        let mut mock = MockDlpService::new();
        mock.expect_create_dlp_job()
            .withf(|r, _| {
                let Some(job) = r.risk_job() else {
                    return false;
                };
                r.parent == PARENT
                    && job.source_table
                        == Some(bigquery_table("bigquery-public-data", "samples", "wikipedia"))
                    && job
                        .privacy_metric
                        .as_ref()
                        .and_then(|m| m.numerical_stats_config())
                        .is_some()
                    && job
                        .actions
                        .first()
                        .and_then(|a| a.pub_sub())
                        .is_some_and(|p| p.topic == "projects/test-project/topics/t")
            })
            .return_once(|_, _| {
                Ok(Response::from(
                    DlpJob::new().set_name("projects/test-project/dlpJobs/r-123"),
                ))
            });
        let client = client(mock);

        let metric = PrivacyMetric::new().set_numerical_stats_config(
            privacy_metric::NumericalStatsConfig::new()
                .set_field(FieldId::new().set_name("mean_temp")),
        );
        let job = create_job(
            &client,
            PROJECT_ID,
            &bigquery_table("bigquery-public-data", "samples", "wikipedia"),
            metric,
            [publish_to("projects/test-project/topics/t")],
        )
        .await?;
        assert_eq!(job.name, "projects/test-project/dlpJobs/r-123");
        Ok(())
    }

    #[test]
    fn values() {
        let got = join_values(&[
            Value::new().set_string_value("CA"),
            Value::new().set_integer_value(94107),
        ]);
        assert_eq!(got, "CA, 94107");
        assert_eq!(join_values(&[]), "");
    }
}
