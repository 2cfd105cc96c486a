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

// [START dlp_k_anonymity_with_entity_id]
use crate::deid::field_ids;
use crate::job::poll_until_done;
use crate::risk::{bigquery_table, create_job, join_values};
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    Action, DlpJob, EntityId, FieldId, OutputStorageConfig, PrivacyMetric, action,
    dlp_job::JobState, privacy_metric,
};
use std::fmt::Write as _;
use std::time::Duration;

pub const POLL_TIMEOUT: Duration = Duration::from_secs(15 * 60);
pub const POLL_PERIOD: Duration = Duration::from_secs(30);

/// Computes k-anonymity over the public Wikipedia samples, counting each
/// contributor (the `id` column) once.
///
/// The results are saved to `{project_id}.{dataset_id}.{table_id}`. The job
/// has no Pub/Sub action, the sample polls it instead.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    dataset_id: &str,
    table_id: &str,
    quasi_ids: &[&str],
) -> anyhow::Result<DlpJob> {
    let source = bigquery_table("bigquery-public-data", "samples", "wikipedia");
    let save = Action::new().set_save_findings(action::SaveFindings::new().set_output_config(
        OutputStorageConfig::new().set_table(bigquery_table(project_id, dataset_id, table_id)),
    ));
    let job = create_job(client, project_id, &source, metric(quasi_ids), [save]).await?;
    println!("Created job: {}", job.name);

    let job = poll_until_done(client, &job.name, POLL_TIMEOUT, POLL_PERIOD).await?;
    if job.state != JobState::Done {
        println!("Job did not complete within 15 minutes.");
    }
    println!("Job status: {}", job.state);
    println!("Job name: {}", job.name);
    print!("{}", report(&job));
    Ok(job)
}

pub fn metric(quasi_ids: &[&str]) -> PrivacyMetric {
    PrivacyMetric::new().set_k_anonymity_config(
        privacy_metric::KAnonymityConfig::new()
            .set_quasi_ids(field_ids(quasi_ids.iter().copied()))
            .set_entity_id(EntityId::new().set_field(FieldId::new().set_name("id"))),
    )
}

pub fn report(job: &DlpJob) -> String {
    let mut out = String::new();
    let buckets = job
        .risk_details()
        .and_then(|d| d.k_anonymity_result())
        .map(|r| r.equivalence_class_histogram_buckets.as_slice())
        .unwrap_or_default();
    for bucket in buckets {
        let _ = writeln!(
            out,
            "Bucket size range: [{}, {}]",
            bucket.equivalence_class_size_lower_bound, bucket.equivalence_class_size_upper_bound
        );
        for class in &bucket.bucket_values {
            let _ = writeln!(
                out,
                "\tQuasi-ID values: {}",
                join_values(&class.quasi_ids_values)
            );
            let _ = writeln!(out, "\tClass size: {}", class.equivalence_class_size);
        }
    }
    out
}
// [END dlp_k_anonymity_with_entity_id]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockDlpService, PROJECT_ID, client};
    use google_cloud_gax::response::Response;
    use google_cloud_privacy_dlp_v2::model::{
        AnalyzeDataSourceRiskDetails, Value,
        analyze_data_source_risk_details::{
            KAnonymityResult,
            k_anonymity_result::{KAnonymityEquivalenceClass, KAnonymityHistogramBucket},
        },
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn entity_id() {
        let got = metric(&["title", "contributor_ip"]);
        let config = got.k_anonymity_config().expect("a k-anonymity config");
        assert_eq!(
            config.entity_id.as_ref().and_then(|e| e.field.as_ref()),
            Some(&FieldId::new().set_name("id"))
        );
        assert_eq!(config.quasi_ids, field_ids(["title", "contributor_ip"]));
    }

    #[tokio::test(start_paused = true)]
    async fn saves_and_polls() -> anyhow::Result<()> {
        const NAME: &str = "projects/test-project/dlpJobs/r-456";
        let mut mock = MockDlpService::new();
        mock.expect_create_dlp_job()
            .withf(|r, _| {
                let Some(job) = r.risk_job() else {
                    return false;
                };
                let output = job
                    .actions
                    .first()
                    .and_then(|a| a.save_findings())
                    .and_then(|s| s.output_config.as_ref())
                    .and_then(|c| c.table());
                output.is_some_and(|t| t.dataset_id == "dataset" && t.table_id == "table")
                    && job.source_table.as_ref().is_some_and(|t| t.table_id == "wikipedia")
            })
            .return_once(|_, _| Ok(Response::from(DlpJob::new().set_name(NAME))));
        mock.expect_get_dlp_job()
            .withf(|r, _| r.name == NAME)
            .return_once(|_, _| {
                let bucket = KAnonymityHistogramBucket::new()
                    .set_equivalence_class_size_lower_bound(1)
                    .set_equivalence_class_size_upper_bound(2)
                    .set_bucket_values([KAnonymityEquivalenceClass::new()
                        .set_quasi_ids_values([
                            Value::new().set_string_value("Rust"),
                            Value::new().set_string_value("10.0.0.1"),
                        ])
                        .set_equivalence_class_size(1)]);
                Ok(Response::from(
                    DlpJob::new()
                        .set_name(NAME)
                        .set_state(JobState::Done)
                        .set_risk_details(AnalyzeDataSourceRiskDetails::new().set_k_anonymity_result(
                            KAnonymityResult::new().set_equivalence_class_histogram_buckets([bucket]),
                        )),
                ))
            });
        let client = client(mock);

        let job = sample(&client, PROJECT_ID, "dataset", "table", &["title", "contributor_ip"]).await?;
        assert_eq!(job.state, JobState::Done);
        assert_eq!(
            report(&job),
            "Bucket size range: [1, 2]\n\
             \tQuasi-ID values: Rust, 10.0.0.1\n\
             \tClass size: 1\n"
        );
        Ok(())
    }
}
