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

// [START dlp_k_map]
use crate::job::Notifications;
use crate::risk::{join_values, run};
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    BigQueryTable, DlpJob, FieldId, PrivacyMetric, privacy_metric,
    privacy_metric::k_map_estimation_config::TaggedField,
};
use std::fmt::Write as _;

/// Estimates the re-identification risk of the `quasi_ids` columns against
/// the public statistics for `region_code`, e.g. `US`.
///
/// The service infers the info type of each column.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    source: &BigQueryTable,
    region_code: &str,
    quasi_ids: &[&str],
    notifications: &Notifications,
) -> anyhow::Result<DlpJob> {
    let metric = metric(region_code, quasi_ids);
    let job = run(client, project_id, source, metric, notifications).await?;
    print!("{}", report(&job));
    Ok(job)
}

pub fn metric(region_code: &str, quasi_ids: &[&str]) -> PrivacyMetric {
    let tagged = quasi_ids.iter().map(|name| {
        TaggedField::new()
            .set_field(FieldId::new().set_name(*name))
            .set_inferred(google_cloud_wkt::Empty::default())
    });
    PrivacyMetric::new().set_k_map_estimation_config(
        privacy_metric::KMapEstimationConfig::new()
            .set_quasi_ids(tagged)
            .set_region_code(region_code),
    )
}

pub fn report(job: &DlpJob) -> String {
    let mut out = String::new();
    let buckets = job
        .risk_details()
        .and_then(|d| d.k_map_estimation_result())
        .map(|r| r.k_map_estimation_histogram.as_slice())
        .unwrap_or_default();
    for (i, bucket) in buckets.iter().enumerate() {
        let _ = writeln!(out, "Histogram bucket {i}");
        let _ = writeln!(
            out,
            "  Anonymity range: [{},{}]",
            bucket.min_anonymity, bucket.max_anonymity
        );
        let _ = writeln!(out, "  {} unique values total", bucket.bucket_size);
        for v in &bucket.bucket_values {
            let _ = writeln!(
                out,
                "    QuasiID values: {}",
                join_values(&v.quasi_ids_values)
            );
            let _ = writeln!(out, "    Estimated anonymity: {}", v.estimated_anonymity);
        }
    }
    out
}
// [END dlp_k_map]
