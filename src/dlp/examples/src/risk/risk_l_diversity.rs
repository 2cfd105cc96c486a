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

// [START dlp_l_diversity]
use crate::deid::field_ids;
use crate::format_value;
use crate::job::Notifications;
use crate::risk::{join_values, run};
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    BigQueryTable, DlpJob, FieldId, PrivacyMetric, privacy_metric,
};
use std::fmt::Write as _;

/// Computes how many distinct values of `sensitive_attribute` appear in each
/// equivalence class.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    source: &BigQueryTable,
    sensitive_attribute: &str,
    quasi_ids: &[&str],
    notifications: &Notifications,
) -> anyhow::Result<DlpJob> {
    let metric = metric(sensitive_attribute, quasi_ids);
    let job = run(client, project_id, source, metric, notifications).await?;
    print!("{}", report(&job));
    Ok(job)
}

pub fn metric(sensitive_attribute: &str, quasi_ids: &[&str]) -> PrivacyMetric {
    PrivacyMetric::new().set_l_diversity_config(
        privacy_metric::LDiversityConfig::new()
            .set_quasi_ids(field_ids(quasi_ids.iter().copied()))
            .set_sensitive_attribute(FieldId::new().set_name(sensitive_attribute)),
    )
}

pub fn report(job: &DlpJob) -> String {
    let mut out = String::new();
    let buckets = job
        .risk_details()
        .and_then(|d| d.l_diversity_result())
        .map(|r| r.sensitive_value_frequency_histogram_buckets.as_slice())
        .unwrap_or_default();
    for (i, bucket) in buckets.iter().enumerate() {
        let _ = writeln!(out, "Histogram bucket {i}");
        let _ = writeln!(
            out,
            "  Size range: [{},{}]",
            bucket.sensitive_value_frequency_lower_bound,
            bucket.sensitive_value_frequency_upper_bound
        );
        let _ = writeln!(out, "  {} unique values total", bucket.bucket_size);
        for class in &bucket.bucket_values {
            let _ = writeln!(
                out,
                "    QuasiID values: {}",
                join_values(&class.quasi_ids_values)
            );
            let _ = writeln!(out, "    Class size: {}", class.equivalence_class_size);
            for v in &class.top_sensitive_values {
                let value = v.value.as_ref().map(format_value).unwrap_or_default();
                let _ = writeln!(out, "    Sensitive value {value} occurs {} times", v.count);
            }
        }
    }
    out
}
// [END dlp_l_diversity]
