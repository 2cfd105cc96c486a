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

// [START dlp_categorical_stats]
use crate::format_value;
use crate::job::Notifications;
use crate::risk::run;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    BigQueryTable, DlpJob, FieldId, PrivacyMetric, privacy_metric,
};
use std::fmt::Write as _;

/// Computes how often each value of `column_name` occurs.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    source: &BigQueryTable,
    column_name: &str,
    notifications: &Notifications,
) -> anyhow::Result<DlpJob> {
    let job = run(client, project_id, source, metric(column_name), notifications).await?;
    print!("{}", report(&job));
    Ok(job)
}

pub fn metric(column_name: &str) -> PrivacyMetric {
    PrivacyMetric::new().set_categorical_stats_config(
        privacy_metric::CategoricalStatsConfig::new()
            .set_field(FieldId::new().set_name(column_name)),
    )
}

pub fn report(job: &DlpJob) -> String {
    let mut out = String::new();
    let buckets = job
        .risk_details()
        .and_then(|d| d.categorical_stats_result())
        .map(|r| r.value_frequency_histogram_buckets.as_slice())
        .unwrap_or_default();
    for (i, bucket) in buckets.iter().enumerate() {
        let _ = writeln!(out, "Histogram bucket {i}");
        let _ = writeln!(
            out,
            "  Most common value occurs {} times",
            bucket.value_frequency_upper_bound
        );
        let _ = writeln!(
            out,
            "  Least common value occurs {} times",
            bucket.value_frequency_lower_bound
        );
        let _ = writeln!(out, "  {} unique values total", bucket.bucket_size);
        for v in &bucket.bucket_values {
            let value = v.value.as_ref().map(format_value).unwrap_or_default();
            let _ = writeln!(out, "    Value {value} occurs {} times", v.count);
        }
    }
    out
}
// [END dlp_categorical_stats]
