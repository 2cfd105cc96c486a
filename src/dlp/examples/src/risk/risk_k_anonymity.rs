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

// [START dlp_k_anonymity]
use crate::deid::field_ids;
use crate::job::Notifications;
use crate::risk::{join_values, run};
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{BigQueryTable, DlpJob, PrivacyMetric, privacy_metric};
use std::fmt::Write as _;

/// Computes the size of the equivalence classes formed by the
/// `quasi_ids` columns.
pub async fn sample(
    client: &DlpService,
    project_id: &str,
    source: &BigQueryTable,
    quasi_ids: &[&str],
    notifications: &Notifications,
) -> anyhow::Result<DlpJob> {
    let job = run(client, project_id, source, metric(quasi_ids), notifications).await?;
    print!("{}", report(&job));
    Ok(job)
}

pub fn metric(quasi_ids: &[&str]) -> PrivacyMetric {
    PrivacyMetric::new().set_k_anonymity_config(
        privacy_metric::KAnonymityConfig::new().set_quasi_ids(field_ids(quasi_ids.iter().copied())),
    )
}

/// Formats the equivalence class histogram.
pub fn report(job: &DlpJob) -> String {
    let mut out = String::new();
    let buckets = job
        .risk_details()
        .and_then(|d| d.k_anonymity_result())
        .map(|r| r.equivalence_class_histogram_buckets.as_slice())
        .unwrap_or_default();
    for (i, bucket) in buckets.iter().enumerate() {
        let _ = writeln!(out, "Histogram bucket {i}");
        let _ = writeln!(
            out,
            "  Size range: [{},{}]",
            bucket.equivalence_class_size_lower_bound, bucket.equivalence_class_size_upper_bound
        );
        let _ = writeln!(out, "  {} unique values total", bucket.bucket_size);
        for class in &bucket.bucket_values {
            let _ = writeln!(
                out,
                "    QuasiID values: {}",
                join_values(&class.quasi_ids_values)
            );
            let _ = writeln!(out, "    Class size: {}", class.equivalence_class_size);
        }
    }
    out
}
// [END dlp_k_anonymity]

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_privacy_dlp_v2::model::{
        AnalyzeDataSourceRiskDetails, Value,
        analyze_data_source_risk_details::{
            KAnonymityResult,
            k_anonymity_result::{KAnonymityEquivalenceClass, KAnonymityHistogramBucket},
        },
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn quasi_ids() {
        let got = metric(&["state_number", "county"]);
        let names = got
            .k_anonymity_config()
            .map(|c| c.quasi_ids.iter().map(|f| f.name.clone()).collect::<Vec<_>>());
        assert_eq!(
            names,
            Some(vec!["state_number".to_string(), "county".to_string()])
        );
    }

    #[test]
    fn histogram() {
        let bucket = KAnonymityHistogramBucket::new()
            .set_equivalence_class_size_lower_bound(1)
            .set_equivalence_class_size_upper_bound(1)
            .set_bucket_size(1)
            .set_bucket_values([KAnonymityEquivalenceClass::new()
                .set_quasi_ids_values([
                    Value::new().set_integer_value(1),
                    Value::new().set_string_value("Baldwin"),
                ])
                .set_equivalence_class_size(1)]);
        let job = DlpJob::new().set_risk_details(
            AnalyzeDataSourceRiskDetails::new().set_k_anonymity_result(
                KAnonymityResult::new().set_equivalence_class_histogram_buckets([bucket]),
            ),
        );
        assert_eq!(
            report(&job),
            "Histogram bucket 0\n\
             \x20 Size range: [1,1]\n\
             \x20 1 unique values total\n\
             \x20   QuasiID values: 1, Baldwin\n\
             \x20   Class size: 1\n"
        );
    }
}
