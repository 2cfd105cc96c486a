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

// [START dlp_numerical_stats]
use crate::format_value;
use crate::job::Notifications;
use crate::risk::run;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{
    BigQueryTable, DlpJob, FieldId, PrivacyMetric, Value, privacy_metric,
};
use std::fmt::Write as _;

/// Computes the range and quantiles of the numeric `column_name`.
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
    PrivacyMetric::new().set_numerical_stats_config(
        privacy_metric::NumericalStatsConfig::new()
            .set_field(FieldId::new().set_name(column_name)),
    )
}

/// Formats the value range and the distinct quantile values.
pub fn report(job: &DlpJob) -> String {
    let mut out = String::new();
    let Some(result) = job
        .risk_details()
        .and_then(|d| d.numerical_stats_result())
    else {
        return out;
    };
    let bound = |v: &Option<Value>| v.as_ref().map(format_value).unwrap_or_default();
    let _ = writeln!(
        out,
        "Value range: [{}, {}]",
        bound(&result.min_value),
        bound(&result.max_value)
    );
    let mut previous = None;
    for (i, value) in result.quantile_values.iter().enumerate() {
        let value = format_value(value);
        if previous.as_ref() != Some(&value) {
            let _ = writeln!(out, "Value at {i} quantile: {value}");
            previous = Some(value);
        }
    }
    out
}
// [END dlp_numerical_stats]
