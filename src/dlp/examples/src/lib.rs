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

//! Samples for the Sensitive Data Protection (DLP) client library.
//!
//! Each sample lives in its own module and exposes a `sample()` function.
//! The content samples return the transformed content (or the findings) in
//! addition to printing them. The job samples wait for the job completion
//! notification, see [job].

pub mod deid;
pub mod inspect;
pub mod job;
pub mod jobs;
pub mod metadata;
pub mod redact;
pub mod risk;
pub mod templates;
pub mod triggers;

pub use job::{Notifications, WAIT_TIMEOUT, parent};

use google_cloud_privacy_dlp_v2::model::{Table, Value, value};

/// Formats a single cell or quasi-identifier value.
pub fn format_value(value: &Value) -> String {
    match &value.r#type {
        Some(value::Type::StringValue(v)) => v.clone(),
        Some(value::Type::IntegerValue(v)) => v.to_string(),
        Some(value::Type::FloatValue(v)) => v.to_string(),
        Some(value::Type::BooleanValue(v)) => v.to_string(),
        Some(other) => format!("{other:?}"),
        None => String::new(),
    }
}

/// Formats an optional timestamp in RFC 3339 format.
pub fn format_timestamp(timestamp: Option<&google_cloud_wkt::Timestamp>) -> String {
    timestamp.cloned().map(String::from).unwrap_or_default()
}

/// Formats a table as comma separated lines, headers first.
pub fn format_table(table: &Table) -> String {
    let headers = table
        .headers
        .iter()
        .map(|h| h.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let rows = table.rows.iter().map(|row| {
        row.values
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", ")
    });
    std::iter::once(headers)
        .chain(rows)
        .collect::<Vec<_>>()
        .join("\n")
}
