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

//! Samples for the Transcoder API client library.
//!
//! Transcoding jobs run in the background. The `create_job_*` samples return
//! as soon as the service accepts the job. Use [wait::wait_for_job_state] to
//! poll the job, or the [jobs::create_job_with_pubsub_notification] sample to
//! learn about its completion through Pub/Sub.

pub mod config;
pub mod jobs;
pub mod templates;
pub mod wait;

/// The parent for jobs and job templates.
pub fn parent(project_id: &str, location: &str) -> String {
    format!("projects/{project_id}/locations/{location}")
}

/// Converts fractional seconds to a protobuf duration.
///
/// The nanoseconds are rounded, so `8.1` becomes 8 seconds and 100,000,000
/// nanoseconds. Truncating them instead would yield 99,999,999 nanoseconds,
/// because `8.1` has no exact `f64` representation. The offsets sent by
/// these samples differ from truncating implementations by at most one
/// nanosecond.
pub fn offset(seconds: f64) -> google_cloud_wkt::Duration {
    let whole = seconds.trunc();
    let nanos = ((seconds - whole) * 1_000_000_000.0).round();
    google_cloud_wkt::Duration::clamp(whole as i64, nanos as i32)
}
