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

//! Decide whether a notification belongs to a given job.

use crate::{Error, Result};
use google_cloud_pubsub::model::Message as PubsubMessage;

/// The attribute DLP sets on job completion notifications.
pub const DLP_JOB_NAME_ATTRIBUTE: &str = "DlpJobName";

/// Selects the notifications about one job.
pub trait JobMatcher {
    /// The job this matcher is looking for, used in logs and errors.
    fn job_name(&self) -> &str;

    /// Returns true if `message` reports on the job.
    fn matches(&self, message: &PubsubMessage) -> bool;
}

/// Matches messages carrying an attribute with an exact value.
#[derive(Clone, Debug)]
pub struct AttributeMatcher {
    key: String,
    value: String,
}

impl AttributeMatcher {
    pub fn new<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Matches the notifications DLP publishes when `job_name` completes.
    pub fn dlp_job<V: Into<String>>(job_name: V) -> Self {
        Self::new(DLP_JOB_NAME_ATTRIBUTE, job_name)
    }
}

impl JobMatcher for AttributeMatcher {
    fn job_name(&self) -> &str {
        &self.value
    }

    fn matches(&self, message: &PubsubMessage) -> bool {
        message
            .attributes
            .get(&self.key)
            .is_some_and(|v| *v == self.value)
    }
}

/// Matches the JSON notifications published by the Transcoder API.
///
/// The service may report the job using the project number while the
/// application knows it by project id, so only the location and job id are
/// compared.
#[derive(Clone, Debug)]
pub struct TranscoderJobMatcher {
    name: String,
}

impl TranscoderJobMatcher {
    pub fn new<V: Into<String>>(job_name: V) -> Self {
        Self {
            name: job_name.into(),
        }
    }
}

impl JobMatcher for TranscoderJobMatcher {
    fn job_name(&self) -> &str {
        &self.name
    }

    fn matches(&self, message: &PubsubMessage) -> bool {
        let notification = match TranscoderNotification::parse(&message.data) {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!("ignoring malformed transcoder notification: {e}");
                return false;
            }
        };
        match (job_suffix(&notification.job.name), job_suffix(&self.name)) {
            (Some(got), Some(want)) => got == want,
            _ => notification.job.name == self.name,
        }
    }
}

/// The body of a Transcoder job notification.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TranscoderNotification {
    pub job: JobStatus,
}

/// The job status carried in a Transcoder notification.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JobStatus {
    pub name: String,
    pub state: String,
    pub failure_reason: Option<String>,
    pub error: Option<JobError>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct JobError {
    pub code: i32,
    pub message: String,
}

impl TranscoderNotification {
    pub fn parse(data: &[u8]) -> Result<Self> {
        serde_json::from_slice(data).map_err(Error::Payload)
    }

    pub fn is_failed(&self) -> bool {
        self.job.state == "FAILED"
    }

    /// A human readable reason for the failure, if the service sent one.
    pub fn failure_reason(&self) -> Option<&str> {
        self.job
            .failure_reason
            .as_deref()
            .or(self.job.error.as_ref().map(|e| e.message.as_str()))
    }
}

// `projects/{project}/locations/{location}/jobs/{job}` -> `{location}/jobs/{job}`
fn job_suffix(name: &str) -> Option<&str> {
    let (_, rest) = name.split_once("/locations/")?;
    rest.contains("/jobs/").then_some(rest)
}
