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

//! Helpers shared by the samples that create DLP jobs.
//!
//! The inspection and risk analysis jobs run in the background. The samples
//! attach a Pub/Sub action to each job, and then wait for the notification
//! with the `DlpJobName` attribute matching the new job:
//!
//! 1. [notification_channel] creates the topic and subscription, unless they
//!    already exist.
//! 2. The sample creates the job with the [publish_to] action.
//! 3. [wait_for_completion] waits for the notification and fetches the job.
//!
//! If no notification arrives before the deadline the samples return an
//! error wrapping [google_cloud_job_notifications::Error::Timeout]. The job
//! may still be running in this case.

use anyhow::Context;
use google_cloud_job_notifications::{
    AttributeMatcher, Channel, NotificationSource, notification_channel, subscribe, wait_for_job,
};
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::{Action, DlpJob, action, dlp_job::JobState};
use google_cloud_pubsub::client::Subscriber;
use std::time::Duration;

/// How long the samples wait for a job notification.
pub const WAIT_TIMEOUT: Duration = Duration::from_secs(10 * 60);

/// The Pub/Sub resources used to learn about job completion.
#[derive(Clone, Debug, PartialEq)]
pub struct Notifications {
    pub topic_id: String,
    pub subscription_id: String,
    pub timeout: Duration,
}

impl Notifications {
    pub fn new<T: Into<String>, S: Into<String>>(topic_id: T, subscription_id: S) -> Self {
        Self {
            topic_id: topic_id.into(),
            subscription_id: subscription_id.into(),
            timeout: WAIT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Creates (if needed) the topic and subscription.
    pub async fn channel(&self, project_id: &str) -> anyhow::Result<Channel> {
        let channel =
            notification_channel(project_id, &self.topic_id, &self.subscription_id).await?;
        Ok(channel)
    }
}

/// The parent for DLP requests in the global location.
pub fn parent(project_id: &str) -> String {
    format!("projects/{project_id}/locations/global")
}

/// An action publishing the job completion to `topic`.
pub fn publish_to<T: Into<String>>(topic: T) -> Action {
    Action::new().set_pub_sub(action::PublishToPubSub::new().set_topic(topic))
}

/// Waits for the notification about `job` on `channel`, then fetches it.
pub async fn wait_for_completion(
    client: &DlpService,
    channel: &Channel,
    job: &DlpJob,
    timeout: Duration,
) -> anyhow::Result<DlpJob> {
    let subscriber = Subscriber::builder().build().await?;
    let mut session = subscribe(&subscriber, channel);
    complete(client, &mut session, &job.name, timeout).await
}

/// Waits for the notification about `job_name` on `source`, then fetches the
/// job.
pub async fn complete<S>(
    client: &DlpService,
    source: &mut S,
    job_name: &str,
    timeout: Duration,
) -> anyhow::Result<DlpJob>
where
    S: NotificationSource,
{
    let matcher = AttributeMatcher::dlp_job(job_name);
    wait_for_job(source, &matcher, timeout).await?;
    let job = client
        .get_dlp_job()
        .set_name(job_name)
        .send()
        .await
        .with_context(|| format!("cannot get job {job_name}"))?;
    if job.state == JobState::Failed {
        for error in &job.errors {
            tracing::warn!(job = job_name, "job failed: {:?}", error.details);
        }
    }
    Ok(job)
}

/// Polls `job_name` every `period` until it reaches a final state.
///
/// Returns the last job fetched, which may still be running if `timeout`
/// expired. Used for jobs without a Pub/Sub action.
pub async fn poll_until_done(
    client: &DlpService,
    job_name: &str,
    timeout: Duration,
    period: Duration,
) -> anyhow::Result<DlpJob> {
    let deadline = tokio::time::Instant::now() + timeout;
    loop {
        let job = client
            .get_dlp_job()
            .set_name(job_name)
            .send()
            .await
            .with_context(|| format!("cannot get job {job_name}"))?;
        if matches!(
            job.state,
            JobState::Done | JobState::Failed | JobState::Canceled
        ) {
            return Ok(job);
        }
        if tokio::time::Instant::now() + period > deadline {
            tracing::warn!(job = job_name, state = %job.state, "job did not complete in {timeout:?}");
            return Ok(job);
        }
        tokio::time::sleep(period).await;
    }
}

/// Prints the number of findings for each info type.
pub fn print_info_type_stats(job: &DlpJob) {
    let stats = job
        .inspect_details()
        .and_then(|d| d.result.as_ref())
        .map(|r| r.info_type_stats.as_slice())
        .unwrap_or_default();
    if stats.is_empty() {
        println!("No results");
    }
    for s in stats {
        let name = s.info_type.as_ref().map(|t| t.name.as_str()).unwrap_or_default();
        println!("  Found {} instances of infoType {name}", s.count);
    }
}
