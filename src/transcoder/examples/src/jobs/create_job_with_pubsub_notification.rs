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

// [START transcoder_create_job_with_pubsub_notification]
use crate::{config::ad_hoc_config, parent};
use google_cloud_job_notifications::{
    Channel, NotificationSource, TranscoderJobMatcher, TranscoderNotification, subscribe,
    wait_for_job,
};
use google_cloud_pubsub::client::Subscriber;
use google_cloud_video_transcoder_v1::client::TranscoderService;
use google_cloud_video_transcoder_v1::model::{Job, PubsubDestination};
use std::time::Duration;

/// Creates an ad-hoc job that reports its completion on `channel`, and
/// waits for that report.
///
/// Use [google_cloud_job_notifications::notification_channel] to create the
/// channel.
pub async fn sample(
    client: &TranscoderService,
    project_id: &str,
    location: &str,
    input_uri: &str,
    output_uri: &str,
    channel: &Channel,
    timeout: Duration,
) -> anyhow::Result<TranscoderNotification> {
    let job = create_job(client, project_id, location, input_uri, output_uri, &channel.topic).await?;
    let subscriber = Subscriber::builder().build().await?;
    let mut session = subscribe(&subscriber, channel);
    wait_for_notification(&mut session, &job.name, timeout).await
}

/// Creates the job, publishing to `topic` when it completes.
pub async fn create_job(
    client: &TranscoderService,
    project_id: &str,
    location: &str,
    input_uri: &str,
    output_uri: &str,
    topic: &str,
) -> anyhow::Result<Job> {
    let config = ad_hoc_config().set_pubsub_destination(PubsubDestination::new().set_topic(topic));
    let job = client
        .create_job()
        .set_parent(parent(project_id, location))
        .set_job(
            Job::new()
                .set_input_uri(input_uri)
                .set_output_uri(output_uri)
                .set_config(config),
        )
        .send()
        .await?;
    println!("Job: {}", job.name);
    Ok(job)
}

/// Waits for the notification about `job_name` on `source`.
///
/// A failed job is not an error here: the notification carries the final
/// state and the failure reason.
pub async fn wait_for_notification<S>(
    source: &mut S,
    job_name: &str,
    timeout: Duration,
) -> anyhow::Result<TranscoderNotification>
where
    S: NotificationSource,
{
    let matcher = TranscoderJobMatcher::new(job_name);
    let message = wait_for_job(source, &matcher, timeout).await?;
    let notification = TranscoderNotification::parse(&message.data)?;
    println!(
        "Job {} finished with state {}",
        notification.job.name, notification.job.state
    );
    if notification.is_failed() {
        let reason = notification.failure_reason().unwrap_or("unknown");
        tracing::warn!(job = job_name, "transcoding failed: {reason}");
        println!("Failure reason: {reason}");
    }
    Ok(notification)
}
// [END transcoder_create_job_with_pubsub_notification]
