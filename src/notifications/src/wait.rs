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

use crate::matcher::JobMatcher;
use crate::source::{Acknowledge, NotificationSource};
use crate::{Error, Result};
use google_cloud_pubsub::model::Message as PubsubMessage;
use std::time::Duration;
use tokio::time::Instant;

/// Waits for the notification reporting that a job completed.
///
/// Messages accepted by `matcher` are acknowledged and returned. Any other
/// message is negatively acknowledged, so the service can redeliver it to
/// whoever is waiting for that job, and the wait continues. The deadline is
/// computed once: rejected messages do not extend it.
///
/// # Example
/// ```no_run
/// # use google_cloud_job_notifications::{AttributeMatcher, wait_for_job};
/// # use google_cloud_pubsub::subscriber::session::Session;
/// # async fn sample(mut session: Session, job_name: &str) -> anyhow::Result<()> {
/// let matcher = AttributeMatcher::dlp_job(job_name);
/// let message = wait_for_job(&mut session, &matcher, std::time::Duration::from_secs(600)).await?;
/// println!("job {job_name} completed: {message:?}");
/// # Ok(()) }
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(job = matcher.job_name()))]
pub async fn wait_for_job<S, M>(
    source: &mut S,
    matcher: &M,
    timeout: Duration,
) -> Result<PubsubMessage>
where
    S: NotificationSource,
    M: JobMatcher + ?Sized,
{
    let deadline = Instant::now() + timeout;
    loop {
        let (message, handler) = match tokio::time::timeout_at(deadline, source.receive()).await {
            Err(_) => {
                tracing::warn!(
                    "no notification for {} after {timeout:?}",
                    matcher.job_name()
                );
                return Err(Error::Timeout {
                    job: matcher.job_name().to_string(),
                    waited: timeout,
                });
            }
            Ok(None) => {
                return Err(Error::StreamClosed {
                    job: matcher.job_name().to_string(),
                });
            }
            Ok(Some(Err(e))) => return Err(Error::Receive(e)),
            Ok(Some(Ok(item))) => item,
        };
        if matcher.matches(&message) {
            handler.ack();
            return Ok(message);
        }
        tracing::debug!(
            "rejecting message {} for another job, attributes={:?}",
            message.message_id,
            message.attributes
        );
        handler.nack();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::AttributeMatcher;
    use crate::testing::{FakeSource, Settled, dlp_message};
    use google_cloud_gax::error::rpc::{Code, Status};
    use pretty_assertions::assert_eq;

    const JOB: &str = "projects/p/locations/global/dlpJobs/i-mine";
    const OTHER: &str = "projects/p/locations/global/dlpJobs/i-other";

    #[tokio::test]
    async fn match_is_acked() -> anyhow::Result<()> {
        let mut source = FakeSource::new([dlp_message("m1", JOB)]);

        let matcher = AttributeMatcher::dlp_job(JOB);
        let got = wait_for_job(&mut source, &matcher, Duration::from_secs(60)).await?;
        assert_eq!(got.message_id, "m1");
        assert_eq!(source.settled(), vec![Settled::Ack("m1".into())]);
        Ok(())
    }

    #[tokio::test]
    async fn other_jobs_are_nacked() -> anyhow::Result<()> {
        let mut source = FakeSource::new([
            dlp_message("m1", OTHER),
            PubsubMessage::new().set_message_id("m2"),
            dlp_message("m3", JOB),
            dlp_message("m4", JOB),
        ]);

        let matcher = AttributeMatcher::dlp_job(JOB);
        let got = wait_for_job(&mut source, &matcher, Duration::from_secs(60)).await?;
        assert_eq!(got.message_id, "m3");
        assert_eq!(
            source.settled(),
            vec![
                Settled::Nack("m1".into()),
                Settled::Nack("m2".into()),
                Settled::Ack("m3".into()),
            ]
        );
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn timeout() {
        let mut source = FakeSource::new([dlp_message("m1", OTHER)]);

        let matcher = AttributeMatcher::dlp_job(JOB);
        let start = Instant::now();
        let err = wait_for_job(&mut source, &matcher, Duration::from_secs(600))
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        assert!(err.to_string().contains(JOB), "{err}");
        assert!(start.elapsed() >= Duration::from_secs(600));
        assert_eq!(source.settled(), vec![Settled::Nack("m1".into())]);
    }

    #[tokio::test]
    async fn stream_closed() {
        let mut source = FakeSource::new([dlp_message("m1", OTHER)]).closed();

        let matcher = AttributeMatcher::dlp_job(JOB);
        let err = wait_for_job(&mut source, &matcher, Duration::from_secs(60))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::StreamClosed { .. }), "{err:?}");
        assert!(!err.is_timeout(), "{err:?}");
        assert_eq!(source.settled(), vec![Settled::Nack("m1".into())]);
    }

    #[tokio::test]
    async fn receive_error() {
        let mut source = FakeSource::default()
            .with_error(google_cloud_gax::error::Error::service(
                Status::default().set_code(Code::Unavailable),
            ))
            .with_message(dlp_message("m1", JOB));

        let matcher = AttributeMatcher::dlp_job(JOB);
        let err = wait_for_job(&mut source, &matcher, Duration::from_secs(60))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Receive(_)), "{err:?}");
        assert!(source.settled().is_empty());
    }
}
