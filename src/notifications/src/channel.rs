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

//! Provision the topic and subscription used to learn about job completion.

use crate::{Error, Result};
use google_cloud_gax::error::rpc::Code;
use google_cloud_pubsub::client::{Subscriber, SubscriptionAdmin, TopicAdmin};
use google_cloud_pubsub::subscriber::session::Session;

/// The fully qualified names of a topic and a subscription attached to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Channel {
    pub topic: String,
    pub subscription: String,
}

impl Channel {
    pub fn new(project_id: &str, topic_id: &str, subscription_id: &str) -> Self {
        Self {
            topic: topic_name(project_id, topic_id),
            subscription: subscription_name(project_id, subscription_id),
        }
    }
}

pub fn topic_name(project_id: &str, topic_id: &str) -> String {
    format!("projects/{project_id}/topics/{topic_id}")
}

pub fn subscription_name(project_id: &str, subscription_id: &str) -> String {
    format!("projects/{project_id}/subscriptions/{subscription_id}")
}

/// Creates the topic and subscription unless they already exist.
///
/// Both resources are created with default settings. If either one already
/// exists it is used as-is, even if it was created with a different
/// configuration.
pub async fn ensure_channel(
    topics: &TopicAdmin,
    subscriptions: &SubscriptionAdmin,
    project_id: &str,
    topic_id: &str,
    subscription_id: &str,
) -> Result<Channel> {
    let channel = Channel::new(project_id, topic_id, subscription_id);

    match topics.create_topic().set_name(&channel.topic).send().await {
        Ok(topic) => tracing::info!("created topic {}", topic.name),
        Err(e) if already_exists(&e) => tracing::debug!("topic {} already exists", channel.topic),
        Err(source) => {
            return Err(Error::Setup {
                name: channel.topic,
                source,
            });
        }
    }

    match subscriptions
        .create_subscription()
        .set_name(&channel.subscription)
        .set_topic(&channel.topic)
        .send()
        .await
    {
        Ok(subscription) => tracing::info!("created subscription {}", subscription.name),
        Err(e) if already_exists(&e) => {
            tracing::debug!("subscription {} already exists", channel.subscription)
        }
        Err(source) => {
            return Err(Error::Setup {
                name: channel.subscription,
                source,
            });
        }
    }

    Ok(channel)
}

/// Creates (if needed) the topic and subscription for job notifications.
///
/// The Pub/Sub admin clients use the default configuration. Call
/// [ensure_channel] to use other clients.
pub async fn notification_channel(
    project_id: &str,
    topic_id: &str,
    subscription_id: &str,
) -> Result<Channel> {
    let topics = TopicAdmin::builder().build().await.map_err(Error::Client)?;
    let subscriptions = SubscriptionAdmin::builder()
        .build()
        .await
        .map_err(Error::Client)?;
    ensure_channel(&topics, &subscriptions, project_id, topic_id, subscription_id).await
}

/// Starts receiving messages from the channel's subscription.
pub fn subscribe(subscriber: &Subscriber, channel: &Channel) -> Session {
    subscriber
        .streaming_pull(channel.subscription.clone())
        .start()
}

fn already_exists(e: &google_cloud_gax::error::Error) -> bool {
    e.status().map(|s| s.code) == Some(Code::AlreadyExists)
}

#[cfg(test)]
mod tests {
    use super::*;
    use google_cloud_gax as gax;
    use google_cloud_pubsub as pubsub;
    use gax::error::rpc::Status;

    mockall::mock! {
        #[derive(Debug)]
        TopicAdmin {}
        impl pubsub::stub::TopicAdmin for TopicAdmin {
            async fn create_topic(&self, req: pubsub::model::Topic, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<pubsub::model::Topic>>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        SubscriptionAdmin {}
        impl pubsub::stub::SubscriptionAdmin for SubscriptionAdmin {
            async fn create_subscription(&self, req: pubsub::model::Subscription, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<pubsub::model::Subscription>>;
        }
    }

    fn status(code: Code) -> gax::error::Error {
        gax::error::Error::service(Status::default().set_code(code).set_message("test-only"))
    }

    #[test]
    fn names() {
        let got = Channel::new("my-project", "my-topic", "my-sub");
        assert_eq!(got.topic, "projects/my-project/topics/my-topic");
        assert_eq!(got.subscription, "projects/my-project/subscriptions/my-sub");
    }

    #[tokio::test]
    async fn creates_both() -> anyhow::Result<()> {
        let mut topics = MockTopicAdmin::new();
        topics
            .expect_create_topic()
            .withf(|r, _| r.name == "projects/p/topics/t")
            .return_once(|r, _| Ok(gax::response::Response::from(r)));
        let mut subscriptions = MockSubscriptionAdmin::new();
        subscriptions
            .expect_create_subscription()
            .withf(|r, _| r.name == "projects/p/subscriptions/s" && r.topic == "projects/p/topics/t")
            .return_once(|r, _| Ok(gax::response::Response::from(r)));

        let topics = TopicAdmin::from_stub(topics);
        let subscriptions = SubscriptionAdmin::from_stub(subscriptions);
        let got = ensure_channel(&topics, &subscriptions, "p", "t", "s").await?;
        assert_eq!(got, Channel::new("p", "t", "s"));
        Ok(())
    }

    #[tokio::test]
    async fn tolerates_existing() -> anyhow::Result<()> {
        let mut topics = MockTopicAdmin::new();
        topics
            .expect_create_topic()
            .return_once(|_, _| Err(status(Code::AlreadyExists)));
        let mut subscriptions = MockSubscriptionAdmin::new();
        subscriptions
            .expect_create_subscription()
            .return_once(|_, _| Err(status(Code::AlreadyExists)));

        let topics = TopicAdmin::from_stub(topics);
        let subscriptions = SubscriptionAdmin::from_stub(subscriptions);
        let got = ensure_channel(&topics, &subscriptions, "p", "t", "s").await?;
        assert_eq!(got.subscription, "projects/p/subscriptions/s");
        Ok(())
    }

    #[tokio::test]
    async fn topic_error_is_fatal() {
        let mut topics = MockTopicAdmin::new();
        topics
            .expect_create_topic()
            .return_once(|_, _| Err(status(Code::PermissionDenied)));
        let mut subscriptions = MockSubscriptionAdmin::new();
        subscriptions.expect_create_subscription().never();

        let topics = TopicAdmin::from_stub(topics);
        let subscriptions = SubscriptionAdmin::from_stub(subscriptions);
        let err = ensure_channel(&topics, &subscriptions, "p", "t", "s")
            .await
            .unwrap_err();
        assert!(err.is_setup(), "{err:?}");
        assert!(err.to_string().contains("projects/p/topics/t"), "{err}");
    }

    #[tokio::test]
    async fn subscription_error_is_fatal() {
        let mut topics = MockTopicAdmin::new();
        topics
            .expect_create_topic()
            .return_once(|r, _| Ok(gax::response::Response::from(r)));
        let mut subscriptions = MockSubscriptionAdmin::new();
        subscriptions
            .expect_create_subscription()
            .return_once(|_, _| Err(status(Code::NotFound)));

        let topics = TopicAdmin::from_stub(topics);
        let subscriptions = SubscriptionAdmin::from_stub(subscriptions);
        let err = ensure_channel(&topics, &subscriptions, "p", "t", "s")
            .await
            .unwrap_err();
        assert!(err.is_setup(), "{err:?}");
        assert!(
            err.to_string().contains("projects/p/subscriptions/s"),
            "{err}"
        );
    }
}
