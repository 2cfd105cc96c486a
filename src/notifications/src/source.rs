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

use google_cloud_pubsub::model::Message as PubsubMessage;
use google_cloud_pubsub::subscriber::handler::Handler;
use google_cloud_pubsub::subscriber::session::Session;
use std::future::Future;

/// Settles a received message.
pub trait Acknowledge {
    /// The message was processed, the service should not redeliver it.
    fn ack(self);

    /// The message was not processed, the service should redeliver it.
    fn nack(self);
}

/// A stream of notifications, each paired with its acknowledgement handler.
///
/// The Pub/Sub streaming pull [Session] is the production implementation.
/// Tests provide in-memory implementations.
pub trait NotificationSource {
    type Handler: Acknowledge;

    /// Returns the next message, `None` if the stream has ended.
    fn receive(
        &mut self,
    ) -> impl Future<Output = Option<google_cloud_gax::Result<(PubsubMessage, Self::Handler)>>>;
}

impl Acknowledge for Handler {
    fn ack(self) {
        Handler::ack(self)
    }

    fn nack(self) {
        Handler::nack(self)
    }
}

impl NotificationSource for Session {
    type Handler = Handler;

    fn receive(
        &mut self,
    ) -> impl Future<Output = Option<google_cloud_gax::Result<(PubsubMessage, Handler)>>> {
        self.next()
    }
}
