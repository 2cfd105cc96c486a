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

// [START storage_get_retention_policy]
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::bucket::RetentionPolicy;

/// Returns the bucket retention policy, `None` if the bucket has none.
pub async fn sample(
    client: &StorageControl,
    bucket_id: &str,
) -> anyhow::Result<Option<RetentionPolicy>> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    match &bucket.retention_policy {
        None => println!("Bucket {bucket_id} has no retention policy"),
        Some(policy) => {
            let seconds = policy
                .retention_duration
                .as_ref()
                .map(|d| d.seconds())
                .unwrap_or_default();
            println!("Retention period: {seconds} seconds");
            println!("Locked: {}", policy.is_locked);
            if let Some(effective) = &policy.effective_time {
                println!("Effective time: {effective:?}");
            }
        }
    }
    Ok(bucket.retention_policy)
}
// [END storage_get_retention_policy]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{BUCKET_ID, MockStorageControl, control};
    use google_cloud_gax::response::Response;
    use google_cloud_storage::model::Bucket;
    use google_cloud_wkt::Duration;

    #[tokio::test]
    async fn policy() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_get_bucket().return_once(|_, _| {
            Ok(Response::from(Bucket::new().set_retention_policy(
                RetentionPolicy::new().set_retention_duration(Duration::clamp(600, 0)),
            )))
        });
        let client = control(mock);

        let got = sample(&client, BUCKET_ID).await?;
        let seconds = got
            .and_then(|p| p.retention_duration)
            .map(|d| d.seconds());
        assert_eq!(seconds, Some(600));
        Ok(())
    }

    #[tokio::test]
    async fn none() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_get_bucket()
            .return_once(|_, _| Ok(Response::from(Bucket::new())));
        let client = control(mock);

        let got = sample(&client, BUCKET_ID).await?;
        assert!(got.is_none(), "{got:?}");
        Ok(())
    }
}
