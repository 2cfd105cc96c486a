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

// [START storage_lock_retention_policy]
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Bucket;

/// Locks the bucket retention policy.
///
/// This is irreversible: the policy cannot be removed and the period can
/// only be increased.
pub async fn sample(client: &StorageControl, bucket_id: &str) -> anyhow::Result<Bucket> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    let bucket = client
        .lock_bucket_retention_policy()
        .set_bucket(bucket_name(bucket_id))
        .set_if_metageneration_match(bucket.metageneration)
        .send()
        .await?;
    println!("Retention policy for bucket {bucket_id} is now locked");
    if let Some(effective) = bucket
        .retention_policy
        .as_ref()
        .and_then(|p| p.effective_time.as_ref())
    {
        println!("Retention policy effective as of {effective:?}");
    }
    Ok(bucket)
}
// [END storage_lock_retention_policy]
