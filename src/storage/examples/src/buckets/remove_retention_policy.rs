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

// [START storage_remove_retention_policy]
use crate::bucket_name;
use anyhow::bail;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Bucket;
use google_cloud_storage::model::bucket::RetentionPolicy;
use google_cloud_wkt::FieldMask;

/// Removes the bucket retention policy. Locked policies cannot be removed.
pub async fn sample(client: &StorageControl, bucket_id: &str) -> anyhow::Result<Bucket> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    if bucket.retention_policy.as_ref().is_some_and(|p| p.is_locked) {
        bail!("the retention policy for bucket {bucket_id} is locked and cannot be removed");
    }
    let metageneration = bucket.metageneration;
    let bucket = client
        .update_bucket()
        .set_bucket(bucket.set_or_clear_retention_policy(None::<RetentionPolicy>))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["retention_policy"]))
        .send()
        .await?;
    println!("Removed the retention policy for bucket {bucket_id}");
    Ok(bucket)
}
// [END storage_remove_retention_policy]
