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

// [START storage_rename_file]
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Object;

/// Renames an object in a single, atomic, operation.
pub async fn sample(
    client: &StorageControl,
    bucket_id: &str,
    source_object: &str,
    destination_object: &str,
) -> anyhow::Result<Object> {
    let renamed = client
        .move_object()
        .set_bucket(bucket_name(bucket_id))
        .set_source_object(source_object)
        .set_destination_object(destination_object)
        .send()
        .await?;
    println!("Renamed {source_object} to {destination_object} in bucket {bucket_id}");
    Ok(renamed)
}
// [END storage_rename_file]
