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

// [START storage_set_event_based_hold]
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Object;
use google_cloud_wkt::FieldMask;

/// Sets an event-based hold, the object cannot be deleted or replaced until
/// the hold is released.
pub async fn sample(
    client: &StorageControl,
    bucket_id: &str,
    object_name: &str,
) -> anyhow::Result<Object> {
    let object = client
        .get_object()
        .set_bucket(bucket_name(bucket_id))
        .set_object(object_name)
        .send()
        .await?;
    let metageneration = object.metageneration;
    let updated = client
        .update_object()
        .set_object(object.set_event_based_hold(true))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["event_based_hold"]))
        .send()
        .await?;
    println!("Event-based hold was set for {object_name} in bucket {bucket_id}");
    Ok(updated)
}
// [END storage_set_event_based_hold]
