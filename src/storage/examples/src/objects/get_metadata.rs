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

// [START storage_get_metadata]
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Object;

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
    println!("Blob: {}", object.name);
    println!("Bucket: {}", object.bucket);
    println!("Storage class: {}", object.storage_class);
    println!("Size: {}", object.size);
    println!("Generation: {}", object.generation);
    println!("Metageneration: {}", object.metageneration);
    println!("Etag: {}", object.etag);
    println!("Content type: {}", object.content_type);
    println!("Cache control: {}", object.cache_control);
    println!("KMS key name: {}", object.kms_key);
    println!("Temporary hold: {}", object.temporary_hold);
    println!(
        "Event based hold: {}",
        object.event_based_hold.unwrap_or_default()
    );
    if let Some(created) = &object.create_time {
        println!("Created: {created:?}");
    }
    for (key, value) in &object.metadata {
        println!("Metadata: {key}={value}");
    }
    Ok(object)
}
// [END storage_get_metadata]
