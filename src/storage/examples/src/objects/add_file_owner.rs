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

// [START storage_add_file_owner]
use crate::acl::{OWNER, user_entity, with_acl_entry};
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Object;
use google_cloud_wkt::FieldMask;

pub async fn sample(
    client: &StorageControl,
    bucket_id: &str,
    object_name: &str,
    user_email: &str,
) -> anyhow::Result<Object> {
    let object = client
        .get_object()
        .set_bucket(bucket_name(bucket_id))
        .set_object(object_name)
        .send()
        .await?;
    let metageneration = object.metageneration;
    let acl = with_acl_entry(object.acl.clone(), &user_entity(user_email), OWNER);
    let updated = client
        .update_object()
        .set_object(object.set_acl(acl))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["acl"]))
        .send()
        .await?;
    println!("Added user {user_email} as an owner on {object_name} in bucket {bucket_id}");
    Ok(updated)
}
// [END storage_add_file_owner]
