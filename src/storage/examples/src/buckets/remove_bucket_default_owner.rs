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

// [START storage_remove_bucket_default_owner]
use crate::acl::{user_entity, without_acl_entry};
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_wkt::FieldMask;

/// Removes the user from the default object ACL.
///
/// Objects created before this change keep their ACLs. Returns `false` if
/// the user was not a default owner.
pub async fn sample(
    client: &StorageControl,
    bucket_id: &str,
    user_email: &str,
) -> anyhow::Result<bool> {
    let bucket = client
        .get_bucket()
        .set_name(bucket_name(bucket_id))
        .send()
        .await?;
    let before = bucket.default_object_acl.len();
    let acl = without_acl_entry(bucket.default_object_acl.clone(), &user_entity(user_email));
    if acl.len() == before {
        println!("User {user_email} is not a default owner on bucket {bucket_id}");
        return Ok(false);
    }
    let metageneration = bucket.metageneration;
    client
        .update_bucket()
        .set_bucket(bucket.set_default_object_acl(acl))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["default_object_acl"]))
        .send()
        .await?;
    println!("Removed user {user_email} from the default ACL of bucket {bucket_id}");
    Ok(true)
}
// [END storage_remove_bucket_default_owner]
