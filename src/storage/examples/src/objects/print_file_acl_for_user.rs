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

// [START storage_print_file_acl_for_user]
use crate::acl::{find_acl_entry, user_entity};
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;

/// Returns the user's role on the object, if any.
pub async fn sample(
    client: &StorageControl,
    bucket_id: &str,
    object_name: &str,
    user_email: &str,
) -> anyhow::Result<Option<String>> {
    let object = client
        .get_object()
        .set_bucket(bucket_name(bucket_id))
        .set_object(object_name)
        .send()
        .await?;
    let role = find_acl_entry(&object.acl, &user_entity(user_email)).map(|e| e.role.clone());
    match &role {
        Some(role) => println!("{role}: user {user_email}"),
        None => println!("User {user_email} has no role on {object_name} in bucket {bucket_id}"),
    }
    Ok(role)
}
// [END storage_print_file_acl_for_user]
