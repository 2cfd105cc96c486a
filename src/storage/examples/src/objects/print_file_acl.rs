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

// [START storage_print_file_acl]
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::ObjectAccessControl;

pub async fn sample(
    client: &StorageControl,
    bucket_id: &str,
    object_name: &str,
) -> anyhow::Result<Vec<ObjectAccessControl>> {
    let object = client
        .get_object()
        .set_bucket(bucket_name(bucket_id))
        .set_object(object_name)
        .send()
        .await?;
    for entry in &object.acl {
        println!("{}: {}", entry.role, entry.entity);
    }
    Ok(object.acl)
}
// [END storage_print_file_acl]
