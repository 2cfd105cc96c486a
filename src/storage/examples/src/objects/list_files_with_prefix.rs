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

// [START storage_list_files_with_prefix]
use crate::bucket_name;
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_storage::client::StorageControl;

/// Lists the objects whose names start with `prefix`.
///
/// With a `delimiter`, such as `/`, the listing behaves like a directory
/// listing: objects in "subdirectories" are not returned. Use an empty
/// delimiter to list all the matching objects.
pub async fn sample(
    client: &StorageControl,
    bucket_id: &str,
    prefix: &str,
    delimiter: &str,
) -> anyhow::Result<Vec<String>> {
    let mut objects = client
        .list_objects()
        .set_parent(bucket_name(bucket_id))
        .set_prefix(prefix)
        .set_delimiter(delimiter)
        .by_item();
    let mut names = Vec::new();
    println!("Objects in bucket {bucket_id} with prefix {prefix}:");
    while let Some(object) = objects.next().await.transpose()? {
        println!("{}", object.name);
        names.push(object.name);
    }
    Ok(names)
}
// [END storage_list_files_with_prefix]
