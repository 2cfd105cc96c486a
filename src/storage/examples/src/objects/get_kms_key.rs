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

// [START storage_get_kms_key]
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;

/// Returns the Cloud KMS key protecting the object, empty if there is none.
pub async fn sample(
    client: &StorageControl,
    bucket_id: &str,
    object_name: &str,
) -> anyhow::Result<String> {
    let object = client
        .get_object()
        .set_bucket(bucket_name(bucket_id))
        .set_object(object_name)
        .send()
        .await?;
    println!("The KMS key for {object_name} in bucket {bucket_id} is: {}", object.kms_key);
    Ok(object.kms_key)
}
// [END storage_get_kms_key]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{BUCKET_ID, MockStorageControl, control};
    use google_cloud_gax::response::Response;
    use google_cloud_storage::model::Object;

    #[tokio::test]
    async fn kms_key() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_get_object().return_once(|_, _| {
            Ok(Response::from(
                Object::new().set_kms_key("projects/p/locations/us/keyRings/r/cryptoKeys/k"),
            ))
        });
        let client = control(mock);

        let got = sample(&client, BUCKET_ID, "kms.txt").await?;
        assert_eq!(got, "projects/p/locations/us/keyRings/r/cryptoKeys/k");
        Ok(())
    }
}
