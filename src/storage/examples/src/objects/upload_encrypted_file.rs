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

// [START storage_upload_encrypted_file]
use crate::bucket_name;
use google_cloud_storage::client::Storage;
use google_cloud_storage::model::Object;
use google_cloud_storage::model_ext::KeyAes256;

/// Uploads `contents` encrypted with a customer-supplied key.
pub async fn sample(
    client: &Storage,
    bucket_id: &str,
    object_name: &str,
    contents: bytes::Bytes,
    key: KeyAes256,
) -> anyhow::Result<Object> {
    let object = client
        .write_object(bucket_name(bucket_id), object_name, contents)
        .set_key(key)
        .send_buffered()
        .await?;
    println!("Uploaded encrypted object {object_name} to bucket {bucket_id}");
    Ok(object)
}
// [END storage_upload_encrypted_file]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{BUCKET_ID, MockStorage, RAW_KEY, storage};
    use google_cloud_storage::model_ext::WriteObjectRequest;
    use google_cloud_storage::streaming_source::{BytesSource, Payload};

    #[tokio::test]
    async fn with_key() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_write_object_buffered()
            .withf(|_: &Payload<BytesSource>, r: &WriteObjectRequest, _| {
                r.params.as_ref().is_some_and(|p| {
                    p.encryption_algorithm == "AES256"
                        && p.encryption_key_bytes.as_ref() == RAW_KEY.as_slice()
                })
            })
            .return_once(|_: Payload<BytesSource>, _, _| Ok(Object::new().set_name("secret")));
        let client = storage(mock);

        let key = KeyAes256::new(&RAW_KEY)?;
        let got = sample(&client, BUCKET_ID, "secret", "top secret".into(), key).await?;
        assert_eq!(got.name, "secret");
        Ok(())
    }
}
