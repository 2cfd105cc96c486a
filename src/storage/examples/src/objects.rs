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

//! Samples for objects: data, metadata, ACLs, encryption keys, holds and
//! signed URLs.

pub mod add_file_owner;
pub mod copy_file;
pub mod delete_file;
pub mod download_encrypted_file;
pub mod download_file;
pub mod generate_encryption_key;
pub mod generate_signed_url_v4;
pub mod generate_upload_signed_url_v4;
pub mod get_kms_key;
pub mod get_metadata;
pub mod list_files_with_prefix;
pub mod make_public;
pub mod move_file;
pub mod print_file_acl;
pub mod print_file_acl_for_user;
pub mod release_event_based_hold;
pub mod release_temporary_hold;
pub mod remove_file_owner;
pub mod rename_file;
pub mod rotate_encryption_key;
pub mod set_event_based_hold;
pub mod set_metadata;
pub mod set_object_retention_policy;
pub mod set_temporary_hold;
pub mod upload_encrypted_file;
pub mod upload_file;
pub mod upload_with_kms_key;

use anyhow::Context;
use base64::{Engine as _, engine::general_purpose};
use google_cloud_storage::builder::storage_control::RewriteObject;
use google_cloud_storage::model::Object;
use google_cloud_storage::model_ext::KeyAes256;

/// Sends `builder` until the rewrite completes.
///
/// Large objects, or rewrites across locations and storage classes, may need
/// several calls. Each response carries a token to resume the rewrite.
pub async fn rewrite_until_done(mut builder: RewriteObject) -> anyhow::Result<Object> {
    loop {
        let resp = builder.clone().send().await?;
        if resp.done {
            return resp
                .resource
                .context("the rewrite completed without returning an object");
        }
        tracing::debug!(
            "rewrote {} of {} bytes",
            resp.total_bytes_rewritten,
            resp.object_size
        );
        builder = builder.set_rewrite_token(resp.rewrite_token);
    }
}

/// Decodes a base64 customer-supplied encryption key.
pub fn key_from_base64(encoded: &str) -> anyhow::Result<KeyAes256> {
    let bytes = general_purpose::STANDARD
        .decode(encoded)
        .context("the encryption key is not valid base64")?;
    let key = KeyAes256::new(&bytes)?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{BUCKET_NAME, MockStorageControl, RAW_KEY, control};
    use google_cloud_gax::response::Response;
    use google_cloud_storage::model::{RewriteObjectRequest, RewriteResponse};

    #[tokio::test]
    async fn rewrite_resumes() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockStorageControl::new();
        mock.expect_rewrite_object()
            .withf(|r: &RewriteObjectRequest, _| r.rewrite_token.is_empty())
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(Response::from(
                    RewriteResponse::new()
                        .set_done(false)
                        .set_rewrite_token("token-1"),
                ))
            });
        mock.expect_rewrite_object()
            .withf(|r: &RewriteObjectRequest, _| r.rewrite_token == "token-1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(Response::from(
                    RewriteResponse::new()
                        .set_done(true)
                        .set_resource(Object::new().set_name("copy")),
                ))
            });
        let client = control(mock);

        let builder = client
            .rewrite_object()
            .set_source_bucket(BUCKET_NAME)
            .set_source_object("original")
            .set_destination_bucket(BUCKET_NAME)
            .set_destination_name("copy");
        let got = rewrite_until_done(builder).await?;
        assert_eq!(got.name, "copy");
        Ok(())
    }

    #[tokio::test]
    async fn rewrite_without_object() {
        let mut mock = MockStorageControl::new();
        mock.expect_rewrite_object()
            .return_once(|_, _| Ok(Response::from(RewriteResponse::new().set_done(true))));
        let client = control(mock);

        let got = rewrite_until_done(client.rewrite_object()).await;
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn keys() -> anyhow::Result<()> {
        let encoded = general_purpose::STANDARD.encode(RAW_KEY);
        let key = key_from_base64(&encoded)?;
        assert_eq!(key.to_string(), encoded);

        assert!(key_from_base64("not base64!").is_err());
        let short = general_purpose::STANDARD.encode([0_u8; 16]);
        assert!(key_from_base64(&short).is_err());
        Ok(())
    }
}
