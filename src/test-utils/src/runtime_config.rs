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

use anyhow::{Context, Result};

const PROJECT_VAR: &str = "GOOGLE_CLOUD_PROJECT";
const ACCOUNT_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_SERVICE_ACCOUNT";
const REGION_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_REGION";
const BUCKET_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_BUCKET";
const KMS_KEY_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_KMS_KEY";
const WRAPPED_KEY_VAR: &str = "GOOGLE_CLOUD_RUST_TEST_WRAPPED_KEY";
const DEFAULT_REGION: &str = "us-central1";

pub fn project_id() -> Result<String> {
    required(PROJECT_VAR)
}

pub fn test_service_account() -> Result<String> {
    required(ACCOUNT_VAR)
}

pub fn region_id() -> String {
    std::env::var(REGION_VAR)
        .ok()
        .unwrap_or(DEFAULT_REGION.to_string())
}

/// A bucket with the input media and data files used by the samples.
pub fn test_bucket() -> Result<String> {
    required(BUCKET_VAR)
}

/// The full name of a Cloud KMS key,
/// `projects/{p}/locations/{l}/keyRings/{r}/cryptoKeys/{k}`.
pub fn kms_key_name() -> Result<String> {
    required(KMS_KEY_VAR)
}

/// A base64-encoded data key wrapped by [kms_key_name].
pub fn wrapped_key() -> Result<String> {
    required(WRAPPED_KEY_VAR)
}

fn required(name: &str) -> Result<String> {
    std::env::var(name).with_context(|| format!("{name} must be set"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use serial_test::serial;
    use test_case::test_case;

    #[test_case(PROJECT_VAR, project_id)]
    #[test_case(ACCOUNT_VAR, test_service_account)]
    #[test_case(BUCKET_VAR, test_bucket)]
    #[test_case(KMS_KEY_VAR, kms_key_name)]
    #[test_case(WRAPPED_KEY_VAR, wrapped_key)]
    #[serial]
    fn required_vars(var: &str, getter: fn() -> Result<String>) {
        let _env = ScopedEnv::remove(var);
        let got = getter();
        assert!(got.is_err(), "{got:?}");
        let msg = format!("{:?}", got.unwrap_err());
        assert!(msg.contains(var), "{msg}");

        let _env = ScopedEnv::set(var, "abc");
        let got = getter();
        assert!(got.as_ref().is_ok_and(|v| v == "abc"), "{got:?}");
    }

    #[serial]
    #[test]
    fn region() {
        let _env = ScopedEnv::remove(REGION_VAR);
        let got = region_id();
        assert_eq!(got, DEFAULT_REGION);
        let _env = ScopedEnv::set(REGION_VAR, "abc");
        let got = region_id();
        assert_eq!(got, "abc");
    }
}
