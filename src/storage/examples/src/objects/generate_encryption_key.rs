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

// [START storage_generate_encryption_key]
use google_cloud_storage::model_ext::KeyAes256;
use rand::RngCore;

/// Generates a random 256 bit AES key for customer-supplied encryption.
///
/// Keep the key safe: objects encrypted with it cannot be read without it.
pub fn sample() -> anyhow::Result<KeyAes256> {
    let mut raw = [0_u8; 32];
    rand::rng().fill_bytes(&mut raw);
    let key = KeyAes256::new(&raw)?;
    println!("Sample encryption key: {key}");
    Ok(key)
}
// [END storage_generate_encryption_key]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::key_from_base64;

    #[test]
    fn random() -> anyhow::Result<()> {
        let a = sample()?.to_string();
        let b = sample()?.to_string();
        assert_ne!(a, b);
        // The printed form can be read back.
        assert_eq!(key_from_base64(&a)?.to_string(), a);
        Ok(())
    }
}
