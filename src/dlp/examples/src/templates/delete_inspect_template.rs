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

// [START dlp_delete_inspect_template]
use google_cloud_privacy_dlp_v2::client::DlpService;

pub async fn sample(client: &DlpService, template_name: &str) -> anyhow::Result<()> {
    client
        .delete_inspect_template()
        .set_name(template_name)
        .send()
        .await?;
    println!("Successfully deleted inspect template {template_name}");
    Ok(())
}
// [END dlp_delete_inspect_template]
