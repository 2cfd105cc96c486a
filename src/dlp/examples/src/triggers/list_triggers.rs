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

// [START dlp_list_triggers]
use crate::format_timestamp;
use google_cloud_gax::paginator::ItemPaginator;
use google_cloud_privacy_dlp_v2::client::DlpService;
use google_cloud_privacy_dlp_v2::model::JobTrigger;

pub async fn sample(client: &DlpService, project_id: &str) -> anyhow::Result<Vec<JobTrigger>> {
    let mut items = client
        .list_job_triggers()
        .set_parent(format!("projects/{project_id}/locations/global"))
        .by_item();
    let mut triggers = Vec::new();
    while let Some(t) = items.next().await.transpose()? {
        println!("Trigger {}", t.name);
        println!("  Created: {}", format_timestamp(t.create_time.as_ref()));
        println!("  Updated: {}", format_timestamp(t.update_time.as_ref()));
        println!("  Display Name: {:?}", t.display_name);
        println!("  Description: {:?}", t.description);
        println!("  Status: {}", t.status);
        println!("  Error Count: {}", t.errors.len());
        triggers.push(t);
    }
    Ok(triggers)
}
// [END dlp_list_triggers]
