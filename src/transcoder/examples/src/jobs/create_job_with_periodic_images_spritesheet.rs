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

// [START transcoder_create_job_with_periodic_images_spritesheet]
use crate::{config::sd_config, parent};
use google_cloud_video_transcoder_v1::client::TranscoderService;
use google_cloud_video_transcoder_v1::model::{Job, SpriteSheet};
use google_cloud_wkt::Duration;

/// Generates a small and a large sprite sheet, with one image every 7
/// seconds.
pub async fn sample(
    client: &TranscoderService,
    project_id: &str,
    location: &str,
    input_uri: &str,
    output_uri: &str,
) -> anyhow::Result<Job> {
    let sheet = |prefix: &str, width: i32, height: i32| {
        SpriteSheet::new()
            .set_file_prefix(prefix)
            .set_sprite_width_pixels(width)
            .set_sprite_height_pixels(height)
            .set_interval(Duration::clamp(7, 0))
    };
    let config = sd_config().set_sprite_sheets([
        sheet("small-sprite-sheet", 64, 32),
        sheet("large-sprite-sheet", 128, 72),
    ]);
    let job = client
        .create_job()
        .set_parent(parent(project_id, location))
        .set_job(
            Job::new()
                .set_input_uri(input_uri)
                .set_output_uri(output_uri)
                .set_config(config),
        )
        .send()
        .await?;
    println!("Job: {}", job.name);
    Ok(job)
}
// [END transcoder_create_job_with_periodic_images_spritesheet]
