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

// [START transcoder_create_job_with_animated_overlay]
use crate::{config::sd_config, parent};
use google_cloud_video_transcoder_v1::client::TranscoderService;
use google_cloud_video_transcoder_v1::model::{Job, Overlay, overlay};
use google_cloud_wkt::Duration;

/// Fades the image at `overlay_image_uri` in between 5s and 10s, and out
/// between 12s and 15s, centered on the video.
pub async fn sample(
    client: &TranscoderService,
    project_id: &str,
    location: &str,
    input_uri: &str,
    overlay_image_uri: &str,
    output_uri: &str,
) -> anyhow::Result<Job> {
    let fade = |fade_type: overlay::FadeType, start: i64, end: i64| {
        overlay::Animation::new().set_animation_fade(
            overlay::AnimationFade::new()
                .set_fade_type(fade_type)
                .set_xy(overlay::NormalizedCoordinate::new().set_x(0.5).set_y(0.5))
                .set_start_time_offset(Duration::clamp(start, 0))
                .set_end_time_offset(Duration::clamp(end, 0)),
        )
    };
    let overlay = Overlay::new()
        .set_image(
            overlay::Image::new()
                .set_uri(overlay_image_uri)
                .set_resolution(overlay::NormalizedCoordinate::new().set_x(0.0).set_y(0.0))
                .set_alpha(1.0),
        )
        .set_animations([
            fade(overlay::FadeType::FadeIn, 5, 10),
            fade(overlay::FadeType::FadeOut, 12, 15),
        ]);
    let job = client
        .create_job()
        .set_parent(parent(project_id, location))
        .set_job(
            Job::new()
                .set_input_uri(input_uri)
                .set_output_uri(output_uri)
                .set_config(sd_config().set_overlays([overlay])),
        )
        .send()
        .await?;
    println!("Job: {}", job.name);
    Ok(job)
}
// [END transcoder_create_job_with_animated_overlay]
