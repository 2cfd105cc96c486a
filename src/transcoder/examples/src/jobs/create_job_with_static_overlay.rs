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

// [START transcoder_create_job_with_static_overlay]
use crate::{config::sd_config, parent};
use google_cloud_video_transcoder_v1::client::TranscoderService;
use google_cloud_video_transcoder_v1::model::{Job, Overlay, overlay};
use google_cloud_wkt::Duration;

/// Shows the image at `overlay_image_uri` (a JPEG) in the top left corner
/// for the first 10 seconds.
pub async fn sample(
    client: &TranscoderService,
    project_id: &str,
    location: &str,
    input_uri: &str,
    overlay_image_uri: &str,
    output_uri: &str,
) -> anyhow::Result<Job> {
    let overlay = Overlay::new()
        .set_image(
            overlay::Image::new()
                .set_uri(overlay_image_uri)
                .set_resolution(overlay::NormalizedCoordinate::new().set_x(1.0).set_y(0.5))
                .set_alpha(1.0),
        )
        .set_animations([
            overlay::Animation::new().set_animation_static(
                overlay::AnimationStatic::new()
                    .set_xy(overlay::NormalizedCoordinate::new().set_x(0.0).set_y(0.0))
                    .set_start_time_offset(Duration::clamp(0, 0)),
            ),
            overlay::Animation::new().set_animation_end(
                overlay::AnimationEnd::new().set_start_time_offset(Duration::clamp(10, 0)),
            ),
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
// [END transcoder_create_job_with_static_overlay]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{JOB_NAME, LOCATION, MockTranscoderService, PROJECT_ID, client, config};
    use google_cloud_gax::response::Response;

    #[tokio::test]
    async fn static_then_end() -> anyhow::Result<()> {
        let mut mock = MockTranscoderService::new();
        mock.expect_create_job()
            .withf(|r, _| {
                let Some(overlay) = config(r).and_then(|c| c.overlays.first()) else {
                    return false;
                };
                let resolution = overlay
                    .image
                    .as_ref()
                    .and_then(|i| i.resolution.as_ref())
                    .map(|c| (c.x, c.y));
                let end = overlay
                    .animations
                    .iter()
                    .filter_map(|a| a.animation_end())
                    .filter_map(|e| e.start_time_offset.as_ref())
                    .map(|d| d.seconds())
                    .collect::<Vec<_>>();
                resolution == Some((1.0, 0.5))
                    && overlay.animations.first().and_then(|a| a.animation_static()).is_some()
                    && end == [10]
            })
            .return_once(|_, _| Ok(Response::from(Job::new().set_name(JOB_NAME))));
        let client = client(mock);

        let got = sample(
            &client,
            PROJECT_ID,
            LOCATION,
            "gs://b/in.mp4",
            "gs://b/overlay.jpg",
            "gs://b/out/",
        )
        .await?;
        assert_eq!(got.name, JOB_NAME);
        Ok(())
    }
}
