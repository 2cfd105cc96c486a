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

// [START transcoder_create_job_with_embedded_captions]
use crate::config::{AUDIO, SD_VIDEO, aac_audio, mux, sd_video};
use crate::parent;
use google_cloud_video_transcoder_v1::client::TranscoderService;
use google_cloud_video_transcoder_v1::model::{
    EditAtom, ElementaryStream, Input, Job, JobConfig, Manifest, TextStream, manifest,
    text_stream,
};

/// Embeds the CEA-608 captions at `input_captions_uri` in HLS and DASH
/// outputs.
pub async fn sample(
    client: &TranscoderService,
    project_id: &str,
    location: &str,
    input_video_uri: &str,
    input_captions_uri: &str,
    output_uri: &str,
) -> anyhow::Result<Job> {
    // The text stream maps the caption input through the edit atom.
    let captions = ElementaryStream::new().set_key("cea_stream0").set_text_stream(
        TextStream::new()
            .set_codec("cea608")
            .set_mapping([text_stream::TextMapping::new()
                .set_atom_key("atom0")
                .set_input_key("caption_input0")
                .set_input_track(0)])
            .set_language_code("en-US")
            .set_display_name("English"),
    );
    let config = JobConfig::new()
        .set_inputs([
            Input::new().set_key("input0").set_uri(input_video_uri),
            Input::new().set_key("caption_input0").set_uri(input_captions_uri),
        ])
        .set_edit_list([EditAtom::new()
            .set_key("atom0")
            .set_inputs(["input0", "caption_input0"])])
        .set_elementary_streams([sd_video(), aac_audio(), captions])
        .set_mux_streams([
            mux("sd-hls", "ts", [SD_VIDEO, AUDIO]),
            mux("sd-dash", "fmp4", [SD_VIDEO]),
            mux("audio-dash", "fmp4", [AUDIO]),
        ])
        .set_manifests([
            Manifest::new()
                .set_file_name("manifest.m3u8")
                .set_type(manifest::ManifestType::Hls)
                .set_mux_streams(["sd-hls"]),
            Manifest::new()
                .set_file_name("manifest.mpd")
                .set_type(manifest::ManifestType::Dash)
                .set_mux_streams(["sd-dash", "audio-dash"]),
        ]);
    let job = client
        .create_job()
        .set_parent(parent(project_id, location))
        .set_job(Job::new().set_output_uri(output_uri).set_config(config))
        .send()
        .await?;
    println!("Job: {}", job.name);
    Ok(job)
}
// [END transcoder_create_job_with_embedded_captions]
