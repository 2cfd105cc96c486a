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

// [START transcoder_create_job_with_standalone_captions]
use crate::config::{AUDIO, SD_VIDEO, aac_audio, mux, sd_video};
use crate::parent;
use google_cloud_video_transcoder_v1::client::TranscoderService;
use google_cloud_video_transcoder_v1::model::{
    EditAtom, ElementaryStream, Input, Job, JobConfig, Manifest, MuxStream, SegmentSettings,
    TextStream, manifest, text_stream,
};
use google_cloud_wkt::Duration;

/// Adds English and Spanish WebVTT subtitles as separate renditions in an
/// HLS manifest.
pub async fn sample(
    client: &TranscoderService,
    project_id: &str,
    location: &str,
    input_video_uri: &str,
    input_subtitles_en_uri: &str,
    input_subtitles_es_uri: &str,
    output_uri: &str,
) -> anyhow::Result<Job> {
    let subtitles = |key: &str, input_key: &str, language_code: &str, display_name: &str| {
        ElementaryStream::new().set_key(key).set_text_stream(
            TextStream::new()
                .set_codec("webvtt")
                .set_language_code(language_code)
                .set_display_name(display_name)
                .set_mapping([text_stream::TextMapping::new()
                    .set_atom_key("atom0")
                    .set_input_key(input_key)]),
        )
    };
    let segmented = |key: &str, stream: &str| -> MuxStream {
        mux(key, "vtt", [stream]).set_segment_settings(
            SegmentSettings::new()
                .set_segment_duration(Duration::clamp(6, 0))
                .set_individual_segments(true),
        )
    };
    let config = JobConfig::new()
        .set_inputs([
            Input::new().set_key("input0").set_uri(input_video_uri),
            Input::new()
                .set_key("subtitle_input_en")
                .set_uri(input_subtitles_en_uri),
            Input::new()
                .set_key("subtitle_input_es")
                .set_uri(input_subtitles_es_uri),
        ])
        .set_edit_list([EditAtom::new().set_key("atom0").set_inputs([
            "input0",
            "subtitle_input_en",
            "subtitle_input_es",
        ])])
        .set_elementary_streams([
            sd_video(),
            aac_audio(),
            subtitles("vtt_stream_en", "subtitle_input_en", "en-US", "English"),
            subtitles("vtt_stream_es", "subtitle_input_es", "es-ES", "Spanish"),
        ])
        .set_mux_streams([
            mux("sd-hls-fmp4", "fmp4", [SD_VIDEO]),
            mux("audio-hls-fmp4", "fmp4", [AUDIO]),
            segmented("text-vtt-en", "vtt_stream_en"),
            segmented("text-vtt-es", "vtt_stream_es"),
        ])
        .set_manifests([Manifest::new()
            .set_file_name("manifest.m3u8")
            .set_type(manifest::ManifestType::Hls)
            .set_mux_streams([
                "sd-hls-fmp4",
                "audio-hls-fmp4",
                "text-vtt-en",
                "text-vtt-es",
            ])]);
    let job = client
        .create_job()
        .set_parent(parent(project_id, location))
        .set_job(Job::new().set_output_uri(output_uri).set_config(config))
        .send()
        .await?;
    println!("Job: {}", job.name);
    Ok(job)
}
// [END transcoder_create_job_with_standalone_captions]
