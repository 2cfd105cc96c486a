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

//! Building blocks for the job configurations used in the samples.

use google_cloud_video_transcoder_v1::model::{
    AudioStream, ElementaryStream, JobConfig, MuxStream, VideoStream, video_stream,
};

pub const SD_VIDEO: &str = "video_stream0";
pub const HD_VIDEO: &str = "video_stream1";
pub const AUDIO: &str = "audio_stream0";

/// An H.264 video stream at 60 frames per second.
pub fn h264(key: &str, width_pixels: i32, height_pixels: i32, bitrate_bps: i32) -> ElementaryStream {
    ElementaryStream::new().set_key(key).set_video_stream(
        VideoStream::new().set_h264(
            video_stream::H264CodecSettings::new()
                .set_width_pixels(width_pixels)
                .set_height_pixels(height_pixels)
                .set_frame_rate(60.0)
                .set_bitrate_bps(bitrate_bps),
        ),
    )
}

/// 640x360 at 550 kbps.
pub fn sd_video() -> ElementaryStream {
    h264(SD_VIDEO, 640, 360, 550_000)
}

/// 1280x720 at 2.5 Mbps.
pub fn hd_video() -> ElementaryStream {
    h264(HD_VIDEO, 1280, 720, 2_500_000)
}

/// AAC audio at 64 kbps.
pub fn aac_audio() -> ElementaryStream {
    ElementaryStream::new().set_key(AUDIO).set_audio_stream(
        AudioStream::new()
            .set_codec("aac")
            .set_bitrate_bps(64_000),
    )
}

pub fn mux<I, S>(key: &str, container: &str, elementary_streams: I) -> MuxStream
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    MuxStream::new()
        .set_key(key)
        .set_container(container)
        .set_elementary_streams(elementary_streams)
}

/// A single SD rendition, muxed into an `sd` MP4 file.
pub fn sd_config() -> JobConfig {
    JobConfig::new()
        .set_elementary_streams([sd_video(), aac_audio()])
        .set_mux_streams([mux("sd", "mp4", [SD_VIDEO, AUDIO])])
}

/// SD and HD renditions, muxed into `sd` and `hd` MP4 files.
pub fn ad_hoc_config() -> JobConfig {
    JobConfig::new()
        .set_elementary_streams([sd_video(), hd_video(), aac_audio()])
        .set_mux_streams([
            mux("sd", "mp4", [SD_VIDEO, AUDIO]),
            mux("hd", "mp4", [HD_VIDEO, AUDIO]),
        ])
}
