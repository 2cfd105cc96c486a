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

// [START transcoder_create_job_with_concatenated_inputs]
use crate::{config::sd_config, offset, parent};
use google_cloud_video_transcoder_v1::client::TranscoderService;
use google_cloud_video_transcoder_v1::model::{EditAtom, Input, Job};

/// A clip of one input, with offsets in (fractional) seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Clip<'a> {
    pub uri: &'a str,
    pub start_time_offset: f64,
    pub end_time_offset: f64,
}

/// Concatenates a clip of `first` with a clip of `second`.
pub async fn sample(
    client: &TranscoderService,
    project_id: &str,
    location: &str,
    first: &Clip<'_>,
    second: &Clip<'_>,
    output_uri: &str,
) -> anyhow::Result<Job> {
    let clips = [("input1", "atom1", first), ("input2", "atom2", second)];
    let inputs = clips
        .iter()
        .map(|(key, _, clip)| Input::new().set_key(*key).set_uri(clip.uri));
    let edit_list = clips.iter().map(|(input, atom, clip)| {
        EditAtom::new()
            .set_key(*atom)
            .set_inputs([*input])
            .set_start_time_offset(offset(clip.start_time_offset))
            .set_end_time_offset(offset(clip.end_time_offset))
    });
    let config = sd_config().set_inputs(inputs).set_edit_list(edit_list);
    let job = client
        .create_job()
        .set_parent(parent(project_id, location))
        .set_job(Job::new().set_output_uri(output_uri).set_config(config))
        .send()
        .await?;
    println!("Job: {}", job.name);
    Ok(job)
}
// [END transcoder_create_job_with_concatenated_inputs]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{JOB_NAME, LOCATION, MockTranscoderService, PROJECT_ID, client, config};
    use google_cloud_gax::response::Response;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn two_atoms() -> anyhow::Result<()> {
        let mut mock = MockTranscoderService::new();
        mock.expect_create_job()
            .withf(|r, _| {
                let Some(config) = config(r) else {
                    return false;
                };
                let inputs = config
                    .inputs
                    .iter()
                    .map(|i| (i.key.as_str(), i.uri.as_str()))
                    .collect::<Vec<_>>();
                let atoms = config
                    .edit_list
                    .iter()
                    .map(|a| {
                        let start = a.start_time_offset.as_ref().map(|d| (d.seconds(), d.nanos()));
                        let end = a.end_time_offset.as_ref().map(|d| (d.seconds(), d.nanos()));
                        (a.key.as_str(), a.inputs.clone(), start, end)
                    })
                    .collect::<Vec<_>>();
                inputs == [("input1", "gs://b/one.mp4"), ("input2", "gs://b/two.mp4")]
                    && atoms
                        == [
                            (
                                "atom1",
                                vec!["input1".to_string()],
                                Some((0, 0)),
                                Some((8, 100_000_000)),
                            ),
                            (
                                "atom2",
                                vec!["input2".to_string()],
                                Some((3, 500_000_000)),
                                Some((15, 0)),
                            ),
                        ]
                    && r.job.as_ref().is_some_and(|j| j.input_uri.is_empty())
            })
            .return_once(|_, _| Ok(Response::from(Job::new().set_name(JOB_NAME))));
        let client = client(mock);

        let first = Clip {
            uri: "gs://b/one.mp4",
            start_time_offset: 0.0,
            end_time_offset: 8.1,
        };
        let second = Clip {
            uri: "gs://b/two.mp4",
            start_time_offset: 3.5,
            end_time_offset: 15.0,
        };
        let got = sample(&client, PROJECT_ID, LOCATION, &first, &second, "gs://b/out/").await?;
        assert_eq!(got.name, JOB_NAME);
        Ok(())
    }
}
