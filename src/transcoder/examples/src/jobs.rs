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

//! Samples creating and managing transcoding jobs.

pub mod create_job_from_ad_hoc;
pub mod create_job_from_preset;
pub mod create_job_from_template;
pub mod create_job_with_animated_overlay;
pub mod create_job_with_concatenated_inputs;
pub mod create_job_with_embedded_captions;
pub mod create_job_with_periodic_images_spritesheet;
pub mod create_job_with_pubsub_notification;
pub mod create_job_with_set_number_images_spritesheet;
pub mod create_job_with_standalone_captions;
pub mod create_job_with_static_overlay;
pub mod delete_job;
pub mod get_job;
pub mod get_job_state;
pub mod list_jobs;
