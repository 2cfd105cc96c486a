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

//! Helpers shared by the sample integration tests.
//!
//! This crate is not published. The integration tests read their
//! configuration from the environment (see [runtime_config]), create
//! uniquely named resources (see [resource_names]), and log with the
//! subscriber returned by [tracing::enable_tracing].

pub mod resource_names;
pub mod runtime_config;
pub mod tracing;
