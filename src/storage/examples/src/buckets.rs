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

//! Samples for bucket ACLs, retention policies and default holds.

pub mod add_bucket_default_owner;
pub mod add_bucket_owner;
pub mod disable_default_event_based_hold;
pub mod enable_default_event_based_hold;
pub mod get_retention_policy;
pub mod lock_retention_policy;
pub mod print_bucket_acl;
pub mod print_bucket_acl_for_user;
pub mod remove_bucket_default_owner;
pub mod remove_bucket_owner;
pub mod remove_retention_policy;
pub mod set_retention_policy;
