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

//! Helpers to edit access control lists.
//!
//! Buckets, default object ACLs and objects all use lists of
//! `(entity, role)` pairs. The samples fetch the current list, edit it with
//! these helpers, and write it back under a metageneration precondition.

use google_cloud_storage::model::{BucketAccessControl, ObjectAccessControl};

/// An entry in an access control list.
pub trait AclEntry {
    fn new_entry(entity: &str, role: &str) -> Self;
    fn entity(&self) -> &str;
    fn role(&self) -> &str;
}

impl AclEntry for BucketAccessControl {
    fn new_entry(entity: &str, role: &str) -> Self {
        BucketAccessControl::new().set_entity(entity).set_role(role)
    }
    fn entity(&self) -> &str {
        &self.entity
    }
    fn role(&self) -> &str {
        &self.role
    }
}

impl AclEntry for ObjectAccessControl {
    fn new_entry(entity: &str, role: &str) -> Self {
        ObjectAccessControl::new().set_entity(entity).set_role(role)
    }
    fn entity(&self) -> &str {
        &self.entity
    }
    fn role(&self) -> &str {
        &self.role
    }
}

pub const OWNER: &str = "OWNER";
pub const READER: &str = "READER";
pub const ALL_USERS: &str = "allUsers";

/// The ACL entity for a user, e.g. `user-alice@example.com`.
pub fn user_entity(email: &str) -> String {
    format!("user-{email}")
}

/// Grants `role` to `entity`, replacing any role the entity already had.
pub fn with_acl_entry<T: AclEntry>(acl: Vec<T>, entity: &str, role: &str) -> Vec<T> {
    let mut acl = without_acl_entry(acl, entity);
    acl.push(T::new_entry(entity, role));
    acl
}

/// Removes every entry for `entity`.
pub fn without_acl_entry<T: AclEntry>(acl: Vec<T>, entity: &str) -> Vec<T> {
    acl.into_iter().filter(|e| e.entity() != entity).collect()
}

/// Returns the entry for `entity`, if any.
pub fn find_acl_entry<'a, T: AclEntry>(acl: &'a [T], entity: &str) -> Option<&'a T> {
    acl.iter().find(|e| e.entity() == entity)
}
