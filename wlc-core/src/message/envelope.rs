/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

use std::time::SystemTime;

use static_assertions::assert_impl_all;

use crate::message::{WlcMessage, WptNotification};

/// What an [`Envelope`] carries into the dispatcher.
#[derive(Debug, Clone)]
pub enum Payload {
    /// A request submitted through the facade.
    Request(WlcMessage),
    /// A charging result posted by the device manager.
    Notification(WptNotification),
}

/// Carries a request or a charging notification through the module inbox.
///
/// Both travel the same queue, so the dispatcher sees them in arrival order.
#[derive(Debug, Clone)]
pub struct Envelope {
    pub payload: Payload,
    /// When the envelope was posted.
    pub timestamp: SystemTime,
}

impl Envelope {
    pub fn new(message: WlcMessage) -> Self {
        Self::with_payload(Payload::Request(message))
    }

    pub fn notification(notification: WptNotification) -> Self {
        Self::with_payload(Payload::Notification(notification))
    }

    fn with_payload(payload: Payload) -> Self {
        Envelope {
            payload,
            timestamp: SystemTime::now(),
        }
    }
}

// Ensures that Envelope implements the Send trait.
assert_impl_all!(Envelope: Send);
