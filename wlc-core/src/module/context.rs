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

use std::fmt;
use std::sync::{Arc, Weak};

use tracing::{debug, trace};

use crate::common::flag_set;
use crate::message::{WlcEvent, WlcMode};
use crate::traits::{NoopSubscriber, WlcSubscriber};

flag_set! {
    /// Wireless charging module flags.
    pub struct WlcFlags: u32 {
        /// The Non-Autonomous RF interface extension is running.
        const NON_AUTO_MODE_ENABLED = 0x0000_0001;
        /// Waiting for the end of a power transfer phase.
        const WPT_NTF_PENDING = 0x0000_0002;
    }
}

/// The single-slot subscriber registration, which doubles as the notifier.
///
/// Holds a weak reference: the caller owns the subscriber. An empty slot points
/// at a [`NoopSubscriber`] that can never be upgraded, so delivery without a
/// registration is a logged drop rather than a special case.
pub(crate) struct SubscriberSlot(Weak<dyn WlcSubscriber>);

impl SubscriberSlot {
    pub(crate) fn replace(&mut self, subscriber: &Arc<dyn WlcSubscriber>) {
        self.0 = Arc::downgrade(subscriber);
    }

    pub(crate) fn is_registered(&self) -> bool {
        self.0.strong_count() > 0
    }

    /// Delivers `event` synchronously; returns `false` if it was dropped.
    pub(crate) fn deliver(&self, event: WlcEvent) -> bool {
        match self.0.upgrade() {
            Some(subscriber) => {
                trace!(%event, "notifying subscriber");
                event.deliver_to(subscriber.as_ref());
                true
            }
            None => {
                debug!(%event, "no subscriber registered, event dropped");
                false
            }
        }
    }
}

impl Default for SubscriberSlot {
    fn default() -> Self {
        let empty: Weak<dyn WlcSubscriber> = Weak::<NoopSubscriber>::new();
        SubscriberSlot(empty)
    }
}

impl fmt::Debug for SubscriberSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberSlot")
            .field("registered", &self.is_registered())
            .finish()
    }
}

/// Persistent state of the wireless charging module.
///
/// Owned by the dispatch task and only written by action functions running
/// there. Zero-initialised when the module is created and never reset.
#[derive(Debug, Default)]
pub struct WlcContext {
    pub(crate) flags: WlcFlags,
    pub(crate) mode: Option<WlcMode>,
    pub(crate) subscriber: SubscriberSlot,
}

impl WlcContext {
    pub fn flags(&self) -> WlcFlags {
        self.flags
    }

    /// The selected mode; only meaningful while the extension is running.
    pub fn mode(&self) -> Option<WlcMode> {
        if self.flags.contains(WlcFlags::NON_AUTO_MODE_ENABLED) {
            self.mode
        } else {
            None
        }
    }

    pub fn has_subscriber(&self) -> bool {
        self.subscriber.is_registered()
    }

    /// A detached copy for observers outside the dispatch task.
    pub fn snapshot(&self) -> ContextSnapshot {
        ContextSnapshot {
            flags: self.flags,
            mode: self.mode(),
            subscriber_registered: self.has_subscriber(),
        }
    }
}

/// A point-in-time copy of [`WlcContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContextSnapshot {
    pub flags: WlcFlags,
    pub mode: Option<WlcMode>,
    pub subscriber_registered: bool,
}
