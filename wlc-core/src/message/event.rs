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

use crate::traits::WlcSubscriber;

/// Outcome status carried by result events and returned by the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WlcStatus {
    Ok,
    Failed,
    InvalidParam,
}

impl WlcStatus {
    pub const fn is_ok(self) -> bool {
        matches!(self, WlcStatus::Ok)
    }
}

/// A result event delivered to the registered subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WlcEvent {
    /// Outcome of an enable request.
    EnableResult(WlcStatus),
    /// The Non-Autonomous extension started.
    StartResult(WlcStatus),
    /// The controller accepted or refused a power transfer start.
    StartWptResult(WlcStatus),
    /// A power transfer cycle ended; carries the end condition byte.
    ChargingResult(u8),
}

impl WlcEvent {
    /// Invokes the subscriber method matching this event.
    pub fn deliver_to(self, subscriber: &dyn WlcSubscriber) {
        match self {
            WlcEvent::EnableResult(status) => subscriber.on_enable_result(status),
            WlcEvent::StartResult(status) => subscriber.on_start_result(status),
            WlcEvent::StartWptResult(status) => subscriber.on_start_wpt_result(status),
            WlcEvent::ChargingResult(end_condition) => subscriber.on_charging_result(end_condition),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            WlcEvent::EnableResult(_) => "NFA_WLC_ENABLE_RESULT_EVT",
            WlcEvent::StartResult(_) => "NFA_WLC_START_RESULT_EVT",
            WlcEvent::StartWptResult(_) => "NFA_WLC_START_WPT_RESULT_EVT",
            WlcEvent::ChargingResult(_) => "NFA_WLC_CHARGING_RESULT_EVT",
        }
    }
}

impl fmt::Display for WlcEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WlcEvent::EnableResult(status)
            | WlcEvent::StartResult(status)
            | WlcEvent::StartWptResult(status) => write!(f, "{} ({status:?})", self.name()),
            WlcEvent::ChargingResult(end_condition) => {
                write!(f, "{} (end condition {end_condition:#04x})", self.name())
            }
        }
    }
}
