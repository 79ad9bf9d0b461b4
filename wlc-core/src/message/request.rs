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
use std::sync::Arc;

use static_assertions::assert_impl_all;

use crate::common::ModuleId;
use crate::message::{PowerAdjust, WlcError, WptDuration};
use crate::traits::WlcSubscriber;

/// Wireless charging operating modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WlcMode {
    /// The host drives every WLC protocol step.
    NonAutonomous = 0,
    /// The protocol is split between host and controller.
    SemiAutonomous = 1,
    /// The controller runs the protocol on its own.
    Autonomous = 2,
}

impl WlcMode {
    /// Only the Non-Autonomous mode is implemented.
    pub const fn is_supported(self) -> bool {
        matches!(self, WlcMode::NonAutonomous)
    }
}

impl TryFrom<u8> for WlcMode {
    type Error = WlcError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(WlcMode::NonAutonomous),
            1 => Ok(WlcMode::SemiAutonomous),
            2 => Ok(WlcMode::Autonomous),
            other => Err(WlcError::UnknownMode(other)),
        }
    }
}

/// Index of each request kind in the module's routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WlcEventCode {
    ApiEnable = 0,
    ApiStart = 1,
    ApiNonAutoStartWpt = 2,
}

impl WlcEventCode {
    /// The full event code: module identifier in the high byte, table index in the low byte.
    pub const fn code(self) -> u16 {
        ModuleId::WLC.event_start() | self as u16
    }

    pub const fn name(self) -> &'static str {
        match self {
            WlcEventCode::ApiEnable => "NFA_WLC_API_ENABLE_EVT",
            WlcEventCode::ApiStart => "NFA_WLC_API_START_EVT",
            WlcEventCode::ApiNonAutoStartWpt => "NFA_WLC_API_NON_AUTO_START_WPT_EVT",
        }
    }
}

impl TryFrom<u16> for WlcEventCode {
    type Error = WlcError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        if code & 0xFF00 != ModuleId::WLC.event_start() {
            return Err(WlcError::UnknownEvent(code));
        }
        match code & 0x00FF {
            0 => Ok(WlcEventCode::ApiEnable),
            1 => Ok(WlcEventCode::ApiStart),
            2 => Ok(WlcEventCode::ApiNonAutoStartWpt),
            _ => Err(WlcError::UnknownEvent(code)),
        }
    }
}

/// A request submitted by the facade for the dispatcher.
#[derive(Clone)]
pub enum WlcMessage {
    /// Register `subscriber` and report the outcome to it.
    Enable {
        subscriber: Arc<dyn WlcSubscriber>,
    },
    /// Start the RF interface extension in `mode`.
    Start { mode: WlcMode },
    /// Forward a power transfer cycle to the device manager.
    StartWpt {
        power_adjust: PowerAdjust,
        duration: WptDuration,
    },
}

impl WlcMessage {
    pub fn event(&self) -> WlcEventCode {
        match self {
            WlcMessage::Enable { .. } => WlcEventCode::ApiEnable,
            WlcMessage::Start { .. } => WlcEventCode::ApiStart,
            WlcMessage::StartWpt { .. } => WlcEventCode::ApiNonAutoStartWpt,
        }
    }

    pub fn event_code(&self) -> u16 {
        self.event().code()
    }
}

impl fmt::Debug for WlcMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WlcMessage::Enable { .. } => f.debug_struct("Enable").finish_non_exhaustive(),
            WlcMessage::Start { mode } => f.debug_struct("Start").field("mode", mode).finish(),
            WlcMessage::StartWpt {
                power_adjust,
                duration,
            } => f
                .debug_struct("StartWpt")
                .field("power_adjust", power_adjust)
                .field("duration", duration)
                .finish(),
        }
    }
}

impl fmt::Display for WlcMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event = self.event();
        write!(f, "{} ({:#06x})", event.name(), event.code())
    }
}

assert_impl_all!(WlcMessage: Send, Sync);
