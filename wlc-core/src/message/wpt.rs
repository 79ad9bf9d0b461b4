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

//! Wireless power transfer parameters and the request/notification pair
//! exchanged with the device manager.

use derive_new::new;

use crate::common::ChargingNotifier;
use crate::message::{WlcError, WlcEvent, WlcStatus};

/// Upper bound of the power-increase range of `POWER_ADJ_REQ`.
pub const POWER_ADJ_REQ_INC_MAX: u8 = 0x14;
/// Lower bound of the power-decrease range of `POWER_ADJ_REQ`.
pub const POWER_ADJ_REQ_DEC_MIN: u8 = 0xF6;
/// Largest valid `WPT_DURATION_INT`.
pub const WPT_DURATION_INT_MAX: u8 = 0x13;
/// Bits 6 and 7 of `WPT_DURATION_INT` are reserved and must be zero.
pub const WPT_DURATION_INT_MASK: u8 = 0xC0;

/// Which way a `POWER_ADJ_REQ` asks the listener to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerDirection {
    Increase,
    Decrease,
}

/// A validated `POWER_ADJ_REQ`: `0x00..=0x14` or `0xF6..=0xFF`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PowerAdjust(u8);

impl PowerAdjust {
    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn direction(self) -> PowerDirection {
        if self.0 <= POWER_ADJ_REQ_INC_MAX {
            PowerDirection::Increase
        } else {
            PowerDirection::Decrease
        }
    }
}

impl TryFrom<u8> for PowerAdjust {
    type Error = WlcError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if raw > POWER_ADJ_REQ_INC_MAX && raw < POWER_ADJ_REQ_DEC_MIN {
            return Err(WlcError::InvalidPowerAdjust(raw));
        }
        Ok(Self(raw))
    }
}

/// A validated `WPT_DURATION_INT`: at most `0x13`, reserved bits clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WptDuration(u8);

impl WptDuration {
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for WptDuration {
    type Error = WlcError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        if raw > WPT_DURATION_INT_MAX || raw & WPT_DURATION_INT_MASK != 0 {
            return Err(WlcError::InvalidWptDuration(raw));
        }
        Ok(Self(raw))
    }
}

/// A power transfer request handed to the device manager.
///
/// `reply_to` is where the device manager reports the controller's start
/// response and, once the cycle ends, the charging end condition.
#[derive(new, Debug, Clone)]
pub struct WptRequest {
    power_adjust: PowerAdjust,
    duration: WptDuration,
    reply_to: ChargingNotifier,
}

impl WptRequest {
    pub fn power_adjust(&self) -> PowerAdjust {
        self.power_adjust
    }

    pub fn duration(&self) -> WptDuration {
        self.duration
    }

    pub fn reply_to(&self) -> &ChargingNotifier {
        &self.reply_to
    }
}

/// Notifications posted by the device manager for the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WptNotification {
    /// The controller answered the power transfer start.
    Started(WlcStatus),
    /// The power transfer cycle ended with this end condition.
    Ended(u8),
}

impl From<WptNotification> for WlcEvent {
    fn from(notification: WptNotification) -> Self {
        match notification {
            WptNotification::Started(status) => WlcEvent::StartWptResult(status),
            WptNotification::Ended(end_condition) => WlcEvent::ChargingResult(end_condition),
        }
    }
}
