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

use tokio::sync::mpsc::error::TrySendError;

use crate::common::ModuleId;
use crate::message::{WlcMode, WlcStatus};

/// Coarse classification of a [`WlcError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A parameter was out of range or absent. Nothing was submitted.
    Validation,
    /// The request could not be queued for dispatch.
    ResourceExhaustion,
    /// The requested capability is not implemented.
    Unsupported,
}

/// Errors reported synchronously by the wireless charging module.
///
/// Protocol precondition failures are never reported through this type; they
/// surface only as the absence of a later result event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WlcError {
    /// `enable` was called without a subscriber.
    MissingSubscriber,
    /// The requested charging mode is not supported.
    UnsupportedMode(WlcMode),
    /// A raw byte does not name a charging mode.
    UnknownMode(u8),
    /// `POWER_ADJ_REQ` lies between the increase and decrease ranges.
    InvalidPowerAdjust(u8),
    /// `WPT_DURATION_INT` exceeds its bound or has a reserved bit set.
    InvalidWptDuration(u8),
    /// The event code does not belong to this module's routing table.
    UnknownEvent(u16),
    /// The request inbox is full.
    InboxFull,
    /// The dispatcher is no longer receiving.
    ModuleStopped,
    /// A module with this identifier is already registered.
    AlreadyRegistered(ModuleId),
}

impl WlcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WlcError::MissingSubscriber
            | WlcError::UnknownMode(_)
            | WlcError::InvalidPowerAdjust(_)
            | WlcError::InvalidWptDuration(_)
            | WlcError::UnknownEvent(_)
            | WlcError::AlreadyRegistered(_) => ErrorKind::Validation,
            WlcError::UnsupportedMode(_) => ErrorKind::Unsupported,
            WlcError::InboxFull | WlcError::ModuleStopped => ErrorKind::ResourceExhaustion,
        }
    }

    /// The caller-facing status code for this rejection.
    pub fn status(&self) -> WlcStatus {
        match self {
            WlcError::UnsupportedMode(_)
            | WlcError::UnknownMode(_)
            | WlcError::InvalidPowerAdjust(_)
            | WlcError::InvalidWptDuration(_)
            | WlcError::UnknownEvent(_) => WlcStatus::InvalidParam,
            WlcError::MissingSubscriber
            | WlcError::InboxFull
            | WlcError::ModuleStopped
            | WlcError::AlreadyRegistered(_) => WlcStatus::Failed,
        }
    }
}

impl std::fmt::Display for WlcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WlcError::MissingSubscriber => write!(f, "no subscriber supplied"),
            WlcError::UnsupportedMode(mode) => {
                write!(f, "wireless charging mode {mode:?} not supported")
            }
            WlcError::UnknownMode(raw) => write!(f, "unknown wireless charging mode {raw:#04x}"),
            WlcError::InvalidPowerAdjust(raw) => write!(f, "invalid POWER_ADJ_REQ value {raw:#04x}"),
            WlcError::InvalidWptDuration(raw) => {
                write!(f, "invalid WPT_DURATION_INT value {raw:#04x}")
            }
            WlcError::UnknownEvent(code) => write!(f, "unhandled event {code:#06x}"),
            WlcError::InboxFull => write!(f, "request inbox full"),
            WlcError::ModuleStopped => write!(f, "module is not running"),
            WlcError::AlreadyRegistered(id) => write!(f, "module {id} already registered"),
        }
    }
}

impl std::error::Error for WlcError {}

/// Converts a failed non-blocking submission into a `WlcError`.
impl<T> From<TrySendError<T>> for WlcError {
    fn from(err: TrySendError<T>) -> Self {
        match err {
            TrySendError::Full(_) => WlcError::InboxFull,
            TrySendError::Closed(_) => WlcError::ModuleStopped,
        }
    }
}

/// Collapses a facade result into the status code the caller sees.
impl<T> From<Result<T, WlcError>> for WlcStatus {
    fn from(result: Result<T, WlcError>) -> Self {
        match result {
            Ok(_) => WlcStatus::Ok,
            Err(err) => err.status(),
        }
    }
}
