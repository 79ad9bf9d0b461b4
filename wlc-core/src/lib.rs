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

#![forbid(unsafe_code)]
//! NFC Wireless Charging Core
//!
//! The control plane of the NFC wireless charging (WLC) lifecycle: a facade
//! that validates and queues requests, a single dispatcher that gates them
//! against device state, and a subscriber that receives the results.

/// Handles, the module registry, configuration and shared aliases.
pub(crate) mod common;

pub(crate) mod message;
pub(crate) mod module;
/// The subscriber and collaborator contracts.
pub(crate) mod traits;

/// Prelude module for convenient imports.
///
/// Re-exports everything a caller or collaborator needs, as well as the
/// `async_trait` crate used by [`SysModule`](crate::traits::SysModule).
pub mod prelude {
    pub use async_trait;

    pub use crate::common::{
        ChargingNotifier, LimitsConfig, ModuleId, NfaSystem, SystemRuntime, TimeoutConfig,
        WlcConfig, WlcHandle, CONFIG,
    };
    pub use crate::message::{
        ErrorKind, PowerAdjust, PowerDirection, WlcError, WlcEvent, WlcEventCode, WlcMessage,
        WlcMode, WlcStatus, WptDuration, WptNotification, WptRequest, POWER_ADJ_REQ_DEC_MIN,
        POWER_ADJ_REQ_INC_MAX, WPT_DURATION_INT_MASK, WPT_DURATION_INT_MAX,
    };
    pub use crate::module::{
        ContextSnapshot, Idle, StartRejection, Started, WlcContext, WlcFlags, WlcModule,
    };
    pub use crate::traits::{
        DeviceManager, DiscoveryFlags, DiscoveryStatus, DmFlags, NoopSubscriber, ReaderWriter,
        RfDiscoveryState, RfProtocol, SysModule, WlcSubscriber,
    };
}
