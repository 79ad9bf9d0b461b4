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

//! The device-manager contract consumed by the module: a read-only view of
//! its state flags and discovery state machine, plus the power transfer
//! primitive.

use derive_new::new;

use crate::common::flag_set;
use crate::message::WptRequest;

flag_set! {
    /// Device-manager state flags.
    pub struct DmFlags: u32 {
        /// The device manager has been enabled.
        const DM_IS_ACTIVE = 0x0000_0001;
        /// Enable completion has not yet been reported to the application.
        const ENABLE_EVT_PEND = 0x0000_0010;
        /// NFC is being disabled.
        const DM_DISABLING_NFC = 0x0000_0080;
    }
}

flag_set! {
    /// Transition flags of the RF discovery state machine.
    pub struct DiscoveryFlags: u16 {
        const ENABLED = 0x0001;
        /// Stop RF discovery is pending.
        const STOPPING = 0x0002;
        /// Disable NFA is pending.
        const DISABLING = 0x0004;
        const CHECKING = 0x0008;
        const NOTIFY = 0x0010;
        /// Waiting for a response from the controller.
        const W4_RSP = 0x0020;
        /// Waiting for a notification from the controller.
        const W4_NTF = 0x0040;
    }
}

/// RF discovery states as tracked by the device manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RfDiscoveryState {
    #[default]
    Idle,
    Discovery,
    W4AllDiscoveries,
    W4HostSelect,
    /// A remote endpoint is activated in poll mode and ready for data exchange.
    PollActive,
    ListenActive,
    ListenSleep,
    LpListen,
    LpActive,
}

/// A snapshot of the discovery state machine.
#[derive(new, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiscoveryStatus {
    pub state: RfDiscoveryState,
    pub flags: DiscoveryFlags,
}

/// The device manager as seen by the wireless charging module.
///
/// State queries are cheap reads performed from the dispatch task. The power
/// transfer primitive must not block: it hands the request to the controller
/// and reports back later through [`WptRequest::reply_to`].
pub trait DeviceManager: Send + Sync + 'static {
    fn flags(&self) -> DmFlags;

    fn discovery(&self) -> DiscoveryStatus;

    fn start_wireless_power_transfer(&self, request: WptRequest);
}
