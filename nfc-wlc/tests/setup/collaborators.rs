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

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use nfc_wlc::prelude::*;

#[derive(Debug)]
struct DeviceState {
    flags: DmFlags,
    discovery: DiscoveryStatus,
}

/// A device manager whose state tests set directly. Power transfer requests
/// are forwarded to the receiver returned by [`FakeDeviceManager::ready`].
#[derive(Debug)]
pub struct FakeDeviceManager {
    state: Mutex<DeviceState>,
    requests: UnboundedSender<WptRequest>,
}

impl FakeDeviceManager {
    /// Active, settled and polling an activated endpoint.
    pub fn ready() -> (Arc<Self>, UnboundedReceiver<WptRequest>) {
        let (requests, receiver) = unbounded_channel();
        let device_manager = FakeDeviceManager {
            state: Mutex::new(DeviceState {
                flags: DmFlags::DM_IS_ACTIVE,
                discovery: DiscoveryStatus::new(
                    RfDiscoveryState::PollActive,
                    DiscoveryFlags::ENABLED,
                ),
            }),
            requests,
        };
        (Arc::new(device_manager), receiver)
    }

    pub fn set_flags(&self, flags: DmFlags) {
        self.state.lock().flags = flags;
    }

    pub fn set_discovery(&self, state: RfDiscoveryState, flags: DiscoveryFlags) {
        self.state.lock().discovery = DiscoveryStatus::new(state, flags);
    }
}

impl DeviceManager for FakeDeviceManager {
    fn flags(&self) -> DmFlags {
        self.state.lock().flags
    }

    fn discovery(&self) -> DiscoveryStatus {
        self.state.lock().discovery
    }

    fn start_wireless_power_transfer(&self, request: WptRequest) {
        tracing::debug!(?request, "power transfer requested");
        let _ = self.requests.send(request);
    }
}

#[derive(Debug)]
struct ReaderWriterState {
    busy: bool,
    protocol: Option<RfProtocol>,
}

#[derive(Debug)]
pub struct FakeReaderWriter {
    state: Mutex<ReaderWriterState>,
}

impl FakeReaderWriter {
    /// Idle with a Type 2 tag activated.
    pub fn ready() -> Arc<Self> {
        Arc::new(FakeReaderWriter {
            state: Mutex::new(ReaderWriterState {
                busy: false,
                protocol: Some(RfProtocol::T2T),
            }),
        })
    }

    pub fn set_busy(&self, busy: bool) {
        self.state.lock().busy = busy;
    }

    pub fn set_protocol(&self, protocol: Option<RfProtocol>) {
        self.state.lock().protocol = protocol;
    }
}

impl ReaderWriter for FakeReaderWriter {
    fn is_api_busy(&self) -> bool {
        self.state.lock().busy
    }

    fn activated_protocol(&self) -> Option<RfProtocol> {
        self.state.lock().protocol
    }
}
