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

//! Action functions, one per request kind. Each runs to completion on the
//! dispatch task before the next request is drained.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, error, instrument, trace};

use crate::common::ChargingNotifier;
use crate::message::{PowerAdjust, WlcEvent, WlcMode, WlcStatus, WptDuration, WptRequest};
use crate::module::{WlcContext, WlcFlags};
use crate::traits::{
    DeviceManager, DiscoveryFlags, DmFlags, ReaderWriter, RfDiscoveryState, RfProtocol,
    WlcSubscriber,
};

/// Discovery transitions during which the extension must not start.
const DISCOVERY_BUSY: DiscoveryFlags = DiscoveryFlags::W4_RSP
    .union(DiscoveryFlags::W4_NTF)
    .union(DiscoveryFlags::STOPPING)
    .union(DiscoveryFlags::DISABLING);

/// Why a start request left the context untouched. Never reported to the subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartRejection {
    UnsupportedMode(WlcMode),
    AlreadyStarted,
    NotPollActive(RfDiscoveryState),
    ProtocolNotAllowed(Option<RfProtocol>),
    ReaderWriterBusy,
    DiscoveryBusy(DiscoveryFlags),
}

impl fmt::Display for StartRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartRejection::UnsupportedMode(mode) => {
                write!(f, "wireless charging mode {mode:?} not supported")
            }
            StartRejection::AlreadyStarted => {
                write!(f, "WLC-P Non-Autonomous extension not in stopped state")
            }
            StartRejection::NotPollActive(state) => {
                write!(f, "controller not in POLL_ACTIVE state (currently {state:?})")
            }
            StartRejection::ProtocolNotAllowed(Some(protocol)) => {
                write!(f, "invalid RF protocol activated: {protocol}")
            }
            StartRejection::ProtocolNotAllowed(None) => write!(f, "no RF protocol activated"),
            StartRejection::ReaderWriterBusy => write!(f, "reader/writer API already busy"),
            StartRejection::DiscoveryBusy(flags) => {
                write!(f, "discovery awaiting controller or shutting down: {flags:?}")
            }
        }
    }
}

/// Registers `subscriber` if the device manager is active and settled, and
/// reports the outcome to `subscriber` in either case.
#[instrument(skip_all)]
pub(crate) fn enable(
    context: &mut WlcContext,
    device_manager: &dyn DeviceManager,
    subscriber: Arc<dyn WlcSubscriber>,
) -> WlcStatus {
    let dm_flags = device_manager.flags();
    trace!(?dm_flags, "enable");

    let status = if dm_flags.contains(DmFlags::DM_IS_ACTIVE)
        && !dm_flags.intersects(DmFlags::ENABLE_EVT_PEND | DmFlags::DM_DISABLING_NFC)
    {
        context.subscriber.replace(&subscriber);
        WlcStatus::Ok
    } else {
        debug!(?dm_flags, "device manager not active, enable event pending or NFC disabling");
        WlcStatus::Failed
    };

    WlcEvent::EnableResult(status).deliver_to(subscriber.as_ref());
    status
}

/// Starts the Non-Autonomous extension once every precondition holds.
///
/// Checks run in a fixed order and stop at the first failure, which is logged
/// and leaves the context unchanged without notifying anyone.
#[instrument(skip(context, device_manager, reader_writer))]
pub(crate) fn start(
    context: &mut WlcContext,
    device_manager: &dyn DeviceManager,
    reader_writer: &dyn ReaderWriter,
    mode: WlcMode,
) -> Result<(), StartRejection> {
    if let Err(rejection) = check_start(context, device_manager, reader_writer, mode) {
        error!(%rejection, "WLC start rejected");
        return Err(rejection);
    }

    context.mode = Some(mode);
    context.flags.insert(WlcFlags::NON_AUTO_MODE_ENABLED);
    trace!(flags = %context.flags, "WLC-P Non-Autonomous extension started");

    context.subscriber.deliver(WlcEvent::StartResult(WlcStatus::Ok));
    Ok(())
}

fn check_start(
    context: &WlcContext,
    device_manager: &dyn DeviceManager,
    reader_writer: &dyn ReaderWriter,
    mode: WlcMode,
) -> Result<(), StartRejection> {
    let discovery = device_manager.discovery();

    if !mode.is_supported() {
        return Err(StartRejection::UnsupportedMode(mode));
    }
    if context.flags.contains(WlcFlags::NON_AUTO_MODE_ENABLED) {
        return Err(StartRejection::AlreadyStarted);
    }

    if discovery.state != RfDiscoveryState::PollActive {
        return Err(StartRejection::NotPollActive(discovery.state));
    }

    let protocol = reader_writer.activated_protocol();
    if !protocol.is_some_and(RfProtocol::supports_wlc) {
        return Err(StartRejection::ProtocolNotAllowed(protocol));
    }

    if reader_writer.is_api_busy() {
        return Err(StartRejection::ReaderWriterBusy);
    }

    if discovery.flags.intersects(DISCOVERY_BUSY) {
        return Err(StartRejection::DiscoveryBusy(discovery.flags));
    }
    Ok(())
}

/// Hands a power transfer cycle to the device manager. Completion is reported
/// by the device manager through `notifier`; nothing is tracked here.
#[instrument(skip(device_manager, notifier))]
pub(crate) fn start_wpt(
    device_manager: &dyn DeviceManager,
    power_adjust: PowerAdjust,
    duration: WptDuration,
    notifier: &ChargingNotifier,
) {
    trace!(
        power_adj_req = format_args!("{:#04x}", power_adjust.value()),
        wpt_time_int = format_args!("{:#04x}", duration.value()),
        "forwarding power transfer"
    );
    device_manager.start_wireless_power_transfer(WptRequest::new(
        power_adjust,
        duration,
        notifier.clone(),
    ));
}
