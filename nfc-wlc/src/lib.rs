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

//! # NFC Wireless Charging
//!
//! Control of the NFC wireless charging (WLC) lifecycle on top of an NFC
//! controller stack.
//!
//! ## Key Concepts
//!
//! - **Module (`WlcModule`)**: built idle by the `SystemRuntime`, started once,
//!   then driven only through its handle.
//! - **Handle (`WlcHandle`)**: `enable`, `start` and `start_wpt` validate their
//!   arguments and queue a request. They never wait for the outcome.
//! - **Subscriber (`WlcSubscriber`)**: receives `EnableResult`, `StartResult`,
//!   `StartWptResult` and `ChargingResult` from the dispatcher. At most one is
//!   registered at a time and the module holds it weakly.
//! - **Collaborators (`DeviceManager`, `ReaderWriter`)**: the device state the
//!   module gates on, and the power transfer primitive it forwards to.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use nfc_wlc::prelude::*;
//!
//! let runtime = NfaSystem::launch();
//! let module = runtime.new_wlc_module(device_manager, reader_writer);
//! let handle = module.start().await?;
//!
//! let subscriber: Arc<dyn WlcSubscriber> = Arc::new(MySubscriber::default());
//! handle.enable(Some(subscriber.clone()))?;
//! handle.start(WlcMode::NonAutonomous)?;
//! handle.start_wpt(0x14, 0x13)?;
//! ```

/// Everything needed to build, drive and observe a wireless charging module.
pub mod prelude {
    pub use nfc_wlc_core::prelude::*;
}
