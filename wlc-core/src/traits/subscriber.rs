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

use crate::message::WlcStatus;

/// Receives the asynchronous results of the wireless charging module.
///
/// Exactly one subscriber is registered at a time; a successful enable
/// replaces the previous one without telling it. The module keeps only a weak
/// reference, so the caller owns the subscriber and decides how long it lives.
///
/// Every method runs on the module's dispatch task and should return quickly.
/// All methods default to doing nothing.
pub trait WlcSubscriber: Send + Sync + 'static {
    /// Outcome of an enable request, delivered once per accepted call.
    fn on_enable_result(&self, _status: WlcStatus) {}

    /// Delivered when the Non-Autonomous extension has started.
    fn on_start_result(&self, _status: WlcStatus) {}

    /// The controller's answer to a power transfer start.
    fn on_start_wpt_result(&self, _status: WlcStatus) {}

    /// A power transfer cycle ended with `end_condition`.
    fn on_charging_result(&self, _end_condition: u8) {}
}

/// A subscriber that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSubscriber;

impl WlcSubscriber for NoopSubscriber {}
