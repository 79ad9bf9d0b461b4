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

//! The seams of the module: the subscriber it reports to, the collaborators it
//! consults, and the lifecycle contract it offers the module registry.

pub use device_manager::{DeviceManager, DiscoveryFlags, DiscoveryStatus, DmFlags, RfDiscoveryState};
pub use reader_writer::{ReaderWriter, RfProtocol};
pub use subscriber::{NoopSubscriber, WlcSubscriber};
pub use sys_module::SysModule;

mod device_manager;
mod reader_writer;
mod subscriber;
/// Defines the [`SysModule`] lifecycle trait.
mod sys_module;
