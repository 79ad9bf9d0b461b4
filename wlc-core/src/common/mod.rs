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
pub use charging_notifier::ChargingNotifier;
pub use config::{LimitsConfig, TimeoutConfig, WlcConfig, CONFIG};
pub(crate) use flags::flag_set;
pub use nfa_system::NfaSystem;
pub use system_runtime::SystemRuntime;
pub use types::ModuleId;
pub(crate) use types::*;
pub use wlc_handle::WlcHandle;

mod charging_notifier;
mod config;
mod flags;
mod nfa_system;
mod system_runtime;
mod types;
mod wlc_handle;
