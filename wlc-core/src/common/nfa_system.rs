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

use crate::common::SystemRuntime;

/// Entry point of the NFC module system.
///
/// Launching yields the [`SystemRuntime`] that builds, registers and tears
/// down the individual protocol modules.
#[derive(Default, Debug, Clone)]
pub struct NfaSystem;

impl NfaSystem {
    /// Launches the module system with an empty registry.
    pub fn launch() -> SystemRuntime {
        let system: NfaSystem = Default::default();
        system.into()
    }
}

impl From<NfaSystem> for SystemRuntime {
    fn from(_: NfaSystem) -> Self {
        SystemRuntime::default()
    }
}
