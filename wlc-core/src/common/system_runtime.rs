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

use dashmap::mapref::entry::Entry;
use futures::future::join_all;
use tracing::{debug, instrument, trace};

use crate::common::{ModuleId, ModuleRegistry, WlcConfig, CONFIG};
use crate::message::WlcError;
use crate::module::{Idle, WlcModule};
use crate::traits::{DeviceManager, ReaderWriter, SysModule};

/// The registry of started modules, keyed by [`ModuleId`].
///
/// Cloning is cheap; every clone shares the same registry.
#[derive(Debug, Clone, Default)]
pub struct SystemRuntime {
    pub(crate) modules: ModuleRegistry,
}

impl SystemRuntime {
    /// Builds an idle wireless charging module sized from the global [`CONFIG`].
    pub fn new_wlc_module(
        &self,
        device_manager: Arc<dyn DeviceManager>,
        reader_writer: Arc<dyn ReaderWriter>,
    ) -> WlcModule<Idle> {
        self.new_wlc_module_with_config(&CONFIG, device_manager, reader_writer)
    }

    pub fn new_wlc_module_with_config(
        &self,
        config: &WlcConfig,
        device_manager: Arc<dyn DeviceManager>,
        reader_writer: Arc<dyn ReaderWriter>,
    ) -> WlcModule<Idle> {
        WlcModule::new(self.clone(), config, device_manager, reader_writer)
    }

    #[instrument(skip(self, module))]
    pub(crate) fn register(
        &self,
        id: ModuleId,
        module: Arc<dyn SysModule>,
    ) -> Result<(), WlcError> {
        match self.modules.entry(id) {
            Entry::Occupied(_) => Err(WlcError::AlreadyRegistered(id)),
            Entry::Vacant(slot) => {
                slot.insert(module);
                trace!("module registered");
                Ok(())
            }
        }
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn is_registered(&self, id: ModuleId) -> bool {
        self.modules.contains_key(&id)
    }

    /// Disables every registered module concurrently.
    ///
    /// # Errors
    ///
    /// Returns the first teardown failure after every module has been given
    /// the chance to stop.
    #[instrument(skip(self))]
    pub async fn shutdown_all(&self) -> anyhow::Result<()> {
        // Collected first: disabling a module removes it from the map.
        let modules: Vec<Arc<dyn SysModule>> = self
            .modules
            .iter()
            .map(|item| item.value().clone())
            .collect();
        debug!(count = modules.len(), "shutting down modules");

        let results = join_all(modules.iter().map(|module| module.disable())).await;
        for result in results {
            result?;
        }
        Ok(())
    }
}
