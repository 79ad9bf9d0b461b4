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

use std::fmt;
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::mpsc::Receiver;

pub use idle::Idle;
pub use started::Started;

use crate::common::{LifecycleHook, ModuleId, SystemRuntime, WlcHandle};
use crate::message::Envelope;
use crate::module::WlcContext;
use crate::traits::{DeviceManager, ReaderWriter};

mod idle;
mod started;

/// The wireless charging module, parameterised by its lifecycle state.
///
/// A module is built [`Idle`] by [`SystemRuntime::new_wlc_module`], optionally
/// given lifecycle hooks, and turned into a running dispatcher by
/// [`WlcModule::start`]. Callers interact with a started module only through
/// the returned [`WlcHandle`].
pub struct WlcModule<ModuleState> {
    pub(crate) id: ModuleId,
    pub(crate) handle: WlcHandle,
    pub(crate) runtime: SystemRuntime,
    pub(crate) context: WlcContext,
    pub(crate) device_manager: Arc<dyn DeviceManager>,
    pub(crate) reader_writer: Arc<dyn ReaderWriter>,
    pub(crate) inbox: Receiver<Envelope>,
    pub(crate) before_start: LifecycleHook,
    pub(crate) after_stop: LifecycleHook,
    _module_state: PhantomData<ModuleState>,
}

impl<ModuleState> Debug for WlcModule<ModuleState> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("WlcModule")
            .field("id", &self.id)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

impl<ModuleState> WlcModule<ModuleState> {
    pub fn id(&self) -> ModuleId {
        self.id
    }

    pub fn context(&self) -> &WlcContext {
        &self.context
    }
}
