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

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use tokio::sync::mpsc::channel;
use tracing::{debug, instrument, trace};

use crate::common::{ChargingNotifier, FutureBox, ModuleId, SystemRuntime, WlcConfig, WlcHandle};
use crate::module::{Started, WlcContext, WlcModule};
use crate::traits::{DeviceManager, ReaderWriter, SysModule};

/// Type-state marker for a [`WlcModule`] that has been built but not started.
///
/// Lifecycle hooks can only be installed in this state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Idle;

impl WlcModule<Idle> {
    pub(crate) fn new(
        runtime: SystemRuntime,
        config: &WlcConfig,
        device_manager: Arc<dyn DeviceManager>,
        reader_writer: Arc<dyn ReaderWriter>,
    ) -> Self {
        let id = ModuleId::WLC;
        let (outbox, inbox) = channel(config.limits.inbox_capacity.max(1));
        let notifier = ChargingNotifier::new(outbox.clone());
        let handle = WlcHandle::new(
            id,
            outbox,
            notifier,
            config.module_shutdown_timeout(),
            Arc::downgrade(&runtime.modules),
        );
        trace!(module = %id, "new module");

        WlcModule {
            id,
            handle,
            runtime,
            context: WlcContext::default(),
            device_manager,
            reader_writer,
            inbox,
            before_start: Box::new(|_: &WlcContext| default_hook()),
            after_stop: Box::new(|_: &WlcContext| default_hook()),
            _module_state: PhantomData,
        }
    }

    /// Runs `f` against the fresh context just before the dispatcher starts.
    pub fn before_start<F, Fut>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&WlcContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.before_start =
            Box::new(move |context: &WlcContext| Box::pin(f(context)) as FutureBox);
        self
    }

    /// Runs `f` against the final context once the dispatcher has stopped.
    pub fn after_stop<F, Fut>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&WlcContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.after_stop =
            Box::new(move |context: &WlcContext| Box::pin(f(context)) as FutureBox);
        self
    }

    /// The handle the module will answer on once started.
    pub fn handle(&self) -> &WlcHandle {
        &self.handle
    }

    /// Registers the module with its runtime and spawns the dispatcher.
    ///
    /// # Errors
    ///
    /// Fails if a module with the same identifier is already registered.
    #[instrument(skip(self), fields(module = %self.id))]
    pub async fn start(self) -> anyhow::Result<WlcHandle> {
        let handle = self.handle.clone();
        let module: Arc<dyn SysModule> = Arc::new(handle.clone());
        self.runtime.register(self.id, module)?;

        (self.before_start)(&self.context).await;

        let started: WlcModule<Started> = self.into();
        let tracker = handle.tracker();
        tracker.spawn(started.wake());
        tracker.close();
        debug!("dispatcher spawned");

        Ok(handle)
    }
}

impl From<WlcModule<Idle>> for WlcModule<Started> {
    fn from(value: WlcModule<Idle>) -> Self {
        debug_assert!(
            !value.inbox.is_closed(),
            "inbox closed before the module started"
        );
        WlcModule {
            id: value.id,
            handle: value.handle,
            runtime: value.runtime,
            context: value.context,
            device_manager: value.device_manager,
            reader_writer: value.reader_writer,
            inbox: value.inbox,
            before_start: value.before_start,
            after_stop: value.after_stop,
            _module_state: PhantomData,
        }
    }
}

fn default_hook() -> FutureBox {
    Box::pin(async {})
}
