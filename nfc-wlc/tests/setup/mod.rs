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
#![allow(dead_code)]

use std::sync::{Arc, Once};

use anyhow::Context;
use parking_lot::Mutex;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use nfc_wlc::prelude::*;

pub use collaborators::{FakeDeviceManager, FakeReaderWriter};
pub use subscriber::{recording_subscriber, EventLog};

pub mod collaborators;
pub mod subscriber;

static INIT: Once = Once::new();

/// Installs the file-backed tracing subscriber shared by every test.
pub fn initialize_tracing() {
    INIT.call_once(|| {
        std::fs::create_dir_all("logs").expect("could not create logs dir");

        let file_appender = RollingFileAppender::new(Rotation::NEVER, "logs", "wlc_tests.txt");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // Leak the guard so the non-blocking writer outlives every test.
        Box::leak(Box::new(guard));

        let filter = EnvFilter::new("info")
            .add_directive("nfc_wlc_core::module=trace".parse().unwrap())
            .add_directive("nfc_wlc_core::common::wlc_handle=trace".parse().unwrap())
            .add_directive("nfc_wlc_core::common::charging_notifier=trace".parse().unwrap())
            .add_directive("nfc_wlc_core::common::system_runtime=debug".parse().unwrap());

        let subscriber = FmtSubscriber::builder()
            .with_span_events(FmtSpan::NONE)
            .with_max_level(Level::TRACE)
            .compact()
            .with_line_number(true)
            .without_time()
            .with_target(true)
            .with_env_filter(filter)
            .with_writer(non_blocking)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("setting default subscriber failed");
    });
}

/// A started module wired to fake collaborators.
pub struct Harness {
    pub runtime: SystemRuntime,
    pub handle: WlcHandle,
    pub device_manager: Arc<FakeDeviceManager>,
    pub reader_writer: Arc<FakeReaderWriter>,
    pub requests: UnboundedReceiver<WptRequest>,
    final_context: Arc<Mutex<Option<ContextSnapshot>>>,
}

impl Harness {
    /// Starts a module with default limits against collaborators that satisfy
    /// every precondition.
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with_config(&WlcConfig::default()).await
    }

    pub async fn start_with_config(config: &WlcConfig) -> anyhow::Result<Self> {
        initialize_tracing();
        let runtime = NfaSystem::launch();
        let (device_manager, requests) = FakeDeviceManager::ready();
        let reader_writer = FakeReaderWriter::ready();
        let final_context = Arc::new(Mutex::new(None));

        let mut module = runtime.new_wlc_module_with_config(
            config,
            device_manager.clone(),
            reader_writer.clone(),
        );
        let sink = final_context.clone();
        module.after_stop(move |context| {
            *sink.lock() = Some(context.snapshot());
            async {}
        });
        let handle = module.start().await?;

        Ok(Harness {
            runtime,
            handle,
            device_manager,
            reader_writer,
            requests,
            final_context,
        })
    }

    /// Stops the module and returns the context as the dispatcher left it.
    pub async fn stop(&self) -> anyhow::Result<ContextSnapshot> {
        self.handle.stop().await?;
        self.final_context
            .lock()
            .take()
            .context("after_stop hook did not run")
    }
}
