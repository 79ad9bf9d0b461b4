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

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use nfc_wlc::prelude::*;
use nfc_wlc_test::prelude::*;

use crate::setup::{recording_subscriber, FakeDeviceManager, FakeReaderWriter, Harness};

mod setup;

#[wlc_test(timeout_ms = 5000)]
async fn started_module_is_registered_until_stopped() -> anyhow::Result<()> {
    let harness = Harness::start().await?;
    assert_eq!(harness.handle.id(), ModuleId::WLC);
    assert!(harness.runtime.is_registered(ModuleId::WLC));
    assert_eq!(harness.runtime.module_count(), 1);

    harness.stop().await?;
    assert!(harness.handle.is_stopped());
    assert!(!harness.runtime.is_registered(ModuleId::WLC));
    assert_eq!(harness.runtime.module_count(), 0);
    Ok(())
}

#[wlc_test(timeout_ms = 5000)]
async fn a_second_module_cannot_take_the_same_id() -> anyhow::Result<()> {
    let harness = Harness::start().await?;
    let (device_manager, _requests) = FakeDeviceManager::ready();

    let duplicate = harness.runtime.new_wlc_module_with_config(
        &WlcConfig::default(),
        device_manager,
        FakeReaderWriter::ready(),
    );
    let err = duplicate.start().await.expect_err("duplicate registration");
    assert_eq!(
        err.downcast_ref::<WlcError>(),
        Some(&WlcError::AlreadyRegistered(ModuleId::WLC))
    );
    assert_eq!(harness.runtime.module_count(), 1);

    harness.stop().await?;
    Ok(())
}

#[wlc_test(timeout_ms = 5000)]
async fn requests_after_stop_are_refused() -> anyhow::Result<()> {
    let harness = Harness::start().await?;
    harness.stop().await?;

    let (subscriber, _events) = recording_subscriber();
    let result = harness.handle.enable(Some(subscriber));
    assert_eq!(result, Err(WlcError::ModuleStopped));
    assert_eq!(WlcStatus::from(result), WlcStatus::Failed);
    assert_eq!(
        harness.handle.start(WlcMode::NonAutonomous),
        Err(WlcError::ModuleStopped)
    );
    assert_eq!(
        harness.handle.charging_notifier().charging_result(0x00),
        Err(WlcError::ModuleStopped)
    );

    // Stopping twice is harmless.
    harness.handle.stop().await?;
    Ok(())
}

/// A full inbox is reported to the caller, never queued or retried.
#[wlc_test(timeout_ms = 5000)]
async fn full_inbox_is_reported_synchronously() -> anyhow::Result<()> {
    let runtime = NfaSystem::launch();
    let (device_manager, mut requests) = FakeDeviceManager::ready();
    let mut config = WlcConfig::default();
    config.limits.inbox_capacity = 1;

    let module =
        runtime.new_wlc_module_with_config(&config, device_manager, FakeReaderWriter::ready());
    // The dispatcher is not running yet, so nothing drains the inbox.
    let handle = module.handle().clone();
    assert_eq!(handle.start_wpt(0x01, 0x01), Ok(()));
    let result = handle.start_wpt(0x02, 0x02);
    assert_eq!(result, Err(WlcError::InboxFull));
    assert_eq!(result.map_err(|err| err.kind()), Err(ErrorKind::ResourceExhaustion));

    let handle = module.start().await?;
    let request = requests.recv().await.expect("queued request dispatched");
    assert_eq!(request.power_adjust().value(), 0x01);

    handle.stop().await?;
    assert!(requests.try_recv().is_err());
    Ok(())
}

#[wlc_test(timeout_ms = 5000)]
async fn lifecycle_hooks_observe_the_context() -> anyhow::Result<()> {
    let runtime = NfaSystem::launch();
    let (device_manager, _requests) = FakeDeviceManager::ready();
    let before = Arc::new(AtomicUsize::new(0));
    let after = Arc::new(AtomicUsize::new(0));

    let mut module = runtime.new_wlc_module_with_config(
        &WlcConfig::default(),
        device_manager,
        FakeReaderWriter::ready(),
    );
    let before_count = before.clone();
    let after_count = after.clone();
    module
        .before_start(move |context| {
            assert_eq!(context.snapshot(), ContextSnapshot::default());
            before_count.fetch_add(1, Ordering::SeqCst);
            async {}
        })
        .after_stop(move |context| {
            assert!(context.flags().contains(WlcFlags::NON_AUTO_MODE_ENABLED));
            after_count.fetch_add(1, Ordering::SeqCst);
            async {}
        });

    let handle = module.start().await?;
    assert_eq!(before.load(Ordering::SeqCst), 1);

    let (subscriber, mut events) = recording_subscriber();
    handle.enable(Some(subscriber.clone()))?;
    handle.start(WlcMode::NonAutonomous)?;
    assert_eq!(events.next().await?, WlcEvent::EnableResult(WlcStatus::Ok));
    assert_eq!(events.next().await?, WlcEvent::StartResult(WlcStatus::Ok));

    handle.stop().await?;
    assert_eq!(after.load(Ordering::SeqCst), 1);
    Ok(())
}

#[wlc_test(timeout_ms = 5000)]
async fn shutdown_all_stops_every_module() -> anyhow::Result<()> {
    let harness = Harness::start().await?;

    harness.runtime.shutdown_all().await?;

    assert_eq!(harness.runtime.module_count(), 0);
    assert!(harness.handle.is_stopped());
    assert_eq!(harness.handle.start_wpt(0x00, 0x00), Err(WlcError::ModuleStopped));
    Ok(())
}

/// The runtime's handle doubles as the registry-facing module.
#[wlc_test(timeout_ms = 5000)]
async fn handle_disables_through_the_module_contract() -> anyhow::Result<()> {
    let harness = Harness::start().await?;
    let module: Arc<dyn SysModule> = Arc::new(harness.handle.clone());

    assert_eq!(module.id(), ModuleId::WLC);
    module.disable().await?;
    assert!(!harness.runtime.is_registered(ModuleId::WLC));
    Ok(())
}
