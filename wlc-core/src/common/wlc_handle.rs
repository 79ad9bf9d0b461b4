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

use std::sync::{Arc, Weak};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use static_assertions::assert_impl_all;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, instrument, trace, warn};

use crate::common::{ChargingNotifier, InboxSender, ModuleId};
use crate::message::{Envelope, PowerAdjust, WlcError, WlcMessage, WlcMode, WptDuration};
use crate::traits::{SysModule, WlcSubscriber};

/// The caller-facing side of a started wireless charging module.
///
/// Every operation validates its arguments, queues a request for the
/// dispatcher without waiting, and returns at once. `Ok(())` acknowledges the
/// submission only; the outcome arrives later through the subscriber.
#[derive(Debug, Clone)]
pub struct WlcHandle {
    pub(crate) id: ModuleId,
    pub(crate) outbox: InboxSender,
    notifier: ChargingNotifier,
    tracker: TaskTracker,
    cancellation_token: CancellationToken,
    shutdown_timeout: Duration,
    registry: Weak<DashMap<ModuleId, Arc<dyn SysModule>>>,
}

impl WlcHandle {
    pub(crate) fn new(
        id: ModuleId,
        outbox: InboxSender,
        notifier: ChargingNotifier,
        shutdown_timeout: Duration,
        registry: Weak<DashMap<ModuleId, Arc<dyn SysModule>>>,
    ) -> Self {
        WlcHandle {
            id,
            outbox,
            notifier,
            tracker: TaskTracker::new(),
            cancellation_token: CancellationToken::new(),
            shutdown_timeout,
            registry,
        }
    }

    /// Requests registration of `subscriber`.
    ///
    /// The subscriber passed here always receives exactly one
    /// `EnableResult`, successful or not.
    ///
    /// # Errors
    ///
    /// [`WlcError::MissingSubscriber`] if `subscriber` is `None`, or a
    /// submission error if the request could not be queued.
    #[instrument(skip(self, subscriber))]
    pub fn enable(&self, subscriber: Option<Arc<dyn WlcSubscriber>>) -> Result<(), WlcError> {
        let Some(subscriber) = subscriber else {
            error!("enable rejected: no subscriber supplied");
            return Err(WlcError::MissingSubscriber);
        };
        self.submit(WlcMessage::Enable { subscriber })
    }

    /// Requests the Non-Autonomous RF interface extension.
    ///
    /// A successful start is reported as `StartResult(Ok)`. A start that fails
    /// its preconditions is not reported at all.
    ///
    /// # Errors
    ///
    /// [`WlcError::UnsupportedMode`] for any mode other than
    /// [`WlcMode::NonAutonomous`], or a submission error.
    #[instrument(skip(self))]
    pub fn start(&self, mode: WlcMode) -> Result<(), WlcError> {
        if !mode.is_supported() {
            error!(?mode, "start rejected: mode not supported");
            return Err(WlcError::UnsupportedMode(mode));
        }
        self.submit(WlcMessage::Start { mode })
    }

    /// Requests a power transfer cycle from raw `POWER_ADJ_REQ` and
    /// `WPT_DURATION_INT` bytes.
    ///
    /// # Errors
    ///
    /// [`WlcError::InvalidPowerAdjust`] or [`WlcError::InvalidWptDuration`]
    /// for out-of-range values, or a submission error.
    #[instrument(skip(self))]
    pub fn start_wpt(&self, power_adjust: u8, duration: u8) -> Result<(), WlcError> {
        let power_adjust = PowerAdjust::try_from(power_adjust).inspect_err(|err| {
            error!(%err, "start_wpt rejected");
        })?;
        let duration = WptDuration::try_from(duration).inspect_err(|err| {
            error!(%err, "start_wpt rejected");
        })?;
        self.submit(WlcMessage::StartWpt {
            power_adjust,
            duration,
        })
    }

    fn submit(&self, message: WlcMessage) -> Result<(), WlcError> {
        let event = message.to_string();
        match self.outbox.try_send(Envelope::new(message)) {
            Ok(()) => {
                trace!(%event, "request queued");
                Ok(())
            }
            Err(err) => {
                let err = WlcError::from(err);
                warn!(%event, %err, "request not queued");
                Err(err)
            }
        }
    }

    /// The reply path collaborators use to report power transfer progress.
    pub fn charging_notifier(&self) -> ChargingNotifier {
        self.notifier.clone()
    }

    pub fn id(&self) -> ModuleId {
        self.id
    }

    /// `true` once the dispatcher has been told to stop.
    pub fn is_stopped(&self) -> bool {
        self.cancellation_token.is_cancelled()
    }

    pub(crate) fn tracker(&self) -> TaskTracker {
        self.tracker.clone()
    }

    pub(crate) fn cancellation_token(&self) -> CancellationToken {
        self.cancellation_token.clone()
    }

    /// Stops the dispatcher, waits for it to run its `after_stop` hook and
    /// removes the module from the registry.
    ///
    /// Requests still queued when the stop is observed are discarded.
    #[instrument(skip(self), fields(module = %self.id))]
    pub async fn stop(&self) -> anyhow::Result<()> {
        trace!("cancelling dispatcher");
        self.cancellation_token.cancel();
        self.tracker.close();

        if tokio::time::timeout(self.shutdown_timeout, self.tracker.wait())
            .await
            .is_err()
        {
            error!(timeout = ?self.shutdown_timeout, "dispatcher did not stop in time");
            anyhow::bail!(
                "module {} did not stop within {:?}",
                self.id,
                self.shutdown_timeout
            );
        }

        if let Some(registry) = self.registry.upgrade() {
            if registry.remove(&self.id).is_some() {
                debug!("module deregistered");
            }
        }
        Ok(())
    }
}

assert_impl_all!(WlcHandle: Send, Sync, Clone);

#[async_trait]
impl SysModule for WlcHandle {
    fn id(&self) -> ModuleId {
        self.id
    }

    async fn disable(&self) -> anyhow::Result<()> {
        self.stop().await
    }
}
