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
use std::time::Duration;

use anyhow::Context;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use nfc_wlc::prelude::*;

const EVENT_TIMEOUT: Duration = Duration::from_secs(2);

/// Forwards every result event to its [`EventLog`].
struct RecordingSubscriber {
    events: UnboundedSender<WlcEvent>,
}

impl RecordingSubscriber {
    fn record(&self, event: WlcEvent) {
        tracing::debug!(%event, "subscriber notified");
        let _ = self.events.send(event);
    }
}

impl WlcSubscriber for RecordingSubscriber {
    fn on_enable_result(&self, status: WlcStatus) {
        self.record(WlcEvent::EnableResult(status));
    }

    fn on_start_result(&self, status: WlcStatus) {
        self.record(WlcEvent::StartResult(status));
    }

    fn on_start_wpt_result(&self, status: WlcStatus) {
        self.record(WlcEvent::StartWptResult(status));
    }

    fn on_charging_result(&self, end_condition: u8) {
        self.record(WlcEvent::ChargingResult(end_condition));
    }
}

/// A subscriber and the log of events delivered to it.
///
/// The module holds subscribers weakly, so the returned `Arc` must stay alive
/// for as long as the test expects deliveries.
pub fn recording_subscriber() -> (Arc<dyn WlcSubscriber>, EventLog) {
    let (events, receiver) = unbounded_channel();
    (
        Arc::new(RecordingSubscriber { events }),
        EventLog { events: receiver },
    )
}

pub struct EventLog {
    events: UnboundedReceiver<WlcEvent>,
}

impl EventLog {
    /// Waits for the next delivered event.
    pub async fn next(&mut self) -> anyhow::Result<WlcEvent> {
        tokio::time::timeout(EVENT_TIMEOUT, self.events.recv())
            .await
            .context("no event delivered in time")?
            .context("subscriber dropped")
    }

    /// The next event if one has already been delivered.
    pub fn try_next(&mut self) -> Option<WlcEvent> {
        self.events.try_recv().ok()
    }
}
