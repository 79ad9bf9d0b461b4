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

use std::time::SystemTime;

use tracing::{debug, instrument, trace};

use crate::message::{Envelope, Payload, WlcMessage, WptNotification};
use crate::module::{actions, WlcModule};

/// Type-state marker for a [`WlcModule`] whose dispatcher is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Started;

impl WlcModule<Started> {
    /// The dispatch loop. Requests and charging notifications share one inbox
    /// and are drained one at a time in arrival order. Each runs to completion
    /// before the next is taken.
    #[instrument(skip(self), fields(module = %self.id))]
    pub(crate) async fn wake(mut self) {
        let cancel_token = self.handle.cancellation_token();
        let mut cancel = Box::pin(cancel_token.cancelled());

        loop {
            tokio::select! {
                biased;

                _ = &mut cancel => {
                    trace!("cancellation observed");
                    break;
                }
                incoming = self.inbox.recv() => {
                    let Some(envelope) = incoming else {
                        trace!("every sender dropped");
                        break;
                    };
                    let Envelope { payload, timestamp } = envelope;
                    trace!(
                        queued = ?SystemTime::now().duration_since(timestamp).unwrap_or_default(),
                        "envelope received"
                    );
                    match payload {
                        Payload::Request(message) => self.dispatch(message),
                        Payload::Notification(notification) => self.relay(notification),
                    }
                }
            }
        }

        self.inbox.close();
        (self.after_stop)(&self.context).await;
        debug!(flags = %self.context.flags(), "dispatcher stopped");
    }

    fn dispatch(&mut self, message: WlcMessage) {
        trace!(
            event = message.event().name(),
            code = format_args!("{:#06x}", message.event_code()),
            flags = %self.context.flags(),
            "dispatching"
        );

        match message {
            WlcMessage::Enable { subscriber } => {
                actions::enable(&mut self.context, self.device_manager.as_ref(), subscriber);
            }
            WlcMessage::Start { mode } => {
                let _ = actions::start(
                    &mut self.context,
                    self.device_manager.as_ref(),
                    self.reader_writer.as_ref(),
                    mode,
                );
            }
            WlcMessage::StartWpt {
                power_adjust,
                duration,
            } => {
                let notifier = self.handle.charging_notifier();
                actions::start_wpt(
                    self.device_manager.as_ref(),
                    power_adjust,
                    duration,
                    &notifier,
                );
            }
        }
    }

    fn relay(&self, notification: WptNotification) {
        trace!(?notification, "relaying charging notification");
        self.context.subscriber.deliver(notification.into());
    }
}
