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

use tracing::{trace, warn};

use crate::common::InboxSender;
use crate::message::{Envelope, WlcError, WlcStatus, WptNotification};

/// The reply path a device manager uses to report power transfer progress.
///
/// Notifications are queued on the module inbox behind any request already
/// waiting there. The dispatcher forwards each one to whichever subscriber is
/// registered when it is drained.
#[derive(Debug, Clone)]
pub struct ChargingNotifier {
    sender: InboxSender,
}

impl ChargingNotifier {
    pub(crate) fn new(sender: InboxSender) -> Self {
        Self { sender }
    }

    /// Reports the controller's answer to a power transfer start.
    pub fn start_wpt_result(&self, status: WlcStatus) -> Result<(), WlcError> {
        self.post(WptNotification::Started(status))
    }

    /// Reports the end of a power transfer cycle.
    pub fn charging_result(&self, end_condition: u8) -> Result<(), WlcError> {
        self.post(WptNotification::Ended(end_condition))
    }

    fn post(&self, notification: WptNotification) -> Result<(), WlcError> {
        trace!(?notification, "posting charging notification");
        self.sender
            .try_send(Envelope::notification(notification))
            .map_err(|err| {
                let err = WlcError::from(err);
                warn!(%err, ?notification, "charging notification dropped");
                err
            })
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc::{self, Receiver};

    use super::*;
    use crate::message::{Payload, WlcMessage, WlcMode};

    fn next_notification(inbox: &mut Receiver<Envelope>) -> Option<WptNotification> {
        match inbox.try_recv().ok()?.payload {
            Payload::Notification(notification) => Some(notification),
            Payload::Request(message) => panic!("expected a notification, got {message}"),
        }
    }

    #[test]
    fn notifications_queue_in_order() {
        let (sender, mut inbox) = mpsc::channel(2);
        let notifier = ChargingNotifier::new(sender);

        notifier.start_wpt_result(WlcStatus::Ok).expect("queued");
        notifier.charging_result(0x01).expect("queued");

        assert_eq!(
            next_notification(&mut inbox),
            Some(WptNotification::Started(WlcStatus::Ok))
        );
        assert_eq!(next_notification(&mut inbox), Some(WptNotification::Ended(0x01)));
    }

    #[test]
    fn notifications_queue_behind_earlier_requests() {
        let (sender, mut inbox) = mpsc::channel(2);
        let notifier = ChargingNotifier::new(sender.clone());

        sender
            .try_send(Envelope::new(WlcMessage::Start { mode: WlcMode::NonAutonomous }))
            .expect("queued");
        notifier.charging_result(0x02).expect("queued");

        let first = inbox.try_recv().expect("request queued first");
        assert!(matches!(first.payload, Payload::Request(WlcMessage::Start { .. })));
        assert_eq!(next_notification(&mut inbox), Some(WptNotification::Ended(0x02)));
    }

    #[test]
    fn full_or_closed_queues_are_reported() {
        let (sender, inbox) = mpsc::channel(1);
        let notifier = ChargingNotifier::new(sender);

        notifier.charging_result(0x00).expect("queued");
        assert_eq!(notifier.charging_result(0x01), Err(WlcError::InboxFull));

        drop(inbox);
        assert_eq!(
            notifier.start_wpt_result(WlcStatus::Failed),
            Err(WlcError::ModuleStopped)
        );
    }
}
