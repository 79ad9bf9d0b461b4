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

pub(crate) use envelope::{Envelope, Payload};
pub use event::{WlcEvent, WlcStatus};
pub use request::{WlcEventCode, WlcMessage, WlcMode};
pub use wlc_error::{ErrorKind, WlcError};
pub use wpt::{
    PowerAdjust, PowerDirection, WptDuration, WptNotification, WptRequest, POWER_ADJ_REQ_DEC_MIN,
    POWER_ADJ_REQ_INC_MAX, WPT_DURATION_INT_MASK, WPT_DURATION_INT_MAX,
};

mod envelope;
mod event;
mod request;
mod wlc_error;
mod wpt;
