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

//! Test harness for the NFC wireless charging crates.
//!
//! `#[wlc_test]` turns an `async fn` into a `#[test]` that runs on its own
//! multi-threaded tokio runtime inside a `wlc_test` tracing span. An optional
//! `timeout_ms = N` fails the test if the body has not finished in time.

pub use nfc_wlc_test_macro::wlc_test;

pub mod prelude {
    pub use crate::wlc_test;
}

#[doc(hidden)]
pub mod __private {
    pub use tokio;
    pub use tracing;
}
