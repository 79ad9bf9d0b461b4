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

//! The wireless charging module: its persistent context, the action functions
//! that mutate it, and the type-state wrapper that runs the dispatcher.

pub use actions::StartRejection;
pub use context::{ContextSnapshot, WlcContext, WlcFlags};
pub use wlc_module::{Idle, Started, WlcModule};

mod actions;
mod context;
mod wlc_module;
