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

//! Crate-internal type aliases plus the [`ModuleId`] used to key the module
//! registry and to derive request event codes.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::mpsc::Sender;

use crate::message::Envelope;
use crate::module::WlcContext;
use crate::traits::SysModule;

/// Crate-internal: Type alias for a pinned, boxed future returned by lifecycle hooks.
pub(crate) type FutureBox = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Crate-internal: The sending half of a module's request inbox.
pub(crate) type InboxSender = Sender<Envelope>;

/// Crate-internal: A lifecycle hook observing the module context.
pub(crate) type LifecycleHook = Box<dyn Fn(&WlcContext) -> FutureBox + Send + Sync + 'static>;

/// Crate-internal: The registry of started modules, shared by the runtime and every handle.
pub(crate) type ModuleRegistry = Arc<DashMap<ModuleId, Arc<dyn SysModule>>>;

/// Identifier under which a module registers with the [`SystemRuntime`](crate::common::SystemRuntime).
///
/// The identifier also occupies the high byte of every request event code the
/// module handles, so two modules can never share a code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(u8);

impl ModuleId {
    /// The wireless charging module.
    pub const WLC: ModuleId = ModuleId(0x07);

    pub const fn new(raw: u8) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u8 {
        self.0
    }

    /// First event code owned by this module.
    pub const fn event_start(self) -> u16 {
        (self.0 as u16) << 8
    }
}

impl fmt::Debug for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ModuleId({self})")
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ModuleId::WLC => f.write_str("wlc"),
            ModuleId(raw) => write!(f, "module-{raw:#04x}"),
        }
    }
}
