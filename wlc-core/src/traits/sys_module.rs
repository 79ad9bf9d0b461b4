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

use std::fmt::Debug;

use async_trait::async_trait;

use crate::common::ModuleId;

/// The contract between a module and the [`SystemRuntime`](crate::common::SystemRuntime)
/// it registers with.
#[async_trait]
pub trait SysModule: Debug + Send + Sync + 'static {
    /// The identifier the module is registered under.
    fn id(&self) -> ModuleId;

    /// Tears the module down and deregisters it.
    async fn disable(&self) -> anyhow::Result<()>;
}
