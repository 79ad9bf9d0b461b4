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

use std::fmt;

/// RF protocol of the activated remote endpoint, by NCI identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RfProtocol {
    T1T,
    T2T,
    T3T,
    IsoDep,
    NfcDep,
    T5T,
    Mifare,
    Unknown(u8),
}

impl RfProtocol {
    /// Protocols over which a WLC poller may run the Non-Autonomous extension.
    pub const fn supports_wlc(self) -> bool {
        matches!(
            self,
            RfProtocol::T2T | RfProtocol::T3T | RfProtocol::T5T | RfProtocol::IsoDep
        )
    }

    pub const fn nci_id(self) -> u8 {
        match self {
            RfProtocol::T1T => 0x01,
            RfProtocol::T2T => 0x02,
            RfProtocol::T3T => 0x03,
            RfProtocol::IsoDep => 0x04,
            RfProtocol::NfcDep => 0x05,
            RfProtocol::T5T => 0x06,
            RfProtocol::Mifare => 0x80,
            RfProtocol::Unknown(raw) => raw,
        }
    }
}

impl From<u8> for RfProtocol {
    fn from(raw: u8) -> Self {
        match raw {
            0x01 => RfProtocol::T1T,
            0x02 => RfProtocol::T2T,
            0x03 => RfProtocol::T3T,
            0x04 => RfProtocol::IsoDep,
            0x05 => RfProtocol::NfcDep,
            0x06 => RfProtocol::T5T,
            0x80 => RfProtocol::Mifare,
            other => RfProtocol::Unknown(other),
        }
    }
}

impl fmt::Display for RfProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?} ({:#04x})", self.nci_id())
    }
}

/// The reader/writer submodule as seen by the wireless charging module.
pub trait ReaderWriter: Send + Sync + 'static {
    /// `true` while a reader/writer API call is in flight.
    fn is_api_busy(&self) -> bool;

    /// Protocol of the currently activated endpoint, if any.
    fn activated_protocol(&self) -> Option<RfProtocol>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_set_is_t2t_t3t_t5t_and_iso_dep() {
        let allowed: Vec<_> = (0u8..=0xFF)
            .map(RfProtocol::from)
            .filter(|protocol| protocol.supports_wlc())
            .collect();
        assert_eq!(
            allowed,
            vec![RfProtocol::T2T, RfProtocol::T3T, RfProtocol::IsoDep, RfProtocol::T5T]
        );
    }

    #[test]
    fn nci_identifiers_round_trip() {
        for raw in [0x01, 0x04, 0x06, 0x80, 0x42] {
            assert_eq!(RfProtocol::from(raw).nci_id(), raw);
        }
    }
}
