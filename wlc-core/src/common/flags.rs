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

//! A small bit-set newtype generator shared by the module, device-manager and
//! discovery flag words.

/// Declares a `Copy` newtype over an integer with named single-bit constants
/// and the usual set operations.
macro_rules! flag_set {
    (
        $(#[$outer:meta])*
        $vis:vis struct $name:ident: $repr:ty {
            $(
                $(#[$inner:meta])*
                const $flag:ident = $value:expr;
            )+
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
        $vis struct $name($repr);

        impl $name {
            $(
                $(#[$inner])*
                pub const $flag: Self = Self($value);
            )+

            /// The set with no flags raised.
            pub const fn empty() -> Self {
                Self(0)
            }

            /// Wraps a raw flag word without checking for unnamed bits.
            pub const fn from_bits(bits: $repr) -> Self {
                Self(bits)
            }

            /// The raw flag word.
            pub const fn bits(self) -> $repr {
                self.0
            }

            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// `true` if every flag in `other` is also raised in `self`.
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// `true` if at least one flag in `other` is raised in `self`.
            pub const fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            pub const fn union(self, other: Self) -> Self {
                Self(self.0 | other.0)
            }

            pub fn insert(&mut self, other: Self) {
                self.0 |= other.0;
            }

            pub fn remove(&mut self, other: Self) {
                self.0 &= !other.0;
            }
        }

        impl ::std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                self.union(rhs)
            }
        }

        impl ::std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.insert(rhs);
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(stringify!($name))?;
                let mut set = f.debug_set();
                $(
                    if self.contains(Self::$flag) {
                        set.entry(&format_args!("{}", stringify!($flag)));
                    }
                )+
                set.finish()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{:#06x}", self.0)
            }
        }
    };
}

pub(crate) use flag_set;

#[cfg(test)]
mod tests {
    flag_set! {
        struct Sample: u32 {
            const A = 0x01;
            const B = 0x02;
            const C = 0x40;
        }
    }

    #[test]
    fn set_operations_behave_like_a_bit_word() {
        let mut flags = Sample::empty();
        assert!(flags.is_empty());

        flags.insert(Sample::A | Sample::C);
        assert!(flags.contains(Sample::A));
        assert!(!flags.contains(Sample::A | Sample::B));
        assert!(flags.intersects(Sample::A | Sample::B));

        flags.remove(Sample::A);
        assert_eq!(flags.bits(), 0x40);
        assert_eq!(format!("{flags:?}"), "Sample{C}");
        assert_eq!(flags.to_string(), "0x0040");
    }
}
