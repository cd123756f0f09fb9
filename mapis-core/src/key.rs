//! Selector keys and declared variant sets.

use std::borrow::Cow;

/// A value usable as a handler table key.
///
/// Keys are string-representable: strings as-is, booleans as `true`/`false`,
/// integers in decimal. Enums deriving `Variants` implement this through the
/// derive.
pub trait SelectorKey {
    /// The key this value selects.
    fn selector_key(&self) -> Cow<'_, str>;
}

impl SelectorKey for str {
    fn selector_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl SelectorKey for String {
    fn selector_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl SelectorKey for Cow<'_, str> {
    fn selector_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_ref())
    }
}

impl SelectorKey for bool {
    fn selector_key(&self) -> Cow<'_, str> {
        Cow::Borrowed(if *self { "true" } else { "false" })
    }
}

impl SelectorKey for char {
    fn selector_key(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl<K: SelectorKey + ?Sized> SelectorKey for &K {
    fn selector_key(&self) -> Cow<'_, str> {
        (**self).selector_key()
    }
}

macro_rules! integer_keys {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SelectorKey for $ty {
                fn selector_key(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

integer_keys!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// A closed set of selector values.
///
/// Declaring the set lets a builder check at build time that every value has
/// a handler and that no handler is registered for an unknown value. Usually
/// derived with `#[derive(Variants)]` on an enum.
pub trait Variants {
    /// Every key this type can select, in declaration order.
    const VARIANTS: &'static [&'static str];

    /// The key for this particular value.
    fn variant_key(&self) -> &'static str;
}
