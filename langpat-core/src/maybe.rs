//! Zero-or-one value type.
//!
//! [`Maybe<T>`] makes absence explicit in the type instead of relying on a
//! sentinel. Code that still hands out optional values converts at the
//! boundary with [`Maybe::from_nullable`] (or [`IntoMaybe::into_maybe`]) and
//! works with `Maybe` from there on.
//!
//! ```
//! use langpat_core::Maybe;
//!
//! let settings = std::collections::HashMap::from([("port", "9000")]);
//! let port = Maybe::from_nullable(settings.get("port"))
//!     .bind(|raw| Maybe::from_nullable(raw.parse::<u16>().ok()))
//!     .match_with(8080, |port| port);
//! assert_eq!(port, 9000);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ContractResult, ContractViolation};

// ============================================================================
// MAYBE TYPE
// ============================================================================

/// Either exactly one value (`Just`) or none at all (`Nothing`).
///
/// Equality and hashing are structural: two `Nothing`s are equal, two `Just`s
/// are equal when their payloads are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Maybe<T> {
    /// No value present
    #[default]
    Nothing,
    /// A present value
    Just(T),
}

impl<T> Maybe<T> {
    /// Wrap a present value.
    pub fn some(value: T) -> Self {
        Maybe::Just(value)
    }

    /// The absent value. Every call compares equal to every other.
    pub const fn none() -> Self {
        Maybe::Nothing
    }

    /// Convert a possibly-absent value at an ingress boundary.
    pub fn from_nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Maybe::Just(v),
            None => Maybe::Nothing,
        }
    }

    /// Wrap a value that the caller promises is present.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::AbsentValue`] when `value` is `None`.
    pub fn try_some(value: Option<T>) -> ContractResult<Self> {
        value
            .map(Maybe::Just)
            .ok_or(ContractViolation::AbsentValue { parameter: "value" })
    }

    /// Collect a sequence that must hold zero or one element.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::MultipleElements`] as soon as a second
    /// item is pulled. The rest of the sequence is left unread.
    pub fn try_from_iter<I>(iter: I) -> ContractResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut iter = iter.into_iter();
        let first = match iter.next() {
            Some(first) => first,
            None => return Ok(Maybe::Nothing),
        };
        if iter.next().is_some() {
            return Err(ContractViolation::MultipleElements);
        }
        Ok(Maybe::Just(first))
    }

    /// Check if a value is present.
    pub fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// Check if no value is present.
    pub fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Eliminate the `Maybe`: `nothing` when absent, `just(value)` otherwise.
    pub fn match_with<R, F>(self, nothing: R, just: F) -> R
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Maybe::Just(v) => just(v),
            Maybe::Nothing => nothing,
        }
    }

    /// Like [`match_with`](Self::match_with), borrowing the payload.
    pub fn match_with_ref<R, F>(&self, nothing: R, just: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        match self {
            Maybe::Just(v) => just(v),
            Maybe::Nothing => nothing,
        }
    }

    /// Chain a computation that may itself produce nothing.
    ///
    /// If `self` is `Just(t)`, returns `f(t)`. Otherwise returns `Nothing`
    /// without calling `f`.
    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Just(v) => f(v),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Map the present value.
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Just(v) => Maybe::Just(f(v)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Apply `f` to a value that must be present.
    ///
    /// # Errors
    ///
    /// Returns [`ContractViolation::AbsentValue`] when called on `Nothing`.
    pub fn traverse<R, F>(self, f: F) -> ContractResult<R>
    where
        F: FnOnce(T) -> R,
    {
        match self {
            Maybe::Just(v) => Ok(f(v)),
            Maybe::Nothing => Err(ContractViolation::AbsentValue { parameter: "self" }),
        }
    }

    /// Keep the value only if it satisfies `predicate`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Maybe::Just(v) if predicate(&v) => Maybe::Just(v),
            _ => Maybe::Nothing,
        }
    }

    /// Borrow the payload.
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Just(v) => Maybe::Just(v),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Extract the value or return `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Just(v) => v,
            Maybe::Nothing => default,
        }
    }

    /// Extract the value or compute a default.
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Just(v) => v,
            Maybe::Nothing => f(),
        }
    }

    /// Convert back to a std `Option` for interop at an egress boundary.
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Just(v) => Some(v),
            Maybe::Nothing => None,
        }
    }

    /// Iterate over zero or one borrowed items.
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }
}

impl<T: Clone> Maybe<&T> {
    /// Clone a borrowed payload.
    pub fn cloned(self) -> Maybe<T> {
        self.map(|v| v.clone())
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_nullable(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Extension for converting std `Option` values at a boundary.
pub trait IntoMaybe<T> {
    /// Convert into a [`Maybe`].
    fn into_maybe(self) -> Maybe<T>;
}

impl<T> IntoMaybe<T> for Option<T> {
    fn into_maybe(self) -> Maybe<T> {
        Maybe::from_nullable(self)
    }
}

// ============================================================================
// SERDE
// ============================================================================

// Serialized exactly like `Option<T>`: the payload, or null.
impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Maybe::Just(v) => serializer.serialize_some(v),
            Maybe::Nothing => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Maybe::from_nullable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_none_equals_none() {
        assert_eq!(Maybe::<i32>::none(), Maybe::<i32>::none());
        assert_eq!(Maybe::<String>::none(), Maybe::default());
    }

    #[test]
    fn test_from_nullable() {
        assert_eq!(Maybe::from_nullable(Some("apples")), Maybe::some("apples"));
        assert_eq!(Maybe::<&str>::from_nullable(None), Maybe::none());
        assert_eq!(None::<Vec<String>>.into_maybe(), Maybe::none());
    }

    #[test]
    fn test_try_some_rejects_absent() {
        assert_eq!(Maybe::try_some(Some(7)), Ok(Maybe::Just(7)));
        assert_eq!(
            Maybe::<i32>::try_some(None),
            Err(ContractViolation::AbsentValue { parameter: "value" })
        );
    }

    #[test]
    fn test_is_nothing_set_correctly() {
        let nothing = Maybe::<i32>::none();
        assert!(nothing.is_nothing());
        assert!(!nothing.is_just());

        let just = Maybe::some(4);
        assert!(just.is_just());
        assert!(!just.is_nothing());
    }

    #[test]
    fn test_match_with() {
        assert_eq!(Maybe::some("test").match_with("", |s| s), "test");
        assert_eq!(Maybe::<&str>::none().match_with("default", |s| s), "default");
        assert_eq!(Maybe::some(String::from("abc")).match_with_ref(0, |s| s.len()), 3);
    }

    #[test]
    fn test_traverse() {
        assert_eq!(Maybe::some("apples").traverse(|s| s), Ok("apples"));
        assert!(matches!(
            Maybe::<&str>::none().traverse(|s| s.len()),
            Err(ContractViolation::AbsentValue { .. })
        ));
    }

    #[test]
    fn test_bind_skips_on_nothing() {
        let mut called = false;
        let result: Maybe<i32> = Maybe::<i32>::none().bind(|v| {
            called = true;
            Maybe::some(v + 1)
        });
        assert!(!called);
        assert!(result.is_nothing());
    }

    #[test]
    fn test_bind_chains_lookups() {
        let parse = |s: &str| Maybe::from_nullable(s.parse::<i32>().ok());
        let positive = |n: i32| if n > 0 { Maybe::some(n) } else { Maybe::none() };

        assert_eq!(Maybe::some("12").bind(parse).bind(positive), Maybe::some(12));
        assert_eq!(Maybe::some("-3").bind(parse).bind(positive), Maybe::none());
        assert_eq!(Maybe::some("x").bind(parse).bind(positive), Maybe::none());
    }

    #[test]
    fn test_filter() {
        assert_eq!(Maybe::some(4).filter(|n| n % 2 == 0), Maybe::some(4));
        assert_eq!(Maybe::some(3).filter(|n| n % 2 == 0), Maybe::none());
    }

    #[test]
    fn test_try_from_iter() {
        assert_eq!(Maybe::try_from_iter(Vec::<i32>::new()), Ok(Maybe::Nothing));
        assert_eq!(Maybe::try_from_iter(vec![1]), Ok(Maybe::Just(1)));
        assert_eq!(
            Maybe::try_from_iter(vec![1, 2, 3]),
            Err(ContractViolation::MultipleElements)
        );
    }

    #[test]
    fn test_try_from_iter_stops_at_second_item() {
        assert_eq!(
            Maybe::try_from_iter(0u8..),
            Err(ContractViolation::MultipleElements)
        );

        let mut pulled = 0;
        let result = Maybe::try_from_iter((0..1000).inspect(|_| pulled += 1));
        assert_eq!(result, Err(ContractViolation::MultipleElements));
        assert_eq!(pulled, 2);
    }

    #[test]
    fn test_sequence_view() {
        let just = Maybe::some("only");
        assert_eq!(just.iter().count(), 1);
        assert_eq!(just.into_iter().collect::<Vec<_>>(), vec!["only"]);

        let nothing = Maybe::<&str>::none();
        assert_eq!((&nothing).into_iter().count(), 0);
        assert_eq!(nothing.into_iter().next().unwrap_or("None"), "None");
    }

    #[test]
    fn test_option_roundtrip() {
        let opt: Option<i32> = Maybe::some(5).into();
        assert_eq!(opt, Some(5));
        let back: Maybe<i32> = opt.into();
        assert_eq!(back, Maybe::some(5));
    }

    #[test]
    fn test_serde_shape() {
        assert_eq!(serde_json::to_string(&Maybe::some(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&Maybe::<i32>::none()).unwrap(), "null");
        let parsed: Maybe<String> = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(parsed, Maybe::some("x".to_string()));
        let parsed: Maybe<String> = serde_json::from_str("null").unwrap();
        assert!(parsed.is_nothing());
    }

    #[test]
    fn test_equal_values_hash_equal() {
        assert_eq!(hash_of(&Maybe::some("test")), hash_of(&Maybe::some("test")));
        assert_eq!(hash_of(&Maybe::<u8>::none()), hash_of(&Maybe::<u8>::none()));
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(256))]

        /// Property: Matching a present value applies the function to it.
        #[test]
        fn prop_match_just_applies_function(x in any::<i64>(), default in any::<i64>()) {
            let f = |v: i64| v.wrapping_mul(3);
            prop_assert_eq!(Maybe::some(x).match_with(default, f), f(x));
        }

        /// Property: Matching nothing returns the default untouched.
        #[test]
        fn prop_match_nothing_returns_default(default in ".*") {
            let out = Maybe::<String>::none().match_with(default.clone(), |s| s + "!");
            prop_assert_eq!(out, default);
        }

        /// Property: Some(x) == Some(y) iff x == y.
        #[test]
        fn prop_equality_follows_payload(x in any::<u16>(), y in any::<u16>()) {
            prop_assert_eq!(Maybe::some(x) == Maybe::some(y), x == y);
            prop_assert_ne!(Maybe::some(x), Maybe::none());
        }

        /// Property: Identity laws for bind with the unit function.
        #[test]
        fn prop_bind_identity_laws(x in any::<i32>(), present in any::<bool>()) {
            let m = if present { Maybe::some(x) } else { Maybe::none() };
            prop_assert_eq!(m.bind(Maybe::some), m);
            prop_assert_eq!(Maybe::some(x).bind(|v| Maybe::some(v)), Maybe::some(x));
            prop_assert_eq!(Maybe::some(x).match_with(0, |v| v), x);
        }

        /// Property: Bind is associative.
        #[test]
        fn prop_bind_associative(x in any::<i32>()) {
            let f = |v: i32| if v % 2 == 0 { Maybe::some(v / 2) } else { Maybe::none() };
            let g = |v: i32| v.checked_add(1).map_or(Maybe::none(), Maybe::some);
            prop_assert_eq!(Maybe::some(x).bind(f).bind(g), Maybe::some(x).bind(|v| f(v).bind(g)));
        }
    }
}
