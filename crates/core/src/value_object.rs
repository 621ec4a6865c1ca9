//! Value objects: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.
//!
//! Equality is structural over an ordered list of *equality components* that each
//! value object enumerates. The hash of a value object is the XOR of its components'
//! hashes, with absent components contributing `0`.

use core::any::Any;
use core::hash::{Hash, Hasher};
use std::hash::DefaultHasher;

use serde::{Deserialize, Serialize};

use crate::rule::{self, BusinessRule, BusinessRuleValidationError};

/// A single attribute participating in a value object's equality.
///
/// Implemented for every `'static` type with `PartialEq + Hash`; there is no
/// need to implement it by hand. `f32`/`f64` are not `Hash`, so floating-point
/// attributes are stored as [`FloatBits`] instead.
pub trait EqualityComponent: Any {
    fn as_any(&self) -> &dyn Any;

    /// Equal iff `other` has the same concrete type and compares equal.
    fn component_eq(&self, other: &dyn EqualityComponent) -> bool;

    fn component_hash(&self) -> u64;
}

impl<T: Any + PartialEq + Hash> EqualityComponent for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn component_eq(&self, other: &dyn EqualityComponent) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn component_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Floating-point attribute compared and hashed by its bit pattern.
///
/// `NaN` equals itself, and `0.0` and `-0.0` are different values.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloatBits(pub f64);

impl FloatBits {
    pub fn get(self) -> f64 {
        self.0
    }
}

impl PartialEq for FloatBits {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for FloatBits {}

impl Hash for FloatBits {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl From<f64> for FloatBits {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<f32> for FloatBits {
    fn from(value: f32) -> Self {
        Self(f64::from(value))
    }
}

/// Ordered equality components; `None` marks an absent attribute.
pub type Components<'a> = Vec<Option<&'a dyn EqualityComponent>>;

/// Wrap a present attribute as an equality component.
pub fn component<T: EqualityComponent>(value: &T) -> Option<&dyn EqualityComponent> {
    Some(value)
}

/// Wrap an optional attribute; `None` stays absent.
pub fn optional_component<T: EqualityComponent>(
    value: Option<&T>,
) -> Option<&dyn EqualityComponent> {
    value.map(|v| v as &dyn EqualityComponent)
}

/// Value object trait: structural equality over [`equality_components`].
///
/// Implementations must enumerate the same attributes, in the same order, on every
/// call. Use [`impl_value_object_eq!`](crate::impl_value_object_eq) to wire
/// `PartialEq`, `Eq` and `Hash` to these semantics.
///
/// ```
/// use sharedkernel_core::impl_value_object_eq;
/// use sharedkernel_core::value_object::{Components, ValueObject, component};
///
/// #[derive(Debug, Clone)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {
///     fn equality_components(&self) -> Components<'_> {
///         vec![component(&self.amount), component(&self.currency)]
///     }
/// }
///
/// impl_value_object_eq!(Money);
///
/// let a = Money { amount: 100, currency: "USD".to_string() };
/// let b = Money { amount: 100, currency: "USD".to_string() };
/// assert_eq!(a, b);
/// ```
///
/// [`equality_components`]: ValueObject::equality_components
pub trait ValueObject: 'static {
    /// The attributes that determine equality and hash, in a fixed order.
    fn equality_components(&self) -> Components<'_>;

    /// Pairwise, in-order comparison of equality components.
    fn equals(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        components_equal(&self.equality_components(), &other.equality_components())
    }

    /// Equality against a value of unknown type; `false` for any other concrete type.
    fn eq_any(&self, other: &dyn Any) -> bool
    where
        Self: Sized,
    {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self.equals(other))
    }

    /// XOR fold of the component hashes, absent components hashing to `0`.
    fn structural_hash(&self) -> u64 {
        self.equality_components()
            .iter()
            .map(|c| c.map_or(0, |c| c.component_hash()))
            .fold(0, |acc, h| acc ^ h)
    }

    /// Evaluate a business rule on behalf of the value object.
    fn check_rule<R: BusinessRule + ?Sized>(
        rule: &R,
    ) -> Result<(), BusinessRuleValidationError>
    where
        Self: Sized,
    {
        rule::check_rule(rule)
    }
}

fn components_equal(left: &Components<'_>, right: &Components<'_>) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .copied()
            .zip(right.iter().copied())
            .all(|pair| match pair {
                (None, None) => true,
                (Some(l), Some(r)) => l.component_eq(r),
                _ => false,
            })
}

/// Equality treating `None` as an absent operand: both absent are equal, one
/// absent is not, otherwise [`ValueObject::equals`].
pub fn equal_operator<V: ValueObject>(left: Option<&V>, right: Option<&V>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(l), Some(r)) => l.equals(r),
        _ => false,
    }
}

pub fn not_equal_operator<V: ValueObject>(left: Option<&V>, right: Option<&V>) -> bool {
    !equal_operator(left, right)
}

/// Implement `PartialEq`, `Eq` and `Hash` for a [`ValueObject`] using its
/// equality components.
#[macro_export]
macro_rules! impl_value_object_eq {
    ($t:ty) => {
        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::value_object::ValueObject::equals(self, other)
            }
        }

        impl ::core::cmp::Eq for $t {}

        impl ::core::hash::Hash for $t {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                state.write_u64($crate::value_object::ValueObject::structural_hash(self));
            }
        }
    };
}
