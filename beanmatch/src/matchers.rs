//! Core matchers.
//!
//! Each matcher works on a concrete `V` and on type-erased property values
//! (`dyn PropertyValue`). The latter is what generated `with_*` methods
//! accept; a property of the wrong type simply does not match.

use std::any::Any;
use std::fmt::Debug;
use std::marker::PhantomData;

use crate::description::Description;
use crate::matcher::{Matcher, TypeSafeMatcher};
use crate::property::PropertyValue;

/// Matches everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anything;

pub fn anything() -> Anything {
    Anything
}

impl<T: ?Sized> TypeSafeMatcher<T> for Anything {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("ANYTHING");
    }

    fn matches_safely(&self, _item: &T) -> bool {
        true
    }

    fn describe_mismatch_safely(&self, _item: &T, _description: &mut Description) {}
}

/// Matches values equal to the expected one.
#[derive(Debug, Clone)]
pub struct EqualTo<V> {
    expected: V,
}

pub fn equal_to<V: PartialEq + Debug>(expected: V) -> EqualTo<V> {
    EqualTo { expected }
}

impl<V: PartialEq + Debug> TypeSafeMatcher<V> for EqualTo<V> {
    fn describe_to(&self, description: &mut Description) {
        description.append_value(&self.expected);
    }

    fn matches_safely(&self, item: &V) -> bool {
        *item == self.expected
    }

    fn describe_mismatch_safely(&self, item: &V, description: &mut Description) {
        description.append_text("was ").append_value(item);
    }
}

impl<V: PartialEq + Debug + Any> TypeSafeMatcher<dyn PropertyValue> for EqualTo<V> {
    fn describe_to(&self, description: &mut Description) {
        description.append_value(&self.expected);
    }

    fn matches_safely(&self, item: &dyn PropertyValue) -> bool {
        item.downcast_ref::<V>().is_some_and(|value| *value == self.expected)
    }

    fn describe_mismatch_safely(&self, item: &dyn PropertyValue, description: &mut Description) {
        describe_erased_mismatch::<V>(item, description);
    }
}

/// Decorator that only changes the description: `is <inner>`.
#[derive(Debug, Clone)]
pub struct Is<M> {
    inner: M,
}

pub fn is<M>(inner: M) -> Is<M> {
    Is { inner }
}

impl<T: ?Sized, M: Matcher<T>> TypeSafeMatcher<T> for Is<M> {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("is ");
        self.inner.describe_to(description);
    }

    fn matches_safely(&self, item: &T) -> bool {
        self.inner.matches(item)
    }

    fn describe_mismatch_safely(&self, item: &T, description: &mut Description) {
        self.inner.describe_mismatch(item, description);
    }
}

/// Inverts another matcher.
#[derive(Debug, Clone)]
pub struct Not<M> {
    inner: M,
}

pub fn not<M>(inner: M) -> Not<M> {
    Not { inner }
}

impl<T: ?Sized, M: Matcher<T>> TypeSafeMatcher<T> for Not<M> {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("not ");
        self.inner.describe_to(description);
    }

    fn matches_safely(&self, item: &T) -> bool {
        !self.inner.matches(item)
    }

    fn describe_mismatch_safely(&self, item: &T, description: &mut Description) {
        self.inner.describe_mismatch(item, description);
    }
}

/// Matches property values whose concrete type is `V`.
pub struct InstanceOf<V> {
    marker: PhantomData<fn() -> V>,
}

pub fn instance_of<V: Any>() -> InstanceOf<V> {
    InstanceOf { marker: PhantomData }
}

impl<V: Any> TypeSafeMatcher<dyn PropertyValue> for InstanceOf<V> {
    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("an instance of ")
            .append_text(std::any::type_name::<V>());
    }

    fn matches_safely(&self, item: &dyn PropertyValue) -> bool {
        item.downcast_ref::<V>().is_some()
    }

    fn describe_mismatch_safely(&self, item: &dyn PropertyValue, description: &mut Description) {
        description.append_text("was a ").append_text(item.type_name());
    }
}

/// Matches values accepted by a predicate.
pub struct Satisfies<V, F> {
    description: &'static str,
    predicate: F,
    marker: PhantomData<fn(&V)>,
}

/// Build a matcher from a predicate; `description` is used in failure messages.
pub fn satisfies<V, F>(description: &'static str, predicate: F) -> Satisfies<V, F>
where
    F: Fn(&V) -> bool,
{
    Satisfies {
        description,
        predicate,
        marker: PhantomData,
    }
}

impl<V: Debug, F: Fn(&V) -> bool> TypeSafeMatcher<V> for Satisfies<V, F> {
    fn describe_to(&self, description: &mut Description) {
        description.append_text(self.description);
    }

    fn matches_safely(&self, item: &V) -> bool {
        (self.predicate)(item)
    }

    fn describe_mismatch_safely(&self, item: &V, description: &mut Description) {
        description.append_text("was ").append_value(item);
    }
}

impl<V: Debug + Any, F: Fn(&V) -> bool> TypeSafeMatcher<dyn PropertyValue> for Satisfies<V, F> {
    fn describe_to(&self, description: &mut Description) {
        description.append_text(self.description);
    }

    fn matches_safely(&self, item: &dyn PropertyValue) -> bool {
        item.downcast_ref::<V>().is_some_and(|value| (self.predicate)(value))
    }

    fn describe_mismatch_safely(&self, item: &dyn PropertyValue, description: &mut Description) {
        describe_erased_mismatch::<V>(item, description);
    }
}

/// Lifts a matcher for `V` so it can be registered for a property of type `V`,
/// e.g. a generated matcher for a nested struct.
pub struct Typed<M, V> {
    inner: M,
    marker: PhantomData<fn(&V)>,
}

pub fn typed<V, M: Matcher<V>>(inner: M) -> Typed<M, V> {
    Typed {
        inner,
        marker: PhantomData,
    }
}

impl<V: Any, M: Matcher<V>> TypeSafeMatcher<dyn PropertyValue> for Typed<M, V> {
    fn describe_to(&self, description: &mut Description) {
        self.inner.describe_to(description);
    }

    fn matches_safely(&self, item: &dyn PropertyValue) -> bool {
        item.downcast_ref::<V>().is_some_and(|value| self.inner.matches(value))
    }

    fn describe_mismatch_safely(&self, item: &dyn PropertyValue, description: &mut Description) {
        match item.downcast_ref::<V>() {
            Some(value) => self.inner.describe_mismatch(value, description),
            None => {
                description.append_text("was a ").append_text(item.type_name());
            }
        }
    }
}

fn describe_erased_mismatch<V: Any + Debug>(item: &dyn PropertyValue, description: &mut Description) {
    match item.downcast_ref::<V>() {
        Some(value) => {
            description.append_text("was ").append_value(value);
        }
        None => {
            description.append_text("was a ").append_text(item.type_name());
        }
    }
}
