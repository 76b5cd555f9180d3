//! The matching protocol.
//!
//! [`Matcher`] is what assertions consume. [`TypeSafeMatcher`] is what
//! matcher authors (and generated code) implement; every implementor is a
//! [`Matcher`] through the blanket impl below.

use crate::description::Description;

/// A predicate over `T` that can explain itself.
pub trait Matcher<T: ?Sized> {
    /// Whether `item` satisfies this matcher.
    fn matches(&self, item: &T) -> bool;

    /// Describe what a matching item looks like.
    fn describe_to(&self, description: &mut Description);

    /// Describe why `item` did not match. Only meaningful after `matches`
    /// returned `false` for the same item.
    fn describe_mismatch(&self, item: &T, description: &mut Description);
}

/// The three-operation protocol implemented by concrete matchers.
pub trait TypeSafeMatcher<T: ?Sized> {
    fn describe_to(&self, description: &mut Description);

    fn matches_safely(&self, item: &T) -> bool;

    fn describe_mismatch_safely(&self, item: &T, description: &mut Description);
}

impl<T, M> Matcher<T> for M
where
    T: ?Sized,
    M: TypeSafeMatcher<T>,
{
    fn matches(&self, item: &T) -> bool {
        self.matches_safely(item)
    }

    fn describe_to(&self, description: &mut Description) {
        <M as TypeSafeMatcher<T>>::describe_to(self, description);
    }

    fn describe_mismatch(&self, item: &T, description: &mut Description) {
        self.describe_mismatch_safely(item, description);
    }
}
