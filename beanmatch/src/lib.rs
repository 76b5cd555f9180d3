//! Hamcrest-style matchers for Rust structs.
//!
//! Test code normally does not implement matchers for its structs by hand:
//! `beanmatch-build` generates a `<Type>Matcher` per struct with one
//! `with_<field>` method per field. This crate is the runtime those generated
//! files depend on: the matching protocol, the per-property registry the
//! generated matchers delegate to, and a small set of core matchers.
//!
//! # Example
//!
//! ```ignore
//! use beanmatch::{assert_that, equal_to, not};
//! use crate::models::user_matcher::is_user;
//!
//! assert_that!(user, is_user().with_name(equal_to("alice".to_string())).with_age(not(equal_to(0u32))));
//! ```

mod bean;
mod description;
mod errors;
mod matcher;
pub mod matchers;
mod property;

pub use bean::{BeanPropertyMatcher, GeneratedMatcher};
pub use description::Description;
pub use errors::AssertionError;
pub use matcher::{Matcher, TypeSafeMatcher};
pub use matchers::{anything, equal_to, instance_of, is, not, satisfies, typed};
pub use property::{PropertyAccessor, PropertyValue};

/// Check `actual` against `matcher`, describing the failure on mismatch.
pub fn check<T, M>(actual: &T, matcher: &M) -> Result<(), AssertionError>
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    if matcher.matches(actual) {
        return Ok(());
    }

    let mut expected = Description::new();
    matcher.describe_to(&mut expected);
    let mut mismatch = Description::new();
    matcher.describe_mismatch(actual, &mut mismatch);

    Err(AssertionError {
        expected: expected.into_string(),
        mismatch: mismatch.into_string(),
    })
}

/// Assert that a value satisfies a matcher, panicking with the matcher's
/// description otherwise.
#[macro_export]
macro_rules! assert_that {
    ($actual:expr, $matcher:expr $(,)?) => {
        if let Err(error) = $crate::check(&$actual, &$matcher) {
            panic!("{}", error);
        }
    };
}
