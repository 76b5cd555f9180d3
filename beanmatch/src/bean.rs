//! The per-property matcher registry every generated matcher delegates to.

use crate::description::Description;
use crate::matcher::{Matcher, TypeSafeMatcher};
use crate::property::{PropertyAccessor, PropertyValue};

/// Provenance recorded on every generated matcher.
///
/// `BASED_ON` is the fully qualified path of the struct the matcher was
/// generated from, so tooling can tell when a generated file no longer
/// matches its source type.
pub trait GeneratedMatcher {
    const GENERATED_BY: &'static str;
    const BASED_ON: &'static str;
}

struct PropertyMatcher<T> {
    name: &'static str,
    accessor: PropertyAccessor<T>,
    matcher: Box<dyn Matcher<dyn PropertyValue>>,
}

/// Maps property names of `T` to the matchers registered for them and
/// applies all of them to a candidate `T`.
///
/// Registration order is kept for descriptions. Registering a property a
/// second time replaces the earlier matcher.
pub struct BeanPropertyMatcher<T> {
    type_name: &'static str,
    property_matchers: Vec<PropertyMatcher<T>>,
}

impl<T: 'static> BeanPropertyMatcher<T> {
    pub fn new() -> Self {
        Self {
            type_name: simple_type_name(std::any::type_name::<T>()),
            property_matchers: Vec::new(),
        }
    }
}

impl<T: 'static> Default for BeanPropertyMatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BeanPropertyMatcher<T> {
    /// Register `matcher` for the property `name`, read through `accessor`.
    pub fn with<M>(&mut self, name: &'static str, accessor: PropertyAccessor<T>, matcher: M) -> &mut Self
    where
        M: Matcher<dyn PropertyValue> + 'static,
    {
        let entry = PropertyMatcher {
            name,
            accessor,
            matcher: Box::new(matcher),
        };
        match self.property_matchers.iter_mut().find(|existing| existing.name == name) {
            Some(existing) => *existing = entry,
            None => self.property_matchers.push(entry),
        }
        self
    }

    /// Names of the properties with a registered matcher, in registration order.
    pub fn property_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.property_matchers.iter().map(|pm| pm.name)
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl<T> TypeSafeMatcher<T> for BeanPropertyMatcher<T> {
    fn describe_to(&self, description: &mut Description) {
        description.append_text("an instance of ").append_text(self.type_name);
        for (index, pm) in self.property_matchers.iter().enumerate() {
            description.append_text(if index == 0 { " with " } else { " and " });
            description.append_text(pm.name).append_text(" ");
            pm.matcher.describe_to(description);
        }
    }

    fn matches_safely(&self, item: &T) -> bool {
        self.property_matchers
            .iter()
            .all(|pm| pm.matcher.matches((pm.accessor)(item)))
    }

    fn describe_mismatch_safely(&self, item: &T, description: &mut Description) {
        let mut first = true;
        for pm in &self.property_matchers {
            let value = (pm.accessor)(item);
            if pm.matcher.matches(value) {
                continue;
            }
            if !first {
                description.append_text(", ");
            }
            first = false;
            description.append_text(pm.name).append_text(" ");
            pm.matcher.describe_mismatch(value, description);
        }
    }
}

fn simple_type_name(full: &'static str) -> &'static str {
    full.rsplit("::").next().unwrap_or(full)
}
