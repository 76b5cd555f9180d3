// @generated by beanmatch-build. Do not edit by hand.
// based-on: crate::SimplePojo

#![allow(dead_code, clippy::new_without_default)]
use super::SimplePojo;
/// Fluent matcher for the properties of [`SimplePojo`].
pub struct SimplePojoMatcher {
    bean_property_matcher: ::beanmatch::BeanPropertyMatcher<SimplePojo>,
}
impl SimplePojoMatcher {
    pub fn new() -> Self {
        Self {
            bean_property_matcher: ::beanmatch::BeanPropertyMatcher::new(),
        }
    }
    pub fn with_simple_prop<M>(mut self, matcher: M) -> Self
    where
        M: ::beanmatch::Matcher<dyn ::beanmatch::PropertyValue> + 'static,
    {
        self.bean_property_matcher.with("simple_prop", |item| &item.simple_prop, matcher);
        self
    }
}
impl ::beanmatch::TypeSafeMatcher<SimplePojo> for SimplePojoMatcher {
    fn describe_to(&self, description: &mut ::beanmatch::Description) {
        ::beanmatch::Matcher::<SimplePojo>::describe_to(&self.bean_property_matcher, description);
    }
    fn matches_safely(&self, item: &SimplePojo) -> bool {
        ::beanmatch::Matcher::<SimplePojo>::matches(&self.bean_property_matcher, item)
    }
    fn describe_mismatch_safely(
        &self,
        item: &SimplePojo,
        description: &mut ::beanmatch::Description,
    ) {
        ::beanmatch::Matcher::<
            SimplePojo,
        >::describe_mismatch(&self.bean_property_matcher, item, description);
    }
}
impl ::beanmatch::GeneratedMatcher for SimplePojoMatcher {
    const GENERATED_BY: &'static str = "beanmatch-build";
    const BASED_ON: &'static str = "crate::SimplePojo";
}
/// Creates a [`SimplePojoMatcher`] with no property expectations.
pub fn is_simple_pojo() -> SimplePojoMatcher {
    SimplePojoMatcher::new()
}
