// @generated by beanmatch-build. Do not edit by hand.
// based-on: crate::Description

#![allow(dead_code, clippy::new_without_default)]
use super::Description;
/// Fluent matcher for the properties of [`Description`].
pub struct DescriptionMatcher {
    bean_property_matcher: ::beanmatch::BeanPropertyMatcher<Description>,
}
impl DescriptionMatcher {
    pub fn new() -> Self {
        Self {
            bean_property_matcher: ::beanmatch::BeanPropertyMatcher::new(),
        }
    }
    pub fn with_text<M>(mut self, matcher: M) -> Self
    where
        M: ::beanmatch::Matcher<dyn ::beanmatch::PropertyValue> + 'static,
    {
        self.bean_property_matcher.with("text", |item| &item.text, matcher);
        self
    }
}
impl ::beanmatch::TypeSafeMatcher<Description> for DescriptionMatcher {
    fn describe_to(&self, description: &mut ::beanmatch::Description) {
        ::beanmatch::Matcher::<Description>::describe_to(&self.bean_property_matcher, description);
    }
    fn matches_safely(&self, item: &Description) -> bool {
        ::beanmatch::Matcher::<Description>::matches(&self.bean_property_matcher, item)
    }
    fn describe_mismatch_safely(
        &self,
        item: &Description,
        description: &mut ::beanmatch::Description,
    ) {
        ::beanmatch::Matcher::<
            Description,
        >::describe_mismatch(&self.bean_property_matcher, item, description);
    }
}
impl ::beanmatch::GeneratedMatcher for DescriptionMatcher {
    const GENERATED_BY: &'static str = "beanmatch-build";
    const BASED_ON: &'static str = "crate::Description";
}
/// Creates a [`DescriptionMatcher`] with no property expectations.
pub fn is_description() -> DescriptionMatcher {
    DescriptionMatcher::new()
}
