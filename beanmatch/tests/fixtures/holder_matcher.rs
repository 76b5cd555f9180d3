// @generated by beanmatch-build. Do not edit by hand.
// based-on: crate::Holder

#![allow(dead_code, clippy::new_without_default)]
use super::Holder;
/// Fluent matcher for the properties of [`Holder`].
pub struct HolderMatcher {
    bean_property_matcher: ::beanmatch::BeanPropertyMatcher<Holder>,
}
impl HolderMatcher {
    pub fn new() -> Self {
        Self {
            bean_property_matcher: ::beanmatch::BeanPropertyMatcher::new(),
        }
    }
    pub fn with_inner<M>(mut self, matcher: M) -> Self
    where
        M: ::beanmatch::Matcher<dyn ::beanmatch::PropertyValue> + 'static,
    {
        self.bean_property_matcher.with("inner", |item| &item.inner, matcher);
        self
    }
    pub fn with_label<M>(mut self, matcher: M) -> Self
    where
        M: ::beanmatch::Matcher<dyn ::beanmatch::PropertyValue> + 'static,
    {
        self.bean_property_matcher.with("label", |item| &item.label, matcher);
        self
    }
}
impl ::beanmatch::TypeSafeMatcher<Holder> for HolderMatcher {
    fn describe_to(&self, description: &mut ::beanmatch::Description) {
        ::beanmatch::Matcher::<Holder>::describe_to(&self.bean_property_matcher, description);
    }
    fn matches_safely(&self, item: &Holder) -> bool {
        ::beanmatch::Matcher::<Holder>::matches(&self.bean_property_matcher, item)
    }
    fn describe_mismatch_safely(
        &self,
        item: &Holder,
        description: &mut ::beanmatch::Description,
    ) {
        ::beanmatch::Matcher::<
            Holder,
        >::describe_mismatch(&self.bean_property_matcher, item, description);
    }
}
impl ::beanmatch::GeneratedMatcher for HolderMatcher {
    const GENERATED_BY: &'static str = "beanmatch-build";
    const BASED_ON: &'static str = "crate::Holder";
}
/// Creates a [`HolderMatcher`] with no property expectations.
pub fn is_holder() -> HolderMatcher {
    HolderMatcher::new()
}
