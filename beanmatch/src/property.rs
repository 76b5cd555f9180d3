use std::any::Any;

/// A type-erased property value.
///
/// Generated matchers hand every property to its matcher as
/// `&dyn PropertyValue`, so a single matcher type can be registered for any
/// property regardless of the property's concrete type. Implemented for
/// every `'static` type; matchers that print values downcast first.
pub trait PropertyValue: Any {
    fn as_any(&self) -> &dyn Any;

    /// The Rust type name of the concrete value.
    fn type_name(&self) -> &'static str;
}

impl<V: Any> PropertyValue for V {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<V>()
    }
}

impl dyn PropertyValue {
    /// Downcast to the concrete property type.
    pub fn downcast_ref<V: Any>(&self) -> Option<&V> {
        self.as_any().downcast_ref::<V>()
    }
}

/// Reads one property off a bean.
pub type PropertyAccessor<T> = fn(&T) -> &dyn PropertyValue;
