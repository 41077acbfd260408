use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::codec::{PropertyValue, Scalar, ScalarType, ScalarValue};

use super::naming;

type ReadFn<T> = Box<dyn Fn(&T) -> PropertyValue + Send + Sync>;
type WriteFn<T> = Box<dyn Fn(&mut T, ScalarValue) -> bool + Send + Sync>;

// -----------------------------------------------------------------------------
// Getter

/// A read accessor.
pub struct Getter<T> {
    ident: Cow<'static, str>,
    read: ReadFn<T>,
}

impl<T: 'static> Getter<T> {
    /// Creates a getter from its conventional identifier, e.g. `getAppName`.
    pub fn new(
        ident: impl Into<Cow<'static, str>>,
        read: impl Fn(&T) -> PropertyValue + Send + Sync + 'static,
    ) -> Self {
        Self {
            ident: ident.into(),
            read: Box::new(read),
        }
    }
}

impl<T> Getter<T> {
    /// The accessor identifier.
    #[inline]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// The property this getter exposes.
    #[inline]
    pub fn property_name(&self) -> String {
        naming::property_name(&self.ident)
    }

    /// Invokes the getter.
    #[inline]
    pub fn read(&self, instance: &T) -> PropertyValue {
        (self.read)(instance)
    }
}

impl<T> fmt::Debug for Getter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Getter")
            .field("ident", &self.ident)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Setter

/// The result of invoking a setter.
///
/// Setters returning `()` always succeed. Setters returning `Result`
/// fail on `Err`, which the mapper treats like any other skipped property.
pub trait SetterOutcome {
    fn is_applied(self) -> bool;
}

impl SetterOutcome for () {
    #[inline(always)]
    fn is_applied(self) -> bool {
        true
    }
}

impl<R, E> SetterOutcome for Result<R, E> {
    #[inline(always)]
    fn is_applied(self) -> bool {
        self.is_ok()
    }
}

/// A write accessor taking exactly one supported scalar.
pub struct Setter<T> {
    ident: Cow<'static, str>,
    param: ScalarType,
    write: WriteFn<T>,
}

impl<T: 'static> Setter<T> {
    /// Creates a setter from its identifier, parameter type and an
    /// untyped write function. The function reports whether it applied.
    pub fn new(
        ident: impl Into<Cow<'static, str>>,
        param: ScalarType,
        write: impl Fn(&mut T, ScalarValue) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            ident: ident.into(),
            param,
            write: Box::new(write),
        }
    }

    /// Creates a setter from a typed method; the parameter type
    /// is taken from the method signature.
    ///
    /// ```
    /// use vc_marshal::access::Setter;
    /// use vc_marshal::codec::ScalarType;
    ///
    /// struct Window { width: i32 }
    ///
    /// impl Window {
    ///     fn set_width(&mut self, width: i32) { self.width = width; }
    /// }
    ///
    /// let setter = Setter::typed("setWidth", Window::set_width);
    /// assert_eq!(setter.param(), ScalarType::Int);
    /// ```
    pub fn typed<P, R>(ident: impl Into<Cow<'static, str>>, write: fn(&mut T, P) -> R) -> Self
    where
        P: Scalar + 'static,
        R: SetterOutcome + 'static,
    {
        Self::new(ident, P::TYPE, move |instance, value| {
            match P::from_scalar(value) {
                Some(value) => write(instance, value).is_applied(),
                None => false,
            }
        })
    }
}

impl<T> Setter<T> {
    /// The accessor identifier.
    #[inline]
    pub fn ident(&self) -> &str {
        &self.ident
    }

    /// The declared parameter type.
    #[inline]
    pub fn param(&self) -> ScalarType {
        self.param
    }

    /// Invokes the setter, returning whether the value was applied.
    #[inline]
    pub fn write(&self, instance: &mut T, value: ScalarValue) -> bool {
        (self.write)(instance, value)
    }
}

impl<T> fmt::Debug for Setter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setter")
            .field("ident", &self.ident)
            .field("param", &self.param)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// AccessorTable

/// The accessors declared for one type, in declaration order.
pub struct AccessorTable<T> {
    getters: Vec<Getter<T>>,
    setters: Vec<Setter<T>>,
}

impl<T> Default for AccessorTable<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AccessorTable<T> {
    /// Creates an empty table.
    #[inline]
    pub const fn new() -> Self {
        Self {
            getters: Vec::new(),
            setters: Vec::new(),
        }
    }

    #[inline]
    pub fn push_getter(&mut self, getter: Getter<T>) {
        self.getters.push(getter);
    }

    #[inline]
    pub fn push_setter(&mut self, setter: Setter<T>) {
        self.setters.push(setter);
    }

    #[inline]
    pub fn with_getter(mut self, getter: Getter<T>) -> Self {
        self.push_getter(getter);
        self
    }

    #[inline]
    pub fn with_setter(mut self, setter: Setter<T>) -> Self {
        self.push_setter(setter);
        self
    }

    #[inline]
    pub fn getters(&self) -> &[Getter<T>] {
        &self.getters
    }

    #[inline]
    pub fn setters(&self) -> &[Setter<T>] {
        &self.setters
    }

    /// Finds the setter named `setter_name` whose parameter is exactly the
    /// type named `type_name`.
    ///
    /// `None` if the type name is not supported or no setter matches both.
    pub fn find_setter(&self, setter_name: &str, type_name: &str) -> Option<&Setter<T>> {
        let param = ScalarType::from_type_name(type_name)?;
        self.setters
            .iter()
            .find(|setter| setter.param == param && setter.ident == setter_name)
    }
}

impl<T> fmt::Debug for AccessorTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorTable")
            .field("getters", &self.getters)
            .field("setters", &self.setters)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Accessible

/// A type whose accessors can be enumerated.
///
/// Usually implemented with [`#[accessors]`](crate::accessors), but a
/// hand-written table is equally valid:
///
/// ```
/// use vc_marshal::access::{Accessible, AccessorTable, Getter, Setter};
/// use vc_marshal::codec::IntoProperty;
///
/// #[derive(Default)]
/// struct Counter { count: i64 }
///
/// impl Counter {
///     fn set_count(&mut self, count: i64) { self.count = count; }
/// }
///
/// impl Accessible for Counter {
///     fn accessor_table() -> AccessorTable<Self> {
///         AccessorTable::new()
///             .with_getter(Getter::new("getCount", |this: &Self| this.count.into_property()))
///             .with_setter(Setter::typed("setCount", Self::set_count))
///     }
/// }
///
/// let table = Counter::accessor_table();
/// assert!(table.find_setter("setCount", "long").is_some());
/// assert!(table.find_setter("setCount", "java.lang.Long").is_none());
/// ```
pub trait Accessible: Sized + 'static {
    /// Builds the accessor table. Called once per `save` or `load`.
    fn accessor_table() -> AccessorTable<Self>;
}

// -----------------------------------------------------------------------------
// Tests
