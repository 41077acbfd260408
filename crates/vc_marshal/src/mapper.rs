use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::access::{self, Accessible};
use crate::codec::ScalarType;
use crate::document::{Document, Element, Node};
use crate::report::{LogReporter, Operation, Report, Reporter};
use crate::{DocumentError, LoadError, SaveError};

// -----------------------------------------------------------------------------
// Document shape

/// Name of the root element.
pub const ROOT_NAME: &str = "properties";

/// Attribute naming the type of a property.
pub const TYPE_ATTRIBUTE: &str = "type";

/// Attribute carrying the value of a non-text property.
pub const VALUE_ATTRIBUTE: &str = "value";

// -----------------------------------------------------------------------------
// LoadSummary

/// What a load did with the elements it visited.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Elements whose setter was found, decoded and invoked successfully.
    pub applied: usize,
    /// Elements skipped for any per-property reason.
    pub skipped: usize,
}

// -----------------------------------------------------------------------------
// In-memory halves

/// Builds the document for `instance` from its getters, in table order.
///
/// Each getter becomes one element named after its property. Text values are
/// written as CDATA, everything else as a `value` attribute.
pub fn to_document<T: Accessible>(instance: &T) -> Document {
    let table = T::accessor_table();
    let mut root = Element::new(ROOT_NAME);

    for getter in table.getters() {
        if !access::is_getter(getter.ident(), 0, true) {
            log::trace!("`{}` is not a getter identifier, skipped", getter.ident());
            continue;
        }

        let value = getter.read(instance);
        let mut element = Element::new(getter.property_name());
        element.set_attribute(TYPE_ATTRIBUTE, value.type_name());
        if value.is_text() {
            element.push(Node::CData(value.encode()));
        } else {
            element.set_attribute(VALUE_ATTRIBUTE, value.encode());
        }
        root.push(Node::Element(element));
    }

    Document::with_root(root)
}

/// Applies every direct child element of the root to `instance`.
///
/// The root's own name is not checked. Elements that have no matching
/// setter, fail to decode, or whose setter refuses the value are skipped.
pub fn apply_document<T: Accessible>(document: &Document, instance: &mut T) -> LoadSummary {
    let mut summary = LoadSummary::default();
    let Some(root) = document.root() else {
        return summary;
    };

    let table = T::accessor_table();
    for element in root.elements() {
        let setter_name = access::setter_name(element.name());
        let type_name = element.attribute(TYPE_ATTRIBUTE).unwrap_or_default();

        let Some(setter) = table.find_setter(&setter_name, type_name) else {
            log::trace!("no `{setter_name}({type_name})`, element `{}` skipped", element.name());
            summary.skipped += 1;
            continue;
        };

        let param = setter.param();
        let applied = match extract(element, param).and_then(|text| param.decode(&text)) {
            Some(value) => setter.write(instance, value),
            None => {
                log::trace!("element `{}` has no valid `{type_name}` value", element.name());
                false
            }
        };

        if applied {
            summary.applied += 1;
        } else {
            summary.skipped += 1;
        }
    }

    summary
}

/// The raw text of a property: character data for text types, otherwise
/// the `value` attribute.
fn extract(element: &Element, param: ScalarType) -> Option<String> {
    if param.is_text() {
        Some(element.character_data())
    } else {
        element.attribute(VALUE_ATTRIBUTE).map(Into::into)
    }
}

// -----------------------------------------------------------------------------
// PropertyMapper

/// Persists [`Accessible`] values to one XML file.
///
/// Construction does no I/O. [`save`](Self::save) and [`load`](Self::load)
/// always return; document-level failures go to the mapper's [`Reporter`],
/// which is a [`LogReporter`] unless replaced with
/// [`with_reporter`](Self::with_reporter).
///
/// A mapper holds no state between calls. Concurrent use of one backing file
/// is not coordinated.
///
/// # Examples
///
/// ```no_run
/// use vc_marshal::{PropertyMapper, accessors};
///
/// #[derive(Default)]
/// struct Window {
///     width: i32,
/// }
///
/// #[accessors]
/// impl Window {
///     fn get_width(&self) -> i32 { self.width }
///     fn set_width(&mut self, width: i32) { self.width = width; }
/// }
///
/// let mapper = PropertyMapper::new("window.xml");
/// mapper.save(&Window { width: 800 });
/// let window = mapper.load(Window::default());
/// assert_eq!(window.width, 800);
/// ```
pub struct PropertyMapper {
    path: PathBuf,
    reporter: Box<dyn Reporter>,
}

impl PropertyMapper {
    /// Binds a mapper to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            reporter: Box::new(LogReporter),
        }
    }

    /// Replaces the reporter receiving document-level failures.
    pub fn with_reporter(mut self, reporter: impl Reporter + 'static) -> Self {
        self.reporter = Box::new(reporter);
        self
    }

    /// The backing file.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `instance` to the backing file, reporting any failure.
    pub fn save<T: Accessible>(&self, instance: &T) {
        if let Err(err) = self.try_save(instance) {
            self.reporter
                .report(&Report::new(Operation::Save, &err.path, &err.source));
        }
    }

    /// Writes `instance` to the backing file.
    ///
    /// The whole document is rendered before the file is touched. The write
    /// itself is not atomic.
    pub fn try_save<T: Accessible>(&self, instance: &T) -> Result<(), SaveError> {
        let result = to_document(instance)
            .to_bytes()
            .and_then(|bytes| fs::write(&self.path, bytes).map_err(DocumentError::from));

        result.map_err(|source| SaveError {
            path: self.path.clone(),
            source,
        })
    }

    /// Populates `instance` from the backing file and returns it.
    ///
    /// A missing file leaves `instance` unchanged. An unreadable or malformed
    /// file is reported and also leaves it unchanged.
    pub fn load<T: Accessible>(&self, mut instance: T) -> T {
        if let Err(err) = self.try_load_into(&mut instance) {
            self.reporter
                .report(&Report::new(Operation::Load, &err.path, &err.source));
        }
        instance
    }

    /// Populates `instance` from the backing file.
    ///
    /// Returns an empty summary if the file does not exist. On error,
    /// `instance` has not been modified.
    pub fn try_load_into<T: Accessible>(&self, instance: &mut T) -> Result<LoadSummary, LoadError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("`{}` does not exist, nothing to load", self.path.display());
                return Ok(LoadSummary::default());
            }
            Err(err) => return Err(self.load_error(err.into())),
        };

        let document = Document::parse(&bytes).map_err(|err| self.load_error(err))?;
        Ok(apply_document(&document, instance))
    }

    fn load_error(&self, source: DocumentError) -> LoadError {
        LoadError {
            path: self.path.clone(),
            source,
        }
    }
}

impl fmt::Debug for PropertyMapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyMapper")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;
    use std::sync::{Arc, Mutex};

    use super::{LoadSummary, PropertyMapper, apply_document, to_document};
    use crate::access::{Accessible, AccessorTable, Getter, Setter};
    use crate::codec::{IntoProperty, PropertyValue};
    use crate::document::{Document, Node};
    use crate::report::{Operation, Report, Severity};

    #[derive(Debug, Default, PartialEq)]
    struct Profile {
        name: String,
        age: i32,
        active: bool,
        ratio: Option<f64>,
    }

    impl Profile {
        fn set_name(&mut self, name: String) {
            self.name = name;
        }

        fn set_age(&mut self, age: i32) -> Result<(), &'static str> {
            if age < 0 {
                return Err("negative age");
            }
            self.age = age;
            Ok(())
        }

        fn set_active(&mut self, active: bool) {
            self.active = active;
        }

        fn set_ratio(&mut self, ratio: Option<f64>) {
            self.ratio = ratio;
        }
    }

    impl Accessible for Profile {
        fn accessor_table() -> AccessorTable<Self> {
            AccessorTable::new()
                .with_getter(Getter::new("getName", |this: &Self| this.name.as_str().into_property()))
                .with_getter(Getter::new("getAge", |this: &Self| this.age.into_property()))
                .with_getter(Getter::new("isActive", |this: &Self| this.active.into_property()))
                .with_getter(Getter::new("getRatio", |this: &Self| this.ratio.into_property()))
                .with_getter(Getter::new("getSize", |_: &Self| PropertyValue::opaque(42_u64)))
                .with_getter(Getter::new("get", |_: &Self| 0_i32.into_property()))
                .with_setter(Setter::typed("setName", Self::set_name))
                .with_setter(Setter::typed("setAge", Self::set_age))
                .with_setter(Setter::typed("setActive", Self::set_active))
                .with_setter(Setter::typed("setRatio", Self::set_ratio))
        }
    }

    fn sample() -> Profile {
        Profile {
            name: String::from("<Ada & \"Bob\">"),
            age: 36,
            active: true,
            ratio: Some(0.25),
        }
    }

    #[test]
    fn document_shape() {
        let document = to_document(&sample());
        let root = document.root().unwrap();
        assert_eq!(root.name(), "properties");

        let names: Vec<_> = root.elements().map(|e| e.name()).collect();
        assert_eq!(names, ["name", "age", "active", "ratio", "size"]);

        let elements: Vec<_> = root.elements().collect();

        assert_eq!(elements[0].attribute("type"), Some("java.lang.String"));
        assert_eq!(elements[0].attribute("value"), None);
        assert_eq!(elements[0].children(), [Node::CData(String::from("<Ada & \"Bob\">"))]);

        assert_eq!(elements[1].attribute("type"), Some("int"));
        assert_eq!(elements[1].attribute("value"), Some("36"));

        assert_eq!(elements[2].attribute("type"), Some("boolean"));
        assert_eq!(elements[2].attribute("value"), Some("true"));

        assert_eq!(elements[3].attribute("type"), Some("java.lang.Double"));
        assert_eq!(elements[3].attribute("value"), Some("0.25"));

        assert_eq!(elements[4].attribute("type"), Some("u64"));
        assert_eq!(elements[4].attribute("value"), Some("42"));
    }

    #[test]
    fn absent_values_are_empty() {
        let document = to_document(&Profile::default());
        let ratio = document.root().unwrap().elements().nth(3).unwrap();
        assert_eq!(ratio.attribute("value"), Some(""));
    }

    #[test]
    fn apply_round_trip() {
        let document = to_document(&sample());
        let mut profile = Profile::default();
        let summary = apply_document(&document, &mut profile);

        assert_eq!(profile, sample());
        // `size` has no setter.
        assert_eq!(summary, LoadSummary { applied: 4, skipped: 1 });
    }

    #[test]
    fn per_property_failures_are_skipped() {
        let text = r#"<settings>
            text outside
            <age type="int" value="-3"/>
            <active type="java.lang.Boolean" value="true"/>
            <ratio type="java.lang.Double" value="abc"/>
            <name type="mystery"><![CDATA[x]]></name>
            <name type="java.lang.String">first</name>
            <name type="java.lang.String">second</name>
            <!-- comment -->
        </settings>"#;
        let document = Document::parse_str(text).unwrap();

        let mut profile = Profile::default();
        let summary = apply_document(&document, &mut profile);

        assert_eq!(profile.age, 0);
        assert!(!profile.active);
        assert_eq!(profile.ratio, None);
        assert_eq!(profile.name, "second");
        assert_eq!(summary, LoadSummary { applied: 2, skipped: 4 });
    }

    #[test]
    fn empty_document_applies_nothing() {
        let mut profile = sample();
        let summary = apply_document(&Document::new(), &mut profile);
        assert_eq!(summary, LoadSummary::default());
        assert_eq!(profile, sample());
    }

    #[test]
    fn failures_reach_the_reporter() {
        let dir = tempfile::tempdir().unwrap();
        let seen: Arc<Mutex<Vec<(Operation, Severity)>>> = Arc::default();

        let sink = seen.clone();
        let mapper = PropertyMapper::new(dir.path().join("missing").join("profile.xml"))
            .with_reporter(move |report: &Report<'_>| {
                sink.lock().unwrap().push((report.operation, report.severity()));
            });

        mapper.save(&sample());
        assert!(mapper.try_save(&sample()).is_err());

        // A missing file is not a failure.
        assert_eq!(mapper.load(Profile::default()), Profile::default());

        let broken = dir.path().join("broken.xml");
        std::fs::write(&broken, "<properties><age").unwrap();
        let sink = seen.clone();
        let mapper = PropertyMapper::new(&broken).with_reporter(move |report: &Report<'_>| {
            sink.lock().unwrap().push((report.operation, report.severity()));
        });
        assert_eq!(mapper.load(sample()), sample());

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            [
                (Operation::Save, Severity::Severe),
                (Operation::Load, Severity::Warning),
            ]
        );
    }
}
