use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use toml_edit::{Document, Item, Table};

/// The caller's `Cargo.toml`, used to spell paths to workspace crates from
/// generated code.
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let path: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_marshal"));
/// ```
///
/// # Resolution rules
///
/// For `dependencies`, then `dev-dependencies`:
///
/// 1. A direct dependency on the crate gives `::vc_marshal`.
/// 2. For a `vc_` crate, a dependency on a facade re-exporting it gives the
///    facade path with the prefix dropped: `::vc_props::marshal`, then
///    `::vc::marshal` for a facade renamed to `vc`.
///
/// Otherwise the absolute path `::vc_marshal` is used. A crate that expands
/// its own macros should declare `extern crate self as vc_marshal;` so that
/// path also resolves from inside it.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
    pub modified_time: SystemTime,
}

const WORKSPACE_PREFIX: &str = "vc_";
const FACADES: [&str; 2] = ["vc_props", "vc"];
const DEPENDENCY_TABLES: [&str; 2] = ["dependencies", "dev-dependencies"];

impl Manifest {
    #[inline(never)]
    fn manifest_path() -> PathBuf {
        let dir = env::var_os("CARGO_MANIFEST_DIR")
            .expect("CARGO_MANIFEST_DIR is set by cargo for proc-macro expansion");
        let path = Path::new(&dir).join("Cargo.toml");
        assert!(path.exists(), "no Cargo manifest at {}", path.display());
        path
    }

    #[inline(never)]
    fn modified_time(path: &Path) -> SystemTime {
        fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .unwrap_or_else(|err| panic!("cannot stat {}: {err}", path.display()))
    }

    #[inline(never)]
    fn read(path: &Path) -> Document<Box<str>> {
        let text = fs::read_to_string(path)
            .unwrap_or_else(|err| panic!("cannot read {}: {err}", path.display()));
        Document::parse(text.into_boxed_str())
            .unwrap_or_else(|err| panic!("cannot parse {}: {err}", path.display()))
    }

    fn absolute(segments: &[&str]) -> syn::Path {
        let text: String = segments.iter().map(|segment| format!("::{segment}")).collect();
        syn::parse_str(&text).unwrap_or_else(|err| panic!("`{text}` is not a path: {err}"))
    }

    fn resolve_in(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute(&[name]));
        }
        let module = name.strip_prefix(WORKSPACE_PREFIX)?;
        FACADES
            .into_iter()
            .find(|facade| deps.contains_key(facade))
            .map(|facade| Self::absolute(&[facade, module]))
    }

    /// The path to crate `name` as seen from the caller.
    ///
    /// See the type-level documentation for the resolution order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        DEPENDENCY_TABLES
            .into_iter()
            .find_map(|table| match self.manifest.get(table) {
                Some(Item::Table(deps)) => Self::resolve_in(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| Self::absolute(&[name]))
    }

    /// Runs `func` with the caller's manifest.
    ///
    /// Manifests are cached per path and re-read when their modification
    /// time changes. Call once per macro invocation and keep the result.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let path = Self::manifest_path();
        let modified_time = Self::modified_time(&path);

        {
            let cache = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(manifest) = cache.get(&path)
                && manifest.modified_time == modified_time
            {
                return func(manifest);
            }
        }

        let manifest = Manifest {
            manifest: Self::read(&path),
            modified_time,
        };
        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(path, manifest);

        result
    }
}

// -----------------------------------------------------------------------------
// Tests
