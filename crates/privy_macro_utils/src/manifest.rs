use std::env;
use std::fs;
use std::path::Path;

use proc_macro2::Span;
use syn::Ident;
use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for a `privy` crate as seen from the
/// caller's Cargo.toml.
///
/// Code generated by `friends!` lands in the caller's crate, so every runtime
/// path it mentions must be spelled the way the caller can reach it.
///
/// # Example
///
/// ```rust
/// # use privy_macro_utils::Manifest;
/// let manifest = Manifest::from_text("[dependencies]\nprivy = \"0.1\"\n").unwrap();
/// let p: syn::Path = manifest.get_crate_path("privy_bridge");
/// assert_eq!(p.segments.len(), 2);
/// ```
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `privy_` and the caller depends
///    on the facade crate `privy`, return `::privy::short_name`
///    (e.g. `privy_bridge` -> `::privy::bridge`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// ## Note
/// A crate that expands `friends!` inside itself (its own tests) should add
/// `extern crate self as privy_bridge;` so the fallback path resolves.
#[derive(Debug)]
pub struct Manifest {
    pub manifest: Document<Box<str>>,
}

const FACADE_NAME: &str = "privy";
const CRATE_PREFIX: &str = "privy_";

impl Manifest {
    /// Read the Cargo.toml of the crate being compiled.
    ///
    /// Returns `None` outside of cargo or when the manifest cannot be read,
    /// in which case callers use the fallback path.
    pub fn load() -> Option<Self> {
        let dir = env::var_os("CARGO_MANIFEST_DIR")?;
        let text = fs::read_to_string(Path::new(&dir).join("Cargo.toml")).ok()?;
        Self::from_text(&text)
    }

    /// Build a `Manifest` from already loaded text.
    ///
    /// Returns `None` if `text` is not valid TOML.
    pub fn from_text(text: &str) -> Option<Self> {
        Document::parse(Box::<str>::from(text))
            .ok()
            .map(|manifest| Manifest { manifest })
    }

    /// `::a::b` from its segments.
    fn absolute(segments: &[&str]) -> syn::Path {
        let mut path = syn::Path::from(Ident::new(segments[0], Span::call_site()));
        path.leading_colon = Some(Default::default());
        for segment in &segments[1..] {
            path.segments.push(Ident::new(segment, Span::call_site()).into());
        }
        path
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if deps.contains_key(name) {
            return Some(Self::absolute(&[name]));
        }

        let module = name.strip_prefix(CRATE_PREFIX)?;
        deps.contains_key(FACADE_NAME)
            .then(|| Self::absolute(&[FACADE_NAME, module]))
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution
    /// order.
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        ["dependencies", "dev-dependencies"]
            .into_iter()
            .find_map(|table| match self.manifest.get(table) {
                Some(Item::Table(deps)) => Self::find_in_deps(deps, name),
                _ => None,
            })
            .unwrap_or_else(|| Self::absolute(&[name]))
    }
}

#[cfg(test)]
mod tests {
    use super::Manifest;

    fn resolve(text: &str, name: &str) -> String {
        let manifest = Manifest::from_text(text).unwrap();
        let path = manifest.get_crate_path(name);
        let segments: Vec<String> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        format!("::{}", segments.join("::"))
    }

    #[test]
    fn direct_dependency() {
        let text = "[dependencies]\nprivy_bridge = { path = \"../privy_bridge\" }\n";
        assert_eq!(resolve(text, "privy_bridge"), "::privy_bridge");
    }

    #[test]
    fn through_facade() {
        let text = "[dependencies]\nprivy = \"0.0.1\"\n";
        assert_eq!(resolve(text, "privy_bridge"), "::privy::bridge");
    }

    #[test]
    fn dev_dependency() {
        let text = "[dependencies]\nlog = \"0.4\"\n\n[dev-dependencies]\nprivy = \"0.0.1\"\n";
        assert_eq!(resolve(text, "privy_bridge"), "::privy::bridge");
    }

    #[test]
    fn fallback() {
        let text = "[package]\nname = \"x\"\n";
        assert_eq!(resolve(text, "privy_bridge"), "::privy_bridge");
        assert_eq!(resolve(text, "other"), "::other");
    }

    #[test]
    fn own_manifest() {
        let manifest = Manifest::load().unwrap();
        assert!(manifest.manifest.get("package").is_some());
        let path = manifest.get_crate_path("privy_bridge");
        assert!(path.leading_colon.is_some());
        assert_eq!(path.segments.len(), 1);
    }

    #[test]
    fn invalid_text() {
        assert!(Manifest::from_text("[dependencies").is_none());
    }
}
