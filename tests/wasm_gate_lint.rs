#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! AST-level test: browser APIs must only be used behind a wasm32 gate.
//!
//! The native build renders snapshots and runs every test, so an ungated
//! `web_sys::...` path breaks it even though the browser build is fine.
//!
//! Example of bad code:
//! ```ignore
//! // BAD: compiled on every target
//! fn scroll_y() -> f64 { web_sys::window().unwrap().scroll_y().unwrap() }
//! ```
//!
//! Example of correct code:
//! ```ignore
//! // GOOD: only compiled for the browser
//! #[cfg(target_arch = "wasm32")]
//! fn scroll_y() -> f64 { ... }
//! ```

use std::fs;
use std::path::Path;
use syn::visit::Visit;
use syn::{Attribute, Expr, ExprBlock, File, Item, Lit, Local, Meta, UseTree};
use walkdir::WalkDir;

const BROWSER_CRATES: &[&str] = &["web_sys", "wasm_bindgen", "js_sys"];

/// Modules that are gated where they are declared
const GATED_FILES: &[&str] = &["app/dom.rs"];

fn is_wasm_gate(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        if !attr.path().is_ident("cfg") {
            return false;
        }
        match attr.parse_args::<Meta>() {
            Ok(Meta::NameValue(nv)) => {
                nv.path.is_ident("target_arch")
                    && matches!(
                        &nv.value,
                        Expr::Lit(lit) if matches!(&lit.lit, Lit::Str(s) if s.value() == "wasm32")
                    )
            }
            _ => false,
        }
    })
}

fn item_attrs(item: &Item) -> &[Attribute] {
    match item {
        Item::Const(i) => &i.attrs,
        Item::Enum(i) => &i.attrs,
        Item::Fn(i) => &i.attrs,
        Item::Impl(i) => &i.attrs,
        Item::Mod(i) => &i.attrs,
        Item::Static(i) => &i.attrs,
        Item::Struct(i) => &i.attrs,
        Item::Trait(i) => &i.attrs,
        Item::Type(i) => &i.attrs,
        Item::Use(i) => &i.attrs,
        _ => &[],
    }
}

fn use_tree_root(tree: &UseTree) -> Option<String> {
    match tree {
        UseTree::Path(p) => Some(p.ident.to_string()),
        UseTree::Name(n) => Some(n.ident.to_string()),
        UseTree::Rename(r) => Some(r.ident.to_string()),
        _ => None,
    }
}

struct GateVisitor {
    current_file: String,
    violations: Vec<(String, String)>,
}

impl GateVisitor {
    fn new(file: String) -> Self {
        Self {
            current_file: file,
            violations: Vec::new(),
        }
    }

    fn flag(&mut self, what: String) {
        self.violations.push((self.current_file.clone(), what));
    }
}

impl<'ast> Visit<'ast> for GateVisitor {
    fn visit_item(&mut self, item: &'ast Item) {
        if is_wasm_gate(item_attrs(item)) {
            return;
        }
        if let Item::Use(item_use) = item {
            if let Some(root) = use_tree_root(&item_use.tree) {
                if BROWSER_CRATES.contains(&root.as_str()) {
                    self.flag(format!("ungated `use {}::...`", root));
                }
            }
            return;
        }
        syn::visit::visit_item(self, item);
    }

    fn visit_expr_block(&mut self, block: &'ast ExprBlock) {
        if is_wasm_gate(&block.attrs) {
            return;
        }
        syn::visit::visit_expr_block(self, block);
    }

    fn visit_local(&mut self, local: &'ast Local) {
        if is_wasm_gate(&local.attrs) {
            return;
        }
        syn::visit::visit_local(self, local);
    }

    fn visit_path(&mut self, path: &'ast syn::Path) {
        if let Some(first) = path.segments.first() {
            let name = first.ident.to_string();
            if BROWSER_CRATES.contains(&name.as_str()) {
                self.flag(format!("ungated path `{}::...`", name));
            }
        }
        syn::visit::visit_path(self, path);
    }
}

fn analyze_file(path: &Path, relative: &str) -> Vec<(String, String)> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return vec![],
    };

    let syntax: File = match syn::parse_file(&content) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
            return vec![];
        }
    };

    let mut visitor = GateVisitor::new(relative.to_string());
    visitor.visit_file(&syntax);
    visitor.violations
}

#[test]
fn browser_apis_are_wasm_gated() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut all_violations = Vec::new();

    for entry in WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "rs"))
    {
        let relative = entry
            .path()
            .strip_prefix(&src_dir)
            .unwrap()
            .to_string_lossy()
            .replace('\\', "/");
        if GATED_FILES.contains(&relative.as_str()) {
            continue;
        }
        all_violations.extend(analyze_file(entry.path(), &relative));
    }

    if !all_violations.is_empty() {
        let mut error_msg = String::from("Browser APIs used outside #[cfg(target_arch = \"wasm32\")]:\n\n");
        for (file, what) in &all_violations {
            error_msg.push_str(&format!("  {}: {}\n", file, what));
        }
        panic!("{}", error_msg);
    }
}

#[test]
fn dom_module_is_gated_where_declared() {
    let app_mod = fs::read_to_string(Path::new(env!("CARGO_MANIFEST_DIR")).join("src/app/mod.rs"))
        .expect("Failed to read src/app/mod.rs");
    let syntax = syn::parse_file(&app_mod).expect("src/app/mod.rs should parse");

    let dom = syntax
        .items
        .iter()
        .find_map(|item| match item {
            Item::Mod(m) if m.ident == "dom" => Some(m),
            _ => None,
        })
        .expect("app::dom module declared");

    assert!(
        is_wasm_gate(&dom.attrs),
        "`mod dom` must be declared under #[cfg(target_arch = \"wasm32\")]"
    );
}
