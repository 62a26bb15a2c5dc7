use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Fields, Item, ItemEnum, UseTree, Visibility};

const REQUIRED_FILES: [&str; 6] =
    ["event", "mod", "model", "reducer", "state", "view"];
const OPTIONAL_FILES: [&str; 2] = ["errors", "storage"];

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        if let Item::Mod(item_mod) = item {
            if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                declared_modules.insert(item_mod.ident.to_string());
            } else {
                violations.push(format!(
                    "{}: module declaration '{}' must be pub(crate) mod <name>;",
                    mod_rs.display(),
                    item_mod.ident
                ));
            }
        }

        if let Item::Use(item_use) = item {
            if use_tree_has_glob(&item_use.tree) {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            }
        }
    }

    let mut fs_modules = BTreeSet::new();
    let entries = fs::read_dir(&widgets_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", widgets_dir.display())
    });
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();
        if path.is_dir() {
            fs_modules.insert(file_stem(&path));
        } else if path.file_name().is_some_and(|name| name != "mod.rs") {
            violations.push(format!(
                "{}: widgets must live in their own directory",
                path.display()
            ));
        }
    }

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match directories {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        validate_widget_dir(&widgets_dir.join(module), &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget_dir(dir: &Path, violations: &mut Vec<String>) {
    let prefix = snake_to_pascal_case(&file_stem(dir));

    let mut files = BTreeSet::new();
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();
        let stem = file_stem(&path);
        if !REQUIRED_FILES.contains(&stem.as_str())
            && !OPTIONAL_FILES.contains(&stem.as_str())
        {
            violations.push(format!(
                "{}: unexpected widget module",
                path.display()
            ));
        }
        files.insert(stem);
    }
    for required in REQUIRED_FILES {
        if !files.contains(required) {
            violations.push(format!(
                "{}: missing {required}.rs",
                dir.display()
            ));
        }
    }

    validate_event_file(&dir.join("event.rs"), &prefix, violations);
    validate_view_file(&dir.join("view.rs"), &prefix, violations);
    validate_mod_file(&dir.join("mod.rs"), &prefix, violations);
    validate_state_file(&dir.join("state.rs"), violations);
}

fn validate_event_file(
    path: &Path,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    if !path.exists() {
        return;
    }
    let file = parse(path);
    let enums: Vec<&ItemEnum> = file
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Enum(item_enum) => Some(item_enum),
            _ => None,
        })
        .collect();

    for suffix in ["Intent", "Effect", "Event"] {
        let expected = format!("{prefix}{suffix}");
        if !enums.iter().any(|item| item.ident == expected) {
            violations.push(format!(
                "{}: missing enum {expected}",
                path.display()
            ));
        }
    }

    let event_name = format!("{prefix}Event");
    if let Some(event) = enums.iter().find(|item| item.ident == event_name) {
        let variants: Vec<String> = event
            .variants
            .iter()
            .map(|variant| variant.ident.to_string())
            .collect();
        if variants != ["Intent", "Effect"] {
            violations.push(format!(
                "{}: {event_name} must have exactly Intent and Effect variants, found {variants:?}",
                path.display()
            ));
        }
        for variant in &event.variants {
            let wraps_one = matches!(
                &variant.fields,
                Fields::Unnamed(fields) if fields.unnamed.len() == 1
            );
            if !wraps_one {
                violations.push(format!(
                    "{}: {event_name}::{} must wrap exactly one value",
                    path.display(),
                    variant.ident
                ));
            }
        }
    }
}

fn validate_view_file(
    path: &Path,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    if !path.exists() {
        return;
    }
    let source = read(path);
    let file = parse(path);

    for forbidden in [
        "log::",
        "std::fs::",
        "Task::",
        "iced::Task",
        "Instant::now",
        ".elapsed(",
    ] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                path.display()
            ));
        }
    }

    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();
    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        path.display()
                    ));
                }
            },
            Item::Struct(item_struct)
                if item_struct.ident.to_string().ends_with("Props") =>
            {
                props_names.push(item_struct.ident.to_string());
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    path.display()
                ));
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            path.display()
        ));
    }
    if props_names != [format!("{prefix}Props")] {
        violations.push(format!(
            "{}: expected exactly one {prefix}Props type, found {props_names:?}",
            path.display()
        ));
    }
}

fn validate_mod_file(
    path: &Path,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    if !path.exists() {
        return;
    }
    let file = parse(path);
    let widget_name = format!("{prefix}Widget");

    let has_widget = file.items.iter().any(|item| {
        matches!(item, Item::Struct(item_struct)
            if item_struct.ident == widget_name
                && is_pub_crate(&item_struct.vis))
    });
    if !has_widget {
        violations.push(format!(
            "{}: missing pub(crate) struct {widget_name}",
            path.display()
        ));
    }

    let has_reduce = file.items.iter().any(|item| {
        let Item::Impl(item_impl) = item else {
            return false;
        };
        item_impl.items.iter().any(|impl_item| {
            matches!(impl_item, syn::ImplItem::Fn(method)
                if method.sig.ident == "reduce")
        })
    });
    if !has_reduce {
        violations.push(format!(
            "{}: {widget_name} must expose a reduce method",
            path.display()
        ));
    }
}

fn validate_state_file(path: &Path, violations: &mut Vec<String>) {
    if !path.exists() {
        return;
    }
    let source = read(path);
    for forbidden in ["std::fs::", "Task::", "Instant::now"] {
        if source.contains(forbidden) {
            violations.push(format!(
                "{}: state must stay free of side effects: {forbidden}",
                path.display()
            ));
        }
    }
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    })
}

fn parse(path: &Path) -> syn::File {
    syn::parse_file(&read(path)).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .unwrap_or_else(|| panic!("missing stem for {}", path.display()))
        .to_string_lossy()
        .to_string()
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}
