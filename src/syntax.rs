//! Editor syntax names and language inference.

use std::path::Path;

/// Strip a trailing file extension from a syntax path, so
/// `Packages/C++/C++.sublime-syntax` becomes `Packages/C++/C++`.
///
/// Only the final path component is considered, and a leading dot does not
/// count as an extension.
pub fn syntax_stem(syntax: &str) -> &str {
    let name_start = syntax.rfind(['/', '\\']).map_or(0, |i| i + 1);
    match syntax[name_start..].rfind('.') {
        Some(dot) if dot > 0 => &syntax[..name_start + dot],
        _ => syntax,
    }
}

const EXTENSIONS: &[(&str, &str)] = &[
    ("py", "Python"),
    ("pyw", "Python"),
    ("c", "C"),
    ("h", "C"),
    ("cc", "C++"),
    ("cpp", "C++"),
    ("cxx", "C++"),
    ("hh", "C++"),
    ("hpp", "C++"),
    ("hxx", "C++"),
    ("m", "Objective-C"),
    ("mm", "Objective-C++"),
    ("java", "Java"),
    ("gn", "GN"),
    ("gni", "GN"),
    ("css", "CSS"),
    ("scss", "CSS"),
    ("less", "CSS"),
    ("html", "HTML"),
    ("htm", "HTML"),
    ("js", "JavaScript"),
    ("mjs", "JavaScript"),
    ("cjs", "JavaScript"),
    ("jsx", "JavaScript (Babel)"),
    ("json", "JSON"),
    ("ts", "TypeScript"),
    ("tsx", "TypeScript"),
    ("rs", "Rust"),
];

/// Infer a language identifier from a file's extension.
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?;
    EXTENSIONS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(ext))
        .map(|(_, lang)| *lang)
}
