//! Best-effort textual rewriting of JavaScript-flavoured snippets.
//!
//! This is NOT a translator: it applies an ordered list of regex rewrites
//! (`function name(` -> `def name(`, braces to colons, `console.log(` ->
//! `print(` ...) that produce plausible output for the snippet library in
//! `assistant` and can produce invalid code for anything else. Tests only
//! cover that corpus.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Languages the assistant can render a snippet in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TargetLanguage {
    #[default]
    Javascript,
    Python,
    Java,
    Typescript,
}

static FUNCTION_DEF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s+(\w+)\s*\(").expect("valid regex"));
static FUNCTION_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"function\s+(\w+)").expect("valid regex"));
static DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:let|const|var)\s+").expect("valid regex"));
static STRICT_NE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!==").expect("valid regex"));
static EQUALITY: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"===|==").expect("valid regex"));
static LOGICAL_AND: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*&&\s*").expect("valid regex"));
static LOGICAL_OR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\|\|\s*").expect("valid regex"));
static CONSOLE_LOG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"console\.log\(").expect("valid regex"));
static LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w+):").expect("valid regex"));

/// Dispatch on the target; JavaScript input is returned unchanged.
pub fn convert(js_code: &str, target: TargetLanguage) -> String {
    match target {
        TargetLanguage::Javascript => js_code.to_string(),
        TargetLanguage::Python => to_python(js_code),
        TargetLanguage::Java => to_java(js_code),
        TargetLanguage::Typescript => to_typescript(js_code),
    }
}

pub fn to_python(js_code: &str) -> String {
    let out = FUNCTION_DEF.replace_all(js_code, "def $1(");
    let out = out.replace('{', ":").replace('}', "");
    let out = DECLARATION.replace_all(&out, "");
    let out = STRICT_NE.replace_all(&out, "!=");
    let out = EQUALITY.replace_all(&out, "==");
    let out = LOGICAL_AND.replace_all(&out, " and ");
    let out = LOGICAL_OR.replace_all(&out, " or ");
    let out = CONSOLE_LOG.replace_all(&out, "print(");
    out.replace(';', "")
}

pub fn to_java(js_code: &str) -> String {
    let body = FUNCTION_NAME.replace_all(js_code, "public static $1");
    format!("public class Example {{\n    {}\n}}", body)
}

pub fn to_typescript(js_code: &str) -> String {
    let out = LABEL.replace_all(js_code, "$1: string");
    format!("{}\n\n// TypeScript version with basic type annotations", out)
}
