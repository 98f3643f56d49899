//! Two-pass template renderer.
//!
//! Templates carry two kinds of placeholders:
//!
//! - `$name$` is a scalar, replaced by a single string everywhere it occurs.
//! - `$*name*$` is a list. A line holding one or more list placeholders is
//!   repeated once per element, zipping all referenced lists together and
//!   stopping at the shortest one.
//!
//! All scalars are substituted over the whole template before any line is
//! expanded. Scalars and lists live in separate maps, so a name bound as a
//! scalar is never looked up as a list and vice versa.
//!
//! ```
//! use rn_grpc_compiler::template::{render, Bindings};
//!
//! let bindings = Bindings::new()
//!     .scalar("title", "Fruit")
//!     .list("items", ["apple", "pear"]);
//!
//! assert_eq!(render("# $title$\n- $*items*$", &bindings), "# Fruit\n- apple\n- pear");
//! ```

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::collections::HashMap;
use tracing::{trace, warn};

lazy_static! {
    static ref LIST_PLACEHOLDER: Regex = Regex::new(r"\$\*([^$*\n]+)\*\$").unwrap();
}

/// Scalar and list values for a single render.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    scalars: HashMap<String, String>,
    lists:   HashMap<String, Vec<String>>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scalar(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_scalar(name, value);
        self
    }

    pub fn list<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set_list(name, values);
        self
    }

    pub fn set_scalar(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.scalars.insert(name.into(), value.into());
    }

    pub fn set_list<I, S>(&mut self, name: impl Into<String>, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lists
            .insert(name.into(), values.into_iter().map(Into::into).collect());
    }
}

/// Renders `template`: scalar substitution first, then line-wise list expansion.
pub fn render(template: &str, bindings: &Bindings) -> String {
    let scalars_done = substitute_scalars(template, bindings);
    expand_lists(&scalars_done, bindings)
}

/// Pass 1. Replaces every `$name$` token whose name is bound, whatever
/// characters the name holds. Unbound scalars and all list tokens are left as
/// they are.
pub fn substitute_scalars(template: &str, bindings: &Bindings) -> String {
    if bindings.scalars.is_empty() {
        return template.to_string();
    }

    let mut names: Vec<&str> = bindings.scalars.keys().map(String::as_str).collect();
    names.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    let alternatives: Vec<String> = names.iter().map(|name| regex::escape(name)).collect();

    // List tokens are matched first so they are skipped as a whole and their
    // trailing `*$` never opens a scalar.
    let pattern = format!(r"\$\*[^$*\n]+\*\$|\$({})\$", alternatives.join("|"));
    let scalar_rx = match Regex::new(&pattern) {
        Ok(rx) => rx,
        Err(e) => {
            warn!(error = %e, "cannot build scalar matcher, template left unchanged");
            return template.to_string();
        }
    };

    scalar_rx
        .replace_all(template, |caps: &Captures| {
            match caps.get(1).and_then(|name| bindings.scalars.get(name.as_str())) {
                Some(value) => value.clone(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Pass 2. Expands each line independently against the list bindings.
pub fn expand_lists(text: &str, bindings: &Bindings) -> String {
    let mut out: Vec<String> = Vec::new();

    for line in text.split('\n') {
        let mut referenced: HashMap<&str, &[String]> = HashMap::new();
        for caps in LIST_PLACEHOLDER.captures_iter(line) {
            let name = caps.get(1).map_or("", |m| m.as_str());
            match bindings.lists.get(name) {
                Some(values) => {
                    referenced.insert(name, values.as_slice());
                }
                None => trace!(name, "unresolved list placeholder left in output"),
            }
        }

        let repeat = match referenced.values().map(|values| values.len()).min() {
            Some(count) => count,
            None => {
                out.push(line.to_string());
                continue;
            }
        };

        for i in 0..repeat {
            let expanded = LIST_PLACEHOLDER.replace_all(line, |caps: &Captures| {
                match referenced.get(&caps[1]) {
                    Some(values) => values[i].clone(),
                    None => caps[0].to_string(),
                }
            });
            out.push(expanded.into_owned());
        }
    }

    out.join("\n")
}

/// Names of the list placeholders still present in `text`, in order of
/// appearance, without duplicates.
pub fn unresolved_lists(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in LIST_PLACEHOLDER.captures_iter(text) {
        if !names.iter().any(|n| n == &caps[1]) {
            names.push(caps[1].to_string());
        }
    }
    names
}
