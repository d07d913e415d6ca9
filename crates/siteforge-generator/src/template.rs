//! Escaping template system used by every renderer.
//!
//! Placeholders are written as `{{ name }}` and HTML-escaped by default. A
//! filter selects another output context, e.g. `{{ name | php_sq }}` for the
//! body of a PHP single-quoted string or `{{ body | raw }}` for a fragment
//! that was already rendered through a template. `{{ name? }}` renders an
//! absent variable as the empty string.
//!
//! Templates are compiled once into literal and placeholder segments, so
//! syntax and filter mistakes surface at registration and substituted values
//! are never rescanned: user text containing `{{` is emitted literally.

use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};

use thiserror::Error;

use crate::{escape::Escape, gallery, layouts, multipage, wordpress};

/// Template errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A placeholder without `?` had no value in the context.
    #[error("missing required variable: {0}")]
    MissingVariable(String),

    /// No template is registered under the name.
    #[error("no template named {0}")]
    NotFound(String),

    /// Malformed placeholder.
    #[error("syntax error in template {template}: {message}")]
    Syntax { template: String, message: String },

    /// Unknown escaping filter.
    #[error("unknown filter `{filter}` on variable {variable}")]
    UnknownFilter { variable: String, filter: String },
}

pub type Result<T> = std::result::Result<T, TemplateError>;

/// Variables available to a render.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    vars: HashMap<String, String>,
}

impl TemplateContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Builder form of [`TemplateContext::insert`].
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    /// Copy every variable of `other` over this context.
    pub fn extend(&mut self, other: &TemplateContext) {
        self.vars
            .extend(other.vars.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Var {
        name: String,
        escape: Escape,
        optional: bool,
    },
}

/// A compiled template.
#[derive(Debug, Clone)]
pub struct Template {
    name: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Compile `source` under `name`.
    pub fn compile(name: impl Into<String>, source: &str) -> Result<Self> {
        let name = name.into();
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Text(rest[..open].to_string()));
            }
            let after = &rest[open + 2..];
            let close = after.find("}}").ok_or_else(|| TemplateError::Syntax {
                template: name.clone(),
                message: "unclosed {{".to_string(),
            })?;
            segments.push(placeholder(&name, &after[..close])?);
            rest = &after[close + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }

        Ok(Self { name, segments })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the variables the template reads, in order of appearance.
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Var { name, .. } => Some(name.as_str()),
            Segment::Text(_) => None,
        })
    }

    /// Render with the variables of `context`.
    pub fn render(&self, context: &TemplateContext) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Var {
                    name,
                    escape,
                    optional,
                } => match context.get(name) {
                    Some(value) => out.push_str(&escape.apply(value)),
                    None if *optional => {}
                    None => return Err(TemplateError::MissingVariable(name.clone())),
                },
            }
        }
        Ok(out)
    }
}

/// Parse the inside of `{{ ... }}`.
fn placeholder(template: &str, expr: &str) -> Result<Segment> {
    let (var, filter) = match expr.split_once('|') {
        Some((var, filter)) => (var.trim(), filter.trim()),
        None => (expr.trim(), "html"),
    };
    let (var, optional) = match var.strip_suffix('?') {
        Some(var) => (var.trim_end(), true),
        None => (var, false),
    };

    if var.is_empty() {
        return Err(TemplateError::Syntax {
            template: template.to_string(),
            message: "empty placeholder".to_string(),
        });
    }

    let escape = filter
        .parse::<Escape>()
        .map_err(|filter| TemplateError::UnknownFilter {
            variable: var.to_string(),
            filter,
        })?;

    Ok(Segment::Var {
        name: var.to_string(),
        escape,
        optional,
    })
}

static BUILTIN: LazyLock<HashMap<String, Arc<Template>>> = LazyLock::new(|| {
    compile_builtins().expect("built-in templates compile")
});

fn compile_builtins() -> Result<HashMap<String, Arc<Template>>> {
    let mut compiled = HashMap::new();
    for (name, source) in layouts::TEMPLATES
        .iter()
        .chain(multipage::TEMPLATES)
        .chain(gallery::TEMPLATES)
        .chain(wordpress::TEMPLATES)
    {
        compiled.insert((*name).to_string(), Arc::new(Template::compile(*name, source)?));
    }
    Ok(compiled)
}

/// Named templates, starting from the built-in set.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: HashMap<String, Arc<Template>>,
}

impl TemplateRegistry {
    /// Registry holding every built-in template.
    #[must_use]
    pub fn new() -> Self {
        Self {
            templates: BUILTIN.clone(),
        }
    }

    /// Add `template`, replacing any template of the same name.
    pub fn register(&mut self, template: Template) {
        self.templates
            .insert(template.name.clone(), Arc::new(template));
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.get(name).map(Arc::as_ref)
    }

    /// Render the template registered as `name`.
    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        self.get(name)
            .ok_or_else(|| TemplateError::NotFound(name.to_string()))?
            .render(context)
    }
}
