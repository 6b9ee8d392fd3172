//! Module output formats for compiled template bundles.
//! Holds the fixed descriptor table (CommonJS, AMD, namespace) and the
//! option resolution that layers explicit overrides on top of it.

use crate::config::FormatOptions;

/// Affix strings controlling how a bundle and its entries are assembled.
///
/// `prefix` and `suffix` wrap the whole output. The remaining fields wrap
/// each entry, with the first and last entry special-cased: the first takes
/// `first_prefix` instead of `each_prefix`, the last takes `last_suffix`
/// instead of `each_suffix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatDescriptor {
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub first_prefix: &'static str,
    pub each_prefix: &'static str,
    pub each_middle: &'static str,
    pub each_suffix: &'static str,
    pub last_suffix: &'static str,
}

const COMMONJS: FormatDescriptor = FormatDescriptor {
    prefix: "module.exports={",
    suffix: "};",
    first_prefix: "",
    each_prefix: "",
    each_middle: ":",
    each_suffix: ",",
    last_suffix: "",
};

const AMD: FormatDescriptor = FormatDescriptor {
    prefix: "define({",
    suffix: "});",
    first_prefix: "",
    each_prefix: "",
    each_middle: ":",
    each_suffix: ",",
    last_suffix: "",
};

// The first namespace entry is emitted without the property-path prefix.
const NAMESPACE: FormatDescriptor = FormatDescriptor {
    prefix: "!function(root){",
    suffix: "}(this);",
    first_prefix: "",
    each_prefix: "root.templatize.",
    each_middle: "=",
    each_suffix: "",
    last_suffix: "",
};

/// The closed set of supported module formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModuleFormat {
    /// `module.exports={...};`
    CommonJs,
    /// `define({...});`
    #[default]
    Amd,
    /// `!function(root){...}(this);` with per-entry global assignments
    Namespace,
}

impl ModuleFormat {
    /// Resolves a format name. Absent or unrecognized names fall back to AMD
    /// without a warning.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("commonjs") => ModuleFormat::CommonJs,
            Some("amd") => ModuleFormat::Amd,
            Some("namespace") => ModuleFormat::Namespace,
            _ => ModuleFormat::Amd,
        }
    }

    /// Returns the fixed descriptor for this format.
    pub const fn descriptor(self) -> FormatDescriptor {
        match self {
            ModuleFormat::CommonJs => COMMONJS,
            ModuleFormat::Amd => AMD,
            ModuleFormat::Namespace => NAMESPACE,
        }
    }
}

/// Fully resolved affix strings for one task run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFormat {
    pub prefix: String,
    pub suffix: String,
    pub first_prefix: String,
    pub each_prefix: String,
    pub each_middle: String,
    pub each_suffix: String,
    pub last_suffix: String,
}

impl From<FormatDescriptor> for ResolvedFormat {
    fn from(descriptor: FormatDescriptor) -> Self {
        Self {
            prefix: descriptor.prefix.to_string(),
            suffix: descriptor.suffix.to_string(),
            first_prefix: descriptor.first_prefix.to_string(),
            each_prefix: descriptor.each_prefix.to_string(),
            each_middle: descriptor.each_middle.to_string(),
            each_suffix: descriptor.each_suffix.to_string(),
            last_suffix: descriptor.last_suffix.to_string(),
        }
    }
}

/// Resolves the effective format options for one target.
///
/// The format name is taken from the target-level options when present,
/// otherwise from the task-level ones; the matching descriptor supplies the
/// defaults. Explicit field overrides are then applied task-level first,
/// target-level last, so target wins over task wins over the table.
pub fn resolve_format(task: &FormatOptions, target: &FormatOptions) -> ResolvedFormat {
    let name = target.format.as_deref().or(task.format.as_deref());
    let mut resolved = ResolvedFormat::from(ModuleFormat::from_name(name).descriptor());
    apply_overrides(&mut resolved, task);
    apply_overrides(&mut resolved, target);
    resolved
}

fn apply_overrides(resolved: &mut ResolvedFormat, options: &FormatOptions) {
    if let Some(value) = &options.prefix {
        resolved.prefix = value.clone();
    }
    if let Some(value) = &options.suffix {
        resolved.suffix = value.clone();
    }
    if let Some(value) = &options.first_prefix {
        resolved.first_prefix = value.clone();
    }
    if let Some(value) = &options.each_prefix {
        resolved.each_prefix = value.clone();
    }
    if let Some(value) = &options.each_middle {
        resolved.each_middle = value.clone();
    }
    if let Some(value) = &options.each_suffix {
        resolved.each_suffix = value.clone();
    }
    if let Some(value) = &options.last_suffix {
        resolved.last_suffix = value.clone();
    }
}
