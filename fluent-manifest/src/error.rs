use std::{ops::Range, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Holds the manifest text and filename so error factories don't need
/// them passed at every call site.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, optionally pointing at a span.
    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<Range<usize>>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: span.map(SourceSpan::from),
            message: message.into(),
        })
    }

    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span: span.into(),
            name: name.into(),
            context: context.into(),
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span: span.into(),
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    pub fn unknown_type_error(
        &self,
        ty: impl Into<String>,
        field: impl Into<String>,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::UnknownType {
            src: self.named_source(),
            span: span.into(),
            ty: ty.into(),
            field: field.into(),
        })
    }

    pub fn unknown_superclass_error(
        &self,
        name: impl Into<String>,
        class: impl Into<String>,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::UnknownSuperclass {
            src: self.named_source(),
            span: span.into(),
            name: name.into(),
            class: class.into(),
        })
    }

    pub fn duplicate_class_error(
        &self,
        name: impl Into<String>,
        first: Range<usize>,
        second: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateClass {
            src: self.named_source(),
            first_span: first.into(),
            second_span: second.into(),
            name: name.into(),
        })
    }

    pub fn duplicate_field_error(
        &self,
        class: impl Into<String>,
        name: impl Into<String>,
        first: Range<usize>,
        second: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateField {
            src: self.named_source(),
            first_span: first.into(),
            second_span: second.into(),
            class: class.into(),
            name: name.into(),
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub fn property_clash_error(
        &self,
        class: impl Into<String>,
        name: impl Into<String>,
        owner: impl Into<String>,
        other: impl Into<String>,
        stem: impl Into<String>,
        first: Range<usize>,
        second: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::PropertyClash {
            src: self.named_source(),
            first_span: first.into(),
            second_span: second.into(),
            class: class.into(),
            name: name.into(),
            owner: owner.into(),
            other: other.into(),
            stem: stem.into(),
        })
    }

    pub fn inheritance_cycle_error(
        &self,
        class: impl Into<String>,
        chain: impl Into<String>,
        span: Range<usize>,
    ) -> Box<Error> {
        Box::new(Error::InheritanceCycle {
            src: self.named_source(),
            span: span.into(),
            class: class.into(),
            chain: chain.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'fluent init' to create a starter fluent.toml"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fluent.toml")]
    #[diagnostic(code(fluent::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(fluent::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a Java reserved word")]
    #[diagnostic(
        code(fluent::reserved_keyword),
        help("rename the {context} '{name}', e.g. '{name}Value'")
    )]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved word used here")]
        span: SourceSpan,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(
        code(fluent::invalid_identifier),
        help(
            "{reason}. Use only letters, digits, underscores and '$', starting with a letter or underscore."
        )
    )]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: SourceSpan,
        name: String,
        context: String,
        reason: String,
    },

    #[error("unknown type '{ty}' for field '{field}'")]
    #[diagnostic(
        code(fluent::unknown_type),
        help(
            "valid types are: int, long, float, double, bool, char, byte, string, a declared class, \
             a qualified external class, `T[]` or `list<T>`"
        )
    )]
    UnknownType {
        #[source_code]
        src: NamedSource<String>,
        #[label("unknown type")]
        span: SourceSpan,
        ty: String,
        field: String,
    },

    #[error("class '{class}' extends unknown class '{name}'")]
    #[diagnostic(
        code(fluent::unknown_superclass),
        help("declare '{name}' as a [[class]] in this file")
    )]
    UnknownSuperclass {
        #[source_code]
        src: NamedSource<String>,
        #[label("not declared")]
        span: SourceSpan,
        name: String,
        class: String,
    },

    #[error("duplicate class '{name}'")]
    #[diagnostic(code(fluent::duplicate_class))]
    DuplicateClass {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        name: String,
    },

    #[error("duplicate field '{name}' in class '{class}'")]
    #[diagnostic(code(fluent::duplicate_field))]
    DuplicateField {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        class: String,
        name: String,
    },

    #[error("field '{name}' of class '{class}' clashes with field '{other}' of class '{owner}'")]
    #[diagnostic(
        code(fluent::property_clash),
        help("both would be set through 'with{stem}'; rename one of them")
    )]
    PropertyClash {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("clashes here")]
        second_span: SourceSpan,
        class: String,
        name: String,
        owner: String,
        other: String,
        stem: String,
    },

    #[error("inheritance cycle through class '{class}'")]
    #[diagnostic(code(fluent::inheritance_cycle), help("the chain is {chain}"))]
    InheritanceCycle {
        #[source_code]
        src: NamedSource<String>,
        #[label("cycle closes here")]
        span: SourceSpan,
        class: String,
        chain: String,
    },
}
