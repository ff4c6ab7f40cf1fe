//! PHP source renderer.
//!
//! Output layout for a class with one dependency:
//!
//! ```text
//! <?php
//!
//! declare(strict_types=1);
//!
//! namespace App\Application\Invoice\CommandHandler;
//!
//! class CreateInvoiceCommandHandler
//! {
//!     public function __construct(
//!         private readonly \App\Domain\Invoice\InvoiceRepositoryInterface $invoiceRepositoryInterface
//!     ) {
//!     }
//! }
//! ```

use strata_core::{
    application::ports::SourceRenderer,
    domain::{
        ConstructorParam, Fqn, Namespace, SOURCE_EXTENSION, SourceFile, TypeDescriptor, TypeRef,
        split_fqn,
    },
    error::StrataResult,
};
use tracing::{instrument, trace};

const INDENT: &str = "    ";

/// Renders descriptors as PHP 8.1+ source files.
#[derive(Debug, Clone, Default)]
pub struct PhpRenderer {
    root: Namespace,
}

impl PhpRenderer {
    /// Create a renderer resolving project types under `root`.
    pub fn new(root: Namespace) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Namespace {
        &self.root
    }
}

impl SourceRenderer for PhpRenderer {
    fn extension(&self) -> &str {
        SOURCE_EXTENSION
    }

    fn class_name(&self, fqn: &Fqn) -> String {
        TypeRef::Project(fqn.clone()).absolute(&self.root)
    }

    #[instrument(skip_all, fields(fqn = %descriptor.fqn()))]
    fn render(&self, descriptor: &TypeDescriptor) -> StrataResult<SourceFile> {
        let (namespace, simple_name) = split_fqn(descriptor.fqn().as_str())?;

        let mut source = String::from("<?php\n\ndeclare(strict_types=1);\n\n");
        source.push_str(&namespace_line(&self.root, namespace));
        source.push_str("\n\n");

        source.push_str(descriptor.kind().as_str());
        source.push(' ');
        source.push_str(simple_name);
        source.push_str(&extends_clause(descriptor.extends(), &self.root));
        source.push_str(&implements_clause(descriptor.implements(), &self.root));
        source.push_str("\n{\n");

        if descriptor.kind().has_constructor() {
            source.push_str(&constructor_block(
                descriptor.constructor_params(),
                &self.root,
            ));
        }
        source.push_str("}\n");

        trace!(bytes = source.len(), "Rendered source");
        Ok(SourceFile::new(
            descriptor.fqn().clone(),
            descriptor.fqn().to_relative_path(SOURCE_EXTENSION),
            source,
        ))
    }
}

/// `namespace Root\Ns;`
pub fn namespace_line(root: &Namespace, namespace: &str) -> String {
    format!("namespace {};", root.join(namespace))
}

/// ` extends \A, \B`, or nothing.
pub fn extends_clause(bases: &[TypeRef], root: &Namespace) -> String {
    clause("extends", bases, root)
}

/// ` implements \A, \B`, or nothing.
pub fn implements_clause(interfaces: &[TypeRef], root: &Namespace) -> String {
    clause("implements", interfaces, root)
}

fn clause(keyword: &str, refs: &[TypeRef], root: &Namespace) -> String {
    if refs.is_empty() {
        return String::new();
    }

    let list = refs
        .iter()
        .map(|r| r.absolute(root))
        .collect::<Vec<_>>()
        .join(", ");
    format!(" {keyword} {list}")
}

/// Constructor with promoted parameters, one per line. Emitted even when
/// there are no parameters.
pub fn constructor_block(params: &[ConstructorParam], root: &Namespace) -> String {
    if params.is_empty() {
        return format!("{INDENT}public function __construct()\n{INDENT}{{\n{INDENT}}}\n");
    }

    let list = params
        .iter()
        .map(|param| {
            format!(
                "{INDENT}{INDENT}{} {} ${}",
                param.modifier,
                param.dependency.absolute(root),
                param.param_name()
            )
        })
        .collect::<Vec<_>>()
        .join(",\n");

    format!("{INDENT}public function __construct(\n{list}\n{INDENT}) {{\n{INDENT}}}\n")
}
