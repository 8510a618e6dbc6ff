//! Lint context for rule execution

use oxc_ast::AstKind;
use oxc_semantic::{AstNode, AstNodes, NodeId, Semantic};
use oxc_span::{SourceType, Span};

/// Context passed to rules during linting
pub struct LintContext<'a> {
    /// Semantic analysis: node table with parent links, scopes, symbols
    semantic: &'a Semantic<'a>,
    /// Source type (JS/TS/JSX etc)
    source_type: SourceType,
}

impl<'a> LintContext<'a> {
    pub fn new(semantic: &'a Semantic<'a>, source_type: SourceType) -> Self {
        Self { semantic, source_type }
    }

    /// Get the source text
    pub fn source_text(&self) -> &'a str {
        self.semantic.source_text()
    }

    /// Get the source type
    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    /// Check if the source is TypeScript
    pub fn is_typescript(&self) -> bool {
        self.source_type.is_typescript()
    }

    pub fn semantic(&self) -> &'a Semantic<'a> {
        self.semantic
    }

    pub fn nodes(&self) -> &'a AstNodes<'a> {
        self.semantic.nodes()
    }

    /// Get a slice of source text for a span
    pub fn span_text(&self, span: Span) -> &'a str {
        span.source_text(self.source_text())
    }

    pub fn parent_node(&self, node_id: NodeId) -> &'a AstNode<'a> {
        self.nodes().parent_node(node_id)
    }

    pub fn parent_kind(&self, node_id: NodeId) -> AstKind<'a> {
        self.nodes().parent_kind(node_id)
    }

    /// Iterate over the kinds of all ancestors, nearest first
    pub fn ancestor_kinds(&self, node_id: NodeId) -> impl Iterator<Item = AstKind<'a>> + 'a {
        self.nodes().ancestor_kinds(node_id)
    }
}
