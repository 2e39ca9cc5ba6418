//! AST node types.
//!
//! Every compound form in the language is fully parenthesized, so the tree
//! is a plain owned enum. Adding a variant to [`Expr`] is a compile error at
//! every `match` that has to handle it.

use std::fmt;

use lisk_stack::ensure_sufficient_stack;

use crate::Span;

/// One expression.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    /// A number, a bare symbol reference, or a quoted list.
    Value(ValueExpr),
    /// `(name arg*)`
    Call(CallExpr),
    /// `(if cond then else)`
    IfElse(IfElseExpr),
}

impl Expr {
    pub fn span(&self) -> Span {
        match self {
            Expr::Value(v) => v.span,
            Expr::Call(c) => c.span,
            Expr::IfElse(i) => i.span,
        }
    }

    /// Leaf left behind in a `Box<Expr>` whose subtree was moved out.
    fn hollow() -> Self {
        Expr::Value(ValueExpr::new(Literal::Int(0), Span::DUMMY))
    }

    /// Move this node's subexpressions onto `pending`, leaving only leaves.
    fn detach_children(&mut self, pending: &mut Vec<Expr>) {
        match self {
            Expr::Value(_) => {}
            Expr::Call(call) => pending.append(&mut call.args),
            Expr::IfElse(if_expr) => {
                for branch in [
                    &mut if_expr.cond,
                    &mut if_expr.then_branch,
                    &mut if_expr.else_branch,
                ] {
                    let child = std::mem::replace(&mut **branch, Expr::hollow());
                    if !matches!(child, Expr::Value(_)) {
                        pending.push(child);
                    }
                }
            }
        }
    }
}

// Nesting depth is bounded only by input size, so the destructor walks the
// tree with an explicit worklist. Each popped node is dropped with its
// children already detached.
impl Drop for Expr {
    fn drop(&mut self) {
        if matches!(self, Expr::Value(_)) {
            return;
        }
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ValueExpr {
    pub literal: Literal,
    pub span: Span,
}

impl ValueExpr {
    pub fn new(literal: Literal, span: Span) -> Self {
        ValueExpr { literal, span }
    }
}

/// Payload of a [`ValueExpr`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Literal {
    Int(i64),
    Symbol(String),
    /// `'(a b c)`: raw atoms, never evaluated.
    List(Vec<Atom>),
}

/// An element of a quoted list.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Atom {
    Int(i64),
    Symbol(String),
}

/// Function call. `span` covers the whole parenthesized form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallExpr {
    pub name: String,
    pub args: Vec<Expr>,
    pub span: Span,
}

/// Conditional. `span` covers the whole parenthesized form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct IfElseExpr {
    pub cond: Box<Expr>,
    pub then_branch: Box<Expr>,
    pub else_branch: Box<Expr>,
    pub span: Span,
}

/// Result of parsing one source text: its top-level expressions in order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Program {
    pub exprs: Vec<Expr>,
}

impl Program {
    pub fn new(exprs: Vec<Expr>) -> Self {
        Program { exprs }
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expr> {
        self.exprs.iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Expr;
    type IntoIter = std::slice::Iter<'a, Expr>;

    fn into_iter(self) -> Self::IntoIter {
        self.exprs.iter()
    }
}

// Display renders source-like text. Used by `lisk parse` and in tests.

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Int(n) => write!(f, "{n}"),
            Atom::Symbol(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Symbol(s) => f.write_str(s),
            Literal::List(atoms) => {
                f.write_str("'(")?;
                for (i, atom) in atoms.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{atom}")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Value(v) => write!(f, "{}", v.literal),
            Expr::Call(call) => {
                write!(f, "({}", call.name)?;
                for arg in &call.args {
                    write!(f, " {arg}")?;
                }
                f.write_str(")")
            }
            Expr::IfElse(i) => write!(
                f,
                "(if {} {} {})",
                i.cond, i.then_branch, i.else_branch
            ),
        })
    }
}
