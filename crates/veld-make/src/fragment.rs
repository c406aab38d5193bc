//! Reparse-based construction for snippets too contextual to assemble.
//!
//! Each entry point wraps the snippet in a minimal well-formed module,
//! parses it with the grammar parser, and pulls the target node out of the
//! position the wrapper put it in. The target is located by a
//! kind-category query inside that bounded region, never by a fixed child
//! index. Any surprise (a diagnostic, a missing candidate, several
//! candidates, the wrong category) is an internal-invariant error; no
//! placeholder is ever returned.

use salsa::Database;
use veld_green::GreenNode;
use veld_green::ast::{self, Expr, Item, Node, Pat, Type};

use crate::error::{MakeError, Result};

/// Parses `text` as a single expression.
pub fn expr_from_text<'db>(db: &'db dyn Database, text: &str) -> Result<Expr<'db>> {
    let wrapper = format!("fun __sample() {{ {text} }}");
    let body = wrapper_body(db, &wrapper)?;
    let node = single_child_node(db, body.syntax(), "expression")?;
    expect_kind(db, node, "an expression")
}

/// Parses `text` as a single pattern.
pub fn pat_from_text<'db>(db: &'db dyn Database, text: &str) -> Result<Pat<'db>> {
    let wrapper = format!("fun __sample() {{ match (__scrutinee) {{ {text} => () }} }}");
    let body = wrapper_body(db, &wrapper)?;

    let match_: ast::MatchExpr =
        expect_kind(db, single_child_node(db, body.syntax(), "match expression")?, "a match")?;
    let Some(arm_list) = match_.arm_list(db) else {
        return Err(reparse_error("the reparse wrapper lost its match arms"));
    };

    let arms: Vec<_> = arm_list.arms(db).collect();
    let &[arm] = arms.as_slice() else {
        return Err(MakeError::ReparseAmbiguity { count: arms.len() });
    };

    let Some(pat) = arm.pat(db) else {
        return Err(reparse_error("the reparse wrapper lost its arm pattern"));
    };

    covers_snippet(db, pat.syntax(), text, "pattern")?;
    Ok(pat)
}

/// Parses `text` as a single type.
pub fn type_from_text<'db>(db: &'db dyn Database, text: &str) -> Result<Type<'db>> {
    let wrapper = format!("fun __sample(__p: {text}) {{ }}");
    let root = parse_wrapper(db, &wrapper)?;

    let fn_: ast::Fn =
        expect_kind(db, single_child_node(db, root, "function")?, "a function")?;
    let Some(param_list) = fn_.param_list(db) else {
        return Err(reparse_error("the reparse wrapper lost its parameter list"));
    };

    let params: Vec<_> = param_list.params(db).collect();
    let &[param] = params.as_slice() else {
        return Err(MakeError::ReparseAmbiguity { count: params.len() });
    };

    let node = single_child_node(db, param.syntax(), "type")?;
    let ty: Type<'db> = expect_kind(db, node, "a type")?;
    covers_snippet(db, ty.syntax(), text, "type")?;
    Ok(ty)
}

/// Parses `text` as a single item.
pub fn item_from_text<'db>(db: &'db dyn Database, text: &str) -> Result<Item<'db>> {
    let root = parse_wrapper(db, text)?;
    let node = single_child_node(db, root, "item")?;
    expect_kind(db, node, "an item")
}

fn parse_wrapper<'db>(db: &'db dyn Database, wrapper: &str) -> Result<GreenNode<'db>> {
    let parse = veld_parse::module(db, wrapper);

    if !parse.diagnostics().is_empty() {
        let details = parse
            .diagnostics()
            .iter()
            .map(|diagnostic| diagnostic.render("synthesized.veld", wrapper))
            .collect::<Vec<_>>()
            .join("\n");
        return Err(MakeError::Reparse { details });
    }

    Ok(parse.root())
}

fn wrapper_body<'db>(db: &'db dyn Database, wrapper: &str) -> Result<ast::BlockExpr<'db>> {
    let root = parse_wrapper(db, wrapper)?;
    let fn_: ast::Fn =
        expect_kind(db, single_child_node(db, root, "function")?, "a function")?;

    match fn_.body(db) {
        Some(body) => Ok(body),
        None => Err(reparse_error("the reparse wrapper lost its function body")),
    }
}

/// The only child node of `parent`; zero or several candidates mean the
/// snippet did not stay a single node of the expected shape.
fn single_child_node<'db>(
    db: &'db dyn Database,
    parent: GreenNode<'db>,
    expected: &'static str,
) -> Result<GreenNode<'db>> {
    let mut nodes = parent.child_nodes(db);
    let Some(first) = nodes.next() else {
        return Err(reparse_error(format!("no {expected} node in the reparsed wrapper")));
    };

    let extra = nodes.count();
    if extra > 0 {
        return Err(MakeError::ReparseAmbiguity { count: extra + 1 });
    }

    Ok(first)
}

fn expect_kind<'db, N: Node<'db>>(
    db: &'db dyn Database,
    node: GreenNode<'db>,
    expected: &'static str,
) -> Result<N> {
    N::cast(db, node).ok_or(MakeError::ReparseKind { expected, found: node.kind(db) })
}

/// The extracted node must account for the entire snippet; anything left
/// over leaked into the surrounding wrapper.
fn covers_snippet<'db>(
    db: &'db dyn Database,
    node: GreenNode<'db>,
    text: &str,
    what: &'static str,
) -> Result<()> {
    if node.text(db) == text.trim() {
        Ok(())
    } else {
        Err(reparse_error(format!("the snippet did not reparse as a single {what}")))
    }
}

fn reparse_error(details: impl Into<String>) -> MakeError {
    MakeError::Reparse { details: details.into() }
}
