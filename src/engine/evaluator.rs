// ABOUTME: Depth-first reduction of expression trees to values
// ABOUTME: Unknown helpers mark the placeholder unresolved instead of erroring

use serde_json::Value;
use tracing::debug;

use crate::helpers::{Helper, Registry};
use crate::parser::Expression;

use super::context::Scope;

/// The outcome of evaluating one expression.
///
/// `Unresolved` means the placeholder cannot be evaluated at all (unknown
/// helper, unparseable body) and its original text must be kept verbatim.
/// Absent context references are `Resolved(Null)` - they substitute as
/// empty output, which is a different contract.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluated {
    Resolved(Value),
    Unresolved,
}

/// Walk an expression tree depth-first. Argument evaluation happens before
/// the helper runs; an unresolved argument makes the whole call unresolved.
pub fn evaluate(expression: &Expression, scope: &Scope<'_>, registry: &Registry) -> Evaluated {
    match expression {
        Expression::Literal(value) => Evaluated::Resolved(value.clone()),
        Expression::Reference(path) => {
            Evaluated::Resolved(scope.lookup(path).cloned().unwrap_or(Value::Null))
        }
        Expression::Call { name, args } => {
            let function = match registry.get(name.as_str()) {
                Some(Helper::Inline(function)) => *function,
                Some(Helper::Block(_)) => {
                    debug!(helper = %name, "block helper used inline");
                    return Evaluated::Unresolved;
                }
                None => {
                    debug!(helper = %name, "unknown helper");
                    return Evaluated::Unresolved;
                }
            };
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                match evaluate(arg, scope, registry) {
                    Evaluated::Resolved(value) => values.push(value),
                    Evaluated::Unresolved => return Evaluated::Unresolved,
                }
            }
            Evaluated::Resolved(function(&values, scope))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::register_all;
    use crate::parser::expression::parse;
    use serde_json::json;

    #[test]
    fn test_reference_resolves_from_context() {
        let registry = register_all();
        let context = json!({"a": 10});
        let scope = Scope::new(&context);
        let expr = parse("a").unwrap();
        assert_eq!(
            evaluate(&expr, &scope, &registry),
            Evaluated::Resolved(json!(10))
        );
    }

    #[test]
    fn test_missing_reference_is_null() {
        let registry = register_all();
        let context = json!({});
        let scope = Scope::new(&context);
        let expr = parse("missing").unwrap();
        assert_eq!(
            evaluate(&expr, &scope, &registry),
            Evaluated::Resolved(Value::Null)
        );
    }

    #[test]
    fn test_nested_call() {
        let registry = register_all();
        let context = json!({});
        let scope = Scope::new(&context);
        let expr = parse("join ( after ( split \"My name is: Joe Smith\" \" \" ) 3 ) \" \"")
            .unwrap();
        assert_eq!(
            evaluate(&expr, &scope, &registry),
            Evaluated::Resolved(json!("Joe Smith"))
        );
    }

    #[test]
    fn test_unknown_helper_is_unresolved() {
        let registry = register_all();
        let context = json!({});
        let scope = Scope::new(&context);
        let expr = parse("noSuchHelper a b").unwrap();
        assert_eq!(evaluate(&expr, &scope, &registry), Evaluated::Unresolved);
    }

    #[test]
    fn test_unknown_helper_in_argument_is_unresolved() {
        let registry = register_all();
        let context = json!({});
        let scope = Scope::new(&context);
        let expr = parse("add ( noSuchHelper 1 ) 2").unwrap();
        assert_eq!(evaluate(&expr, &scope, &registry), Evaluated::Unresolved);
    }
}
