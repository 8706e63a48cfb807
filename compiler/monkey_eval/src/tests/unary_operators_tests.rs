//! Tests for prefix operator semantics.

use monkey_ir::Operator;
use pretty_assertions::assert_eq;

use crate::object::{Object, FALSE, TRUE};
use crate::unary_operators::evaluate_prefix;
use crate::RuntimeError;

mod bang {
    use super::*;

    fn bang(obj: &Object) -> Object {
        match evaluate_prefix(Operator::Bang, obj) {
            Ok(result) => result,
            Err(err) => panic!("`!` never fails, got {err}"),
        }
    }

    #[test]
    fn flips_booleans() {
        assert!(bang(&Object::boolean(true)).ptr_eq(&FALSE));
        assert!(bang(&Object::boolean(false)).ptr_eq(&TRUE));
    }

    #[test]
    fn null_is_true() {
        assert!(bang(&Object::null()).ptr_eq(&TRUE));
    }

    #[test]
    fn integers_are_false_regardless_of_value() {
        for n in [5, 0, -1] {
            assert!(bang(&Object::integer(n)).ptr_eq(&FALSE), "!{n}");
        }
    }

    #[test]
    fn double_bang() {
        assert!(bang(&bang(&Object::boolean(true))).ptr_eq(&TRUE));
        assert!(bang(&bang(&Object::integer(5))).ptr_eq(&TRUE));
    }
}

mod minus {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn negates_integers() {
        assert_eq!(
            evaluate_prefix(Operator::Minus, &Object::integer(5)),
            Ok(Object::integer(-5))
        );
        assert_eq!(
            evaluate_prefix(Operator::Minus, &Object::integer(-10)),
            Ok(Object::integer(10))
        );
        assert_eq!(
            evaluate_prefix(Operator::Minus, &Object::integer(0)),
            Ok(Object::integer(0))
        );
    }

    #[test]
    fn min_wraps_to_itself() {
        assert_eq!(
            evaluate_prefix(Operator::Minus, &Object::integer(i64::MIN)),
            Ok(Object::integer(i64::MIN))
        );
    }

    #[test]
    fn boolean_operand_is_unknown() {
        let err = evaluate_prefix(Operator::Minus, &Object::boolean(true));
        assert_eq!(
            err.map_err(|e| e.to_string()),
            Err("unknown operator: -BOOLEAN".to_owned())
        );
    }

    #[test]
    fn null_operand_is_unknown() {
        let err = evaluate_prefix(Operator::Minus, &Object::null());
        assert_eq!(
            err.map_err(|e| e.to_string()),
            Err("unknown operator: -NULL".to_owned())
        );
    }
}

#[test]
fn other_prefix_operators_are_unknown() {
    assert_eq!(
        evaluate_prefix(Operator::Asterisk, &Object::integer(1)),
        Err(RuntimeError::UnknownPrefixOperator {
            operator: Operator::Asterisk,
            operand: crate::ObjectType::Integer,
        })
    );
    assert_eq!(
        evaluate_prefix(Operator::Plus, &Object::boolean(false))
            .map_err(|e| e.to_string()),
        Err("unknown operator: +BOOLEAN".to_owned())
    );
}
