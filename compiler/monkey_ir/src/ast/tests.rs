use pretty_assertions::assert_eq;

use super::*;

#[test]
fn operator_symbols_round_trip() {
    let all = [
        Operator::Plus,
        Operator::Minus,
        Operator::Asterisk,
        Operator::Slash,
        Operator::Bang,
        Operator::Lt,
        Operator::Gt,
        Operator::Eq,
        Operator::NotEq,
    ];
    for op in all {
        assert_eq!(Operator::from_symbol(op.as_symbol()), Some(op));
    }
}

#[test]
fn operator_display_is_source_symbol() {
    assert_eq!(Operator::NotEq.to_string(), "!=");
    assert_eq!(format!("{}{}", Operator::Minus, "BOOLEAN"), "-BOOLEAN");
}

#[test]
fn unknown_symbol_is_rejected() {
    assert_eq!(Operator::from_symbol("<="), None);
    assert_eq!(Operator::from_symbol(""), None);
}

#[test]
fn infix_constructor_boxes_operands() {
    let expr = Expression::infix(Expression::int(1), Operator::Plus, Expression::ident("x"));
    match expr {
        Expression::Infix {
            operator,
            left,
            right,
        } => {
            assert_eq!(operator, Operator::Plus);
            assert_eq!(*left, Expression::Integer(1));
            assert_eq!(*right, Expression::Identifier(Identifier::new("x")));
        }
        other => panic!("expected infix, got {other:?}"),
    }
}

#[test]
fn if_then_has_no_alternative() {
    let expr = Expression::if_then(Expression::bool(true), Expression::int(10).into());
    let Expression::If {
        consequence,
        alternative,
        ..
    } = expr
    else {
        panic!("expected if");
    };
    assert_eq!(consequence.statements, vec![Statement::Expression(Expression::int(10))]);
    assert!(alternative.is_none());
}

#[test]
fn node_views_borrow_each_kind() {
    let program = Program::new(vec![Statement::let_binding("x", Expression::int(5))]);
    assert!(matches!(Node::from(&program), Node::Program(p) if p.statements.len() == 1));

    let stmt = &program.statements[0];
    assert!(matches!(Node::from(stmt), Node::Statement(Statement::Let { .. })));

    let block = BlockStatement::default();
    assert!(matches!(Node::from(&block), Node::Block(b) if b.statements.is_empty()));
}

#[test]
fn identifier_displays_bare_name() {
    let name = Identifier::from("foobar");
    assert_eq!(name.as_str(), "foobar");
    assert_eq!(name.to_string(), "foobar");
}
