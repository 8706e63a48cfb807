//! Operator tests kept apart from the small operator modules.

mod unary_operators_tests;
