use crate::ast::*;
use crate::object::Object;

/// Tree-walking evaluator. Node kinds without semantics yet reduce to `None`.
#[derive(Debug, Default)]
pub struct Evaluator {}

impl Evaluator {
    pub fn new() -> Self {
        Self {}
    }

    /// Value of the last statement, or `None` for an empty program.
    pub fn eval(&mut self, program: &Program) -> Option<Object> {
        let result = self.eval_statements(&program.statements);
        match &result {
            Some(object) => tracing::trace!(kind = object.type_name(), %object, "evaluated"),
            None => tracing::trace!("evaluated to nothing"),
        }
        result
    }

    fn eval_statements(&mut self, statements: &[Statement]) -> Option<Object> {
        let mut result = None;
        for statement in statements {
            result = self.eval_statement(statement);
        }
        result
    }

    fn eval_statement(&mut self, statement: &Statement) -> Option<Object> {
        match statement {
            Statement::Expression(s) => self.eval_expression(&s.expression),
            Statement::Let(_) | Statement::Return(_) => {
                tracing::trace!(statement = %statement, "statement not evaluated");
                None
            }
        }
    }

    fn eval_expression(&mut self, expression: &Expression) -> Option<Object> {
        match expression {
            Expression::Integer(literal) => Some(Object::Integer(literal.value)),
            Expression::Identifier(_)
            | Expression::Boolean(_)
            | Expression::Prefix(_)
            | Expression::Infix(_)
            | Expression::If(_)
            | Expression::Function(_)
            | Expression::Call(_) => {
                tracing::trace!(expression = %expression, "expression not evaluated");
                None
            }
        }
    }
}
