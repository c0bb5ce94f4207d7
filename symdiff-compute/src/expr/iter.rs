use super::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression is the last visited expression.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        self.last_visited.is_some_and(|last| std::ptr::eq(last, expr))
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            match expr {
                Expr::Constant(_) | Expr::Variable(_) => return self.visit(),
                Expr::Apply(apply) => {
                    // children are visited once the last operand has been
                    match apply.operands().last() {
                        Some(last) if !self.is_last_visited(last) => {
                            self.stack.extend(apply.operands().iter().rev());
                        },
                        _ => return self.visit(),
                    }
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::op::SIN;
    use super::*;

    #[test]
    fn post_order() {
        let x = Expr::variable("x").unwrap();
        let expr = Expr::unary(&SIN, x.clone() * Expr::Constant(2.0)) + Expr::Constant(1.0);
        let rendered = expr.post_order_iter()
            .map(|e| match e {
                Expr::Apply(apply) => apply.op().name.to_string(),
                leaf => leaf.to_string(),
            })
            .collect::<Vec<_>>();
        assert_eq!(rendered, vec!["x", "2", "*", "sin", "1", "+"]);
    }
}
