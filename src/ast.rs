/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// A tree is either a single integer literal or a binary operation that owns
/// its two operands. Parentheses leave no trace in the tree: grouping is
/// expressed purely by its shape. Every node remembers the character offset it
/// came from so the evaluator can point at the failing operator.
///
/// Operator chains fold into trees as deep as the chain is long, so rendering
/// and dropping a tree never recurse once per level.
#[derive(Debug, PartialEq, Eq)]
pub enum Expr {
    /// A non-negative integer literal.
    Literal {
        /// The constant value.
        value:    i64,
        /// Character offset of the literal in the source.
        position: usize,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:     Box<Self>,
        /// The operator.
        op:       BinaryOperator,
        /// Right operand.
        right:    Box<Self>,
        /// Character offset of the operator in the source.
        position: usize,
    },
}

/// A step of the renderer: a subtree still to be written or a fixed piece of
/// text.
enum Piece<'a> {
    Node(&'a Expr),
    Text(&'static str),
    Operator(BinaryOperator),
}

/// Renders the tree fully parenthesized, e.g. `((10 - 2) - 3)`.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut pending = vec![Piece::Node(self)];

        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Node(Self::Literal { value, .. }) => write!(f, "{value}")?,
                Piece::Node(Self::BinaryOp { left, op, right, .. }) => {
                    f.write_str("(")?;
                    pending.extend([Piece::Text(")"),
                                    Piece::Node(right),
                                    Piece::Operator(*op),
                                    Piece::Node(left)]);
                },
                Piece::Text(text) => f.write_str(text)?,
                Piece::Operator(op) => write!(f, " {op} ")?,
            }
        }

        Ok(())
    }
}

/// Children are detached onto a heap stack before their parent is freed, so
/// every node is dropped with leaf children only.
impl Drop for Expr {
    fn drop(&mut self) {
        let Self::BinaryOp { left, right, .. } = self else {
            return;
        };
        if matches!((&**left, &**right), (Self::Literal { .. }, Self::Literal { .. })) {
            return;
        }

        let mut detached = vec![take_node(left), take_node(right)];
        while let Some(mut node) = detached.pop() {
            if let Self::BinaryOp { left, right, .. } = &mut node {
                detached.push(take_node(left));
                detached.push(take_node(right));
            }
        }
    }
}

/// Swaps a leaf into `slot` and returns the subtree that was there.
fn take_node(slot: &mut Expr) -> Expr {
    std::mem::replace(slot, Expr::Literal { value:    0,
                                            position: 0, })
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Returns `true` for the operators of the multiplicative tier (`*`, `/`),
    /// which bind tighter than `+` and `-`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
