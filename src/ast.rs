use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn symbol(self) -> char {
        match self {
            BinOp::Add => '+',
            BinOp::Sub => '-',
            BinOp::Mul => '*',
            BinOp::Div => '/',
        }
    }
}

/// Expression tree produced by the parser.
/// Every node owns its children; evaluation only reads the tree.
///
/// Left-associative operator chains such as `1 + 1 + ... + 1` nest on the
/// left as deep as they are long, so every walk over the tree iterates along
/// that left spine and only recurses into right operands and call arguments.
pub enum Ast {
    /// Numeric literal (e.g. 1, 3.14, 2e-3)
    Num(f64),
    /// Binary arithmetic. Unary minus is encoded as `0 - operand`.
    Binary {
        op: BinOp,
        lhs: Box<Ast>,
        rhs: Box<Ast>,
    },
    /// Function call name(args..). Arity is checked at evaluation time.
    Call { name: String, args: Vec<Ast> },
}

impl Ast {
    pub(crate) fn binary(op: BinOp, lhs: Ast, rhs: Ast) -> Ast {
        Ast::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// `0 - operand`, which keeps the sign-of-zero and NaN behaviour of subtraction.
    pub(crate) fn neg(operand: Ast) -> Ast {
        Ast::binary(BinOp::Sub, Ast::Num(0.0), operand)
    }

    /// Splits a run of binary nodes into its leftmost operand and the
    /// `(op, rhs)` pairs applied to it, in evaluation order.
    /// The returned operand is never `Binary`.
    pub(crate) fn left_spine(&self) -> (&Ast, Vec<(BinOp, &Ast)>) {
        let mut node = self;
        let mut chain = Vec::new();
        while let Ast::Binary { op, lhs, rhs } = node {
            chain.push((*op, rhs.as_ref()));
            node = lhs.as_ref();
        }
        chain.reverse();
        (node, chain)
    }
}

impl Clone for Ast {
    fn clone(&self) -> Self {
        let (first, chain) = self.left_spine();
        let mut node = match first {
            Ast::Num(v) => Ast::Num(*v),
            Ast::Call { name, args } => Ast::Call {
                name: name.clone(),
                args: args.clone(),
            },
            Ast::Binary { .. } => unreachable!("left spine ends at a non-binary node"),
        };
        for (op, rhs) in chain {
            node = Ast::binary(op, node, rhs.clone());
        }
        node
    }
}

impl PartialEq for Ast {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            match (a, b) {
                (Ast::Num(x), Ast::Num(y)) => {
                    if x != y {
                        return false;
                    }
                }
                (
                    Ast::Binary { op: o1, lhs: l1, rhs: r1 },
                    Ast::Binary { op: o2, lhs: l2, rhs: r2 },
                ) => {
                    if o1 != o2 {
                        return false;
                    }
                    pending.push((r1.as_ref(), r2.as_ref()));
                    pending.push((l1.as_ref(), l2.as_ref()));
                }
                (Ast::Call { name: n1, args: a1 }, Ast::Call { name: n2, args: a2 }) => {
                    if n1 != n2 || a1.len() != a2.len() {
                        return false;
                    }
                    pending.extend(a1.iter().zip(a2.iter()));
                }
                _ => return false,
            }
        }
        true
    }
}

impl Drop for Ast {
    fn drop(&mut self) {
        // Detach children onto a heap stack so dropping is not recursive.
        let mut stack = Vec::new();
        detach_children(self, &mut stack);
        while let Some(mut node) = stack.pop() {
            detach_children(&mut node, &mut stack);
        }
    }
}

fn detach_children(node: &mut Ast, stack: &mut Vec<Ast>) {
    match node {
        Ast::Num(_) => {}
        Ast::Binary { lhs, rhs, .. } => {
            if !matches!(**lhs, Ast::Num(_)) {
                stack.push(std::mem::replace(&mut **lhs, Ast::Num(0.0)));
            }
            if !matches!(**rhs, Ast::Num(_)) {
                stack.push(std::mem::replace(&mut **rhs, Ast::Num(0.0)));
            }
        }
        Ast::Call { args, .. } => stack.append(args),
    }
}

/// Same output as a derived `Debug` in its compact form.
impl fmt::Debug for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, chain) = self.left_spine();
        for (op, _) in chain.iter().rev() {
            write!(f, "Binary {{ op: {:?}, lhs: ", op)?;
        }
        match first {
            Ast::Num(v) => f.debug_tuple("Num").field(v).finish()?,
            Ast::Call { name, args } => f
                .debug_struct("Call")
                .field("name", name)
                .field("args", args)
                .finish()?,
            Ast::Binary { .. } => unreachable!("left spine ends at a non-binary node"),
        }
        for (_, rhs) in chain {
            write!(f, ", rhs: {:?} }}", rhs)?;
        }
        Ok(())
    }
}

/// Fully parenthesized rendering, mainly for logs and test diagnostics.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (first, chain) = self.left_spine();
        for _ in 0..chain.len() {
            f.write_str("(")?;
        }
        match first {
            Ast::Num(v) => write!(f, "{}", v)?,
            Ast::Call { name, args } => {
                write!(f, "{}(", name)?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", a)?;
                }
                f.write_str(")")?;
            }
            Ast::Binary { .. } => unreachable!("left spine ends at a non-binary node"),
        }
        for (op, rhs) in chain {
            write!(f, " {} {})", op.symbol(), rhs)?;
        }
        Ok(())
    }
}
