/// A complete parsed program: the list of top-level statements.
///
/// Produced once by the parser and never mutated afterwards; the evaluator
/// only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A braced sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree node representing a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// A mutable binding: `let x = <expr>`.
    Let {
        /// Name being bound.
        name:  String,
        /// Expression producing the bound value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// An immutable binding: `const x = <expr>`.
    Const {
        /// Name being bound.
        name:  String,
        /// Expression producing the bound value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// An early return: `return <expr>`.
    Return {
        /// Expression producing the returned value.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A bare expression in statement position.
    Expression {
        /// The inner expression.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// An abstract syntax tree node representing an expression.
///
/// Each variant models a distinct syntactic construct and carries the source
/// line it started on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal's value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral {
        /// The literal's value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal, without its surrounding quotes.
    StringLiteral {
        /// The literal's text.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operation: `-x` or `!x`.
    UnaryOp {
        /// The operator to apply.
        op:   UnaryOperator,
        /// The operand.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// An infix operation, including the assignment forms.
    BinaryOp {
        /// Left operand. For assignments this is the target.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A conditional: `if (cond) { … }` with an optional `else { … }`.
    If {
        /// The condition, tested for truthiness.
        condition:   Box<Self>,
        /// Branch taken when the condition is truthy.
        consequence: Block,
        /// Branch taken otherwise, if present.
        alternative: Option<Block>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A C-style loop: `for (let i = 0; cond; post;) { … }`.
    For {
        /// The initializer. Always a [`Statement::Let`]; the parser
        /// guarantees it.
        init:      Box<Statement>,
        /// The loop condition, tested for truthiness before each pass.
        condition: Box<Self>,
        /// The post statement, run after each pass of the body.
        post:      Box<Statement>,
        /// The loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// A function literal: `fn (a, b) { … }`, optionally named.
    ///
    /// A named literal (`fn add(a, b) { … }`) binds itself in the enclosing
    /// scope instead of producing a value.
    FunctionLiteral {
        /// The function's name, when the literal is named.
        name:       Option<String>,
        /// Parameter names in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body:       Block,
        /// Line number in the source code.
        line:       usize,
    },
    /// A call: `callee(arg, …)`.
    Call {
        /// The expression producing the callee.
        callee:    Box<Self>,
        /// Argument expressions in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

impl Expr {
    /// Returns the source line this expression starts on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::IntegerLiteral { line, .. }
            | Self::BooleanLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::If { line, .. }
            | Self::For { line, .. }
            | Self::FunctionLiteral { line, .. }
            | Self::Call { line, .. } => *line,
        }
    }
}

/// The prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation, `-`.
    Neg,
    /// Logical negation of truthiness, `!`.
    Not,
}

/// The infix operators, assignments included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `=`
    Assign,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
    /// `*=`
    MulAssign,
    /// `/=`
    DivAssign,
    /// `%=`
    ModAssign,
}

impl BinaryOperator {
    /// Whether this operator is one of the assignment forms.
    #[must_use]
    pub const fn is_assignment(self) -> bool {
        matches!(self,
                 Self::Assign
                 | Self::AddAssign
                 | Self::SubAssign
                 | Self::MulAssign
                 | Self::DivAssign
                 | Self::ModAssign)
    }

    /// The operator's source spelling, used in diagnostics.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::ModAssign => "%=",
        }
    }
}
