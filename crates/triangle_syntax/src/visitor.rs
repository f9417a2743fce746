//! Visitor capability over the AST.
//!
//! [`Visitor`] has one method per concrete node variant. Each method receives the variant's
//! payload, the node span and a caller-supplied context, and returns the caller-chosen
//! [`Visitor::Output`]. [`Visitable::accept`] routes a node to exactly one of those methods.
//!
//! ## Notes
//! - No method has a default body, so an implementation that forgets a variant is rejected at
//!   compile time. Traversal into children is the visitor's own business: call `accept` on the
//!   children you want to visit.
//!
//! ```rust,compile_fail
//! use triangle_syntax::ast::{Program, Span};
//! use triangle_syntax::visitor::Visitor;
//!
//! struct OnlyPrograms;
//!
//! impl Visitor for OnlyPrograms {
//!     type Context = ();
//!     type Output = ();
//!
//!     fn visit_program(&mut self, _node: &Program, _span: Span, _ctx: &mut ()) {}
//! }
//! ```

use crate::ast::*;

macro_rules! node_kinds {
    ($($kind:ident),* $(,)?) => {
        /// Identity of a concrete node variant, one per `visit_*` method.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum NodeKind {
            $($kind),*
        }

        impl NodeKind {
            /// The variant's name, e.g. `"DoWhileCommand"`.
            pub fn name(self) -> &'static str {
                match self {
                    $(NodeKind::$kind => stringify!($kind)),*
                }
            }
        }
    };
}

node_kinds!(
    Program,
    // Commands
    SequentialCommand,
    AssignCommand,
    CallCommand,
    IfCommand,
    ElsifCommand,
    WhileCommand,
    UntilCommand,
    DoWhileCommand,
    DoUntilCommand,
    ForCommand,
    LetCommand,
    NothingCommand,
    // Expressions
    IntegerExpression,
    CharacterExpression,
    ArrayExpression,
    RecordExpression,
    VnameExpression,
    CallExpression,
    LetExpression,
    IfExpression,
    UnaryExpression,
    BinaryExpression,
    // Aggregates
    SingleArrayAggregate,
    MultipleArrayAggregate,
    SingleRecordAggregate,
    MultipleRecordAggregate,
    // Vnames
    SimpleVname,
    DotVname,
    SubscriptVname,
    // Declarations
    ConstDeclaration,
    VarDeclaration,
    VarInitializedDeclaration,
    ProcDeclaration,
    FuncDeclaration,
    TypeDeclaration,
    RecDeclaration,
    PrivateDeclaration,
    SequentialDeclaration,
    ProcFuncs,
    // Parameters
    ConstFormalParameter,
    VarFormalParameter,
    ProcFormalParameter,
    FuncFormalParameter,
    EmptyFormalParameterSequence,
    SingleFormalParameterSequence,
    MultipleFormalParameterSequence,
    ConstActualParameter,
    VarActualParameter,
    ProcActualParameter,
    FuncActualParameter,
    EmptyActualParameterSequence,
    SingleActualParameterSequence,
    MultipleActualParameterSequence,
    // Type denoters
    SimpleTypeDenoter,
    ArrayTypeDenoter,
    StaticArrayTypeDenoter,
    RecordTypeDenoter,
    SingleFieldTypeDenoter,
    MultipleFieldTypeDenoter,
    // Terminals
    Identifier,
    IntegerLiteral,
    CharacterLiteral,
    Operator,
);

/// One method per concrete node variant, none of them defaulted.
///
/// Adding a node variant adds a method here, so every visitor has to decide what the new variant
/// means before the crate builds again.
pub trait Visitor {
    /// Caller-supplied state threaded through the traversal.
    type Context;
    /// Caller-chosen result of each visit.
    type Output;

    fn visit_program(&mut self, node: &Program, span: Span, ctx: &mut Self::Context) -> Self::Output;

    // ========================================================================
    // Commands
    // ========================================================================

    fn visit_sequential_command(&mut self, node: &SequentialCommand, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_assign_command(&mut self, node: &AssignCommand, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_call_command(&mut self, node: &CallCommand, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_if_command(&mut self, node: &IfCommand, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_elsif_command(&mut self, node: &ElsifCommand, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_while_command(&mut self, node: &WhileCommand, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_until_command(&mut self, node: &UntilCommand, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_do_while_command(&mut self, node: &DoWhileCommand, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_do_until_command(&mut self, node: &DoUntilCommand, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_for_command(&mut self, node: &ForCommand, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_let_command(&mut self, node: &LetCommand, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_nothing_command(&mut self, span: Span, ctx: &mut Self::Context) -> Self::Output;

    // ========================================================================
    // Expressions
    // ========================================================================

    fn visit_integer_expression(&mut self, node: &IntegerExpression, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_character_expression(
        &mut self,
        node: &CharacterExpression,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_array_expression(&mut self, node: &ArrayExpression, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_record_expression(&mut self, node: &RecordExpression, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_vname_expression(&mut self, node: &VnameExpression, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_call_expression(&mut self, node: &CallExpression, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_let_expression(&mut self, node: &LetExpression, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_if_expression(&mut self, node: &IfExpression, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_unary_expression(&mut self, node: &UnaryExpression, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_binary_expression(&mut self, node: &BinaryExpression, span: Span, ctx: &mut Self::Context) -> Self::Output;

    // ========================================================================
    // Aggregates
    // ========================================================================

    fn visit_single_array_aggregate(
        &mut self,
        node: &SingleArrayAggregate,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_multiple_array_aggregate(
        &mut self,
        node: &MultipleArrayAggregate,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_single_record_aggregate(
        &mut self,
        node: &SingleRecordAggregate,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_multiple_record_aggregate(
        &mut self,
        node: &MultipleRecordAggregate,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;

    // ========================================================================
    // Vnames
    // ========================================================================

    fn visit_simple_vname(&mut self, node: &SimpleVname, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_dot_vname(&mut self, node: &DotVname, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_subscript_vname(&mut self, node: &SubscriptVname, span: Span, ctx: &mut Self::Context) -> Self::Output;

    // ========================================================================
    // Declarations
    // ========================================================================

    fn visit_const_declaration(&mut self, node: &ConstDeclaration, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_var_declaration(&mut self, node: &VarDeclaration, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_var_initialized_declaration(
        &mut self,
        node: &VarInitializedDeclaration,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_proc_declaration(&mut self, node: &ProcDeclaration, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_func_declaration(&mut self, node: &FuncDeclaration, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_type_declaration(&mut self, node: &TypeDeclaration, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_rec_declaration(&mut self, node: &RecDeclaration, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_private_declaration(
        &mut self,
        node: &PrivateDeclaration,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_sequential_declaration(
        &mut self,
        node: &SequentialDeclaration,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_proc_funcs(&mut self, node: &ProcFuncs, span: Span, ctx: &mut Self::Context) -> Self::Output;

    // ========================================================================
    // Parameters
    // ========================================================================

    fn visit_const_formal_parameter(
        &mut self,
        node: &ConstFormalParameter,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_var_formal_parameter(
        &mut self,
        node: &VarFormalParameter,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_proc_formal_parameter(
        &mut self,
        node: &ProcFormalParameter,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_func_formal_parameter(
        &mut self,
        node: &FuncFormalParameter,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_empty_formal_parameter_sequence(&mut self, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_single_formal_parameter_sequence(
        &mut self,
        node: &SingleFormalParameterSequence,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_multiple_formal_parameter_sequence(
        &mut self,
        node: &MultipleFormalParameterSequence,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_const_actual_parameter(
        &mut self,
        node: &ConstActualParameter,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_var_actual_parameter(
        &mut self,
        node: &VarActualParameter,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_proc_actual_parameter(
        &mut self,
        node: &ProcActualParameter,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_func_actual_parameter(
        &mut self,
        node: &FuncActualParameter,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_empty_actual_parameter_sequence(&mut self, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_single_actual_parameter_sequence(
        &mut self,
        node: &SingleActualParameterSequence,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_multiple_actual_parameter_sequence(
        &mut self,
        node: &MultipleActualParameterSequence,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;

    // ========================================================================
    // Type denoters
    // ========================================================================

    fn visit_simple_type_denoter(&mut self, node: &SimpleTypeDenoter, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_array_type_denoter(&mut self, node: &ArrayTypeDenoter, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_static_array_type_denoter(
        &mut self,
        node: &StaticArrayTypeDenoter,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_record_type_denoter(&mut self, node: &RecordTypeDenoter, span: Span, ctx: &mut Self::Context) -> Self::Output;
    fn visit_single_field_type_denoter(
        &mut self,
        node: &SingleFieldTypeDenoter,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;
    fn visit_multiple_field_type_denoter(
        &mut self,
        node: &MultipleFieldTypeDenoter,
        span: Span,
        ctx: &mut Self::Context,
    ) -> Self::Output;

    // ========================================================================
    // Terminals
    // ========================================================================

    fn visit_identifier(&mut self, node: &Identifier, ctx: &mut Self::Context) -> Self::Output;
    fn visit_integer_literal(&mut self, node: &IntegerLiteral, ctx: &mut Self::Context) -> Self::Output;
    fn visit_character_literal(&mut self, node: &CharacterLiteral, ctx: &mut Self::Context) -> Self::Output;
    fn visit_operator(&mut self, node: &Operator, ctx: &mut Self::Context) -> Self::Output;
}

/// Routes a node to the one [`Visitor`] method matching its variant.
pub trait Visitable {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output;
}

impl Visitable for Program {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        visitor.visit_program(self, self.span, ctx)
    }
}

impl Visitable for Spanned<Command> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        let span = self.span;
        match &self.node {
            Command::Sequential(node) => visitor.visit_sequential_command(node, span, ctx),
            Command::Assign(node) => visitor.visit_assign_command(node, span, ctx),
            Command::Call(node) => visitor.visit_call_command(node, span, ctx),
            Command::If(node) => visitor.visit_if_command(node, span, ctx),
            Command::While(node) => visitor.visit_while_command(node, span, ctx),
            Command::Until(node) => visitor.visit_until_command(node, span, ctx),
            Command::DoWhile(node) => visitor.visit_do_while_command(node, span, ctx),
            Command::DoUntil(node) => visitor.visit_do_until_command(node, span, ctx),
            Command::For(node) => visitor.visit_for_command(node, span, ctx),
            Command::Let(node) => visitor.visit_let_command(node, span, ctx),
            Command::Nothing => visitor.visit_nothing_command(span, ctx),
        }
    }
}

impl Visitable for ElseBranch {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        match self {
            ElseBranch::Elsif(arm) => visitor.visit_elsif_command(&arm.node, arm.span, ctx),
            ElseBranch::Else(command) => command.accept(visitor, ctx),
        }
    }
}

impl Visitable for Spanned<Expression> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        let span = self.span;
        match &self.node {
            Expression::Integer(node) => visitor.visit_integer_expression(node, span, ctx),
            Expression::Character(node) => visitor.visit_character_expression(node, span, ctx),
            Expression::Array(node) => visitor.visit_array_expression(node, span, ctx),
            Expression::Record(node) => visitor.visit_record_expression(node, span, ctx),
            Expression::Vname(node) => visitor.visit_vname_expression(node, span, ctx),
            Expression::Call(node) => visitor.visit_call_expression(node, span, ctx),
            Expression::Let(node) => visitor.visit_let_expression(node, span, ctx),
            Expression::If(node) => visitor.visit_if_expression(node, span, ctx),
            Expression::Unary(node) => visitor.visit_unary_expression(node, span, ctx),
            Expression::Binary(node) => visitor.visit_binary_expression(node, span, ctx),
        }
    }
}

impl Visitable for Spanned<ArrayAggregate> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        match &self.node {
            ArrayAggregate::Single(node) => visitor.visit_single_array_aggregate(node, self.span, ctx),
            ArrayAggregate::Multiple(node) => visitor.visit_multiple_array_aggregate(node, self.span, ctx),
        }
    }
}

impl Visitable for Spanned<RecordAggregate> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        match &self.node {
            RecordAggregate::Single(node) => visitor.visit_single_record_aggregate(node, self.span, ctx),
            RecordAggregate::Multiple(node) => visitor.visit_multiple_record_aggregate(node, self.span, ctx),
        }
    }
}

impl Visitable for Spanned<Vname> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        match &self.node {
            Vname::Simple(node) => visitor.visit_simple_vname(node, self.span, ctx),
            Vname::Dot(node) => visitor.visit_dot_vname(node, self.span, ctx),
            Vname::Subscript(node) => visitor.visit_subscript_vname(node, self.span, ctx),
        }
    }
}

impl Visitable for Spanned<Declaration> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        let span = self.span;
        match &self.node {
            Declaration::Const(node) => visitor.visit_const_declaration(node, span, ctx),
            Declaration::Var(node) => visitor.visit_var_declaration(node, span, ctx),
            Declaration::VarInitialized(node) => visitor.visit_var_initialized_declaration(node, span, ctx),
            Declaration::Proc(node) => visitor.visit_proc_declaration(node, span, ctx),
            Declaration::Func(node) => visitor.visit_func_declaration(node, span, ctx),
            Declaration::Type(node) => visitor.visit_type_declaration(node, span, ctx),
            Declaration::Rec(node) => visitor.visit_rec_declaration(node, span, ctx),
            Declaration::Private(node) => visitor.visit_private_declaration(node, span, ctx),
            Declaration::Sequential(node) => visitor.visit_sequential_declaration(node, span, ctx),
        }
    }
}

impl Visitable for Spanned<ProcFunc> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        match &self.node {
            ProcFunc::Proc(node) => visitor.visit_proc_declaration(node, self.span, ctx),
            ProcFunc::Func(node) => visitor.visit_func_declaration(node, self.span, ctx),
        }
    }
}

impl Visitable for Spanned<ProcFuncs> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        visitor.visit_proc_funcs(&self.node, self.span, ctx)
    }
}

impl Visitable for ProcFuncsTail {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        match self {
            ProcFuncsTail::Last(member) => member.accept(visitor, ctx),
            ProcFuncsTail::More(rest) => rest.accept(visitor, ctx),
        }
    }
}

impl Visitable for Spanned<FormalParameter> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        let span = self.span;
        match &self.node {
            FormalParameter::Const(node) => visitor.visit_const_formal_parameter(node, span, ctx),
            FormalParameter::Var(node) => visitor.visit_var_formal_parameter(node, span, ctx),
            FormalParameter::Proc(node) => visitor.visit_proc_formal_parameter(node, span, ctx),
            FormalParameter::Func(node) => visitor.visit_func_formal_parameter(node, span, ctx),
        }
    }
}

impl Visitable for Spanned<FormalParameterSequence> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        let span = self.span;
        match &self.node {
            FormalParameterSequence::Empty => visitor.visit_empty_formal_parameter_sequence(span, ctx),
            FormalParameterSequence::Single(node) => visitor.visit_single_formal_parameter_sequence(node, span, ctx),
            FormalParameterSequence::Multiple(node) => visitor.visit_multiple_formal_parameter_sequence(node, span, ctx),
        }
    }
}

impl Visitable for Spanned<ActualParameter> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        let span = self.span;
        match &self.node {
            ActualParameter::Const(node) => visitor.visit_const_actual_parameter(node, span, ctx),
            ActualParameter::Var(node) => visitor.visit_var_actual_parameter(node, span, ctx),
            ActualParameter::Proc(node) => visitor.visit_proc_actual_parameter(node, span, ctx),
            ActualParameter::Func(node) => visitor.visit_func_actual_parameter(node, span, ctx),
        }
    }
}

impl Visitable for Spanned<ActualParameterSequence> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        let span = self.span;
        match &self.node {
            ActualParameterSequence::Empty => visitor.visit_empty_actual_parameter_sequence(span, ctx),
            ActualParameterSequence::Single(node) => visitor.visit_single_actual_parameter_sequence(node, span, ctx),
            ActualParameterSequence::Multiple(node) => visitor.visit_multiple_actual_parameter_sequence(node, span, ctx),
        }
    }
}

impl Visitable for Spanned<TypeDenoter> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        let span = self.span;
        match &self.node {
            TypeDenoter::Simple(node) => visitor.visit_simple_type_denoter(node, span, ctx),
            TypeDenoter::ArrayDynamic(node) => visitor.visit_array_type_denoter(node, span, ctx),
            TypeDenoter::ArrayStatic(node) => visitor.visit_static_array_type_denoter(node, span, ctx),
            TypeDenoter::Record(node) => visitor.visit_record_type_denoter(node, span, ctx),
        }
    }
}

impl Visitable for Spanned<FieldTypeDenoter> {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        match &self.node {
            FieldTypeDenoter::Single(node) => visitor.visit_single_field_type_denoter(node, self.span, ctx),
            FieldTypeDenoter::Multiple(node) => visitor.visit_multiple_field_type_denoter(node, self.span, ctx),
        }
    }
}

impl Visitable for Identifier {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        visitor.visit_identifier(self, ctx)
    }
}

impl Visitable for IntegerLiteral {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        visitor.visit_integer_literal(self, ctx)
    }
}

impl Visitable for CharacterLiteral {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        visitor.visit_character_literal(self, ctx)
    }
}

impl Visitable for Operator {
    fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V, ctx: &mut V::Context) -> V::Output {
        visitor.visit_operator(self, ctx)
    }
}
