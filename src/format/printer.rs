//! Indented tree printer over the syntax tree.
//!
//! One line per node: the node kind, then (for terminals) the spelling, then the span. Children
//! follow one level deeper, in source order.

use super::writer::FormatWriter;
use crate::frontend::ast::*;
use crate::frontend::visitor::{NodeKind, Visitable, Visitor};

/// Writes each visited node into the [`FormatWriter`] passed as context.
pub struct TreePrinter;

impl TreePrinter {
    fn header(&self, label: &str, spelling: Option<&str>, span: Span, w: &mut FormatWriter) {
        let mut line = String::from(label);
        if let Some(spelling) = spelling.filter(|_| w.config().show_spellings) {
            line.push(' ');
            line.push_str(spelling);
        }
        if w.config().show_spans {
            line.push(' ');
            line.push_str(&span.to_string());
        }
        w.push_line(&line);
    }

    fn nested(
        &mut self,
        kind: NodeKind,
        span: Span,
        w: &mut FormatWriter,
        children: impl FnOnce(&mut Self, &mut FormatWriter),
    ) {
        self.header(kind.name(), None, span, w);
        w.indent();
        children(self, w);
        w.dedent();
    }

    fn terminal(&self, kind: NodeKind, spelling: &str, span: Span, w: &mut FormatWriter) {
        self.header(kind.name(), Some(spelling), span, w);
    }
}

impl Visitor for TreePrinter {
    type Context = FormatWriter;
    type Output = ();


    fn visit_program(&mut self, node: &Program, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::Program, span, w, |p, w| node.command.accept(p, w));
    }

    // ========================================================================
    // Commands
    // ========================================================================

    fn visit_sequential_command(&mut self, node: &SequentialCommand, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::SequentialCommand, span, w, |p, w| {
            node.first.accept(p, w);
            node.second.accept(p, w);
        });
    }

    fn visit_assign_command(&mut self, node: &AssignCommand, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::AssignCommand, span, w, |p, w| {
            node.target.accept(p, w);
            node.value.accept(p, w);
        });
    }

    fn visit_call_command(&mut self, node: &CallCommand, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::CallCommand, span, w, |p, w| {
            node.callee.accept(p, w);
            node.args.accept(p, w);
        });
    }

    fn visit_if_command(&mut self, node: &IfCommand, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::IfCommand, span, w, |p, w| {
            node.condition.accept(p, w);
            node.then_branch.accept(p, w);
            node.alternative.accept(p, w);
        });
    }

    fn visit_elsif_command(&mut self, node: &ElsifCommand, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::ElsifCommand, span, w, |p, w| {
            node.condition.accept(p, w);
            node.then_branch.accept(p, w);
            node.alternative.accept(p, w);
        });
    }

    fn visit_while_command(&mut self, node: &WhileCommand, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::WhileCommand, span, w, |p, w| {
            node.condition.accept(p, w);
            node.body.accept(p, w);
        });
    }

    fn visit_until_command(&mut self, node: &UntilCommand, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::UntilCommand, span, w, |p, w| {
            node.condition.accept(p, w);
            node.body.accept(p, w);
        });
    }

    fn visit_do_while_command(&mut self, node: &DoWhileCommand, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::DoWhileCommand, span, w, |p, w| {
            node.body.accept(p, w);
            node.condition.accept(p, w);
        });
    }

    fn visit_do_until_command(&mut self, node: &DoUntilCommand, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::DoUntilCommand, span, w, |p, w| {
            node.body.accept(p, w);
            node.condition.accept(p, w);
        });
    }

    fn visit_for_command(&mut self, node: &ForCommand, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::ForCommand, span, w, |p, w| {
            node.variable.accept(p, w);
            node.from.accept(p, w);
            node.to.accept(p, w);
            node.body.accept(p, w);
        });
    }

    fn visit_let_command(&mut self, node: &LetCommand, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::LetCommand, span, w, |p, w| {
            node.declaration.accept(p, w);
            node.body.accept(p, w);
        });
    }

    fn visit_nothing_command(&mut self, span: Span, w: &mut FormatWriter) {
        self.header(NodeKind::NothingCommand.name(), None, span, w);
    }

    // ========================================================================
    // Expressions
    // ========================================================================

    fn visit_integer_expression(&mut self, node: &IntegerExpression, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::IntegerExpression, span, w, |p, w| node.literal.accept(p, w));
    }

    fn visit_character_expression(&mut self, node: &CharacterExpression, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::CharacterExpression, span, w, |p, w| node.literal.accept(p, w));
    }

    fn visit_array_expression(&mut self, node: &ArrayExpression, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::ArrayExpression, span, w, |p, w| node.aggregate.accept(p, w));
    }

    fn visit_record_expression(&mut self, node: &RecordExpression, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::RecordExpression, span, w, |p, w| node.aggregate.accept(p, w));
    }

    fn visit_vname_expression(&mut self, node: &VnameExpression, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::VnameExpression, span, w, |p, w| node.vname.accept(p, w));
    }

    fn visit_call_expression(&mut self, node: &CallExpression, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::CallExpression, span, w, |p, w| {
            node.callee.accept(p, w);
            node.args.accept(p, w);
        });
    }

    fn visit_let_expression(&mut self, node: &LetExpression, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::LetExpression, span, w, |p, w| {
            node.declaration.accept(p, w);
            node.body.accept(p, w);
        });
    }

    fn visit_if_expression(&mut self, node: &IfExpression, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::IfExpression, span, w, |p, w| {
            node.condition.accept(p, w);
            node.consequent.accept(p, w);
            node.alternative.accept(p, w);
        });
    }

    fn visit_unary_expression(&mut self, node: &UnaryExpression, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::UnaryExpression, span, w, |p, w| {
            node.operator.accept(p, w);
            node.operand.accept(p, w);
        });
    }

    fn visit_binary_expression(&mut self, node: &BinaryExpression, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::BinaryExpression, span, w, |p, w| {
            node.left.accept(p, w);
            node.operator.accept(p, w);
            node.right.accept(p, w);
        });
    }

    // ========================================================================
    // Aggregates and value-or-variable names
    // ========================================================================

    fn visit_single_array_aggregate(&mut self, node: &SingleArrayAggregate, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::SingleArrayAggregate, span, w, |p, w| node.element.accept(p, w));
    }

    fn visit_multiple_array_aggregate(&mut self, node: &MultipleArrayAggregate, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::MultipleArrayAggregate, span, w, |p, w| {
            node.element.accept(p, w);
            node.rest.accept(p, w);
        });
    }

    fn visit_single_record_aggregate(&mut self, node: &SingleRecordAggregate, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::SingleRecordAggregate, span, w, |p, w| {
            node.field.accept(p, w);
            node.value.accept(p, w);
        });
    }

    fn visit_multiple_record_aggregate(&mut self, node: &MultipleRecordAggregate, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::MultipleRecordAggregate, span, w, |p, w| {
            node.field.accept(p, w);
            node.value.accept(p, w);
            node.rest.accept(p, w);
        });
    }

    fn visit_simple_vname(&mut self, node: &SimpleVname, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::SimpleVname, span, w, |p, w| node.name.accept(p, w));
    }

    fn visit_dot_vname(&mut self, node: &DotVname, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::DotVname, span, w, |p, w| {
            node.record.accept(p, w);
            node.field.accept(p, w);
        });
    }

    fn visit_subscript_vname(&mut self, node: &SubscriptVname, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::SubscriptVname, span, w, |p, w| {
            node.array.accept(p, w);
            node.index.accept(p, w);
        });
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn visit_const_declaration(&mut self, node: &ConstDeclaration, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::ConstDeclaration, span, w, |p, w| {
            node.name.accept(p, w);
            node.value.accept(p, w);
        });
    }

    fn visit_var_declaration(&mut self, node: &VarDeclaration, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::VarDeclaration, span, w, |p, w| {
            node.name.accept(p, w);
            node.ty.accept(p, w);
        });
    }

    fn visit_var_initialized_declaration(
        &mut self,
        node: &VarInitializedDeclaration,
        span: Span,
        w: &mut FormatWriter,
    ) {
        self.nested(NodeKind::VarInitializedDeclaration, span, w, |p, w| {
            node.name.accept(p, w);
            node.value.accept(p, w);
        });
    }

    fn visit_proc_declaration(&mut self, node: &ProcDeclaration, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::ProcDeclaration, span, w, |p, w| {
            node.name.accept(p, w);
            node.params.accept(p, w);
            node.body.accept(p, w);
        });
    }

    fn visit_func_declaration(&mut self, node: &FuncDeclaration, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::FuncDeclaration, span, w, |p, w| {
            node.name.accept(p, w);
            node.params.accept(p, w);
            node.result_type.accept(p, w);
            node.body.accept(p, w);
        });
    }

    fn visit_type_declaration(&mut self, node: &TypeDeclaration, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::TypeDeclaration, span, w, |p, w| {
            node.name.accept(p, w);
            node.ty.accept(p, w);
        });
    }

    fn visit_rec_declaration(&mut self, node: &RecDeclaration, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::RecDeclaration, span, w, |p, w| node.group.accept(p, w));
    }

    fn visit_private_declaration(&mut self, node: &PrivateDeclaration, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::PrivateDeclaration, span, w, |p, w| {
            node.local.accept(p, w);
            node.body.accept(p, w);
        });
    }

    fn visit_sequential_declaration(&mut self, node: &SequentialDeclaration, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::SequentialDeclaration, span, w, |p, w| {
            node.first.accept(p, w);
            node.second.accept(p, w);
        });
    }

    fn visit_proc_funcs(&mut self, node: &ProcFuncs, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::ProcFuncs, span, w, |p, w| {
            node.head.accept(p, w);
            node.tail.accept(p, w);
        });
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    fn visit_const_formal_parameter(&mut self, node: &ConstFormalParameter, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::ConstFormalParameter, span, w, |p, w| {
            node.name.accept(p, w);
            node.ty.accept(p, w);
        });
    }

    fn visit_var_formal_parameter(&mut self, node: &VarFormalParameter, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::VarFormalParameter, span, w, |p, w| {
            node.name.accept(p, w);
            node.ty.accept(p, w);
        });
    }

    fn visit_proc_formal_parameter(&mut self, node: &ProcFormalParameter, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::ProcFormalParameter, span, w, |p, w| {
            node.name.accept(p, w);
            node.params.accept(p, w);
        });
    }

    fn visit_func_formal_parameter(&mut self, node: &FuncFormalParameter, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::FuncFormalParameter, span, w, |p, w| {
            node.name.accept(p, w);
            node.params.accept(p, w);
            node.result_type.accept(p, w);
        });
    }

    fn visit_empty_formal_parameter_sequence(&mut self, span: Span, w: &mut FormatWriter) {
        self.header(NodeKind::EmptyFormalParameterSequence.name(), None, span, w);
    }

    fn visit_single_formal_parameter_sequence(
        &mut self,
        node: &SingleFormalParameterSequence,
        span: Span,
        w: &mut FormatWriter,
    ) {
        self.nested(NodeKind::SingleFormalParameterSequence, span, w, |p, w| {
            node.parameter.accept(p, w);
        });
    }

    fn visit_multiple_formal_parameter_sequence(
        &mut self,
        node: &MultipleFormalParameterSequence,
        span: Span,
        w: &mut FormatWriter,
    ) {
        self.nested(NodeKind::MultipleFormalParameterSequence, span, w, |p, w| {
            node.parameter.accept(p, w);
            node.rest.accept(p, w);
        });
    }

    fn visit_const_actual_parameter(&mut self, node: &ConstActualParameter, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::ConstActualParameter, span, w, |p, w| node.value.accept(p, w));
    }

    fn visit_var_actual_parameter(&mut self, node: &VarActualParameter, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::VarActualParameter, span, w, |p, w| node.vname.accept(p, w));
    }

    fn visit_proc_actual_parameter(&mut self, node: &ProcActualParameter, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::ProcActualParameter, span, w, |p, w| node.name.accept(p, w));
    }

    fn visit_func_actual_parameter(&mut self, node: &FuncActualParameter, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::FuncActualParameter, span, w, |p, w| node.name.accept(p, w));
    }

    fn visit_empty_actual_parameter_sequence(&mut self, span: Span, w: &mut FormatWriter) {
        self.header(NodeKind::EmptyActualParameterSequence.name(), None, span, w);
    }

    fn visit_single_actual_parameter_sequence(
        &mut self,
        node: &SingleActualParameterSequence,
        span: Span,
        w: &mut FormatWriter,
    ) {
        self.nested(NodeKind::SingleActualParameterSequence, span, w, |p, w| {
            node.parameter.accept(p, w);
        });
    }

    fn visit_multiple_actual_parameter_sequence(
        &mut self,
        node: &MultipleActualParameterSequence,
        span: Span,
        w: &mut FormatWriter,
    ) {
        self.nested(NodeKind::MultipleActualParameterSequence, span, w, |p, w| {
            node.parameter.accept(p, w);
            node.rest.accept(p, w);
        });
    }

    // ========================================================================
    // Type denoters
    // ========================================================================

    fn visit_simple_type_denoter(&mut self, node: &SimpleTypeDenoter, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::SimpleTypeDenoter, span, w, |p, w| node.name.accept(p, w));
    }

    fn visit_array_type_denoter(&mut self, node: &ArrayTypeDenoter, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::ArrayTypeDenoter, span, w, |p, w| {
            node.length.accept(p, w);
            node.element.accept(p, w);
        });
    }

    fn visit_static_array_type_denoter(&mut self, node: &StaticArrayTypeDenoter, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::StaticArrayTypeDenoter, span, w, |p, w| {
            node.lower.accept(p, w);
            node.upper.accept(p, w);
            node.element.accept(p, w);
        });
    }

    fn visit_record_type_denoter(&mut self, node: &RecordTypeDenoter, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::RecordTypeDenoter, span, w, |p, w| node.fields.accept(p, w));
    }

    fn visit_single_field_type_denoter(&mut self, node: &SingleFieldTypeDenoter, span: Span, w: &mut FormatWriter) {
        self.nested(NodeKind::SingleFieldTypeDenoter, span, w, |p, w| {
            node.name.accept(p, w);
            node.ty.accept(p, w);
        });
    }

    fn visit_multiple_field_type_denoter(
        &mut self,
        node: &MultipleFieldTypeDenoter,
        span: Span,
        w: &mut FormatWriter,
    ) {
        self.nested(NodeKind::MultipleFieldTypeDenoter, span, w, |p, w| {
            node.name.accept(p, w);
            node.ty.accept(p, w);
            node.rest.accept(p, w);
        });
    }

    // ========================================================================
    // Terminals
    // ========================================================================

    fn visit_identifier(&mut self, node: &Identifier, w: &mut FormatWriter) {
        self.terminal(NodeKind::Identifier, &node.spelling, node.span, w);
    }

    fn visit_integer_literal(&mut self, node: &IntegerLiteral, w: &mut FormatWriter) {
        self.terminal(NodeKind::IntegerLiteral, &node.spelling, node.span, w);
    }

    fn visit_character_literal(&mut self, node: &CharacterLiteral, w: &mut FormatWriter) {
        self.terminal(NodeKind::CharacterLiteral, &node.spelling, node.span, w);
    }

    fn visit_operator(&mut self, node: &Operator, w: &mut FormatWriter) {
        self.terminal(NodeKind::Operator, &node.spelling, node.span, w);
    }
}
