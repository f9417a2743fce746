//! Abstract Syntax Tree definitions for extended Triangle.
//!
//! Every node family is a closed `enum`; each variant wraps a named-field struct. Positioned nodes
//! are [`Spanned`] values, and the tree is strictly owned: children are held by value or `Box`,
//! never shared.
//!
//! ## Notes
//! - Nodes are built once by the parser and never mutated afterwards.
//! - Cons-list families ([`FormalParameterSequence`], [`ActualParameterSequence`],
//!   [`ArrayAggregate`], [`RecordAggregate`], [`FieldTypeDenoter`], [`ProcFuncs`]) are
//!   right-nested. Their `iter`-style helpers walk the chain without recursion.

use std::fmt;

/// Source location span (half-open byte offsets).
///
/// `end` is the offset just past the last character of the last token consumed for the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Zero-width span at `offset`, used for productions that consume no token.
    pub fn empty_at(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

// ============================================================================
// Terminals
// ============================================================================

/// A name, as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub spelling: String,
    pub span: Span,
}

/// An integer literal; the spelling is kept verbatim (no range check at this stage).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral {
    pub spelling: String,
    pub span: Span,
}

/// A character literal, spelled with its quotes (`'a'`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterLiteral {
    pub spelling: String,
    pub span: Span,
}

/// An operator such as `+`, `<=` or `\/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub spelling: String,
    pub span: Span,
}

macro_rules! terminal_constructor {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                pub fn new(spelling: impl Into<String>, span: Span) -> Self {
                    Self { spelling: spelling.into(), span }
                }
            }
        )*
    };
}

terminal_constructor!(Identifier, IntegerLiteral, CharacterLiteral, Operator);

impl CharacterLiteral {
    /// The quoted character, if the spelling has the `'c'` shape.
    pub fn value(&self) -> Option<char> {
        let mut chars = self.spelling.chars();
        match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some('\''), Some(c), Some('\''), None) => Some(c),
            _ => None,
        }
    }
}

// ============================================================================
// Program
// ============================================================================

/// The root of the tree: a single (possibly sequential) command.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub command: Spanned<Command>,
    pub span: Span,
}

// ============================================================================
// Commands
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Sequential(SequentialCommand),
    Assign(AssignCommand),
    Call(CallCommand),
    If(IfCommand),
    While(WhileCommand),
    Until(UntilCommand),
    DoWhile(DoWhileCommand),
    DoUntil(DoUntilCommand),
    For(ForCommand),
    Let(LetCommand),
    Nothing,
}

/// `C1 ; C2`
#[derive(Debug, Clone, PartialEq)]
pub struct SequentialCommand {
    pub first: Box<Spanned<Command>>,
    pub second: Box<Spanned<Command>>,
}

/// `V := E`
#[derive(Debug, Clone, PartialEq)]
pub struct AssignCommand {
    pub target: Spanned<Vname>,
    pub value: Spanned<Expression>,
}

/// `I ( APS )`
#[derive(Debug, Clone, PartialEq)]
pub struct CallCommand {
    pub callee: Identifier,
    pub args: Spanned<ActualParameterSequence>,
}

/// `if E then C (elsif E then C)* else C end`
#[derive(Debug, Clone, PartialEq)]
pub struct IfCommand {
    pub condition: Spanned<Expression>,
    pub then_branch: Box<Spanned<Command>>,
    pub alternative: ElseBranch,
}

/// Continuation of an if chain: another guarded arm, or the terminal `else` command.
#[derive(Debug, Clone, PartialEq)]
pub enum ElseBranch {
    Elsif(Box<Spanned<ElsifCommand>>),
    Else(Box<Spanned<Command>>),
}

/// `elsif E then C` plus everything after it, up to (not including) the closing `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct ElsifCommand {
    pub condition: Spanned<Expression>,
    pub then_branch: Box<Spanned<Command>>,
    pub alternative: ElseBranch,
}

impl ElseBranch {
    /// The terminal `else` command at the bottom of the chain.
    pub fn terminal(&self) -> &Spanned<Command> {
        let mut branch = self;
        loop {
            match branch {
                ElseBranch::Else(command) => return command,
                ElseBranch::Elsif(arm) => branch = &arm.node.alternative,
            }
        }
    }

    /// The `elsif` arms in source order.
    pub fn arms(&self) -> Vec<&Spanned<ElsifCommand>> {
        let mut arms = Vec::new();
        let mut branch = self;
        while let ElseBranch::Elsif(arm) = branch {
            arms.push(arm.as_ref());
            branch = &arm.node.alternative;
        }
        arms
    }
}

/// `loop while E do C end`
#[derive(Debug, Clone, PartialEq)]
pub struct WhileCommand {
    pub condition: Spanned<Expression>,
    pub body: Box<Spanned<Command>>,
}

/// `loop until E do C end`
#[derive(Debug, Clone, PartialEq)]
pub struct UntilCommand {
    pub condition: Spanned<Expression>,
    pub body: Box<Spanned<Command>>,
}

/// `loop do C while E end`
#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileCommand {
    pub body: Box<Spanned<Command>>,
    pub condition: Spanned<Expression>,
}

/// `loop do C until E end`
#[derive(Debug, Clone, PartialEq)]
pub struct DoUntilCommand {
    pub body: Box<Spanned<Command>>,
    pub condition: Spanned<Expression>,
}

/// `loop for I := E1 to E2 do C end`
#[derive(Debug, Clone, PartialEq)]
pub struct ForCommand {
    pub variable: Identifier,
    pub from: Spanned<Expression>,
    pub to: Spanned<Expression>,
    pub body: Box<Spanned<Command>>,
}

/// `let D in C end`
#[derive(Debug, Clone, PartialEq)]
pub struct LetCommand {
    pub declaration: Box<Spanned<Declaration>>,
    pub body: Box<Spanned<Command>>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Integer(IntegerExpression),
    Character(CharacterExpression),
    Array(ArrayExpression),
    Record(RecordExpression),
    Vname(VnameExpression),
    Call(CallExpression),
    Let(LetExpression),
    If(IfExpression),
    Unary(UnaryExpression),
    Binary(BinaryExpression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntegerExpression {
    pub literal: IntegerLiteral,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CharacterExpression {
    pub literal: CharacterLiteral,
}

/// `[ AA ]`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpression {
    pub aggregate: Box<Spanned<ArrayAggregate>>,
}

/// `{ RA }`
#[derive(Debug, Clone, PartialEq)]
pub struct RecordExpression {
    pub aggregate: Box<Spanned<RecordAggregate>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VnameExpression {
    pub vname: Box<Spanned<Vname>>,
}

/// `I ( APS )`
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Identifier,
    pub args: Box<Spanned<ActualParameterSequence>>,
}

/// `let D in E`
#[derive(Debug, Clone, PartialEq)]
pub struct LetExpression {
    pub declaration: Box<Spanned<Declaration>>,
    pub body: Box<Spanned<Expression>>,
}

/// `if E1 then E2 else E3`
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpression {
    pub condition: Box<Spanned<Expression>>,
    pub consequent: Box<Spanned<Expression>>,
    pub alternative: Box<Spanned<Expression>>,
}

/// `O E`
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator: Operator,
    pub operand: Box<Spanned<Expression>>,
}

/// `E1 O E2`; operators are left-associative with no precedence.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub left: Box<Spanned<Expression>>,
    pub operator: Operator,
    pub right: Box<Spanned<Expression>>,
}

// ============================================================================
// Aggregates
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum ArrayAggregate {
    Single(SingleArrayAggregate),
    Multiple(MultipleArrayAggregate),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SingleArrayAggregate {
    pub element: Box<Spanned<Expression>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultipleArrayAggregate {
    pub element: Box<Spanned<Expression>>,
    pub rest: Box<Spanned<ArrayAggregate>>,
}

impl ArrayAggregate {
    /// Elements in source order.
    pub fn elements(&self) -> Vec<&Spanned<Expression>> {
        let mut out = Vec::new();
        let mut cursor = self;
        loop {
            match cursor {
                ArrayAggregate::Single(single) => {
                    out.push(single.element.as_ref());
                    return out;
                }
                ArrayAggregate::Multiple(multiple) => {
                    out.push(multiple.element.as_ref());
                    cursor = &multiple.rest.node;
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RecordAggregate {
    Single(SingleRecordAggregate),
    Multiple(MultipleRecordAggregate),
}

/// `I ~ E`
#[derive(Debug, Clone, PartialEq)]
pub struct SingleRecordAggregate {
    pub field: Identifier,
    pub value: Box<Spanned<Expression>>,
}

/// `I ~ E , RA`
#[derive(Debug, Clone, PartialEq)]
pub struct MultipleRecordAggregate {
    pub field: Identifier,
    pub value: Box<Spanned<Expression>>,
    pub rest: Box<Spanned<RecordAggregate>>,
}

impl RecordAggregate {
    /// Field names in source order.
    pub fn field_names(&self) -> Vec<&str> {
        let mut out = Vec::new();
        let mut cursor = self;
        loop {
            match cursor {
                RecordAggregate::Single(single) => {
                    out.push(single.field.spelling.as_str());
                    return out;
                }
                RecordAggregate::Multiple(multiple) => {
                    out.push(multiple.field.spelling.as_str());
                    cursor = &multiple.rest.node;
                }
            }
        }
    }
}

// ============================================================================
// Value-or-variable names
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Vname {
    Simple(SimpleVname),
    Dot(DotVname),
    Subscript(SubscriptVname),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimpleVname {
    pub name: Identifier,
}

/// `V . I`
#[derive(Debug, Clone, PartialEq)]
pub struct DotVname {
    pub record: Box<Spanned<Vname>>,
    pub field: Identifier,
}

/// `V [ E ]`
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptVname {
    pub array: Box<Spanned<Vname>>,
    pub index: Box<Spanned<Expression>>,
}

impl Vname {
    /// The identifier at the root of the access path (`a` in `a.b[i].c`).
    pub fn root(&self) -> &Identifier {
        let mut cursor = self;
        loop {
            match cursor {
                Vname::Simple(simple) => return &simple.name,
                Vname::Dot(dot) => cursor = &dot.record.node,
                Vname::Subscript(subscript) => cursor = &subscript.array.node,
            }
        }
    }
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    Const(ConstDeclaration),
    Var(VarDeclaration),
    VarInitialized(VarInitializedDeclaration),
    Proc(ProcDeclaration),
    Func(FuncDeclaration),
    Type(TypeDeclaration),
    Rec(RecDeclaration),
    Private(PrivateDeclaration),
    Sequential(SequentialDeclaration),
}

/// `const I ~ E`
#[derive(Debug, Clone, PartialEq)]
pub struct ConstDeclaration {
    pub name: Identifier,
    pub value: Box<Spanned<Expression>>,
}

/// `var I : T`
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclaration {
    pub name: Identifier,
    pub ty: Box<Spanned<TypeDenoter>>,
}

/// `var I := E`
#[derive(Debug, Clone, PartialEq)]
pub struct VarInitializedDeclaration {
    pub name: Identifier,
    pub value: Box<Spanned<Expression>>,
}

/// `proc I ( FPS ) ~ C end`, or `proc I ( FPS ) ~ single-C` inside a `rec` group.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcDeclaration {
    pub name: Identifier,
    pub params: Box<Spanned<FormalParameterSequence>>,
    pub body: Box<Spanned<Command>>,
}

/// `func I ( FPS ) : T ~ E`
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDeclaration {
    pub name: Identifier,
    pub params: Box<Spanned<FormalParameterSequence>>,
    pub result_type: Box<Spanned<TypeDenoter>>,
    pub body: Box<Spanned<Expression>>,
}

/// `type I ~ T`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDeclaration {
    pub name: Identifier,
    pub ty: Box<Spanned<TypeDenoter>>,
}

/// `rec PF and PF (and PF)* end`
#[derive(Debug, Clone, PartialEq)]
pub struct RecDeclaration {
    pub group: Box<Spanned<ProcFuncs>>,
}

/// `private D1 in D2 end`: `D1` is visible only to `D2`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrivateDeclaration {
    pub local: Box<Spanned<Declaration>>,
    pub body: Box<Spanned<Declaration>>,
}

/// `D1 ; D2`
#[derive(Debug, Clone, PartialEq)]
pub struct SequentialDeclaration {
    pub first: Box<Spanned<Declaration>>,
    pub second: Box<Spanned<Declaration>>,
}

/// A member of a `rec` group.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcFunc {
    Proc(ProcDeclaration),
    Func(FuncDeclaration),
}

impl ProcFunc {
    pub fn name(&self) -> &Identifier {
        match self {
            ProcFunc::Proc(proc) => &proc.name,
            ProcFunc::Func(func) => &func.name,
        }
    }
}

/// Right-nested member chain of a `rec` group.
///
/// A chain always holds a `head` plus a non-empty `tail`, so a group of one cannot be built.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcFuncs {
    pub head: Box<Spanned<ProcFunc>>,
    pub tail: ProcFuncsTail,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProcFuncsTail {
    Last(Box<Spanned<ProcFunc>>),
    More(Box<Spanned<ProcFuncs>>),
}

impl ProcFuncs {
    /// Members in source order (always at least two).
    pub fn members(&self) -> Vec<&Spanned<ProcFunc>> {
        let mut out = vec![self.head.as_ref()];
        let mut tail = &self.tail;
        loop {
            match tail {
                ProcFuncsTail::Last(last) => {
                    out.push(last.as_ref());
                    return out;
                }
                ProcFuncsTail::More(more) => {
                    out.push(more.node.head.as_ref());
                    tail = &more.node.tail;
                }
            }
        }
    }
}

// ============================================================================
// Parameters
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum FormalParameter {
    Const(ConstFormalParameter),
    Var(VarFormalParameter),
    Proc(ProcFormalParameter),
    Func(FuncFormalParameter),
}

/// `I : T`
#[derive(Debug, Clone, PartialEq)]
pub struct ConstFormalParameter {
    pub name: Identifier,
    pub ty: Box<Spanned<TypeDenoter>>,
}

/// `var I : T`
#[derive(Debug, Clone, PartialEq)]
pub struct VarFormalParameter {
    pub name: Identifier,
    pub ty: Box<Spanned<TypeDenoter>>,
}

/// `proc I ( FPS )`
#[derive(Debug, Clone, PartialEq)]
pub struct ProcFormalParameter {
    pub name: Identifier,
    pub params: Box<Spanned<FormalParameterSequence>>,
}

/// `func I ( FPS ) : T`
#[derive(Debug, Clone, PartialEq)]
pub struct FuncFormalParameter {
    pub name: Identifier,
    pub params: Box<Spanned<FormalParameterSequence>>,
    pub result_type: Box<Spanned<TypeDenoter>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormalParameterSequence {
    Empty,
    Single(SingleFormalParameterSequence),
    Multiple(MultipleFormalParameterSequence),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SingleFormalParameterSequence {
    pub parameter: Box<Spanned<FormalParameter>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultipleFormalParameterSequence {
    pub parameter: Box<Spanned<FormalParameter>>,
    pub rest: Box<Spanned<FormalParameterSequence>>,
}

impl FormalParameterSequence {
    /// Parameters in source order.
    pub fn parameters(&self) -> Vec<&Spanned<FormalParameter>> {
        let mut out = Vec::new();
        let mut cursor = self;
        loop {
            match cursor {
                FormalParameterSequence::Empty => return out,
                FormalParameterSequence::Single(single) => {
                    out.push(single.parameter.as_ref());
                    return out;
                }
                FormalParameterSequence::Multiple(multiple) => {
                    out.push(multiple.parameter.as_ref());
                    cursor = &multiple.rest.node;
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActualParameter {
    Const(ConstActualParameter),
    Var(VarActualParameter),
    Proc(ProcActualParameter),
    Func(FuncActualParameter),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstActualParameter {
    pub value: Box<Spanned<Expression>>,
}

/// `var V`
#[derive(Debug, Clone, PartialEq)]
pub struct VarActualParameter {
    pub vname: Box<Spanned<Vname>>,
}

/// `proc I`
#[derive(Debug, Clone, PartialEq)]
pub struct ProcActualParameter {
    pub name: Identifier,
}

/// `func I`
#[derive(Debug, Clone, PartialEq)]
pub struct FuncActualParameter {
    pub name: Identifier,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActualParameterSequence {
    Empty,
    Single(SingleActualParameterSequence),
    Multiple(MultipleActualParameterSequence),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SingleActualParameterSequence {
    pub parameter: Box<Spanned<ActualParameter>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultipleActualParameterSequence {
    pub parameter: Box<Spanned<ActualParameter>>,
    pub rest: Box<Spanned<ActualParameterSequence>>,
}

impl ActualParameterSequence {
    /// Parameters in source order.
    pub fn parameters(&self) -> Vec<&Spanned<ActualParameter>> {
        let mut out = Vec::new();
        let mut cursor = self;
        loop {
            match cursor {
                ActualParameterSequence::Empty => return out,
                ActualParameterSequence::Single(single) => {
                    out.push(single.parameter.as_ref());
                    return out;
                }
                ActualParameterSequence::Multiple(multiple) => {
                    out.push(multiple.parameter.as_ref());
                    cursor = &multiple.rest.node;
                }
            }
        }
    }
}

// ============================================================================
// Type denoters
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum TypeDenoter {
    Simple(SimpleTypeDenoter),
    ArrayDynamic(ArrayTypeDenoter),
    ArrayStatic(StaticArrayTypeDenoter),
    Record(RecordTypeDenoter),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SimpleTypeDenoter {
    pub name: Identifier,
}

/// `array N of T`
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayTypeDenoter {
    pub length: IntegerLiteral,
    pub element: Box<Spanned<TypeDenoter>>,
}

/// `array N..M of T`
#[derive(Debug, Clone, PartialEq)]
pub struct StaticArrayTypeDenoter {
    pub lower: IntegerLiteral,
    pub upper: IntegerLiteral,
    pub element: Box<Spanned<TypeDenoter>>,
}

/// `record FT end`
#[derive(Debug, Clone, PartialEq)]
pub struct RecordTypeDenoter {
    pub fields: Box<Spanned<FieldTypeDenoter>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldTypeDenoter {
    Single(SingleFieldTypeDenoter),
    Multiple(MultipleFieldTypeDenoter),
}

/// `I : T`
#[derive(Debug, Clone, PartialEq)]
pub struct SingleFieldTypeDenoter {
    pub name: Identifier,
    pub ty: Box<Spanned<TypeDenoter>>,
}

/// `I : T , FT`
#[derive(Debug, Clone, PartialEq)]
pub struct MultipleFieldTypeDenoter {
    pub name: Identifier,
    pub ty: Box<Spanned<TypeDenoter>>,
    pub rest: Box<Spanned<FieldTypeDenoter>>,
}

impl TypeDenoter {
    /// Structural equivalence, ignoring source positions.
    ///
    /// ## Notes
    /// - Named types compare by spelling; no name resolution happens here.
    /// - Static arrays compare both bounds; a static array is never equivalent to a dynamic one.
    pub fn equivalent(&self, other: &TypeDenoter) -> bool {
        match (self, other) {
            (TypeDenoter::Simple(a), TypeDenoter::Simple(b)) => a.name.spelling == b.name.spelling,
            (TypeDenoter::ArrayDynamic(a), TypeDenoter::ArrayDynamic(b)) => {
                a.length.spelling == b.length.spelling && a.element.node.equivalent(&b.element.node)
            }
            (TypeDenoter::ArrayStatic(a), TypeDenoter::ArrayStatic(b)) => {
                a.lower.spelling == b.lower.spelling
                    && a.upper.spelling == b.upper.spelling
                    && a.element.node.equivalent(&b.element.node)
            }
            (TypeDenoter::Record(a), TypeDenoter::Record(b)) => a.fields.node.equivalent(&b.fields.node),
            _ => false,
        }
    }
}

impl FieldTypeDenoter {
    /// `(name, type)` pairs in source order.
    pub fn fields(&self) -> Vec<(&Identifier, &Spanned<TypeDenoter>)> {
        let mut out = Vec::new();
        let mut cursor = self;
        loop {
            match cursor {
                FieldTypeDenoter::Single(single) => {
                    out.push((&single.name, single.ty.as_ref()));
                    return out;
                }
                FieldTypeDenoter::Multiple(multiple) => {
                    out.push((&multiple.name, multiple.ty.as_ref()));
                    cursor = &multiple.rest.node;
                }
            }
        }
    }

    /// Field-by-field structural equivalence, ignoring source positions.
    pub fn equivalent(&self, other: &FieldTypeDenoter) -> bool {
        let (left, right) = (self.fields(), other.fields());
        left.len() == right.len()
            && left
                .iter()
                .zip(right.iter())
                .all(|((ln, lt), (rn, rt))| ln.spelling == rn.spelling && lt.node.equivalent(&rt.node))
    }
}

// ============================================================================
// Teardown
// ============================================================================
//
// Sequences and cons lists can be as long as the program text, and the derived
// drop glue recurses once per link. The `Drop` impls below detach each successor before the
// current link goes away, so a chain of any length is freed with bounded stack depth.

/// A node family whose values can point to a successor of the same family.
trait Chain: Sized {
    /// A leaf value that owns no successor, swapped in for a detached link.
    fn stub() -> Self;

    fn next_link(&mut self) -> Option<&mut Self>;
}

/// Free the chain hanging off `slot` one link at a time, leaving a stub in its place.
fn unlink<T: Chain>(slot: &mut T) {
    if slot.next_link().is_none() {
        return;
    }
    let mut cursor = std::mem::replace(slot, T::stub());
    while let Some(next) = cursor.next_link() {
        let following = std::mem::replace(next, T::stub());
        // The old cursor now ends in a stub, so dropping it stops after one level.
        cursor = following;
    }
}

fn blank_identifier() -> Identifier {
    Identifier::new(String::new(), Span::default())
}

fn leaf<T>(node: T) -> Box<Spanned<T>> {
    Box::new(Spanned::new(node, Span::default()))
}

impl Chain for Command {
    fn stub() -> Self {
        Command::Nothing
    }

    fn next_link(&mut self) -> Option<&mut Self> {
        match self {
            Command::Sequential(sequential) => Some(&mut sequential.first.node),
            _ => None,
        }
    }
}

impl Chain for Expression {
    fn stub() -> Self {
        Expression::Integer(IntegerExpression {
            literal: IntegerLiteral::new(String::new(), Span::default()),
        })
    }

    fn next_link(&mut self) -> Option<&mut Self> {
        match self {
            Expression::Binary(binary) => Some(&mut binary.left.node),
            _ => None,
        }
    }
}

impl Chain for Declaration {
    fn stub() -> Self {
        Declaration::Const(ConstDeclaration {
            name: blank_identifier(),
            value: leaf(Expression::stub()),
        })
    }

    fn next_link(&mut self) -> Option<&mut Self> {
        match self {
            Declaration::Sequential(sequential) => Some(&mut sequential.first.node),
            _ => None,
        }
    }
}

impl Chain for ElseBranch {
    fn stub() -> Self {
        ElseBranch::Else(leaf(Command::Nothing))
    }

    fn next_link(&mut self) -> Option<&mut Self> {
        match self {
            ElseBranch::Elsif(arm) => Some(&mut arm.node.alternative),
            ElseBranch::Else(_) => None,
        }
    }
}

impl Chain for ArrayAggregate {
    fn stub() -> Self {
        ArrayAggregate::Single(SingleArrayAggregate {
            element: leaf(Expression::stub()),
        })
    }

    fn next_link(&mut self) -> Option<&mut Self> {
        match self {
            ArrayAggregate::Multiple(multiple) => Some(&mut multiple.rest.node),
            ArrayAggregate::Single(_) => None,
        }
    }
}

impl Chain for RecordAggregate {
    fn stub() -> Self {
        RecordAggregate::Single(SingleRecordAggregate {
            field: blank_identifier(),
            value: leaf(Expression::stub()),
        })
    }

    fn next_link(&mut self) -> Option<&mut Self> {
        match self {
            RecordAggregate::Multiple(multiple) => Some(&mut multiple.rest.node),
            RecordAggregate::Single(_) => None,
        }
    }
}

impl Chain for ProcFuncsTail {
    fn stub() -> Self {
        ProcFuncsTail::Last(leaf(ProcFunc::Proc(ProcDeclaration {
            name: blank_identifier(),
            params: leaf(FormalParameterSequence::Empty),
            body: leaf(Command::Nothing),
        })))
    }

    fn next_link(&mut self) -> Option<&mut Self> {
        match self {
            ProcFuncsTail::More(more) => Some(&mut more.node.tail),
            ProcFuncsTail::Last(_) => None,
        }
    }
}

impl Chain for FormalParameterSequence {
    fn stub() -> Self {
        FormalParameterSequence::Empty
    }

    fn next_link(&mut self) -> Option<&mut Self> {
        match self {
            FormalParameterSequence::Multiple(multiple) => Some(&mut multiple.rest.node),
            _ => None,
        }
    }
}

impl Chain for ActualParameterSequence {
    fn stub() -> Self {
        ActualParameterSequence::Empty
    }

    fn next_link(&mut self) -> Option<&mut Self> {
        match self {
            ActualParameterSequence::Multiple(multiple) => Some(&mut multiple.rest.node),
            _ => None,
        }
    }
}

impl Chain for FieldTypeDenoter {
    fn stub() -> Self {
        FieldTypeDenoter::Single(SingleFieldTypeDenoter {
            name: blank_identifier(),
            ty: leaf(TypeDenoter::Simple(SimpleTypeDenoter {
                name: blank_identifier(),
            })),
        })
    }

    fn next_link(&mut self) -> Option<&mut Self> {
        match self {
            FieldTypeDenoter::Multiple(multiple) => Some(&mut multiple.rest.node),
            FieldTypeDenoter::Single(_) => None,
        }
    }
}

macro_rules! drop_by_unlinking {
    ($($ty:ident . $($field:ident).+),* $(,)?) => {
        $(
            impl Drop for $ty {
                fn drop(&mut self) {
                    unlink(&mut self.$($field).+);
                }
            }
        )*
    };
}

drop_by_unlinking!(
    SequentialCommand.first.node,
    ElsifCommand.alternative,
    BinaryExpression.left.node,
    MultipleArrayAggregate.rest.node,
    MultipleRecordAggregate.rest.node,
    SequentialDeclaration.first.node,
    ProcFuncs.tail,
    MultipleFormalParameterSequence.rest.node,
    MultipleActualParameterSequence.rest.node,
    MultipleFieldTypeDenoter.rest.node,
);
