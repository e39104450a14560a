//! Path rule conditions
//!
//! Conditions are parsed from small boolean expressions such as
//! `"skillLevel == beginner || fears contains voice_quality"` and evaluated
//! against the learner's skill level, goals and fears.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::types::SkillLevel;
use crate::error::{PaceError, Result};

/// The learner facts a condition can inspect
#[derive(Debug, Clone, Copy)]
pub struct PathContext<'a> {
    pub skill_level: SkillLevel,
    pub goals: &'a [&'a str],
    pub fears: &'a [&'a str],
}

impl<'a> PathContext<'a> {
    fn tags(&self, field: TagField) -> &'a [&'a str] {
        match field {
            TagField::Goals => self.goals,
            TagField::Fears => self.fears,
        }
    }
}

/// Multi-select answers a condition can test for membership
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    Goals,
    Fears,
}

impl TagField {
    fn as_str(&self) -> &'static str {
        match self {
            TagField::Goals => "goals",
            TagField::Fears => "fears",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillOperator {
    Eq,
    Ne,
}

/// A boolean condition over learner facts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Condition {
    Always,
    Skill {
        operator: SkillOperator,
        level: SkillLevel,
    },
    Contains {
        field: TagField,
        tag: String,
    },
    Any(Vec<Condition>),
    All(Vec<Condition>),
}

impl Condition {
    pub fn skill_is(level: SkillLevel) -> Self {
        Condition::Skill {
            operator: SkillOperator::Eq,
            level,
        }
    }

    pub fn goal(tag: &str) -> Self {
        Condition::Contains {
            field: TagField::Goals,
            tag: tag.to_string(),
        }
    }

    pub fn fear(tag: &str) -> Self {
        Condition::Contains {
            field: TagField::Fears,
            tag: tag.to_string(),
        }
    }

    pub fn any(conditions: Vec<Condition>) -> Self {
        Condition::Any(conditions)
    }

    pub fn all(conditions: Vec<Condition>) -> Self {
        Condition::All(conditions)
    }

    /// Evaluate against learner facts; absent tags simply never match
    pub fn evaluate(&self, ctx: &PathContext<'_>) -> bool {
        match self {
            Condition::Always => true,
            Condition::Skill { operator, level } => match operator {
                SkillOperator::Eq => ctx.skill_level == *level,
                SkillOperator::Ne => ctx.skill_level != *level,
            },
            Condition::Contains { field, tag } => ctx.tags(*field).contains(&tag.as_str()),
            Condition::Any(conditions) => conditions.iter().any(|c| c.evaluate(ctx)),
            Condition::All(conditions) => conditions.iter().all(|c| c.evaluate(ctx)),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Always => f.write_str("always"),
            Condition::All(conditions) if conditions.is_empty() => f.write_str("always"),
            Condition::Any(conditions) if conditions.is_empty() => f.write_str("never"),
            Condition::Skill { operator, level } => {
                let op = match operator {
                    SkillOperator::Eq => "==",
                    SkillOperator::Ne => "!=",
                };
                write!(f, "skillLevel {} {}", op, level)
            }
            Condition::Contains { field, tag } => {
                write!(f, "{} contains ", field.as_str())?;
                write_tag(f, tag)
            }
            Condition::Any(conditions) => {
                let parts: Vec<String> = conditions.iter().map(|c| c.to_string()).collect();
                f.write_str(&parts.join(" || "))
            }
            Condition::All(conditions) => {
                let parts: Vec<String> = conditions
                    .iter()
                    .map(|c| match c {
                        Condition::Any(inner) if !inner.is_empty() => format!("( {} )", c),
                        _ => c.to_string(),
                    })
                    .collect();
                f.write_str(&parts.join(" && "))
            }
        }
    }
}

/// Tags that would not survive tokenizing are written as quoted strings
fn write_tag(f: &mut fmt::Formatter<'_>, tag: &str) -> fmt::Result {
    let bare = !tag.is_empty()
        && !matches!(tag, "||" | "&&")
        && !tag
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '"' | '\\'));
    if bare {
        return f.write_str(tag);
    }

    f.write_str("\"")?;
    for c in tag.chars() {
        if matches!(c, '"' | '\\') {
            f.write_str("\\")?;
        }
        write!(f, "{}", c)?;
    }
    f.write_str("\"")
}

impl FromStr for Condition {
    type Err = PaceError;

    fn from_str(expr: &str) -> Result<Self> {
        parse_condition(expr)
    }
}

impl TryFrom<String> for Condition {
    type Error = PaceError;

    fn try_from(expr: String) -> Result<Self> {
        parse_condition(&expr)
    }
}

impl From<Condition> for String {
    fn from(condition: Condition) -> Self {
        condition.to_string()
    }
}

/// Deepest parenthesis nesting accepted in an expression
pub const MAX_NESTING: usize = 32;

/// Parse a condition expression
///
/// Grammar (tokens are whitespace separated, parentheses may touch words):
/// - `always` / `never`
/// - `skillLevel == <level>` / `skillLevel != <level>`
/// - `goals contains <tag>` / `fears contains <tag>`; a tag may be a
///   double-quoted string with `\"` and `\\` escapes
/// - `a && b` binds tighter than `a || b`; `( ... )` groups
pub fn parse_condition(expr: &str) -> Result<Condition> {
    let tokens = tokenize(expr)?;
    if tokens.is_empty() {
        return Err(invalid(expr, "empty expression"));
    }

    let mut parser = Parser {
        expr,
        tokens,
        pos: 0,
        depth: 0,
    };
    let condition = parser.parse_any()?;
    if let Some(extra) = parser.peek() {
        return Err(invalid(expr, &format!("unexpected token '{}'", extra)));
    }
    Ok(condition)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    Open,
    Close,
    Word(&'a str),
    Quoted(String),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Open => f.write_str("("),
            Token::Close => f.write_str(")"),
            Token::Word(word) => f.write_str(word),
            Token::Quoted(text) => write!(f, "{:?}", text),
        }
    }
}

fn tokenize(expr: &str) -> Result<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut chars = expr.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '(' => {
                chars.next();
                tokens.push(Token::Open);
            }
            ')' => {
                chars.next();
                tokens.push(Token::Close);
            }
            '"' => {
                chars.next();
                let mut text = String::new();
                loop {
                    match chars.next() {
                        Some((_, '"')) => break,
                        Some((_, '\\')) => match chars.next() {
                            Some((_, escaped)) => text.push(escaped),
                            None => return Err(invalid(expr, "unterminated string")),
                        },
                        Some((_, other)) => text.push(other),
                        None => return Err(invalid(expr, "unterminated string")),
                    }
                }
                tokens.push(Token::Quoted(text));
            }
            _ => {
                let mut end = expr.len();
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_whitespace() || matches!(c, '(' | ')' | '"') {
                        end = i;
                        break;
                    }
                    chars.next();
                }
                tokens.push(Token::Word(&expr[start..end]));
            }
        }
    }

    Ok(tokens)
}

struct Parser<'a> {
    expr: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn peek_word(&self) -> Option<&'a str> {
        match self.peek() {
            Some(Token::Word(word)) => Some(*word),
            _ => None,
        }
    }

    fn next(&mut self) -> Result<Token<'a>> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or_else(|| invalid(self.expr, "unexpected end of expression"))?;
        self.pos += 1;
        Ok(token)
    }

    fn next_word(&mut self) -> Result<&'a str> {
        match self.next()? {
            Token::Word(word) => Ok(word),
            other => Err(invalid(self.expr, &format!("unexpected token '{}'", other))),
        }
    }

    fn parse_any(&mut self) -> Result<Condition> {
        let mut terms = vec![self.parse_all()?];
        while self.peek_word() == Some("||") {
            self.pos += 1;
            terms.push(self.parse_all()?);
        }
        Ok(collapse(terms, Condition::any))
    }

    fn parse_all(&mut self) -> Result<Condition> {
        let mut terms = vec![self.parse_term()?];
        while self.peek_word() == Some("&&") {
            self.pos += 1;
            terms.push(self.parse_term()?);
        }
        Ok(collapse(terms, Condition::all))
    }

    fn parse_term(&mut self) -> Result<Condition> {
        let word = match self.next()? {
            Token::Open => return self.parse_group(),
            Token::Word(word) => word,
            other => return Err(invalid(self.expr, &format!("unexpected token '{}'", other))),
        };

        match word {
            "always" => Ok(Condition::Always),
            "never" => Ok(Condition::Any(Vec::new())),
            "skillLevel" => {
                let operator = match self.next_word()? {
                    "==" => SkillOperator::Eq,
                    "!=" => SkillOperator::Ne,
                    op => {
                        return Err(invalid(
                            self.expr,
                            &format!("unknown operator '{}' for skillLevel", op),
                        ))
                    }
                };
                let value = self.next_word()?;
                let level = SkillLevel::from_id(value)
                    .ok_or_else(|| invalid(self.expr, &format!("unknown skill level '{}'", value)))?;
                Ok(Condition::Skill { operator, level })
            }
            field @ ("goals" | "fears") => {
                let op = self.next_word()?;
                if op != "contains" {
                    return Err(invalid(
                        self.expr,
                        &format!("unknown operator '{}' for {}", op, field),
                    ));
                }
                let tag = match self.next()? {
                    Token::Word(word) if !matches!(word, "||" | "&&") => word.to_string(),
                    Token::Quoted(text) => text,
                    other => {
                        return Err(invalid(self.expr, &format!("expected tag, found '{}'", other)))
                    }
                };
                let field = if field == "goals" {
                    TagField::Goals
                } else {
                    TagField::Fears
                };
                Ok(Condition::Contains { field, tag })
            }
            other => Err(invalid(self.expr, &format!("unknown term '{}'", other))),
        }
    }

    fn parse_group(&mut self) -> Result<Condition> {
        if self.depth >= MAX_NESTING {
            return Err(invalid(self.expr, "nesting too deep"));
        }
        self.depth += 1;
        let inner = self.parse_any()?;
        self.depth -= 1;

        match self.next()? {
            Token::Close => Ok(inner),
            other => Err(invalid(self.expr, &format!("expected ')', found '{}'", other))),
        }
    }
}

fn collapse(mut terms: Vec<Condition>, wrap: fn(Vec<Condition>) -> Condition) -> Condition {
    if terms.len() == 1 {
        terms.remove(0)
    } else {
        wrap(terms)
    }
}

fn invalid(expr: &str, reason: &str) -> PaceError {
    PaceError::InvalidCondition {
        expr: expr.to_string(),
        reason: reason.to_string(),
    }
}
