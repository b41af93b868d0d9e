//! Inline code spans and fenced code blocks

use crate::mdtree::ast::{Attribute, ElementKind};
use crate::mdtree::error::ParseResult;
use crate::mdtree::parsing::context::Context;
use crate::mdtree::parsing::state::State;
use crate::mdtree::token::Token;

const UNCLOSED_INLINE: &str = "Unclosed inline code, treating it as plain text";
const UNCLOSED_BLOCK: &str = "Unclosed code block, treating it as plain text";
const FENCE: usize = 3;

fn ticks(count: usize) -> String {
    "`".repeat(count)
}

pub(crate) fn backtick(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        // No fenced blocks inside a table row.
        '`' if ctx.returns.in_table_cell() => {
            ctx.consumed = ticks(2);
            ctx.emit_content()?;
            ctx.resume();
        }
        '`' => ctx.state = State::DoubleBacktick,
        '\n' => ctx.demote_unterminated(ticks(1), Some(UNCLOSED_INLINE))?,
        '|' if ctx.returns.in_table_cell() => ctx.close_cell_on_pipe(ticks(1), UNCLOSED_INLINE)?,
        other => {
            ctx.consumed.push(other);
            ctx.state = State::CodeInline;
        }
    }
    Ok(())
}

pub(crate) fn code_inline(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        '`' => {
            ctx.emit_inline(Token::open(ElementKind::CodeBlock).with_attribute(Attribute::Inline))?;
            ctx.resume();
        }
        '\n' => {
            let literal = format!("`{}", ctx.consumed);
            ctx.demote_unterminated(literal, Some(UNCLOSED_INLINE))?;
        }
        '|' if ctx.returns.in_table_cell() => {
            let literal = format!("`{}", ctx.consumed);
            ctx.close_cell_on_pipe(literal, UNCLOSED_INLINE)?;
        }
        other => ctx.consumed.push(other),
    }
    Ok(())
}

pub(crate) fn double_backtick(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        '`' => {
            ctx.counter = 0;
            ctx.state = State::CodeBlock;
        }
        '\n' => ctx.demote_unterminated(ticks(2), Some(UNCLOSED_INLINE))?,
        _ => {
            abandon_double_backtick(ctx);
            ctx.reconsume();
        }
    }
    Ok(())
}

/// An empty code span: both backticks stay literal.
pub(super) fn abandon_double_backtick(ctx: &mut Context) {
    ctx.consumed = ticks(2);
    ctx.resume();
}

pub(crate) fn code_block(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        '`' => {
            ctx.counter += 1;
            if ctx.counter == FENCE {
                ctx.counter = 0;
                emit_block(ctx)?;
                ctx.resume();
            }
        }
        '\n' if ctx.eof => {
            let literal = format!("{}{}{}", ticks(FENCE), ctx.consumed, ticks(ctx.counter));
            ctx.demote_unterminated(literal, Some(UNCLOSED_BLOCK))?;
        }
        other => {
            if ctx.counter > 0 {
                ctx.consumed.push_str(&ticks(ctx.counter));
                ctx.counter = 0;
            }
            ctx.consumed.push(other);
        }
    }
    Ok(())
}

/// A block sits wherever the cursor is; it does not open a paragraph of its own.
fn emit_block(ctx: &mut Context) -> ParseResult<()> {
    let body = std::mem::take(&mut ctx.consumed);
    let body = body.strip_prefix('\n').unwrap_or(&body).to_string();
    ctx.line_has_text = true;
    ctx.route(Token::open(ElementKind::CodeBlock).with_attribute(Attribute::Block))?;
    if !body.is_empty() {
        ctx.route(Token::content(body))?;
    }
    ctx.route(Token::close(ElementKind::CodeBlock))
}
