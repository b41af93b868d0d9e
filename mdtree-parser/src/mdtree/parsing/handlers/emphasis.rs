//! Emphasis: `*italic*`, `**bold**`, `***bold italic***`
//!
//!     Each arity has an opener state, which counts the leading stars, and a data state,
//!     which accumulates text and counts trailing stars. A trailing run shorter than the
//!     arity that is interrupted goes back into the text as literal stars.

use crate::mdtree::ast::{Attribute, ElementKind};
use crate::mdtree::error::ParseResult;
use crate::mdtree::parsing::context::Context;
use crate::mdtree::parsing::state::State;
use crate::mdtree::token::Token;

const UNCLOSED: &str = "Unclosed '*' emphasis, treating it as plain text";

fn stars(count: usize) -> String {
    "*".repeat(count)
}

/// Arity of the construct a state belongs to.
fn arity(state: State) -> usize {
    match state {
        State::DoubleAsterisk | State::DoubleAsteriskData => 2,
        State::TripleAsterisk | State::TripleAsteriskData => 3,
        _ => 1,
    }
}

/// Move from an opener state to its data state.
pub(super) fn enter_data(ctx: &mut Context) {
    ctx.state = match ctx.state {
        State::DoubleAsterisk => State::DoubleAsteriskData,
        State::TripleAsterisk => State::TripleAsteriskData,
        _ => State::AsteriskData,
    };
}

/// Re-insert a trailing star run that turned out not to close the span.
pub(super) fn flush_pending_stars(ctx: &mut Context) {
    if ctx.counter > 0 {
        ctx.consumed.push_str(&stars(ctx.counter));
        ctx.counter = 0;
    }
}

/// The literal text seen so far, opening stars included.
fn literal(ctx: &Context) -> String {
    let opening = arity(ctx.state);
    match ctx.state {
        State::AsteriskData | State::DoubleAsteriskData | State::TripleAsteriskData => {
            format!("{}{}{}", stars(opening), ctx.consumed, stars(ctx.counter))
        }
        _ => stars(opening),
    }
}

/// Newline or cell boundary before the span closed.
fn unterminated(ctx: &mut Context, ch: char) -> ParseResult<()> {
    let text = literal(ctx);
    if ch == '\n' {
        ctx.demote_unterminated(text, Some(UNCLOSED))
    } else {
        ctx.close_cell_on_pipe(text, UNCLOSED)
    }
}

fn opener(ctx: &mut Context, ch: char, next_arity: Option<State>) -> ParseResult<()> {
    match ch {
        '*' => match next_arity {
            Some(state) => ctx.state = state,
            None => {
                // `****` with nothing inside
                ctx.consumed.push_str(&stars(4));
                ctx.resume();
            }
        },
        '\n' => unterminated(ctx, ch)?,
        '|' if ctx.returns.in_table_cell() => unterminated(ctx, ch)?,
        other => {
            ctx.consumed.push(other);
            enter_data(ctx);
        }
    }
    Ok(())
}

pub(crate) fn asterisk(ctx: &mut Context, ch: char) -> ParseResult<()> {
    opener(ctx, ch, Some(State::DoubleAsterisk))
}

pub(crate) fn double_asterisk(ctx: &mut Context, ch: char) -> ParseResult<()> {
    opener(ctx, ch, Some(State::TripleAsterisk))
}

pub(crate) fn triple_asterisk(ctx: &mut Context, ch: char) -> ParseResult<()> {
    opener(ctx, ch, None)
}

fn span_data(ctx: &mut Context, ch: char, attributes: &[Attribute]) -> ParseResult<()> {
    match ch {
        '*' => {
            ctx.counter += 1;
            if ctx.counter == attributes_arity(attributes) {
                ctx.counter = 0;
                let open = attributes
                    .iter()
                    .fold(Token::open(ElementKind::Span), |token, &attr| {
                        token.with_attribute(attr)
                    });
                ctx.emit_inline(open)?;
                ctx.resume();
            }
        }
        '\n' => unterminated(ctx, ch)?,
        '|' if ctx.returns.in_table_cell() => unterminated(ctx, ch)?,
        other => {
            flush_pending_stars(ctx);
            ctx.consumed.push(other);
        }
    }
    Ok(())
}

fn attributes_arity(attributes: &[Attribute]) -> usize {
    match attributes {
        [Attribute::Italic] => 1,
        [Attribute::Bold] => 2,
        _ => 3,
    }
}

pub(crate) fn asterisk_data(ctx: &mut Context, ch: char) -> ParseResult<()> {
    span_data(ctx, ch, &[Attribute::Italic])
}

pub(crate) fn double_asterisk_data(ctx: &mut Context, ch: char) -> ParseResult<()> {
    span_data(ctx, ch, &[Attribute::Bold])
}

pub(crate) fn triple_asterisk_data(ctx: &mut Context, ch: char) -> ParseResult<()> {
    span_data(ctx, ch, &[Attribute::Bold, Attribute::Italic])
}
