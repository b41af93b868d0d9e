//! Line-start markers: headings, rules and lists
//!
//!     `#` runs become headings, three or more dashes a horizontal rule, `- ` and `1. ` open
//!     lists. Once a list is open, each following line starts in a prep state that measures
//!     indentation (a space is one unit, a tab four) and reads the next marker:
//!
//!         indent >= level + 4     a nested list opens inside the current item
//!         indent <  level + 4     the item closes, along with every list deeper than the
//!                                 indentation rounded down to a multiple of four
//!         blank line              every open list closes
//!
//!     `>` as a marker quotes the rest of the line inside the current item.

use super::data;
use crate::mdtree::ast::{Attribute, ElementKind, HeadingLevel};
use crate::mdtree::error::ParseResult;
use crate::mdtree::parsing::context::{Context, INDENT_WIDTH};
use crate::mdtree::parsing::state::{ReturnState, State};
use crate::mdtree::token::Token;

const RULE_MIN: usize = 3;

pub(crate) fn hashtag(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        '#' if ctx.counter < HeadingLevel::ALL.len() => ctx.counter += 1,
        ' ' => match HeadingLevel::from_marker_count(ctx.counter) {
            Some(level) => {
                ctx.close_paragraph()?;
                ctx.route(
                    Token::open(ElementKind::Heading(level))
                        .with_attribute(Attribute::Bold)
                        .with_attribute(Attribute::FontSize(level)),
                )?;
                ctx.counter = 0;
                ctx.state = State::Data;
            }
            None => {
                abandon_hashtag(ctx);
                ctx.reconsume();
            }
        },
        '\n' => {
            let literal = "#".repeat(ctx.counter);
            ctx.demote_unterminated(literal, None)?;
        }
        _ => {
            abandon_hashtag(ctx);
            ctx.reconsume();
        }
    }
    Ok(())
}

pub(super) fn abandon_hashtag(ctx: &mut Context) {
    ctx.consumed = "#".repeat(ctx.counter);
    ctx.counter = 0;
    ctx.resume();
}

/// Lists and rules start at block level only.
fn at_block_level(ctx: &Context) -> bool {
    matches!(
        ctx.current_element(),
        ElementKind::Document | ElementKind::Paragraph
    )
}

pub(crate) fn horizontal_line(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        '-' => ctx.counter += 1,
        '\n' if ctx.counter >= RULE_MIN => {
            ctx.close_paragraph()?;
            ctx.route(Token::open(ElementKind::HorizontalRule))?;
            ctx.route(Token::close(ElementKind::HorizontalRule))?;
            ctx.counter = 0;
            ctx.resume();
            ctx.reconsume();
        }
        ' ' | '\t' if ctx.counter == 1 && at_block_level(ctx) => {
            open_list(ctx, ElementKind::UnorderedList)?;
        }
        _ => {
            abandon_rule(ctx);
            ctx.reconsume();
        }
    }
    Ok(())
}

pub(super) fn abandon_rule(ctx: &mut Context) {
    ctx.consumed = "-".repeat(ctx.counter);
    ctx.counter = 0;
    ctx.resume();
}

/// Start a top-level list. The Data return pushed by the marker stays below the prep
/// state and is resumed once the list closes.
fn open_list(ctx: &mut Context, kind: ElementKind) -> ParseResult<()> {
    ctx.close_paragraph()?;
    ctx.consumed.clear();
    ctx.route(Token::open(kind))?;
    ctx.route(Token::open(ElementKind::ListItem))?;
    ctx.push_return(prep_for(kind));
    ctx.setup_list_parsing();
    ctx.state = State::Data;
    Ok(())
}

fn prep_for(kind: ElementKind) -> ReturnState {
    if kind == ElementKind::OrderedList {
        ReturnState::OrderedListPrep
    } else {
        ReturnState::UnorderedListPrep
    }
}

pub(crate) fn consuming_number(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        digit if digit.is_ascii_digit() => ctx.consumed.push(digit),
        '.' => {
            ctx.consumed.push('.');
            ctx.state = State::OrdinalNumber;
        }
        '\n' => number_at_line_end(ctx)?,
        _ => {
            abandon_number(ctx)?;
            ctx.reconsume();
        }
    }
    Ok(())
}

pub(crate) fn ordinal_number(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        ' ' | '\t' if ctx.list_continuation => {
            ctx.consumed.clear();
            ctx.list_continuation = false;
            continue_list(ctx, ElementKind::OrderedList)?;
        }
        ' ' | '\t' if at_block_level(ctx) => open_list(ctx, ElementKind::OrderedList)?,
        '\n' => number_at_line_end(ctx)?,
        _ => {
            abandon_number(ctx)?;
            ctx.reconsume();
        }
    }
    Ok(())
}

/// The digits read so far stay as text of the resumed state. A number that was meant to
/// continue a list ends the list instead.
pub(super) fn abandon_number(ctx: &mut Context) -> ParseResult<()> {
    end_continuation(ctx)?;
    ctx.resume();
    Ok(())
}

fn end_continuation(ctx: &mut Context) -> ParseResult<()> {
    if ctx.list_continuation {
        ctx.list_continuation = false;
        ctx.close_all_lists()?;
        ctx.setup_list_parsing();
    }
    Ok(())
}

fn number_at_line_end(ctx: &mut Context) -> ParseResult<()> {
    end_continuation(ctx)?;
    let literal = std::mem::take(&mut ctx.consumed);
    ctx.demote_unterminated(literal, None)
}

/// Indentation and marker at the start of a line inside a list.
pub(crate) fn list_prep(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        '\n' => {
            ctx.close_all_lists()?;
            ctx.resume();
            ctx.setup_list_parsing();
        }
        ' ' => ctx.indent += 1,
        '\t' => ctx.indent += INDENT_WIDTH,
        '*' | '+' | '-' | '>' | '0'..='9' if too_deep(ctx) => {
            abandon_prep(ctx)?;
            ctx.consumed.push(ch);
        }
        '*' | '+' | '-' | '>' => {
            ctx.list_marker = ch;
            ctx.state = State::UnorderedList;
        }
        digit if digit.is_ascii_digit() => {
            ctx.consumed.push(digit);
            ctx.list_continuation = true;
            ctx.state = State::ConsumingNumber;
        }
        _ => {
            abandon_prep(ctx)?;
            ctx.reconsume();
        }
    }
    Ok(())
}

/// A marker may nest at most one level deeper than the innermost list.
fn too_deep(ctx: &Context) -> bool {
    ctx.indent > ctx.indent_level + INDENT_WIDTH
}

pub(super) fn abandon_prep(ctx: &mut Context) -> ParseResult<()> {
    ctx.close_all_lists()?;
    ctx.setup_list_parsing();
    ctx.resume();
    Ok(())
}

/// After a marker: whitespace confirms the item, anything else ends the list and the
/// marker is read again as ordinary block-level input.
pub(crate) fn unordered_list(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        ' ' | '\t' if ctx.list_marker == '>' => quote_in_item(ctx)?,
        ' ' | '\t' => continue_list(ctx, ElementKind::UnorderedList)?,
        _ => {
            ctx.close_all_lists()?;
            ctx.setup_list_parsing();
            ctx.resume();
            let marker = ctx.list_marker;
            data::data(ctx, marker)?;
            ctx.reconsume();
        }
    }
    Ok(())
}

pub(super) fn abandon_marker(ctx: &mut Context) -> ParseResult<()> {
    abandon_prep(ctx)?;
    ctx.consumed.push(ctx.list_marker);
    Ok(())
}

/// Open the next item at the indentation measured by the prep state.
fn continue_list(ctx: &mut Context, kind: ElementKind) -> ParseResult<()> {
    if ctx.indent >= ctx.indent_level + INDENT_WIDTH {
        ctx.indent_level += INDENT_WIDTH;
        ctx.route(Token::open(kind))?;
    } else {
        let target = ctx.indent - ctx.indent % INDENT_WIDTH;
        let levels = (ctx.indent_level - target) / INDENT_WIDTH;
        ctx.indent_level = target;
        ctx.close_list_item()?;
        for _ in 0..levels {
            ctx.close_list()?;
            ctx.close_list_item()?;
        }
        tracing::trace!(levels, indent_level = ctx.indent_level, "list de-indented");
    }
    ctx.route(Token::open(ElementKind::ListItem))?;
    ctx.indent = 0;
    let prep = enclosing_prep(ctx);
    ctx.push_return(prep);
    ctx.state = State::Data;
    Ok(())
}

/// `> text` on a list line quotes the text inside the item that is still open.
fn quote_in_item(ctx: &mut Context) -> ParseResult<()> {
    let prep = enclosing_prep(ctx);
    ctx.indent = 0;
    ctx.blockquote_in_list = true;
    ctx.route(Token::open(ElementKind::Span).with_attribute(Attribute::BlockQuote))?;
    ctx.push_return(prep);
    ctx.state = State::Data;
    Ok(())
}

fn enclosing_prep(ctx: &Context) -> ReturnState {
    let list = ctx
        .router
        .parent_element()
        .filter(|kind| kind.is_list())
        .unwrap_or(ElementKind::UnorderedList);
    prep_for(list)
}
