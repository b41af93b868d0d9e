//! Tables
//!
//!     A table is tried speculatively: a header row of `|`-separated names, a separator row
//!     with one run of at least three dashes per column, then any number of `|`-delimited
//!     body rows. Tokens go to the table builder until the table resolves. Resolution is
//!     a success when the table ends cleanly and a failure on any malformed row, in which
//!     case the broken row becomes a paragraph.
//!
//!     Whitespace at the edges of a cell is dropped; whitespace between inline elements is kept.

use crate::mdtree::ast::ElementKind;
use crate::mdtree::error::ParseResult;
use crate::mdtree::parsing::context::Context;
use crate::mdtree::parsing::router::TableResolution;
use crate::mdtree::parsing::state::{ReturnState, State};
use crate::mdtree::token::Token;

const DASH_MIN: usize = 3;
const ROW_NOT_CLOSED: &str = "Table row does not end with '|', treating it as plain text";
const NO_SEPARATOR: &str = "Table header has no separator row";
const BAD_SEPARATOR: &str = "Malformed table separator row";

fn is_blank(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Emit the cell text read so far, without trailing whitespace.
fn emit_cell_text(ctx: &mut Context) -> ParseResult<()> {
    let len = ctx.consumed.trim_end().len();
    ctx.consumed.truncate(len);
    ctx.emit_content()
}

fn next_cell(ctx: &mut Context, cell: ElementKind) -> ParseResult<()> {
    emit_cell_text(ctx)?;
    ctx.route(Token::close(cell))?;
    ctx.route(Token::open(cell))?;
    ctx.line_has_text = false;
    Ok(())
}

/// Hand an inline opener over to its state, to resume in `cell` afterwards.
fn enter_inline(ctx: &mut Context, ch: char, cell: ReturnState) -> ParseResult<bool> {
    let next = match ch {
        '*' => State::Asterisk,
        '`' => State::Backtick,
        '[' => State::AltOpenSquared,
        '!' => State::Image,
        _ => return Ok(false),
    };
    ctx.emit_content()?;
    ctx.push_return(cell);
    ctx.is_image = ch == '!';
    ctx.state = next;
    Ok(true)
}

/// Cell text, shared by header and body cells.
fn cell_text(ctx: &mut Context, ch: char, cell: ReturnState) -> ParseResult<()> {
    if enter_inline(ctx, ch, cell)? {
        return Ok(());
    }
    if is_blank(ch) && ctx.consumed.is_empty() && !ctx.line_has_text {
        return Ok(());
    }
    ctx.consumed.push(ch);
    Ok(())
}

pub(crate) fn header_names(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        '\n' if ctx.consumed_is_blank() => {
            ctx.consumed.clear();
            ctx.route(Token::close(ElementKind::TableHead))?;
            ctx.route(Token::close(ElementKind::TableRow))?;
            if ctx.eof {
                ctx.warn(NO_SEPARATOR);
                ctx.router.resolve_table(TableResolution::Failure)?;
                ctx.resume();
            } else {
                ctx.counter = 0;
                ctx.state = State::TableHeaderSeparationPipeAwaiting;
            }
        }
        '\n' => {
            ctx.warn(ROW_NOT_CLOSED);
            ctx.fail_table()?;
        }
        '|' => next_cell(ctx, ElementKind::TableHead)?,
        other => cell_text(ctx, other, ReturnState::TableHeaderNames)?,
    }
    Ok(())
}

pub(crate) fn separation_pipe_awaiting(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        ' ' | '\t' => ctx.consumed.push(ch),
        '|' => {
            ctx.consumed.push('|');
            ctx.counter = 0;
            ctx.separator_columns = 0;
            ctx.column_valid = false;
            ctx.state = State::TableHeaderSeparation;
        }
        _ => {
            ctx.warn(NO_SEPARATOR);
            abandon_separator(ctx)?;
            ctx.reconsume();
        }
    }
    Ok(())
}

pub(crate) fn separation(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        // A second run of dashes in one column.
        '-' if ctx.column_valid && ctx.consumed.ends_with(is_blank) => bad_separator(ctx)?,
        '-' => {
            ctx.consumed.push('-');
            ctx.counter += 1;
            if ctx.counter >= DASH_MIN {
                ctx.column_valid = true;
            }
        }
        ' ' | '\t' => {
            ctx.consumed.push(ch);
            ctx.counter = 0;
        }
        '|' if ctx.column_valid => {
            ctx.consumed.push('|');
            ctx.separator_columns += 1;
            ctx.column_valid = false;
            ctx.counter = 0;
        }
        '\n' if separator_complete(ctx) => {
            ctx.consumed.clear();
            ctx.counter = 0;
            ctx.route(Token::open(ElementKind::TableRow))?;
            if ctx.eof {
                end_table(ctx)?;
            } else {
                ctx.state = State::TableCellPipeAwaiting;
            }
        }
        _ => bad_separator(ctx)?,
    }
    Ok(())
}

/// One valid column per header cell and nothing after the last `|`.
fn separator_complete(ctx: &Context) -> bool {
    let tail_blank = ctx
        .consumed
        .rsplit('|')
        .next()
        .is_some_and(|tail| tail.chars().all(is_blank));
    ctx.separator_columns > 0
        && ctx.separator_columns == ctx.router.table_columns()
        && tail_blank
}

fn bad_separator(ctx: &mut Context) -> ParseResult<()> {
    ctx.warn(BAD_SEPARATOR);
    abandon_separator(ctx)?;
    ctx.reconsume();
    Ok(())
}

/// The header becomes a paragraph. The separator text read so far stays pending for the
/// resumed state.
pub(super) fn abandon_separator(ctx: &mut Context) -> ParseResult<()> {
    ctx.router.resolve_table(TableResolution::Failure)?;
    ctx.counter = 0;
    ctx.column_valid = false;
    ctx.separator_columns = 0;
    ctx.resume();
    Ok(())
}

pub(crate) fn cell_pipe_awaiting(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        '\n' => end_table(ctx)?,
        ' ' | '\t' => {}
        '|' => {
            ctx.route(Token::open(ElementKind::TableCell))?;
            ctx.line_has_text = false;
            ctx.state = State::TableCellData;
        }
        _ => {
            end_table(ctx)?;
            ctx.reconsume();
        }
    }
    Ok(())
}

/// Commit the table and resume the state it started from.
pub(super) fn end_table(ctx: &mut Context) -> ParseResult<()> {
    ctx.router.resolve_table(TableResolution::Success)?;
    ctx.counter = 0;
    ctx.resume();
    Ok(())
}

pub(crate) fn cell_data(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        '\n' if ctx.consumed_is_blank() => {
            ctx.consumed.clear();
            ctx.route(Token::close(ElementKind::TableCell))?;
            ctx.route(Token::close(ElementKind::TableRow))?;
            if ctx.eof {
                end_table(ctx)?;
            } else {
                ctx.route(Token::open(ElementKind::TableRow))?;
                ctx.state = State::TableCellPipeAwaiting;
            }
        }
        '\n' => {
            ctx.warn(ROW_NOT_CLOSED);
            ctx.fail_table()?;
        }
        '|' => next_cell(ctx, ElementKind::TableCell)?,
        other => cell_text(ctx, other, ReturnState::TableCellData)?,
    }
    Ok(())
}
