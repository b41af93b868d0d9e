//! Hyperlinks and images
//!
//!     `[text](target "title")` and `![alt](src "title")` share one chain of states. The
//!     `is_image` flag set on entry decides which element is emitted. The title part is
//!     optional. Whenever the chain breaks, everything read so far is replayed as literal text.

use crate::mdtree::error::ParseResult;
use crate::mdtree::parsing::context::Context;
use crate::mdtree::parsing::state::State;
use crate::mdtree::token::Token;

const UNCLOSED: &str = "Unclosed link, treating it as plain text";

/// Literal text for everything the link states have read so far.
fn literal_prefix(ctx: &Context) -> String {
    let bang = if ctx.is_image { "!" } else { "" };
    let body = match ctx.state {
        State::AltOpenSquared => format!("[{}", ctx.alt),
        State::AltClosedSquared => format!("[{}]", ctx.alt),
        State::UrlOpenRound => format!("[{}]({}", ctx.alt, ctx.src),
        State::TitleOpenRound => format!("[{}]({} ", ctx.alt, ctx.src),
        State::TitleConsuming => format!("[{}]({} \"{}", ctx.alt, ctx.src, ctx.title),
        State::TitleClosedRound => format!("[{}]({} \"{}\"", ctx.alt, ctx.src, ctx.title),
        _ => String::new(),
    };
    format!("{bang}{body}")
}

fn unterminated(ctx: &mut Context, warning: Option<&str>) -> ParseResult<()> {
    let literal = literal_prefix(ctx);
    ctx.demote_unterminated(literal, warning)
}

fn pipe_in_cell(ctx: &mut Context) -> ParseResult<()> {
    let literal = literal_prefix(ctx);
    ctx.close_cell_on_pipe(literal, UNCLOSED)
}

/// Give up on the link; what was read becomes pending text of the resumed state.
pub(super) fn abandon_link(ctx: &mut Context) {
    ctx.consumed = literal_prefix(ctx);
    ctx.clear_link();
    ctx.resume();
}

fn abandon_and_reconsume(ctx: &mut Context) {
    abandon_link(ctx);
    ctx.reconsume();
}

fn emit(ctx: &mut Context) -> ParseResult<()> {
    let src = std::mem::take(&mut ctx.src);
    let alt = std::mem::take(&mut ctx.alt);
    let title = std::mem::take(&mut ctx.title);
    let token = if ctx.is_image {
        Token::image(src, alt, title)
    } else {
        Token::hyperlink(src, alt, title)
    };
    ctx.emit_inline(token)?;
    ctx.clear_link();
    ctx.resume();
    Ok(())
}

pub(crate) fn image(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        '[' => ctx.state = State::AltOpenSquared,
        '\n' => unterminated(ctx, None)?,
        _ => abandon_and_reconsume(ctx),
    }
    Ok(())
}

pub(crate) fn alt_open_squared(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        ']' => ctx.state = State::AltClosedSquared,
        '\n' => unterminated(ctx, Some(UNCLOSED))?,
        '|' if ctx.returns.in_table_cell() => pipe_in_cell(ctx)?,
        other => ctx.alt.push(other),
    }
    Ok(())
}

pub(crate) fn alt_closed_squared(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        '(' => ctx.state = State::UrlOpenRound,
        '\n' => unterminated(ctx, None)?,
        _ => abandon_and_reconsume(ctx),
    }
    Ok(())
}

pub(crate) fn url_open_round(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        ')' => emit(ctx)?,
        ' ' => ctx.state = State::TitleOpenRound,
        '\n' => unterminated(ctx, Some(UNCLOSED))?,
        '|' if ctx.returns.in_table_cell() => pipe_in_cell(ctx)?,
        other => ctx.src.push(other),
    }
    Ok(())
}

pub(crate) fn title_open_round(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        '"' => ctx.state = State::TitleConsuming,
        '\n' => unterminated(ctx, Some(UNCLOSED))?,
        _ => abandon_and_reconsume(ctx),
    }
    Ok(())
}

pub(crate) fn title_consuming(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        '"' => ctx.state = State::TitleClosedRound,
        '\n' => unterminated(ctx, Some(UNCLOSED))?,
        '|' if ctx.returns.in_table_cell() => pipe_in_cell(ctx)?,
        other => ctx.title.push(other),
    }
    Ok(())
}

pub(crate) fn title_closed_round(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        ')' => emit(ctx)?,
        '\n' => unterminated(ctx, Some(UNCLOSED))?,
        _ => abandon_and_reconsume(ctx),
    }
    Ok(())
}
