//! State handlers
//!
//!     One transition function per [State]. A handler consumes a single character, updates the
//!     [Context] and may emit tokens. Handlers are grouped by construct:
//!
//!         data       running text, blockquotes, table start, line ends
//!         emphasis   `*`, `**`, `***`
//!         code       inline code and fenced blocks
//!         links      `[text](target "title")` and `![alt](src "title")`
//!         lists      headings, rules, list markers and indentation
//!         tables     header names, separator row, cells
//!
//!     Dispatch goes through [HANDLERS], a dense table indexed by the state's discriminant.
//!     Each entry repeats its state so a misordered table is caught instead of silently
//!     running the wrong handler.

mod code;
mod data;
mod emphasis;
mod links;
mod lists;
mod tables;

use super::context::Context;
use super::state::State;
use crate::mdtree::error::{ParseError, ParseResult};

pub(crate) type Handler = fn(&mut Context, char) -> ParseResult<()>;

pub(crate) static HANDLERS: [(State, Handler); State::COUNT] = [
    (State::Data, data::data as Handler),
    (State::Hashtag, lists::hashtag as Handler),
    (State::Asterisk, emphasis::asterisk as Handler),
    (State::AsteriskData, emphasis::asterisk_data as Handler),
    (State::DoubleAsterisk, emphasis::double_asterisk as Handler),
    (State::DoubleAsteriskData, emphasis::double_asterisk_data as Handler),
    (State::TripleAsterisk, emphasis::triple_asterisk as Handler),
    (State::TripleAsteriskData, emphasis::triple_asterisk_data as Handler),
    (State::ConsumingNumber, lists::consuming_number as Handler),
    (State::OrdinalNumber, lists::ordinal_number as Handler),
    (State::HorizontalLine, lists::horizontal_line as Handler),
    (State::Backtick, code::backtick as Handler),
    (State::DoubleBacktick, code::double_backtick as Handler),
    (State::CodeInline, code::code_inline as Handler),
    (State::CodeBlock, code::code_block as Handler),
    (State::UnorderedListPrep, lists::list_prep as Handler),
    (State::UnorderedList, lists::unordered_list as Handler),
    (State::OrderedListPrep, lists::list_prep as Handler),
    (State::Image, links::image as Handler),
    (State::AltOpenSquared, links::alt_open_squared as Handler),
    (State::AltClosedSquared, links::alt_closed_squared as Handler),
    (State::UrlOpenRound, links::url_open_round as Handler),
    (State::TitleOpenRound, links::title_open_round as Handler),
    (State::TitleConsuming, links::title_consuming as Handler),
    (State::TitleClosedRound, links::title_closed_round as Handler),
    (State::TableHeaderNames, tables::header_names as Handler),
    (State::TableHeaderSeparationPipeAwaiting, tables::separation_pipe_awaiting as Handler),
    (State::TableHeaderSeparation, tables::separation as Handler),
    (State::TableCellPipeAwaiting, tables::cell_pipe_awaiting as Handler),
    (State::TableCellData, tables::cell_data as Handler),
];

/// Run the handler bound to the current state.
pub(crate) fn dispatch(ctx: &mut Context, ch: char) -> ParseResult<()> {
    let state = ctx.state;
    match HANDLERS.get(state as usize) {
        Some(&(key, handler)) if key == state => handler(ctx, ch),
        _ => Err(ParseError::StateTableMismatch { state }),
    }
}

/// Append an escaped character to whatever the current state accumulates.
///
/// States that only recognise a fixed marker give up first, exactly as they would on any
/// other unexpected character, and the character lands in the resumed state's text.
pub(crate) fn push_escaped(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ctx.state {
        State::AltOpenSquared => ctx.alt.push(ch),
        State::UrlOpenRound => ctx.src.push(ch),
        State::TitleConsuming => ctx.title.push(ch),
        State::Asterisk | State::DoubleAsterisk | State::TripleAsterisk => {
            emphasis::enter_data(ctx);
            ctx.consumed.push(ch);
        }
        State::DoubleAsteriskData | State::TripleAsteriskData => {
            emphasis::flush_pending_stars(ctx);
            ctx.consumed.push(ch);
        }
        State::Data
        | State::AsteriskData
        | State::Backtick
        | State::CodeInline
        | State::CodeBlock
        | State::TableHeaderNames
        | State::TableCellData => ctx.consumed.push(ch),
        _ => {
            abandon(ctx)?;
            ctx.consumed.push(ch);
        }
    }
    Ok(())
}

/// Give up on a marker-recognising state, turning what it saw into pending literal text
/// and resuming the state it was entered from.
pub(crate) fn abandon(ctx: &mut Context) -> ParseResult<()> {
    match ctx.state {
        State::Hashtag => lists::abandon_hashtag(ctx),
        State::HorizontalLine => lists::abandon_rule(ctx),
        State::ConsumingNumber | State::OrdinalNumber => lists::abandon_number(ctx)?,
        State::UnorderedListPrep | State::OrderedListPrep => lists::abandon_prep(ctx)?,
        State::UnorderedList => lists::abandon_marker(ctx)?,
        State::DoubleBacktick => code::abandon_double_backtick(ctx),
        State::Image | State::AltClosedSquared | State::TitleOpenRound | State::TitleClosedRound => {
            links::abandon_link(ctx)
        }
        State::TableHeaderSeparationPipeAwaiting | State::TableHeaderSeparation => {
            tables::abandon_separator(ctx)?
        }
        State::TableCellPipeAwaiting => tables::end_table(ctx)?,
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_table_is_ordered_by_state() {
        for (index, (state, _)) in HANDLERS.iter().enumerate() {
            assert_eq!(*state as usize, index, "{state:?} is out of place");
        }
    }

    #[test]
    fn escape_in_marker_state_resumes_with_literal() {
        let mut ctx = Context::new();
        ctx.push_return(crate::mdtree::parsing::state::ReturnState::Data);
        ctx.state = State::Hashtag;
        ctx.counter = 2;
        push_escaped(&mut ctx, '*').unwrap();
        assert_eq!(ctx.state, State::Data);
        assert_eq!(ctx.consumed, "##*");
    }

    #[test]
    fn escape_in_link_target_goes_to_the_target() {
        let mut ctx = Context::new();
        ctx.state = State::UrlOpenRound;
        push_escaped(&mut ctx, ')').unwrap();
        assert_eq!(ctx.src, ")");
        assert!(ctx.consumed.is_empty());
    }
}
