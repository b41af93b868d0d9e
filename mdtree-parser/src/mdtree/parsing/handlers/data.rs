//! Running text

use crate::mdtree::ast::{Attribute, ElementKind};
use crate::mdtree::error::ParseResult;
use crate::mdtree::parsing::context::Context;
use crate::mdtree::parsing::state::{ReturnState, State};
use crate::mdtree::token::Token;

pub(crate) fn data(ctx: &mut Context, ch: char) -> ParseResult<()> {
    match ch {
        '#' if ctx.at_line_start() => {
            ctx.push_return(ReturnState::Data);
            ctx.counter = 1;
            ctx.state = State::Hashtag;
        }
        '-' if ctx.at_line_start() => {
            ctx.push_return(ReturnState::Data);
            ctx.counter = 1;
            ctx.state = State::HorizontalLine;
        }
        '*' => {
            ctx.emit_content()?;
            ctx.push_return(ReturnState::Data);
            ctx.state = State::Asterisk;
        }
        '`' => {
            ctx.emit_content()?;
            ctx.push_return(ReturnState::Data);
            ctx.state = State::Backtick;
        }
        '[' => {
            ctx.emit_content()?;
            ctx.push_return(ReturnState::Data);
            ctx.is_image = false;
            ctx.state = State::AltOpenSquared;
        }
        '!' => {
            ctx.emit_content()?;
            ctx.push_return(ReturnState::Data);
            ctx.is_image = true;
            ctx.state = State::Image;
        }
        '>' if ctx.at_line_start() => {
            ctx.close_paragraph()?;
            ctx.route(Token::open(ElementKind::Span).with_attribute(Attribute::BlockQuote))?;
            ctx.push_return(ReturnState::Data);
        }
        '|' if ctx.consumed_is_blank() && !ctx.line_has_text && starts_table(ctx.current_element()) => {
            ctx.consumed.clear();
            ctx.close_paragraph()?;
            ctx.push_return(ReturnState::Data);
            ctx.route(Token::open(ElementKind::Table))?;
            ctx.route(Token::open(ElementKind::TableRow))?;
            ctx.route(Token::open(ElementKind::TableHead))?;
            ctx.state = State::TableHeaderNames;
        }
        '\n' => end_of_line(ctx)?,
        digit if digit.is_ascii_digit() && ctx.at_line_start() => {
            ctx.consumed.push(digit);
            ctx.push_return(ReturnState::Data);
            ctx.state = State::ConsumingNumber;
        }
        other => ctx.consumed.push(other),
    }
    Ok(())
}

fn starts_table(current: ElementKind) -> bool {
    matches!(current, ElementKind::Document | ElementKind::Paragraph)
}

/// Paragraph continuation: the line break that ends a paragraph's first line is not
/// counted, every later one is, and the paragraph closes on the break that finds one
/// already counted. A one-line paragraph therefore survives a single blank line, while a
/// paragraph spanning several lines closes at the first one. Everything else open on this
/// line (heading, blockquote, list item text) ends here.
fn end_of_line(ctx: &mut Context) -> ParseResult<()> {
    if ctx.consumed_is_blank() {
        ctx.consumed.clear();
    }
    let before = if ctx.paragraph_opened_on_line {
        ElementKind::Document
    } else {
        ctx.current_element()
    };
    ctx.emit_content()?;

    match before {
        ElementKind::Paragraph => {
            if ctx.newline_counter == 1 {
                ctx.route(Token::close(ElementKind::Paragraph))?;
            }
            ctx.newline_counter += 1;
        }
        ElementKind::Document => {}
        _ => ctx.end_line_scope()?,
    }
    Ok(())
}
