//! Scanner states

/// Every state the scanner can be in. The discriminant indexes the handler table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Data,
    Hashtag,
    Asterisk,
    AsteriskData,
    DoubleAsterisk,
    DoubleAsteriskData,
    TripleAsterisk,
    TripleAsteriskData,
    ConsumingNumber,
    OrdinalNumber,
    HorizontalLine,
    Backtick,
    DoubleBacktick,
    CodeInline,
    CodeBlock,
    UnorderedListPrep,
    UnorderedList,
    OrderedListPrep,
    Image,
    AltOpenSquared,
    AltClosedSquared,
    UrlOpenRound,
    TitleOpenRound,
    TitleConsuming,
    TitleClosedRound,
    TableHeaderNames,
    TableHeaderSeparationPipeAwaiting,
    TableHeaderSeparation,
    TableCellPipeAwaiting,
    TableCellData,
}

impl State {
    pub const COUNT: usize = State::TableCellData as usize + 1;

    /// States where a backslash is an ordinary character.
    pub fn is_raw(self) -> bool {
        matches!(self, State::Backtick | State::CodeInline | State::CodeBlock)
    }
}

/// The states a nested construct may resume into.
///
/// Only these can be pushed on the return-state stack; anything else is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnState {
    Data,
    UnorderedListPrep,
    OrderedListPrep,
    TableHeaderNames,
    TableCellData,
}

impl ReturnState {
    pub fn is_table(self) -> bool {
        matches!(self, ReturnState::TableHeaderNames | ReturnState::TableCellData)
    }
}

impl From<ReturnState> for State {
    fn from(state: ReturnState) -> Self {
        match state {
            ReturnState::Data => State::Data,
            ReturnState::UnorderedListPrep => State::UnorderedListPrep,
            ReturnState::OrderedListPrep => State::OrderedListPrep,
            ReturnState::TableHeaderNames => State::TableHeaderNames,
            ReturnState::TableCellData => State::TableCellData,
        }
    }
}
