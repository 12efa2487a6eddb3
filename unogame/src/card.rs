use core::fmt;
use std::fmt::Display;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

use crate::error::{Result, UnoError};

#[derive(Clone, Copy, Debug, Display, EnumCountMacro, EnumIter, PartialEq, Eq, Hash)]
pub enum CardColor {
    Red,
    Yellow,
    Green,
    Blue,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColoredCard {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
}

impl ColoredCard {
    pub fn into_played_card(self, color: CardColor) -> PlayedCard {
        PlayedCard::Colored(color, self)
    }
}

impl Display for ColoredCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColoredCard::Number(number) => write!(f, "{number}"),
            ColoredCard::Skip => write!(f, "Skip"),
            ColoredCard::Reverse => write!(f, "Reverse"),
            ColoredCard::DrawTwo => write!(f, "+2"),
        }
    }
}

/// A card as it sits in the deck or in a hand.
///
/// Only wild cards lack a color, so a colorless number or action card cannot be built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Card {
    Colored(CardColor, ColoredCard),
    Wild,
    WildDrawFour,
}

impl Card {
    pub fn is_wild(&self) -> bool {
        matches!(self, Card::Wild | Card::WildDrawFour)
    }

    pub fn color(&self) -> Option<CardColor> {
        match self {
            Card::Colored(color, _) => Some(*color),
            Card::Wild | Card::WildDrawFour => None,
        }
    }

    /// Whether this card may be played on top of `active`.
    ///
    /// Matches on color or on value; wild cards always match.
    pub fn can_be_played_on(&self, active: &PlayedCard) -> bool {
        match self {
            Card::Wild | Card::WildDrawFour => true,
            Card::Colored(color, value) => match active {
                PlayedCard::Colored(active_color, active_value) => {
                    color == active_color || value == active_value
                }
                PlayedCard::Wild(active_color) | PlayedCard::WildDrawFour(active_color) => {
                    color == active_color
                }
            },
        }
    }

    /// Turns the card into the active card, binding `chosen_color` onto wilds.
    pub fn bind_color(self, chosen_color: Option<CardColor>) -> Result<PlayedCard> {
        match (self, chosen_color) {
            (Card::Colored(color, card), None) => Ok(card.into_played_card(color)),
            (Card::Colored(..), Some(_)) => Err(UnoError::UnexpectedColorChoice(self)),
            (Card::Wild, Some(color)) => Ok(PlayedCard::Wild(color)),
            (Card::WildDrawFour, Some(color)) => Ok(PlayedCard::WildDrawFour(color)),
            (Card::Wild | Card::WildDrawFour, None) => Err(UnoError::ColorChoiceRequired(self)),
        }
    }
}

/// The card on top of the table. Wilds carry the color chosen when they were played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayedCard {
    Colored(CardColor, ColoredCard),
    Wild(CardColor),
    WildDrawFour(CardColor),
}

impl PlayedCard {
    pub fn color(&self) -> CardColor {
        match self {
            PlayedCard::Colored(color, _) => *color,
            PlayedCard::Wild(color) => *color,
            PlayedCard::WildDrawFour(color) => *color,
        }
    }

    /// The card as it goes back to the discard pile, with any chosen color dropped.
    pub fn into_card(self) -> Card {
        match self {
            PlayedCard::Colored(color, card) => Card::Colored(color, card),
            PlayedCard::Wild(_) => Card::Wild,
            PlayedCard::WildDrawFour(_) => Card::WildDrawFour,
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Colored(color, card) => write!(f, "{color} {card}"),
            Card::Wild => write!(f, "Wild"),
            Card::WildDrawFour => write!(f, "+4"),
        }
    }
}

impl Display for PlayedCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayedCard::Colored(color, card) => write!(f, "{color} {card}"),
            PlayedCard::Wild(color) => write!(f, "Wild ({color})"),
            PlayedCard::WildDrawFour(color) => write!(f, "+4 ({color})"),
        }
    }
}
