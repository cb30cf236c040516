//! Owner-side board operations: lookup, validation and applying moves.

use std::collections::HashSet;

use super::error::BoardError;
use super::model::{Board, Card, CardId};
use crate::ui::reorder::MoveDescriptor;

impl Board {
    /// True `(column_index, card_index)` of a card.
    pub fn locate(&self, card_id: &CardId) -> Option<(usize, usize)> {
        self.columns.iter().enumerate().find_map(|(column_index, column)| {
            column
                .cards
                .iter()
                .position(|card| &card.id == card_id)
                .map(|card_index| (column_index, card_index))
        })
    }

    /// Rejects boards whose card ids are not unique.
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut seen = HashSet::new();
        for card in self.columns.iter().flat_map(|column| column.cards.iter()) {
            if !seen.insert(&card.id) {
                return Err(BoardError::DuplicateCardId(card.id.clone()));
            }
        }
        Ok(())
    }

    /// Relocates a card as described by `card_move`.
    ///
    /// The card is taken from `from_column_index`/`from_card_index` when it is
    /// actually there; otherwise it is found by id. It is inserted at
    /// `to_card_index`, clamped to the target column's length.
    pub fn apply_move(&mut self, card_move: &MoveDescriptor) -> Result<(), BoardError> {
        let len = self.columns.len();
        if card_move.to_column_index >= len {
            return Err(BoardError::UnknownColumn {
                index: card_move.to_column_index,
                len,
            });
        }

        let card = self.take_card(card_move)?;

        let target = &mut self.columns[card_move.to_column_index].cards;
        let insert_at = card_move.to_card_index.min(target.len());
        target.insert(insert_at, card);

        tracing::debug!(
            card_id = %card_move.card_id,
            to_column = card_move.to_column_index,
            to_card = insert_at,
            "Applied card move"
        );
        Ok(())
    }

    fn take_card(&mut self, card_move: &MoveDescriptor) -> Result<Card, BoardError> {
        let at_origin = self
            .column(card_move.from_column_index)
            .and_then(|column| column.cards.get(card_move.from_card_index))
            .is_some_and(|card| card.id == card_move.card_id);

        let (column_index, card_index) = if at_origin {
            (card_move.from_column_index, card_move.from_card_index)
        } else {
            let found = self
                .locate(&card_move.card_id)
                .ok_or_else(|| BoardError::UnknownCard(card_move.card_id.clone()))?;
            tracing::warn!(
                card_id = %card_move.card_id,
                recorded_column = card_move.from_column_index,
                recorded_card = card_move.from_card_index,
                actual_column = found.0,
                actual_card = found.1,
                "Move origin does not match card location, using actual location"
            );
            found
        };

        Ok(self.columns[column_index].cards.remove(card_index))
    }
}
