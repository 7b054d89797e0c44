//! Conversion logic between DTOs and domain entities.

use crate::domain::{
    LobbyView, Message, Sender, ValueObjectError,
    value_object::{LobbyId, MessageBody, MessageId, SenderName, Timestamp},
};
use crate::infrastructure::dto::{http as dto, row};

// ========================================
// Row DTO → Domain Entity
// ========================================

impl TryFrom<row::MessageRow> for Message {
    type Error = ValueObjectError;

    fn try_from(row: row::MessageRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: MessageId::new(row.id),
            lobby_id: LobbyId::new(row.lobby_id)?,
            sender_name: SenderName::new(row.sender_name)?,
            body: MessageBody::new(row.body)?,
            timestamp: Timestamp::new(row.timestamp),
        })
    }
}

impl TryFrom<row::SenderRow> for Sender {
    type Error = ValueObjectError;

    fn try_from(row: row::SenderRow) -> Result<Self, Self::Error> {
        Ok(Self {
            name: SenderName::new(row.name)?,
            lobby_id: LobbyId::new(row.lobby_id)?,
            is_typing: row.is_typing,
        })
    }
}

// ========================================
// Domain Entity → HTTP DTO
// ========================================

impl From<Message> for dto::MessageDto {
    fn from(model: Message) -> Self {
        Self {
            message_id: model.id.value(),
            lobby_id: model.lobby_id.into_string(),
            sender_name: model.sender_name.into_string(),
            message_content: model.body.into_string(),
            timestamp: model.timestamp.value(),
        }
    }
}

impl From<Sender> for dto::SenderDto {
    fn from(model: Sender) -> Self {
        Self {
            name: model.name.into_string(),
            lobby_id: model.lobby_id.into_string(),
            is_typing: model.is_typing,
        }
    }
}

impl From<LobbyView> for dto::LobbyViewDto {
    fn from(model: LobbyView) -> Self {
        Self {
            id: model.id.into_string(),
            messages: model.messages.into_iter().map(Into::into).collect(),
            senders: model.senders.into_iter().map(Into::into).collect(),
        }
    }
}
