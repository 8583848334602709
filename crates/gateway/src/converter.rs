//! Mapping between wire messages and domain values.

use parley_chats::SentMessage;
use parley_database::{NewChat, NewMessage};
use parley_proto::chat_v1::{CreateRequest, CreateResponse, SendMessageRequest, SendMessageResponse};

pub fn to_new_chat(request: CreateRequest) -> NewChat {
    NewChat {
        name: request.chat_name,
        member_ids: request.user_ids,
    }
}

pub fn to_new_message(request: SendMessageRequest) -> NewMessage {
    NewMessage {
        chat_id: request.to_chat_id,
        user_id: request.from_user_id,
        text: request.text,
    }
}

pub fn to_create_response(chat_id: i64) -> CreateResponse {
    CreateResponse { id: chat_id }
}

pub fn to_send_message_response(sent: SentMessage) -> SendMessageResponse {
    SendMessageResponse {
        id: sent.id,
        chat_id: sent.chat_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_keeps_member_order() {
        let chat = to_new_chat(CreateRequest {
            chat_name: "book-club".to_string(),
            user_ids: vec![3, 1, 3],
        });

        assert_eq!(chat.name, "book-club");
        assert_eq!(chat.member_ids, vec![3, 1, 3]);
    }

    #[test]
    fn test_send_message_request_fields() {
        let message = to_new_message(SendMessageRequest {
            to_chat_id: 9,
            from_user_id: 2,
            text: "hello".to_string(),
        });

        assert_eq!(message.chat_id, 9);
        assert_eq!(message.user_id, 2);
        assert_eq!(message.text, "hello");
    }
}
