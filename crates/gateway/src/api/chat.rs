//! `chat_v1.ChatV1` handlers.

use std::sync::Arc;

use parley_chats::ChatService;
use parley_proto::chat_v1::chat_v1_server::ChatV1;
use parley_proto::chat_v1::methods;
use parley_proto::chat_v1::{
    CreateRequest, CreateResponse, DeleteRequest, DeleteResponse, SendMessageRequest,
    SendMessageResponse,
};
use tonic::{Request, Response, Status};

use crate::converter;
use crate::error::GatewayError;
use crate::interceptor::InterceptorChain;

#[derive(Clone)]
pub struct ChatApi {
    service: Arc<dyn ChatService>,
    chain: InterceptorChain,
}

impl ChatApi {
    pub fn new(service: Arc<dyn ChatService>, chain: InterceptorChain) -> Self {
        Self { service, chain }
    }
}

#[tonic::async_trait]
impl ChatV1 for ChatApi {
    async fn create_chat(
        &self,
        request: Request<CreateRequest>,
    ) -> Result<Response<CreateResponse>, Status> {
        self.chain
            .run(methods::CREATE_CHAT, request, |message| async move {
                let chat_id = self
                    .service
                    .create_chat(converter::to_new_chat(message))
                    .await?;
                Ok::<_, GatewayError>(converter::to_create_response(chat_id))
            })
            .await
    }

    async fn delete_chat(
        &self,
        request: Request<DeleteRequest>,
    ) -> Result<Response<DeleteResponse>, Status> {
        self.chain
            .run(methods::DELETE_CHAT, request, |message| async move {
                self.service.delete_chat(message.id).await?;
                Ok::<_, GatewayError>(DeleteResponse {})
            })
            .await
    }

    async fn send_message(
        &self,
        request: Request<SendMessageRequest>,
    ) -> Result<Response<SendMessageResponse>, Status> {
        self.chain
            .run(methods::SEND_MESSAGE, request, |message| async move {
                let sent = self
                    .service
                    .send_message(converter::to_new_message(message))
                    .await?;
                Ok::<_, GatewayError>(converter::to_send_message_response(sent))
            })
            .await
    }
}
