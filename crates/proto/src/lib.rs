//! Generated gRPC bindings for the chat service and the access-control
//! service it consults.

pub mod chat_v1 {
    tonic::include_proto!("chat_v1");

    /// Fully-qualified method paths, as seen by server-side interceptors.
    pub mod methods {
        pub const CREATE_CHAT: &str = "/chat_v1.ChatV1/CreateChat";
        pub const DELETE_CHAT: &str = "/chat_v1.ChatV1/DeleteChat";
        pub const SEND_MESSAGE: &str = "/chat_v1.ChatV1/SendMessage";
    }
}

pub mod access_v1 {
    tonic::include_proto!("access_v1");
}
